// src/cli.rs
use std::path::PathBuf;
use std::time::Duration;

use crate::config::options::ScrapeOptions;
use crate::core::render::WebDriverRenderer;
use crate::error::ScrapeError;
use crate::progress::LogProgress;
use crate::runner::{self, RunSummary};
use crate::session::Day;

pub enum Command {
    Run(ScrapeOptions),
    Help,
}

/// Env-derived defaults, overridden by `args` (program name excluded).
pub fn parse_args<I>(args: I) -> Result<Command, ScrapeError>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = ScrapeOptions::from_env();
    apply_args(&mut opts, args)
}

pub fn apply_args<I>(opts: &mut ScrapeOptions, args: I) -> Result<Command, ScrapeError>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        let mut value = |flag: &str| {
            args.next().ok_or_else(|| ScrapeError::Config(format!("Missing value for {flag}")))
        };
        match a.as_str() {
            "--base-url" => opts.base_url = Some(value("--base-url")?),
            "-o" | "--out" => opts.out_path = PathBuf::from(value("--out")?),
            "--day" => {
                let v = value("--day")?;
                opts.days = match v.to_ascii_lowercase().as_str() {
                    "1" | "day1" => vec![Day::Day1],
                    "2" | "day2" => vec![Day::Day2],
                    "all" => Day::ALL.to_vec(),
                    other => return Err(ScrapeError::Config(format!("Unknown day: {other}"))),
                };
            }
            "--delay-ms" => {
                let v = value("--delay-ms")?;
                let ms: u64 = v
                    .parse()
                    .map_err(|_| ScrapeError::Config(format!("Invalid --delay-ms: {v}")))?;
                opts.render.delay = Duration::from_millis(ms);
            }
            "--webdriver" => opts.render.webdriver_url = value("--webdriver")?,
            "-h" | "--help" => return Ok(Command::Help),
            _ => return Err(ScrapeError::Config(format!("Unknown arg: {a}"))),
        }
    }
    Ok(Command::Run(opts.clone()))
}

pub fn help_text() -> &'static str {
    include_str!("cli_help.txt")
}

/// Scrape with a real browser and write the CSV.
pub fn run(opts: &ScrapeOptions) -> Result<RunSummary, ScrapeError> {
    let renderer =
        WebDriverRenderer::new(opts.render.clone())?.with_ready_selector(opts.selectors.ready_selector());
    let mut progress = LogProgress::default();
    runner::run(opts, renderer, Some(&mut progress))
}
