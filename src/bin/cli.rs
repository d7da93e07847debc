// src/bin/cli.rs
use talks_scrape::cli::{self, Command};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let opts = match cli::parse_args(std::env::args().skip(1))? {
        Command::Help => {
            eprintln!("{}", cli::help_text());
            return Ok(());
        }
        Command::Run(opts) => opts,
    };

    let summary = cli::run(&opts)?;
    println!("Wrote {} ({} sessions)", summary.path.display(), summary.rows);
    Ok(())
}
