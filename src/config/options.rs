// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;
use crate::core::urls::BaseUrl;
use crate::error::ScrapeError;
use crate::session::Day;
use crate::specs::selectors::SelectorSchema;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BrowserMode {
    /// Whatever browser the WebDriver endpoint brings along.
    Bundled,
    /// A pre-installed browser binary (hosted CI runners).
    System { binary: String },
}

impl BrowserMode {
    /// `GITHUB_ACTIONS=true` selects the runner's system Chrome.
    pub fn for_ci_flag(flag: Option<&str>) -> Self {
        match flag {
            Some("true") => BrowserMode::System { binary: s!(CI_CHROME_PATH) },
            _ => BrowserMode::Bundled,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderOptions {
    pub webdriver_url: String,
    pub browser: BrowserMode,
    /// Politeness pause before every render.
    pub delay: Duration,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            webdriver_url: s!(WEBDRIVER_URL),
            browser: BrowserMode::Bundled,
            delay: Duration::from_millis(REQUEST_PAUSE_MS),
        }
    }
}

impl RenderOptions {
    pub fn from_env() -> Self {
        let ci = std::env::var(CI_ENV).ok();
        let mut opts = Self {
            browser: BrowserMode::for_ci_flag(ci.as_deref()),
            ..Self::default()
        };
        if let Ok(url) = std::env::var(WEBDRIVER_ENV) {
            if !url.trim().is_empty() {
                opts.webdriver_url = url.trim().to_string();
            }
        }
        opts
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrapeOptions {
    /// Raw site root; validated by `base()`.
    pub base_url: Option<String>,
    /// Scraped in this order; output rows follow it.
    pub days: Vec<Day>,
    pub out_path: PathBuf,
    pub render: RenderOptions,
    pub selectors: SelectorSchema,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            base_url: None,
            days: Day::ALL.to_vec(),
            out_path: PathBuf::from(DEFAULT_OUT_DIR).join(DEFAULT_FILE),
            render: RenderOptions::default(),
            selectors: SelectorSchema::default(),
        }
    }
}

impl ScrapeOptions {
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var(BASE_URL_ENV).ok().filter(|s| !s.trim().is_empty()),
            render: RenderOptions::from_env(),
            ..Self::default()
        }
    }

    pub fn base(&self) -> Result<BaseUrl, ScrapeError> {
        let raw = self.base_url.as_deref().ok_or_else(|| {
            ScrapeError::Config(format!("no base URL; set {BASE_URL_ENV} or pass --base-url"))
        })?;
        BaseUrl::parse(raw)
    }
}
