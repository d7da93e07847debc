// src/core/urls.rs
//! Site root and link absolutizing. Links are built by plain concatenation
//! against the root; anything already starting with `http` is left alone.

use crate::config::consts::TALKS_PATH;
use crate::error::ScrapeError;
use crate::session::Day;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Accepts an absolute `http(s)://` root. One trailing `/` is dropped.
    pub fn parse(raw: &str) -> Result<Self, ScrapeError> {
        let s = raw.trim();
        if !(s.starts_with("http://") || s.starts_with("https://")) {
            return Err(ScrapeError::Config(format!("base URL must be absolute: {s:?}")));
        }
        let s = s.strip_suffix('/').unwrap_or(s);
        Ok(Self(s!(s)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `{base}{href}` unless `href` is already absolute.
    pub fn absolutize(&self, href: &str) -> String {
        if href.starts_with("http") {
            s!(href)
        } else {
            join!(&self.0, href)
        }
    }

    /// List page for one day: `{base}/talks?day={n}`.
    pub fn talks_url(&self, day: Day) -> String {
        format!("{}{}?day={}", self.0, TALKS_PATH, day.query())
    }
}
