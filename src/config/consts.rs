// src/config/consts.rs

// Env
pub const BASE_URL_ENV: &str = "BASE_URL";
pub const CI_ENV: &str = "GITHUB_ACTIONS";
pub const WEBDRIVER_ENV: &str = "WEBDRIVER_URL";
pub const DEBUG_ENV: &str = "SCRAPE_DEBUG";

// Site
pub const TALKS_PATH: &str = "/talks";

// Export
pub const DEFAULT_OUT_DIR: &str = "outputs";
pub const DEFAULT_FILE: &str = "sessions.csv";

// Render
pub const WEBDRIVER_URL: &str = "http://localhost:9515";
pub const CI_CHROME_PATH: &str = "/usr/bin/google-chrome";
pub const REQUEST_PAUSE_MS: u64 = 1000; // be polite
pub const SETTLE_POLL_MS: u64 = 100;
pub const SETTLE_QUIET_MS: u64 = 500; // no new resource entries for this long = idle
pub const SETTLE_CAP_MS: u64 = 30_000;
