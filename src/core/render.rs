// src/core/render.rs
// Rendering capability: URL in, post-script HTML out.
//
// `WebDriverRenderer` drives headless Chrome through a WebDriver endpoint
// (chromedriver). One browser session per call, always quit afterwards.
// Calls take `&mut self` and the pipeline is sequential, so sessions never overlap.

use std::collections::HashMap;
use std::thread;
use std::time::{Duration, Instant};

use thirtyfour::error::WebDriverError;
use thirtyfour::prelude::*;
use thirtyfour::ChromeCapabilities;
use tokio::runtime::{Builder, Runtime};

use crate::config::consts::{SETTLE_CAP_MS, SETTLE_POLL_MS, SETTLE_QUIET_MS};
use crate::config::options::{BrowserMode, RenderOptions};
use crate::error::RenderError;

pub trait Render {
    fn render(&mut self, url: &str) -> Result<String, RenderError>;
}

impl<R: Render + ?Sized> Render for &mut R {
    fn render(&mut self, url: &str) -> Result<String, RenderError> {
        (**self).render(url)
    }
}

/// Sleeps `delay` before every call to the inner renderer.
pub struct Throttled<R> {
    inner: R,
    delay: Duration,
}

impl<R: Render> Throttled<R> {
    pub fn new(inner: R, delay: Duration) -> Self {
        Self { inner, delay }
    }
}

impl<R: Render> Render for Throttled<R> {
    fn render(&mut self, url: &str) -> Result<String, RenderError> {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        logf!("Rendering {url}");
        self.inner.render(url)
    }
}

/// Canned pages keyed by URL. Unknown URLs fail like an unreachable page.
#[derive(Default)]
pub struct StaticPages {
    pages: HashMap<String, String>,
    pub requested: Vec<String>,
}

impl StaticPages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: impl Into<String>, html: impl Into<String>) -> Self {
        self.pages.insert(url.into(), html.into());
        self
    }
}

impl Render for StaticPages {
    fn render(&mut self, url: &str) -> Result<String, RenderError> {
        self.requested.push(s!(url));
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| RenderError::NotFound(s!(url)))
    }
}

pub struct WebDriverRenderer {
    rt: Runtime,
    opts: RenderOptions,
    ready_selector: Option<String>,
}

impl WebDriverRenderer {
    pub fn new(opts: RenderOptions) -> Result<Self, RenderError> {
        let rt = Builder::new_current_thread().enable_all().build()?;
        Ok(Self { rt, opts, ready_selector: None })
    }

    /// Once the network is quiet, also wait (within the settle cap) for an element
    /// matching `css` before reading the page.
    pub fn with_ready_selector(mut self, css: impl Into<String>) -> Self {
        self.ready_selector = Some(css.into());
        self
    }

    fn capabilities(&self) -> WebDriverResult<ChromeCapabilities> {
        let mut caps = DesiredCapabilities::chrome();
        let mut args = vec!["--headless=new", "--disable-gpu", "--window-size=1920,1080"];
        if let BrowserMode::System { binary } = &self.opts.browser {
            args.extend(["--no-sandbox", "--disable-setuid-sandbox"]);
            caps.add_chrome_option("binary", binary.as_str())?;
        }
        caps.add_chrome_option("args", args)?;
        Ok(caps)
    }
}

impl Render for WebDriverRenderer {
    fn render(&mut self, url: &str) -> Result<String, RenderError> {
        let browser_err = |e: WebDriverError| RenderError::Browser { url: s!(url), reason: e.to_string() };

        let caps = self.capabilities().map_err(browser_err)?;
        let endpoint = self.opts.webdriver_url.clone();
        let ready = self.ready_selector.as_deref();

        self.rt.block_on(async {
            let driver = WebDriver::new(endpoint.as_str(), caps).await.map_err(browser_err)?;

            let result = async {
                driver.goto(url).await?;
                wait_until_settled(&driver, ready).await?;
                driver.source().await
            }
            .await;

            if let Err(e) = driver.quit().await {
                loge!("Failed to quit browser after {url}: {e}");
            }
            result.map_err(browser_err)
        })
    }
}

/// Quiet-window tracker over "new resource entries since the last poll".
/// Any activity restarts the window.
#[derive(Debug)]
pub struct Settle {
    quiet: Duration,
    idle_since: Option<Instant>,
}

impl Settle {
    pub fn new(quiet: Duration) -> Self {
        Self { quiet, idle_since: None }
    }

    /// Feed one poll result; `true` once nothing new has arrived for the whole window.
    pub fn observe(&mut self, new_entries: u64, now: Instant) -> bool {
        if new_entries > 0 {
            self.idle_since = None;
            return false;
        }
        let since = *self.idle_since.get_or_insert(now);
        now.duration_since(since) >= self.quiet
    }
}

// Drains the resource-timing buffer each poll so a full buffer (250 entries by default)
// cannot freeze the count.
const DRAIN_RESOURCES_JS: &str = "const n = performance.getEntriesByType('resource').length; \
     performance.clearResourceTimings(); return n;";

/// Document complete, then no new resource entries for a quiet window, then the
/// ready selector present (if any). Bounded by `SETTLE_CAP_MS`; hitting the cap is not an error.
async fn wait_until_settled(driver: &WebDriver, ready: Option<&str>) -> WebDriverResult<()> {
    let poll = Duration::from_millis(SETTLE_POLL_MS);
    let deadline = Instant::now() + Duration::from_millis(SETTLE_CAP_MS);

    loop {
        let state = driver.execute("return document.readyState", Vec::new()).await?;
        if state.json().as_str() == Some("complete") || Instant::now() >= deadline {
            break;
        }
        tokio::time::sleep(poll).await;
    }

    let mut settle = Settle::new(Duration::from_millis(SETTLE_QUIET_MS));
    loop {
        if Instant::now() >= deadline {
            logd!("settle cap reached; taking page as-is");
            return Ok(());
        }
        let ret = driver.execute(DRAIN_RESOURCES_JS, Vec::new()).await?;
        if settle.observe(ret.json().as_u64().unwrap_or(0), Instant::now()) {
            break;
        }
        tokio::time::sleep(poll).await;
    }

    // Late XHRs still in flight are not visible above; the ready element is.
    if let Some(css) = ready {
        let remaining = deadline.saturating_duration_since(Instant::now());
        let found = driver.query(By::Css(css)).wait(remaining, poll).exists().await?;
        if !found {
            logd!("no element matched `{css}` before the settle cap; taking page as-is");
        }
    }
    Ok(())
}
