// src/runner.rs
//! Sequential scrape run:
//! list page per day → stubs → detail page per stub → merge → one CSV write.
//!
//! Every render goes through `Throttled`, so there is a pause before each request
//! and never two requests in flight. A failed list page costs that day's sessions;
//! a failed detail page costs that session's detail fields. Only the final write
//! can fail the run.

use std::path::PathBuf;

use crate::{
    config::options::ScrapeOptions,
    core::render::{Render, Throttled},
    core::urls::BaseUrl,
    error::ScrapeError,
    file::write_sessions,
    merge::merge,
    progress::Progress,
    session::{Day, SessionDetail, SessionRecord, SessionStub},
    specs::{detail, selectors::CompiledSchema, talks},
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub rows: usize,
    pub path: PathBuf,
}

/// Render and read one day's list page.
/// `None` when the page is unavailable; the caller treats that day as having no sessions.
pub fn fetch_session_list<R: Render>(
    renderer: &mut R,
    day: Day,
    schema: &CompiledSchema,
    base: &BaseUrl,
) -> Option<Vec<SessionStub>> {
    let url = base.talks_url(day);
    logf!("Fetching session list for {day}: {url}");

    match renderer.render(&url) {
        Ok(html) => {
            let stubs = talks::extract_list(&html, day, &schema.list, base);
            logf!("{} session(s) found for {day}", stubs.len());
            Some(stubs)
        }
        Err(e) => {
            loge!("Session list unavailable for {day}: {e}");
            None
        }
    }
}

/// Render and read the detail page of `stub`, if it has one.
/// `None` when the page is unavailable; the session itself is kept with an empty detail.
pub fn fetch_session_detail<R: Render>(
    renderer: &mut R,
    stub: &SessionStub,
    schema: &CompiledSchema,
    base: &BaseUrl,
) -> Option<SessionDetail> {
    let Some(url) = stub.detail_url.as_deref() else {
        return Some(SessionDetail::default());
    };

    match renderer.render(url) {
        Ok(html) => Some(detail::extract_detail(&html, stub, &schema.detail, base)),
        Err(e) => {
            loge!("Detail unavailable for \"{}\": {e}", stub.title);
            None
        }
    }
}

/// All days' stubs in order, then each enriched with its own detail page.
pub fn collect_sessions<R: Render>(
    renderer: &mut R,
    days: &[Day],
    schema: &CompiledSchema,
    base: &BaseUrl,
    mut progress: Option<&mut dyn Progress>,
) -> Vec<SessionRecord> {
    if let Some(p) = progress.as_deref_mut() {
        p.log("Fetching session lists…");
        p.begin(days.len());
    }

    let mut stubs = Vec::new();
    for &day in days {
        let day_stubs = fetch_session_list(renderer, day, schema, base);
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(day.as_str(), day_stubs.is_some());
        }
        stubs.extend(day_stubs.unwrap_or_default());
    }

    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Fetching details for {} session(s)…", stubs.len()));
        p.begin(stubs.len());
    }

    let mut records = Vec::with_capacity(stubs.len());
    for stub in stubs {
        let detail = fetch_session_detail(renderer, &stub, schema, base);
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(&stub.title, detail.is_some());
        }
        records.push(merge(stub, detail.unwrap_or_default()));
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    records
}

/// Top-level run: scrape per `opts` through `renderer`, write the CSV.
pub fn run<R: Render>(
    opts: &ScrapeOptions,
    renderer: R,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, ScrapeError> {
    let base = opts.base()?;
    let schema = opts.selectors.compile()?;
    let mut renderer = Throttled::new(renderer, opts.render.delay);

    let records = collect_sessions(&mut renderer, &opts.days, &schema, &base, progress);

    let path = write_sessions(&opts.out_path, &records)?;
    logf!("Wrote {} session(s) to {}", records.len(), path.display());

    Ok(RunSummary { rows: records.len(), path })
}
