// src/progress.rs
/// Lightweight progress reporting used by the scrape run.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start of a phase with the number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one logical unit completes (a list page or a detail page).
    fn item_done(&mut self, _label: &str, _ok: bool) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// Forwards progress to the crate log.
#[derive(Default)]
pub struct LogProgress {
    total: usize,
    done: usize,
}

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }

    fn log(&mut self, msg: &str) {
        logf!("{msg}");
    }

    fn item_done(&mut self, label: &str, ok: bool) {
        self.done += 1;
        let status = if ok { "ok" } else { "unavailable" };
        logd!("[{}/{}] {label}: {status}", self.done, self.total);
    }
}
