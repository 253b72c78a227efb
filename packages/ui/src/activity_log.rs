//! A running history of what the app asked the API and how it went.
//!
//! Each entry is one request: method, target URL and a one-line outcome. The
//! panel can narrow the list to failures.

use dioxus::prelude::*;

/// Oldest entries are dropped past this.
pub const MAX_ENTRIES: usize = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl LogLevel {
    pub fn is_failure(self) -> bool {
        matches!(self, LogLevel::Warning | LogLevel::Error)
    }

    pub fn css_class(self) -> &'static str {
        match self {
            LogLevel::Error => "activity-log-entry error",
            LogLevel::Warning => "activity-log-entry warning",
            LogLevel::Success => "activity-log-entry success",
            LogLevel::Info => "activity-log-entry info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    /// Local wall-clock `HH:MM:SS`. Only the browser build has a clock to read,
    /// so this is `None` in native builds and tests.
    pub timestamp: Option<String>,
    pub level: LogLevel,
    /// `GET`, `POST`, `PUT` or `DELETE`.
    pub method: &'static str,
    pub target: String,
    pub outcome: String,
}

#[derive(Clone, Debug, Default)]
pub struct ActivityLog {
    pub entries: Vec<LogEntry>,
    pub visible: bool,
    pub failures_only: bool,
}

impl ActivityLog {
    pub fn push(&mut self, level: LogLevel, method: &'static str, target: &str, outcome: &str) {
        self.entries.push(LogEntry {
            timestamp: current_time(),
            level,
            method,
            target: target.to_string(),
            outcome: outcome.to_string(),
        });
        if self.entries.len() > MAX_ENTRIES {
            let excess = self.entries.len() - MAX_ENTRIES;
            self.entries.drain(..excess);
        }
    }

    pub fn failure_count(&self) -> usize {
        self.entries.iter().filter(|e| e.level.is_failure()).count()
    }

    /// Newest first, honoring the failures-only filter.
    pub fn shown(&self) -> Vec<LogEntry> {
        self.entries
            .iter()
            .rev()
            .filter(|e| !self.failures_only || e.level.is_failure())
            .cloned()
            .collect()
    }
}

pub fn use_activity_log() -> Signal<ActivityLog> {
    use_context::<Signal<ActivityLog>>()
}

/// Record one request in the log and mirror it to `tracing`.
pub fn log_request(
    log: &mut Signal<ActivityLog>,
    level: LogLevel,
    method: &'static str,
    target: &str,
    outcome: &str,
) {
    match level {
        LogLevel::Error => tracing::error!("{method} {target}: {outcome}"),
        LogLevel::Warning => tracing::warn!("{method} {target}: {outcome}"),
        LogLevel::Info | LogLevel::Success => tracing::info!("{method} {target}: {outcome}"),
    }
    log.write().push(level, method, target, outcome);
}

#[cfg(target_arch = "wasm32")]
fn current_time() -> Option<String> {
    let date = js_sys::Date::new_0();
    let h = date.get_hours();
    let m = date.get_minutes();
    let s = date.get_seconds();
    Some(format!("{h:02}:{m:02}:{s:02}"))
}

#[cfg(not(target_arch = "wasm32"))]
fn current_time() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_is_capped() {
        let mut log = ActivityLog::default();
        for i in 0..MAX_ENTRIES + 5 {
            log.push(LogLevel::Info, "GET", "/v1/api/user", &format!("entry {i}"));
        }
        assert_eq!(log.entries.len(), MAX_ENTRIES);
        assert_eq!(log.entries[0].outcome, "entry 5");
        assert_eq!(log.failure_count(), 0);

        log.push(LogLevel::Error, "DELETE", "/v1/api/user/3", "delete failed");
        assert_eq!(log.failure_count(), 1);
    }

    #[test]
    fn test_failures_only_filter() {
        let mut log = ActivityLog::default();
        log.push(LogLevel::Success, "GET", "/v1/api/user", "Loaded 2 users");
        log.push(LogLevel::Warning, "GET", "/v1/api/user/9", "user 9 not found");
        log.push(LogLevel::Success, "PUT", "/v1/api/user/1", "Saved user 1");

        let all: Vec<&str> = log.shown().iter().map(|e| e.method).collect();
        assert_eq!(all, ["PUT", "GET", "GET"]);

        log.failures_only = true;
        let shown = log.shown();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].target, "/v1/api/user/9");
        assert_eq!(log.failure_count(), 1);
    }

    #[test]
    fn test_native_entries_have_no_timestamp() {
        let mut log = ActivityLog::default();
        log.push(LogLevel::Info, "GET", "/v1/api/user", "ok");
        assert_eq!(log.entries[0].timestamp, None);
    }
}
