//! Activity log: a short, user-visible history of what the panels did.
//!
//! Backend calls either succeed quietly or fail without touching panel state.
//! Failures land here so the page can show them without blocking anything.

use dioxus::prelude::*;

/// Oldest entries are dropped beyond this many.
pub const MAX_ENTRIES: usize = 50;

#[derive(Clone, Debug, PartialEq)]
pub enum LogLevel {
    Info,
    Success,
    Error,
}

impl LogLevel {
    pub fn css_class(&self) -> &'static str {
        match self {
            LogLevel::Error => "activity-log-entry error",
            LogLevel::Success => "activity-log-entry success",
            LogLevel::Info => "activity-log-entry info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct ActivityLog {
    pub entries: Vec<LogEntry>,
    pub visible: bool,
}

impl ActivityLog {
    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push(entry);
        if self.entries.len() > MAX_ENTRIES {
            let excess = self.entries.len() - MAX_ENTRIES;
            self.entries.drain(..excess);
        }
    }

    pub fn error_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.level == LogLevel::Error)
            .count()
    }
}

pub fn use_activity_log() -> Signal<ActivityLog> {
    use_context::<Signal<ActivityLog>>()
}

pub fn log_activity(log: &mut Signal<ActivityLog>, level: LogLevel, message: &str) {
    let entry = LogEntry {
        timestamp: current_time(),
        level,
        message: message.to_string(),
    };
    log.write().push(entry);
}

#[cfg(target_arch = "wasm32")]
fn current_time() -> String {
    let date = js_sys::Date::new_0();
    let h = date.get_hours();
    let m = date.get_minutes();
    let s = date.get_seconds();
    format!("{h:02}:{m:02}:{s:02}")
}

#[cfg(not(target_arch = "wasm32"))]
fn current_time() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(level: LogLevel, message: &str) -> LogEntry {
        LogEntry {
            timestamp: "12:00:00".to_string(),
            level,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_push_keeps_only_recent_entries() {
        let mut log = ActivityLog::default();
        for i in 0..MAX_ENTRIES + 5 {
            log.push(entry(LogLevel::Info, &i.to_string()));
        }
        assert_eq!(log.entries.len(), MAX_ENTRIES);
        assert_eq!(log.entries[0].message, "5");
    }

    #[test]
    fn test_timestamp_is_local_clock_time() {
        let stamp = current_time();
        let parts: Vec<&str> = stamp.split(':').collect();
        assert_eq!(parts.len(), 3, "unexpected timestamp {stamp}");
        assert!(parts.iter().all(|p| p.len() == 2 && p.parse::<u8>().is_ok()));
        assert!(parts[0].parse::<u8>().unwrap() < 24);
    }

    #[test]
    fn test_error_count() {
        let mut log = ActivityLog::default();
        log.push(entry(LogLevel::Success, "/notes kaydı eklendi"));
        assert_eq!(log.error_count(), 0);
        log.push(entry(LogLevel::Error, "/notes yüklenemedi"));
        log.push(entry(LogLevel::Error, "/songs kaydedilemedi"));
        assert_eq!(log.error_count(), 2);
    }
}
