use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};

use crate::model::{Intent, TodoState};
use crate::ops::Store;
use crate::ops::view::active_count;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("could not open log {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Append-only log of every dispatched intent.
///
/// Write failures are swallowed: the first one disables the log so the UI
/// keeps running.
#[derive(Debug)]
pub struct SessionLog {
    file: File,
    failed: bool,
}

impl SessionLog {
    /// Open (or create) the log file for appending and write a session header
    pub fn open(path: &Path) -> Result<Self, LogError> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| LogError::Open {
                path: path.to_path_buf(),
                source: e,
            })?;
        let mut log = SessionLog {
            file,
            failed: false,
        };
        log.write_line(&format!("# session started {}", timestamp(Utc::now())));
        Ok(log)
    }

    /// Record one dispatch
    pub fn record(&mut self, intent: &Intent, state: &TodoState, changed: bool) {
        let line = format_entry(Utc::now(), intent, state, changed);
        self.write_line(&line);
    }

    /// Subscribe this log to the store; it records every later dispatch
    pub fn attach(mut self, store: &mut Store) {
        store.subscribe(move |intent, state, changed| self.record(intent, state, changed));
    }

    fn write_line(&mut self, line: &str) {
        if self.failed {
            return;
        }
        if writeln!(self.file, "{}", line).is_err() {
            self.failed = true;
        }
    }
}

fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// `2025-05-14T09:30:00.000Z submit applied tasks=2 active=1`
pub fn format_entry(at: DateTime<Utc>, intent: &Intent, state: &TodoState, changed: bool) -> String {
    format!(
        "{} {} {} tasks={} active={}",
        timestamp(at),
        intent,
        if changed { "applied" } else { "no-op" },
        state.tasks().len(),
        active_count(state),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn format_entry_layout() {
        let at = Utc.with_ymd_and_hms(2025, 5, 14, 9, 30, 0).unwrap();
        let mut store = Store::new();
        store.dispatch(Intent::SetDraft("x".into()));
        store.dispatch(Intent::Submit);

        assert_eq!(
            format_entry(at, &Intent::Submit, store.state(), true),
            "2025-05-14T09:30:00.000Z submit applied tasks=1 active=1"
        );
        assert_eq!(
            format_entry(at, &Intent::ClearCompleted, store.state(), false),
            "2025-05-14T09:30:00.000Z clear no-op tasks=1 active=1"
        );
    }

    #[test]
    fn attached_log_records_dispatches() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("session.log");

        let mut store = Store::new();
        SessionLog::open(&path).unwrap().attach(&mut store);
        store.dispatch(Intent::SetDraft("Buy milk".into()));
        store.dispatch(Intent::Submit);
        store.dispatch(Intent::Submit);
        drop(store);

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("# session started "));
        assert!(lines[1].ends_with("draft \"Buy milk\" applied tasks=0 active=0"));
        assert!(lines[2].ends_with("submit applied tasks=1 active=1"));
        assert!(lines[3].ends_with("submit no-op tasks=1 active=1"));
    }

    #[test]
    fn open_appends_to_existing_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("session.log");
        fs::write(&path, "earlier\n").unwrap();

        drop(SessionLog::open(&path).unwrap());
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("earlier\n# session started "));
    }

    #[test]
    fn open_missing_directory_fails() {
        let tmp = TempDir::new().unwrap();
        let err = SessionLog::open(&tmp.path().join("no/such/dir.log")).unwrap_err();
        assert!(err.to_string().starts_with("could not open log"));
    }
}
