use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;

use crate::error::Result;

/// Mandatory wait after any pass before new questions may be fetched.
/// The gate is global across all days, not per-day.
pub const COOLDOWN_HOURS: i64 = 12;

/// Single-record tracker for the last passed day, persisted as one line
/// `day|rfc3339_timestamp`. Overwritten on each pass; no history kept.
#[derive(Clone)]
pub struct CooldownTracker {
    path: Arc<PathBuf>,
    lock: Arc<Mutex<()>>,
}

impl CooldownTracker {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub async fn record(&self, day: &str) -> Result<()> {
        let _guard = self.lock.lock().await;
        let line = format!("{day}|{}", Utc::now().to_rfc3339());
        std::fs::write(self.path.as_ref(), line)?;
        Ok(())
    }

    /// The last passed day and when, or `None` when the file is absent
    /// or unparsable (no cooldown active in either case).
    pub async fn last_pass(&self) -> Result<Option<(String, DateTime<Utc>)>> {
        let _guard = self.lock.lock().await;
        let raw = match std::fs::read_to_string(self.path.as_ref()) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let Some((day, stamp)) = raw.trim().split_once('|') else {
            tracing::warn!("malformed cooldown file {}, ignoring", self.path.display());
            return Ok(None);
        };
        match DateTime::parse_from_rfc3339(stamp) {
            Ok(when) => Ok(Some((day.to_owned(), when.with_timezone(&Utc)))),
            Err(err) => {
                tracing::warn!("unparsable cooldown timestamp ({err}), ignoring");
                Ok(None)
            }
        }
    }

    /// Time left on the gate, or `None` once the window has elapsed.
    pub async fn remaining(&self, now: DateTime<Utc>) -> Result<Option<Duration>> {
        let Some((_, passed_at)) = self.last_pass().await? else {
            return Ok(None);
        };
        let window = Duration::hours(COOLDOWN_HOURS);
        let elapsed = now - passed_at;
        if elapsed < window {
            Ok(Some(window - elapsed))
        } else {
            Ok(None)
        }
    }
}

/// Render a remaining wait as `HH:MM:SS` for the 403 body.
pub fn format_remaining(remaining: Duration) -> String {
    let secs = remaining.num_seconds().max(0);
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}
