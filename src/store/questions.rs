use std::path::PathBuf;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::models::Question;

/// Read-only per-day question files, `<dir>/day_<n>.json`. Days on the
/// unfiltered list are served raw, correct answers included.
#[derive(Clone)]
pub struct QuestionStore {
    dir: Arc<PathBuf>,
    unfiltered_days: Arc<Vec<String>>,
}

impl QuestionStore {
    pub fn new(dir: impl Into<PathBuf>, unfiltered_days: Vec<String>) -> Self {
        Self {
            dir: Arc::new(dir.into()),
            unfiltered_days: Arc::new(unfiltered_days),
        }
    }

    pub fn has_day(&self, day: &str) -> bool {
        self.day_path(day).exists()
    }

    pub fn is_unfiltered(&self, day: &str) -> bool {
        self.unfiltered_days.iter().any(|d| d == day)
    }

    /// Typed view of a day's questions, for scoring.
    pub fn load(&self, day: &str) -> Result<Vec<Question>> {
        let raw = self.read_day(day)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Raw view of a day's questions, for unfiltered days.
    pub fn load_raw(&self, day: &str) -> Result<Vec<serde_json::Value>> {
        let raw = self.read_day(day)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn read_day(&self, day: &str) -> Result<String> {
        let path = self.day_path(day);
        match std::fs::read_to_string(&path) {
            Ok(raw) => Ok(raw),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(Error::NotFound(format!("Questions for {day} not found")))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn day_path(&self, day: &str) -> PathBuf {
        self.dir.join(format!("{day}.json"))
    }
}
