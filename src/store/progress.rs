use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::error::{Error, Result};
use crate::models::{DayStatus, ProgressEntry};

pub const DAY_COUNT: u32 = 10;

type Entries = BTreeMap<String, ProgressEntry>;

/// Per-day `{status, message}` entries, persisted as a single JSON file
/// holding a one-element list with one object keyed by day. The mutex
/// guards the whole read-modify-write cycle so concurrent submissions
/// cannot lose updates.
#[derive(Clone)]
pub struct ProgressStore {
    path: Arc<PathBuf>,
    lock: Arc<Mutex<()>>,
}

impl ProgressStore {
    /// Open the store, seeding a fresh file (day_1 unlocked, the rest
    /// locked) when none exists yet.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let store = Self {
            path: Arc::new(path.into()),
            lock: Arc::new(Mutex::new(())),
        };

        {
            let _guard = store.lock.lock().await;
            if !store.path.exists() {
                store.write_entries(&seed_entries())?;
                tracing::info!("seeded progress store at {}", store.path.display());
            }
        }
        Ok(store)
    }

    pub async fn snapshot(&self) -> Result<BTreeMap<String, DayStatus>> {
        let _guard = self.lock.lock().await;
        let entries = self.read_entries()?;
        Ok(entries
            .into_iter()
            .map(|(day, entry)| (day, entry.status))
            .collect())
    }

    pub async fn message(&self, day: &str) -> Result<String> {
        let _guard = self.lock.lock().await;
        let entries = self.read_entries()?;
        entries
            .get(day)
            .map(|entry| entry.message.clone())
            .ok_or_else(|| Error::NotFound(format!("{day} not found in progress store")))
    }

    /// Overwrite the status of a known day. Idempotent; an unknown day
    /// is an explicit error rather than a silent no-op.
    pub async fn set_status(&self, day: &str, status: DayStatus) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read_entries()?;
        let entry = entries
            .get_mut(day)
            .ok_or_else(|| Error::NotFound(format!("{day} not found in progress store")))?;
        entry.status = status;
        self.write_entries(&entries)
    }

    fn read_entries(&self) -> Result<Entries> {
        let raw = std::fs::read_to_string(self.path.as_ref())?;
        let docs: Vec<Entries> = serde_json::from_str(&raw)?;
        docs.into_iter()
            .next()
            .ok_or_else(|| Error::Store(format!("{} holds an empty list", self.path.display())))
    }

    fn write_entries(&self, entries: &Entries) -> Result<()> {
        let raw = serde_json::to_string_pretty(&[entries])?;
        std::fs::write(self.path.as_ref(), raw)?;
        Ok(())
    }
}

fn seed_entries() -> Entries {
    (1..=DAY_COUNT)
        .map(|n| {
            let status = if n == 1 {
                DayStatus::Unlocked
            } else {
                DayStatus::Locked
            };
            let entry = ProgressEntry {
                status,
                message: format!("Welcome to day {n}"),
            };
            (format!("day_{n}"), entry)
        })
        .collect()
}
