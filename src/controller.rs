use std::collections::BTreeMap;

use chrono::{Duration, Utc};

use crate::email::RewardNotifier;
use crate::error::{Error, Result};
use crate::models::DayStatus;
use crate::store::{CooldownTracker, ProgressStore, DAY_COUNT};

/// Orchestrates the day state machine: locked -> unlocked -> completed,
/// with the next day unlocking when the previous one completes.
#[derive(Clone)]
pub struct ProgressController {
    progress: ProgressStore,
    cooldown: CooldownTracker,
    notifier: RewardNotifier,
}

impl ProgressController {
    pub fn new(
        progress: ProgressStore,
        cooldown: CooldownTracker,
        notifier: RewardNotifier,
    ) -> Self {
        Self {
            progress,
            cooldown,
            notifier,
        }
    }

    pub async fn progress(&self) -> Result<BTreeMap<String, DayStatus>> {
        self.progress.snapshot().await
    }

    pub async fn motivation_message(&self, day: &str) -> Result<String> {
        self.progress.message(day).await
    }

    pub async fn update_day_status(&self, day: &str, status: DayStatus) -> Result<()> {
        self.progress.set_status(day, status).await
    }

    pub async fn cooldown_remaining(&self) -> Result<Option<Duration>> {
        self.cooldown.remaining(Utc::now()).await
    }

    /// Handle a passing result: complete the day, unlock the next one
    /// (capped at day 10), start the cooldown and schedule the reward
    /// email. Progress and cooldown live in separate files; a crash
    /// between the writes can leave them out of sync.
    pub async fn record_pass(&self, day: &str) -> Result<()> {
        let n = day_number(day)
            .ok_or_else(|| Error::Validation(format!("invalid day identifier: {day}")))?;

        self.progress.set_status(day, DayStatus::Completed).await?;

        if n < DAY_COUNT {
            let next_day = format!("day_{}", n + 1);
            self.progress
                .set_status(&next_day, DayStatus::Unlocked)
                .await?;
            tracing::info!("{day} completed, {next_day} unlocked");
        } else {
            tracing::info!("{day} completed, no further days to unlock");
        }

        self.cooldown.record(day).await?;

        // Reward delivery must never fail or delay the request.
        let notifier = self.notifier.clone();
        let day = day.to_owned();
        tokio::spawn(async move {
            if let Err(err) = notifier.notify(&day).await {
                tracing::error!("reward email for {day} failed: {err}");
            }
        });

        Ok(())
    }
}

/// Parse the numeric index out of a `day_<n>` identifier.
pub fn day_number(day: &str) -> Option<u32> {
    day.strip_prefix("day_")?.parse().ok()
}
