use std::path::{Path, PathBuf};
use std::sync::Arc;

use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Content-ID the reward HTML uses to reference the inline image.
const INLINE_IMAGE_CID: &str = "reward";

#[derive(Deserialize)]
struct RewardEntry {
    day: String,
    reward_body: String,
    reward_img: PathBuf,
}

#[derive(Serialize)]
struct SendEmailRequest {
    from: String,
    to: Vec<String>,
    subject: String,
    html: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    attachments: Vec<EmailAttachment>,
}

#[derive(Serialize)]
struct EmailAttachment {
    filename: String,
    content: String,
    content_id: String,
}

/// Sends the reward email for a passed day via the Resend API.
///
/// Callers fire this from a background task; failures are theirs to log
/// and are never retried.
#[derive(Clone)]
pub struct RewardNotifier {
    api_key: String,
    sender: String,
    receiver: String,
    rewards_path: Arc<PathBuf>,
    client: reqwest::Client,
}

impl RewardNotifier {
    pub fn new(
        api_key: String,
        sender: String,
        receiver: String,
        rewards_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            api_key,
            sender,
            receiver,
            rewards_path: Arc::new(rewards_path.into()),
            client: reqwest::Client::new(),
        }
    }

    pub async fn notify(&self, day: &str) -> Result<()> {
        if self.api_key.is_empty() {
            tracing::warn!("no email API key configured, skipping reward for {day}");
            return Ok(());
        }

        let reward = self.reward_for(day)?;

        let attachments = match std::fs::read(&reward.reward_img) {
            Ok(bytes) => vec![EmailAttachment {
                filename: file_name(&reward.reward_img),
                content: base64::engine::general_purpose::STANDARD.encode(bytes),
                content_id: INLINE_IMAGE_CID.to_owned(),
            }],
            Err(err) => {
                tracing::warn!(
                    "reward image {} not readable ({err}), sending email without it",
                    reward.reward_img.display()
                );
                Vec::new()
            }
        };

        let body = SendEmailRequest {
            from: self.sender.clone(),
            to: vec![self.receiver.clone()],
            subject: "Stolen Hours ✨".to_owned(),
            html: reward.reward_body,
            attachments,
        };

        let resp = self
            .client
            .post("https://api.resend.com/emails")
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|err| Error::Email(err.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            tracing::error!("Resend API error: {status} - {text}");
            return Err(Error::Email(format!("Resend API returned {status}")));
        }

        tracing::info!("reward email for {day} sent successfully");
        Ok(())
    }

    fn reward_for(&self, day: &str) -> Result<RewardEntry> {
        let raw = std::fs::read_to_string(self.rewards_path.as_ref())?;
        let rewards: Vec<RewardEntry> = serde_json::from_str(&raw)?;
        rewards
            .into_iter()
            .find(|r| r.day == day)
            .ok_or_else(|| Error::NotFound(format!("no reward found for {day}")))
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "reward".to_owned())
}
