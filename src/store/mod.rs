// File-backed stores - the persistence layer

mod cooldown;
mod progress;
mod questions;

pub use cooldown::{format_remaining, CooldownTracker, COOLDOWN_HOURS};
pub use progress::{ProgressStore, DAY_COUNT};
pub use questions::QuestionStore;
