use std::path::{Path, PathBuf};

use dayquest::{
    controller::ProgressController,
    email::RewardNotifier,
    store::{CooldownTracker, ProgressStore, QuestionStore},
    AppState,
};
use tempfile::TempDir;

pub struct TestApp {
    pub state: AppState,
    /// Keeps the fixture files alive for the duration of the test.
    pub dir: TempDir,
}

impl TestApp {
    pub fn router(&self) -> axum::Router {
        dayquest::router(self.state.clone())
    }

    pub fn cooldown_path(&self) -> PathBuf {
        self.dir.path().join("passed_date.txt")
    }
}

pub async fn create_test_app() -> TestApp {
    let dir = tempfile::tempdir().expect("failed to create temp dir");

    let questions_dir = dir.path().join("questions");
    std::fs::create_dir(&questions_dir).expect("failed to create questions dir");
    write_question_fixtures(&questions_dir);

    let rewards_path = dir.path().join("rewards.json");
    std::fs::write(
        &rewards_path,
        r#"[{"day": "day_1", "reward_body": "<p>Nice work! <img src=\"cid:reward\"></p>", "reward_img": "missing.png"}]"#,
    )
    .expect("failed to write rewards fixture");

    let progress = ProgressStore::open(dir.path().join("progress_db.json"))
        .await
        .expect("failed to seed progress store");
    let cooldown = CooldownTracker::new(dir.path().join("passed_date.txt"));
    // Empty API key: reward delivery is disabled under test.
    let notifier = RewardNotifier::new(String::new(), String::new(), String::new(), rewards_path);
    let questions = QuestionStore::new(
        questions_dir,
        vec!["day_7".to_string(), "day_8".to_string()],
    );

    TestApp {
        state: AppState {
            questions,
            controller: ProgressController::new(progress, cooldown, notifier),
        },
        dir,
    }
}

fn write_question_fixtures(dir: &Path) {
    let day_1 = r#"[
  {"id": 1, "type": "mcq", "question": "Pick B", "options": ["A", "B", "C"], "correctAnswer": "B", "order": 1, "topic": "basics"},
  {"id": 2, "type": "yes_no", "question": "Ready to continue?", "correctAnswer": "yes", "order": 2, "topic": "basics"},
  {"id": 3, "type": "practical", "question": "Run the setup script", "order": 3, "topic": "hands-on"},
  {"id": 4, "type": "project", "question": "Build the mini project", "order": 4, "topic": "project"}
]"#;
    std::fs::write(dir.join("day_1.json"), day_1).expect("failed to write day_1 fixture");

    let day_7 = r#"[
  {"id": 1, "type": "mcq", "question": "Pick A", "options": ["A", "B"], "correctAnswer": "A", "order": 1, "topic": "review"}
]"#;
    std::fs::write(dir.join("day_7.json"), day_7).expect("failed to write day_7 fixture");

    let day_10 = r#"[
  {"id": 1, "type": "yes_no", "question": "Made it to the end?", "correctAnswer": "yes", "order": 1, "topic": "finale"}
]"#;
    std::fs::write(dir.join("day_10.json"), day_10).expect("failed to write day_10 fixture");
}
