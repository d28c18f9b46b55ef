use std::path::PathBuf;

use clap::Parser;
use dayquest::{
    controller::ProgressController,
    email::RewardNotifier,
    store::{CooldownTracker, ProgressStore, QuestionStore},
    AppState,
};

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Directory of per-day question files (day_1.json .. day_10.json).
    #[arg(long, env = "QUESTIONS_DIR")]
    questions_dir: PathBuf,

    /// Progress database file; seeded on first start if absent.
    #[arg(long, env = "PROGRESS_DB_PATH")]
    progress_db_path: PathBuf,

    /// File recording the last passed day and timestamp.
    #[arg(long, env = "PASSED_DATE_FILE")]
    passed_date_file: PathBuf,

    /// Reward email table.
    #[arg(long, env = "REWARD_JSON")]
    reward_json: PathBuf,

    /// Resend API key. Leave empty to disable reward emails.
    #[arg(long, env = "RESEND_API_KEY", default_value = "", hide_env_values = true)]
    resend_api_key: String,

    /// Reward email sender.
    #[arg(long, env = "SENDER_EMAIL", default_value = "")]
    sender_email: String,

    /// Reward email recipient.
    #[arg(long, env = "RECEIVER_EMAIL", default_value = "")]
    receiver_email: String,

    /// Days served unfiltered, correct answers included.
    #[arg(
        long,
        env = "UNFILTERED_DAYS",
        value_delimiter = ',',
        default_value = "day_7,day_8"
    )]
    unfiltered_days: Vec<String>,

    /// The address to bind to.
    #[arg(short, long, env, default_value = "127.0.0.1:1414")]
    address: String,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "tracing=info,axum=debug,dayquest=debug".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .init();

    let args = Args::parse();

    let questions = QuestionStore::new(args.questions_dir, args.unfiltered_days);
    let progress = ProgressStore::open(args.progress_db_path).await?;
    let cooldown = CooldownTracker::new(args.passed_date_file);
    let notifier = RewardNotifier::new(
        args.resend_api_key,
        args.sender_email,
        args.receiver_email,
        args.reward_json,
    );

    let state = AppState {
        questions,
        controller: ProgressController::new(progress, cooldown, notifier),
    };

    let listener = tokio::net::TcpListener::bind(&args.address).await?;
    tracing::info!("listening on {}", args.address);
    axum::serve(listener, dayquest::router(state)).await?;

    Ok(())
}
