use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod app;

#[derive(Parser)]
#[command(name = "finchat")]
#[command(about = "Finchat - conversational financial assistant")]
#[command(version)]
struct Cli {
    /// User identity to chat as; omit for a guest session
    #[arg(short, long)]
    user: Option<String>,

    /// Reply language (e.g. en, hi, es)
    #[arg(short, long)]
    language: Option<String>,

    /// Directory holding persisted transcripts
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// JSON file with the user's financial snapshot
    #[arg(short, long)]
    snapshot: Option<PathBuf>,

    /// Send a single message and exit
    #[arg(short, long)]
    prompt: Option<String>,

    /// Generation model to use
    #[arg(short, long)]
    model: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let mut settings = finchat_core::Settings::load();
    if let Some(ref language) = cli.language {
        settings.language = language.clone();
    }
    if let Some(ref model) = cli.model {
        settings.generation.model = model.clone();
    }
    if let Some(ref data_dir) = cli.data_dir {
        settings.store.data_dir = Some(data_dir.clone());
    }

    let opts = app::SessionOptions {
        user: cli.user,
        snapshot_path: cli.snapshot,
    };

    if let Some(prompt) = cli.prompt {
        app::run_single_prompt(&settings, opts, &prompt).await
    } else {
        app::run_repl(&settings, opts).await
    }
}
