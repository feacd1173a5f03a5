use anyhow::{Context, Result};
use finchat_core::{
    FileTranscriptStore, FinancialSnapshot, GeminiClient, GoogleTranslateClient, Identity,
    Message, Sender, SessionController, Settings,
};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;

pub struct SessionOptions {
    pub user: Option<String>,
    pub snapshot_path: Option<PathBuf>,
}

/// Interactive read-eval loop over stdin.
pub async fn run_repl(settings: &Settings, opts: SessionOptions) -> Result<()> {
    let snapshot = load_snapshot(&opts)?;
    let mut session = build_session(settings, &opts)?;

    for message in session.load().await {
        print_message(message);
    }

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();
    let mut stdout = tokio::io::stdout();

    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim().to_string();
        if line == "exit" || line == "quit" {
            break;
        }

        let before = session.transcript().len();
        session.send_user_message(&line, &snapshot).await;

        // Echo whatever the exchange appended (skipping the user's own
        // line, which is already on screen).
        for message in session.transcript().iter().skip(before + 1) {
            print_message(message);
        }
    }

    info!("session ended");
    Ok(())
}

/// Send one message, print the reply, exit.
pub async fn run_single_prompt(
    settings: &Settings,
    opts: SessionOptions,
    prompt: &str,
) -> Result<()> {
    let snapshot = load_snapshot(&opts)?;
    let mut session = build_session(settings, &opts)?;

    session.load().await;
    session.send_user_message(prompt, &snapshot).await;

    if let Some(reply) = session
        .transcript()
        .iter()
        .rev()
        .find(|m| m.sender == Sender::Assistant)
    {
        println!("{}", reply.text);
    }
    Ok(())
}

fn build_session(settings: &Settings, opts: &SessionOptions) -> Result<SessionController> {
    let identity = match &opts.user {
        Some(user) => Identity::User(user.clone()),
        None => Identity::Guest,
    };

    let store = match &settings.store.data_dir {
        Some(dir) => FileTranscriptStore::with_dir(dir.clone()),
        None => FileTranscriptStore::new(),
    }
    .context("failed to open transcript store")?;

    let api_key = std::env::var(&settings.generation.api_key_env).with_context(|| {
        format!(
            "generation API key not set; export {}",
            settings.generation.api_key_env
        )
    })?;
    let mut generator = GeminiClient::new(api_key).with_model(&settings.generation.model);
    if let Some(ref base_url) = settings.generation.base_url {
        generator = generator.with_base_url(base_url);
    }

    let mut translator =
        GoogleTranslateClient::new().with_source_lang(&settings.translation.source_lang);
    if let Some(ref base_url) = settings.translation.base_url {
        translator = translator.with_base_url(base_url);
    }

    Ok(SessionController::new(
        identity,
        Arc::new(store),
        Arc::new(generator),
        Arc::new(translator),
    )
    .with_language(&settings.language))
}

/// Read the financial-data provider document, if one was supplied. The
/// core only ever reads this.
fn load_snapshot(opts: &SessionOptions) -> Result<FinancialSnapshot> {
    match &opts.snapshot_path {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read snapshot {}", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("failed to parse snapshot {}", path.display()))
        }
        None => Ok(FinancialSnapshot::default()),
    }
}

fn print_message(message: &Message) {
    let label = match message.sender {
        Sender::User => "you",
        Sender::Assistant => "assistant",
    };
    println!("{label}: {}", message.text);
}
