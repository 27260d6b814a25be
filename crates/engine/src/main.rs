//! Gearsheet Engine - Main entry point.
//!
//! Reads one JSON [`SheetEnvelope`] per line on stdin and writes one
//! [`ResponseResult`] per line on stdout.

use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gearsheet_engine::api::SheetDispatcher;
use gearsheet_engine::infrastructure::{
    clock::{SystemClock, SystemRandom},
    config::EngineConfig,
    dice::DiceRoller,
    in_memory::{InMemoryCatalog, InMemoryRecordStore},
    seed::SeedData,
};
use gearsheet_engine::App;
use gearsheet_shared::{ErrorCode, ResponseResult, SheetEnvelope};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    // Logs go to stderr; stdout carries responses only.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gearsheet_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting Gearsheet Engine");

    let config = EngineConfig::from_env()?;

    let (store, catalog) = match &config.seed_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Loading seed data");
            SeedData::load(path)
                .await
                .with_context(|| format!("loading seed file {}", path.display()))?
                .into_adapters()
        }
        None => (InMemoryRecordStore::new(), InMemoryCatalog::new()),
    };
    let store = Arc::new(store);

    let mut changes = store.subscribe();
    tokio::spawn(async move {
        while let Ok(changed) = changes.recv().await {
            tracing::debug!(record_id = %changed.record_id, "Record changed");
        }
    });

    let roller = Arc::new(DiceRoller::new(
        Arc::new(SystemRandom::new()),
        Arc::new(SystemClock::new()),
        config.chat_log_limit,
    ));

    let app = App::new(store.clone(), Arc::new(catalog), store, roller);
    let dispatcher = SheetDispatcher::new(Arc::new(app));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<SheetEnvelope>(&line) {
            Ok(envelope) => {
                dispatcher
                    .handle(&envelope.record_id, envelope.request)
                    .await
            }
            Err(e) => {
                tracing::warn!(error = %e, "Malformed request line");
                ResponseResult::error(ErrorCode::BadRequest, format!("Malformed request: {}", e))
            }
        };

        let mut out = serde_json::to_string(&response).context("encoding response")?;
        out.push('\n');
        stdout.write_all(out.as_bytes()).await?;
        stdout.flush().await?;
    }

    tracing::info!("Input closed, shutting down");
    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
