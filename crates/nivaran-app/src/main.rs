//! Nivaran - municipal grievance classification service.
//!
//! The main binary wires the pieces together: the classification
//! engine, the long-lived speech-to-text client, and the HTTP API
//! server.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use directories::ProjectDirs;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use nivaran_core::ClassificationEngine;
use nivaran_server::{AppState, Server, ServerConfig, DEFAULT_HOST, DEFAULT_PORT};
use nivaran_speech::{HttpTranscriber, TranscriberConfig, DEFAULT_ENDPOINT, DEFAULT_LANGUAGE};

/// Nivaran - municipal grievance classification service
#[derive(Parser, Debug)]
#[command(name = "nivaran", version, about)]
struct Args {
    /// Host to bind the API server to
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// Port to bind the API server to
    #[arg(long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Speech-to-text service URL
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    stt_endpoint: String,

    /// Language hint sent to the speech service
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    stt_language: String,

    /// Transcription timeout in seconds
    #[arg(long, default_value_t = 30)]
    stt_timeout_secs: u64,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// Get the logs directory path.
fn logs_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "nivaran", "Nivaran").map(|dirs| dirs.data_dir().join("logs"))
}

/// Initialize logging with file rotation.
fn init_logging(args: &Args) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let log_level = if args.debug { "debug" } else { &args.log_level };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("nivaran={},warn", log_level)));

    if let Some(log_dir) = logs_dir() {
        if std::fs::create_dir_all(&log_dir).is_ok() {
            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .max_log_files(5)
                .filename_prefix("nivaran")
                .filename_suffix("log")
                .build(&log_dir)
                .ok();

            if let Some(appender) = file_appender {
                let (non_blocking, guard) = tracing_appender::non_blocking(appender);

                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(fmt::layer().with_writer(std::io::stdout))
                    .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
                    .init();

                tracing::info!("Logging to {:?}", log_dir);
                return Some(guard);
            }
        }
    }

    // Fallback: console logging only
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::warn!("File logging unavailable, using console only");
    None
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _guard = init_logging(&args);

    tracing::info!(
        host = %args.host,
        port = args.port,
        stt_endpoint = %args.stt_endpoint,
        "Nivaran starting"
    );

    // One transcription client for the process lifetime, handed to the
    // handlers through the shared state.
    let transcriber = Arc::new(HttpTranscriber::new(TranscriberConfig {
        endpoint: args.stt_endpoint.clone(),
        language: args.stt_language.clone(),
        timeout: Duration::from_secs(args.stt_timeout_secs),
    }));

    let state = AppState::with_engine(ClassificationEngine::new(), transcriber);
    let config = ServerConfig::default()
        .with_host(args.host)
        .with_port(args.port);

    let server = Server::with_state(config, state).context("failed to configure server")?;
    tracing::info!("Listening on {}", server.addr());

    server.run().await.context("server exited with error")?;

    Ok(())
}
