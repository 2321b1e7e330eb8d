use anyhow::Result;
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use tracing_appender::non_blocking;
use tracing_subscriber::EnvFilter;

use crate::data_paths::DataPaths;

pub struct LoggingConfig {
    pub data_paths: DataPaths,
    pub session_id: String,
}

impl LoggingConfig {
    pub fn new(data_paths: DataPaths) -> Self {
        let session_id = generate_session_id();
        Self {
            data_paths,
            session_id,
        }
    }

    pub fn log_file_path(&self) -> PathBuf {
        self.data_paths
            .logs()
            .join(format!("hypersize-{}.log", self.session_id))
    }
}

/// Initialize logging: console (stderr) plus a per-session log file.
pub fn init_logging(config: LoggingConfig, verbose: u8) -> Result<()> {
    // Ensure logs directory exists
    config.data_paths.ensure_directories()?;

    // Verbose flag wins, otherwise RUST_LOG, otherwise INFO
    let env_filter = if verbose > 0 {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    // Create per-session file appender
    let log_file = std::fs::File::create(config.log_file_path())
        .map_err(|e| anyhow::anyhow!("Failed to create log file: {}", e))?;

    let (file_writer, _file_guard) = non_blocking(log_file);

    // Store the guard to prevent it from being dropped
    std::mem::forget(_file_guard);

    use tracing_subscriber::fmt::writer::MakeWriterExt;
    let multi_writer = std::io::stderr.and(file_writer);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(multi_writer)
        .with_ansi(true)
        .with_target(false)
        .compact()
        .init();

    // Log session start
    tracing::info!(
        session_id = %config.session_id,
        log_file = %config.log_file_path().display(),
        "Logging initialized"
    );

    Ok(())
}

/// Generate a unique session ID with timestamp
fn generate_session_id() -> String {
    let now: DateTime<Utc> = Utc::now();
    format!("{}", now.format("%Y%m%d_%H%M%S_%3f"))
}

/// Log session end
pub fn log_session_end() {
    tracing::info!("Session ended");
}
