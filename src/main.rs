use anyhow::Result;
use clap::Parser;

use hypersize::cli::Cli;
use hypersize::logging;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI and execute (CLI handles logging initialization)
    let cli = Cli::parse();

    // Execute with error handling
    match cli.execute().await {
        Ok(()) => {
            logging::log_session_end();
            Ok(())
        }
        Err(e) => {
            // Log the error using tracing (will respect logging configuration)
            tracing::error!("Application error: {}", e);

            // Log error chain if available
            let mut source = e.source();
            while let Some(err) = source {
                tracing::error!("   Caused by: {}", err);
                source = err.source();
            }

            logging::log_session_end();
            Err(e)
        }
    }
}
