//! Ultimate Tic-Tac-Toe history client binary.
//!
//! # Architecture
//!
//! This binary is the composition root that assembles:
//! 1. History runtime (storage backend + worker) via RuntimeBuilder
//! 2. Frontend (UI), currently the line-oriented console
//!
//! Both are built independently and injected into the Client container.
//!
//! # Examples
//!
//! ```bash
//! # Keep history in memory only, logging to stderr as well
//! HISTORY_BACKEND=memory LOG_TO_STDERR=1 cargo run -p uttt-client
//! ```

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "frontend-cli")]
    {
        run_cli().await?;
    }

    #[cfg(not(feature = "frontend-cli"))]
    {
        compile_error!("At least one frontend feature must be enabled (frontend-cli)");
    }

    Ok(())
}

/// Run the console frontend.
#[cfg(feature = "frontend-cli")]
async fn run_cli() -> Result<()> {
    use client_bootstrap::{HistoryConfig, RuntimeBuilder, setup_logging};
    use client_frontend_cli::ConsoleFrontend;
    use client_frontend_core::FrontendConfig;
    use uttt_client::Client;

    // 1. Load configuration from environment
    let history_config = HistoryConfig::from_env();
    let frontend_config = FrontendConfig::from_env();

    // 2. Setup logging; the guard flushes the log file on exit
    let _log_guard = setup_logging(
        &history_config.log_dir(),
        history_config.session_id.as_deref(),
        history_config.log_to_stderr,
    )?;

    tracing::info!("Starting Ultimate Tic-Tac-Toe client");
    for warning in &history_config.warnings {
        tracing::warn!("{}", warning);
    }

    // 3. Build Runtime (independent layer)
    let setup = RuntimeBuilder::new().config(history_config).build().await?;
    tracing::info!(
        "Runtime built successfully (backend: {:?}, session: {:?})",
        setup.config.backend,
        setup.config.session_id
    );

    // 4. Build Frontend (independent layer)
    let frontend = ConsoleFrontend::new(frontend_config);

    // 5. Build and run
    let client = Client::builder()
        .runtime(setup.runtime)
        .frontend(frontend)
        .build()?;

    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
