use std::process::ExitCode;
use tesla_wallbox_exporter::config::{ExporterConfig, LISTEN_ADDRESS};
use tokio::net::TcpListener;
use tracing::{debug, error, info, Level};

#[tokio::main]
async fn main() -> ExitCode {
    // Configuration is read before logging so DEBUG can set the level
    let config = ExporterConfig::from_env();
    let debug = config.as_ref().map(|c| c.debug).unwrap_or_default();

    tracing_subscriber::fmt()
        .with_max_level(if debug { Level::DEBUG } else { Level::INFO })
        .init();

    info!("Starting tesla_wallbox_exporter");

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if config.keep_power_meter {
        info!("Keeping last power meter stats when wallbox becomes unreachable");
    }
    debug!("Looking for a Tesla wallbox under {}", config.wallbox_address);

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: ExporterConfig) -> anyhow::Result<()> {
    let listener = TcpListener::bind(LISTEN_ADDRESS).await?;
    tesla_wallbox_exporter::serve(listener, &config, shutdown_signal()).await?;
    info!("Shutting down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {e}");
        // Without a signal handler, serve until the listener fails
        std::future::pending::<()>().await;
    }
}
