use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use account_relay::application::{LoadSettingsUseCase, RelayContext};
use account_relay::domain::ports::BrowserPort;
use account_relay::infrastructure::{
    AppConfig, CliArgs, ReqwestTransport, SettingsFile, SystemBrowser,
};
use account_relay::presentation::{AppState, router};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_directive()));

    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(true);

    if let Some(log_path) = &config.log_path {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .init();
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let dotenv = dotenvy::dotenv();
    let config = AppConfig::from_args(CliArgs::parse());

    init_logging(&config).wrap_err("failed to initialize logging")?;

    info!(version = account_relay::VERSION, "Starting {}", account_relay::NAME);
    if let Ok(path) = dotenv {
        info!(path = %path.display(), "Loaded environment file");
    }

    let storage = Arc::new(SettingsFile::new(&config.settings_path));
    let settings = LoadSettingsUseCase::new(storage.clone()).execute(|name| std::env::var(name).ok());
    info!(
        path = %config.settings_path.display(),
        server_url = %settings.server_url,
        configured = settings.is_configured(),
        "Settings loaded"
    );

    let port = settings.port;
    let context = Arc::new(RelayContext::new(settings));
    let transport = Arc::new(ReqwestTransport::new().wrap_err("failed to create HTTP client")?);
    let browser: Arc<dyn BrowserPort> = Arc::new(SystemBrowser::new());

    let state = AppState::new(context, transport, storage, browser.clone());
    let app = router(Arc::new(state));

    let addr = SocketAddr::new(config.bind, port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .wrap_err_with(|| format!("failed to bind {addr}"))?;

    let local_url = format!("http://localhost:{port}");
    info!(address = %addr, url = %local_url, "Listening");

    if config.open_browser {
        if let Err(e) = browser.open(&local_url) {
            warn!(error = %e, "Could not open the local page");
        }
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .wrap_err("server error")?;

    Ok(())
}
