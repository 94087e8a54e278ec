mod cli;

use catalogue_monitor::adapters::inbound::http::{build_router, AppState};
use catalogue_monitor::adapters::outbound::metrics::PrometheusHealthMetrics;
use catalogue_monitor::adapters::outbound::network::StrapiCatalogueClient;
use catalogue_monitor::adapters::outbound::stream::InMemoryStreamStore;
use catalogue_monitor::config::{self, Settings};
use catalogue_monitor::ports::outbound::HealthCheck;
use catalogue_monitor::shared::Result;
use cli::Args;
use std::process;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse_args();
    init_tracing();

    if let Err(e) = run(args) {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<()> {
    let working_dir = std::env::current_dir()?;
    let file = config::load(args.config.as_deref(), &working_dir)?;
    let settings = Settings::resolve(file, args.overrides())?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(serve(settings))
}

async fn serve(settings: Settings) -> Result<()> {
    // Create adapters (Dependency Injection)
    let metrics = Arc::new(PrometheusHealthMetrics::new()?);
    let catalogue = Arc::new(StrapiCatalogueClient::new(
        &settings.catalogue_url,
        settings.catalogue_timeout,
        settings.catalogue_api_token.clone(),
    )?);
    let streams = Arc::new(InMemoryStreamStore::new());

    let health_checks = vec![
        catalogue.clone() as Arc<dyn HealthCheck>,
        streams.clone() as Arc<dyn HealthCheck>,
    ];
    let state = AppState::new(
        catalogue,
        streams.clone(),
        streams,
        health_checks,
        metrics,
        settings.max_streams,
    );

    let listener = tokio::net::TcpListener::bind(settings.bind_address)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind {}: {}", settings.bind_address, e))?;
    tracing::info!(
        address = %settings.bind_address,
        catalogue = %settings.catalogue_url,
        max_streams = settings.max_streams,
        "catalogue-monitor listening"
    );

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
