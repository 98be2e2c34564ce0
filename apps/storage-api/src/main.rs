use std::future::IntoFuture;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use storage_api::app::build_router;
use storage_api::config::ServiceConfig;
use storage_api::constants::SERVICE;
use storage_api::methods::routes::{SERVICE_DOCS_PATH, SERVICE_HEALTH_PATH, WRITE_PATH};
use storage_api::shutdown::{shutdown_signal, with_drain_deadline};
use storage_api::state::AppState;
use storage_lib::FileWriter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(local: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);

    let json_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true);

    if local {
        let pretty_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .pretty();
        registry.with(json_layer).with(pretty_layer).init();
    } else {
        registry.with(json_layer).init();
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (config, invalid_settings) = ServiceConfig::from_env();
    init_tracing(config.is_local());

    for setting in &invalid_settings {
        tracing::warn!(
            env_var = setting.env_var,
            value = %setting.value,
            "ignoring invalid value in configuration"
        );
    }
    tracing::info!(
        service = SERVICE,
        env = %config.env,
        port = config.port,
        data_path = %config.data_path.display(),
        request_timeout_secs = config.request_timeout.as_secs(),
        shutdown_timeout_secs = config.shutdown_timeout.as_secs(),
        "configuration loaded"
    );

    let writer = FileWriter::new(config.write_target());
    let app_state = AppState::new(Arc::new(writer), config.env.clone());
    let app = build_router(app_state, &config);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind to {}: {}", addr, e))?;

    tracing::info!("{} starting on :{}", SERVICE, config.port);
    tracing::info!("endpoints:");
    tracing::info!("  GET {}?msg=<message> - write message to persistent storage", WRITE_PATH);
    tracing::info!("  GET {} - health check", SERVICE_HEALTH_PATH);
    tracing::info!("  GET {} - API docs", SERVICE_DOCS_PATH);

    let (graceful, drain_deadline) =
        with_drain_deadline(shutdown_signal(), config.shutdown_timeout);
    let server = axum::serve(listener, app).with_graceful_shutdown(graceful);

    tokio::select! {
        result = server.into_future() => {
            result.map_err(|e| format!("Server error: {}", e))?;
        }
        _ = drain_deadline => {
            tracing::warn!(
                timeout_secs = config.shutdown_timeout.as_secs(),
                "drain window elapsed, dropping remaining connections"
            );
        }
    }

    Ok(())
}
