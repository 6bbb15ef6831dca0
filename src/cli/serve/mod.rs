//! Serve command - runs one bench instance

use std::net::SocketAddr;

use clap::Args;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

use crate::api::create_router_with_metrics;
use crate::config::AppConfig;
use crate::domain::InstanceId;
use crate::infrastructure::observability::{init_metrics, init_tracing, shutdown_tracing};

/// Arguments for the serve command
#[derive(Args, Clone, Debug, Default)]
pub struct ServeArgs {
    /// Instance id, overriding `APP__INSTANCE__ID`
    #[arg(long)]
    pub instance_id: Option<InstanceId>,

    /// Listen port, overriding `APP__SERVER__PORT`
    #[arg(long)]
    pub port: Option<u16>,
}

impl ServeArgs {
    fn apply(&self, config: &mut AppConfig) {
        if let Some(id) = self.instance_id {
            config.instance.id = id;
        }

        if let Some(port) = self.port {
            config.server.port = port;
        }
    }
}

/// Run the bench server until Ctrl+C or SIGTERM
pub async fn run(args: ServeArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let mut config = AppConfig::load().unwrap_or_default();
    args.apply(&mut config);

    init_tracing(&config.logging, &config.observability.tracing);

    let state = crate::create_app_state_with_config(&config)?;
    let metrics = init_metrics(&config.observability.metrics, config.instance.id);
    let app = create_router_with_metrics(state, metrics);

    let addr = build_socket_addr(&config)?;
    info!(
        instance = config.instance.id,
        name = %config.instance.name,
        discipline = %config.chain.discipline,
        "Starting bench instance on {}",
        addr
    );

    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    shutdown_tracing();
    info!("Bench instance shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

fn build_socket_addr(config: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    )))
}
