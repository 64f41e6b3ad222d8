use anyhow::Context;
use chrono::Datelike;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::future::Future;
use std::io::Write;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use vivo_login::view::{self, PageContext};
use vivo_login::FormState;
use vivo_server::ServiceConfig;

pub mod cli;
mod config;

pub use config::Config;

pub async fn run(args: cli::VivoArgs) -> anyhow::Result<()> {
    let Config { service } = Config::load(args.config.as_deref())?;

    match args.command.unwrap_or(cli::Command::Serve) {
        cli::Command::Serve => {
            if let Some(metrics_address) = service.metrics_address {
                install_metrics_exporter(metrics_address)?;
            }

            let (_addr, server) = start_listening(&service).await?;
            server.await
        }
        cli::Command::Render { out } => {
            let page = render_login_page(&service)?;
            match out {
                Some(path) => std::fs::write(&path, page)
                    .with_context(|| format!("Failed to write login page to {}", path.display()))?,
                None => std::io::stdout()
                    .write_all(page.as_bytes())
                    .context("Failed to write login page to stdout")?,
            }
            Ok(())
        }
    }
}

/// Binds the listener and logs readiness. The returned future serves until SIGTERM or Ctrl-C.
///
/// An address already in use fails here, before anything is served.
pub async fn start_listening(
    service: &ServiceConfig,
) -> anyhow::Result<(SocketAddr, impl Future<Output = anyhow::Result<()>> + Send + use<>)> {
    let listener = TcpListener::bind(service.address)
        .await
        .with_context(|| format!("Failed to bind {}", service.address))?;
    let addr = listener.local_addr()?;

    let router = vivo_server::router(service);

    tracing::info!(
        asset_dir = %service.asset_dir.display(),
        "App running at {}",
        service.app_url(addr)
    );

    let server = async move {
        axum::serve(listener, router.into_make_service())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Vivo server exited with error")?;

        tracing::info!("Completed graceful shutdown");

        Ok(())
    };

    Ok((addr, server))
}

/// Renders the login screen as a fresh visitor sees it.
pub fn render_login_page(service: &ServiceConfig) -> anyhow::Result<String> {
    let page = PageContext {
        year: chrono::Local::now().year(),
        base_path: service.base_path.to_string(),
    };

    view::render(&FormState::default(), &page).context("Failed to render login page")
}

fn install_metrics_exporter(address: SocketAddr) -> anyhow::Result<()> {
    PrometheusBuilder::new()
        .with_http_listener(address)
        .set_buckets(&[
            100e-6, 500e-6, 1e-3, 5e-3, 1e-2, 5e-2, 1e-1, 2e-1, 5e-1, 1.0, 5.0,
        ])
        .context("Failed to set buckets for prometheus")?
        .install()
        .context("Failed to install prometheus exporter")?;

    tracing::info!(?address, "Serving prometheus metrics");

    Ok(())
}

// Based on: https://github.com/tokio-rs/axum/blob/main/examples/graceful-shutdown/src/main.rs
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal;

        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Ctrl-C received, beginning graceful shutdown"),
        () = terminate => tracing::info!("SIGTERM received, beginning graceful shutdown"),
    }
}
