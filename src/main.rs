use anyhow::Result;
use clap::Parser;
use interview_report::{create_router, AppState, Config, ReportBridge};
use std::sync::Arc;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "interview-report", about = "Interview report service")]
struct Args {
    /// Path to the configuration file (without extension)
    #[arg(long, default_value = "config/interview-report")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let cfg = Config::load(&args.config)?;

    info!("{} v{}", cfg.service.name, env!("CARGO_PKG_VERSION"));
    info!(
        "Report generator: {} {}",
        cfg.generator.command,
        cfg.generator.args.join(" ")
    );

    let bridge = Arc::new(ReportBridge::new(cfg.generator.clone().into()));
    let state = AppState::new(bridge);
    let app = create_router(state);

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
