use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use student_registry::{api, store::StudentStore};

#[derive(Parser)]
#[command(name = "sreg")]
#[command(about = "In-memory student record service with a JSON REST API")]
struct Cli {
    /// Port for the HTTP API
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Directory to serve static assets from
    #[arg(short, long, default_value = "public")]
    assets: PathBuf,
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| "student_registry=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let store = StudentStore::seeded();
    let app = api::create_router(store, cli.assets);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", cli.port)).await?;
    tracing::info!(
        "Student registry listening on http://localhost:{}",
        cli.port
    );

    axum::serve(listener, app).await?;

    Ok(())
}
