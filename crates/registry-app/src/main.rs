//! registryd - the company registry server
//!
//! This binary is the composition root: it picks a repository, wires
//! the service and the HTTP controller together, and serves.
//!
//! ```text
//! main.rs
//!   ├── Creates: InMemoryCompanyRepository or SqliteCompanyRepository
//!   ├── Creates: CompanyService (use case)
//!   └── Serves:  axum Router (adapter)
//! ```
//!
//! Usage:
//!   registryd                                  - in-memory store
//!   registryd --database sqlite://registry.db  - SQLite store
//!   registryd --bind 0.0.0.0:8080              - custom listen address

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

use registry_adapter::controller::http::router;
use registry_adapter::{InMemoryCompanyRepository, SqliteCompanyRepository};
use registry_domain::CompanyRepository;
use registry_usecase::CompanyService;

#[derive(Parser)]
#[command(name = "registryd")]
#[command(about = "Company registry - CRUD over companies, employees and profiles")]
#[command(version)]
struct Args {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:3000")]
    bind: SocketAddr,

    /// SQLite database URL (e.g. sqlite://registry.db). Data is kept in
    /// memory when omitted.
    #[arg(long)]
    database: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let repository: Arc<dyn CompanyRepository> = match &args.database {
        Some(url) => {
            info!(url = url.as_str(), "using sqlite store");
            Arc::new(SqliteCompanyRepository::connect(url).await?)
        }
        None => {
            info!("using in-memory store");
            Arc::new(InMemoryCompanyRepository::new())
        }
    };

    let service = Arc::new(CompanyService::new(repository));
    let app = router(service);

    let listener = TcpListener::bind(args.bind).await?;
    info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to install ctrl-c handler");
    }
}
