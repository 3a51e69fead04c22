use std::net::SocketAddr;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use nextbus::config::{BackendArgs, BackendConfig};
use nextbus::logging;
use nextbus::metro::Backend;
use nextbus::web::{AppState, create_router};

/// Serve next bus lookups over HTTP.
#[derive(Debug, Parser)]
#[command(name = "nextbus-server")]
struct Args {
    /// Address to listen on.
    #[arg(long, env = "NEXTBUS_ADDR", default_value = "127.0.0.1:3000")]
    addr: SocketAddr,

    #[command(flatten)]
    backend: BackendArgs,
}

#[tokio::main]
async fn main() -> ExitCode {
    logging::init("info,tower_http=info");
    let args = Args::parse();

    let backend = match Backend::new(BackendConfig::from(args.backend)) {
        Ok(backend) => backend,
        Err(e) => {
            error!(error = %e, "failed to set up NexTrip gateway");
            return ExitCode::FAILURE;
        }
    };
    match &backend {
        Backend::Live(_) => info!("answering from the live NexTrip service"),
        Backend::Fixtures(fixtures) => {
            info!(dir = %fixtures.root().display(), "answering from fixtures")
        }
    }

    let app = create_router(AppState::new(backend));

    let listener = match tokio::net::TcpListener::bind(args.addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %args.addr, error = %e, "failed to bind");
            return ExitCode::FAILURE;
        }
    };
    info!("NextBus listening on http://{}", args.addr);
    info!("  GET  /health  - Health check");
    info!("  GET  /next    - Next departure (?route=&stop=&direction=[&verbose=true])");

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "server stopped");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
