use std::process::ExitCode;

use clap::Parser;

use nextbus::cli::{self, Cli};
use nextbus::logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    logging::init("warn");

    let cli = Cli::parse();
    cli::run(cli).await
}
