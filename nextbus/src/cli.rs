//! Command-line front end.
//!
//! ```text
//! nextbus [OPTIONS] <route> <stop> <direction>
//! ```
//!
//! Exactly three patterns run one lookup and print its result line. No
//! patterns starts an interactive loop. A first argument of `/?`, `--h...`
//! or `/h...` prints help; any other count is a parameter error.
//!
//! Options must come before the patterns: everything from the first pattern
//! on is taken literally, so patterns like `#21` or `-` never need quoting
//! as flags.

use std::process::ExitCode;

use chrono::Utc;
use clap::Parser;
use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Lines};
use tracing::error;

use crate::config::{BackendArgs, BackendConfig};
use crate::metro::{Backend, Gateway};
use crate::resolve::{LookupError, NextBus, Query};

/// Help text, printed for `/?` and after a parameter error.
pub const HELP_TEXT: &str = r#"
    Example Command-Line: nextbus "bus-route" "bus-stop-name" "direction"

    bus-route:
        should be a unique substring of the name of the bus route you want
        If you put # followed by a number, it picks a particular Metro Transit
        route number.
        If you put #any, it lists all the routes in the resulting error message
    bus-stop-name:
        should be a unique substring of the name of the bus stop
        If you put #any, it lists all the stops for that route in the
        resulting error message
    direction:
        must be east, north, south, or west (case-insensitive)
        If you put #any, it lists all the directions for that route in the
        resulting error message

    Options (before the patterns):
        --verbose           print Metro Transit's own departure text
        --base-url <URL>    NexTrip base URL        [env: NEXTBUS_BASE_URL]
        --timeout <SECS>    per-request timeout     [env: NEXTBUS_TIMEOUT_SECS]
        --fixtures <DIR>    answer from JSON files  [env: NEXTBUS_FIXTURES]
"#;

/// Prefix of the line printed for a wrong argument count.
pub const PARAMETER_ERROR: &str = "PARAMETER ERROR: ";

const BANNER: &str = "NextBus\nTo exit, press Enter without typing anything.\n";
const ROUTE_PROMPT: &str =
    "Enter part of the route's name, or type # for a route number (e.g. #21): ";
const STOP_PROMPT: &str = "Enter part of the stop's name, or type #any to see all of them: ";
const DIRECTION_PROMPT: &str = "Enter the direction (north, south, east, west): ";

/// Time until the next bus at a Metro Transit stop.
#[derive(Debug, Parser)]
#[command(name = "nextbus", disable_help_flag = true)]
pub struct Cli {
    /// Print the vendor's departure text ("4 Min", "10:08", "Due") instead
    /// of the computed countdown.
    #[arg(long)]
    pub verbose: bool,

    #[command(flatten)]
    pub backend: BackendArgs,

    /// Route, stop and direction patterns.
    #[arg(value_name = "PATTERN", trailing_var_arg = true, allow_hyphen_values = true)]
    pub patterns: Vec<String>,
}

/// What the positional arguments ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// No patterns: prompt until an empty answer.
    Interactive,
    /// Print help and exit successfully.
    Help,
    /// Wrong number of patterns.
    ParameterError,
    /// One lookup.
    Lookup(Query),
}

/// Classify positional arguments. Note the order of the patterns on the
/// command line: route, stop, direction.
pub fn classify(patterns: &[String]) -> Invocation {
    match patterns {
        [] => Invocation::Interactive,
        [first, ..] if is_help_request(first) => Invocation::Help,
        [route, stop, direction] => Invocation::Lookup(Query::new(route, stop, direction)),
        _ => Invocation::ParameterError,
    }
}

/// `/?`, or anything starting with `--h` or `/h` in any case.
fn is_help_request(arg: &str) -> bool {
    let upper = arg.to_uppercase();
    arg == "/?" || upper.starts_with("--H") || upper.starts_with("/H")
}

/// Run the program for parsed arguments.
pub async fn run(cli: Cli) -> ExitCode {
    let invocation = classify(&cli.patterns);

    let query = match invocation {
        Invocation::Help => {
            println!("{HELP_TEXT}");
            return ExitCode::SUCCESS;
        }
        Invocation::ParameterError => {
            println!("{PARAMETER_ERROR}{HELP_TEXT}");
            return ExitCode::FAILURE;
        }
        Invocation::Lookup(query) => Some(query),
        Invocation::Interactive => None,
    };

    let backend = match Backend::new(BackendConfig::from(cli.backend)) {
        Ok(backend) => backend,
        Err(e) => {
            error!(error = %e, "failed to set up NexTrip gateway");
            println!("{}", LookupError::from(e));
            return ExitCode::SUCCESS;
        }
    };
    let nextbus = NextBus::new(backend);

    match query {
        Some(query) => {
            println!("{}", nextbus.next_bus(&query, Utc::now(), cli.verbose).await);
            ExitCode::SUCCESS
        }
        None => {
            let stdin = BufReader::new(io::stdin());
            let mut stdout = io::stdout();
            match run_interactive(&nextbus, cli.verbose, stdin, &mut stdout).await {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    error!(error = %e, "interactive session failed");
                    ExitCode::FAILURE
                }
            }
        }
    }
}

/// Prompt for route, stop and direction repeatedly, printing each result.
///
/// Returns when any answer is empty or input ends.
pub async fn run_interactive<G, R, W>(
    nextbus: &NextBus<G>,
    verbose: bool,
    input: R,
    output: &mut W,
) -> std::io::Result<()>
where
    G: Gateway,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();

    loop {
        output.write_all(BANNER.as_bytes()).await?;

        let Some(route) = prompt(&mut lines, output, ROUTE_PROMPT).await? else {
            return Ok(());
        };
        let Some(stop) = prompt(&mut lines, output, STOP_PROMPT).await? else {
            return Ok(());
        };
        let Some(direction) = prompt(&mut lines, output, DIRECTION_PROMPT).await? else {
            return Ok(());
        };

        let query = Query::new(route, stop, direction);
        let result = nextbus.next_bus(&query, Utc::now(), verbose).await;

        output.write_all(format!("\n{result}\n\n").as_bytes()).await?;
        output.flush().await?;
    }
}

/// Show `text` and read one answer; `None` for an empty answer or end of input.
async fn prompt<R, W>(lines: &mut Lines<R>, output: &mut W, text: &str) -> std::io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    output.write_all(text.as_bytes()).await?;
    output.flush().await?;

    match lines.next_line().await? {
        Some(answer) if !answer.is_empty() => Ok(Some(answer)),
        _ => Ok(None),
    }
}
