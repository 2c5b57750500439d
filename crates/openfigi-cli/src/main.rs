//! Command-line interface for the OpenFIGI mapping API.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use openfigi_core::config::{endpoints, env_vars};
use openfigi_core::prelude::*;
use openfigi_core::TracingSink;

/// OpenFIGI client - Map financial identifiers to FIGIs.
#[derive(Parser, Debug)]
#[command(name = "openfigi")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Action to perform.
    #[command(subcommand)]
    command: Command,

    /// API key sent with every request.
    #[arg(long, global = true, env = env_vars::API_KEY, hide_env_values = true)]
    api_key: Option<String>,

    /// API origin.
    #[arg(long, global = true, env = env_vars::BASE_URL, default_value = endpoints::PRODUCTION)]
    base_url: String,

    /// Verbose output.
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Get the FIGI mapping for a ticker.
    Mapping {
        /// Ticker to look up.
        ticker: String,
        /// Pretty-print the JSON output.
        #[arg(long)]
        pretty: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so stdout carries only the JSON result.
fn init_logging(verbose: bool) {
    let default_directive = if verbose { "openfigi=debug" } else { "openfigi=warn" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));

    if env_vars::log_json() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
            .init();
    }
}

async fn run(args: Args) -> Result<()> {
    let mut builder = FigiClient::builder()
        .with_base_url(args.base_url)
        .with_sink(Arc::new(TracingSink));
    if let Some(key) = args.api_key.filter(|k| !k.is_empty()) {
        builder = builder.with_api_key(key);
    }
    let client = builder.build()?;

    match args.command {
        Command::Mapping { ticker, pretty } => run_mapping(&client, ticker, pretty).await,
    }
}

/// Map one ticker and print the records as JSON.
async fn run_mapping(client: &FigiClient, ticker: String, pretty: bool) -> Result<()> {
    let (ctx, interrupt) = CallContext::with_interrupt();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::debug!("Received Ctrl+C, cancelling request");
            let _ = interrupt.send(true);
        }
    });

    let records = client
        .map_one(&ctx, &MappingRequest::ticker(ticker))
        .await?;

    let out = if pretty {
        serde_json::to_string_pretty(&records)?
    } else {
        serde_json::to_string(&records)?
    };
    println!("{}", out);
    Ok(())
}
