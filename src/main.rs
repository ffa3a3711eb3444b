//! Request gate CLI.
//!
//! Loads a chain configuration, evaluates one request from a file or
//! stdin against the compiled chain, prints the verdict, and exits
//! non-zero on rejection.

use std::fs;
use std::io::Read as _;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use serde_json::json;

use request_gate::config::loader::load_config;
use request_gate::observability;
use request_gate::{Chain, Request};

#[derive(Parser)]
#[command(name = "request-gate")]
#[command(about = "Evaluate a request against a configured match chain", long_about = None)]
struct Cli {
    /// Path to the TOML chain configuration.
    #[arg(short, long, default_value = "gate.toml")]
    config: PathBuf,

    /// File holding the request text; stdin when omitted.
    #[arg(short, long)]
    request: Option<PathBuf>,

    /// Print the verdict as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = load_config(&cli.config)?;
    observability::logging::init(&config.observability.log_level);

    tracing::info!(
        config = %cli.config.display(),
        stages = config.rules.len(),
        "Configuration loaded"
    );

    let chain = Chain::from_config(&config.rules);

    let text = match &cli.request {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let request = Request::new(text);

    let accepted = chain.handle(&request).is_some();
    tracing::info!(accepted, stages = chain.len(), "Request evaluated");

    if cli.json {
        let verdict = json!({ "accepted": accepted, "stages": chain.len() });
        println!("{}", serde_json::to_string_pretty(&verdict)?);
    } else if accepted {
        println!("accepted");
    } else {
        println!("rejected");
    }

    Ok(if accepted {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
