//! Main application entry point (CLI binary).
//!
//! A thin wrapper around the `referer_parser` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Printing the attribution as one JSON line
//!
//! All classification is implemented in the library crate.

use anyhow::{Context, Result};
use std::process;
use clap::Parser;

use referer_parser::config::Opt;
use referer_parser::initialization::init_logger_with;
use referer_parser::Classifier;

#[tokio::main]
async fn main() -> Result<()> {
    let opt = Opt::parse();

    init_logger_with(opt.log_level.clone().into(), opt.log_format.clone())
        .context("Failed to initialize logger")?;

    let classifier = match opt.remote_config() {
        Some(config) => Classifier::remote(config).context("Failed to set up catalog client")?,
        None => Classifier::bundled(),
    };

    let internal: Vec<&str> = opt.internal_domains.iter().map(String::as_str).collect();

    match classifier
        .parse(Some(opt.referer.as_str()), opt.page.as_deref(), &internal)
        .await
    {
        Ok(attribution) => {
            let json =
                serde_json::to_string(&attribution).context("Failed to serialize attribution")?;
            println!("{}", json);
            Ok(())
        }
        Err(e) => {
            eprintln!("referer-parser error: {:#}", e);
            process::exit(1);
        }
    }
}
