//! envboot: load `.env` overrides, wire the media client, report status

use std::process::ExitCode;

use anyhow::Result;

mod cli;
mod logger;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    cli::run().await
}
