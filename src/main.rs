use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mediacheck::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr so text/JSON reports on stdout stay parseable.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    cli.run().await
}
