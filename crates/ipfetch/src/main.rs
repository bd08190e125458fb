use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use crate::cli::App;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // logs go to stderr so `cat` output stays clean
    let _ = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    App::parse().run().await
}
