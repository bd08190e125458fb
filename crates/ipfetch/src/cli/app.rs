use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::cli::cat::CatArg;
use crate::cli::check::CheckArg;
use crate::cli::cid::CidArg;

#[derive(Debug, Parser)]
#[command(
    name = "ipfetch",
    version = env!("CARGO_PKG_VERSION"),
    about,
    long_about = None,
    propagate_version = true
)]
pub struct App {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[command(alias = "get", name = "cat", about = "Fetch, verify and print content")]
    Cat(CatArg),
    #[command(name = "cid", about = "Compute the v0 identifier of a local file")]
    Cid(CidArg),
    #[command(name = "check", about = "Validate an identifier without fetching it")]
    Check(CheckArg),
}

impl App {
    pub async fn run(self) -> Result<()> {
        match self.cmd {
            Commands::Cat(arg) => arg.run().await,
            Commands::Cid(arg) => arg.run(),
            Commands::Check(arg) => arg.run(),
        }
    }
}
