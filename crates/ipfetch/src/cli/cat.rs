use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use ipfetch_fetch::Retriever;
use tracing::info;

use crate::cli::source::SourceArg;

#[derive(Args, Clone, Debug)]
pub struct CatArg {
    #[arg(help = "Identifier, ipfs://<id> or ipfs://<id>/<path>")]
    input: String,

    #[arg(
        long,
        short,
        value_name = "FILE",
        help = "Write the verified bytes here instead of printing text"
    )]
    output: Option<PathBuf>,

    #[command(flatten)]
    pub source: SourceArg,
}

impl CatArg {
    pub async fn run(self) -> Result<()> {
        let config = self.source.load()?;
        let retriever = Retriever::with_reqwest(config).context("Failed to set up HTTP client")?;

        match &self.output {
            Some(path) => {
                let bytes = retriever
                    .retrieve_bytes(&self.input)
                    .await
                    .with_context(|| format!("Failed to retrieve {}", self.input))?;
                std::fs::write(path, &bytes)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                info!(path = %path.display(), len = bytes.len(), "wrote verified content");
            }
            None => {
                let text = retriever
                    .retrieve(&self.input)
                    .await
                    .with_context(|| format!("Failed to retrieve {}", self.input))?;
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(text.as_bytes())?;
                stdout.flush()?;
            }
        }

        Ok(())
    }
}
