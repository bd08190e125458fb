use anyhow::{Context, Result};
use clap::Args;
use ipfetch_cid::{ContentId, normalize};

#[derive(Args, Clone, Debug)]
pub struct CheckArg {
    #[arg(help = "Identifier or ipfs:// URI")]
    input: String,
}

impl CheckArg {
    pub fn run(self) -> Result<()> {
        println!("{}", describe(&self.input)?);
        Ok(())
    }
}

fn describe(input: &str) -> Result<String> {
    let normalized = normalize(input);
    let cid = ContentId::parse(normalized.cid)
        .with_context(|| format!("'{input}' is not a usable identifier"))?;

    let mut line = format!("{cid} {}", cid.version());
    if let Some(path) = normalized.path {
        line.push_str(&format!(" (path '{path}' would be ignored)"));
    }
    Ok(line)
}
