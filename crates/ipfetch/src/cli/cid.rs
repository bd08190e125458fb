use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use ipfetch_cid::{ContentId, encode_v0};
use ipfetch_verify::{HashingReader, Sha256Hasher, verify_digest};
use tracing::debug;

#[derive(Args, Clone, Debug)]
pub struct CidArg {
    #[arg(help = "File to hash")]
    file: PathBuf,

    #[arg(long, value_name = "ID", help = "Fail unless the file verifies against this identifier")]
    expect: Option<String>,
}

impl CidArg {
    pub fn run(self) -> Result<()> {
        let digest = file_digest(&self.file)?;

        if let Some(expected) = &self.expect {
            check_digest(expected, &digest)
                .with_context(|| format!("{} does not match {expected}", self.file.display()))?;
        }

        println!("{}", encode_v0(digest));
        Ok(())
    }
}

/// SHA-256 of the file's raw bytes, read in a single streaming pass.
fn file_digest(path: &Path) -> Result<[u8; 32]> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let mut reader = HashingReader::new(file, Sha256Hasher::new());
    io::copy(&mut reader, &mut io::sink())
        .with_context(|| format!("Failed to read {}", path.display()))?;

    debug!(path = %path.display(), len = reader.bytes_read(), "hashed file");
    Ok(reader.finish())
}

fn check_digest(expected: &str, digest: &[u8; 32]) -> Result<()> {
    let cid = ContentId::from_input(expected)?;
    verify_digest(&cid, digest)?;
    Ok(())
}
