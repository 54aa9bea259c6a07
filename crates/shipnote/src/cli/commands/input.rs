//! Body input shared by the formatting commands

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::Args;
use tracing::debug;

use shipnote_core::ShipnoteError;

/// Where to read the pull request body from
#[derive(Debug, Args)]
pub struct BodyArgs {
    /// Pull request body; `-` or omitted reads stdin
    pub body: Option<String>,

    /// Read the body from a file
    #[arg(short, long, conflicts_with = "body")]
    pub file: Option<PathBuf>,

    /// Deployment time shown in the header (RFC 3339, default: now)
    #[arg(long, value_name = "RFC3339")]
    pub deployed_at: Option<DateTime<Utc>>,
}

impl BodyArgs {
    /// Read the body, rejecting anything larger than `limit` bytes
    pub fn read(&self, limit: usize) -> anyhow::Result<String> {
        if let Some(path) = &self.file {
            let file = std::fs::File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            return read_bounded(file, limit);
        }

        match self.body.as_deref() {
            None | Some("-") => read_bounded(std::io::stdin().lock(), limit),
            Some(body) => {
                check_size(body.len(), limit)?;
                Ok(body.to_string())
            }
        }
    }

    pub fn deployed_at(&self) -> DateTime<Utc> {
        self.deployed_at.unwrap_or_else(Utc::now)
    }
}

/// Read at most `limit` bytes of UTF-8 text
pub fn read_bounded(reader: impl Read, limit: usize) -> anyhow::Result<String> {
    let mut buf = Vec::new();
    let mut reader = reader.take(limit as u64 + 1);
    reader.read_to_end(&mut buf)?;
    check_size(buf.len(), limit)?;
    debug!(bytes = buf.len(), "body read");
    String::from_utf8(buf).context("Body is not valid UTF-8")
}

fn check_size(size: usize, limit: usize) -> Result<(), ShipnoteError> {
    if size > limit {
        return Err(ShipnoteError::InputTooLarge { size, limit });
    }
    Ok(())
}
