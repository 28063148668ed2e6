// src/output.rs

//! Timestamped pass-through of child output.
//!
//! Every line is written as `"{elapsed:04} {line}"` with the line bytes
//! untouched (including the trailing newline, if any) and the writer is
//! flushed straight away so a live observer sees each line as it arrives.

use tokio::io::{AsyncWrite, AsyncWriteExt};

/// Prefix for a line seen `elapsed` whole seconds after launch.
///
/// Pads to four digits; larger values are printed in full.
pub fn format_prefix(elapsed: u64) -> String {
    format!("{elapsed:04} ")
}

#[derive(Debug)]
pub struct Timestamper<W> {
    out: W,
}

impl<W: AsyncWrite + Unpin> Timestamper<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Write one annotated line and flush.
    pub async fn write_line(&mut self, elapsed: u64, line: &[u8]) -> std::io::Result<()> {
        self.out.write_all(format_prefix(elapsed).as_bytes()).await?;
        self.out.write_all(line).await?;
        self.out.flush().await
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
