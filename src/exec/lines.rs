// src/exec/lines.rs

//! Line reader over the child's stdout pipe.

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

/// Lazily yields raw lines (newline included) until the pipe closes.
///
/// Lines are bytes, not `String`: emulator consoles happily emit invalid
/// UTF-8 and it must be passed through untouched.
///
/// The partial-line buffer lives in the reader, so dropping a pending
/// [`LineReader::next_line`] future (e.g. inside `tokio::select!`) loses no
/// data.
#[derive(Debug)]
pub struct LineReader<R> {
    reader: BufReader<R>,
    buf: Vec<u8>,
}

impl<R: AsyncRead + Unpin> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            reader: BufReader::new(inner),
            buf: Vec::new(),
        }
    }

    /// Next line, or `None` once the writer side is closed.
    ///
    /// A trailing fragment without `\n` is returned as a final line.
    pub async fn next_line(&mut self) -> std::io::Result<Option<Vec<u8>>> {
        self.reader.read_until(b'\n', &mut self.buf).await?;

        if self.buf.is_empty() {
            return Ok(None);
        }
        Ok(Some(std::mem::take(&mut self.buf)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncWriteExt;

    #[tokio::test]
    async fn yields_lines_then_none() {
        let mut lines = LineReader::new(&b"booting...\nTEST SUCCESS\ntail"[..]);

        assert_eq!(lines.next_line().await.unwrap(), Some(b"booting...\n".to_vec()));
        assert_eq!(lines.next_line().await.unwrap(), Some(b"TEST SUCCESS\n".to_vec()));
        assert_eq!(lines.next_line().await.unwrap(), Some(b"tail".to_vec()));
        assert_eq!(lines.next_line().await.unwrap(), None);
        assert_eq!(lines.next_line().await.unwrap(), None);
    }

    #[tokio::test]
    async fn empty_lines_are_kept() {
        let mut lines = LineReader::new(&b"\n\nx\n"[..]);
        assert_eq!(lines.next_line().await.unwrap(), Some(b"\n".to_vec()));
        assert_eq!(lines.next_line().await.unwrap(), Some(b"\n".to_vec()));
        assert_eq!(lines.next_line().await.unwrap(), Some(b"x\n".to_vec()));
        assert_eq!(lines.next_line().await.unwrap(), None);
    }

    #[tokio::test]
    async fn partial_line_survives_cancelled_read() {
        let (mut tx, rx) = tokio::io::duplex(64);
        let mut lines = LineReader::new(rx);

        tx.write_all(b"Kernel ").await.unwrap();
        let pending = tokio::time::timeout(
            std::time::Duration::from_millis(20),
            lines.next_line(),
        )
        .await;
        assert!(pending.is_err(), "no full line yet");

        tx.write_all(b"panic\n").await.unwrap();
        drop(tx);

        assert_eq!(lines.next_line().await.unwrap(), Some(b"Kernel panic\n".to_vec()));
        assert_eq!(lines.next_line().await.unwrap(), None);
    }
}
