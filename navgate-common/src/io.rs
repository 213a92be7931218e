//! I/O utilities for sending and receiving protocol messages
//!
//! Messages are single lines of JSON terminated by `\n`. Reads are bounded
//! both in size ([`MAX_LINE_LENGTH`]) and in time.

use std::fmt;
use std::io;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Maximum length of a single protocol line in bytes (4MB)
pub const MAX_LINE_LENGTH: u64 = 4 * 1024 * 1024;

/// Default time allowed for a complete line to arrive
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(15);

/// Errors raised while exchanging protocol lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Underlying I/O failure
    Io(String),
    /// The line did not complete in time
    Timeout,
    /// The peer closed the connection before a line was received
    ConnectionClosed,
    /// The line exceeded [`MAX_LINE_LENGTH`]
    LineTooLong,
    /// The line was not valid JSON for the expected message
    InvalidJson(String),
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::Io(msg) => write!(f, "I/O error: {}", msg),
            ProtocolError::Timeout => write!(f, "timed out waiting for response"),
            ProtocolError::ConnectionClosed => write!(f, "connection closed"),
            ProtocolError::LineTooLong => {
                write!(f, "message exceeds {} bytes", MAX_LINE_LENGTH)
            }
            ProtocolError::InvalidJson(msg) => write!(f, "invalid message: {}", msg),
        }
    }
}

impl std::error::Error for ProtocolError {}

impl From<io::Error> for ProtocolError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::UnexpectedEof
            | io::ErrorKind::ConnectionReset
            | io::ErrorKind::BrokenPipe => ProtocolError::ConnectionClosed,
            _ => ProtocolError::Io(err.to_string()),
        }
    }
}

/// Serialize a message and write it as one line
pub async fn write_json_line<W, T>(writer: &mut W, message: &T) -> Result<(), ProtocolError>
where
    W: AsyncWrite + Unpin,
    T: Serialize,
{
    let mut payload =
        serde_json::to_vec(message).map_err(|e| ProtocolError::InvalidJson(e.to_string()))?;
    payload.push(b'\n');
    writer.write_all(&payload).await?;
    writer.flush().await?;
    Ok(())
}

/// Read one line and deserialize it, without a timeout
///
/// Prefer [`read_json_line_with_timeout`] for anything talking to a peer.
pub async fn read_json_line<R, T>(reader: &mut R) -> Result<T, ProtocolError>
where
    R: AsyncBufRead + Unpin,
    T: DeserializeOwned,
{
    let mut line = Vec::new();
    let read = (&mut *reader)
        .take(MAX_LINE_LENGTH + 1)
        .read_until(b'\n', &mut line)
        .await?;

    if read == 0 {
        return Err(ProtocolError::ConnectionClosed);
    }
    if line.last() != Some(&b'\n') {
        if read as u64 > MAX_LINE_LENGTH {
            return Err(ProtocolError::LineTooLong);
        }
        return Err(ProtocolError::ConnectionClosed);
    }
    line.pop();

    serde_json::from_slice(&line).map_err(|e| ProtocolError::InvalidJson(e.to_string()))
}

/// Read one line and deserialize it, failing if it does not complete in time
pub async fn read_json_line_with_timeout<R, T>(
    reader: &mut R,
    timeout: Duration,
) -> Result<T, ProtocolError>
where
    R: AsyncBufRead + Unpin,
    T: DeserializeOwned,
{
    match tokio::time::timeout(timeout, read_json_line(reader)).await {
        Ok(result) => result,
        Err(_) => Err(ProtocolError::Timeout),
    }
}
