//! Tree retrieval over TCP
//!
//! Opens one connection per fetch, writes a [`TreeRequest`] line and reads a
//! single [`TreeResponse`] line back. Transport security and authentication
//! are handled by the deployment in front of the provider.

use std::time::Duration;

use async_trait::async_trait;
use navgate_common::io::{DEFAULT_READ_TIMEOUT, read_json_line_with_timeout, write_json_line};
use navgate_common::protocol::{TreeRequest, TreeResponse};
use navgate_common::{PlatformClass, Tree};
use tokio::io::BufReader;
use tokio::net::TcpStream;
use tracing::debug;

use super::error::FetchError;
use super::source::{TreeSource, UserContext, tree_from_response};

/// Fetches trees from a provider listening on `host:port`
#[derive(Debug, Clone)]
pub struct TcpTreeSource {
    host: String,
    port: u16,
    read_timeout: Duration,
}

impl TcpTreeSource {
    pub fn new(host: &str, port: u16) -> Self {
        Self {
            host: host.to_string(),
            port,
            read_timeout: DEFAULT_READ_TIMEOUT,
        }
    }

    /// Override the time allowed for the response line
    pub fn with_read_timeout(mut self, read_timeout: Duration) -> Self {
        self.read_timeout = read_timeout;
        self
    }
}

#[async_trait]
impl TreeSource for TcpTreeSource {
    async fn fetch_tree(
        &self,
        user: &UserContext,
        platform: PlatformClass,
    ) -> Result<Tree, FetchError> {
        let stream = TcpStream::connect((self.host.as_str(), self.port))
            .await
            .map_err(|e| {
                FetchError::Transport(format!("{}:{}: {}", self.host, self.port, e))
            })?;
        let (read_half, mut write_half) = stream.into_split();

        let request = TreeRequest::new(&user.username, user.token.as_deref(), platform);
        debug!(request_id = %request.request_id, host = %self.host, port = self.port, "sending tree request");
        write_json_line(&mut write_half, &request).await?;

        let mut reader = BufReader::new(read_half);
        let response: TreeResponse =
            read_json_line_with_timeout(&mut reader, self.read_timeout).await?;

        tree_from_response(response, Some(request.request_id))
    }
}
