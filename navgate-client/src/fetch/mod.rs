//! Permission tree retrieval
//!
//! [`TreeFetcher`] owns the current tree snapshot together with the loading
//! and error state. Trees come from a [`TreeSource`]: the provider over TCP
//! or a saved tree document on disk.

mod error;
mod fetcher;
mod file;
mod network;
mod source;

pub use error::FetchError;
pub use fetcher::{FetchStatus, TreeFetcher, TreeSnapshot};
pub use file::FileTreeSource;
pub use network::TcpTreeSource;
pub use source::{TreeSource, UserContext, tree_from_response};
