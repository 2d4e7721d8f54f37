mod http;

#[cfg(test)]
mod mock;

pub use http::HttpTreeSource;

#[cfg(test)]
pub use mock::MockTreeSource;

use async_trait::async_trait;

use crate::error::LoadError;
use crate::models::TreeQuery;

/// Status and body of a completed exchange with the tree service.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait TreeSource: Send + Sync {
    /// Fails only when the exchange itself could not complete.
    async fn fetch(&self, query: &TreeQuery) -> Result<RawResponse, LoadError>;
}
