use async_trait::async_trait;

use crate::error::LoadError;
use crate::models::TreeQuery;

use super::{RawResponse, TreeSource};

pub struct HttpTreeSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTreeSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl TreeSource for HttpTreeSource {
    async fn fetch(&self, query: &TreeQuery) -> Result<RawResponse, LoadError> {
        let url = query.url(&self.base_url);
        tracing::debug!(%url, "requesting tree");

        let response = self.client.get(&url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(RawResponse { status, body })
    }
}
