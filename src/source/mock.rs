use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

use crate::error::LoadError;
use crate::models::TreeQuery;

use super::{RawResponse, TreeSource};

#[derive(Clone, Debug)]
enum Response {
    Ok(RawResponse),
    Err(LoadError),
}

#[derive(Clone, Default)]
pub struct MockTreeSource {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    responses: HashMap<String, Response>,
    gates: HashMap<String, oneshot::Receiver<()>>,
    calls: Vec<TreeQuery>,
}

impl MockTreeSource {
    pub fn set_body(&self, path: impl Into<String>, status: u16, body: impl Into<String>) {
        let mut inner = self.inner.lock().expect("mock source lock");
        inner.responses.insert(
            path.into(),
            Response::Ok(RawResponse {
                status,
                body: body.into(),
            }),
        );
    }

    pub fn set_error(&self, path: impl Into<String>, error: LoadError) {
        let mut inner = self.inner.lock().expect("mock source lock");
        inner.responses.insert(path.into(), Response::Err(error));
    }

    /// Holds the response for `path` back until the returned sender fires.
    pub fn gate(&self, path: impl Into<String>) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        let mut inner = self.inner.lock().expect("mock source lock");
        inner.gates.insert(path.into(), rx);
        tx
    }

    pub fn calls(&self) -> Vec<TreeQuery> {
        let inner = self.inner.lock().expect("mock source lock");
        inner.calls.clone()
    }
}

#[async_trait]
impl TreeSource for MockTreeSource {
    async fn fetch(&self, query: &TreeQuery) -> Result<RawResponse, LoadError> {
        let (response, gate) = {
            let mut inner = self.inner.lock().expect("mock source lock");
            inner.calls.push(query.clone());
            (
                inner.responses.get(&query.path).cloned(),
                inner.gates.remove(&query.path),
            )
        };

        if let Some(gate) = gate {
            let _ = gate.await;
        }

        match response {
            Some(Response::Ok(raw)) => Ok(raw),
            Some(Response::Err(err)) => Err(err),
            None => Err(LoadError::Transport(format!(
                "no mock response for {}",
                query.path
            ))),
        }
    }
}
