use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::Mutex;

use crate::core::interpret::interpret;
use crate::core::render::render;
use crate::dom::Element;
use crate::error::LoadError;
use crate::models::{Controls, TreeNode, TreeQuery};
use crate::source::{HttpTreeSource, TreeSource};

pub const TREE_CONTAINER_ID: &str = "tree-container";
pub const ERROR_CONTAINER_ID: &str = "error-container";

/// Everything the viewer needs, built once at startup.
#[derive(Clone, Debug)]
pub struct ViewerContext {
    pub controls: Controls,
    pub base_url: String,
}

/// What caused a load. Only used for logging.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Trigger {
    Initial,
    Refresh,
    Commit,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LoadOutcome {
    Loaded { nodes: usize },
    Failed(LoadError),
    /// A newer load was issued while this one was in flight.
    Stale,
}

/// The two output areas. Exactly one of them has content once a load settles.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    pub tree_container: Element,
    pub error_area: String,
    pub root: Option<TreeNode>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            tree_container: Element::new("div").with_id(TREE_CONTAINER_ID),
            error_area: String::new(),
            root: None,
        }
    }
}

impl ViewState {
    pub fn to_html(&self) -> String {
        let error = Element::new("div")
            .with_id(ERROR_CONTAINER_ID)
            .with_text(self.error_area.as_str());
        format!("{}\n{}\n", error.to_html(), self.tree_container.to_html())
    }
}

pub struct TreeViewer<S: TreeSource> {
    source: S,
    controls: Mutex<Controls>,
    state: Mutex<ViewState>,
    issued: AtomicU64,
}

impl TreeViewer<HttpTreeSource> {
    pub fn connect(context: ViewerContext) -> Self {
        let source = HttpTreeSource::new(context.base_url.clone());
        Self::new(context, source)
    }
}

impl<S: TreeSource> TreeViewer<S> {
    pub fn new(context: ViewerContext, source: S) -> Self {
        Self {
            source,
            controls: Mutex::new(context.controls),
            state: Mutex::new(ViewState::default()),
            issued: AtomicU64::new(0),
        }
    }

    pub async fn set_path(&self, path: impl Into<String>) {
        self.controls.lock().await.path = path.into();
    }

    pub async fn set_depth(&self, depth: impl Into<String>) {
        self.controls.lock().await.depth = depth.into();
    }

    pub async fn set_show_hidden(&self, show_hidden: bool) {
        self.controls.lock().await.show_hidden = show_hidden;
    }

    pub async fn view(&self) -> ViewState {
        self.state.lock().await.clone()
    }

    /// Key press in the path field. Only `Enter` loads.
    pub async fn key_pressed(&self, key: &str) -> Option<LoadOutcome> {
        if key == "Enter" {
            Some(self.load(Trigger::Commit).await)
        } else {
            None
        }
    }

    /// Requests a tree for the current controls and updates the view.
    ///
    /// A success replaces the tree container's content and blanks the error
    /// area. A failure empties the tree container and writes
    /// `Error: <message>`. If another load was issued after this one, the
    /// result is dropped and the view is left alone.
    pub async fn load(&self, trigger: Trigger) -> LoadOutcome {
        let query = TreeQuery::from_controls(&*self.controls.lock().await);
        let sequence = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(
            sequence,
            ?trigger,
            path = %query.path,
            depth = %query.depth,
            hidden = query.show_hidden,
            "loading tree"
        );

        let result = match self.source.fetch(&query).await {
            Ok(response) => interpret(response),
            Err(err) => Err(err),
        };

        let mut state = self.state.lock().await;
        let latest = self.issued.load(Ordering::SeqCst);
        if sequence != latest {
            tracing::debug!(sequence, latest, "discarding stale tree response");
            return LoadOutcome::Stale;
        }

        state.tree_container.clear();
        match result {
            Ok(root) => {
                render(&root, &mut state.tree_container, 0);
                state.error_area.clear();
                let nodes = root.count();
                state.root = Some(root);
                tracing::info!(sequence, nodes, path = %query.path, "tree loaded");
                LoadOutcome::Loaded { nodes }
            }
            Err(err) => {
                state.error_area = format!("Error: {err}");
                state.root = None;
                tracing::warn!(sequence, path = %query.path, error = %err, "tree load failed");
                LoadOutcome::Failed(err)
            }
        }
    }
}
