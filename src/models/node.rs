use serde::Deserialize;
use serde_json::Value;

/// One entry of a tree received from the tree-computation service.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(from = "RawNode")]
pub enum TreeNode {
    /// A per-entry traversal failure, e.g. an unreadable subdirectory.
    Error { name: String, error: String },
    /// `children` is `None` when the service did not expand the directory.
    Directory {
        name: String,
        children: Option<Vec<TreeNode>>,
    },
    /// `size` is the raw JSON value; it is validated when formatted.
    File { name: String, size: Value },
}

impl TreeNode {
    pub fn name(&self) -> &str {
        match self {
            TreeNode::Error { name, .. }
            | TreeNode::Directory { name, .. }
            | TreeNode::File { name, .. } => name,
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn count(&self) -> usize {
        match self {
            TreeNode::Directory {
                children: Some(children),
                ..
            } => 1 + children.iter().map(TreeNode::count).sum::<usize>(),
            _ => 1,
        }
    }
}

#[derive(Deserialize)]
struct RawNode {
    #[serde(default)]
    name: Value,
    #[serde(rename = "type", default)]
    kind: Value,
    #[serde(default)]
    size: Value,
    #[serde(default)]
    children: Option<Vec<Option<TreeNode>>>,
    #[serde(default)]
    error: Value,
}

impl From<RawNode> for TreeNode {
    fn from(raw: RawNode) -> Self {
        let name = match &raw.name {
            Value::Null => String::new(),
            other => message_text(other),
        };

        if is_truthy(&raw.error) {
            return TreeNode::Error {
                name,
                error: message_text(&raw.error),
            };
        }

        match raw.kind.as_str() {
            // null entries are skipped, siblings still render
            Some("directory") => TreeNode::Directory {
                name,
                children: raw
                    .children
                    .map(|children| children.into_iter().flatten().collect()),
            },
            _ => TreeNode::File {
                name,
                size: raw.size,
            },
        }
    }
}

/// JavaScript truthiness, which the service's clients use to test `error`.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

pub(crate) fn message_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
