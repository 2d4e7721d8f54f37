mod node;
mod query;

pub use node::TreeNode;
pub(crate) use node::{is_truthy, message_text};
pub use query::{Controls, TreeQuery};
