use crate::core::format::format_size;
use crate::dom::Element;
use crate::models::TreeNode;

pub const ERROR_GLYPH: &str = "❌";
pub const FOLDER_GLYPH: &str = "📁";
pub const FILE_GLYPH: &str = "📄";

/// Appends the element subtree for `node` under `parent`. Children keep the
/// order they were received in. Never touches existing content of `parent`.
pub fn render(node: &TreeNode, parent: &mut Element, depth: usize) {
    let mut element = Element::new("div").with_class(format!("node depth-{depth}"));

    match node {
        TreeNode::Error { name, error } => push_error(&mut element, name, error),
        TreeNode::Directory { name, children } => {
            element.push_text(format!("{FOLDER_GLYPH} "));
            element.push_child(Element::new("strong").with_text(name.as_str()));

            if let Some(children) = children {
                let mut container = Element::new("div").with_class("children");
                for child in children {
                    render(child, &mut container, depth + 1);
                }
                element.push_child(container);
            }
        }
        TreeNode::File { name, size } => match format_size(size) {
            Ok(formatted) => element.push_text(format!("{FILE_GLYPH} {name} ({formatted})")),
            Err(err) => push_error(&mut element, name, &err),
        },
    }

    parent.push_child(element);
}

fn push_error(element: &mut Element, name: &str, error: &dyn std::fmt::Display) {
    element.push_text(format!("{ERROR_GLYPH} "));
    element.push_child(
        Element::new("span")
            .with_class("error")
            .with_text(format!("{name}: {error}")),
    );
}

/// One-line label for `node`, the same text its element shows.
pub fn label(node: &TreeNode) -> String {
    match node {
        TreeNode::Error { name, error } => format!("{ERROR_GLYPH} {name}: {error}"),
        TreeNode::Directory { name, .. } => format!("{FOLDER_GLYPH} {name}"),
        TreeNode::File { name, size } => match format_size(size) {
            Ok(formatted) => format!("{FILE_GLYPH} {name} ({formatted})"),
            Err(err) => format!("{ERROR_GLYPH} {name}: {err}"),
        },
    }
}
