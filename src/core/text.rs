use std::io::{self, Write};

use crate::core::render::label;
use crate::models::TreeNode;

/// Writes `root` and its subtree as an ASCII outline.
pub fn write_tree<W: Write>(writer: &mut W, root: &TreeNode) -> io::Result<()> {
    writeln!(writer, "{}", label(root))?;

    if let TreeNode::Directory {
        children: Some(children),
        ..
    } = root
    {
        write_children_inner(writer, children, &[])?;
    }

    Ok(())
}

fn write_children_inner<W: Write>(
    writer: &mut W,
    children: &[TreeNode],
    ancestor_has_more: &[bool],
) -> io::Result<()> {
    for (index, node) in children.iter().enumerate() {
        let is_last = index + 1 == children.len();

        for &has_more in ancestor_has_more {
            if has_more {
                writer.write_all(b"|   ")?;
            } else {
                writer.write_all(b"    ")?;
            }
        }

        if is_last {
            writer.write_all(b"`-- ")?;
        } else {
            writer.write_all(b"|-- ")?;
        }

        writeln!(writer, "{}", label(node))?;

        if let TreeNode::Directory {
            children: Some(grandchildren),
            ..
        } = node
            && !grandchildren.is_empty()
        {
            let mut next_ancestor_has_more = ancestor_has_more.to_vec();
            next_ancestor_has_more.push(!is_last);
            write_children_inner(writer, grandchildren, &next_ancestor_has_more)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renders_scaffold_and_errors_in_received_order() {
        let root: TreeNode = serde_json::from_value(json!({
            "type": "directory",
            "name": "root",
            "children": [
                {"type": "file", "name": "z", "size": 1536},
                {"type": "directory", "name": "b", "error": "Permission denied"},
                {
                    "type": "directory",
                    "name": "c",
                    "children": [{"type": "file", "name": "d", "size": 0}],
                },
                {"type": "directory", "name": "e"},
            ],
        }))
        .unwrap();

        let mut out = Vec::new();
        write_tree(&mut out, &root).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert_eq!(
            out,
            concat!(
                "📁 root\n",
                "|-- 📄 z (1.5 KB)\n",
                "|-- ❌ b: Permission denied\n",
                "|-- 📁 c\n",
                "|   `-- 📄 d (0 Bytes)\n",
                "`-- 📁 e\n",
            )
        );
    }

    #[test]
    fn single_file_root_is_one_line() {
        let root: TreeNode = serde_json::from_value(json!({"name": "f", "size": 10})).unwrap();
        let mut out = Vec::new();
        write_tree(&mut out, &root).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "📄 f (10 Bytes)\n");
    }
}
