//! Plain-text rendering of the visible navigation menu

use std::fmt::Write;

use navgate_common::{PathNamespace, Tree};

use crate::resolve::{RouteTable, filter_tree, resolve_access};

/// Render the menu a user would see in `namespace`
///
/// One line per visible node, indented by depth. Leaves show their resolved
/// path and access level; the entry active for `current_path` is marked
/// with `*`.
pub fn render_menu(
    tree: &Tree,
    namespace: PathNamespace,
    table: &RouteTable,
    current_path: Option<&str>,
) -> String {
    let visible = filter_tree(tree, namespace, table.restricted());
    let mut out = String::new();

    for (node, depth) in visible.iter() {
        let indent = "  ".repeat(depth - 1);
        let label = if node.label.is_empty() {
            node.feature_id.as_str()
        } else {
            node.label.as_str()
        };

        if node.is_group {
            let _ = writeln!(out, "{}  {}/", indent, label);
            continue;
        }

        let path = table.resolve(&node.feature_id, namespace);
        let active = current_path
            .is_some_and(|current| table.is_active(current, &node.feature_id, namespace));
        let marker = if active { '*' } else { ' ' };
        let access = resolve_access(Some(tree), &node.feature_id);
        let _ = writeln!(
            out,
            "{}{} {} [{}] {} ({})",
            indent, marker, label, node.feature_id, path, access
        );
    }

    out
}
