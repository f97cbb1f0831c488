use template_fields_core::ContentNode;

pub const TEMPLATE_PART_TAG: &str = "core/template-part";
pub const HEADER_SLUG: &str = "header";
pub const FOOTER_SLUG: &str = "footer";

/// Decides which top-level nodes of a template survive. Unnamed nodes are
/// always dropped; header and footer template parts are dropped unless the
/// matching flag is set. Order is preserved, input is never mutated, and
/// children are never inspected.
pub fn filter_top_level(
    nodes: &[ContentNode],
    show_header: bool,
    show_footer: bool,
) -> Vec<ContentNode> {
    nodes
        .iter()
        .filter(|node| keep_node(node, show_header, show_footer))
        .cloned()
        .collect()
}

fn keep_node(node: &ContentNode, show_header: bool, show_footer: bool) -> bool {
    let Some(name) = node.name.as_deref() else {
        return false;
    };
    if name == TEMPLATE_PART_TAG {
        match node.attribute_str("slug") {
            Some(slug) if slug == HEADER_SLUG => return show_header,
            Some(slug) if slug == FOOTER_SLUG => return show_footer,
            _ => {}
        }
    }
    true
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;
