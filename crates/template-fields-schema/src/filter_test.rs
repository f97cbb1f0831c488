use super::{filter_top_level, FOOTER_SLUG, HEADER_SLUG, TEMPLATE_PART_TAG};
use serde_json::json;
use template_fields_core::ContentNode;

fn template_part(slug: &str) -> ContentNode {
    ContentNode::named(TEMPLATE_PART_TAG).with_attribute("slug", json!(slug))
}

fn sample_nodes() -> Vec<ContentNode> {
    vec![
        ContentNode::unnamed(),
        template_part(HEADER_SLUG),
        ContentNode::named("core/paragraph"),
        template_part(FOOTER_SLUG),
    ]
}

#[test]
fn header_and_footer_are_dropped_by_default() {
    let kept = filter_top_level(&sample_nodes(), false, false);
    assert_eq!(kept, vec![ContentNode::named("core/paragraph")]);
}

#[test]
fn flags_keep_header_and_footer_in_original_order() {
    let kept = filter_top_level(&sample_nodes(), true, true);
    assert_eq!(
        kept,
        vec![
            template_part(HEADER_SLUG),
            ContentNode::named("core/paragraph"),
            template_part(FOOTER_SLUG),
        ]
    );
}

#[test]
fn flags_are_independent() {
    let kept = filter_top_level(&sample_nodes(), true, false);
    assert_eq!(
        kept,
        vec![template_part(HEADER_SLUG), ContentNode::named("core/paragraph")]
    );

    let kept = filter_top_level(&sample_nodes(), false, true);
    assert_eq!(
        kept,
        vec![ContentNode::named("core/paragraph"), template_part(FOOTER_SLUG)]
    );
}

#[test]
fn unnamed_nodes_are_dropped_regardless_of_flags() {
    let kept = filter_top_level(&sample_nodes(), true, true);
    assert!(kept.iter().all(|node| !node.is_unnamed()));
}

#[test]
fn template_parts_with_other_slugs_are_kept() {
    let nodes = vec![template_part("sidebar")];
    let kept = filter_top_level(&nodes, false, false);
    assert_eq!(kept, nodes);
}

#[test]
fn children_are_never_inspected() {
    let nested_header = serde_json::to_value(template_part(HEADER_SLUG)).expect("must serialize");
    let parent = ContentNode::named("core/group").with_child(nested_header.clone());

    let kept = filter_top_level(&[parent.clone()], false, false);
    assert_eq!(kept, vec![parent]);
    assert_eq!(kept[0].children, vec![nested_header]);
}

#[test]
fn input_nodes_are_left_untouched() {
    let nodes = sample_nodes();
    let before = nodes.clone();
    let _ = filter_top_level(&nodes, false, false);
    assert_eq!(nodes, before);
}
