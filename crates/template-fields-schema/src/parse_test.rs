use super::{ContentParser, JsonContentParser};

#[test]
fn parses_a_node_array_with_unnamed_nodes() {
    let raw = r#"[
        {"name": null},
        {"name": "core/template-part", "attributes": {"slug": "header"}},
        {"name": "core/paragraph", "attributes": {"content": "Hello"}}
    ]"#;

    let nodes = JsonContentParser.parse(raw).expect("must parse");
    assert_eq!(nodes.len(), 3);
    assert!(nodes[0].is_unnamed());
    assert_eq!(nodes[1].attribute_str("slug"), Some("header"));
    assert_eq!(nodes[2].name.as_deref(), Some("core/paragraph"));
}

#[test]
fn blank_content_parses_to_an_empty_sequence() {
    assert!(JsonContentParser.parse("").expect("must parse").is_empty());
    assert!(JsonContentParser.parse("   \n").expect("must parse").is_empty());
}

#[test]
fn malformed_content_is_rejected_with_the_parser_reason() {
    let error = JsonContentParser
        .parse("<!-- wp:paragraph -->")
        .expect_err("must reject");
    assert!(error.starts_with("content parse failed:"));
}
