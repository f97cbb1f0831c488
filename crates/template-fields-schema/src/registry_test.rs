use super::{MemoryRegistry, TemplateRegistry};
use crate::documents::Template;

fn template(identity: &str, kind: &str, title: &str) -> Template {
    Template {
        identity: identity.to_string(),
        kind: kind.to_string(),
        title: title.to_string(),
        raw_content: String::new(),
    }
}

#[test]
fn list_returns_templates_in_stored_order() {
    let registry = MemoryRegistry::new(vec![
        template("t1", "wp_template", "Front Page"),
        template("t2", "wp_template", "Archive"),
    ]);

    let listed = registry.list_templates().expect("must list");
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].identity, "t1");
    assert_eq!(listed[1].identity, "t2");
}

#[test]
fn fetch_matches_identity_and_kind() {
    let registry = MemoryRegistry::new(vec![template("t1", "wp_template", "Front Page")]);

    let found = registry
        .fetch_template("t1", "wp_template")
        .expect("must fetch");
    assert_eq!(found.map(|t| t.title), Some("Front Page".to_string()));

    let wrong_kind = registry
        .fetch_template("t1", "wp_template_part")
        .expect("must fetch");
    assert!(wrong_kind.is_none());
}

#[test]
fn unknown_identity_is_absent_not_an_error() {
    let registry = MemoryRegistry::new(vec![template("t1", "wp_template", "Front Page")]);
    let missing = registry
        .fetch_template("nope", "wp_template")
        .expect("must fetch");
    assert!(missing.is_none());
}

#[test]
fn empty_stored_kind_matches_any_requested_kind() {
    let registry = MemoryRegistry::new(vec![template("t1", "", "Front Page")]);
    let found = registry
        .fetch_template("t1", "wp_custom")
        .expect("must fetch");
    assert!(found.is_some());
}
