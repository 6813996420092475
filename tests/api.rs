use recipebook::api::{delete_tag, get_tags, post_tag};
use recipebook::{dataset, TagRegistry};
use serde_json::json;

#[test]
fn get_tags_wraps_sorted_listing() {
    let registry = TagRegistry::seeded(dataset::recipes());
    let response = get_tags(&registry);

    assert_eq!(response.status, 200);
    assert_eq!(response.body["ok"], json!(true));
    let data = response.body["data"].as_array().unwrap();
    assert_eq!(data.len(), 4);
    assert_eq!(data[0], json!({ "name": "noodles", "count": 1 }));
    assert_eq!(data[3], json!({ "name": "weeknight", "count": 1 }));
}

#[test]
fn post_tag_created() {
    let mut registry = TagRegistry::new();
    let response = post_tag(&mut registry, r#"{ "name": " Brunch ", "count": 2 }"#);

    assert_eq!(response.status, 201);
    assert_eq!(response.body["ok"], json!(true));
    assert_eq!(response.body["data"], json!({ "name": "brunch", "count": 2 }));
}

#[test]
fn post_tag_rejects_missing_name() {
    let mut registry = TagRegistry::new();

    let response = post_tag(&mut registry, r#"{ "count": 2 }"#);
    assert_eq!(response.status, 400);
    assert_eq!(response.body["ok"], json!(false));
    assert_eq!(response.body["error"], json!("Tag name is required"));

    let response = post_tag(&mut registry, r#"{ "name": "   " }"#);
    assert_eq!(response.status, 400);
}

#[test]
fn post_tag_rejects_malformed_json() {
    let mut registry = TagRegistry::new();
    let response = post_tag(&mut registry, "not json");
    assert_eq!(response.status, 400);
    assert_eq!(response.body["ok"], json!(false));
}

#[test]
fn delete_tag_success_and_failures() {
    let mut registry = TagRegistry::seeded(dataset::recipes());

    let response = delete_tag(&mut registry, Some("salad"));
    assert_eq!(response.status, 200);
    assert_eq!(response.body, json!({ "ok": true }));

    let response = delete_tag(&mut registry, Some("salad"));
    assert_eq!(response.status, 404);
    assert_eq!(response.body["error"], json!("Tag not found: salad"));

    let response = delete_tag(&mut registry, None);
    assert_eq!(response.status, 400);
    assert_eq!(response.body["error"], json!("Tag name is required"));
}
