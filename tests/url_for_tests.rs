//! Integration tests for single-URL link fields
//!
//! Exercises template resolution, falsy attribute values, error
//! propagation, and the write-only deserialization contract.

use hyperfield::core::template::template_attribute;
use hyperfield::prelude::*;
use serde_json::json;

fn test_registry() -> RouteRegistry {
    RouteRegistry::new()
        .with_base_url("https://api.example.com")
        .register("author", "/authors/{id}")
        .register("authors", "/authors/")
        .register("book", "/books/{id}")
        .register("books", "/books/")
}

fn mock_author() -> Value {
    json!({ "id": 123, "name": "Fred Douglass" })
}

#[test]
fn template_extraction_ignores_whitespace() {
    for raw in ["<id>", " <id>", "<id> ", "< id>", "<id  >", "< id >"] {
        assert_eq!(template_attribute(raw), Some("id"), "failed for {:?}", raw);
    }
}

#[test]
fn url_field_resolves_template_against_entity() {
    let routes = test_registry();
    let field = UrlFor::new("author").param("id", "<id>");

    assert_eq!(field.url(&mock_author(), &routes).unwrap(), "/authors/123");
}

#[test]
fn zero_attribute_value_is_not_treated_as_missing() {
    let routes = test_registry();
    let field = UrlFor::new("author").param("id", "<id>");
    let entity = json!({ "id": 0 });

    assert_eq!(field.url(&entity, &routes).unwrap(), "/authors/0");
}

#[test]
fn falsy_query_params_are_kept() {
    let routes = test_registry();
    let field = UrlFor::new("authors")
        .param("q", "<query>")
        .param("active", "<active>");
    let entity = json!({ "query": "", "active": false });

    assert_eq!(
        field.url(&entity, &routes).unwrap(),
        "/authors/?q=&active=false"
    );
}

#[test]
fn missing_attribute_reports_name_and_entity() {
    let routes = test_registry();
    let field = UrlFor::new("author").param("id", "<not-an-attr>");
    let entity = mock_author();

    let err = field.url(&entity, &routes).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("not-an-attr"));
    assert!(msg.contains("Fred Douglass"));

    match err {
        HyperError::Attribute(e) => {
            assert_eq!(e.attribute, "not-an-attr");
            assert!(e.entity.contains("Fred Douglass"));
        }
        other => panic!("expected attribute error, got {:?}", other),
    }
}

#[test]
fn unknown_endpoint_is_a_route_error() {
    let routes = test_registry();
    let field = UrlFor::new("badendpoint");

    let err = field.url(&mock_author(), &routes).unwrap_err();
    assert!(matches!(
        err,
        HyperError::Route(RouteError::UnknownEndpoint { .. })
    ));
}

#[test]
fn absolute_field_uses_the_base_url() {
    let routes = test_registry();
    let field = UrlFor::absolute("authors");

    assert_eq!(
        field.url(&mock_author(), &routes).unwrap(),
        "https://api.example.com/authors/"
    );
}

#[test]
fn absolute_field_with_params() {
    let routes = test_registry();
    let field = UrlFor::absolute("author").param("id", "<id>");

    assert_eq!(
        field.url(&mock_author(), &routes).unwrap(),
        "https://api.example.com/authors/123"
    );
}

#[test]
fn external_without_base_url_fails() {
    let routes = RouteRegistry::new().register("authors", "/authors/");
    let field = UrlFor::absolute("authors");

    let err = field.url(&mock_author(), &routes).unwrap_err();
    assert!(matches!(err, HyperError::Route(RouteError::NoBaseUrl { .. })));
}

#[test]
fn literal_and_extra_params_become_a_query_string() {
    let routes = test_registry();
    let field = UrlFor::new("authors").param("page", 2).param("sort", "name");

    assert_eq!(
        field.url(&mock_author(), &routes).unwrap(),
        "/authors/?page=2&sort=name"
    );
}

#[test]
fn deserialization_is_a_passthrough() {
    let field = UrlFor::new("author").param("id", "<not-an-attr>").allow_none(true);

    assert_eq!(field.deserialize(json!("foo")).unwrap(), json!("foo"));
    assert_eq!(field.deserialize(Value::Null).unwrap(), Value::Null);
}

#[test]
fn null_input_is_rejected_unless_allowed() {
    let field = UrlFor::new("author");

    let err = field.deserialize(Value::Null).unwrap_err();
    assert!(matches!(err, HyperError::Validation(_)));
}

#[test]
fn fields_are_reused_across_entities() {
    let routes = test_registry();
    let field = UrlFor::new("book").param("id", "<id>");

    for id in [1, 2, 3] {
        let entity = json!({ "id": id });
        assert_eq!(
            field.url(&entity, &routes).unwrap(),
            format!("/books/{}", id)
        );
    }
}
