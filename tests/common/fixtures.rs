//! MediaWiki response bodies and mock mounting helpers

use serde_json::{Value, json};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::config::API_PATH;

/// Three-level extract: a root section with two children, each with one grandchild
pub const THREE_LEVEL_EXTRACT: &str = "Lead paragraph.\n\n\
== Root ==\nRoot text.\n\n\
=== Child A ===\nA text.\n\n\
==== Grandchild A1 ====\nA1 text.\n\n\
=== Child B ===\nB text.\n\n\
==== Grandchild B1 ====\nB1 text.\n";

/// `list=random` body with one title
pub fn random_body(title: &str) -> Value {
    json!({
        "batchcomplete": "",
        "continue": { "rncontinue": "0.527|0.527|0|0", "continue": "-||" },
        "query": { "random": [ { "id": 4242, "ns": 0, "title": title } ] }
    })
}

/// `prop=info` body for an existing page
pub fn info_body(title: &str) -> Value {
    json!({
        "batchcomplete": true,
        "query": { "pages": [ {
            "pageid": 4242, "ns": 0, "title": title,
            "contentmodel": "wikitext", "pagelanguage": "en", "length": 1234
        } ] }
    })
}

/// `prop=info` body for a page that does not exist
pub fn missing_body(title: &str) -> Value {
    json!({
        "batchcomplete": true,
        "query": { "pages": [ { "ns": 0, "title": title, "missing": true } ] }
    })
}

/// `prop=extracts` body
pub fn extract_body(title: &str, extract: &str) -> Value {
    json!({
        "batchcomplete": true,
        "query": { "pages": [ { "pageid": 4242, "ns": 0, "title": title, "extract": extract } ] }
    })
}

/// `prop=categories` body, optionally with a continuation cursor
pub fn categories_body(title: &str, categories: &[&str], clcontinue: Option<&str>) -> Value {
    let categories: Vec<Value> = categories
        .iter()
        .map(|c| json!({ "ns": 14, "title": c }))
        .collect();
    let mut body = json!({
        "query": { "pages": [ {
            "pageid": 4242, "ns": 0, "title": title, "categories": categories
        } ] }
    });
    match clcontinue {
        Some(cursor) => {
            body["continue"] = json!({ "clcontinue": cursor, "continue": "||" });
        }
        None => {
            body["batchcomplete"] = json!(true);
        }
    }
    body
}

/// MediaWiki `error` object body (served with HTTP 200, as the API does)
pub fn api_error_body(code: &str, info: &str) -> Value {
    json!({ "error": { "code": code, "info": info, "docref": "See /w/api.php" } })
}

/// Mount a `list=random` response
pub async fn mount_random(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(query_param("list", "random"))
        .and(query_param("rnnamespace", "0"))
        .respond_with(response)
        .mount(server)
        .await;
}

/// Mount an existing article with the given extract and a single category page
pub async fn mount_article(server: &MockServer, title: &str, extract: &str, categories: &[&str]) {
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(query_param("prop", "info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(info_body(title)))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(query_param("prop", "extracts"))
        .and(query_param("titles", title))
        .respond_with(ResponseTemplate::new(200).set_body_json(extract_body(title, extract)))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(query_param("prop", "categories"))
        .and(query_param("titles", title))
        .and(query_param_is_missing("clcontinue"))
        .respond_with(ResponseTemplate::new(200).set_body_json(categories_body(
            title, categories, None,
        )))
        .mount(server)
        .await;
}

/// Mount a page that does not exist
pub async fn mount_missing(server: &MockServer, title: &str) {
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(query_param("prop", "info"))
        .and(query_param("titles", title))
        .respond_with(ResponseTemplate::new(200).set_body_json(missing_body(title)))
        .mount(server)
        .await;
}
