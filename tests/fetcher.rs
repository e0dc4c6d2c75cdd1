//! Article fetching against a mock MediaWiki API

mod common;

use std::collections::BTreeSet;

use common::*;
use wiki_reflect::{
    ArticleSource, ArticleTreeFetcher, Error, LanguageCode, MediaWikiContentApi, Section,
};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_fetch_round_trip() {
    let (server, reflector) = start_mock_wiki().await;
    mount_article(&server, "Known", "X\n\n== A ==\n", &["Cat:Y"]).await;

    let article = reflector
        .article("Known", &LanguageCode::default())
        .await
        .unwrap();

    assert_eq!(article.title, "Known");
    assert_eq!(article.summary, "X");
    assert_eq!(article.sections, vec![Section::new("A", "")]);
    assert_eq!(article.categories, BTreeSet::from(["Cat:Y".to_string()]));
}

#[tokio::test]
async fn test_missing_article_is_not_found() {
    let (server, reflector) = start_mock_wiki().await;
    mount_missing(&server, "Nowhere").await;

    let err = reflector
        .article("Nowhere", &LanguageCode::default())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::NotFound { ref title } if title == "Nowhere"));
    assert!(!err.is_fetch_failure());

    // Only the existence check was made
    let props = received_param_values(&server, "prop").await;
    assert_eq!(props, vec!["info".to_string()]);
}

#[tokio::test]
async fn test_three_level_sections() {
    let (server, reflector) = start_mock_wiki().await;
    mount_article(&server, "Nested", THREE_LEVEL_EXTRACT, &[]).await;

    let article = reflector
        .article("Nested", &LanguageCode::default())
        .await
        .unwrap();

    assert_eq!(article.summary, "Lead paragraph.");
    assert_eq!(
        section_outline(&article),
        vec![
            (0, "Root".to_string()),
            (1, "Child A".to_string()),
            (2, "Grandchild A1".to_string()),
            (1, "Child B".to_string()),
            (2, "Grandchild B1".to_string()),
        ]
    );
    assert_eq!(article.sections[0].text, "Root text.");
    assert_eq!(article.sections[0].sections[1].sections[0].text, "B1 text.");
    assert!(article.categories.is_empty());
}

#[tokio::test]
async fn test_category_order_does_not_matter() {
    let (first_server, first) = start_mock_wiki().await;
    mount_article(&first_server, "Same", "Body", &["Category:B", "Category:A", "Category:C"]).await;

    let (second_server, second) = start_mock_wiki().await;
    mount_article(&second_server, "Same", "Body", &["Category:C", "Category:B", "Category:A"]).await;

    let language = LanguageCode::default();
    let a = first.article("Same", &language).await.unwrap();
    let b = second.article("Same", &language).await.unwrap();

    assert_eq!(a.categories, b.categories);
    assert_eq!(a, b);
}

#[tokio::test]
async fn test_category_continuation_is_followed() {
    let server = MockServer::start().await;
    let title = "Paged";

    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(query_param("prop", "info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(info_body(title)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(query_param("prop", "extracts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(extract_body(title, "Body")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(query_param("prop", "categories"))
        .and(query_param("clshow", "!hidden"))
        .and(query_param_is_missing("clcontinue"))
        .respond_with(ResponseTemplate::new(200).set_body_json(categories_body(
            title,
            &["Category:First"],
            Some("4242|Second"),
        )))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(query_param("prop", "categories"))
        .and(query_param("clcontinue", "4242|Second"))
        .respond_with(ResponseTemplate::new(200).set_body_json(categories_body(
            title,
            &["Category:Second"],
            None,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = ArticleTreeFetcher::from_config(&mock_config(&server)).unwrap();
    let article = fetcher.fetch(title, &LanguageCode::default()).await.unwrap();

    assert_eq!(
        article.categories,
        BTreeSet::from(["Category:First".to_string(), "Category:Second".to_string()])
    );
}

#[tokio::test]
async fn test_category_page_limit() {
    let server = MockServer::start().await;
    let title = "Endless";

    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(query_param("prop", "info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(info_body(title)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(query_param("prop", "extracts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(extract_body(title, "")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(query_param("prop", "categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(categories_body(
            title,
            &["Category:Loop"],
            Some("4242|Loop"),
        )))
        .expect(2)
        .mount(&server)
        .await;

    let mut config = mock_config(&server);
    config.wiki.max_category_pages = 2;
    let fetcher = ArticleTreeFetcher::new(
        MediaWikiContentApi::new(&config.wiki).unwrap(),
        config.display.max_section_depth,
    );

    let article = fetcher.fetch(title, &LanguageCode::default()).await.unwrap();
    assert_eq!(article.summary, "");
    assert_eq!(article.categories.len(), 1);
}

#[tokio::test]
async fn test_content_failure_is_a_fetch_failure() {
    let (server, reflector) = start_mock_wiki().await;
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(query_param("prop", "info"))
        .respond_with(ResponseTemplate::new(200).set_body_json(info_body("Broken")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(API_PATH))
        .and(query_param("prop", "extracts"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = reflector
        .article("Broken", &LanguageCode::default())
        .await
        .unwrap_err();
    assert_fetch_failure(&err, "http_status");
}

#[tokio::test]
async fn test_random_article_resolves_then_fetches() {
    let (server, reflector) = start_mock_wiki().await;
    mount_random(
        &server,
        ResponseTemplate::new(200).set_body_json(random_body("Lake Bled")),
    )
    .await;
    mount_article(
        &server,
        "Lake Bled",
        "A lake.\n\n== Geography ==\nAlpine.\n",
        &["Category:Lakes of Slovenia"],
    )
    .await;

    let article = reflector
        .random_article(&LanguageCode::default())
        .await
        .unwrap();

    assert_eq!(article.title, "Lake Bled");
    assert_eq!(article.url(), "https://en.wikipedia.org/wiki/Lake_Bled");
    assert_eq!(article.sections.len(), 1);
}
