//! Custom test assertions for integration tests

use wiki_reflect::{ArticleContent, Error, SectionWalk};
use wiremock::MockServer;

/// Section titles with their depth, in pre-order
pub fn section_outline(article: &ArticleContent) -> Vec<(usize, String)> {
    SectionWalk::new(&article.sections, usize::MAX)
        .map(|visit| (visit.depth, visit.section.title.clone()))
        .collect()
}

/// Assert the error is a fetch failure carrying the given machine-readable code
#[track_caller]
pub fn assert_fetch_failure(error: &Error, code: &str) {
    assert!(error.is_fetch_failure(), "expected a fetch failure, got {error:?}");
    assert_eq!(error.error_code(), code, "unexpected error code for {error:?}");
}

/// Values of `param` across every request the mock server received
pub async fn received_param_values(server: &MockServer, param: &str) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter_map(|request| {
            request
                .url
                .query_pairs()
                .find(|(key, _)| key == param)
                .map(|(_, value)| value.into_owned())
        })
        .collect()
}
