//! Tests for the reqwest-backed TMDB client.

mod support;

use chrono::NaiveDate;
use cinecast_error::TmdbErrorKind;
use cinecast_tmdb::{
    DEFAULT_BASE_URL, Endpoint, MovieQuery, MovieSource, QueryContext, SortBy, TmdbClient,
    TmdbConfig,
};
use std::time::Duration;

fn ctx() -> QueryContext {
    QueryContext::new(NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date"), "TR")
}

#[test]
fn default_config_targets_production_with_short_timeout() {
    let config = TmdbConfig::new("key");
    assert_eq!(config.base_url, DEFAULT_BASE_URL);
    assert_eq!(config.timeout, Duration::from_secs(10));
}

#[test]
fn debug_output_redacts_api_key() {
    let config = TmdbConfig::new("super-secret");
    let rendered = format!("{:?}", config);
    assert!(!rendered.contains("super-secret"));
    assert!(rendered.contains("redacted"));
}

#[test]
fn url_joins_base_and_endpoint_path() {
    let client = TmdbClient::new(TmdbConfig::new("key").with_base_url("http://localhost:1/3/"))
        .expect("client builds");
    let request = MovieQuery::new(Endpoint::TrendingDay).resolve(&ctx(), None);
    assert_eq!(client.url_for(&request), "http://localhost:1/3/trending/movie/day");
}

#[tokio::test]
async fn fetch_sends_params_and_api_key() {
    let body = r#"{"page": 1, "results": [{"id": 42, "title": "Test Movie", "vote_average": 8.2,
        "vote_count": 500, "poster_path": "/x.jpg", "release_date": "2024-03-15"}],
        "total_pages": 7, "total_results": 1}"#;
    let (base_url, server) = support::serve_once(200, "OK", body).await;

    let client = TmdbClient::new(TmdbConfig::new("test-key").with_base_url(base_url))
        .expect("client builds");
    let query = MovieQuery::new(Endpoint::Discover)
        .language("tr-TR")
        .sort_by(SortBy::PopularityDesc)
        .min_vote_count(300);

    let page = client
        .fetch(&query.resolve(&ctx(), Some(1)))
        .await
        .expect("fetch succeeds");

    assert_eq!(page.total_pages, 7);
    assert_eq!(page.results.len(), 1);
    assert_eq!(page.results[0].title, "Test Movie");

    let request = server.await.expect("server task");
    assert_eq!(request.method, "GET");
    assert_eq!(request.path, "/discover/movie");
    assert_eq!(request.param("language"), Some("tr-TR"));
    assert_eq!(request.param("sort_by"), Some("popularity.desc"));
    assert_eq!(request.param("vote_count.gte"), Some("300"));
    assert_eq!(request.param("page"), Some("1"));
    assert_eq!(request.param("api_key"), Some("test-key"));
}

#[tokio::test]
async fn fetch_without_page_omits_page_param() {
    let (base_url, server) =
        support::serve_once(200, "OK", r#"{"page": 1, "results": [], "total_pages": 0}"#).await;

    let client =
        TmdbClient::new(TmdbConfig::new("key").with_base_url(base_url)).expect("client builds");
    let page = client
        .fetch(&MovieQuery::new(Endpoint::TrendingDay).resolve(&ctx(), None))
        .await
        .expect("fetch succeeds");
    assert!(page.results.is_empty());

    let request = server.await.expect("server task");
    assert_eq!(request.path, "/trending/movie/day");
    assert_eq!(request.param("page"), None);
    assert_eq!(request.param("api_key"), Some("key"));
}

#[tokio::test]
async fn non_success_status_is_reported_with_body() {
    let body = r#"{"status_code": 7, "status_message": "Invalid API key"}"#;
    let (base_url, server) = support::serve_once(401, "Unauthorized", body).await;

    let client =
        TmdbClient::new(TmdbConfig::new("bad").with_base_url(base_url)).expect("client builds");
    let err = client
        .fetch(&MovieQuery::new(Endpoint::Popular).resolve(&ctx(), Some(1)))
        .await
        .expect_err("401 is an error");

    match err.kind {
        TmdbErrorKind::Status { status, body } => {
            assert_eq!(status, 401);
            assert!(body.contains("Invalid API key"));
        }
        other => panic!("unexpected error kind: {other}"),
    }
    server.await.expect("server task");
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let (base_url, server) = support::serve_once(200, "OK", r#"{"results": "nope"}"#).await;

    let client =
        TmdbClient::new(TmdbConfig::new("key").with_base_url(base_url)).expect("client builds");
    let err = client
        .fetch(&MovieQuery::new(Endpoint::Popular).resolve(&ctx(), None))
        .await
        .expect_err("bad shape is an error");

    assert!(matches!(err.kind, TmdbErrorKind::Decode(_)));
    server.await.expect("server task");
}
