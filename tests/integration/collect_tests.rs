use crate::support::{chart_url, detail_path, mount_all, mount_chart, mount_detail, MOVIES};
use imdb_chart_fetcher::config::{FailurePolicy, FetchConfig};
use imdb_chart_fetcher::crawler::{collect, Collector};
use imdb_chart_fetcher::output::to_json;
use imdb_chart_fetcher::ChartError;
use std::collections::HashSet;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config(policy: FailurePolicy) -> FetchConfig {
    let mut config = FetchConfig {
        failure_policy: policy,
        ..FetchConfig::default()
    };
    config.fetcher.request_timeout_secs = 10;
    config.fetcher.connect_timeout_secs = 5;
    config
}

#[tokio::test]
async fn test_five_links_count_three() {
    let mock_server = MockServer::start().await;
    mount_all(&mock_server, MOVIES).await;

    let collection = collect(&chart_url(&mock_server), 3, &config(FailurePolicy::FailFast))
        .await
        .expect("collection failed");

    assert_eq!(collection.movies.len(), 3);
    assert!(collection.is_complete());

    // Only the first three chart entries are fetched, in any order
    let titles: HashSet<&str> = collection.movies.iter().map(|m| m.title.as_str()).collect();
    let expected: HashSet<&str> = MOVIES[..3].iter().map(|m| m.title).collect();
    assert_eq!(titles, expected);

    let json = to_json(&collection.movies, false).unwrap();
    let parsed: Vec<serde_json::Value> = serde_json::from_str(&json).expect("invalid JSON");
    assert_eq!(parsed.len(), 3);
    for object in &parsed {
        assert_eq!(object.as_object().map(|o| o.len()), Some(6));
    }
}

#[tokio::test]
async fn test_extracted_fields() {
    let mock_server = MockServer::start().await;
    mount_all(&mock_server, MOVIES).await;

    let collection = collect(&chart_url(&mock_server), 5, &config(FailurePolicy::FailFast))
        .await
        .expect("collection failed");

    let godfather = collection
        .movies
        .iter()
        .find(|m| m.title == "The Godfather")
        .expect("The Godfather missing");
    assert_eq!(godfather.release_year, 1972);
    assert_eq!(godfather.rating, 9.2);
    assert_eq!(godfather.duration, "2h 22min");
    assert_eq!(godfather.summary, "Summary of The Godfather.");
    assert_eq!(godfather.genre, "Crime, Drama");

    // Unparsable rating and no genre anchors before the release link
    let angry_men = collection
        .movies
        .iter()
        .find(|m| m.title == "12 Angry Men")
        .expect("12 Angry Men missing");
    assert_eq!(angry_men.rating, 0.0);
    assert_eq!(angry_men.release_year, 1957);
    assert_eq!(angry_men.genre, "");
}

#[tokio::test]
async fn test_count_larger_than_chart() {
    let mock_server = MockServer::start().await;
    mount_all(&mock_server, &MOVIES[..2]).await;

    let collection = collect(&chart_url(&mock_server), 50, &config(FailurePolicy::FailFast))
        .await
        .expect("collection failed");

    assert_eq!(collection.movies.len(), 2);
}

#[tokio::test]
async fn test_only_selected_links_are_fetched() {
    let mock_server = MockServer::start().await;
    mount_chart(&mock_server, MOVIES).await;
    mount_detail(&mock_server, &MOVIES[0], None).await;
    mount_detail(&mock_server, &MOVIES[1], None).await;

    for movie in &MOVIES[2..] {
        Mock::given(method("GET"))
            .and(path(detail_path(movie.id)))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;
    }

    let collection = collect(&chart_url(&mock_server), 2, &config(FailurePolicy::FailFast))
        .await
        .expect("collection failed");
    assert_eq!(collection.movies.len(), 2);

    mock_server.verify().await;
}

#[tokio::test]
async fn test_results_in_completion_order() {
    let mock_server = MockServer::start().await;
    mount_chart(&mock_server, &MOVIES[..2]).await;
    mount_detail(&mock_server, &MOVIES[0], Some(Duration::from_millis(800))).await;
    mount_detail(&mock_server, &MOVIES[1], None).await;

    let collection = collect(&chart_url(&mock_server), 2, &config(FailurePolicy::FailFast))
        .await
        .expect("collection failed");

    let titles: Vec<&str> = collection.movies.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec![MOVIES[1].title, MOVIES[0].title]);
}

#[tokio::test]
async fn test_no_record_lost_under_staggered_completion() {
    let mock_server = MockServer::start().await;
    mount_chart(&mock_server, MOVIES).await;
    for (i, movie) in MOVIES.iter().enumerate() {
        let delay = Duration::from_millis(((MOVIES.len() - i) * 60) as u64);
        mount_detail(&mock_server, movie, Some(delay)).await;
    }

    let collection = collect(&chart_url(&mock_server), 5, &config(FailurePolicy::FailFast))
        .await
        .expect("collection failed");

    assert_eq!(collection.movies.len(), MOVIES.len());
    let unique: HashSet<&str> = collection.movies.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(unique.len(), MOVIES.len());
}

#[tokio::test]
async fn test_fail_fast_on_detail_error() {
    let mock_server = MockServer::start().await;
    mount_chart(&mock_server, &MOVIES[..3]).await;
    mount_detail(&mock_server, &MOVIES[0], None).await;
    mount_detail(&mock_server, &MOVIES[2], None).await;

    Mock::given(method("GET"))
        .and(path(detail_path(MOVIES[1].id)))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let result = collect(&chart_url(&mock_server), 3, &config(FailurePolicy::FailFast)).await;
    assert!(matches!(
        result,
        Err(ChartError::HttpStatus { status: 404, .. })
    ));
}

#[tokio::test]
async fn test_skip_failed_returns_partial_collection() {
    let mock_server = MockServer::start().await;
    mount_chart(&mock_server, &MOVIES[..3]).await;
    mount_detail(&mock_server, &MOVIES[0], None).await;
    mount_detail(&mock_server, &MOVIES[2], None).await;

    Mock::given(method("GET"))
        .and(path(detail_path(MOVIES[1].id)))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let collection = collect(&chart_url(&mock_server), 3, &config(FailurePolicy::SkipFailed))
        .await
        .expect("collection failed");

    assert_eq!(collection.movies.len(), 2);
    assert_eq!(collection.failures.len(), 1);
    assert_eq!(collection.tasks_joined(), 3);

    let failure = &collection.failures[0];
    assert_eq!(
        failure.url.as_deref(),
        Some(format!("{}{}", mock_server.uri(), detail_path(MOVIES[1].id)).as_str())
    );
    assert!(matches!(
        failure.error,
        ChartError::HttpStatus { status: 500, .. }
    ));
}

#[tokio::test]
async fn test_chart_failure_is_fatal_under_any_policy() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/chart"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    for policy in [FailurePolicy::FailFast, FailurePolicy::SkipFailed] {
        let result = collect(&chart_url(&mock_server), 3, &config(policy)).await;
        assert!(matches!(
            result,
            Err(ChartError::HttpStatus { status: 503, .. })
        ));
    }
}

#[tokio::test]
async fn test_non_html_chart_rejected() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/chart"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{}", "application/json"))
        .mount(&mock_server)
        .await;

    let result = collect(&chart_url(&mock_server), 3, &config(FailurePolicy::FailFast)).await;
    assert!(matches!(result, Err(ChartError::ContentMismatch { .. })));
}

#[tokio::test]
async fn test_empty_chart_gives_empty_collection() {
    let mock_server = MockServer::start().await;
    mount_chart(&mock_server, &[]).await;

    let collector = Collector::new(&config(FailurePolicy::FailFast)).unwrap();
    let collection = collector
        .collect(&chart_url(&mock_server), 10)
        .await
        .expect("collection failed");

    assert!(collection.movies.is_empty());
    assert_eq!(to_json(&collection.movies, false).unwrap(), "[]");
}
