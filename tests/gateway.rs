//! HTTP client and gateway worker against a mock character API.

mod common;

use std::sync::Arc;
use std::time::Duration;

use character_browser::api::{
    execute, gateway_channel, ApiError, FetchFailure, GatewayCommand, GatewayEvent,
    GatewayWorker, ListRequest, ListResponse, RequestId,
};
use common::mock_backend::{character_json, page_json, MockBackend, MockResponse};
use common::{client_for, filters};

#[tokio::test]
async fn test_fetch_page_requests_page_query() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(&page_json(
        &[(1, "Rick Sanchez"), (2, "Morty Smith")],
        Some("https://rickandmortyapi.com/api/character/?page=3"),
    )))
    .await;

    let client = client_for(&mock.base_url());
    let page = client.fetch_page(2).await.unwrap();

    assert_eq!(page.results.len(), 2);
    assert_eq!(page.results[0].name, "Rick Sanchez");
    assert!(page.has_next);

    let requests = mock.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/api/character");
    assert_eq!(requests[0].query.as_deref(), Some("page=2"));
}

#[tokio::test]
async fn test_last_page_has_no_next() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(&page_json(&[(826, "Butter Robot")], None)))
        .await;

    let page = client_for(&mock.base_url()).fetch_page(42).await.unwrap();
    assert!(!page.has_next);
}

#[tokio::test]
async fn test_filtered_request_sends_every_parameter() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(&page_json(&[(1, "Rick Sanchez")], None)))
        .await;

    let client = client_for(&mock.base_url());
    let result = client
        .fetch_filtered(&filters("Rick", "alive"), None, true)
        .await
        .unwrap();
    assert!(result.reset);
    assert_eq!(result.page.results.len(), 1);

    let requests = mock.captured_requests().await;
    assert_eq!(
        requests[0].query.as_deref(),
        Some("name=Rick&status=alive&species=&gender=&page=1")
    );
}

#[tokio::test]
async fn test_404_maps_to_not_found() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::error(404, "There is nothing here"))
        .await;

    let err = client_for(&mock.base_url())
        .fetch_filtered(&filters("Zzz", ""), None, true)
        .await
        .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Request failed with status code 404");
    assert_eq!(FetchFailure::from(&err), FetchFailure::NotFound);
}

#[tokio::test]
async fn test_500_maps_to_status_with_body_message() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::error(500, "upstream exploded"))
        .await;

    let err = client_for(&mock.base_url()).fetch_page(1).await.unwrap_err();
    match err {
        ApiError::Status { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "upstream exploded");
        }
        other => panic!("Expected Status, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_maps_to_decode() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::raw(200, "{\"info\": 12}")).await;

    let err = client_for(&mock.base_url()).fetch_page(1).await.unwrap_err();
    assert!(matches!(err, ApiError::Decode { .. }));
    assert_eq!(err.error_type(), "decode_error");
}

#[tokio::test]
async fn test_connection_refused_maps_to_connection() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client_for(&format!("http://{addr}/api"))
        .fetch_page(1)
        .await
        .unwrap_err();
    assert!(
        matches!(err, ApiError::Connection { .. } | ApiError::Timeout { .. }),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn test_fetch_character_uses_detail_path() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(&character_json(7, "Abradolf Lincler", "unknown")))
        .await;

    let character = client_for(&mock.base_url())
        .fetch_character(7)
        .await
        .unwrap();
    assert_eq!(character.id, 7);
    assert_eq!(character.location.name, "Citadel of Ricks");
    assert_eq!(character.episode.len(), 2);

    let requests = mock.captured_requests().await;
    assert_eq!(requests[0].path, "/api/character/7");
    assert_eq!(requests[0].query, None);
}

#[tokio::test]
async fn test_execute_reports_not_found_for_list() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::error(404, "There is nothing here"))
        .await;

    let client = client_for(&mock.base_url());
    let event = execute(
        &client,
        GatewayCommand::List {
            id: RequestId(9),
            request: ListRequest::Filtered {
                filters: filters("Nobody", ""),
                page: None,
                reset: true,
            },
        },
    )
    .await;

    match event {
        GatewayEvent::ListLoaded { id, result } => {
            assert_eq!(id, RequestId(9));
            assert_eq!(result.unwrap_err(), FetchFailure::NotFound);
        }
        other => panic!("Expected ListLoaded, got {other:?}"),
    }
}

#[tokio::test]
async fn test_worker_delivers_results_over_channel() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::json(&page_json(&[(1, "Rick Sanchez")], None)))
        .await;

    let client = Arc::new(client_for(&mock.base_url()));
    let (handle, receiver) = gateway_channel();
    let (events_tx, events_rx) = std::sync::mpsc::channel::<GatewayEvent>();
    tokio::spawn(GatewayWorker::new(receiver).run(client, events_tx));

    handle
        .submit(GatewayCommand::List {
            id: RequestId(1),
            request: ListRequest::Page { page: 1 },
        })
        .unwrap();

    let event = tokio::task::spawn_blocking(move || events_rx.recv_timeout(Duration::from_secs(5)))
        .await
        .unwrap()
        .expect("worker should report back");

    match event {
        GatewayEvent::ListLoaded { id, result } => {
            assert_eq!(id, RequestId(1));
            match result.unwrap() {
                ListResponse::Page(page) => assert_eq!(page.results[0].id, 1),
                other => panic!("Expected Page response, got {other:?}"),
            }
        }
        other => panic!("Expected ListLoaded, got {other:?}"),
    }
}

#[tokio::test]
async fn test_worker_reports_detail_failure_as_message() {
    let mock = MockBackend::start().await;
    mock.enqueue_response(MockResponse::error(500, "boom")).await;

    let client = client_for(&mock.base_url());
    let event = execute(&client, GatewayCommand::Character { id: 1 }).await;
    match event {
        GatewayEvent::CharacterLoaded { id, result } => {
            assert_eq!(id, 1);
            assert!(result.unwrap_err().contains("500"));
        }
        other => panic!("Expected CharacterLoaded, got {other:?}"),
    }
}
