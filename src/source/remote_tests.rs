//! Tests for the remote queue-backed source.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use ::http;
use serde_json::json;
use url::Url;

use super::*;

/// Mock transport that records requests and returns queued responses.
///
/// Cloning shares state, so tests keep a handle to inspect recorded
/// requests after handing a clone to the source under test.
#[derive(Clone)]
struct MockHttpClient {
    inner: Arc<MockInner>,
}

struct MockInner {
    responses: Mutex<VecDeque<Result<HttpResponse, HttpError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockHttpClient {
    fn new(responses: Vec<Result<HttpResponse, HttpError>>) -> Self {
        Self {
            inner: Arc::new(MockInner {
                responses: Mutex::new(responses.into()),
                requests: Mutex::new(Vec::new()),
            }),
        }
    }

    fn returning_json(bodies: Vec<serde_json::Value>) -> Self {
        Self::new(
            bodies
                .into_iter()
                .map(|body| {
                    Ok(HttpResponse::new(
                        http::StatusCode::OK,
                        serde_json::to_vec(&body).unwrap(),
                    ))
                })
                .collect(),
        )
    }

    fn recorded_requests(&self) -> Vec<HttpRequest> {
        self.inner.requests.lock().unwrap().clone()
    }

    fn recorded_urls(&self) -> Vec<Url> {
        self.recorded_requests()
            .into_iter()
            .map(|r| r.url)
            .collect()
    }
}

impl HttpClient for MockHttpClient {
    async fn get(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        self.inner.requests.lock().unwrap().push(request);
        self.inner
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Ok(HttpResponse::new(
                    http::StatusCode::OK,
                    serde_json::to_vec(&json!({ "notifications": [] })).unwrap(),
                ))
            })
    }
}

fn base_url() -> Url {
    Url::parse("https://queue.example.com/api/v1/").unwrap()
}

fn page(ids: &[&str]) -> serde_json::Value {
    let notifications: Vec<_> = ids
        .iter()
        .map(|id| {
            json!({
                "id": id,
                "published": "2026-08-25T08:00:00Z",
                "operation": "update",
                "resource": { "type": "document", "id": format!("doc-{id}") }
            })
        })
        .collect();
    json!({ "notifications": notifications })
}

mod url_construction {
    use super::*;

    #[tokio::test]
    async fn appends_notifications_segment() {
        let client = MockHttpClient::returning_json(vec![page(&[])]);
        let source = RemoteSource::new(client.clone(), base_url());

        source.fetch_batch(None).await.unwrap();

        let urls = client.recorded_urls();
        assert_eq!(urls.len(), 1);
        assert_eq!(urls[0].path(), "/api/v1/notifications");
        assert!(urls[0].query().is_none());
    }

    #[tokio::test]
    async fn limit_becomes_query_parameter() {
        let client = MockHttpClient::returning_json(vec![page(&[])]);
        let source = RemoteSource::new(client.clone(), base_url());

        source
            .fetch_batch(Some(BatchLimit::new(25).unwrap()))
            .await
            .unwrap();

        let urls = client.recorded_urls();
        assert_eq!(urls[0].query(), Some("limit=25"));
    }

    #[tokio::test]
    async fn base_without_trailing_slash() {
        let client = MockHttpClient::returning_json(vec![page(&[])]);
        let base = Url::parse("https://queue.example.com/api").unwrap();
        let source = RemoteSource::new(client.clone(), base);

        source.fetch_batch(None).await.unwrap();

        let urls = client.recorded_urls();
        assert_eq!(urls[0].path(), "/api/notifications");
    }

    #[tokio::test]
    async fn headers_attach_to_every_request() {
        let client = MockHttpClient::returning_json(vec![page(&[]), page(&[])]);

        let mut headers = http::HeaderMap::new();
        headers.insert(
            http::header::AUTHORIZATION,
            http::HeaderValue::from_static("Bearer secret"),
        );
        let source = RemoteSource::new(client.clone(), base_url()).with_headers(headers);

        source.fetch_batch(None).await.unwrap();
        source.fetch_batch(None).await.unwrap();

        let requests = client.recorded_requests();
        assert_eq!(requests.len(), 2);
        assert!(requests.iter().all(|r| {
            r.headers.get(http::header::AUTHORIZATION)
                == Some(&http::HeaderValue::from_static("Bearer secret"))
        }));
    }
}

mod fetch_batch {
    use super::*;
    use crate::notification::OperationKind;

    #[tokio::test]
    async fn decodes_page_in_order() {
        let client = MockHttpClient::returning_json(vec![page(&["a", "b", "c"])]);
        let source = RemoteSource::new(client, base_url());

        let batch = source.fetch_batch(None).await.unwrap();

        let ids: Vec<_> = batch.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
        assert!(batch.iter().all(|n| n.operation == OperationKind::Update));
    }

    #[tokio::test]
    async fn empty_page_is_not_an_error() {
        let client = MockHttpClient::returning_json(vec![page(&[])]);
        let source = RemoteSource::new(client, base_url());

        let batch = source.fetch_batch(None).await.unwrap();
        assert!(batch.is_empty());
    }

    #[tokio::test]
    async fn non_success_status_fails() {
        let client = MockHttpClient::new(vec![Ok(HttpResponse::new(
            http::StatusCode::SERVICE_UNAVAILABLE,
            b"queue offline".to_vec(),
        ))]);
        let source = RemoteSource::new(client, base_url());

        let error = source.fetch_batch(None).await.unwrap_err();

        match error {
            SourceError::UnexpectedStatus { status, body } => {
                assert_eq!(status, http::StatusCode::SERVICE_UNAVAILABLE);
                assert_eq!(body.as_deref(), Some("queue offline"));
            }
            other => panic!("expected UnexpectedStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_body_fails_with_decode() {
        let client = MockHttpClient::new(vec![Ok(HttpResponse::new(
            http::StatusCode::OK,
            b"not json".to_vec(),
        ))]);
        let source = RemoteSource::new(client, base_url());

        let error = source.fetch_batch(None).await.unwrap_err();
        assert!(matches!(error, SourceError::Decode(_)));
    }

    #[tokio::test]
    async fn transport_error_propagates() {
        let client = MockHttpClient::new(vec![Err(HttpError::Timeout)]);
        let source = RemoteSource::new(client, base_url());

        let error = source.fetch_batch(None).await.unwrap_err();
        assert!(matches!(error, SourceError::Http(HttpError::Timeout)));
    }
}

mod fetch_one {
    use super::*;

    #[tokio::test]
    async fn requests_a_single_record() {
        let client = MockHttpClient::returning_json(vec![page(&["only"])]);
        let source = RemoteSource::new(client.clone(), base_url());

        let notification = source.fetch_one().await.unwrap();

        assert_eq!(notification.id, "only");
        let urls = client.recorded_urls();
        assert_eq!(urls[0].query(), Some("limit=1"));
    }

    #[tokio::test]
    async fn takes_first_when_remote_over_delivers() {
        let client = MockHttpClient::returning_json(vec![page(&["first", "second"])]);
        let source = RemoteSource::new(client, base_url());

        let notification = source.fetch_one().await.unwrap();
        assert_eq!(notification.id, "first");
    }

    #[tokio::test]
    async fn empty_page_fails() {
        let client = MockHttpClient::returning_json(vec![page(&[])]);
        let source = RemoteSource::new(client, base_url());

        let error = source.fetch_one().await.unwrap_err();
        assert!(matches!(error, SourceError::Empty));
    }
}
