//! Remote queue-backed notification source.

use http::HeaderMap;
use serde::Deserialize;
use url::Url;

use crate::notification::{Notification, NotificationBatch};

use super::{BatchLimit, HttpClient, HttpError, HttpRequest, NotificationSource, SourceError};

/// JSON envelope returned by the notifications endpoint.
#[derive(Debug, Deserialize)]
struct NotificationPage {
    #[serde(default)]
    notifications: Vec<Notification>,
}

/// Notification source backed by a remote HTTP queue endpoint.
///
/// Retrieves pages from `GET {base}/notifications[?limit=N]` and
/// decodes the JSON envelope into a [`NotificationBatch`]. The remote
/// long-polls, so a request blocks server-side until records are
/// available or the server's own window elapses.
///
/// # Type Parameters
///
/// * `H` - The [`HttpClient`] implementation used for transport
///
/// # Example
///
/// ```
/// use notipoll::source::{RemoteSource, ReqwestClient};
/// use url::Url;
///
/// let source = RemoteSource::new(
///     ReqwestClient::new(),
///     Url::parse("https://queue.example.com/api/v1/").unwrap(),
/// );
/// ```
#[derive(Debug)]
pub struct RemoteSource<H> {
    client: H,
    base_url: Url,
    headers: HeaderMap,
}

impl<H> RemoteSource<H> {
    /// Creates a source for the given endpoint with default headers
    /// (`Accept: application/json`).
    #[must_use]
    pub fn new(client: H, base_url: Url) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(
            http::header::ACCEPT,
            http::HeaderValue::from_static("application/json"),
        );

        Self {
            client,
            base_url,
            headers,
        }
    }

    /// Replaces the request headers wholesale.
    ///
    /// The configuration layer builds the header map (authorization,
    /// custom headers); this source only attaches it to every request.
    #[must_use]
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Returns the configured endpoint base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl<H: HttpClient> RemoteSource<H> {
    /// Builds the page URL for one retrieval.
    fn page_url(&self, limit: Option<BatchLimit>) -> Result<Url, SourceError> {
        let mut url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|()| {
                SourceError::Http(HttpError::InvalidUrl(format!(
                    "cannot-be-a-base URL: {}",
                    self.base_url
                )))
            })?
            .pop_if_empty()
            .push("notifications");

        if let Some(limit) = limit {
            url.query_pairs_mut()
                .append_pair("limit", &limit.get().to_string());
        }

        Ok(url)
    }

    /// Retrieves and decodes one page.
    async fn fetch_page(&self, limit: Option<BatchLimit>) -> Result<NotificationBatch, SourceError> {
        let request = HttpRequest::get(self.page_url(limit)?).with_headers(self.headers.clone());

        let response = self.client.get(request).await?;

        if !response.is_success() {
            return Err(SourceError::UnexpectedStatus {
                status: response.status,
                body: response.body_text().map(ToString::to_string),
            });
        }

        let page: NotificationPage = serde_json::from_slice(&response.body)?;
        tracing::debug!("Retrieved {} notification(s)", page.notifications.len());

        Ok(NotificationBatch::from(page.notifications))
    }
}

impl<H: HttpClient> NotificationSource for RemoteSource<H> {
    async fn fetch_one(&self) -> Result<Notification, SourceError> {
        let batch = self.fetch_page(Some(BatchLimit::ONE)).await?;
        batch.into_vec().into_iter().next().ok_or(SourceError::Empty)
    }

    async fn fetch_batch(&self, limit: Option<BatchLimit>) -> Result<NotificationBatch, SourceError> {
        self.fetch_page(limit).await
    }
}
