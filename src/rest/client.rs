//! Typed REST client for one backend resource.

use std::marker::PhantomData;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::framework::{CollectionClient, CollectionRecord, RecordId, RemoteError};

impl From<reqwest::Error> for RemoteError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => RemoteError::status(
                format!(
                    "Error {}: {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown Error")
                ),
                status.as_u16(),
            ),
            None => RemoteError::transport(e.to_string()),
        }
    }
}

/// Picks the most useful failure message out of a non-2xx response.
///
/// A JSON body may carry a `message` or `title` field; a non-JSON body is used
/// verbatim; otherwise the status line becomes the message.
fn error_message(status: u16, reason: &str, body: &str) -> String {
    let fallback = format!("Error {status}: {reason}");
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => value
            .get("message")
            .or_else(|| value.get("title"))
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .unwrap_or(fallback),
        Err(_) if !body.is_empty() => body.to_string(),
        Err(_) => fallback,
    }
}

/// HTTP implementation of [`CollectionClient`] for one REST resource.
///
/// Routes follow the workshop backend conventions:
///
/// | Operation        | Route                                      |
/// |------------------|--------------------------------------------|
/// | `list_all`       | `GET {base}{resource}`                     |
/// | `search`         | `GET {base}{resource}/buscar?termino=...`  |
/// | `create`         | `POST {base}{resource}`                    |
/// | `update`         | `PUT {base}{resource}/{id}`                |
/// | `partial_update` | `PATCH {base}{resource}/{id}`              |
/// | `soft_delete`    | `DELETE {base}{resource}/{id}`             |
/// | `restore`        | `PATCH {base}{resource}/{id}/restaurar`    |
pub struct RestCollectionClient<R: CollectionRecord> {
    http: reqwest::Client,
    base_url: String,
    resource: String,
    _record: PhantomData<fn() -> R>,
}

impl<R: CollectionRecord> RestCollectionClient<R> {
    /// Creates a client for `resource` (e.g., `"/proveedor"`) under `base_url`.
    pub fn new(base_url: impl Into<String>, resource: impl Into<String>) -> Self {
        Self::with_http(reqwest::Client::new(), base_url, resource)
    }

    /// Same as [`Self::new`], but reusing an existing connection pool.
    pub fn with_http(
        http: reqwest::Client,
        base_url: impl Into<String>,
        resource: impl Into<String>,
    ) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http,
            base_url,
            resource: resource.into(),
            _record: PhantomData,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, self.resource, path)
    }

    /// Normalizes a non-2xx response into a [`RemoteError`].
    async fn into_error(response: reqwest::Response) -> RemoteError {
        let status = response.status();
        let reason = status.canonical_reason().unwrap_or("Unknown Error");
        let body = response.text().await.unwrap_or_default();
        let error = RemoteError::status(
            error_message(status.as_u16(), reason, &body),
            status.as_u16(),
        );
        if body.is_empty() {
            error
        } else {
            error.with_details(body)
        }
    }

    async fn json_body<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, RemoteError> {
        if !response.status().is_success() {
            return Err(Self::into_error(response).await);
        }
        response.json::<T>().await.map_err(RemoteError::from)
    }

    async fn empty_body(response: reqwest::Response) -> Result<(), RemoteError> {
        if !response.status().is_success() {
            return Err(Self::into_error(response).await);
        }
        // 204 or any empty body is a successful void result, not a parse error.
        Ok(())
    }
}

#[async_trait]
impl<R> CollectionClient<R> for RestCollectionClient<R>
where
    R: CollectionRecord + Serialize + DeserializeOwned,
    R::Draft: Serialize,
    R::Patch: Serialize,
{
    async fn list_all(&self) -> Result<Vec<R>, RemoteError> {
        let response = self.http.get(self.url("")).send().await?;
        Self::json_body(response).await
    }

    async fn search(&self, term: &str) -> Result<Vec<R>, RemoteError> {
        let term = term.trim();
        if term.is_empty() {
            // Blank input is not a query; serve the full list instead.
            return self.list_all().await;
        }
        let response = self
            .http
            .get(self.url("/buscar"))
            .query(&[("termino", term)])
            .send()
            .await?;
        Self::json_body(response).await
    }

    async fn create(&self, draft: R::Draft) -> Result<R, RemoteError> {
        let response = self.http.post(self.url("")).json(&draft).send().await?;
        Self::json_body(response).await
    }

    async fn update(&self, id: RecordId, record: R) -> Result<(), RemoteError> {
        let response = self
            .http
            .put(self.url(&format!("/{id}")))
            .json(&record)
            .send()
            .await?;
        Self::empty_body(response).await
    }

    async fn partial_update(&self, id: RecordId, patch: R::Patch) -> Result<(), RemoteError> {
        let response = self
            .http
            .patch(self.url(&format!("/{id}")))
            .json(&patch)
            .send()
            .await?;
        Self::empty_body(response).await
    }

    async fn soft_delete(&self, id: RecordId) -> Result<(), RemoteError> {
        let response = self.http.delete(self.url(&format!("/{id}"))).send().await?;
        Self::empty_body(response).await
    }

    async fn restore(&self, id: RecordId) -> Result<(), RemoteError> {
        let response = self
            .http
            .patch(self.url(&format!("/{id}/restaurar")))
            .json(&serde_json::json!({}))
            .send()
            .await?;
        Self::empty_body(response).await
    }
}
