//! Low-level HTTP client: `PaystackHttp`.
//!
//! Owns the one pre-configured `reqwest::Client` (base URL, bearer auth, JSON
//! headers, timeout) and the call-and-unwrap helpers every sub-client goes
//! through. Internal to the SDK; the high-level client wraps this.

use crate::error::{ApiError, SdkError, SdkResult};
use crate::http::envelope::{Acknowledgement, Envelope, Meta, Paginated};
use crate::network::TIMEOUT_ERROR_MESSAGE;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Placeholder for calls that carry no query string or JSON body.
pub(crate) const NONE: Option<&()> = None;

/// Low-level HTTP client for the Paystack REST API.
#[derive(Debug, Clone)]
pub struct PaystackHttp {
    base_url: String,
    client: Client,
}

/// Just enough of an envelope to decide success before decoding `data`.
#[derive(Deserialize)]
struct StatusProbe {
    #[serde(default)]
    status: bool,
    #[serde(default)]
    message: Option<String>,
}

impl PaystackHttp {
    /// Build the transport. Makes no network call.
    pub fn new(secret_key: &str, base_url: &str, timeout: Duration) -> SdkResult<Self> {
        let secret_key = secret_key.trim();
        if secret_key.is_empty() {
            return Err(SdkError::app("Paystack secret key is required"));
        }

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", secret_key))
            .map_err(|_| SdkError::app("Paystack secret key contains invalid characters"))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| SdkError::app(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Typed helpers ────────────────────────────────────────────────────

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        fallback: &str,
    ) -> SdkResult<T> {
        self.data(Method::GET, path, NONE, NONE, fallback).await
    }

    pub(crate) async fn get_with_query<T, Q>(
        &self,
        path: &str,
        query: &Q,
        fallback: &str,
    ) -> SdkResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        self.data(Method::GET, path, Some(query), NONE, fallback).await
    }

    /// GET returning the envelope untouched (after the status check).
    pub(crate) async fn get_envelope<T: DeserializeOwned>(
        &self,
        path: &str,
        fallback: &str,
    ) -> SdkResult<Envelope<T>> {
        self.request(Method::GET, path, NONE, NONE, fallback).await
    }

    pub(crate) async fn list<T, Q>(
        &self,
        path: &str,
        query: Option<&Q>,
        fallback: &str,
    ) -> SdkResult<Paginated<T>>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let envelope: Envelope<Vec<T>, Meta> = self
            .request(Method::GET, path, query, NONE, fallback)
            .await?;
        Ok(envelope.into_paginated())
    }

    pub(crate) async fn post<T, B>(&self, path: &str, body: &B, fallback: &str) -> SdkResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.data(Method::POST, path, NONE, Some(body), fallback).await
    }

    pub(crate) async fn put<T, B>(&self, path: &str, body: &B, fallback: &str) -> SdkResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.data(Method::PUT, path, NONE, Some(body), fallback).await
    }

    pub(crate) async fn delete<T, B>(
        &self,
        path: &str,
        body: Option<&B>,
        fallback: &str,
    ) -> SdkResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.data(Method::DELETE, path, NONE, body, fallback).await
    }

    /// Any verb, keeping only the confirmation message.
    pub(crate) async fn acknowledge<Q, B>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
        fallback: &str,
    ) -> SdkResult<Acknowledgement>
    where
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let envelope: Envelope<serde_json::Value> =
            self.request(method, path, query, body, fallback).await?;
        Ok(Acknowledgement {
            message: envelope.message,
        })
    }

    async fn data<T, Q, B>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
        fallback: &str,
    ) -> SdkResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let envelope: Envelope<T> = self.request(method, path, query, body, fallback).await?;
        match envelope.data {
            Some(data) => Ok(data),
            // `status: true` without `data` is still a success for types that
            // accept null (`Option<_>`, `()`, `Value`).
            None => serde_json::from_value(serde_json::Value::Null)
                .map_err(|_| SdkError::from(ApiError::resolve(None, None, fallback))),
        }
    }

    // ── Core call-and-unwrap ─────────────────────────────────────────────

    /// Issue one request and validate the envelope.
    ///
    /// Transport failures, non-2xx responses and `status: false` bodies all
    /// become [`ApiError`]; only query encoding failures are local.
    pub(crate) async fn request<T, M, Q, B>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
        fallback: &str,
    ) -> SdkResult<Envelope<T, M>>
    where
        T: DeserializeOwned,
        M: DeserializeOwned,
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let url = self.url(path, query)?;
        tracing::debug!(method = %method, path, "Paystack request");

        let mut req = self.client.request(method.clone(), &url);
        if let Some(b) = body {
            req = req.json(b);
        }

        let outcome = self.execute(req, path, fallback).await;
        if let Err(e) = &outcome {
            tracing::warn!(method = %method, path, error = %e.message, "Paystack request failed");
        }
        Ok(outcome?)
    }

    async fn execute<T, M>(
        &self,
        req: reqwest::RequestBuilder,
        path: &str,
        fallback: &str,
    ) -> Result<Envelope<T, M>, ApiError>
    where
        T: DeserializeOwned,
        M: DeserializeOwned,
    {
        let resp = req
            .send()
            .await
            .map_err(|e| ApiError::resolve(None, Some(transport_message(&e).as_str()), fallback))?;
        let status = resp.status();
        tracing::debug!(status = status.as_u16(), path, "Paystack response");

        let text = resp
            .text()
            .await
            .map_err(|e| ApiError::resolve(None, Some(transport_message(&e).as_str()), fallback))?;

        let probe = serde_json::from_str::<StatusProbe>(&text).ok();
        let remote = probe.as_ref().and_then(|p| p.message.as_deref());

        if !status.is_success() {
            let transport = format!("Request failed with status code {}", status.as_u16());
            return Err(ApiError::resolve(remote, Some(transport.as_str()), fallback));
        }

        match &probe {
            Some(p) if p.status => {}
            _ => return Err(ApiError::resolve(remote, None, fallback)),
        }

        serde_json::from_str::<Envelope<T, M>>(&text).map_err(|e| {
            ApiError::resolve(
                None,
                Some(format!("Failed to decode response: {}", e).as_str()),
                fallback,
            )
        })
    }

    fn url<Q: Serialize + ?Sized>(&self, path: &str, query: Option<&Q>) -> SdkResult<String> {
        let mut url = format!("{}{}", self.base_url, path);
        if let Some(q) = query {
            let qs = serde_urlencoded::to_string(q)
                .map_err(|e| SdkError::app(format!("Failed to encode query string: {}", e)))?;
            if !qs.is_empty() {
                url.push('?');
                url.push_str(&qs);
            }
        }
        Ok(url)
    }
}

fn transport_message(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        TIMEOUT_ERROR_MESSAGE.to_string()
    } else {
        e.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::{DEFAULT_API_URL, DEFAULT_TIMEOUT};
    use crate::shared::Pagination;

    fn http() -> PaystackHttp {
        PaystackHttp::new("sk_test_abc", DEFAULT_API_URL, DEFAULT_TIMEOUT).unwrap()
    }

    #[test]
    fn test_empty_key_rejected() {
        let err = PaystackHttp::new("", DEFAULT_API_URL, DEFAULT_TIMEOUT).unwrap_err();
        assert_eq!(err.status_code(), 500);
        assert!(!err.is_api());

        assert!(PaystackHttp::new("   ", DEFAULT_API_URL, DEFAULT_TIMEOUT).is_err());
    }

    #[test]
    fn test_key_with_newline_rejected() {
        assert!(PaystackHttp::new("sk_test\nx", DEFAULT_API_URL, DEFAULT_TIMEOUT).is_err());
    }

    #[test]
    fn test_debug_hides_secret() {
        let dbg = format!("{:?}", http());
        assert!(!dbg.contains("sk_test_abc"));
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let h = PaystackHttp::new("sk_test_abc", "http://localhost:9000/", DEFAULT_TIMEOUT)
            .unwrap();
        assert_eq!(h.base_url(), "http://localhost:9000");
    }

    #[test]
    fn test_url_building() {
        let h = http();
        assert_eq!(
            h.url("/plan", NONE).unwrap(),
            "https://api.paystack.co/plan"
        );
        assert_eq!(
            h.url("/plan", Some(&Pagination::new())).unwrap(),
            "https://api.paystack.co/plan"
        );
        assert_eq!(
            h.url("/plan", Some(&Pagination::new().with_per_page(5))).unwrap(),
            "https://api.paystack.co/plan?perPage=5"
        );
    }

    async fn mock_without_data() -> (wiremock::MockServer, PaystackHttp) {
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/thing"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"status": true, "message": "Done"})),
            )
            .mount(&server)
            .await;
        let h = PaystackHttp::new("sk_test_abc", &server.uri(), DEFAULT_TIMEOUT).unwrap();
        (server, h)
    }

    #[tokio::test]
    async fn test_success_without_data_decodes_as_null() {
        let (_server, h) = mock_without_data().await;
        let data: Option<serde_json::Value> =
            h.post("/thing", &(), "Failed to do thing").await.unwrap();
        assert_eq!(data, None);
    }

    #[tokio::test]
    async fn test_success_without_required_data_uses_fallback() {
        let (_server, h) = mock_without_data().await;
        let err = h
            .post::<u64, _>("/thing", &(), "Failed to do thing")
            .await
            .unwrap_err();
        assert!(err.is_api());
        assert_eq!(err.message(), "Failed to do thing");
    }
}
