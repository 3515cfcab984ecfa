//! Authenticated REST client with a single refresh-and-retry on `401`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every call from `net::api` goes through [`ApiClient::send`]. The client
//! attaches the stored bearer credential, and on a `401` for a request that
//! has not been retried it exchanges the refresh credential once, stores the
//! new access token, marks the request retried and resubmits it. A second
//! `401` is returned to the caller as-is. When refreshing is impossible both
//! credentials are cleared and the session-expired hook (a redirect to
//! `/login` in the browser) runs.
//!
//! TRADE-OFFS
//! ==========
//! Concurrent requests that fail with `401` at the same time each run their
//! own refresh. There is no shared in-flight refresh.
//!
//! The wire is behind [`Transport`] so the policy runs unchanged against the
//! browser (`gloo-net`) and against scripted responses in tests.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::future::Future;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::credentials::SessionContext;
use super::types::RefreshResponse;
use crate::error::{ApiError, ErrorPayload};

/// Path of the refresh endpoint relative to the API base.
pub const REFRESH_PATH: &str = "auth/token/refresh/";
/// Where the session-expired hook sends the browser.
pub const SIGN_IN_PATH: &str = "/login";

/// HTTP verbs used by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// A fully resolved request as handed to the transport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WireRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl WireRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status and raw body of a response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WireResponse {
    pub status: u16,
    pub body: String,
}

impl WireResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and returns whatever the server answered.
///
/// Implementations only fail for transport errors; non-2xx statuses are
/// ordinary responses.
pub trait Transport {
    fn send(&self, request: WireRequest) -> impl Future<Output = Result<WireResponse, ApiError>>;
}

/// `gloo-net` transport in the browser; reports [`ApiError::Unavailable`] under SSR.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    #[allow(clippy::unused_async)]
    async fn send(&self, request: WireRequest) -> Result<WireResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let method = match request.method {
                Method::Get => gloo_net::http::Method::GET,
                Method::Post => gloo_net::http::Method::POST,
                Method::Patch => gloo_net::http::Method::PATCH,
                Method::Delete => gloo_net::http::Method::DELETE,
            };
            let mut builder = gloo_net::http::RequestBuilder::new(&request.url).method(method);
            for (name, value) in &request.headers {
                builder = builder.header(name, value);
            }
            let built = match request.body {
                Some(body) => builder.body(body),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;
            let resp = built.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            Ok(WireResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }
}

/// A request relative to the API base, before credentials are applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
    /// Set once the request has been resubmitted after a refresh.
    pub retried: bool,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
            retried: false,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::Patch, path)
    }

    /// Append a query pair; empty values are skipped.
    #[must_use]
    pub fn query(mut self, key: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        if !value.is_empty() {
            self.query.push((key.to_owned(), value));
        }
        self
    }

    #[must_use]
    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_owned(), value.into()));
        self
    }

    /// Serialize `body` as the JSON request body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Body`] if `body` cannot be serialized.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        let encoded = serde_json::to_string(body).map_err(|e| ApiError::Body(e.to_string()))?;
        self.body = Some(encoded);
        Ok(self)
    }
}

/// Join the API base and a relative path with exactly one `/` between them.
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Value of the `Authorization` header for `token`.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

type ExpiredHook = Arc<dyn Fn() + Send + Sync>;

/// REST client bound to one API base and one credential pair.
#[derive(Clone)]
pub struct ApiClient<T> {
    base_url: Arc<str>,
    credentials: SessionContext,
    transport: T,
    on_session_expired: ExpiredHook,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(base_url: &str, credentials: SessionContext, transport: T) -> Self {
        Self {
            base_url: Arc::from(base_url),
            credentials,
            transport,
            on_session_expired: Arc::new(redirect_to_sign_in),
        }
    }

    /// Replace what happens after credentials are cleared by a failed refresh.
    #[must_use]
    pub fn with_session_expired_hook(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_session_expired = Arc::new(hook);
        self
    }

    pub fn credentials(&self) -> &SessionContext {
        &self.credentials
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send `request`, refreshing the bearer credential at most once.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::SessionExpired`] when a refresh was needed but not
    /// possible, and the classified status error for any other non-2xx reply.
    pub async fn send(&self, mut request: ApiRequest) -> Result<WireResponse, ApiError> {
        loop {
            let wire = self.to_wire(&request);
            let resp = self.transport.send(wire).await?;
            if resp.status == 401 && !request.retried {
                request.retried = true;
                self.refresh_access_token().await?;
                continue;
            }
            return classify(resp);
        }
    }

    /// Send `request` and decode a JSON body.
    ///
    /// # Errors
    ///
    /// Propagates [`ApiClient::send`] errors and returns [`ApiError::Decode`]
    /// if the body does not match `R`.
    pub async fn json<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        let resp = self.send(request).await?;
        serde_json::from_str(&resp.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Send `request` without credentials or refresh handling.
    ///
    /// Used for endpoints that must not trigger the refresh flow (sign-in).
    ///
    /// # Errors
    ///
    /// Returns the classified status error for any non-2xx reply.
    pub async fn send_anonymous<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, ApiError> {
        let mut wire = self.to_wire(&request);
        wire.headers.retain(|(name, _)| !name.eq_ignore_ascii_case("authorization"));
        let resp = classify(self.transport.send(wire).await?)?;
        serde_json::from_str(&resp.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn refresh_access_token(&self) -> Result<(), ApiError> {
        let Some(refresh) = self.credentials.refresh_token() else {
            leptos::logging::warn!("401 without refresh token; signing out");
            self.expire_session();
            return Err(ApiError::SessionExpired);
        };

        match self.exchange_refresh_token(&refresh).await {
            Ok(tokens) => {
                self.credentials.set_access_token(&tokens.access);
                if let Some(rotated) = tokens.refresh {
                    self.credentials.set_refresh_token(&rotated);
                }
                Ok(())
            }
            Err(e) => {
                leptos::logging::warn!("token refresh failed: {e}");
                self.expire_session();
                Err(ApiError::SessionExpired)
            }
        }
    }

    async fn exchange_refresh_token(&self, refresh: &str) -> Result<RefreshResponse, ApiError> {
        let body = serde_json::json!({ "refresh": refresh }).to_string();
        let wire = WireRequest {
            method: Method::Post,
            url: join_url(&self.base_url, REFRESH_PATH),
            headers: vec![("Content-Type".to_owned(), "application/json".to_owned())],
            body: Some(body),
        };
        let resp = classify(self.transport.send(wire).await?)?;
        serde_json::from_str(&resp.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn expire_session(&self) {
        self.credentials.clear();
        (self.on_session_expired)();
    }

    fn to_wire(&self, request: &ApiRequest) -> WireRequest {
        let mut url = join_url(&self.base_url, &request.path);
        if !request.query.is_empty() {
            let query = url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(request.query.iter())
                .finish();
            url.push('?');
            url.push_str(&query);
        }

        let mut headers = vec![("Content-Type".to_owned(), "application/json".to_owned())];
        if let Some(token) = self.credentials.access_token() {
            headers.push(("Authorization".to_owned(), bearer(&token)));
        }
        headers.extend(request.headers.iter().cloned());

        WireRequest {
            method: request.method,
            url,
            headers,
            body: request.body.clone(),
        }
    }
}

/// Map a response onto success or the matching [`ApiError`].
pub fn classify(resp: WireResponse) -> Result<WireResponse, ApiError> {
    if resp.is_success() {
        return Ok(resp);
    }
    let payload = ErrorPayload::from_body(&resp.body, "");
    match resp.status {
        401 => Err(ApiError::Unauthorized(payload)),
        403 => {
            leptos::logging::warn!("permission denied: {payload}");
            Err(ApiError::Forbidden(payload))
        }
        status => Err(ApiError::Status { status, payload }),
    }
}

fn redirect_to_sign_in() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(SIGN_IN_PATH);
        }
    }
}
