//! Scripted transport for exercising the client without a browser.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::credentials::SessionContext;
use super::http::{ApiClient, Transport, WireRequest, WireResponse};
use crate::error::ApiError;

/// Replays queued responses in order and records every request it sees.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    responses: Arc<Mutex<VecDeque<Result<WireResponse, ApiError>>>>,
    requests: Arc<Mutex<Vec<WireRequest>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: impl Into<String>) -> &Self {
        self.responses.lock().unwrap().push_back(Ok(WireResponse {
            status,
            body: body.into(),
        }));
        self
    }

    pub fn respond_json(&self, status: u16, body: &serde_json::Value) -> &Self {
        self.respond(status, body.to_string())
    }

    pub fn fail(&self, error: ApiError) -> &Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn requests(&self) -> Vec<WireRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: WireRequest) -> Result<WireResponse, ApiError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted response".to_owned())))
    }
}

/// Client over a fresh scripted transport and in-memory credentials.
pub fn scripted_client() -> (ApiClient<ScriptedTransport>, ScriptedTransport, SessionContext) {
    let transport = ScriptedTransport::new();
    let session = SessionContext::in_memory();
    let client = ApiClient::new("/api/", session.clone(), transport.clone()).with_session_expired_hook(|| {});
    (client, transport, session)
}
