use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use ragcheck_core::RagCheckError;

/// An HTTP request to a scoring provider.
#[derive(Debug, Clone)]
pub struct ScorerRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Value,
}

/// A provider response: HTTP status plus the parsed JSON body.
#[derive(Debug, Clone)]
pub struct ScorerResponse {
    pub status: u16,
    pub body: Value,
}

/// Transport abstraction under the scorer, so provider logic can be tested
/// without a network.
#[async_trait]
pub trait ScorerBackend: Send + Sync {
    async fn send(&self, request: ScorerRequest) -> Result<ScorerResponse, RagCheckError>;
}

/// Real transport over reqwest.
pub struct HttpBackend {
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScorerBackend for HttpBackend {
    async fn send(&self, request: ScorerRequest) -> Result<ScorerResponse, RagCheckError> {
        let mut builder = self.client.post(&request.url).json(&request.body);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| RagCheckError::Scorer(format!("request failed: {e}")))?;

        let status = response.status().as_u16();
        let body = response.json::<Value>().await.unwrap_or(Value::Null);

        Ok(ScorerResponse { status, body })
    }
}

/// Test backend: queued responses, recorded requests.
pub struct FakeBackend {
    responses: Mutex<VecDeque<ScorerResponse>>,
    requests: Mutex<Vec<ScorerRequest>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn push_response(&self, response: ScorerResponse) {
        self.responses
            .lock()
            .expect("fake backend lock")
            .push_back(response);
    }

    /// Requests seen so far, in order.
    pub fn recorded_requests(&self) -> Vec<ScorerRequest> {
        self.requests.lock().expect("fake backend lock").clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().expect("fake backend lock").len()
    }
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ScorerBackend for FakeBackend {
    async fn send(&self, request: ScorerRequest) -> Result<ScorerResponse, RagCheckError> {
        self.requests
            .lock()
            .expect("fake backend lock")
            .push(request);
        self.responses
            .lock()
            .expect("fake backend lock")
            .pop_front()
            .ok_or_else(|| RagCheckError::Scorer("FakeBackend response queue exhausted".into()))
    }
}
