// ABOUTME: Stub identity verifier, analysis backend, and store for integration tests
// ABOUTME: Each stub counts its calls so tests can assert what was (not) contacted

use async_trait::async_trait;
use axum::http::StatusCode;
use axum::Router;
use serde_json::value::RawValue;
use serde_json::Value;
use sleep_gateway::analysis::{AnalysisBackend, BackendError};
use sleep_gateway::auth::{IdentityVerifier, Principal};
use sleep_gateway::config::{
    AnalysisServiceConfig, Environment, IdentityServiceConfig, ServerConfig,
};
use sleep_gateway::errors::{AppError, AppResult};
use sleep_gateway::resources::ServerResources;
use sleep_gateway::server::build_router;
use sleep_gateway::storage::AnalysisStore;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Token accepted by [`StubVerifier`]
pub const VALID_TOKEN: &str = "valid-token";
/// Principal id returned for [`VALID_TOKEN`]
pub const TEST_USER_ID: &str = "user-123";

/// Verifier accepting exactly [`VALID_TOKEN`]
#[derive(Default)]
pub struct StubVerifier {
    calls: AtomicUsize,
}

impl StubVerifier {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityVerifier for StubVerifier {
    async fn verify(&self, token: &str) -> AppResult<Principal> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if token == VALID_TOKEN {
            Ok(Principal {
                id: TEST_USER_ID.to_owned(),
                email: Some("sleeper@example.com".to_owned()),
            })
        } else {
            Err(AppError::auth_invalid("Unauthorized"))
        }
    }
}

/// Scripted backend answer
pub enum BackendReply {
    /// Answer 2xx with this body
    Analysis(Value),
    /// Answer with this non-success status
    Status(StatusCode),
    /// Panic inside the backend call
    Panic,
}

/// Backend returning a fixed reply and recording every payload it receives
pub struct StubBackend {
    reply: BackendReply,
    received: Mutex<Vec<String>>,
}

impl StubBackend {
    fn replying(reply: BackendReply) -> Self {
        Self {
            reply,
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn answering(analysis: Value) -> Self {
        Self::replying(BackendReply::Analysis(analysis))
    }

    pub fn failing_with(status: StatusCode) -> Self {
        Self::replying(BackendReply::Status(status))
    }

    pub fn panicking() -> Self {
        Self::replying(BackendReply::Panic)
    }

    pub fn calls(&self) -> usize {
        self.received.lock().unwrap().len()
    }

    /// Payloads as parsed JSON
    pub fn received(&self) -> Vec<Value> {
        self.received_raw()
            .iter()
            .map(|raw| serde_json::from_str(raw).unwrap())
            .collect()
    }

    /// Payloads exactly as forwarded
    pub fn received_raw(&self) -> Vec<String> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl AnalysisBackend for StubBackend {
    async fn analyze(&self, payload: &RawValue) -> Result<Box<RawValue>, BackendError> {
        self.received.lock().unwrap().push(payload.get().to_owned());
        match &self.reply {
            BackendReply::Analysis(analysis) => Ok(RawValue::from_string(analysis.to_string()).unwrap()),
            BackendReply::Status(status) => Err(BackendError::Status { status: *status }),
            BackendReply::Panic => panic!("analysis backend stub exploded"),
        }
    }
}

/// Store recording which principals had analyses persisted
#[derive(Default)]
pub struct RecordingStore {
    records: Mutex<Vec<(String, Value)>>,
}

impl RecordingStore {
    pub fn records(&self) -> Vec<(String, Value)> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl AnalysisStore for RecordingStore {
    async fn record(&self, principal: &Principal, analysis: &RawValue) -> AppResult<()> {
        let analysis: Value = serde_json::from_str(analysis.get()).unwrap();
        self.records
            .lock()
            .unwrap()
            .push((principal.id.clone(), analysis));
        Ok(())
    }
}

/// Configuration pointing at unroutable services; stubs replace the clients
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_owned(),
        http_port: 0,
        environment: Environment::Testing,
        max_request_body_bytes: 64 * 1024,
        analysis_service: AnalysisServiceConfig {
            base_url: "http://127.0.0.1:9".to_owned(),
            timeout_secs: 1,
            connect_timeout_secs: 1,
        },
        identity_service: IdentityServiceConfig {
            base_url: "http://127.0.0.1:9".to_owned(),
            api_key: None,
            timeout_secs: 1,
        },
    }
}

/// Fully layered gateway router wired to the given stubs
pub struct TestGateway {
    pub verifier: Arc<StubVerifier>,
    pub backend: Arc<StubBackend>,
    pub store: Arc<RecordingStore>,
    pub router: Router,
}

impl TestGateway {
    pub fn new(backend: StubBackend) -> Self {
        Self::with_config(backend, test_config())
    }

    pub fn with_config(backend: StubBackend, config: ServerConfig) -> Self {
        let verifier = Arc::new(StubVerifier::default());
        let backend = Arc::new(backend);
        let store = Arc::new(RecordingStore::default());

        let resources = Arc::new(ServerResources::new(
            Arc::new(config),
            verifier.clone(),
            backend.clone(),
            store.clone(),
        ));

        Self {
            verifier,
            backend,
            store,
            router: build_router(resources),
        }
    }

    /// Fresh router handle for one request
    pub fn app(&self) -> Router {
        self.router.clone()
    }
}
