//! Shared test doubles for inference-hub tests.
//!
//! [`FakeClient`] stands in for the inference service. It records every
//! request it receives and can hold requests back until the test releases
//! them, which keeps a submission pending for as long as a test needs.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use inference_hub::client::{InferenceClient, InferenceError};
use inference_hub::path::CanonicalPath;
use inference_hub::payload::ResultPayload;
use inference_hub::session::Session;

type Responder = Box<dyn Fn(&CanonicalPath) -> Result<ResultPayload, InferenceError> + Send + Sync>;

pub struct FakeClient {
    seen: Arc<Mutex<Vec<String>>>,
    calls: Arc<AtomicUsize>,
    gate: Option<Mutex<Receiver<()>>>,
    respond: Responder,
}

/// Test side view of a [`FakeClient`].
pub struct Probe {
    seen: Arc<Mutex<Vec<String>>>,
    calls: Arc<AtomicUsize>,
    release: Option<Sender<()>>,
}

impl FakeClient {
    /// A client that answers immediately.
    pub fn new(
        respond: impl Fn(&CanonicalPath) -> Result<ResultPayload, InferenceError>
        + Send
        + Sync
        + 'static,
    ) -> (Self, Probe) {
        Self::build(Box::new(respond), false)
    }

    /// A client that answers only after [`Probe::release`].
    pub fn gated(
        respond: impl Fn(&CanonicalPath) -> Result<ResultPayload, InferenceError>
        + Send
        + Sync
        + 'static,
    ) -> (Self, Probe) {
        Self::build(Box::new(respond), true)
    }

    fn build(respond: Responder, gated: bool) -> (Self, Probe) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let calls = Arc::new(AtomicUsize::new(0));
        let (release, gate) = if gated {
            let (tx, rx) = mpsc::channel();
            (Some(tx), Some(Mutex::new(rx)))
        } else {
            (None, None)
        };
        let client = Self {
            seen: Arc::clone(&seen),
            calls: Arc::clone(&calls),
            gate,
            respond,
        };
        let probe = Probe {
            seen,
            calls,
            release,
        };
        (client, probe)
    }
}

impl InferenceClient for FakeClient {
    fn infer(&self, input: &CanonicalPath) -> Result<ResultPayload, InferenceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(input.as_str().to_string());
        if let Some(gate) = &self.gate {
            // A dropped probe releases the request as well.
            let _ = gate.lock().unwrap().recv();
        }
        (self.respond)(input)
    }

    fn describe(&self) -> String {
        "fake".to_string()
    }
}

impl Probe {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }

    /// Let one held back request answer.
    pub fn release(&self) {
        if let Some(tx) = &self.release {
            let _ = tx.send(());
        }
    }
}

/// Client answering every request with `payload`.
pub fn answering(payload: ResultPayload) -> (FakeClient, Probe) {
    FakeClient::new(move |_| Ok(payload.clone()))
}

pub fn session_with(client: FakeClient) -> Session {
    Session::new(Arc::new(client))
}

/// Poll `session` until the in-flight request is applied.
pub fn poll_until_settled(session: &mut Session) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while !session.poll() {
        assert!(Instant::now() < deadline, "request did not settle in time");
        std::thread::sleep(Duration::from_millis(5));
    }
}
