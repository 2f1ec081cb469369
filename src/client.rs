//! Clients for the remote inference service.
//!
//! Every strategy implements [`InferenceClient`], a blocking single-shot call.
//! [`dispatch`] runs that call on a worker thread and hands back a
//! [`PendingResponse`] which the caller polls from its event loop.

use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;

use thiserror::Error;

use crate::config::Config;
use crate::path::CanonicalPath;
use crate::payload::ResultPayload;

pub mod http;
pub mod simulated;

pub use http::HttpClient;
pub use simulated::SimulatedClient;

#[derive(Error, Debug)]
pub enum InferenceError {
    #[error("Could not reach the inference service: {0}")]
    Transport(#[from] ureq::Error),

    #[error("Inference request failed with status {status}")]
    RequestFailed { status: u16 },

    #[error("Could not decode the inference response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Nothing to analyze, the input is empty")]
    EmptyInput,

    #[error("Inference worker failed: {0}")]
    Worker(String),
}

/// A strategy for running a single inference request.
pub trait InferenceClient: Send + Sync {
    /// Run one request to completion. Implementations never retry.
    fn infer(&self, input: &CanonicalPath) -> Result<ResultPayload, InferenceError>;

    /// Short human readable description of where requests go.
    fn describe(&self) -> String;
}

/// Select the client strategy described by `config`.
///
/// The live HTTP client is used when an endpoint is configured and simulation
/// is not forced, the simulated responder otherwise.
pub fn from_config(config: &Config) -> Arc<dyn InferenceClient> {
    let inference = &config.inference;
    match inference.endpoint.as_deref() {
        Some(endpoint) if !inference.simulate => {
            tracing::info!("Using inference endpoint {endpoint}");
            Arc::new(
                HttpClient::new(endpoint)
                    .with_field(&inference.field)
                    .with_timeout(inference.timeout_secs.map(Duration::from_secs)),
            )
        }
        _ => {
            let sim = &config.simulation;
            tracing::info!("Using simulated inference with {}ms delay", sim.delay_ms);
            Arc::new(
                SimulatedClient::new(Duration::from_millis(sim.delay_ms))
                    .with_confidence(sim.confidence_min, sim.confidence_max),
            )
        }
    }
}

type Outcome = Result<ResultPayload, InferenceError>;

/// Handle to a request running on a worker thread.
#[derive(Debug)]
pub struct PendingResponse {
    rx: Receiver<Outcome>,
}

impl PendingResponse {
    /// Take the response if it has arrived.
    ///
    /// Returns `None` while the request is still running. A worker that went
    /// away without answering is reported as [`InferenceError::Worker`].
    pub fn try_take(&self) -> Option<Outcome> {
        match self.rx.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(worker_gone())),
        }
    }

    /// Block until the response arrives.
    pub fn wait(self) -> Outcome {
        self.rx.recv().unwrap_or_else(|_| Err(worker_gone()))
    }
}

fn worker_gone() -> InferenceError {
    InferenceError::Worker("worker exited without a response".into())
}

/// Run `client.infer(input)` on a dedicated worker thread.
pub fn dispatch(
    client: Arc<dyn InferenceClient>,
    input: CanonicalPath,
) -> Result<PendingResponse, InferenceError> {
    let (tx, rx) = mpsc::channel();
    thread::Builder::new()
        .name("inference".into())
        .spawn(move || {
            let outcome = client.infer(&input);
            if let Err(e) = &outcome {
                tracing::debug!("Inference for {input} failed: {e}");
            }
            // The receiver is gone when the submission was reset.
            if tx.send(outcome).is_err() {
                tracing::debug!("Dropping response for {input}, nobody is waiting");
            }
        })
        .map_err(|e| InferenceError::Worker(e.to_string()))?;
    Ok(PendingResponse { rx })
}
