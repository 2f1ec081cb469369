//! Submission workflow: input validation, the in-flight request and its
//! outcome.
//!
//! The controller never blocks on its own. [`SubmissionController::submit`]
//! dispatches the request to a worker thread and the owner drives completion
//! with [`SubmissionController::poll`] (or [`SubmissionController::wait`]).

use std::sync::Arc;

use thiserror::Error;

use crate::client::{self, InferenceClient, InferenceError, PendingResponse};
use crate::path::CanonicalPath;
use crate::payload::ResultPayload;

/// Where the submission workflow currently stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    /// A request is in flight, input is frozen.
    Pending,
    /// The last attempt failed, holds a human readable reason.
    Failed(String),
}

impl SubmissionState {
    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionState::Pending)
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            SubmissionState::Failed(reason) => Some(reason),
            SubmissionState::Idle | SubmissionState::Pending => None,
        }
    }
}

/// Reasons a controller operation is refused.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ControllerError {
    #[error("Enter something to analyze first")]
    EmptyInput,
    #[error("A submission is already in progress")]
    Busy,
}

/// Emitted when a submission completes and the result should be shown.
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationEvent {
    ShowResult(ResultPayload),
}

#[derive(Debug)]
struct InFlight {
    id: u64,
    response: PendingResponse,
    /// Set once the user navigated away, the response is then discarded.
    detached: bool,
}

pub struct SubmissionController {
    client: Arc<dyn InferenceClient>,
    input: String,
    state: SubmissionState,
    in_flight: Option<InFlight>,
    submissions: u64,
}

impl std::fmt::Debug for SubmissionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmissionController")
            .field("client", &self.client.describe())
            .field("input", &self.input)
            .field("state", &self.state)
            .field("in_flight", &self.in_flight)
            .finish()
    }
}

impl SubmissionController {
    pub fn new(client: Arc<dyn InferenceClient>) -> Self {
        Self {
            client,
            input: String::new(),
            state: SubmissionState::Idle,
            in_flight: None,
            submissions: 0,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn client(&self) -> &dyn InferenceClient {
        self.client.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.state.is_pending()
    }

    /// Replace the raw input. Clears a previous failure.
    pub fn update_input(&mut self, raw: impl Into<String>) -> Result<(), ControllerError> {
        if self.is_pending() {
            return Err(ControllerError::Busy);
        }
        self.input = raw.into();
        if matches!(self.state, SubmissionState::Failed(_)) {
            self.state = SubmissionState::Idle;
        }
        Ok(())
    }

    /// Start a submission of the current input.
    ///
    /// Empty input fails validation without touching the network. While a
    /// request is pending further calls are refused and send nothing.
    pub fn submit(&mut self) -> Result<(), ControllerError> {
        if self.is_pending() {
            tracing::debug!("Ignoring submit, a request is already in flight");
            return Err(ControllerError::Busy);
        }
        let trimmed = self.input.trim();
        if trimmed.is_empty() {
            let err = ControllerError::EmptyInput;
            self.state = SubmissionState::Failed(err.to_string());
            return Err(err);
        }

        let canonical = CanonicalPath::new(trimmed);
        self.submissions += 1;
        let id = self.submissions;
        tracing::info!("Submission #{id}: {trimmed:?} as {canonical}");

        match client::dispatch(Arc::clone(&self.client), canonical) {
            Ok(response) => {
                self.in_flight = Some(InFlight {
                    id,
                    response,
                    detached: false,
                });
                self.state = SubmissionState::Pending;
            }
            Err(e) => {
                tracing::error!("Submission #{id} could not start: {e}");
                self.state = SubmissionState::Failed(e.to_string());
            }
        }
        Ok(())
    }

    /// Check for a finished request without blocking.
    pub fn poll(&mut self) -> Option<NavigationEvent> {
        let outcome = self.in_flight.as_ref()?.response.try_take()?;
        let in_flight = self.in_flight.take()?;
        self.finish(in_flight.id, in_flight.detached, outcome)
    }

    /// Block until the in-flight request finishes.
    pub fn wait(&mut self) -> Option<NavigationEvent> {
        let in_flight = self.in_flight.take()?;
        let InFlight {
            id,
            response,
            detached,
        } = in_flight;
        let outcome = response.wait();
        self.finish(id, detached, outcome)
    }

    /// Mark the in-flight request as stale.
    ///
    /// It keeps running, but its response will not be applied.
    pub fn detach(&mut self) {
        if let Some(in_flight) = self.in_flight.as_mut()
            && !in_flight.detached
        {
            tracing::debug!("Submission #{} detached", in_flight.id);
            in_flight.detached = true;
        }
    }

    /// Undo [`Self::detach`], the response is applied again when it arrives.
    pub fn reattach(&mut self) {
        if let Some(in_flight) = self.in_flight.as_mut()
            && in_flight.detached
        {
            tracing::debug!("Submission #{} reattached", in_flight.id);
            in_flight.detached = false;
        }
    }

    /// Drop any in-flight request and clear input and state.
    pub fn reset(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            tracing::debug!("Abandoning submission #{}", in_flight.id);
        }
        self.input.clear();
        self.state = SubmissionState::Idle;
    }

    fn finish(
        &mut self,
        id: u64,
        detached: bool,
        outcome: Result<ResultPayload, InferenceError>,
    ) -> Option<NavigationEvent> {
        if detached {
            tracing::warn!("Discarding stale response for submission #{id}");
            self.state = SubmissionState::Idle;
            return None;
        }
        match outcome {
            Ok(payload) => {
                tracing::info!("Submission #{id} succeeded");
                self.state = SubmissionState::Idle;
                Some(NavigationEvent::ShowResult(payload))
            }
            Err(e) => {
                tracing::info!("Submission #{id} failed: {e}");
                self.state = SubmissionState::Failed(e.to_string());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::SimulatedClient;
    use std::time::Duration;

    fn controller() -> SubmissionController {
        SubmissionController::new(Arc::new(SimulatedClient::new(Duration::from_millis(20))))
    }

    #[test]
    fn test_empty_input_fails_validation() {
        let mut ctrl = controller();
        ctrl.update_input("   \t").unwrap();
        assert_eq!(ctrl.submit(), Err(ControllerError::EmptyInput));
        assert_eq!(
            ctrl.state(),
            &SubmissionState::Failed(ControllerError::EmptyInput.to_string())
        );
        assert!(ctrl.poll().is_none());
    }

    #[test]
    fn test_update_clears_failure() {
        let mut ctrl = controller();
        let _ = ctrl.submit();
        assert!(ctrl.state().failure().is_some());
        ctrl.update_input("a").unwrap();
        assert_eq!(ctrl.state(), &SubmissionState::Idle);
    }

    #[test]
    fn test_input_frozen_while_pending() {
        let mut ctrl = controller();
        ctrl.update_input("hello").unwrap();
        ctrl.submit().unwrap();
        assert_eq!(ctrl.update_input("changed"), Err(ControllerError::Busy));
        assert_eq!(ctrl.input(), "hello");
        assert_eq!(ctrl.submit(), Err(ControllerError::Busy));
        assert!(matches!(ctrl.wait(), Some(NavigationEvent::ShowResult(_))));
        assert_eq!(ctrl.state(), &SubmissionState::Idle);
    }

    #[test]
    fn test_detached_response_is_discarded() {
        let mut ctrl = controller();
        ctrl.update_input("hello").unwrap();
        ctrl.submit().unwrap();
        ctrl.detach();
        assert!(ctrl.wait().is_none());
        assert_eq!(ctrl.state(), &SubmissionState::Idle);
    }

    #[test]
    fn test_reattached_response_is_applied() {
        let mut ctrl = controller();
        ctrl.update_input("hello").unwrap();
        ctrl.submit().unwrap();
        ctrl.detach();
        ctrl.reattach();
        assert!(matches!(ctrl.wait(), Some(NavigationEvent::ShowResult(_))));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut ctrl = controller();
        ctrl.update_input("hello").unwrap();
        ctrl.submit().unwrap();
        ctrl.reset();
        assert_eq!(ctrl.input(), "");
        assert_eq!(ctrl.state(), &SubmissionState::Idle);
        assert!(ctrl.wait().is_none());
    }
}
