//! The boundary between the core and whatever renders it.
//!
//! A [`Session`] owns the submission workflow and the navigation state and
//! keeps them consistent: successful submissions switch to the result
//! screen, leaving the input screen turns an in-flight request stale, and
//! [`Session::reset`] restores the initial state.

use std::sync::Arc;

use crate::client::InferenceClient;
use crate::controller::{ControllerError, NavigationEvent, SubmissionController, SubmissionState};
use crate::navigation::{Current, NavigationError, NavigationState, Screen};
use crate::payload::ResultPayload;

#[derive(Debug)]
pub struct Session {
    controller: SubmissionController,
    navigation: NavigationState,
}

impl Session {
    pub fn new(client: Arc<dyn InferenceClient>) -> Self {
        Self {
            controller: SubmissionController::new(client),
            navigation: NavigationState::new(),
        }
    }

    pub fn screen(&self) -> Screen {
        self.navigation.screen()
    }

    pub fn current(&self) -> Current<'_> {
        self.navigation.current()
    }

    pub fn submission_state(&self) -> &SubmissionState {
        self.controller.state()
    }

    pub fn input(&self) -> &str {
        self.controller.input()
    }

    /// Payload of the result screen, `None` on any other screen.
    pub fn result(&self) -> Option<&ResultPayload> {
        self.navigation.current().payload
    }

    pub fn has_result(&self) -> bool {
        self.navigation.has_result()
    }

    pub fn client_description(&self) -> String {
        self.controller.client().describe()
    }

    pub fn update_input(&mut self, raw: impl Into<String>) -> Result<(), ControllerError> {
        self.controller.update_input(raw)
    }

    pub fn submit(&mut self) -> Result<(), ControllerError> {
        self.controller.submit()
    }

    /// Navigate on user request.
    ///
    /// Leaving the input screen while a request is pending detaches it, its
    /// response will not pull the user back to the result screen. Coming
    /// back before it finished attaches it again.
    pub fn go_to(&mut self, screen: Screen) -> Result<(), NavigationError> {
        let from = self.screen();
        self.navigation.go_to(screen, None)?;
        if self.controller.is_pending() {
            match (from == Screen::Input, screen == Screen::Input) {
                (true, false) => self.controller.detach(),
                (false, true) => self.controller.reattach(),
                _ => {}
            }
        }
        Ok(())
    }

    /// Restore the state the application started in.
    pub fn reset(&mut self) {
        tracing::info!("Resetting session");
        self.controller.reset();
        self.navigation.reset();
    }

    /// Apply a finished request, if any. Returns whether anything changed.
    pub fn poll(&mut self) -> bool {
        if !self.controller.is_pending() {
            return false;
        }
        let event = self.controller.poll();
        let finished = !self.controller.is_pending();
        if let Some(event) = event {
            self.apply(event);
        }
        finished
    }

    /// Block until the in-flight request finishes and apply it.
    pub fn wait(&mut self) {
        if let Some(event) = self.controller.wait() {
            self.apply(event);
        }
    }

    fn apply(&mut self, event: NavigationEvent) {
        match event {
            NavigationEvent::ShowResult(payload) => {
                // A payload is always present, so this cannot fail.
                if let Err(e) = self.navigation.go_to(Screen::Result, Some(payload)) {
                    tracing::error!("Could not show result: {e}");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::SimulatedClient;
    use std::time::Duration;

    fn session() -> Session {
        Session::new(Arc::new(SimulatedClient::new(Duration::ZERO)))
    }

    #[test]
    fn test_initial_state() {
        let session = session();
        assert_eq!(session.screen(), Screen::Home);
        assert_eq!(session.submission_state(), &SubmissionState::Idle);
        assert_eq!(session.input(), "");
        assert!(session.result().is_none());
    }

    #[test]
    fn test_success_shows_result() {
        let mut session = session();
        session.go_to(Screen::Input).unwrap();
        session.update_input("hello world").unwrap();
        session.submit().unwrap();
        session.wait();
        assert_eq!(session.screen(), Screen::Result);
        let text = session.result().unwrap().render();
        assert!(text.contains("Word count: 2"));
    }

    #[test]
    fn test_result_screen_needs_result() {
        let mut session = session();
        assert_eq!(session.go_to(Screen::Result), Err(NavigationError::NoResult));
        assert_eq!(session.screen(), Screen::Home);
    }
}
