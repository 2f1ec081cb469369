//! Which screen is active and the payload shown on the result screen.

use std::fmt;

use thiserror::Error;

use crate::payload::ResultPayload;

/// The three top-level screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Home,
    Input,
    Result,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Home, Screen::Input, Screen::Result];

    pub fn label(&self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Input => "Input",
            Screen::Result => "Result",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("There is no result to show yet")]
    NoResult,
}

/// Snapshot of the active screen.
///
/// `payload` is only set when `screen` is [`Screen::Result`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Current<'a> {
    pub screen: Screen,
    pub payload: Option<&'a ResultPayload>,
}

#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    screen: Screen,
    payload: Option<ResultPayload>,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch to `screen`, replacing the stored payload if one is given.
    ///
    /// The result screen can only be entered once a payload exists, so it
    /// never renders without data.
    pub fn go_to(
        &mut self,
        screen: Screen,
        payload: Option<ResultPayload>,
    ) -> Result<(), NavigationError> {
        if screen == Screen::Result && payload.is_none() && self.payload.is_none() {
            return Err(NavigationError::NoResult);
        }
        if let Some(payload) = payload {
            self.payload = Some(payload);
        }
        if self.screen != screen {
            tracing::debug!("Navigating from {} to {screen}", self.screen);
        }
        self.screen = screen;
        Ok(())
    }

    pub fn current(&self) -> Current<'_> {
        Current {
            screen: self.screen,
            payload: match self.screen {
                Screen::Result => self.payload.as_ref(),
                Screen::Home | Screen::Input => None,
            },
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn has_result(&self) -> bool {
        self.payload.is_some()
    }

    /// Stored payload regardless of the active screen.
    pub fn last_result(&self) -> Option<&ResultPayload> {
        self.payload.as_ref()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
