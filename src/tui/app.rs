//! TUI application model
//!
//! Wraps a [`Session`] with the state that only matters for presentation:
//! the text field with its cursor, the result scroll offset and the spinner
//! tick. `update()` maps key presses onto session operations and `tick()`
//! collects finished requests, so both can be driven from tests without a
//! terminal.

use crossterm::event::KeyEvent;
use ratatui::layout::Rect;

use crate::navigation::Screen;
use crate::session::Session;

use super::components::home::HomeAction;
use super::components::input::{Input, InputAction, InputResult, InputState};
use super::components::nav::NavAction;
use super::components::result::{ResultAction, ResultState, ResultText};
use super::helpers::layouts;

const HOME_HEIGHT: u16 = 11;
const INPUT_HEIGHT: u16 = 6;
const MIN_RESULT_HEIGHT: u16 = 6;
const MAX_RESULT_HEIGHT: u16 = 24;

/// Result of processing a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateResult {
    /// Keep processing events
    Continue,
    /// User asked to leave
    Quit,
}

#[derive(Debug)]
pub struct App {
    session: Session,
    input: InputState,
    result: ResultState,
    tick: usize,
}

impl App {
    /// Create the app. A prefilled input opens directly on the input screen.
    pub fn new(session: Session, prefill: Option<&str>) -> Self {
        let mut app = Self {
            session,
            input: InputState::default(),
            result: ResultState::default(),
            tick: 0,
        };
        if let Some(text) = prefill {
            if let Err(e) = app.session.update_input(text) {
                tracing::warn!("Could not prefill input: {e}");
            }
            app.go_to(Screen::Input);
            app.sync_input();
        }
        app
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn input_state(&self) -> &InputState {
        &self.input
    }

    pub fn result_state(&self) -> ResultState {
        self.result
    }

    pub fn tick_count(&self) -> usize {
        self.tick
    }

    /// Text of the result screen, if it is active.
    pub fn result_text(&self) -> Option<ResultText> {
        self.session.result().map(ResultText::from_payload)
    }

    pub fn update(&mut self, key: KeyEvent) -> UpdateResult {
        match NavAction::from_key(key) {
            NavAction::GoTo(screen) => {
                self.go_to(screen);
                return UpdateResult::Continue;
            }
            NavAction::Reset => {
                self.reset();
                return UpdateResult::Continue;
            }
            NavAction::Quit => return UpdateResult::Quit,
            NavAction::None => {}
        }
        match self.session.screen() {
            Screen::Home => self.update_home(key),
            Screen::Input => self.update_input(key),
            Screen::Result => self.update_result(key),
        }
    }

    /// Advance the spinner and apply a finished request.
    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        if self.session.poll() && self.session.screen() == Screen::Result {
            self.result.reset();
        }
    }

    fn update_home(&mut self, key: KeyEvent) -> UpdateResult {
        match HomeAction::from_key(key) {
            HomeAction::Start => self.go_to(Screen::Input),
            HomeAction::ShowResult => self.go_to(Screen::Result),
            HomeAction::Quit => return UpdateResult::Quit,
            HomeAction::None => {}
        }
        UpdateResult::Continue
    }

    fn update_input(&mut self, key: KeyEvent) -> UpdateResult {
        let action = InputAction::from_key(key);
        let pending = self.session.submission_state().is_pending();
        if pending && action.is_edit() {
            return UpdateResult::Continue;
        }
        match self.input.handle(action) {
            Some(InputResult::Submit) => {
                if let Err(e) = self.session.submit() {
                    tracing::debug!("Submit refused: {e}");
                }
            }
            Some(InputResult::Cancel) => self.go_to(Screen::Home),
            None if action.is_edit() => {
                if let Err(e) = self.session.update_input(self.input.text()) {
                    tracing::debug!("Edit refused: {e}");
                }
            }
            None => {}
        }
        UpdateResult::Continue
    }

    fn update_result(&mut self, key: KeyEvent) -> UpdateResult {
        match ResultAction::from_key(key) {
            ResultAction::NewAnalysis => {
                if self.session.update_input("").is_ok() {
                    self.sync_input();
                }
                self.go_to(Screen::Input);
            }
            ResultAction::Reset => self.reset(),
            ResultAction::Home => self.go_to(Screen::Home),
            ResultAction::ScrollUp => self.result.scroll_up(),
            ResultAction::ScrollDown => {
                let lines = self.result_text().map_or(0, |t| t.lines.len());
                self.result.scroll_down(lines);
            }
            ResultAction::Quit => return UpdateResult::Quit,
            ResultAction::None => {}
        }
        UpdateResult::Continue
    }

    fn go_to(&mut self, screen: Screen) {
        if let Err(e) = self.session.go_to(screen) {
            tracing::debug!("Navigation to {screen} refused: {e}");
        }
    }

    fn reset(&mut self) {
        self.session.reset();
        self.result.reset();
        self.sync_input();
    }

    /// Rebuild the text field after the session input changed underneath it.
    fn sync_input(&mut self) {
        if self.input.text() != self.session.input() {
            self.input = InputState::new(Some(self.session.input()));
        }
    }

    pub fn cursor_position(&self, area: Rect) -> Option<(u16, u16)> {
        let state = self.session.submission_state();
        if self.session.screen() != Screen::Input || state.is_pending() {
            return None;
        }
        let (_, content, _) = layouts::screen(area);
        Some(Input::new(&self.input, state, self.tick).cursor_position(content))
    }

    pub fn terminal_height(&self) -> u16 {
        match self.session.screen() {
            Screen::Home => HOME_HEIGHT,
            Screen::Input => INPUT_HEIGHT,
            Screen::Result => {
                let lines = self.result_text().map_or(0, |t| t.lines.len());
                let height = u16::try_from(lines + 4).unwrap_or(MAX_RESULT_HEIGHT);
                height.clamp(MIN_RESULT_HEIGHT, MAX_RESULT_HEIGHT)
            }
        }
    }
}
