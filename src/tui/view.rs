//! TUI rendering logic for the App.

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use super::app::App;
use super::components::home::Home;
use super::components::input::Input;
use super::components::nav::NavBar;
use super::components::result::ResultView;
use super::helpers::layouts;
use crate::navigation::Screen;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let session = self.session();
        let (nav_area, content_area, footer_area) = layouts::screen(area);

        NavBar::new(session.screen(), session.has_result()).render(nav_area, buf);

        match session.screen() {
            Screen::Home => {
                let backend = session.client_description();
                let home = Home::new(&backend, session.has_result());
                home.footer().render(footer_area, buf);
                home.render(content_area, buf);
            }
            Screen::Input => {
                let input = Input::new(
                    self.input_state(),
                    session.submission_state(),
                    self.tick_count(),
                );
                input.footer().render(footer_area, buf);
                input.render(content_area, buf);
            }
            Screen::Result => {
                // The session only enters the result screen with a payload.
                if let Some(text) = self.result_text() {
                    let view = ResultView::new(&text, self.result_state());
                    view.footer().render(footer_area, buf);
                    view.render(content_area, buf);
                }
            }
        }
    }
}
