pub mod layout;
mod home;
mod quiz;
mod results;

use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

use crate::app::App;
use crate::models::GameState;

pub use home::draw_home;
pub use layout::{calculate_home_chunks, calculate_quiz_chunks, calculate_results_chunks};
pub use quiz::draw_quiz;
pub use results::draw_results;

pub(crate) fn key_hint(key: &'static str) -> Span<'static> {
    Span::styled(
        key,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

/// Draw whichever screen the session is on.
pub fn draw(f: &mut Frame, app: &App) {
    match app.session.state() {
        GameState::Home => draw_home(f, &app.home, app.session.total_questions()),
        GameState::Quiz => {
            if let Some(view) = app.session.quiz_view() {
                draw_quiz(f, &view, &app.input_buffer);
            }
        }
        GameState::Results => {
            if let Some(view) = app.session.results_view() {
                draw_results(f, &view);
            }
        }
    }
}
