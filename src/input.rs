use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, MAX_INPUT_LEN};
use crate::logger;
use crate::models::GameState;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    match app.session.state() {
        GameState::Home => handle_home_input(app, key),
        GameState::Quiz => handle_quiz_input(app, key),
        GameState::Results => handle_results_input(app, key),
    }
}

pub fn handle_home_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => app.home.focus_prev(),
        KeyCode::Down | KeyCode::Tab => app.home.focus_next(),
        KeyCode::Left => app.home.adjust(-1),
        KeyCode::Right => app.home.adjust(1),
        KeyCode::Char(c @ '2'..='9') => {
            if let Some(digit) = c.to_digit(10) {
                app.home.set_value(digit as u8);
            }
        }
        KeyCode::Enter => {
            let config = app.home.selected_config();
            match app.session.start_quiz(config) {
                Ok(()) => app.input_buffer.clear(),
                Err(e) => logger::log(&format!("Could not start quiz: {}", e)),
            }
        }
        KeyCode::Esc | KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}

pub fn handle_quiz_input(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Esc {
        app.input_buffer.clear();
        app.session.go_home();
        return;
    }

    if app.session.is_answered() {
        if key.code == KeyCode::Enter {
            app.session.advance();
        }
        return;
    }

    match key.code {
        KeyCode::Enter => {
            if app.session.submit_answer(&app.input_buffer).is_some() {
                app.input_buffer.clear();
            }
        }
        KeyCode::Backspace => {
            app.input_buffer.pop();
        }
        KeyCode::Char(c) if c.is_ascii_digit() || (c == '-' && app.input_buffer.is_empty()) => {
            if app.input_buffer.len() < MAX_INPUT_LEN {
                app.input_buffer.push(c);
            }
        }
        _ => {}
    }
}

pub fn handle_results_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char('r') => {
            app.input_buffer.clear();
            if let Err(e) = app.session.restart() {
                logger::log(&format!("Could not restart quiz: {}", e));
            }
        }
        KeyCode::Esc | KeyCode::Char('h') => app.session.go_home(),
        KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Feedback, QuizConfig};
    use crate::notify::Silent;

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::empty()));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn test_app() -> App {
        App::seeded(5, Box::new(Silent), 42)
    }

    #[test]
    fn test_enter_on_home_starts_selected_mode() {
        let mut app = test_app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('7'));
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.session.state(), GameState::Quiz);
        assert_eq!(app.session.config(), Some(&QuizConfig::dan(7)));
        assert!(app.session.questions().iter().all(|q| q.num1 == 7));
    }

    #[test]
    fn test_home_arrows_pick_multiplier() {
        let mut app = test_app();
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.session.config(), Some(&QuizConfig::multiplier(4)));
    }

    #[test]
    fn test_typing_and_submitting_answer() {
        let mut app = test_app();
        press(&mut app, KeyCode::Enter);
        let answer = app.session.current_question().unwrap().answer;

        type_text(&mut app, &answer.to_string());
        assert_eq!(app.input_buffer, answer.to_string());

        press(&mut app, KeyCode::Enter);
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.session.score(), 1);
        assert_eq!(app.session.quiz_view().unwrap().feedback, Feedback::Correct);

        // Enter again moves to the next question
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.current_index(), 1);
        assert!(!app.session.is_answered());
    }

    #[test]
    fn test_empty_submission_keeps_question_open() {
        let mut app = test_app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);

        assert!(!app.session.is_answered());
        assert_eq!(app.session.current_index(), 0);
    }

    #[test]
    fn test_non_digits_are_not_typed() {
        let mut app = test_app();
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "a1b2-");
        assert_eq!(app.input_buffer, "12");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.input_buffer, "1");
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        assert!(app.input_buffer.is_empty());

        type_text(&mut app, "-123456");
        assert_eq!(app.input_buffer, "-123");
    }

    #[test]
    fn test_typing_is_locked_after_answer() {
        let mut app = test_app();
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "1");
        press(&mut app, KeyCode::Enter);
        assert!(app.session.is_answered());

        type_text(&mut app, "99");
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn test_full_round_to_results_and_restart() {
        let mut app = test_app();
        press(&mut app, KeyCode::Enter);
        for _ in 0..5 {
            let answer = app.session.current_question().unwrap().answer;
            type_text(&mut app, &answer.to_string());
            press(&mut app, KeyCode::Enter);
            press(&mut app, KeyCode::Enter);
        }
        assert_eq!(app.session.state(), GameState::Results);
        assert_eq!(app.session.results_view().unwrap().score, 5);

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.session.state(), GameState::Quiz);
        assert_eq!(app.session.score(), 0);
        assert_eq!(app.session.current_index(), 0);
    }

    #[test]
    fn test_esc_in_quiz_goes_home() {
        let mut app = test_app();
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "12");
        press(&mut app, KeyCode::Esc);

        assert_eq!(app.session.state(), GameState::Home);
        assert!(app.input_buffer.is_empty());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_results_home_and_quit() {
        let mut app = test_app();
        press(&mut app, KeyCode::Enter);
        for _ in 0..5 {
            type_text(&mut app, "0");
            press(&mut app, KeyCode::Enter);
            press(&mut app, KeyCode::Enter);
        }
        assert_eq!(app.session.state(), GameState::Results);

        press(&mut app, KeyCode::Char('h'));
        assert_eq!(app.session.state(), GameState::Home);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_anywhere() {
        let mut app = test_app();
        press(&mut app, KeyCode::Enter);
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }
}
