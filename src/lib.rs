pub mod app;
pub mod config;
pub mod error;
pub mod generator;
pub mod input;
pub mod logger;
pub mod models;
pub mod notify;
pub mod session;
pub mod ui;
pub mod utils;


// Re-exports for convenience
pub use app::{App, HomeItem, HomeMenu};
pub use config::AppConfig;
pub use error::{ConfigError, QuizError};
pub use generator::generate_questions;
pub use input::handle_key;
pub use models::{Feedback, GameState, Question, QuizConfig, QuizMode, QuizView, ResultsView};
pub use notify::{Notifier, Silent, TerminalBell};
pub use session::QuizSession;
pub use ui::{draw, draw_home, draw_quiz, draw_results};
