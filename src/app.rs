use crate::config::AppConfig;
use crate::models::{MAX_OPERAND, MIN_OPERAND, QuizConfig};
use crate::notify::{Notifier, notifier_for};
use crate::session::QuizSession;

pub const MAX_INPUT_LEN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeItem {
    Random,
    Dan,
    Multiplier,
}

/// Selection state of the home screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeMenu {
    pub focused: HomeItem,
    pub dan: u8,
    pub multiplier: u8,
}

impl Default for HomeMenu {
    fn default() -> Self {
        Self {
            focused: HomeItem::Random,
            dan: MIN_OPERAND,
            multiplier: MIN_OPERAND,
        }
    }
}

impl HomeMenu {
    pub fn focus_next(&mut self) {
        self.focused = match self.focused {
            HomeItem::Random => HomeItem::Dan,
            HomeItem::Dan | HomeItem::Multiplier => HomeItem::Multiplier,
        };
    }

    pub fn focus_prev(&mut self) {
        self.focused = match self.focused {
            HomeItem::Multiplier => HomeItem::Dan,
            HomeItem::Dan | HomeItem::Random => HomeItem::Random,
        };
    }

    /// Step the focused row's operand, staying inside 2..=9.
    pub fn adjust(&mut self, delta: i8) {
        if let Some(value) = self.focused_value_mut() {
            let next = (*value as i8 + delta).clamp(MIN_OPERAND as i8, MAX_OPERAND as i8);
            *value = next as u8;
        }
    }

    /// Set the focused row's operand; out-of-range digits are ignored.
    pub fn set_value(&mut self, value: u8) {
        if !(MIN_OPERAND..=MAX_OPERAND).contains(&value) {
            return;
        }
        if let Some(slot) = self.focused_value_mut() {
            *slot = value;
        }
    }

    fn focused_value_mut(&mut self) -> Option<&mut u8> {
        match self.focused {
            HomeItem::Random => None,
            HomeItem::Dan => Some(&mut self.dan),
            HomeItem::Multiplier => Some(&mut self.multiplier),
        }
    }

    pub fn selected_config(&self) -> QuizConfig {
        match self.focused {
            HomeItem::Random => QuizConfig::random(),
            HomeItem::Dan => QuizConfig::dan(self.dan),
            HomeItem::Multiplier => QuizConfig::multiplier(self.multiplier),
        }
    }
}

#[derive(Debug)]
pub struct App {
    pub session: QuizSession,
    pub home: HomeMenu,
    pub input_buffer: String,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_session(QuizSession::new(
            config.total_questions,
            notifier_for(config.sound),
        ))
    }

    pub fn with_session(session: QuizSession) -> Self {
        Self {
            session,
            home: HomeMenu::default(),
            input_buffer: String::new(),
            should_quit: false,
        }
    }

    pub fn seeded(total_questions: usize, notifier: Box<dyn Notifier>, seed: u64) -> Self {
        Self::with_session(QuizSession::with_seed(total_questions, notifier, seed))
    }
}
