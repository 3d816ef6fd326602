use crate::error::QuizError;
use std::fmt;

/// Operands drilled by the quiz. One times table per entry.
pub const OPERANDS: [u8; 8] = [2, 3, 4, 5, 6, 7, 8, 9];
pub const MIN_OPERAND: u8 = 2;
pub const MAX_OPERAND: u8 = 9;
pub const DEFAULT_TOTAL_QUESTIONS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub num1: u8,
    pub num2: u8,
    pub answer: u32,
}

impl Question {
    pub fn new(num1: u8, num2: u8) -> Self {
        Self {
            num1,
            num2,
            answer: u32::from(num1) * u32::from(num2),
        }
    }

    pub fn is_correct(&self, value: i64) -> bool {
        value == i64::from(self.answer)
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.num1, self.num2)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizMode {
    Random,
    /// Fixed first operand.
    Dan,
    /// Fixed second operand.
    Multiplier,
}

impl fmt::Display for QuizMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QuizMode::Random => "random",
            QuizMode::Dan => "dan",
            QuizMode::Multiplier => "multiplier",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizConfig {
    pub mode: QuizMode,
    pub key: Option<u8>,
}

impl QuizConfig {
    pub fn random() -> Self {
        Self {
            mode: QuizMode::Random,
            key: None,
        }
    }

    pub fn dan(key: u8) -> Self {
        Self {
            mode: QuizMode::Dan,
            key: Some(key),
        }
    }

    pub fn multiplier(key: u8) -> Self {
        Self {
            mode: QuizMode::Multiplier,
            key: Some(key),
        }
    }

    /// Checks that fixed-operand modes carry a key in range.
    /// A key on a random config is ignored.
    pub fn validate(&self) -> Result<(), QuizError> {
        if self.mode == QuizMode::Random {
            return Ok(());
        }
        match self.key {
            None => Err(QuizError::MissingConfigKey(self.mode)),
            Some(k) if !(MIN_OPERAND..=MAX_OPERAND).contains(&k) => {
                Err(QuizError::OperandOutOfRange(k))
            }
            Some(_) => Ok(()),
        }
    }

    pub fn label(&self) -> String {
        match (self.mode, self.key) {
            (QuizMode::Dan, Some(k)) => format!("{}-times table", k),
            (QuizMode::Multiplier, Some(k)) => format!("times {}", k),
            _ => "Random".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Home,
    Quiz,
    Results,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Feedback {
    #[default]
    None,
    Correct,
    Incorrect,
}

/// Read-only view of the question being asked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizView {
    pub question: Question,
    pub question_number: usize,
    pub total_questions: usize,
    pub answered: bool,
    pub feedback: Feedback,
    pub mode_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsView {
    pub score: usize,
    pub total_questions: usize,
    pub message: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_computes_answer() {
        let q = Question::new(7, 8);
        assert_eq!(q.answer, 56);
        assert!(q.is_correct(56));
        assert!(!q.is_correct(54));
        assert_eq!(q.to_string(), "7 x 8");
    }

    #[test]
    fn test_validate_random_ignores_key() {
        assert!(QuizConfig::random().validate().is_ok());
        let config = QuizConfig {
            mode: QuizMode::Random,
            key: Some(42),
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_missing_key() {
        let config = QuizConfig {
            mode: QuizMode::Dan,
            key: None,
        };
        assert_eq!(
            config.validate(),
            Err(QuizError::MissingConfigKey(QuizMode::Dan))
        );
    }

    #[test]
    fn test_validate_key_out_of_range() {
        assert_eq!(
            QuizConfig::multiplier(1).validate(),
            Err(QuizError::OperandOutOfRange(1))
        );
        assert_eq!(
            QuizConfig::dan(10).validate(),
            Err(QuizError::OperandOutOfRange(10))
        );
        assert!(QuizConfig::dan(9).validate().is_ok());
    }

    #[test]
    fn test_config_labels() {
        assert_eq!(QuizConfig::random().label(), "Random");
        assert_eq!(QuizConfig::dan(3).label(), "3-times table");
        assert_eq!(QuizConfig::multiplier(4).label(), "times 4");
    }
}
