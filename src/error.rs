use thiserror::Error;

use crate::models::QuizMode;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    #[error("invalid answer input: {0:?}")]
    InvalidInput(String),
    #[error("{0} mode requires a key operand")]
    MissingConfigKey(QuizMode),
    #[error("operand {0} is outside 2..=9")]
    OperandOutOfRange(u8),
    #[error("question count {0} must be between 1 and 8")]
    InvalidQuestionCount(usize),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}
