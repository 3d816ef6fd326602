use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::models::{DEFAULT_TOTAL_QUESTIONS, OPERANDS};

pub const CONFIG_FILE: &str = "times_table.json";
pub const ENV_QUESTIONS: &str = "TIMES_TABLE_QUESTIONS";
pub const ENV_SOUND: &str = "TIMES_TABLE_SOUND";
pub const ENV_LOG: &str = "TIMES_TABLE_LOG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub total_questions: usize,
    pub sound: bool,
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            total_questions: DEFAULT_TOTAL_QUESTIONS,
            sound: true,
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Config file in the working directory, then environment overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file(Path::new(CONFIG_FILE))?;
        config.apply_env(std::env::vars())?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults when the file does not exist.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn apply_env<I>(&mut self, vars: I) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in vars {
            match key.as_str() {
                ENV_QUESTIONS => {
                    self.total_questions = value
                        .trim()
                        .parse()
                        .map_err(|_| invalid(&key, &value))?;
                }
                ENV_SOUND => {
                    self.sound = parse_flag(&value).ok_or_else(|| invalid(&key, &value))?;
                }
                ENV_LOG => {
                    let trimmed = value.trim();
                    self.log_file = (!trimmed.is_empty()).then(|| PathBuf::from(trimmed));
                }
                _ => {}
            }
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_questions == 0 || self.total_questions > OPERANDS.len() {
            return Err(invalid(
                "total_questions",
                &self.total_questions.to_string(),
            ));
        }
        Ok(())
    }
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.total_questions, 5);
        assert!(config.sound);
        assert!(config.log_file.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = AppConfig::from_json_str(r#"{"sound": false}"#).unwrap();
        assert_eq!(config.total_questions, 5);
        assert!(!config.sound);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let result = AppConfig::from_json_str(r#"{"volume": 3}"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::from_file(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"total_questions": 8, "log_file": "quiz.log"}}"#
        )
        .unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.total_questions, 8);
        assert_eq!(config.log_file, Some(PathBuf::from("quiz.log")));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = AppConfig::default();
        config
            .apply_env(env(&[
                (ENV_QUESTIONS, " 3 "),
                (ENV_SOUND, "off"),
                (ENV_LOG, "/tmp/quiz.log"),
                ("PATH", "/usr/bin"),
            ]))
            .unwrap();

        assert_eq!(config.total_questions, 3);
        assert!(!config.sound);
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/quiz.log")));
    }

    #[test]
    fn test_env_rejects_garbage() {
        let mut config = AppConfig::default();
        let err = config.apply_env(env(&[(ENV_SOUND, "loud")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == ENV_SOUND));

        let err = config
            .apply_env(env(&[(ENV_QUESTIONS, "five")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_question_count_bounds() {
        let mut config = AppConfig::default();
        config.total_questions = 0;
        assert!(config.validate().is_err());
        config.total_questions = 9;
        assert!(config.validate().is_err());
        config.total_questions = 8;
        assert!(config.validate().is_ok());
    }
}
