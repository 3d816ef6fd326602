use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::QuizError;
use crate::generator::generate_questions;
use crate::logger;
use crate::models::{Feedback, GameState, Question, QuizConfig, QuizView, ResultsView};
use crate::notify::Notifier;
use crate::utils::result_message;

/// Owns the whole quiz lifecycle: home, quiz and results.
///
/// Screens never mutate this directly. They call one of the intent methods
/// (`start_quiz`, `submit_answer`, `advance`, `restart`, `go_home`) and draw
/// from `quiz_view` / `results_view`.
pub struct QuizSession {
    state: GameState,
    config: Option<QuizConfig>,
    questions: Vec<Question>,
    current_index: usize,
    score: usize,
    feedback: Feedback,
    total_questions: usize,
    notifier: Box<dyn Notifier>,
    rng: StdRng,
}

impl std::fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuizSession")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("questions", &self.questions)
            .field("current_index", &self.current_index)
            .field("score", &self.score)
            .field("feedback", &self.feedback)
            .field("total_questions", &self.total_questions)
            .finish_non_exhaustive()
    }
}

impl QuizSession {
    pub fn new(total_questions: usize, notifier: Box<dyn Notifier>) -> Self {
        Self::with_rng(total_questions, notifier, StdRng::from_entropy())
    }

    pub fn with_seed(total_questions: usize, notifier: Box<dyn Notifier>, seed: u64) -> Self {
        Self::with_rng(total_questions, notifier, StdRng::seed_from_u64(seed))
    }

    fn with_rng(total_questions: usize, notifier: Box<dyn Notifier>, rng: StdRng) -> Self {
        Self {
            state: GameState::Home,
            config: None,
            questions: Vec::new(),
            current_index: 0,
            score: 0,
            feedback: Feedback::None,
            total_questions,
            notifier,
            rng,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn config(&self) -> Option<&QuizConfig> {
        self.config.as_ref()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total_questions(&self) -> usize {
        self.total_questions
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            GameState::Quiz => self.questions.get(self.current_index),
            _ => None,
        }
    }

    pub fn is_answered(&self) -> bool {
        self.feedback != Feedback::None
    }

    /// Enter the quiz with a fresh question set. On error nothing changes.
    pub fn start_quiz(&mut self, config: QuizConfig) -> Result<(), QuizError> {
        let questions = generate_questions(&config, self.total_questions, &mut self.rng)?;

        logger::log(&format!(
            "Starting {} quiz with {} questions",
            config.label(),
            questions.len()
        ));
        self.config = Some(config);
        self.questions = questions;
        self.current_index = 0;
        self.score = 0;
        self.feedback = Feedback::None;
        self.state = GameState::Quiz;
        Ok(())
    }

    /// Score `raw` against the current question.
    ///
    /// Returns `None` when the submission is ignored: not in a quiz, the
    /// question already has an answer, or the text isn't an integer.
    pub fn submit_answer(&mut self, raw: &str) -> Option<Feedback> {
        if self.state != GameState::Quiz || self.is_answered() {
            return None;
        }
        let question = *self.questions.get(self.current_index)?;

        let value = match parse_answer(raw) {
            Ok(value) => value,
            Err(e) => {
                logger::log(&format!("Ignoring submission: {}", e));
                return None;
            }
        };

        if question.is_correct(value) {
            self.score += 1;
            self.feedback = Feedback::Correct;
            self.notifier.on_correct();
        } else {
            self.feedback = Feedback::Incorrect;
            self.notifier.on_incorrect();
        }
        logger::log(&format!(
            "Question {} ({}): answered {}, {:?}",
            self.current_index + 1,
            question,
            value,
            self.feedback
        ));

        Some(self.feedback)
    }

    /// Move past an answered question, or to results after the last one.
    pub fn advance(&mut self) {
        if self.state != GameState::Quiz || !self.is_answered() {
            return;
        }

        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            self.feedback = Feedback::None;
        } else {
            logger::log(&format!(
                "Quiz finished: {} / {}",
                self.score,
                self.questions.len()
            ));
            self.state = GameState::Results;
        }
    }

    /// Replay the stored config with a new question order.
    pub fn restart(&mut self) -> Result<(), QuizError> {
        match self.config {
            Some(config) => self.start_quiz(config),
            None => Ok(()),
        }
    }

    pub fn go_home(&mut self) {
        self.state = GameState::Home;
        self.config = None;
        self.questions.clear();
        self.current_index = 0;
        self.score = 0;
        self.feedback = Feedback::None;
    }

    pub fn quiz_view(&self) -> Option<QuizView> {
        let question = *self.current_question()?;
        Some(QuizView {
            question,
            question_number: self.current_index + 1,
            total_questions: self.questions.len(),
            answered: self.is_answered(),
            feedback: self.feedback,
            mode_label: self.config.map(|c| c.label()).unwrap_or_default(),
        })
    }

    pub fn results_view(&self) -> Option<ResultsView> {
        if self.state != GameState::Results {
            return None;
        }
        Some(ResultsView {
            score: self.score,
            total_questions: self.questions.len(),
            message: result_message(self.score, self.questions.len()),
        })
    }
}

pub fn parse_answer(raw: &str) -> Result<i64, QuizError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| QuizError::InvalidInput(trimmed.to_string()))
}
