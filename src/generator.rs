use rand::Rng;
use std::collections::HashSet;

use crate::error::QuizError;
use crate::models::{OPERANDS, Question, QuizConfig, QuizMode};

/// Build `n` questions for `config`.
///
/// Random mode rejection-samples ordered pairs until `n` distinct ones are
/// collected; `(3, 4)` and `(4, 3)` count as different questions. The fixed
/// modes pair the key with a shuffled prefix of the operand pool, so they
/// never repeat.
pub fn generate_questions<R: Rng>(
    config: &QuizConfig,
    n: usize,
    rng: &mut R,
) -> Result<Vec<Question>, QuizError> {
    config.validate()?;
    if n == 0 || n > OPERANDS.len() {
        return Err(QuizError::InvalidQuestionCount(n));
    }

    let questions = match (config.mode, config.key) {
        (QuizMode::Random, _) => random_pairs(n, rng),
        (QuizMode::Dan, Some(dan)) => shuffled_operands(rng)
            .into_iter()
            .take(n)
            .map(|multiplier| Question::new(dan, multiplier))
            .collect(),
        (QuizMode::Multiplier, Some(multiplier)) => shuffled_operands(rng)
            .into_iter()
            .take(n)
            .map(|dan| Question::new(dan, multiplier))
            .collect(),
        (mode, None) => return Err(QuizError::MissingConfigKey(mode)),
    };

    Ok(questions)
}

fn random_pairs<R: Rng>(n: usize, rng: &mut R) -> Vec<Question> {
    let mut seen = HashSet::with_capacity(n);
    let mut questions = Vec::with_capacity(n);

    while questions.len() < n {
        let num1 = OPERANDS[rng.gen_range(0..OPERANDS.len())];
        let num2 = OPERANDS[rng.gen_range(0..OPERANDS.len())];
        if seen.insert((num1, num2)) {
            questions.push(Question::new(num1, num2));
        }
    }

    questions
}

fn shuffled_operands<R: Rng>(rng: &mut R) -> Vec<u8> {
    let mut pool = OPERANDS.to_vec();

    // Fisher-Yates shuffle
    for i in (1..pool.len()).rev() {
        let j = rng.gen_range(0..=i);
        pool.swap(i, j);
    }

    pool
}
