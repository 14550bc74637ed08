use std::collections::HashSet;

use rand::Rng;
use tracing::{debug, warn};

use crate::practice_engine::{
    distractors::build_options,
    models::{GenerationConfig, Operation, Question},
    operands,
};

/// Batches give up after this many draws per requested question.
pub const BATCH_ATTEMPTS_PER_QUESTION: usize = 10;

/// Build one question at `config.difficulty_tier`.
///
/// Pure in `config` and `rng`; adaptive tier overrides are applied by the
/// caller before this point (see `PracticeEngine::generate_question`).
pub fn generate_question<R: Rng>(rng: &mut R, config: &GenerationConfig) -> Question {
    let tier = config.difficulty_tier;
    let (first_operand, second_operand) = operands::pick(rng, config, tier);

    let correct_answer = match config.operation {
        Operation::Addition    => first_operand + second_operand,
        Operation::Subtraction => first_operand - second_operand,
    };

    let options = build_options(rng, first_operand, second_operand, correct_answer);

    let question = Question {
        first_operand,
        second_operand,
        correct_answer,
        options,
        operation: config.operation,
    };
    debug!(%question, %tier, ?options, "generated question");
    question
}

/// Up to `count` questions with distinct `(first, second, operation)` keys.
///
/// Draws at most `count * BATCH_ATTEMPTS_PER_QUESTION` times, so a narrow
/// configuration (easy addition has only 25 operand pairs) returns a shorter
/// batch instead of looping forever. The returned length is authoritative.
pub fn generate_question_batch<R: Rng>(
    rng: &mut R,
    config: &GenerationConfig,
    count: usize,
) -> Vec<Question> {
    let mut questions = Vec::with_capacity(count);
    let mut used = HashSet::with_capacity(count);
    let max_attempts = count.saturating_mul(BATCH_ATTEMPTS_PER_QUESTION);

    let mut attempts = 0;
    while questions.len() < count && attempts < max_attempts {
        let question = generate_question(rng, config);
        if used.insert(question.key()) {
            questions.push(question);
        }
        attempts += 1;
    }

    if questions.len() < count {
        warn!(
            requested = count,
            produced = questions.len(),
            attempts,
            "question batch ran out of unique combinations"
        );
    }
    questions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::practice_engine::models::DifficultyTier;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn generation_is_deterministic_with_seed() {
        let config = GenerationConfig::new(Operation::Addition).with_tier(DifficultyTier::Hard);
        let make = |seed: u64| {
            let mut rng = StdRng::seed_from_u64(seed);
            generate_question(&mut rng, &config)
        };
        assert_eq!(make(99), make(99));
    }

    #[test]
    fn easy_batch_is_capped_by_the_combination_space() {
        // Easy addition has 5 x 5 = 25 distinct keys.
        let config = GenerationConfig::new(Operation::Addition);
        let mut rng = StdRng::seed_from_u64(5);
        let batch = generate_question_batch(&mut rng, &config, 40);
        assert!(batch.len() <= 25, "got {} questions from a 25-key space", batch.len());
        assert!(!batch.is_empty());
    }

    #[test]
    fn zero_count_batch_is_empty() {
        let config = GenerationConfig::default();
        let mut rng = StdRng::seed_from_u64(6);
        assert!(generate_question_batch(&mut rng, &config, 0).is_empty());
    }
}
