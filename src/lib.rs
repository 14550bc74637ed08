//! # number_drill_gen
//!
//! An offline, deterministic arithmetic practice engine for young learners.
//!
//! The engine picks the next question, builds three believable wrong answers
//! next to the right one, and nudges difficulty up or down from the child's
//! recent results. Rendering, animation and sound belong to the caller.
//!
//! ## How it works
//!
//! 1. Build a [`GenerationConfig`] (operation, digit budget, tier, adaptive flag).
//! 2. Call [`PracticeEngine::generate_question`]. With `adaptive_difficulty`
//!    on, the tracker's current tier replaces the configured one.
//! 3. Show the question's four `options`; feed the result back with
//!    [`PracticeEngine::update_performance`].
//! 4. Five straight correct answers at ≥ 80 % move easy → medium, seven more
//!    move medium → hard; dropping below 50 % after eight answers steps back down.
//!
//! ## Key features
//!
//! - **Deterministic**: pass `Some(seed)` to reproduce the exact same
//!   questions, options and option order, which keeps tests and replays stable.
//! - **Child-shaped distractors**: concatenated digits (1 + 5 → 15), off by
//!   one to three, one operand on its own, or a random nearby number.
//! - **Chapters**: addition, subtraction, making ten, number-pair discovery
//!   and puzzle pairs share one [`PracticeSession`] driver.
//!
//! ## Quick start
//!
//! ```rust
//! use number_drill_gen::{GenerationConfig, Operation, PracticeEngine, TierThresholds};
//!
//! let mut engine = PracticeEngine::new(Some(42), TierThresholds::default());
//! let config = GenerationConfig::new(Operation::Addition);
//!
//! let question = engine.generate_question(&config);
//! println!("{}  options: {:?}", question, question.options);
//! assert_eq!(question.first_operand + question.second_operand, question.correct_answer);
//!
//! engine.update_performance(true);
//! assert_eq!(engine.performance_stats().total_answered, 1);
//! ```

pub mod practice_engine;

// Convenience re-exports so callers can use `number_drill_gen::PracticeEngine`
// directly without reaching into `practice_engine::`.
pub use practice_engine::{
    AnswerOutcome, Celebration, Chapter, ConfigError, DifficultyTier, DiscoveredPair,
    DiscoveryRule, EngineConfig, GenerationConfig, NumberPairsGame, Operation, PairRound,
    PerformanceState, PerformanceTracker, PracticeEngine, PracticeSession, Prompt, Question,
    SessionError, SessionSummary, TierThresholds,
};

#[cfg(test)]
mod tests;
