//! Core practice engine: question generation, distractors and adaptive difficulty.
//!
//! ## Module overview
//!
//! | Module         | Purpose |
//! |----------------|---------|
//! | `models`       | Shared types: operations, tiers, chapters, questions, performance |
//! | `sampling`     | Uniform / weighted draws and the Fisher-Yates shuffle |
//! | `operands`     | Operand ranges per operation and tier |
//! | `distractors`  | Wrong-answer options modelled on common mistakes |
//! | `generator`    | `generate_question()` and de-duplicated batches |
//! | `tracker`      | Rolling performance record and tier hysteresis |
//! | `engine`       | Generator + tracker pair owned by one session |
//! | `number_pairs` | "Which number makes ten?" discovery game |
//! | `making_ten`   | Missing-addend deck (`3 + _ = 10`) |
//! | `puzzle_pairs` | Colour-coded puzzle tiles that make ten |
//! | `session`      | Thin driver that walks one chapter end to end |
//! | `config`       | TOML-loadable engine configuration |
//! | `error`        | Config and session error types |

pub mod config;
pub mod distractors;
pub mod engine;
pub mod error;
pub mod generator;
pub mod making_ten;
pub mod models;
pub mod number_pairs;
pub mod operands;
pub mod puzzle_pairs;
pub mod sampling;
pub mod session;
pub mod tracker;

// Re-export the public API surface so callers can use
// `practice_engine::PracticeEngine` without reaching into sub-modules.
pub use config::{EngineConfig, NumberPairsConfig, SessionConfig};
pub use engine::PracticeEngine;
pub use error::{ConfigError, SessionError};
pub use generator::{generate_question, generate_question_batch};
pub use models::{
    Chapter, DifficultyTier, DiscoveredPair, GenerationConfig, Operation, PerformanceState,
    Question,
};
pub use number_pairs::{DiscoveryRule, NumberPairsGame, PairRound};
pub use session::{AnswerOutcome, Celebration, PracticeSession, Prompt, SessionSummary};
pub use tracker::{PerformanceTracker, TierThresholds};
