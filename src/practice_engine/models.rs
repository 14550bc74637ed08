use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Operations and difficulty
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Addition,
    Subtraction,
}

impl Operation {
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Addition    => "+",
            Operation::Subtraction => "-",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Addition    => write!(f, "Addition"),
            Operation::Subtraction => write!(f, "Subtraction"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyTier {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl DifficultyTier {
    /// Kid-facing level name shown next to the question.
    pub fn display_name(self) -> &'static str {
        match self {
            DifficultyTier::Easy   => "Beginner",
            DifficultyTier::Medium => "Explorer",
            DifficultyTier::Hard   => "Champion",
        }
    }

    /// One tier up; `Hard` stays `Hard`.
    pub fn harder(self) -> Self {
        match self {
            DifficultyTier::Easy              => DifficultyTier::Medium,
            DifficultyTier::Medium
            | DifficultyTier::Hard            => DifficultyTier::Hard,
        }
    }

    /// One tier down; `Easy` stays `Easy`.
    pub fn easier(self) -> Self {
        match self {
            DifficultyTier::Hard              => DifficultyTier::Medium,
            DifficultyTier::Medium
            | DifficultyTier::Easy            => DifficultyTier::Easy,
        }
    }
}

impl fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DifficultyTier::Easy   => write!(f, "easy"),
            DifficultyTier::Medium => write!(f, "medium"),
            DifficultyTier::Hard   => write!(f, "hard"),
        }
    }
}

/// One screen of the year-one practice book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Chapter {
    Addition,
    Subtraction,
    MakingTen,
    NumberPairs,
    PuzzlePairs,
}

impl Chapter {
    /// Chapters backed by the adaptive arithmetic generator.
    pub fn is_arithmetic(self) -> bool {
        matches!(self, Chapter::Addition | Chapter::Subtraction)
    }
}

impl fmt::Display for Chapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Chapter::Addition    => "Addition",
            Chapter::Subtraction => "Subtraction",
            Chapter::MakingTen   => "Making Ten",
            Chapter::NumberPairs => "Number Pairs",
            Chapter::PuzzlePairs => "Puzzle Pairs",
        };
        write!(f, "{}", s)
    }
}

// ---------------------------------------------------------------------------
// Generation request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub max_digits: u32,
    pub difficulty_tier: DifficultyTier,
    pub operation: Operation,
    pub include_zero: bool,
    /// When set, the tracker's current tier replaces `difficulty_tier`.
    pub adaptive_difficulty: bool,
}

impl GenerationConfig {
    /// Year-one defaults for the given operation: single digits, no zero, adaptive.
    pub fn new(operation: Operation) -> Self {
        Self { operation, ..Self::default() }
    }

    pub fn with_tier(mut self, tier: DifficultyTier) -> Self {
        self.difficulty_tier = tier;
        self
    }

    /// Largest operand the digit budget allows (`10^max_digits - 1`).
    pub fn max_value(&self) -> u32 {
        10u32
            .checked_pow(self.max_digits)
            .map_or(u32::MAX, |v| v - 1)
    }

    pub fn min_value(&self) -> u32 {
        if self.include_zero { 0 } else { 1 }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_digits: 1,
            difficulty_tier: DifficultyTier::Easy,
            operation: Operation::Addition,
            include_zero: false,
            adaptive_difficulty: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub first_operand: u32,
    pub second_operand: u32,
    pub correct_answer: u32,
    /// Shuffled; holds `correct_answer` exactly once.
    pub options: [u32; 4],
    pub operation: Operation,
}

impl Question {
    /// Deduplication key for batches. Operand order matters: 2+3 and 3+2 differ.
    pub fn key(&self) -> (u32, u32, Operation) {
        (self.first_operand, self.second_operand, self.operation)
    }

    pub fn is_correct(&self, choice: u32) -> bool {
        choice == self.correct_answer
    }

    /// Prompt text, e.g. `"3 + 4 = ?"`.
    pub fn prompt(&self) -> String {
        format!("{} {} {} = ?", self.first_operand, self.operation.symbol(), self.second_operand)
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prompt())
    }
}

// ---------------------------------------------------------------------------
// Performance and discovery state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceState {
    pub total_answered: u32,
    pub correct_answers: u32,
    pub consecutive_correct: u32,
    pub current_tier: DifficultyTier,
}

impl PerformanceState {
    /// Fraction of answers that were correct; 0.0 before the first answer.
    pub fn success_rate(&self) -> f64 {
        if self.total_answered == 0 {
            return 0.0;
        }
        f64::from(self.correct_answers) / f64::from(self.total_answered)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiscoveredPair {
    pub first: u32,
    pub second: u32,
}

impl DiscoveredPair {
    /// True if this pair is `(a, b)` in either order.
    pub fn matches_unordered(&self, a: u32, b: u32) -> bool {
        (self.first == a && self.second == b) || (self.first == b && self.second == a)
    }
}

impl fmt::Display for DiscoveredPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + {}", self.first, self.second)
    }
}
