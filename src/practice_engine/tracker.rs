//! Rolling performance record and the difficulty tier it implies.
//!
//! Promotion needs a fresh streak *and* a high overall success rate; demotion
//! needs a longer history *and* a low success rate. The gap between the two
//! rates keeps the tier from bouncing back and forth on every answer.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::practice_engine::models::{DifficultyTier, PerformanceState};

/// Hysteresis thresholds for tier changes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TierThresholds {
    /// No tier change before this many answers.
    pub min_attempts: u32,
    /// Streak needed for easy → medium.
    pub medium_streak: u32,
    /// Streak needed for medium → hard.
    pub hard_streak: u32,
    pub promotion_rate: f64,
    /// No demotion before this many answers.
    pub demotion_min_attempts: u32,
    pub demotion_rate: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            min_attempts: 5,
            medium_streak: 5,
            hard_streak: 7,
            promotion_rate: 0.8,
            demotion_min_attempts: 8,
            demotion_rate: 0.5,
        }
    }
}

/// Per-session performance tracker. Owned by exactly one session.
#[derive(Debug, Clone, Default)]
pub struct PerformanceTracker {
    state: PerformanceState,
    thresholds: TierThresholds,
}

impl PerformanceTracker {
    pub fn new(thresholds: TierThresholds) -> Self {
        Self { state: PerformanceState::default(), thresholds }
    }

    /// Fresh counters at an arbitrary tier, e.g. to resume at a level picked by a grown-up.
    pub fn starting_at(tier: DifficultyTier, thresholds: TierThresholds) -> Self {
        let mut tracker = Self::new(thresholds);
        tracker.state.current_tier = tier;
        tracker
    }

    pub fn current_tier(&self) -> DifficultyTier {
        self.state.current_tier
    }

    /// Copy of the current counters; later updates never touch it.
    pub fn snapshot(&self) -> PerformanceState {
        self.state
    }

    /// Record one answer and re-evaluate the tier.
    pub fn update(&mut self, is_correct: bool) {
        self.state.total_answered += 1;
        if is_correct {
            self.state.correct_answers += 1;
            self.state.consecutive_correct += 1;
        } else {
            self.state.consecutive_correct = 0;
        }
        debug!(
            is_correct,
            total = self.state.total_answered,
            correct = self.state.correct_answers,
            streak = self.state.consecutive_correct,
            "performance updated"
        );
        self.adjust_tier();
    }

    /// Back to zero counters at `Easy`. Called when a session (re)starts.
    pub fn reset(&mut self) {
        self.state = PerformanceState::default();
    }

    fn adjust_tier(&mut self) {
        let t = self.thresholds;
        if self.state.total_answered < t.min_attempts {
            return;
        }
        let rate = self.state.success_rate();
        let streak = self.state.consecutive_correct;
        let before = self.state.current_tier;

        // Promotion first; demotion only runs when the tier did not just move.
        if rate >= t.promotion_rate {
            let needed = match before {
                DifficultyTier::Easy   => Some(t.medium_streak),
                DifficultyTier::Medium => Some(t.hard_streak),
                DifficultyTier::Hard   => None,
            };
            if needed.is_some_and(|n| streak >= n) {
                self.state.current_tier = before.harder();
                self.state.consecutive_correct = 0;
            }
        }

        if self.state.current_tier == before
            && rate < t.demotion_rate
            && self.state.total_answered >= t.demotion_min_attempts
        {
            self.state.current_tier = self.state.current_tier.easier();
        }

        if self.state.current_tier != before {
            info!(
                from = %before,
                to = %self.state.current_tier,
                success_rate = rate,
                "difficulty tier changed"
            );
        }
    }
}
