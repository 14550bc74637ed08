//! "Which number makes ten?" discovery game.
//!
//! Each round shows `first` and asks for its partner `10 - first`. Correct
//! answers add the pair to the discovery board; the game is complete once the
//! board holds every pair the active [`DiscoveryRule`] can produce.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::practice_engine::{
    models::DiscoveredPair,
    sampling::{shuffle, uniform},
};

pub const TARGET_SUM: u32 = 10;

/// How answered rounds map to discovered pairs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscoveryRule {
    /// One entry per prompted number: 4+6 and 6+4 are both discoveries.
    /// Complete after all nine prompts 1..=9.
    #[default]
    ByPrompt,
    /// 4+6 and 6+4 are the same pair. Complete after the five distinct pairs.
    Unordered,
}

impl DiscoveryRule {
    /// Number of discoveries that completes the game.
    pub fn completion_target(self) -> usize {
        match self {
            DiscoveryRule::ByPrompt  => 9,
            DiscoveryRule::Unordered => 5,
        }
    }
}

/// One displayed number-pairs question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairRound {
    pub first: u32,
    pub second: u32,
    pub options: [u32; 4],
}

impl PairRound {
    /// Random round with `first` in 1..=9 (10 + 0 is too easy).
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let first = uniform(rng, 1, TARGET_SUM - 1);
        Self::build(rng, first)
    }

    /// Round for a given prompt, or `None` unless `first` is in 1..=9.
    pub fn for_first<R: Rng>(rng: &mut R, first: u32) -> Option<Self> {
        (1..TARGET_SUM).contains(&first).then(|| Self::build(rng, first))
    }

    fn build<R: Rng>(rng: &mut R, first: u32) -> Self {
        let second = TARGET_SUM - first;
        let mut options = [second; 4];
        let mut filled = 1;
        while filled < options.len() {
            let wrong = uniform(rng, 1, TARGET_SUM - 1);
            if !options[..filled].contains(&wrong) {
                options[filled] = wrong;
                filled += 1;
            }
        }
        shuffle(rng, &mut options);
        Self { first, second, options }
    }

    pub fn is_correct(&self, choice: u32) -> bool {
        choice == self.second
    }
}

/// Result of answering a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairAnswer {
    pub correct: bool,
    /// True only when a correct answer added a new entry to the board.
    pub newly_discovered: bool,
}

/// Discovery board for one session.
#[derive(Debug, Clone, Default)]
pub struct NumberPairsGame {
    rule: DiscoveryRule,
    discovered: Vec<DiscoveredPair>,
}

impl NumberPairsGame {
    pub fn new(rule: DiscoveryRule) -> Self {
        Self { rule, discovered: Vec::new() }
    }

    pub fn rule(&self) -> DiscoveryRule {
        self.rule
    }

    pub fn next_round<R: Rng>(&self, rng: &mut R) -> PairRound {
        PairRound::random(rng)
    }

    /// Score `choice` for `round`. Wrong answers neither count nor discover.
    pub fn answer(&mut self, round: &PairRound, choice: u32) -> PairAnswer {
        if !round.is_correct(choice) {
            debug!(first = round.first, choice, "number pair missed");
            return PairAnswer { correct: false, newly_discovered: false };
        }

        let already = match self.rule {
            DiscoveryRule::ByPrompt => self
                .discovered
                .iter()
                .any(|p| p.first == round.first && p.second == round.second),
            DiscoveryRule::Unordered => self.is_pair_discovered(round.first, round.second),
        };
        if !already {
            self.discovered.push(DiscoveredPair { first: round.first, second: round.second });
            info!(
                first = round.first,
                second = round.second,
                found = self.discovered.len(),
                target = self.rule.completion_target(),
                "number pair discovered"
            );
        }
        PairAnswer { correct: true, newly_discovered: !already }
    }

    /// True if `(a, b)` has been found in either order.
    pub fn is_pair_discovered(&self, a: u32, b: u32) -> bool {
        self.discovered.iter().any(|p| p.matches_unordered(a, b))
    }

    pub fn discovered(&self) -> &[DiscoveredPair] {
        &self.discovered
    }

    pub fn is_complete(&self) -> bool {
        self.discovered.len() >= self.rule.completion_target()
    }

    /// Rounded share of the completion target already discovered.
    pub fn completion_percentage(&self) -> u32 {
        let target = self.rule.completion_target() as f64;
        ((self.discovered.len() as f64 / target) * 100.0).round() as u32
    }

    pub fn reset(&mut self) {
        self.discovered.clear();
    }
}
