//! Operand selection per operation and tier.
//!
//! Addition always keeps one operand in 1..=9 so the child can count it on
//! their fingers. Subtraction uses plain ranges and orders the operands so the
//! result is never negative.

use rand::Rng;
use crate::practice_engine::{
    models::{DifficultyTier, GenerationConfig, Operation},
    sampling::{coin, small_biased, uniform},
};

/// Chance that the medium-tier partner operand stays single-digit.
const MEDIUM_SINGLE_DIGIT_CHANCE: f64 = 0.6;

/// Pick `(first, second)` for `config.operation` at `tier`.
pub fn pick<R: Rng>(rng: &mut R, config: &GenerationConfig, tier: DifficultyTier) -> (u32, u32) {
    match config.operation {
        Operation::Addition    => finger_friendly(rng, tier),
        Operation::Subtraction => {
            let (a, b) = ranged(rng, config, tier);
            if a < b { (b, a) } else { (a, b) }
        }
    }
}

/// Addition operands; one of the pair is always in 1..=9.
pub fn finger_friendly<R: Rng>(rng: &mut R, tier: DifficultyTier) -> (u32, u32) {
    match tier {
        DifficultyTier::Easy => (small_biased(rng, 1, 5), small_biased(rng, 1, 5)),
        DifficultyTier::Medium => {
            let single = uniform(rng, 1, 9);
            let other = if rng.gen_bool(MEDIUM_SINGLE_DIGIT_CHANCE) {
                uniform(rng, 1, 9)
            } else {
                uniform(rng, 10, 19)
            };
            place(rng, single, other)
        }
        DifficultyTier::Hard => {
            let single = uniform(rng, 1, 9);
            let larger = uniform(rng, 10, 50);
            place(rng, single, larger)
        }
    }
}

/// Subtraction operands, unordered. Bounded by the config's digit budget.
pub fn ranged<R: Rng>(rng: &mut R, config: &GenerationConfig, tier: DifficultyTier) -> (u32, u32) {
    let max = config.max_value();
    match tier {
        DifficultyTier::Easy => {
            let hi = max.min(5);
            (small_biased(rng, 1, hi), small_biased(rng, 1, hi))
        }
        DifficultyTier::Medium => {
            let hi = max.min(9);
            (uniform(rng, 1, hi), uniform(rng, 1, hi))
        }
        DifficultyTier::Hard => {
            let lo = config.min_value();
            (uniform(rng, lo, max), uniform(rng, lo, max))
        }
    }
}

/// Coin flip decides which slot holds the finger-countable operand.
fn place<R: Rng>(rng: &mut R, single: u32, other: u32) -> (u32, u32) {
    if coin(rng) { (single, other) } else { (other, single) }
}
