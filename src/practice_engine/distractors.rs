//! Wrong-answer options modelled on the mistakes young children actually make.
//!
//! | Kind             | Example for 1 + 5 |
//! |------------------|-------------------|
//! | `Concatenation`  | 15                |
//! | `OffBySmall`     | 4, 5, 7, 8, 9     |
//! | `SingleOperand`  | 1 or 5            |
//! | `RandomPlausible`| anything in 1..=10|

use rand::Rng;
use crate::practice_engine::sampling::{coin, shuffle, uniform};

/// Lowest option value a distractor may take.
pub const MIN_OPTION: u32 = 1;
/// Highest option value a distractor may take.
pub const MAX_OPTION: u32 = 99;
/// Concatenations above this are abandoned.
const CONCAT_LIMIT: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MistakeKind {
    Concatenation,
    OffBySmall,
    SingleOperand,
    RandomPlausible,
}

impl MistakeKind {
    const ALL: [MistakeKind; 4] = [
        MistakeKind::Concatenation,
        MistakeKind::OffBySmall,
        MistakeKind::SingleOperand,
        MistakeKind::RandomPlausible,
    ];

    fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

/// Write `b`'s digits after `a`'s: `concat(1, 5) == 15`.
pub fn concat(a: u32, b: u32) -> u32 {
    let mut shift = 10u32;
    while shift <= b {
        shift = shift.saturating_mul(10);
    }
    a.saturating_mul(shift).saturating_add(b)
}

/// One candidate of the given kind, or `None` if that kind has nothing to offer.
pub fn candidate<R: Rng>(rng: &mut R, kind: MistakeKind, first: u32, second: u32, correct: u32) -> Option<u32> {
    match kind {
        MistakeKind::Concatenation => {
            [concat(first, second), concat(second, first)]
                .into_iter()
                .find(|&v| v <= CONCAT_LIMIT)
        }
        MistakeKind::OffBySmall => {
            let offset = uniform(rng, 1, 3);
            if coin(rng) {
                Some(correct.saturating_add(offset))
            } else {
                correct.checked_sub(offset)
            }
        }
        MistakeKind::SingleOperand => Some(if coin(rng) { first } else { second }),
        MistakeKind::RandomPlausible => {
            let range = correct.saturating_add(5).max(10);
            Some(uniform(rng, 1, range))
        }
    }
}

/// Build the four shuffled options for a question: `correct` plus three
/// distinct distractors in `MIN_OPTION..=MAX_OPTION`.
///
/// A category that yields nothing usable is simply re-rolled. The random
/// category always covers at least ten valid values, so the loop terminates.
pub fn build_options<R: Rng>(rng: &mut R, first: u32, second: u32, correct: u32) -> [u32; 4] {
    let mut options = [correct; 4];
    let mut filled = 1;

    while filled < options.len() {
        let kind = MistakeKind::random(rng);
        let Some(wrong) = candidate(rng, kind, first, second, correct) else {
            continue;
        };
        if (MIN_OPTION..=MAX_OPTION).contains(&wrong) && !options[..filled].contains(&wrong) {
            options[filled] = wrong;
            filled += 1;
        }
    }

    shuffle(rng, &mut options);
    options
}
