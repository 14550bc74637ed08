//! Missing-addend drills: `3 + _ = 10` and `_ + 3 = 10`.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::practice_engine::{number_pairs::TARGET_SUM, sampling::shuffle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MakingTenProblem {
    /// The number printed on the card.
    pub shown: u32,
    /// The blank the child fills in.
    pub missing: u32,
    /// `true` for `shown + _`, `false` for `_ + shown`.
    pub shown_first: bool,
}

impl MakingTenProblem {
    pub fn prompt(&self) -> String {
        if self.shown_first {
            format!("{} + _ = {}", self.shown, TARGET_SUM)
        } else {
            format!("_ + {} = {}", self.shown, TARGET_SUM)
        }
    }

    pub fn is_correct(&self, choice: u32) -> bool {
        choice == self.missing
    }
}

/// Every distinct problem: 9 with the blank second, 8 with the blank first
/// (5 + _ and _ + 5 read the same, so only one is kept).
pub fn all_problems() -> Vec<MakingTenProblem> {
    let mut problems = Vec::with_capacity(17);
    for shown in 1..TARGET_SUM {
        let missing = TARGET_SUM - shown;
        problems.push(MakingTenProblem { shown, missing, shown_first: true });
        if shown != missing {
            problems.push(MakingTenProblem { shown, missing, shown_first: false });
        }
    }
    problems
}

/// A shuffled chapter of `len` problems, cycling through [`all_problems`].
pub fn build_deck<R: Rng>(rng: &mut R, len: usize) -> Vec<MakingTenProblem> {
    let mut deck: Vec<MakingTenProblem> = all_problems().into_iter().cycle().take(len).collect();
    shuffle(rng, &mut deck);
    deck
}

/// Correct blank plus three other single digits, shuffled.
pub fn options_for<R: Rng>(rng: &mut R, problem: &MakingTenProblem) -> [u32; 4] {
    let mut wrong: Vec<u32> = (1..TARGET_SUM).filter(|&n| n != problem.missing).collect();
    shuffle(rng, &mut wrong);

    let mut options = [problem.missing, wrong[0], wrong[1], wrong[2]];
    shuffle(rng, &mut options);
    options
}
