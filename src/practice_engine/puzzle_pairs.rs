//! Colour-coded puzzle tiles: a tile fits its partner when both carry the
//! same colour and the numbers make ten.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::practice_engine::{
    number_pairs::TARGET_SUM,
    sampling::{shuffle, uniform},
};

/// The nine ordered pairs that make ten.
pub const NUMBER_PAIRS: [(u32, u32); 9] = [
    (1, 9), (2, 8), (3, 7), (4, 6), (5, 5),
    (9, 1), (8, 2), (7, 3), (6, 4),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileColor {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Gray,
}

impl TileColor {
    /// Partners share a colour; anything outside 1..=9 is gray.
    pub fn of(number: u32) -> Self {
        match number {
            1 | 9 => TileColor::Red,
            2 | 8 => TileColor::Orange,
            3 | 7 => TileColor::Yellow,
            4 | 6 => TileColor::Green,
            5     => TileColor::Blue,
            _     => TileColor::Gray,
        }
    }
}

impl fmt::Display for TileColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TileColor::Red    => "red",
            TileColor::Orange => "orange",
            TileColor::Yellow => "yellow",
            TileColor::Green  => "green",
            TileColor::Blue   => "blue",
            TileColor::Gray   => "gray",
        };
        write!(f, "{}", s)
    }
}

/// True when the two tiles snap together.
pub fn can_pair(a: u32, b: u32) -> bool {
    TileColor::of(a) == TileColor::of(b) && a + b == TARGET_SUM
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleTile {
    pub number: u32,
    pub color: TileColor,
    pub will_fit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleRound {
    pub shown: u32,
    pub partner: u32,
    pub candidates: [PuzzleTile; 4],
}

impl PuzzleRound {
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let (shown, partner) = NUMBER_PAIRS[rng.gen_range(0..NUMBER_PAIRS.len())];
        Self::for_pair(rng, shown, partner)
    }

    /// Round for a given pair; the three decoys differ from both numbers.
    pub fn for_pair<R: Rng>(rng: &mut R, shown: u32, partner: u32) -> Self {
        let tile = |number: u32| PuzzleTile {
            number,
            color: TileColor::of(number),
            will_fit: can_pair(shown, number),
        };

        let mut used = vec![shown, partner];
        let mut candidates = [tile(partner); 4];
        let mut filled = 1;
        while filled < candidates.len() {
            let n = uniform(rng, 1, TARGET_SUM - 1);
            if !used.contains(&n) {
                used.push(n);
                candidates[filled] = tile(n);
                filled += 1;
            }
        }
        shuffle(rng, &mut candidates);
        Self { shown, partner, candidates }
    }

    pub fn shown_color(&self) -> TileColor {
        TileColor::of(self.shown)
    }

    /// Numbers on the candidate tiles, in display order.
    pub fn options(&self) -> [u32; 4] {
        self.candidates.map(|t| t.number)
    }

    pub fn fits(&self, choice: u32) -> bool {
        self.candidates.iter().any(|t| t.number == choice && t.will_fit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn partners_share_colours() {
        for (a, b) in NUMBER_PAIRS {
            assert_eq!(TileColor::of(a), TileColor::of(b), "{a}+{b}");
            assert!(can_pair(a, b));
        }
        assert!(!can_pair(4, 4));
        assert_eq!(TileColor::of(0), TileColor::Gray);
    }

    #[test]
    fn exactly_the_partner_fits() {
        for seed in 0..100u64 {
            let mut rng = StdRng::seed_from_u64(seed);
            let round = PuzzleRound::random(&mut rng);
            let fitting: Vec<_> = round.candidates.iter().filter(|t| t.will_fit).collect();
            assert_eq!(fitting.len(), 1, "{round:?}");
            assert_eq!(fitting[0].number, round.partner);
            assert!(round.fits(round.partner));

            let numbers = round.options();
            let mut sorted = numbers.to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), 4);
            assert!(!numbers.contains(&round.shown) || round.shown == round.partner);
        }
    }

    #[test]
    fn five_and_five_round_has_three_decoys() {
        let mut rng = StdRng::seed_from_u64(41);
        let round = PuzzleRound::for_pair(&mut rng, 5, 5);
        assert_eq!(round.options().iter().filter(|&&n| n == 5).count(), 1);
        assert_eq!(round.shown_color(), TileColor::Blue);
    }
}
