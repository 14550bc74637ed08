//! Random draws shared by every generator.
//!
//! All functions take the caller's `Rng` so a seeded `StdRng` reproduces the
//! exact same questions, options and option order.

use rand::Rng;

/// Weights for 1, 2, 3, 4, 5 on easy questions; small numbers come up more often.
pub const EASY_WEIGHTS: [u32; 5] = [3, 3, 2, 1, 1];

/// Uniform integer in `lo..=hi`.
pub fn uniform<R: Rng>(rng: &mut R, lo: u32, hi: u32) -> u32 {
    if hi <= lo {
        return lo;
    }
    rng.gen_range(lo..=hi)
}

/// Fair coin flip.
pub fn coin<R: Rng>(rng: &mut R) -> bool {
    rng.gen_bool(0.5)
}

/// Draw from `min..=max` biased toward small values using [`EASY_WEIGHTS`].
///
/// Rolls uniformly over the weight mass of the values that fit in the range,
/// then walks the cumulative weights until the roll is passed. Values beyond
/// the fifth step from `min` carry no weight; a range that exposes no weight
/// at all falls back to a uniform draw.
pub fn small_biased<R: Rng>(rng: &mut R, min: u32, max: u32) -> u32 {
    let span = max.saturating_sub(min) as usize + 1;
    let weights = &EASY_WEIGHTS[..span.min(EASY_WEIGHTS.len())];
    let total: u32 = weights.iter().sum();
    if max < min || total == 0 {
        return uniform(rng, min, max);
    }

    let roll = rng.gen_range(0..total);
    let mut cumulative = 0;
    for (offset, weight) in weights.iter().enumerate() {
        cumulative += weight;
        if roll < cumulative {
            return min + offset as u32;
        }
    }
    // Unreachable: roll < total == final cumulative.
    min
}

/// In-place Fisher-Yates shuffle.
pub fn shuffle<T, R: Rng>(rng: &mut R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
