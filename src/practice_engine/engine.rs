use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::practice_engine::{
    generator,
    models::{GenerationConfig, PerformanceState, Question},
    tracker::{PerformanceTracker, TierThresholds},
};

/// Generator + tracker pair owned by one session.
///
/// This is the whole surface the presentation layer needs: generate, record
/// answers, read stats, reset. The random source is injected so tests and
/// replays can seed it.
#[derive(Debug, Clone)]
pub struct PracticeEngine<R: Rng = StdRng> {
    rng: R,
    tracker: PerformanceTracker,
}

impl PracticeEngine<StdRng> {
    /// Seeded when `rng_seed` is `Some`, entropy otherwise.
    pub fn new(rng_seed: Option<u64>, thresholds: TierThresholds) -> Self {
        let rng = match rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        Self::with_rng(rng, thresholds)
    }
}

impl<R: Rng> PracticeEngine<R> {
    pub fn with_rng(rng: R, thresholds: TierThresholds) -> Self {
        Self { rng, tracker: PerformanceTracker::new(thresholds) }
    }

    /// Replace the tracker, e.g. with one resumed at a given tier.
    pub fn with_tracker(mut self, tracker: PerformanceTracker) -> Self {
        self.tracker = tracker;
        self
    }

    /// `config` with the tracker's tier swapped in when adaptive.
    pub fn effective_config(&self, config: &GenerationConfig) -> GenerationConfig {
        let mut actual = config.clone();
        if config.adaptive_difficulty {
            actual.difficulty_tier = self.tracker.current_tier();
        }
        actual
    }

    pub fn generate_question(&mut self, config: &GenerationConfig) -> Question {
        let actual = self.effective_config(config);
        generator::generate_question(&mut self.rng, &actual)
    }

    /// May return fewer than `count` questions; see [`generator::generate_question_batch`].
    pub fn generate_question_batch(&mut self, config: &GenerationConfig, count: usize) -> Vec<Question> {
        let actual = self.effective_config(config);
        generator::generate_question_batch(&mut self.rng, &actual, count)
    }

    pub fn update_performance(&mut self, is_correct: bool) {
        self.tracker.update(is_correct);
    }

    pub fn performance_stats(&self) -> PerformanceState {
        self.tracker.snapshot()
    }

    pub fn reset_performance(&mut self) {
        self.tracker.reset();
    }

    /// The engine's random source, shared with the non-adaptive chapter generators.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}
