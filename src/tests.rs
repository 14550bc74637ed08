//! Unit tests for the `number_drill_gen` crate.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! # Coverage
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Determinism | Same seed → identical questions; different seeds → varied questions |
//! | Structural | Operand/answer arithmetic, four distinct options, one correct, distractor range |
//! | Batches | No duplicate keys; mirrored operands allowed; short batches on tiny spaces |
//! | Adaptive | Tracker tier drives generated operand ranges |
//! | Sessions | Every chapter runs to completion; summaries; restart |
//! | Serialization | Wire shape of questions and config enums |

use std::collections::HashSet;

use rand::{rngs::StdRng, SeedableRng};

use crate::practice_engine::{
    generate_question, generate_question_batch, Celebration, Chapter, DifficultyTier,
    EngineConfig, GenerationConfig, Operation, PerformanceState, PerformanceTracker,
    PracticeEngine, PracticeSession, Question, TierThresholds,
};

// ── helpers ──────────────────────────────────────────────────────────────────

/// Fixed-tier (non-adaptive) config.
fn fixed(operation: Operation, tier: DifficultyTier) -> GenerationConfig {
    GenerationConfig {
        adaptive_difficulty: false,
        ..GenerationConfig::new(operation).with_tier(tier)
    }
}

fn all_tiers() -> [DifficultyTier; 3] {
    [DifficultyTier::Easy, DifficultyTier::Medium, DifficultyTier::Hard]
}

/// Five seeds that span different RNG states.
const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

fn session(chapter: Chapter, seed: u64) -> PracticeSession {
    let mut config = EngineConfig::default();
    config.session.rng_seed = Some(seed);
    PracticeSession::new(chapter, config)
}

fn assert_options_well_formed(q: &Question) {
    assert_eq!(
        q.options.iter().filter(|&&o| o == q.correct_answer).count(), 1,
        "correct answer must appear exactly once in {q:?}"
    );
    let distinct: HashSet<u32> = q.options.iter().copied().collect();
    assert_eq!(distinct.len(), 4, "options must be distinct in {q:?}");
    for &o in q.options.iter().filter(|&&o| o != q.correct_answer) {
        assert!((1..=99).contains(&o), "distractor {o} out of 1..=99 in {q:?}");
    }
}

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_produces_identical_questions() {
    for tier in all_tiers() {
        for op in [Operation::Addition, Operation::Subtraction] {
            let config = fixed(op, tier);
            let mut a = StdRng::seed_from_u64(12345);
            let mut b = StdRng::seed_from_u64(12345);
            for _ in 0..20 {
                assert_eq!(
                    generate_question(&mut a, &config),
                    generate_question(&mut b, &config),
                    "mismatch for {op} at {tier}"
                );
            }
        }
    }
}

#[test]
fn different_seeds_produce_varied_questions() {
    let config = fixed(Operation::Addition, DifficultyTier::Hard);
    let mut same_count = 0usize;
    let pairs = 40u64;
    for seed in 0..pairs {
        let a = generate_question(&mut StdRng::seed_from_u64(seed), &config);
        let b = generate_question(&mut StdRng::seed_from_u64(seed + 500), &config);
        if a.key() == b.key() {
            same_count += 1;
        }
    }
    assert!(
        same_count < pairs as usize / 4,
        "Too many identical questions across different seeds ({same_count}/{pairs})"
    );
}

#[test]
fn entropy_engine_produces_a_valid_question() {
    let mut engine = PracticeEngine::new(None, TierThresholds::default());
    let q = engine.generate_question(&GenerationConfig::default());
    assert_eq!(q.first_operand + q.second_operand, q.correct_answer);
    assert_options_well_formed(&q);
}

// ── structural invariants ─────────────────────────────────────────────────────

#[test]
fn addition_questions_add_up_with_well_formed_options() {
    for tier in all_tiers() {
        for seed in SEEDS {
            let mut rng = StdRng::seed_from_u64(seed);
            for _ in 0..200 {
                let q = generate_question(&mut rng, &fixed(Operation::Addition, tier));
                assert_eq!(q.operation, Operation::Addition);
                assert_eq!(q.first_operand + q.second_operand, q.correct_answer, "{q:?}");
                assert_options_well_formed(&q);
            }
        }
    }
}

#[test]
fn subtraction_questions_never_go_negative() {
    for tier in all_tiers() {
        for seed in SEEDS {
            let mut rng = StdRng::seed_from_u64(seed);
            let config = GenerationConfig { max_digits: 2, ..fixed(Operation::Subtraction, tier) };
            for _ in 0..200 {
                let q = generate_question(&mut rng, &config);
                assert_eq!(q.operation, Operation::Subtraction);
                assert!(q.first_operand >= q.second_operand, "{q:?}");
                assert_eq!(q.first_operand - q.second_operand, q.correct_answer, "{q:?}");
                assert_options_well_formed(&q);
            }
        }
    }
}

#[test]
fn correct_answer_lands_in_every_slot() {
    let mut rng = StdRng::seed_from_u64(2024);
    let config = fixed(Operation::Addition, DifficultyTier::Medium);
    let mut slots = [0usize; 4];
    for _ in 0..800 {
        let q = generate_question(&mut rng, &config);
        let pos = q.options.iter().position(|&o| o == q.correct_answer).unwrap();
        slots[pos] += 1;
    }
    for (i, &n) in slots.iter().enumerate() {
        assert!(n > 100, "slot {i} only held the answer {n}/800 times: {slots:?}");
    }
}

#[test]
fn concatenation_mistake_shows_up_for_small_operands() {
    // 1 + 5 should sometimes offer 15 (or 51).
    let mut seen_concat = false;
    for seed in 0..300u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let q = generate_question(&mut rng, &fixed(Operation::Addition, DifficultyTier::Easy));
        let forward = q.first_operand * 10 + q.second_operand;
        let backward = q.second_operand * 10 + q.first_operand;
        if q.options.contains(&forward) || q.options.contains(&backward) {
            seen_concat = true;
            break;
        }
    }
    assert!(seen_concat, "no concatenation distractor across 300 easy questions");
}

// ── batches ──────────────────────────────────────────────────────────────────

#[test]
fn batch_of_ten_has_no_duplicate_keys() {
    for tier in all_tiers() {
        for seed in SEEDS {
            let mut rng = StdRng::seed_from_u64(seed);
            let batch = generate_question_batch(&mut rng, &fixed(Operation::Addition, tier), 10);
            assert_eq!(batch.len(), 10, "{tier} seed={seed}");
            let keys: HashSet<_> = batch.iter().map(Question::key).collect();
            assert_eq!(keys.len(), batch.len(), "duplicate key at {tier} seed={seed}");
        }
    }
}

#[test]
fn batch_keeps_mirrored_operands_apart() {
    let config = fixed(Operation::Addition, DifficultyTier::Easy);
    let found = (0..20u64).any(|seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        let batch = generate_question_batch(&mut rng, &config, 20);
        let keys: HashSet<_> = batch.iter().map(|q| (q.first_operand, q.second_operand)).collect();
        keys.iter().any(|&(a, b)| a != b && keys.contains(&(b, a)))
    });
    assert!(found, "2+3 and 3+2 should be able to share a batch");
}

#[test]
fn batch_beyond_the_combination_space_comes_back_short() {
    // Easy addition has 25 keys; 100 requested can never be met.
    let mut engine = PracticeEngine::new(Some(8), TierThresholds::default());
    let batch = engine.generate_question_batch(&GenerationConfig::default(), 100);
    assert!(batch.len() <= 25);
    let keys: HashSet<_> = batch.iter().map(Question::key).collect();
    assert_eq!(keys.len(), batch.len());
}

// ── adaptive difficulty ──────────────────────────────────────────────────────

#[test]
fn promotion_switches_addition_to_medium_ranges() {
    let mut engine = PracticeEngine::new(Some(31), TierThresholds::default());
    let config = GenerationConfig::new(Operation::Addition);
    for _ in 0..5 {
        engine.update_performance(true);
    }
    let stats = engine.performance_stats();
    assert_eq!(stats.current_tier, DifficultyTier::Medium);
    assert_eq!(stats.consecutive_correct, 0);

    let mut saw_above_five = false;
    for _ in 0..200 {
        let q = engine.generate_question(&config);
        assert!(q.first_operand <= 19 && q.second_operand <= 19, "{q:?}");
        assert!(q.first_operand <= 9 || q.second_operand <= 9, "{q:?}");
        saw_above_five |= q.first_operand > 5 || q.second_operand > 5;
    }
    assert!(saw_above_five, "medium tier never left the easy 1..=5 range");
}

#[test]
fn struggling_at_medium_drops_back_to_easy() {
    let tracker = PerformanceTracker::starting_at(DifficultyTier::Medium, TierThresholds::default());
    let mut engine = PracticeEngine::new(Some(32), TierThresholds::default()).with_tracker(tracker);
    for correct in [false, true, false, false, true, false, true, false] {
        engine.update_performance(correct);
    }
    let stats = engine.performance_stats();
    assert_eq!(stats.correct_answers, 3);
    assert_eq!(stats.current_tier, DifficultyTier::Easy);

    let q = engine.generate_question(&GenerationConfig::default());
    assert!(q.first_operand <= 5 && q.second_operand <= 5, "{q:?}");
}

#[test]
fn stats_are_idempotent_snapshots() {
    let mut engine = PracticeEngine::new(Some(33), TierThresholds::default());
    engine.update_performance(true);
    let a = engine.performance_stats();
    let b = engine.performance_stats();
    assert_eq!(a, b);

    let mut copy = a;
    copy.correct_answers = 0;
    assert_eq!(engine.performance_stats(), a);
}

// ── sessions ─────────────────────────────────────────────────────────────────

#[test]
fn perfect_addition_session_reaches_hard() {
    let mut s = session(Chapter::Addition, 50);
    let mut answer = s.start().correct_answer();
    let mut shown = 1;
    loop {
        let outcome = s.select_option(answer).unwrap();
        assert!(outcome.correct);
        match s.advance().unwrap() {
            Some(next) => {
                answer = next.correct_answer();
                shown += 1;
            }
            None => break,
        }
    }
    assert_eq!(shown, 25);
    let summary = s.summary().unwrap();
    assert_eq!((summary.correct, summary.total, summary.percent), (25, 25, 100));
    assert_eq!(summary.celebration, Celebration::Perfect);
    assert_eq!(summary.final_tier, Some(DifficultyTier::Hard));
    assert!(summary.time_spent.ends_with("seconds"));
    assert!(s.advance().is_err());
}

#[test]
fn making_ten_session_scores_wrong_answers() {
    let mut s = session(Chapter::MakingTen, 51);
    let mut prompt = s.start().clone();
    loop {
        let wrong = prompt.options().into_iter().find(|&o| o != prompt.correct_answer()).unwrap();
        assert!(!s.select_option(wrong).unwrap().correct);
        match s.advance().unwrap() {
            Some(next) => prompt = next.clone(),
            None => break,
        }
    }
    let summary = s.summary().unwrap();
    assert_eq!((summary.correct, summary.total, summary.percent), (0, 25, 0));
    assert_eq!(summary.celebration, Celebration::None);
    assert_eq!(summary.final_tier, None);
    // Making ten does not feed the adaptive tracker.
    assert_eq!(s.performance_stats(), PerformanceState::default());
}

#[test]
fn number_pairs_session_completes_after_all_discoveries() {
    let mut s = session(Chapter::NumberPairs, 52);
    let mut answer = s.start().correct_answer();
    let mut rounds = 0;
    loop {
        rounds += 1;
        assert!(rounds < 1_000, "number pairs never completed");
        s.select_option(answer).unwrap();
        match s.advance().unwrap() {
            Some(next) => answer = next.correct_answer(),
            None => break,
        }
    }
    assert_eq!(s.number_pairs().discovered().len(), 9);
    assert_eq!(s.progress_percentage(), 100);
    assert!(s.is_complete());
}

#[test]
fn puzzle_session_runs_five_rounds() {
    let mut s = session(Chapter::PuzzlePairs, 53);
    let mut answer = s.start().correct_answer();
    let mut rounds = 1;
    loop {
        assert!(s.select_option(answer).unwrap().correct);
        match s.advance().unwrap() {
            Some(next) => {
                answer = next.correct_answer();
                rounds += 1;
            }
            None => break,
        }
    }
    assert_eq!(rounds, 5);
    assert_eq!(s.summary().unwrap().celebration, Celebration::Perfect);
}

#[test]
fn restart_clears_progress_and_tier() {
    let mut s = session(Chapter::Subtraction, 54);
    let mut answer = s.start().correct_answer();
    for _ in 0..6 {
        s.select_option(answer).unwrap();
        answer = s.advance().unwrap().unwrap().correct_answer();
    }
    assert_eq!(s.performance_stats().current_tier, DifficultyTier::Medium);
    assert!(s.encouragement().is_some());

    s.start();
    assert_eq!(s.performance_stats(), PerformanceState::default());
    assert_eq!(s.progress_percentage(), 0);
    assert!(s.summary().is_none());
    assert!(s.encouragement().is_none());
}

// ── serialization ────────────────────────────────────────────────────────────

#[test]
fn question_serializes_with_lowercase_operation() {
    let q = Question {
        first_operand: 2,
        second_operand: 3,
        correct_answer: 5,
        options: [23, 5, 4, 2],
        operation: Operation::Addition,
    };
    let json = serde_json::to_value(&q).unwrap();
    assert_eq!(json["operation"], "addition");
    assert_eq!(json["options"], serde_json::json!([23, 5, 4, 2]));

    let back: Question = serde_json::from_value(json).unwrap();
    assert_eq!(back, q);
}

#[test]
fn generation_config_fills_missing_fields_with_defaults() {
    let config: GenerationConfig =
        serde_json::from_str(r#"{ "operation": "subtraction", "difficulty_tier": "medium" }"#).unwrap();
    assert_eq!(config.operation, Operation::Subtraction);
    assert_eq!(config.difficulty_tier, DifficultyTier::Medium);
    assert_eq!(config.max_digits, 1);
    assert!(config.adaptive_difficulty);
}
