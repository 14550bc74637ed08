//! Thin session driver shared by every chapter.
//!
//! The driver owns one [`PracticeEngine`] and walks a fixed-length (or, for
//! number pairs, discovery-bounded) sequence of prompts:
//!
//! ```text
//! start() ─▶ select_option(choice) ─▶ [wait advance_after] ─▶ advance() ─┐
//!               ▲                                                        │
//!               └────────────────────────────────────────────────────────┘
//! ```
//!
//! A prompt accepts exactly one answer until `advance()` is called, so a late
//! timer or a double tap can never feed the tracker twice.

use std::time::{Duration, Instant};

use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::practice_engine::{
    config::EngineConfig,
    engine::PracticeEngine,
    error::SessionError,
    making_ten::{self, MakingTenProblem},
    models::{Chapter, DifficultyTier, GenerationConfig, Operation, PerformanceState, Question},
    number_pairs::{NumberPairsGame, PairRound},
    puzzle_pairs::PuzzleRound,
};

/// What the presentation layer shows for the current step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Prompt {
    Arithmetic(Question),
    MakingTen { problem: MakingTenProblem, options: [u32; 4] },
    NumberPair(PairRound),
    Puzzle(PuzzleRound),
}

impl Prompt {
    pub fn options(&self) -> [u32; 4] {
        match self {
            Prompt::Arithmetic(q)               => q.options,
            Prompt::MakingTen { options, .. }   => *options,
            Prompt::NumberPair(r)               => r.options,
            Prompt::Puzzle(r)                   => r.options(),
        }
    }

    pub fn correct_answer(&self) -> u32 {
        match self {
            Prompt::Arithmetic(q)               => q.correct_answer,
            Prompt::MakingTen { problem, .. }   => problem.missing,
            Prompt::NumberPair(r)               => r.second,
            Prompt::Puzzle(r)                   => r.partner,
        }
    }

    pub fn text(&self) -> String {
        match self {
            Prompt::Arithmetic(q)               => q.prompt(),
            Prompt::MakingTen { problem, .. }   => problem.prompt(),
            Prompt::NumberPair(r)               => format!("{} + ? = 10", r.first),
            Prompt::Puzzle(r)                   => format!("Which tile fits {}?", r.shown),
        }
    }
}

/// Result of [`PracticeSession::select_option`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub correct_answer: u32,
    /// Suggested pause before calling `advance()`.
    pub advance_after: Duration,
    /// Number-pairs only: whether the answer found a new pair.
    pub newly_discovered: Option<bool>,
    /// Puzzle-pairs only: the same round reopens after `advance()`.
    pub retry: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Celebration {
    None,
    /// 90–99 %.
    Great,
    /// 100 %.
    Perfect,
}

impl Celebration {
    pub fn for_percent(percent: u32) -> Self {
        match percent {
            100     => Celebration::Perfect,
            90..=99 => Celebration::Great,
            _       => Celebration::None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub chapter: Chapter,
    pub correct: u32,
    pub total: u32,
    pub percent: u32,
    pub celebration: Celebration,
    /// Arithmetic chapters only.
    pub final_tier: Option<DifficultyTier>,
    pub time_spent: String,
}

/// Kid-friendly elapsed time: seconds under a minute, whole minutes (rounded up) after.
pub fn format_time_spent(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    if secs < 60 {
        return format!("{secs} seconds");
    }
    let minutes = secs.div_ceil(60);
    if minutes == 1 {
        "1 minute".to_string()
    } else {
        format!("{minutes} minutes")
    }
}

/// Encouragement line for the running stats; nothing before the third answer.
pub fn encouragement(stats: &PerformanceState) -> Option<String> {
    if stats.total_answered < 3 {
        return None;
    }
    let rate = stats.success_rate();
    let line = if stats.consecutive_correct >= 3 {
        format!("{} in a row! You're on fire!", stats.consecutive_correct)
    } else if rate >= 0.8 {
        "Great job! You're doing amazing!".to_string()
    } else if rate >= 0.6 {
        "Keep trying! You're learning!".to_string()
    } else {
        "Every answer helps you learn!".to_string()
    };
    Some(line)
}

/// One child working through one chapter.
#[derive(Debug)]
pub struct PracticeSession<R: Rng = StdRng> {
    chapter: Chapter,
    config: EngineConfig,
    engine: PracticeEngine<R>,
    pairs: NumberPairsGame,
    deck: Vec<MakingTenProblem>,
    index: usize,
    correct_count: u32,
    total_answered: u32,
    current: Option<Prompt>,
    answered: bool,
    retry_pending: bool,
    completed: bool,
    started_at: Option<Instant>,
    elapsed: Duration,
}

impl PracticeSession<StdRng> {
    /// Seeded from `config.session.rng_seed` when present.
    pub fn new(chapter: Chapter, config: EngineConfig) -> Self {
        let rng = match config.session.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        };
        Self::with_rng(chapter, config, rng)
    }
}

impl<R: Rng> PracticeSession<R> {
    pub fn with_rng(chapter: Chapter, config: EngineConfig, rng: R) -> Self {
        let engine = PracticeEngine::with_rng(rng, config.tracker);
        let pairs = NumberPairsGame::new(config.number_pairs.discovery_rule);
        Self {
            chapter,
            config,
            engine,
            pairs,
            deck: Vec::new(),
            index: 0,
            correct_count: 0,
            total_answered: 0,
            current: None,
            answered: false,
            retry_pending: false,
            completed: false,
            started_at: None,
            elapsed: Duration::ZERO,
        }
    }

    pub fn chapter(&self) -> Chapter {
        self.chapter
    }

    /// Fresh start: counters, tracker, discoveries and timer all reset.
    pub fn start(&mut self) -> &Prompt {
        self.engine.reset_performance();
        self.pairs.reset();
        let len = self.chapter_len();
        self.deck = match self.chapter {
            Chapter::MakingTen => making_ten::build_deck(self.engine.rng_mut(), len),
            _                  => Vec::new(),
        };
        self.index = 0;
        self.correct_count = 0;
        self.total_answered = 0;
        self.answered = false;
        self.retry_pending = false;
        self.completed = false;
        self.started_at = Some(Instant::now());
        self.elapsed = Duration::ZERO;
        info!(chapter = %self.chapter, "practice session started");

        let prompt = self.next_prompt();
        self.current.insert(prompt)
    }

    pub fn current(&self) -> Option<&Prompt> {
        self.current.as_ref()
    }

    /// Score `choice` against the current prompt. Only one answer per prompt.
    pub fn select_option(&mut self, choice: u32) -> Result<AnswerOutcome, SessionError> {
        if self.completed {
            return Err(SessionError::Completed);
        }
        if self.answered {
            return Err(SessionError::AlreadyAnswered);
        }
        let prompt = self.current.as_ref().ok_or(SessionError::NotStarted)?;
        if !prompt.options().contains(&choice) {
            return Err(SessionError::UnknownOption(choice));
        }

        let delay = self.config.session.advance_delay();
        let correct_answer = prompt.correct_answer();
        let mut outcome = AnswerOutcome {
            correct: false,
            correct_answer,
            advance_after: delay,
            newly_discovered: None,
            retry: false,
        };

        match prompt {
            Prompt::Arithmetic(q) => {
                outcome.correct = q.is_correct(choice);
                self.engine.update_performance(outcome.correct);
            }
            Prompt::MakingTen { problem, .. } => {
                outcome.correct = problem.is_correct(choice);
            }
            Prompt::NumberPair(round) => {
                let result = self.pairs.answer(round, choice);
                outcome.correct = result.correct;
                outcome.newly_discovered = Some(result.newly_discovered);
                if result.correct {
                    outcome.advance_after = self.config.session.discovery_advance_delay();
                }
            }
            Prompt::Puzzle(round) => {
                outcome.correct = round.fits(choice);
                outcome.retry = !outcome.correct;
            }
        }

        self.total_answered += 1;
        if outcome.correct {
            self.correct_count += 1;
        }
        self.answered = true;
        self.retry_pending = outcome.retry;
        Ok(outcome)
    }

    /// Move past an answered prompt. `Ok(None)` means the session just completed.
    pub fn advance(&mut self) -> Result<Option<&Prompt>, SessionError> {
        if self.completed {
            return Err(SessionError::Completed);
        }
        if self.current.is_none() {
            return Err(SessionError::NotStarted);
        }
        if !self.answered {
            return Err(SessionError::NotAnswered);
        }
        self.answered = false;

        if self.retry_pending {
            self.retry_pending = false;
            return Ok(self.current.as_ref());
        }

        let finished = match self.chapter {
            Chapter::NumberPairs => self.pairs.is_complete(),
            _ => {
                self.index += 1;
                self.index >= self.chapter_len()
            }
        };
        if finished {
            self.finish();
            return Ok(None);
        }

        let prompt = self.next_prompt();
        let shown: &Prompt = self.current.insert(prompt);
        Ok(Some(shown))
    }

    pub fn is_complete(&self) -> bool {
        self.completed
    }

    /// Rounded share of the session done: prompts for fixed-length chapters,
    /// discoveries for number pairs.
    pub fn progress_percentage(&self) -> u32 {
        match self.chapter {
            Chapter::NumberPairs => self.pairs.completion_percentage(),
            _ => ((self.index as f64 / self.chapter_len() as f64) * 100.0).round() as u32,
        }
    }

    pub fn performance_stats(&self) -> PerformanceState {
        self.engine.performance_stats()
    }

    /// Encouragement for arithmetic chapters; other chapters have no tracker.
    pub fn encouragement(&self) -> Option<String> {
        if !self.chapter.is_arithmetic() {
            return None;
        }
        encouragement(&self.engine.performance_stats())
    }

    pub fn number_pairs(&self) -> &NumberPairsGame {
        &self.pairs
    }

    /// Available once the session is complete.
    pub fn summary(&self) -> Option<SessionSummary> {
        if !self.completed {
            return None;
        }
        let percent = if self.total_answered == 0 {
            0
        } else {
            ((f64::from(self.correct_count) / f64::from(self.total_answered)) * 100.0).round() as u32
        };
        Some(SessionSummary {
            chapter: self.chapter,
            correct: self.correct_count,
            total: self.total_answered,
            percent,
            celebration: Celebration::for_percent(percent),
            final_tier: self
                .chapter
                .is_arithmetic()
                .then(|| self.engine.performance_stats().current_tier),
            time_spent: format_time_spent(self.elapsed),
        })
    }

    fn chapter_len(&self) -> usize {
        match self.chapter {
            Chapter::PuzzlePairs => self.config.session.puzzle_questions.max(1),
            // Bounded by discoveries, not by count.
            Chapter::NumberPairs => usize::MAX,
            _                    => self.config.session.questions_per_chapter.max(1),
        }
    }

    fn generation_config(&self) -> GenerationConfig {
        let operation = match self.chapter {
            Chapter::Subtraction => Operation::Subtraction,
            _                    => Operation::Addition,
        };
        GenerationConfig { operation, ..self.config.generation.clone() }
    }

    fn next_prompt(&mut self) -> Prompt {
        match self.chapter {
            Chapter::Addition | Chapter::Subtraction => {
                let config = self.generation_config();
                Prompt::Arithmetic(self.engine.generate_question(&config))
            }
            Chapter::MakingTen => {
                let problem = self.deck[self.index % self.deck.len()];
                let options = making_ten::options_for(self.engine.rng_mut(), &problem);
                Prompt::MakingTen { problem, options }
            }
            Chapter::NumberPairs => Prompt::NumberPair(self.pairs.next_round(self.engine.rng_mut())),
            Chapter::PuzzlePairs => Prompt::Puzzle(PuzzleRound::random(self.engine.rng_mut())),
        }
    }

    fn finish(&mut self) {
        self.completed = true;
        self.current = None;
        self.elapsed = self.started_at.map_or(Duration::ZERO, |t| t.elapsed());
        info!(
            chapter = %self.chapter,
            correct = self.correct_count,
            total = self.total_answered,
            "practice session completed"
        );
    }
}
