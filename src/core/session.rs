//! The round session state machine.
//!
//! `Idle -> Active -> Evaluating -> (Active | Finished)`, driven by 100ms
//! ticks from the presentation loop. Seconds derive from a tick counter;
//! the wall clock keeps running through the feedback delay, and reaching
//! zero forces `Finished` regardless of any pending transition.

use crate::core::constants::TICKS_PER_SECOND;
use crate::core::round::{generate_round, Round};
use crate::core::score::ScoreLedger;
use crate::core::summary::GameSummary;
use crate::games::{GameConfig, GameKind};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Active,
    Evaluating,
    Finished,
}

/// How the most recent round was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
}

/// One play-through of one game. Replay after `Finished` requires a
/// brand-new value; a finished session never restarts.
#[derive(Debug, Clone)]
pub struct Session {
    kind: GameKind,
    config: GameConfig,
    phase: Phase,
    ledger: ScoreLedger,
    remaining_secs: u32,
    rounds_left: Option<u32>,
    round: Option<Round>,
    prev_target: Option<&'static str>,
    last_outcome: Option<Outcome>,
    last_choice: Option<usize>,
    correct: Vec<&'static str>,
    incorrect: Vec<&'static str>,
    tick_in_second: u8,
    eval_ticks: u8,
    question_ticks: Option<u16>,
    elapsed_ticks: u64,
    reported: bool,
}

impl Session {
    pub fn new(kind: GameKind) -> Self {
        let config = kind.config();
        Self {
            kind,
            config,
            phase: Phase::Idle,
            ledger: ScoreLedger::default(),
            remaining_secs: config.time_budget_secs,
            rounds_left: config.round_budget,
            round: None,
            prev_target: None,
            last_outcome: None,
            last_choice: None,
            correct: Vec::new(),
            incorrect: Vec::new(),
            tick_in_second: 0,
            eval_ticks: 0,
            question_ticks: None,
            elapsed_ticks: 0,
            reported: false,
        }
    }

    /// Begin (or restart) play. Resets score, clock, streak and lists,
    /// cancels any pending feedback delay, and deals the first round.
    /// Returns false on a `Finished` session; those stay finished.
    pub fn start<R: Rng>(&mut self, rng: &mut R) -> bool {
        if self.phase == Phase::Finished {
            return false;
        }
        self.ledger = ScoreLedger::default();
        self.remaining_secs = self.config.time_budget_secs;
        self.rounds_left = self.config.round_budget;
        self.prev_target = None;
        self.last_outcome = None;
        self.last_choice = None;
        self.correct.clear();
        self.incorrect.clear();
        self.tick_in_second = 0;
        self.eval_ticks = 0;
        self.elapsed_ticks = 0;
        self.reported = false;
        self.deal_round(rng);
        self.phase = Phase::Active;
        true
    }

    /// Resolve the displayed round against the chosen option index.
    /// Ignored outside `Active`; indexes are constrained to the option
    /// list the UI rendered, so there is no invalid-input path.
    pub fn submit(&mut self, index: usize) {
        if self.phase != Phase::Active {
            return;
        }
        let Some(round) = self.round.as_ref() else {
            return;
        };
        if index >= round.options.len() {
            return;
        }
        let hit = round.is_correct(index);
        let target_code = round.target.code;

        if hit {
            self.ledger.apply_correct(
                self.config.base_points,
                self.config.streak_threshold,
                self.config.streak_bonus,
            );
            self.correct.push(target_code);
            self.last_outcome = Some(Outcome::Correct);
        } else {
            self.ledger.apply_incorrect(self.config.penalty);
            self.incorrect.push(target_code);
            self.last_outcome = Some(Outcome::Incorrect);
        }
        self.last_choice = Some(index);
        if let Some(left) = self.rounds_left.as_mut() {
            *left = left.saturating_sub(1);
        }
        self.question_ticks = None;
        self.eval_ticks = self.config.eval_delay_ticks;
        self.phase = Phase::Evaluating;
    }

    /// Advance the machine by one 100ms tick.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) {
        if !matches!(self.phase, Phase::Active | Phase::Evaluating) {
            return;
        }
        self.elapsed_ticks += 1;

        self.tick_in_second += 1;
        if self.tick_in_second >= TICKS_PER_SECOND {
            self.tick_in_second = 0;
            self.remaining_secs = self.remaining_secs.saturating_sub(1);
            if self.remaining_secs == 0 {
                self.phase = Phase::Finished;
                return;
            }
        }

        match self.phase {
            Phase::Active => {
                if let Some(ticks) = self.question_ticks.as_mut() {
                    *ticks = ticks.saturating_sub(1);
                    if *ticks == 0 {
                        self.timeout_round();
                    }
                }
            }
            Phase::Evaluating => {
                self.eval_ticks = self.eval_ticks.saturating_sub(1);
                if self.eval_ticks == 0 {
                    if self.budget_exhausted() {
                        self.phase = Phase::Finished;
                    } else {
                        self.last_outcome = None;
                        self.last_choice = None;
                        self.deal_round(rng);
                        self.phase = Phase::Active;
                    }
                }
            }
            Phase::Idle | Phase::Finished => {}
        }
    }

    /// Hand out the final report exactly once, no matter how often the
    /// surrounding UI redraws after the `Finished` transition.
    pub fn take_summary(&mut self) -> Option<GameSummary> {
        if self.phase != Phase::Finished || self.reported {
            return None;
        }
        self.reported = true;
        Some(GameSummary {
            game_id: self.kind.id(),
            score: self.ledger.score(),
            duration_seconds: self.elapsed_ticks / u64::from(TICKS_PER_SECOND),
            correct: self.correct.clone(),
            incorrect: self.incorrect.clone(),
        })
    }

    /// No answer arrived in time: synthesize the deterministic wrong
    /// choice (the option that is not the correct one) and resolve the
    /// round through the ordinary incorrect path.
    fn timeout_round(&mut self) {
        let fallback = self
            .round
            .as_ref()
            .and_then(|r| r.options.iter().position(|o| *o != r.correct));
        if let Some(index) = fallback {
            self.submit(index);
        }
    }

    fn deal_round<R: Rng>(&mut self, rng: &mut R) {
        let round = generate_round(
            self.kind.pool(),
            self.config.variants,
            self.prev_target,
            self.config.option_count,
            rng,
        );
        self.prev_target = Some(round.target.code);
        self.question_ticks = self
            .config
            .question_secs
            .map(|secs| (secs as u16) * u16::from(TICKS_PER_SECOND));
        self.round = Some(round);
    }

    fn budget_exhausted(&self) -> bool {
        self.remaining_secs == 0 || self.rounds_left == Some(0)
    }

    // ── Accessors for the presentation layer ────────────────────

    pub fn kind(&self) -> GameKind {
        self.kind
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.ledger.score()
    }

    pub fn streak(&self) -> u32 {
        self.ledger.streak()
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn rounds_left(&self) -> Option<u32> {
        self.rounds_left
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    pub fn last_choice(&self) -> Option<usize> {
        self.last_choice
    }

    /// Whole seconds left on the per-question clock, if this game has one.
    pub fn question_secs_left(&self) -> Option<u32> {
        self.question_ticks
            .map(|t| u32::from(t).div_ceil(u32::from(TICKS_PER_SECOND)))
    }

    pub fn correct_count(&self) -> usize {
        self.correct.len()
    }

    pub fn incorrect_count(&self) -> usize {
        self.incorrect.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn started(kind: GameKind, seed: u64) -> (Session, ChaCha8Rng) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut session = Session::new(kind);
        assert!(session.start(&mut rng));
        (session, rng)
    }

    fn correct_index(session: &Session) -> usize {
        session.round().unwrap().correct_index().unwrap()
    }

    fn wrong_index(session: &Session) -> usize {
        let round = session.round().unwrap();
        round
            .options
            .iter()
            .position(|o| *o != round.correct)
            .unwrap()
    }

    /// Drain the evaluating delay so the next round is dealt.
    fn settle(session: &mut Session, rng: &mut ChaCha8Rng) {
        while session.phase() == Phase::Evaluating {
            session.tick(rng);
        }
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = Session::new(GameKind::Capitals);
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.score(), 0);
        assert!(session.round().is_none());
    }

    #[test]
    fn test_start_deals_first_round() {
        let (session, _) = started(GameKind::Capitals, 1);
        assert_eq!(session.phase(), Phase::Active);
        assert!(session.round().is_some());
        assert_eq!(session.remaining_secs(), 60);
    }

    #[test]
    fn test_correct_answer_scores_and_advances() {
        let (mut session, mut rng) = started(GameKind::Capitals, 2);
        let first_target = session.round().unwrap().target.code;

        session.submit(correct_index(&session));
        assert_eq!(session.phase(), Phase::Evaluating);
        assert_eq!(session.score(), 10);
        assert_eq!(session.streak(), 1);
        assert_eq!(session.last_outcome(), Some(Outcome::Correct));
        assert_eq!(session.correct_count(), 1);

        settle(&mut session, &mut rng);
        assert_eq!(session.phase(), Phase::Active);
        assert!(session.last_outcome().is_none());
        // Anti-repeat across the evaluating boundary.
        assert_ne!(session.round().unwrap().target.code, first_target);
    }

    #[test]
    fn test_incorrect_answer_resets_streak() {
        let (mut session, mut rng) = started(GameKind::Currencies, 3);
        session.submit(correct_index(&session));
        settle(&mut session, &mut rng);
        assert_eq!(session.streak(), 1);

        session.submit(wrong_index(&session));
        assert_eq!(session.streak(), 0);
        assert_eq!(session.last_outcome(), Some(Outcome::Incorrect));
        assert_eq!(session.incorrect_count(), 1);
        // 15 scored, 5 penalty.
        assert_eq!(session.score(), 10);
    }

    #[test]
    fn test_penalty_never_goes_negative() {
        let (mut session, mut rng) = started(GameKind::Currencies, 4);
        session.submit(wrong_index(&session));
        assert_eq!(session.score(), 0);
        settle(&mut session, &mut rng);
        session.submit(wrong_index(&session));
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_submit_ignored_outside_active() {
        let mut idle = Session::new(GameKind::Flags);
        idle.submit(0);
        assert_eq!(idle.phase(), Phase::Idle);

        let (mut session, _) = started(GameKind::Flags, 5);
        session.submit(correct_index(&session));
        let score = session.score();
        // Second submit lands in Evaluating and must change nothing.
        session.submit(0);
        assert_eq!(session.score(), score);
        assert_eq!(session.correct_count(), 1);
    }

    #[test]
    fn test_timer_exhaustion_forces_finish() {
        let (mut session, mut rng) = started(GameKind::Capitals, 6);
        // Burn the clock down to the final second.
        while session.remaining_secs() > 1 {
            session.tick(&mut rng);
        }
        let rounds_before = session.correct_count() + session.incorrect_count();
        for _ in 0..10 {
            session.tick(&mut rng);
        }
        assert_eq!(session.phase(), Phase::Finished);
        // No further rounds were generated after the clock hit zero.
        assert_eq!(session.correct_count() + session.incorrect_count(), rounds_before);

        let frozen = session.score();
        session.tick(&mut rng);
        session.submit(0);
        assert_eq!(session.score(), frozen);
    }

    #[test]
    fn test_clock_runs_through_evaluating() {
        let (mut session, mut rng) = started(GameKind::Capitals, 7);
        while session.remaining_secs() > 1 {
            session.tick(&mut rng);
        }
        session.submit(correct_index(&session));
        assert_eq!(session.phase(), Phase::Evaluating);
        // The pending feedback delay does not outlive the budget.
        for _ in 0..10 {
            session.tick(&mut rng);
        }
        assert_eq!(session.phase(), Phase::Finished);
    }

    #[test]
    fn test_round_budget_finishes_session() {
        let (mut session, mut rng) = started(GameKind::DrivingSide, 8);
        for _ in 0..10 {
            assert_eq!(session.phase(), Phase::Active);
            session.submit(correct_index(&session));
            settle(&mut session, &mut rng);
        }
        assert_eq!(session.phase(), Phase::Finished);
        assert_eq!(session.rounds_left(), Some(0));
    }

    #[test]
    fn test_question_timeout_synthesizes_incorrect() {
        let (mut session, mut rng) = started(GameKind::DrivingSide, 9);
        let target = session.round().unwrap().target.code;
        // 5 second per-question clock at 10 ticks per second.
        for _ in 0..50 {
            session.tick(&mut rng);
        }
        assert_eq!(session.phase(), Phase::Evaluating);
        assert_eq!(session.last_outcome(), Some(Outcome::Incorrect));
        assert_eq!(session.incorrect_count(), 1);
        assert_eq!(session.streak(), 0);
        // The synthesized choice is the option opposite the correct one.
        let round_target = session.round().unwrap().target.code;
        assert_eq!(round_target, target);
        let choice = session.last_choice().unwrap();
        assert!(!session.round().unwrap().is_correct(choice));
    }

    #[test]
    fn test_restart_cancels_pending_advance() {
        let (mut session, mut rng) = started(GameKind::Capitals, 10);
        session.submit(wrong_index(&session));
        assert_eq!(session.phase(), Phase::Evaluating);

        // Restart mid-delay: a fresh clock, no leftover outcome, and the
        // delayed round-advance never clobbers the new first round.
        assert!(session.start(&mut rng));
        assert_eq!(session.phase(), Phase::Active);
        assert_eq!(session.score(), 0);
        assert_eq!(session.incorrect_count(), 0);
        assert!(session.last_outcome().is_none());
        assert_eq!(session.remaining_secs(), 60);

        let target = session.round().unwrap().target.code;
        session.tick(&mut rng);
        assert_eq!(session.phase(), Phase::Active);
        assert_eq!(session.round().unwrap().target.code, target);
    }

    #[test]
    fn test_finished_session_cannot_restart() {
        let (mut session, mut rng) = started(GameKind::Capitals, 11);
        while session.phase() != Phase::Finished {
            session.tick(&mut rng);
        }
        assert!(!session.start(&mut rng));
        assert_eq!(session.phase(), Phase::Finished);
    }

    #[test]
    fn test_summary_is_taken_exactly_once() {
        let (mut session, mut rng) = started(GameKind::Capitals, 12);
        session.submit(correct_index(&session));
        settle(&mut session, &mut rng);
        session.submit(wrong_index(&session));
        while session.phase() != Phase::Finished {
            session.tick(&mut rng);
        }

        let summary = session.take_summary().expect("first take yields summary");
        assert_eq!(summary.game_id, "capitals");
        assert_eq!(summary.score, 10);
        assert_eq!(summary.correct.len(), 1);
        assert_eq!(summary.incorrect.len(), 1);
        assert!(summary.duration_seconds >= 59);

        // Simulated re-renders: every later take is empty.
        for _ in 0..5 {
            assert!(session.take_summary().is_none());
        }
    }

    #[test]
    fn test_summary_unavailable_before_finish() {
        let (mut session, _) = started(GameKind::Capitals, 13);
        assert!(session.take_summary().is_none());
        session.submit(correct_index(&session));
        assert!(session.take_summary().is_none());
    }

    #[test]
    fn test_full_playthrough_accumulates_outcomes() {
        let (mut session, mut rng) = started(GameKind::Flags, 14);
        let mut answered = 0;
        while session.phase() != Phase::Finished {
            match session.phase() {
                Phase::Active => {
                    let index = if answered % 3 == 0 {
                        wrong_index(&session)
                    } else {
                        correct_index(&session)
                    };
                    session.submit(index);
                    answered += 1;
                }
                _ => session.tick(&mut rng),
            }
        }
        let summary = session.take_summary().unwrap();
        assert_eq!(
            summary.correct.len() + summary.incorrect.len(),
            answered
        );
        assert!(summary.score > 0);
    }
}
