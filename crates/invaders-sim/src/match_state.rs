//! Lives, score and the match outcome state machine.
//!
//! `Playing -> {Won, Lost}`. The first terminal transition wins; afterwards
//! lives, score and outcome are frozen.

use invaders_core::enums::Outcome;
use invaders_core::state::MatchView;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchState {
    lives: u32,
    score: u32,
    outcome: Outcome,
}

impl MatchState {
    pub fn new(start_lives: u32, start_points: u32) -> Self {
        Self {
            lives: start_lives,
            score: start_points,
            outcome: Outcome::Playing,
        }
    }

    /// Award points for a destroyed enemy.
    pub fn register_kill(&mut self, points: u32) {
        if self.outcome.is_terminal() {
            return;
        }
        self.score = self.score.saturating_add(points);
    }

    /// Lose a life and `penalty` points (floored at zero).
    /// Returns the lives remaining.
    pub fn register_hit(&mut self, penalty: u32) -> u32 {
        if !self.outcome.is_terminal() {
            self.lives = self.lives.saturating_sub(1);
            self.score = self.score.saturating_sub(penalty);
        }
        self.lives
    }

    pub fn is_alive(&self) -> bool {
        self.lives > 0
    }

    pub fn current_outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns true if this call performed the transition.
    pub fn set_won(&mut self) -> bool {
        self.finish(Outcome::Won)
    }

    /// Returns true if this call performed the transition.
    pub fn set_lost(&mut self) -> bool {
        self.finish(Outcome::Lost)
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn view(&self) -> MatchView {
        MatchView {
            lives: self.lives,
            score: self.score,
            outcome: self.outcome,
        }
    }

    fn finish(&mut self, outcome: Outcome) -> bool {
        if self.outcome.is_terminal() {
            return false;
        }
        self.outcome = outcome;
        true
    }
}
