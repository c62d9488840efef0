use super::*;
use rsb_core::Arbitrary;

/// Single-player scorekeeping against a uniformly random CPU.
/// Needs no opponent coordination, so it is owned by whoever tracks the player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Solo {
    score: Score,
}

/// One resolved single-player round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Throw {
    pub choice: Choice,
    pub opponent: Choice,
    pub verdict: Verdict,
    pub score: Score,
}

impl Solo {
    pub fn score(&self) -> Score {
        self.score
    }
    /// Plays against a freshly drawn CPU choice.
    pub fn play(&mut self, choice: Choice) -> Throw {
        self.against(choice, Choice::random())
    }
    /// Plays against a known CPU choice.
    pub fn against(&mut self, choice: Choice, opponent: Choice) -> Throw {
        let verdict = resolve(choice, opponent).verdict(0);
        self.score.record(verdict);
        log::trace!("[solo] {} vs {} -> {:?}", choice, opponent, verdict);
        Throw {
            choice,
            opponent,
            verdict,
            score: self.score,
        }
    }
}
