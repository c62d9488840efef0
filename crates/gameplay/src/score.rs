/// A round from one participant's point of view.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Win,
    Loss,
    Tie,
}

/// Cumulative win/loss/tie tally for one participant.
#[derive(Debug, Clone, Copy, Default, Eq, Hash, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Score {
    pub wins: usize,
    pub losses: usize,
    pub ties: usize,
}

impl Score {
    pub fn record(&mut self, verdict: Verdict) {
        match verdict {
            Verdict::Win => self.wins += 1,
            Verdict::Loss => self.losses += 1,
            Verdict::Tie => self.ties += 1,
        }
    }
    /// Number of rounds this tally covers.
    pub fn total(&self) -> usize {
        self.wins + self.losses + self.ties
    }
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}W {}L {}T", self.wins, self.losses, self.ties)
    }
}
