use rsb_core::Connection;
use rsb_core::ID;
use rsb_gameplay::Choice;
use rsb_gameplay::Score;
use rsb_gameplay::Verdict;

/// One participant's slot within a session.
/// Readiness is the presence of a choice, so the two cannot disagree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seat {
    conn: ID<Connection>,
    name: String,
    choice: Option<Choice>,
    score: Score,
}

/// Public view of a seat. Never carries the pending choice.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Summary {
    pub player: ID<Connection>,
    pub name: String,
    pub ready: bool,
    pub score: Score,
}

impl Seat {
    pub fn new(conn: ID<Connection>, name: String) -> Self {
        Self {
            conn,
            name,
            choice: None,
            score: Score::default(),
        }
    }
    pub fn conn(&self) -> ID<Connection> {
        self.conn
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn choice(&self) -> Option<Choice> {
        self.choice
    }
    pub fn ready(&self) -> bool {
        self.choice.is_some()
    }
    pub fn score(&self) -> Score {
        self.score
    }
    pub fn summary(&self) -> Summary {
        Summary {
            player: self.conn,
            name: self.name.clone(),
            ready: self.ready(),
            score: self.score,
        }
    }
}

impl Seat {
    /// Locks in a choice, replacing any earlier one this round.
    pub(crate) fn choose(&mut self, choice: Choice) {
        self.choice = Some(choice);
    }
    pub(crate) fn record(&mut self, verdict: Verdict) {
        self.score.record(verdict);
    }
    /// Clears the per-round state.
    pub(crate) fn clear(&mut self) {
        self.choice = None;
    }
    /// Clears the per-round state and the tally. Identity survives.
    pub(crate) fn reset(&mut self) {
        self.clear();
        self.score.reset();
    }
}
