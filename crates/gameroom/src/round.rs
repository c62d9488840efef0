use rsb_core::Connection;
use rsb_core::ID;
use rsb_gameplay::Choice;
use rsb_gameplay::Score;
use std::collections::BTreeMap;

/// Who took a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Tie,
    Player(ID<Connection>),
}

impl serde::Serialize for Winner {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Tie => serializer.serialize_str("tie"),
            Self::Player(id) => serde::Serialize::serialize(id, serializer),
        }
    }
}

/// Snapshot of one resolved round.
/// Built once by the owning session and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct RoundResult {
    round: usize,
    choices: BTreeMap<ID<Connection>, Choice>,
    winner: Winner,
    scores: BTreeMap<ID<Connection>, Score>,
}

impl RoundResult {
    pub(crate) fn new(
        round: usize,
        choices: BTreeMap<ID<Connection>, Choice>,
        winner: Winner,
        scores: BTreeMap<ID<Connection>, Score>,
    ) -> Self {
        Self {
            round,
            choices,
            winner,
            scores,
        }
    }
    pub fn round(&self) -> usize {
        self.round
    }
    pub fn winner(&self) -> Winner {
        self.winner
    }
    pub fn choice(&self, conn: ID<Connection>) -> Option<Choice> {
        self.choices.get(&conn).copied()
    }
    /// Tally for `conn` right after this round was scored.
    pub fn score(&self, conn: ID<Connection>) -> Option<Score> {
        self.scores.get(&conn).copied()
    }
    pub fn choices(&self) -> &BTreeMap<ID<Connection>, Choice> {
        &self.choices
    }
    pub fn scores(&self) -> &BTreeMap<ID<Connection>, Score> {
        &self.scores
    }
}

impl std::fmt::Display for RoundResult {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let throws = self
            .choices
            .iter()
            .map(|(id, choice)| format!("{}:{}", id.short(), choice))
            .collect::<Vec<_>>()
            .join(" vs ");
        match self.winner {
            Winner::Tie => write!(f, "round {} {} -> tie", self.round, throws),
            Winner::Player(id) => write!(f, "round {} {} -> {}", self.round, throws, id.short()),
        }
    }
}
