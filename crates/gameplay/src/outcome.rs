use super::*;

/// Result of two simultaneous choices.
/// `First` and `Second` refer to argument order in [`resolve`].
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Tie,
    First,
    Second,
}

/// Resolves one round under the cyclic dominance rule.
/// Total over all nine input pairs.
pub fn resolve(a: Choice, b: Choice) -> Outcome {
    if a == b {
        Outcome::Tie
    } else if a.beats() == b {
        Outcome::First
    } else {
        Outcome::Second
    }
}

impl Outcome {
    /// The outcome as experienced by the participant at `position` (0 or 1).
    pub fn verdict(&self, position: usize) -> Verdict {
        match (self, position) {
            (Self::Tie, _) => Verdict::Tie,
            (Self::First, 0) | (Self::Second, 1) => Verdict::Win,
            _ => Verdict::Loss,
        }
    }
    /// Index of the winning position, if any.
    pub fn winner(&self) -> Option<usize> {
        match self {
            Self::Tie => None,
            Self::First => Some(0),
            Self::Second => Some(1),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Tie => write!(f, "tie"),
            Self::First => write!(f, "first"),
            Self::Second => write!(f, "second"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Choice::*;
    #[test]
    fn rock_rock_ties() {
        assert_eq!(resolve(Rock, Rock), Outcome::Tie);
    }
    #[test]
    fn paper_paper_ties() {
        assert_eq!(resolve(Paper, Paper), Outcome::Tie);
    }
    #[test]
    fn scissors_scissors_ties() {
        assert_eq!(resolve(Scissors, Scissors), Outcome::Tie);
    }
    #[test]
    fn rock_beats_scissors() {
        assert_eq!(resolve(Rock, Scissors), Outcome::First);
        assert_eq!(resolve(Scissors, Rock), Outcome::Second);
    }
    #[test]
    fn scissors_beats_paper() {
        assert_eq!(resolve(Scissors, Paper), Outcome::First);
        assert_eq!(resolve(Paper, Scissors), Outcome::Second);
    }
    #[test]
    fn paper_beats_rock() {
        assert_eq!(resolve(Paper, Rock), Outcome::First);
        assert_eq!(resolve(Rock, Paper), Outcome::Second);
    }
    #[test]
    fn tie_iff_equal() {
        for a in Choice::all() {
            for b in Choice::all() {
                assert_eq!(resolve(a, b) == Outcome::Tie, a == b);
            }
        }
    }
    #[test]
    fn resolve_is_antisymmetric() {
        for a in Choice::all() {
            for b in Choice::all() {
                let forward = resolve(a, b);
                let reverse = resolve(b, a);
                match forward {
                    Outcome::Tie => assert_eq!(reverse, Outcome::Tie),
                    Outcome::First => assert_eq!(reverse, Outcome::Second),
                    Outcome::Second => assert_eq!(reverse, Outcome::First),
                }
            }
        }
    }
    #[test]
    fn verdicts_mirror() {
        assert_eq!(Outcome::First.verdict(0), Verdict::Win);
        assert_eq!(Outcome::First.verdict(1), Verdict::Loss);
        assert_eq!(Outcome::Second.verdict(0), Verdict::Loss);
        assert_eq!(Outcome::Second.verdict(1), Verdict::Win);
        assert_eq!(Outcome::Tie.verdict(0), Verdict::Tie);
        assert_eq!(Outcome::Tie.verdict(1), Verdict::Tie);
    }
}
