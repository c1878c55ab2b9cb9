/// How a point ended, from the user's side of the net.
///
/// Prompts are produced by the opponent, so the trailing marker of a
/// terminal prompt describes the opponent's last stroke:
/// - `@` unforced error or `#` forced error: the opponent missed, we won
/// - `*` winner: the ball went past us, we lost
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Outcome {
    Won,
    Lost,
}

impl Outcome {
    pub const UNFORCED: char = '@';
    pub const FORCED: char = '#';
    pub const WINNER: char = '*';

    /// Pure function of the last character. Non-terminal tokens yield `None`.
    pub fn classify(token: &str) -> Option<Self> {
        match token.chars().last()? {
            Self::UNFORCED | Self::FORCED => Some(Self::Won),
            Self::WINNER => Some(Self::Lost),
            _ => None,
        }
    }
    pub fn is_won(&self) -> bool {
        matches!(self, Self::Won)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Won => write!(f, "won"),
            Self::Lost => write!(f, "lost"),
        }
    }
}
