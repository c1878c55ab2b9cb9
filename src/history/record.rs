use crate::tokens::Token;
use serde::Deserialize;
use serde::Serialize;

/// One historical point.
///
/// Each player's strokes are charted separately; the rally the model
/// learns from is their alternation, server first. `won` records whether
/// the charted player took the point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointRecord {
    pub server: Vec<Token>,
    #[serde(default)]
    pub receiver: Vec<Token>,
    pub won: bool,
}

impl PointRecord {
    /// Alternating shot sequence. If one side was charted with more
    /// strokes than the other, the surplus trails at the end.
    pub fn rally(&self) -> Vec<Token> {
        let n = self.server.len().max(self.receiver.len());
        (0..n)
            .flat_map(|i| [self.server.get(i), self.receiver.get(i)])
            .flatten()
            .cloned()
            .collect()
    }
    /// The serve that opened the point, if any stroke was charted.
    pub fn opening(&self) -> Option<&Token> {
        self.server.first()
    }
}

impl From<(Vec<&str>, Vec<&str>, bool)> for PointRecord {
    fn from((server, receiver, won): (Vec<&str>, Vec<&str>, bool)) -> Self {
        Self {
            server: server.into_iter().map(Token::from).collect(),
            receiver: receiver.into_iter().map(Token::from).collect(),
            won,
        }
    }
}
