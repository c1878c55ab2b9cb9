use super::*;
use crate::history::PointRecord;
use std::collections::BTreeSet;
use std::collections::HashSet;

/// The two fixed token sets the simulator works over.
///
/// Allowed shots are exactly the possible prompts with terminal tokens and
/// the waiting token removed: a player cannot choose to miss, and cannot
/// choose to wait. The waiting token is always a prompt, since every point
/// opens from it.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    prompts: HashSet<Token>,
    shots: HashSet<Token>,
}

impl Vocabulary {
    /// Collect every token that appears in any historical rally.
    pub fn learn(records: &[PointRecord]) -> Self {
        Self::from(
            records
                .iter()
                .flat_map(|record| record.rally())
                .collect::<Vec<Token>>(),
        )
    }
    pub fn is_prompt(&self, token: &str) -> bool {
        self.prompts.contains(token)
    }
    pub fn is_shot(&self, token: &str) -> bool {
        self.shots.contains(token)
    }
    /// Sorted, for stable display and iteration.
    pub fn prompts(&self) -> Vec<&Token> {
        self.prompts.iter().collect::<BTreeSet<_>>().into_iter().collect()
    }
    /// Sorted, for stable display and iteration.
    pub fn shots(&self) -> Vec<&Token> {
        self.shots.iter().collect::<BTreeSet<_>>().into_iter().collect()
    }
    pub fn terminals(&self) -> impl Iterator<Item = &Token> {
        self.prompts.iter().filter(|t| t.is_terminal())
    }
}

impl From<Vec<Token>> for Vocabulary {
    fn from(prompts: Vec<Token>) -> Self {
        let prompts = prompts
            .into_iter()
            .chain(std::iter::once(Token::waiting()))
            .collect::<HashSet<Token>>();
        let shots = prompts
            .iter()
            .filter(|t| !t.is_terminal())
            .filter(|t| !t.is_waiting())
            .cloned()
            .collect::<HashSet<Token>>();
        Self { prompts, shots }
    }
}

impl std::fmt::Display for Vocabulary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} prompts, {} shots, {} terminals",
            self.prompts.len(),
            self.shots.len(),
            self.terminals().count()
        )
    }
}
