use crate::history::PointRecord;
use crate::sampling::Bag;
use crate::tokens::Token;
use crate::tokens::Vocabulary;
use crate::*;
use rand::Rng;

/// Starting conditions for simulated points.
///
/// Either the user serves, starting from the waiting token, or the user
/// receives a serve drawn from the historical openings (repetition as
/// weight, so common serves come up as often as they did). An opponent
/// ace in the pool is a legitimate start: the point is lost before the
/// user strikes the ball.
#[derive(Debug, Clone)]
pub struct Serves {
    openings: Bag<Token>,
    waiting: Token,
    ours: Probability,
}

impl Serves {
    /// Opening serves of every record, restricted to the prompt vocabulary.
    pub fn collect(records: &[PointRecord], vocabulary: &Vocabulary) -> Self {
        let openings = records
            .iter()
            .filter_map(PointRecord::opening)
            .filter(|serve| vocabulary.is_prompt(serve.as_str()))
            .cloned()
            .collect::<Bag<Token>>();
        log::debug!("{:<32}{}", "historical serves collected", openings.len());
        Self {
            openings,
            waiting: Token::waiting(),
            ours: SERVE_PROBABILITY,
        }
    }
    /// Every point starts from the waiting token.
    pub fn ours() -> Self {
        Self {
            openings: Bag::default(),
            waiting: Token::waiting(),
            ours: 1.,
        }
    }
    pub fn openings(&self) -> &Bag<Token> {
        &self.openings
    }
    /// Draw the prompt a point starts from. Without historical openings
    /// the user always serves.
    pub fn start<R>(&self, rng: &mut R) -> Token
    where
        R: Rng,
    {
        match rng.random_bool(self.ours) {
            true => self.waiting.clone(),
            false => self.openings.sample(rng).unwrap_or(&self.waiting).clone(),
        }
    }
}
