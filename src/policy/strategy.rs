use crate::tokens::Token;
use rand::Rng;

/// The user's side of the exchange: pick a shot in answer to a prompt.
pub trait Strategy {
    fn choose<R>(&self, prompt: &Token, rng: &mut R) -> Token
    where
        R: Rng;
}
