use crate::tokens::Token;
use rand::Rng;

/// The opponent's side of the exchange: given what the user faced and
/// what the user hit back, produce the next prompt.
pub trait Responder {
    fn respond<R>(&self, prompt: &Token, shot: &Token, rng: &mut R) -> Token
    where
        R: Rng;
}
