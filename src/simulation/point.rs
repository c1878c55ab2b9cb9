use crate::model::Responder;
use crate::policy::Strategy;
use crate::tokens::Outcome;
use crate::tokens::Token;
use crate::*;
use rand::Rng;

/// One point played out to termination.
///
/// The only state is the current prompt. Each turn the strategy answers
/// it with a shot, the responder answers the shot with the next prompt,
/// and the new prompt is classified by its trailing marker. A start
/// prompt that is already terminal (an ace against us) ends the point
/// with zero turns.
///
/// Points that reach `TURN_CAP` without a terminal prompt are recorded as
/// lost and flagged, so a strategy that never lets a rally end cannot
/// stall an evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Point {
    outcome: Outcome,
    turns: usize,
    capped: bool,
    last: Token,
}

impl Point {
    pub fn play<S, M, R>(start: Token, strategy: &S, responder: &M, rng: &mut R) -> Self
    where
        S: Strategy,
        M: Responder,
        R: Rng,
    {
        let mut prompt = start;
        let mut turns = 0;
        loop {
            if let Some(outcome) = prompt.outcome() {
                return Self {
                    outcome,
                    turns,
                    capped: false,
                    last: prompt,
                };
            }
            if turns == TURN_CAP {
                log::debug!("{:<32}{}", "rally capped at prompt", prompt);
                return Self {
                    outcome: Outcome::Lost,
                    turns,
                    capped: true,
                    last: prompt,
                };
            }
            let shot = strategy.choose(&prompt, rng);
            prompt = responder.respond(&prompt, &shot, rng);
            turns += 1;
        }
    }
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
    /// Shots the user played.
    pub fn turns(&self) -> usize {
        self.turns
    }
    pub fn capped(&self) -> bool {
        self.capped
    }
    /// The prompt the point ended on.
    pub fn last(&self) -> &Token {
        &self.last
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.capped {
            true => write!(f, "{} after {} shots (rally capped)", self.outcome, self.turns),
            false => write!(f, "{} on {} after {} shots", self.outcome, self.last, self.turns),
        }
    }
}
