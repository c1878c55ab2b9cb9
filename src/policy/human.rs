use super::*;
use crate::tokens::Token;
use colored::Colorize;
use dialoguer::Input;
use rand::Rng;

/// A strategy typed in at the terminal, one shot per prompt.
///
/// Each call shows the opponent's last stroke and reads the reply.
/// Nothing is validated: an unknown shot is a legal way to lose.
pub struct Human;

impl Strategy for Human {
    fn choose<R>(&self, prompt: &Token, _: &mut R) -> Token
    where
        R: Rng,
    {
        let label = match prompt.is_waiting() {
            true => "you serve".to_string(),
            false => format!("opponent played {}", prompt.as_str().bold()),
        };
        Input::<String>::new()
            .with_prompt(label)
            .report(false)
            .validate_with(|input: &String| -> Result<(), &str> {
                match input.trim().is_empty() {
                    true => Err("enter a shot"),
                    false => Ok(()),
                }
            })
            .interact_text()
            .map(Token::from)
            .unwrap_or_else(|e| {
                log::warn!("could not read shot ({}), playing {}", e, Token::default_shot());
                Token::default_shot()
            })
    }
}

impl std::fmt::Debug for Human {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Human")
    }
}
