use super::*;
use crate::*;
use std::borrow::Borrow;
use std::sync::Arc;

/// A single shot or prompt in match-charting notation.
///
/// Tokens are compared and hashed by content. Cloning only bumps a
/// reference count, so tokens can be passed around freely in the
/// simulation hot loop without reallocating.
///
/// Grammar, from left to right:
/// - `X` alone marks a player waiting to serve
/// - a serve direction digit `4`/`5`/`6`, or a shot-type letter with
///   optional direction `1`-`3` and depth `7`-`9`
/// - an optional error kind: `n` net, `w` wide, `d` deep, `x` both
/// - an optional terminal marker: `*` winner, `@` unforced, `#` forced
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Token(Arc<str>);

impl Token {
    pub fn waiting() -> Self {
        Self::from(WAITING_TOKEN)
    }
    pub fn fallback() -> Self {
        Self::from(FALLBACK_TOKEN)
    }
    pub fn default_shot() -> Self {
        Self::from(DEFAULT_SHOT)
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
    pub fn is_waiting(&self) -> bool {
        self.as_str() == WAITING_TOKEN
    }
    pub fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }
    /// Serve tokens open with a direction digit.
    pub fn is_serve(&self) -> bool {
        matches!(self.as_str().chars().next(), Some('4'..='6'))
    }
    pub fn outcome(&self) -> Option<Outcome> {
        Outcome::classify(self.as_str())
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        Self(Arc::from(s.trim()))
    }
}
impl From<String> for Token {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}
impl From<Token> for String {
    fn from(token: Token) -> Self {
        token.as_str().to_string()
    }
}

/// Lets hash maps keyed by `Token` answer `&str` lookups.
impl Borrow<str> for Token {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for Token {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
impl<'de> serde::Deserialize<'de> for Token {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self::from)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}
