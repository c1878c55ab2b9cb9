use super::*;
use crate::sampling::Bag;
use crate::tokens::Token;
use crate::tokens::Vocabulary;
use anyhow::Context;
use rand::Rng;
use std::collections::BTreeMap;
use std::collections::HashMap;

/// A user strategy as a lookup table: prompt → shots, repetition as weight.
///
/// `{"f3": ["b2", "b2", "b3", "v1"]}` answers a cross-court forehand with
/// `b2` half the time. Prompts the table does not mention are answered
/// with the default serve.
///
/// Shots are not checked against any vocabulary. An unknown shot is a
/// legal, losing choice: the model has never seen it and falls back.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "BTreeMap<String, Vec<String>>")]
#[serde(into = "BTreeMap<String, Vec<String>>")]
pub struct Policy {
    rules: HashMap<Token, Bag<Token>>,
    default: Bag<Token>,
}

impl Policy {
    pub fn distribution(&self, prompt: &str) -> &Bag<Token> {
        self.rules.get(prompt).unwrap_or(&self.default)
    }
    pub fn len(&self) -> usize {
        self.rules.len()
    }
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
    /// Shots this policy may play that the vocabulary does not allow.
    pub fn foreign<'a>(&'a self, vocabulary: &Vocabulary) -> Vec<&'a Token> {
        let mut foreign = self
            .rules
            .values()
            .flat_map(Bag::iter)
            .filter(|shot| !vocabulary.is_shot(shot.as_str()))
            .collect::<Vec<_>>();
        foreign.sort();
        foreign.dedup();
        foreign
    }
}

impl Strategy for Policy {
    fn choose<R>(&self, prompt: &Token, rng: &mut R) -> Token
    where
        R: Rng,
    {
        self.distribution(prompt.as_str())
            .sample(rng)
            .cloned()
            .unwrap_or_else(Token::default_shot)
    }
}

/// Serves no matter the prompt.
impl Default for Policy {
    fn default() -> Self {
        Self {
            rules: HashMap::new(),
            default: Bag::only(Token::default_shot()),
        }
    }
}

impl TryFrom<BTreeMap<String, Vec<String>>> for Policy {
    type Error = anyhow::Error;
    fn try_from(map: BTreeMap<String, Vec<String>>) -> Result<Self, Self::Error> {
        let rules = map
            .into_iter()
            .map(|(prompt, shots)| {
                let shots = shots.into_iter().map(Token::from).collect::<Vec<_>>();
                Bag::try_from(shots)
                    .with_context(|| format!("policy entry for prompt {:?}", prompt))
                    .map(|bag| (Token::from(prompt), bag))
            })
            .collect::<anyhow::Result<HashMap<_, _>>>()?;
        Ok(Self {
            rules,
            ..Self::default()
        })
    }
}

impl TryFrom<Vec<(&str, Vec<&str>)>> for Policy {
    type Error = anyhow::Error;
    fn try_from(entries: Vec<(&str, Vec<&str>)>) -> Result<Self, Self::Error> {
        Self::try_from(
            entries
                .into_iter()
                .map(|(prompt, shots)| {
                    (
                        prompt.to_string(),
                        shots.into_iter().map(String::from).collect(),
                    )
                })
                .collect::<BTreeMap<String, Vec<String>>>(),
        )
    }
}

impl From<Policy> for BTreeMap<String, Vec<String>> {
    fn from(policy: Policy) -> Self {
        policy
            .rules
            .into_iter()
            .map(|(prompt, shots)| {
                (
                    String::from(prompt),
                    shots.iter().cloned().map(String::from).collect(),
                )
            })
            .collect()
    }
}

impl std::fmt::Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rules = self.rules.iter().collect::<BTreeMap<_, _>>();
        for (prompt, shots) in rules {
            let shots = shots.iter().map(Token::as_str).collect::<Vec<_>>();
            writeln!(f, "{:<8} → {}", prompt, shots.join(" "))?;
        }
        Ok(())
    }
}
