use crate::history::PointRecord;
use crate::sampling::Bag;
use crate::tokens::Token;
use crate::tokens::Vocabulary;
use crate::*;
use std::collections::HashMap;

/// Observed continuations, indexed by prompt and then by shot.
///
/// Built once from historical rallies and never mutated afterwards.
/// Buckets keep every observation, so frequency is encoded by repetition
/// and a uniform draw from a bucket reproduces the historical odds.
/// Pairs never observed have no bucket at all.
///
/// Nested maps let a query borrow both keys as `&str` with no allocation.
#[derive(Debug, Clone, Default)]
pub struct TransitionTable {
    buckets: HashMap<Token, HashMap<Token, Bag<Token>>>,
    observations: Count,
}

impl TransitionTable {
    /// Walk every rally, prefixed by the waiting token so the serve is
    /// itself a shot answering `X`, and record each (prompt, shot) → next
    /// window where the prompt, shot and continuation are all in vocabulary.
    pub fn build(records: &[PointRecord], vocabulary: &Vocabulary) -> Self {
        let mut table = Self::default();
        let mut skipped = 0;
        for record in records {
            let rally = std::iter::once(Token::waiting())
                .chain(record.rally())
                .collect::<Vec<Token>>();
            for (i, window) in rally.windows(2).enumerate() {
                let (prompt, shot) = (&window[0], &window[1]);
                if !vocabulary.is_prompt(prompt.as_str()) || !vocabulary.is_shot(shot.as_str()) {
                    continue;
                }
                match rally.get(i + 2) {
                    Some(next) if vocabulary.is_prompt(next.as_str()) => {
                        table.witness(prompt.clone(), shot.clone(), next.clone())
                    }
                    _ => skipped += 1,
                }
            }
        }
        log::debug!("{:<32}{}", "transition windows skipped", skipped);
        log::info!("{:<32}{}", "transition table built", table);
        table
    }

    fn witness(&mut self, prompt: Token, shot: Token, next: Token) {
        self.observations += 1;
        self.buckets
            .entry(prompt)
            .or_default()
            .entry(shot)
            .or_default()
            .push(next);
    }

    pub fn bucket(&self, prompt: &str, shot: &str) -> Option<&Bag<Token>> {
        self.buckets.get(prompt)?.get(shot)
    }
    /// Total continuations recorded across all buckets.
    pub fn observations(&self) -> Count {
        self.observations
    }
    /// Number of (prompt, shot) pairs with at least one observation.
    pub fn pairs(&self) -> Count {
        self.buckets.values().map(HashMap::len).sum()
    }
    pub fn iter(&self) -> impl Iterator<Item = (&Token, &Token, &Bag<Token>)> {
        self.buckets
            .iter()
            .flat_map(|(prompt, shots)| shots.iter().map(move |(shot, bag)| (prompt, shot, bag)))
    }
}

impl std::fmt::Display for TransitionTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} pairs, {} observations",
            self.pairs(),
            self.observations()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<PointRecord> {
        vec![
            PointRecord::from((vec!["4", "b2"], vec!["f1", "f3*"], false)),
            PointRecord::from((vec!["4", "b2"], vec!["f1", "f1n@"], true)),
            PointRecord::from((vec!["4", "f3"], vec!["f1", "b2d#"], true)),
            PointRecord::from((vec!["5*"], vec![], true)),
        ]
    }

    #[test]
    fn repetition_kept() {
        let records = records();
        let table = TransitionTable::build(&records, &Vocabulary::learn(&records));
        let serve = table.bucket("X", "4").unwrap();
        assert_eq!(serve.len(), 3);
        assert_eq!(serve.count(&Token::from("f1")), 3);
        let rally = table.bucket("f1", "b2").unwrap();
        assert_eq!(rally.len(), 2);
        assert_eq!(rally.count(&Token::from("f3*")), 1);
        assert_eq!(rally.count(&Token::from("f1n@")), 1);
    }

    #[test]
    fn nothing_invented() {
        let records = records();
        let table = TransitionTable::build(&records, &Vocabulary::learn(&records));
        assert!(table.bucket("f1", "f1").is_none());
        assert!(table.bucket("b2", "f1").is_none());
        assert!(table.bucket("X", "5*").is_none());
        assert_eq!(table.pairs(), 4);
        assert_eq!(table.observations(), 9);
    }

    #[test]
    fn continuations_are_prompts() {
        let records = records();
        let vocabulary = Vocabulary::learn(&records);
        let table = TransitionTable::build(&records, &vocabulary);
        assert!(table
            .iter()
            .flat_map(|(_, _, bag)| bag.iter())
            .all(|next| vocabulary.is_prompt(next.as_str())));
    }

    #[test]
    fn out_of_vocabulary_skipped() {
        let records = records();
        let vocabulary = Vocabulary::from(
            ["4", "f1", "f3*"]
                .into_iter()
                .map(Token::from)
                .collect::<Vec<_>>(),
        );
        let table = TransitionTable::build(&records, &vocabulary);
        assert_eq!(table.bucket("X", "4").map(Bag::len), Some(3));
        assert!(table.bucket("f1", "b2").is_none());
        assert!(table.bucket("4", "f1").is_none());
    }

    #[test]
    fn deterministic() {
        let records = records();
        let vocabulary = Vocabulary::learn(&records);
        let a = TransitionTable::build(&records, &vocabulary);
        let b = TransitionTable::build(&records, &vocabulary);
        for (prompt, shot, bag) in a.iter() {
            assert_eq!(Some(bag), b.bucket(prompt.as_str(), shot.as_str()));
        }
        assert_eq!(a.pairs(), b.pairs());
    }
}
