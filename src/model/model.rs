use super::*;
use crate::tokens::Token;
use crate::*;
use rand::Rng;

/// Rarity-thresholded view over a `TransitionTable`.
///
/// A bucket is trusted only when it holds strictly more than `threshold`
/// continuations. Anything rarer, or never seen, resolves to the opponent
/// netting an unforced error. The cutoff is all-or-nothing: a trusted
/// bucket is sampled as recorded, with no fallback mass mixed in.
///
/// The fallback is terminal and won, so a point played against a model
/// can only be extended by transitions history has actually shown often.
#[derive(Debug, Clone)]
pub struct Model<'a> {
    table: &'a TransitionTable,
    threshold: Count,
    fallback: Token,
}

impl<'a> Model<'a> {
    pub fn new(table: &'a TransitionTable, threshold: Count) -> Self {
        Self {
            table,
            threshold,
            fallback: Token::fallback(),
        }
    }
    pub fn table(&self) -> &TransitionTable {
        self.table
    }
    pub fn threshold(&self) -> Count {
        self.threshold
    }
}

impl<'a> From<&'a TransitionTable> for Model<'a> {
    fn from(table: &'a TransitionTable) -> Self {
        Self::new(table, RARITY_THRESHOLD)
    }
}

impl Responder for Model<'_> {
    fn respond<R>(&self, prompt: &Token, shot: &Token, rng: &mut R) -> Token
    where
        R: Rng,
    {
        self.table
            .bucket(prompt.as_str(), shot.as_str())
            .filter(|bucket| bucket.len() > self.threshold)
            .and_then(|bucket| bucket.sample(rng))
            .unwrap_or(&self.fallback)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::PointRecord;
    use crate::tokens::Outcome;
    use crate::tokens::Vocabulary;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn table() -> TransitionTable {
        let records = vec![
            PointRecord::from((vec!["4", "b2"], vec!["f3", "f3*"], false)),
            PointRecord::from((vec!["4", "b2"], vec!["f3", "f1n@"], true)),
            PointRecord::from((vec!["4", "b2"], vec!["f3", "f1n@"], true)),
            PointRecord::from((vec!["4", "b2"], vec!["f3", "v1"], true)),
            PointRecord::from((vec!["5", "f1"], vec!["b1", "b2*"], false)),
        ];
        TransitionTable::build(&records, &Vocabulary::learn(&records))
    }

    #[test]
    fn unseen_always_fallback() {
        let ref table = table();
        let ref mut rng = SmallRng::seed_from_u64(0);
        for threshold in [0, 1, 5] {
            let model = Model::new(table, threshold);
            for _ in 0..100 {
                let next = model.respond(&Token::from("f1"), &Token::from("f1"), rng);
                assert_eq!(next, Token::fallback());
            }
        }
    }

    #[test]
    fn rare_is_fallback() {
        let ref table = table();
        let ref mut rng = SmallRng::seed_from_u64(0);
        let (prompt, shot) = (Token::from("X"), Token::from("5"));
        assert_eq!(table.bucket("X", "5").map(|b| b.len()), Some(1));
        assert_eq!(Model::new(table, 1).respond(&prompt, &shot, rng), Token::fallback());
        assert_eq!(Model::new(table, 0).respond(&prompt, &shot, rng), Token::from("b1"));
    }

    /// Exactly at the threshold is still too rare; one more is trusted.
    #[test]
    fn cutoff_is_strict() {
        let ref table = table();
        let ref mut rng = SmallRng::seed_from_u64(0);
        let (prompt, shot) = (Token::from("f3"), Token::from("b2"));
        assert_eq!(table.bucket("f3", "b2").map(|b| b.len()), Some(4));
        assert!((0..100)
            .map(|_| Model::new(table, 4).respond(&prompt, &shot, rng))
            .all(|next| next == Token::fallback()));
        assert!((0..100)
            .map(|_| Model::new(table, 3).respond(&prompt, &shot, rng))
            .all(|next| table.bucket("f3", "b2").unwrap().count(&next) > 0));
    }

    #[test]
    fn trusted_converges_to_history() {
        const DRAWS: usize = 40_000;
        const TOLERANCE: Probability = 0.02;
        let ref table = table();
        let ref mut rng = SmallRng::seed_from_u64(42);
        let model = Model::from(table);
        let (prompt, shot) = (Token::from("f3"), Token::from("b2"));
        let bucket = table.bucket("f3", "b2").unwrap();
        let mut hits = std::collections::HashMap::<Token, usize>::new();
        for _ in 0..DRAWS {
            *hits.entry(model.respond(&prompt, &shot, rng)).or_default() += 1;
        }
        assert!(hits.keys().all(|next| bucket.count(next) > 0));
        for (next, n) in hits {
            let observed = n as Probability / DRAWS as Probability;
            let expected = bucket.density(&next);
            assert!((observed - expected).abs() < TOLERANCE, "{}: {} vs {}", next, observed, expected);
        }
    }

    #[test]
    fn out_of_vocabulary_shot_is_won() {
        let ref table = table();
        let ref mut rng = SmallRng::seed_from_u64(0);
        let next = Model::from(table).respond(&Token::from("f3"), &Token::from("zz9"), rng);
        assert_eq!(next.outcome(), Some(Outcome::Won));
    }
}
