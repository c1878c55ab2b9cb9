use super::*;
use crate::history::PointRecord;
use crate::model::Model;
use crate::model::TransitionTable;
use crate::policy::Policy;
use crate::policy::Strategy;
use crate::tokens::Vocabulary;
use crate::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::ops::Range;
use std::time::Instant;

/// Plays many independent points of one strategy against one model.
///
/// Every point draws its own serving condition and owns its own RNG,
/// seeded from the run seed and the point's index, so a run is fully
/// determined by its inputs and seed no matter how points are spread over
/// threads. Points are played in batches; between batches the run logs
/// progress and stops early if an interrupt was requested.
pub struct Evaluator<'a, S> {
    model: Model<'a>,
    strategy: &'a S,
    serves: &'a Serves,
    points: usize,
    seed: u64,
}

impl<'a, S> Evaluator<'a, S>
where
    S: Strategy + Sync,
{
    pub fn new(model: Model<'a>, strategy: &'a S, serves: &'a Serves) -> Self {
        Self {
            model,
            strategy,
            serves,
            points: DEFAULT_POINTS,
            seed: 0,
        }
    }
    pub fn points(mut self, points: usize) -> Self {
        self.points = points;
        self
    }
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn evaluate(&self) -> Tally {
        log::info!(
            "{:<32}{} points, threshold {}, seed {}",
            "simulating",
            self.points,
            self.model.threshold(),
            self.seed
        );
        let start = Instant::now();
        let mut checkpoint = start;
        let mut tally = Tally::default();
        let mut played = 0;
        while played < self.points {
            let until = self.points.min(played + EVALUATION_BATCH_SIZE);
            tally = tally + self.batch(played..until);
            played = until;
            if checkpoint.elapsed() >= EVALUATION_LOG_INTERVAL {
                checkpoint = Instant::now();
                log::info!("{}", self.progress(&tally, start));
            }
            if crate::interrupted() && played < self.points {
                log::warn!("evaluation interrupted after {} of {} points", played, self.points);
                break;
            }
        }
        if tally.capped() > 0 {
            log::warn!("{} rallies hit the {} turn cap", tally.capped(), TURN_CAP);
        }
        log::info!("evaluation finished\n{}", self.progress(&tally, start));
        tally
    }

    /// Points are independent; only the counters are reduced.
    #[cfg(feature = "server")]
    fn batch(&self, indices: Range<usize>) -> Tally {
        use rayon::iter::IntoParallelIterator;
        use rayon::iter::ParallelIterator;
        indices
            .into_par_iter()
            .map(|i| self.simulate(i))
            .map(Tally::from)
            .reduce(Tally::default, std::ops::Add::add)
    }
    #[cfg(not(feature = "server"))]
    fn batch(&self, indices: Range<usize>) -> Tally {
        indices.map(|i| self.simulate(i)).map(Tally::from).sum()
    }

    fn simulate(&self, index: usize) -> Point {
        let ref mut rng = self.rng(index);
        let start = self.serves.start(rng);
        Point::play(start, self.strategy, &self.model, rng)
    }

    /// deterministically seeding each point by its index keeps runs
    /// reproducible under any thread schedule
    fn rng(&self, index: usize) -> SmallRng {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::Hash;
        use std::hash::Hasher;
        let ref mut hasher = DefaultHasher::new();
        self.seed.hash(hasher);
        index.hash(hasher);
        SmallRng::seed_from_u64(hasher.finish())
    }

    fn progress(&self, tally: &Tally, start: Instant) -> String {
        let rates = tally.points() as f64 / start.elapsed().as_secs_f64().max(1e-3);
        format!("{}{:<20}", tally, format!("P/sec {:.0}", rates))
    }
}

/// One-call evaluation: build the table from history, then play `points`
/// points of `policy` against it and return the counters.
pub fn evaluate(
    records: &[PointRecord],
    vocabulary: &Vocabulary,
    policy: &Policy,
    points: usize,
    threshold: Count,
    seed: u64,
) -> Tally {
    let ref table = TransitionTable::build(records, vocabulary);
    let ref serves = Serves::collect(records, vocabulary);
    Evaluator::new(Model::new(table, threshold), policy, serves)
        .points(points)
        .seed(seed)
        .evaluate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::Token;

    fn records() -> Vec<PointRecord> {
        vec![
            PointRecord::from((vec!["4", "b2"], vec!["f3", "f1*"], false)),
            PointRecord::from((vec!["4", "b2"], vec!["f3", "f1n@"], true)),
            PointRecord::from((vec!["4", "b3"], vec!["f3", "f2*"], false)),
            PointRecord::from((vec!["4", "b3"], vec!["f3", "b2w@"], true)),
            PointRecord::from((vec!["5", "b2"], vec!["f3", "v1*"], false)),
            PointRecord::from((vec!["5", "f1"], vec!["f3", "b3d#"], true)),
            PointRecord::from((vec!["5*"], vec![], false)),
            PointRecord::from((vec!["6", "f1", "b2"], vec!["f3", "f3", "f1@"], true)),
            PointRecord::from((vec!["6", "f1", "b2"], vec!["f3", "f3", "f3*"], false)),
        ]
    }

    fn policy() -> Policy {
        Policy::try_from(vec![
            ("X", vec!["4", "5", "6"]),
            ("f3", vec!["b2", "b2", "b3", "f1"]),
            ("f1", vec!["f1"]),
        ])
        .unwrap()
    }

    #[test]
    fn seeded_runs_repeat() {
        let records = records();
        let vocabulary = Vocabulary::learn(&records);
        let a = evaluate(&records, &vocabulary, &policy(), 20_000, 1, 99);
        let b = evaluate(&records, &vocabulary, &policy(), 20_000, 1, 99);
        assert_eq!(a, b);
        assert_eq!(a.points(), 20_000);
    }

    #[test]
    fn seeds_differ() {
        let records = records();
        let vocabulary = Vocabulary::learn(&records);
        let a = evaluate(&records, &vocabulary, &policy(), 20_000, 0, 1);
        let b = evaluate(&records, &vocabulary, &policy(), 20_000, 0, 2);
        assert_ne!(a, b);
    }

    #[test]
    fn spans_batches() {
        let records = records();
        let vocabulary = Vocabulary::learn(&records);
        let n = EVALUATION_BATCH_SIZE + 17;
        let tally = evaluate(&records, &vocabulary, &policy(), n, 1, 5);
        assert_eq!(tally.points(), n);
        assert_eq!(tally.capped(), 0);
    }

    #[test]
    fn rate_is_probability() {
        let records = records();
        let vocabulary = Vocabulary::learn(&records);
        let tally = evaluate(&records, &vocabulary, &policy(), 10_000, 0, 7);
        assert!(tally.rate() > 0. && tally.rate() < 1.);
        assert_eq!(tally.wins() + tally.losses(), 10_000);
    }

    /// With no trusted bucket every rally ends on the fallback, except
    /// for points that open with an opponent ace.
    #[test]
    fn nothing_trusted_only_aces_lose() {
        let records = records();
        let vocabulary = Vocabulary::learn(&records);
        let ref table = TransitionTable::build(&records, &vocabulary);
        let ref serves = Serves::collect(&records, &vocabulary);
        let policy = policy();
        let tally = Evaluator::new(Model::new(table, usize::MAX), &policy, serves)
            .points(5_000)
            .evaluate();
        assert!(tally.losses() > 0);
        assert_eq!(tally.capped(), 0);
        let ours = Serves::ours();
        let tally = Evaluator::new(Model::new(table, usize::MAX), &policy, &ours)
            .points(5_000)
            .evaluate();
        assert_eq!(tally.rate(), 1.);
        assert_eq!(tally.rally(), 1.);
    }

    #[test]
    fn foreign_policy_never_stalls() {
        let records = records();
        let vocabulary = Vocabulary::learn(&records);
        let policy = Policy::try_from(vec![("X", vec!["zz"]), ("f3", vec!["??"])]).unwrap();
        assert_eq!(policy.foreign(&vocabulary).len(), 2);
        let tally = evaluate(&records, &vocabulary, &policy, 5_000, 1, 3);
        assert_eq!(tally.points(), 5_000);
        assert_eq!(tally.capped(), 0);
        assert!(tally.rally() <= 1.);
        assert_eq!(Token::from("zz").outcome(), None);
    }
}
