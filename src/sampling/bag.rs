use crate::*;
use rand::Rng;

/// An ordered multiset that samples uniformly by position.
///
/// Repetition is the weight: a value pushed three times is drawn three
/// times as often as a value pushed once. This single abstraction backs
/// user policies (prompt → shots), the empirical transition buckets
/// (prompt, shot → next prompts), and the pool of historical serves.
///
/// Uses a `Vec` rather than a count map so that a draw is one index
/// into contiguous memory, which is what the simulation hot loop wants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bag<T>(Vec<T>);

impl<T> Bag<T> {
    /// A distribution that always yields `value`.
    pub fn only(value: T) -> Self {
        Self(vec![value])
    }
    pub fn push(&mut self, value: T) {
        self.0.push(value);
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }
    /// Uniform draw over positions. `None` only for an empty bag.
    pub fn sample<R>(&self, rng: &mut R) -> Option<&T>
    where
        R: Rng,
    {
        match self.0.len() {
            0 => None,
            n => self.0.get(rng.random_range(0..n)),
        }
    }
}

impl<T> Bag<T>
where
    T: PartialEq,
{
    /// Multiplicity of a value.
    pub fn count(&self, value: &T) -> Count {
        self.0.iter().filter(|x| *x == value).count()
    }
    /// Probability that `sample` returns this value.
    pub fn density(&self, value: &T) -> Probability {
        match self.0.len() {
            0 => 0.,
            n => self.count(value) as Probability / n as Probability,
        }
    }
}

/// Empty bags only exist while a transition table is being built.
impl<T> Default for Bag<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

/// User-facing bags must be able to sample.
impl<T> TryFrom<Vec<T>> for Bag<T> {
    type Error = anyhow::Error;
    fn try_from(values: Vec<T>) -> Result<Self, Self::Error> {
        match values.is_empty() {
            true => Err(anyhow::anyhow!("cannot sample from an empty distribution")),
            false => Ok(Self(values)),
        }
    }
}

impl<T> FromIterator<T> for Bag<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self(iter.into_iter().collect())
    }
}
