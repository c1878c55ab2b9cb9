use super::*;
use crate::*;

/// Aggregate counters over simulated points.
///
/// Tallies from independent batches or threads combine with `+`, so the
/// aggregate is the same whatever order points were played in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    wins: Count,
    losses: Count,
    capped: Count,
    turns: Count,
}

impl Tally {
    pub fn wins(&self) -> Count {
        self.wins
    }
    pub fn losses(&self) -> Count {
        self.losses
    }
    /// Losses that came from hitting the turn cap.
    pub fn capped(&self) -> Count {
        self.capped
    }
    pub fn points(&self) -> Count {
        self.wins + self.losses
    }
    /// wins / (wins + losses), or zero before any point is played.
    pub fn rate(&self) -> Probability {
        match self.points() {
            0 => 0.,
            n => self.wins as Probability / n as Probability,
        }
    }
    /// Mean shots the user played per point.
    pub fn rally(&self) -> Probability {
        match self.points() {
            0 => 0.,
            n => self.turns as Probability / n as Probability,
        }
    }
}

impl From<&Point> for Tally {
    fn from(point: &Point) -> Self {
        Self {
            wins: point.outcome().is_won() as Count,
            losses: !point.outcome().is_won() as Count,
            capped: point.capped() as Count,
            turns: point.turns(),
        }
    }
}

impl From<Point> for Tally {
    fn from(point: Point) -> Self {
        Self::from(&point)
    }
}

impl std::ops::Add for Tally {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self {
            wins: self.wins + other.wins,
            losses: self.losses + other.losses,
            capped: self.capped + other.capped,
            turns: self.turns + other.turns,
        }
    }
}

impl std::iter::Sum for Tally {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = Self>,
    {
        iter.fold(Self::default(), std::ops::Add::add)
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<20}{:<20}{:<20}{:<20}{:<20}",
            format!("points {}", self.points()),
            format!("wins {}", self.wins),
            format!("losses {}", self.losses),
            format!("rate {:.4}", self.rate()),
            format!("rally {:.2}", self.rally()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_rate_is_zero() {
        assert_eq!(Tally::default().rate(), 0.);
        assert_eq!(Tally::default().rally(), 0.);
    }

    #[test]
    fn combines() {
        let a = Tally {
            wins: 3,
            losses: 1,
            capped: 0,
            turns: 10,
        };
        let b = Tally {
            wins: 1,
            losses: 3,
            capped: 1,
            turns: 6,
        };
        let total = [a, b].into_iter().sum::<Tally>();
        assert_eq!(total, a + b);
        assert_eq!(total.points(), 8);
        assert_eq!(total.rate(), 0.5);
        assert_eq!(total.rally(), 2.);
        assert_eq!(total.capped(), 1);
    }
}
