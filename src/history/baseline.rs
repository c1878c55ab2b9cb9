use super::*;
use crate::*;

/// Win rate the charted player actually achieved over the dataset.
/// Reported next to simulated results for context only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Baseline {
    won: Count,
    played: Count,
}

impl Baseline {
    pub fn won(&self) -> Count {
        self.won
    }
    pub fn played(&self) -> Count {
        self.played
    }
    pub fn rate(&self) -> Probability {
        match self.played {
            0 => 0.,
            n => self.won as Probability / n as Probability,
        }
    }
}

impl From<&[PointRecord]> for Baseline {
    fn from(records: &[PointRecord]) -> Self {
        Self {
            won: records.iter().filter(|r| r.won).count(),
            played: records.len(),
        }
    }
}

impl std::fmt::Display for Baseline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "historical {:.4} ({} of {} points)",
            self.rate(),
            self.won,
            self.played
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_dataset() {
        assert_eq!(Baseline::from(&[] as &[PointRecord]).rate(), 0.);
    }

    #[test]
    fn share_of_points_won() {
        let records = vec![
            PointRecord::from((vec!["4*"], vec![], true)),
            PointRecord::from((vec!["5"], vec!["f1*"], false)),
            PointRecord::from((vec!["6", "b2"], vec!["f3", "f1@"], true)),
            PointRecord::from((vec!["4n@"], vec![], false)),
        ];
        let baseline = Baseline::from(records.as_slice());
        assert_eq!(baseline.won(), 2);
        assert_eq!(baseline.played(), 4);
        assert_eq!(baseline.rate(), 0.5);
    }
}
