// src/models/distance.rs
use serde::Serialize;
use std::fmt;

/// An inclusive band of plausible trip lengths, in miles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DistanceBand {
    pub min: u32,
    pub max: u32,
}

impl DistanceBand {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Position inside the band for a fraction in `[0, 1)`, rounded to whole miles.
    pub fn at(&self, fraction: f64) -> u32 {
        let span = f64::from(self.max - self.min);
        self.min + (fraction * span).round() as u32
    }

    pub fn contains(&self, miles: u32) -> bool {
        miles >= self.min && miles <= self.max
    }
}

/// Which fallback tier produced an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum MatchTier {
    /// `table[start][destination]` hit.
    Exact,
    /// `table[destination][start]` hit.
    Reverse,
    /// Averaged over every known city pair whose names overlap the query.
    PartialMatch { hits: usize },
    /// Nothing matched; derived from the query strings alone.
    Synthetic,
}

impl MatchTier {
    pub fn is_table_backed(&self) -> bool {
        !matches!(self, MatchTier::Synthetic)
    }
}

impl fmt::Display for MatchTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchTier::Exact => write!(f, "exact table match"),
            MatchTier::Reverse => write!(f, "reverse table match"),
            MatchTier::PartialMatch { hits } => write!(
                f,
                "partial match over {} city pair{}",
                hits,
                if *hits == 1 { "" } else { "s" }
            ),
            MatchTier::Synthetic => write!(f, "synthetic estimate"),
        }
    }
}

/// Result of a distance estimate along with the normalized city keys it was computed from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistanceEstimate {
    pub miles: u32,
    pub tier: MatchTier,
    pub start_city: String,
    pub destination_city: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_position() {
        let band = DistanceBand::new(60, 120);
        assert_eq!(band.at(0.0), 60);
        assert_eq!(band.at(0.67), 100);
        assert_eq!(band.at(0.99), 119);
        assert!(band.contains(60));
        assert!(band.contains(120));
        assert!(!band.contains(121));
    }

    #[test]
    fn test_tier_display() {
        assert_eq!(MatchTier::Exact.to_string(), "exact table match");
        assert_eq!(
            MatchTier::PartialMatch { hits: 1 }.to_string(),
            "partial match over 1 city pair"
        );
        assert_eq!(
            MatchTier::PartialMatch { hits: 3 }.to_string(),
            "partial match over 3 city pairs"
        );
        assert!(!MatchTier::Synthetic.is_table_backed());
        assert!(MatchTier::Reverse.is_table_backed());
    }
}
