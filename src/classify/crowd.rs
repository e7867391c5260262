//! Crowd level classification

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Bound, ThresholdTable};

/// How crowded an attraction is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CrowdLevel {
    Low,
    Medium,
    High,
    VeryHigh,
}

impl fmt::Display for CrowdLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
            Self::VeryHigh => write!(f, "very-high"),
        }
    }
}

/// Upper bounds are inclusive
pub const CROWD_LEVELS: ThresholdTable<CrowdLevel> = ThresholdTable::new(
    &[
        (Bound::AtMost(30.0), CrowdLevel::Low),
        (Bound::AtMost(60.0), CrowdLevel::Medium),
        (Bound::AtMost(80.0), CrowdLevel::High),
    ],
    CrowdLevel::VeryHigh,
);

/// Classify a crowd level (0-100)
pub fn crowd_level(level: u8) -> CrowdLevel {
    CROWD_LEVELS.classify(f64::from(level))
}
