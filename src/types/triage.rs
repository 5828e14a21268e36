//! Triage acuity level
//!
//! This module contains the [`TriageLevel`] newtype, the only way a triage level
//! enters a patient row. Construction validates the 1..=5 range.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Acuity rank from 1 (most severe) to 5 (least severe)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct TriageLevel(u8);

impl TriageLevel {
    /// Most severe level
    pub const MOST_SEVERE: TriageLevel = TriageLevel(1);

    /// Least severe level
    pub const LEAST_SEVERE: TriageLevel = TriageLevel(5);

    /// Create a triage level, or `None` outside 1..=5
    pub fn new(level: u8) -> Option<Self> {
        (1..=5).contains(&level).then_some(Self(level))
    }

    /// Numeric value of the level
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Whether this level is acute enough for admission (level 1 or 2)
    pub fn is_admissible(&self) -> bool {
        self.0 <= 2
    }
}

impl fmt::Display for TriageLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for TriageLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let level = u8::deserialize(deserializer)?;
        TriageLevel::new(level).ok_or_else(|| {
            serde::de::Error::custom(format!("triage level must be between 1 and 5, got {}", level))
        })
    }
}
