//! Identifier types for the ED scenario simulator
//!
//! Patients, staff members and beds are identified by sequential, human-readable
//! codes (`P0001`, `S001`, `EDBed1`). Each identifier serializes as its display
//! string and parses back from it.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of beds in the emergency department pool
pub const BED_POOL_SIZE: u8 = 5;

/// Unique identifier for a simulated patient, assigned in arrival order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PatientId(pub u32);

impl PatientId {
    /// Create the identifier for the patient at a zero-based arrival index
    pub fn from_index(index: usize) -> Self {
        Self(index as u32 + 1)
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{:04}", self.0)
    }
}

impl FromStr for PatientId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_prefixed(s, "P").map(PatientId)
    }
}

/// Unique identifier for a staff member on the roster
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StaffId(pub u32);

impl StaffId {
    /// Create the identifier for the staff member at a zero-based roster index
    pub fn from_index(index: usize) -> Self {
        Self(index as u32 + 1)
    }

    /// Build the ordered identifier set for a roster of `staff_count` members
    pub fn roster(staff_count: usize) -> Vec<StaffId> {
        (0..staff_count).map(StaffId::from_index).collect()
    }
}

impl fmt::Display for StaffId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{:03}", self.0)
    }
}

impl FromStr for StaffId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_prefixed(s, "S").map(StaffId)
    }
}

/// Identifier of a physical ED bed
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BedId(pub u8);

impl BedId {
    /// All beds in the pool, in order
    pub fn pool() -> Vec<BedId> {
        (1..=BED_POOL_SIZE).map(BedId).collect()
    }
}

impl fmt::Display for BedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EDBed{}", self.0)
    }
}

impl FromStr for BedId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number = parse_prefixed(s, "EDBed")?;
        u8::try_from(number)
            .ok()
            .filter(|n| (1..=BED_POOL_SIZE).contains(n))
            .map(BedId)
            .ok_or_else(|| format!("Bed number out of range: {}", s))
    }
}

fn parse_prefixed(s: &str, prefix: &str) -> Result<u32, String> {
    s.strip_prefix(prefix)
        .filter(|digits| !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()))
        .and_then(|digits| digits.parse::<u32>().ok())
        .ok_or_else(|| format!("Invalid identifier '{}': expected {}<number>", s, prefix))
}

macro_rules! string_serde {
    ($($ty:ty),*) => {
        $(
            impl Serialize for $ty {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: Serializer,
                {
                    serializer.collect_str(self)
                }
            }

            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: Deserializer<'de>,
                {
                    let s = String::deserialize(deserializer)?;
                    s.parse().map_err(serde::de::Error::custom)
                }
            }
        )*
    };
}

string_serde!(PatientId, StaffId, BedId);
