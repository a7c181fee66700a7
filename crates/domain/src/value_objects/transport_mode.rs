//! Transport mode value object

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// How the traveller moves between origin and destination
///
/// Chosen once per lookup and fixed for the route it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    /// On foot
    Walking,
    /// By car
    Driving,
}

impl TransportMode {
    /// All supported modes, in display order
    pub const ALL: [Self; 2] = [Self::Walking, Self::Driving];

    /// Lowercase identifier used in configuration and on the command line
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Walking => "walking",
            Self::Driving => "driving",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Walking => "Walking",
            Self::Driving => "Driving",
        }
    }

    /// Emoji representation for terminal output
    #[must_use]
    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::Walking => "🚶",
            Self::Driving => "🚗",
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TransportMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "walking" | "walk" | "foot" => Ok(Self::Walking),
            "driving" | "drive" | "car" | "automobile" => Ok(Self::Driving),
            _ => Err(DomainError::UnknownTransportMode(s.to_string())),
        }
    }
}
