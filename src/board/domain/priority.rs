//! Task priority levels and their display metadata.

use super::ParsePriorityError;
use serde::{Deserialize, Serialize};

/// Task priority level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Low-urgency work.
    Low,
    /// Normal work. The default for newly created tasks.
    #[default]
    Medium,
    /// Urgent work, shown first.
    High,
}

impl Priority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Returns the display sort rank. Lower ranks sort first, so high
    /// priority precedes medium, which precedes low.
    #[must_use]
    pub const fn display_rank(self) -> u8 {
        match self {
            Self::High => 0,
            Self::Medium => 1,
            Self::Low => 2,
        }
    }

    /// Returns the presentation colour token for this priority.
    ///
    /// The lookup is total: the closed enum leaves no unmapped priority, so
    /// no neutral fallback token is needed.
    #[must_use]
    pub const fn color_token(self) -> &'static str {
        match self {
            Self::Low => "green",
            Self::Medium => "yellow",
            Self::High => "red",
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}
