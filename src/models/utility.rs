//! Utility (media) connection status for a plot.
//!
//! Listing data arrives from many hands: booleans, numeric codes, Polish
//! and English labels, sometimes a whole object where a string was
//! expected. Everything funnels into the three-state [`UtilityStatus`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Connection status of a single utility (water, power, gas, ...).
///
/// Ordered from worst to best so a list of plots can be ranked by it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum UtilityStatus {
    /// No information or explicitly absent.
    #[default]
    Missing,
    /// Connection planned or under construction.
    Planned,
    /// Connected and usable.
    Available,
}

/// Which label wording to use; the detail page spells "no information"
/// out, the edit form keeps it short.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelVariant {
    #[default]
    Details,
    Edit,
}

const AVAILABLE_SYNONYMS: &[&str] = &[
    "available", "dostepne", "dostępne", "yes", "tak", "true", "1", "on",
];
const PLANNED_SYNONYMS: &[&str] = &[
    "planned", "w drodze", "wdrodze", "droga", "2", "soon", "plan", "planowana",
];
const MISSING_SYNONYMS: &[&str] = &[
    "missing", "brak", "no", "false", "0", "off", "unknown", "n/a", "nie",
];

impl UtilityStatus {
    /// Parse a free-form status string.
    ///
    /// Exact synonyms are matched first, then loose substring fallbacks;
    /// anything unrecognized is [`UtilityStatus::Missing`].
    pub fn parse(raw: &str) -> Self {
        let value = raw.trim().to_lowercase();
        if value.is_empty() {
            return Self::Missing;
        }
        if AVAILABLE_SYNONYMS.contains(&value.as_str()) {
            return Self::Available;
        }
        if PLANNED_SYNONYMS.contains(&value.as_str()) {
            return Self::Planned;
        }
        if MISSING_SYNONYMS.contains(&value.as_str()) {
            return Self::Missing;
        }
        if value.contains("drogi") || value.contains("trakcie") || value.contains("plan") {
            return Self::Planned;
        }
        if value.contains("dost") {
            return Self::Available;
        }
        Self::Missing
    }

    /// Map the numeric codes used by older listing documents.
    pub fn from_code(code: i64) -> Self {
        match code {
            i64::MIN..=0 => Self::Missing,
            1 => Self::Available,
            2 => Self::Planned,
            _ => Self::Available,
        }
    }

    /// Human-readable label (Polish, as shown in the UI).
    pub fn label(self, variant: LabelVariant) -> &'static str {
        match (self, variant) {
            (Self::Missing, LabelVariant::Details) => "Brak informacji",
            (Self::Missing, LabelVariant::Edit) => "Brak",
            (Self::Planned, _) => "W drodze",
            (Self::Available, _) => "Dostępne",
        }
    }
}

impl From<bool> for UtilityStatus {
    fn from(connected: bool) -> Self {
        if connected { Self::Available } else { Self::Missing }
    }
}

impl fmt::Display for UtilityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Missing => "missing",
            Self::Planned => "planned",
            Self::Available => "available",
        };
        f.write_str(name)
    }
}
