//! Inline presentation filters: `class` and `style` attribute policy.
//!
//! Only two presentation channels survive sanitization: classes with an
//! approved semantic prefix, and a single `font-size` style declaration.
//! [`FontSize`] is the parsed form of the latter; it accepts the loose
//! values users type into the editor ("14", "1,5em", " 16 px ") and
//! renders a normalized declaration.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::config::ALLOWED_CLASS_PREFIXES;

// =============================================================================
// Font Size
// =============================================================================

/// Units a font size may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SizeUnit {
    /// Default unit for bare numeric values.
    #[default]
    Px,
    Em,
    Rem,
    Percent,
}

impl SizeUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Px => "px",
            Self::Em => "em",
            Self::Rem => "rem",
            Self::Percent => "%",
        }
    }
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized font size: non-negative value plus unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSize {
    value: f64,
    unit: SizeUnit,
}

/// Errors produced when parsing a font size.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FontSizeError {
    #[error("font size value is empty")]
    Empty,
    #[error("unrecognized font size '{0}'")]
    Unrecognized(String),
}

static FONT_SIZE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(\d*(?:\.\d+)?)(px|em|rem|%)?$").unwrap());

impl FontSize {
    pub fn new(value: f64, unit: SizeUnit) -> Self {
        Self { value, unit }
    }

    /// Convenience constructor for the default unit.
    pub fn px(value: f64) -> Self {
        Self::new(value, SizeUnit::Px)
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> SizeUnit {
        self.unit
    }
}

impl FromStr for FontSize {
    type Err = FontSizeError;

    /// Parse a user-entered font size.
    ///
    /// Whitespace is stripped anywhere in the value and a decimal comma is
    /// accepted. A bare number gets the default unit.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.trim().is_empty() {
            return Err(FontSizeError::Empty);
        }
        let compact: String = raw
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| if c == ',' { '.' } else { c })
            .collect();

        let captures = FONT_SIZE_RE
            .captures(&compact)
            .ok_or_else(|| FontSizeError::Unrecognized(raw.trim().to_string()))?;

        let number = &captures[1];
        if number.is_empty() {
            return Err(FontSizeError::Unrecognized(raw.trim().to_string()));
        }
        let value: f64 = number
            .parse()
            .map_err(|_| FontSizeError::Unrecognized(raw.trim().to_string()))?;

        let unit = match captures.get(2) {
            Some(unit) => match unit.as_str().to_ascii_lowercase().as_str() {
                "px" => SizeUnit::Px,
                "em" => SizeUnit::Em,
                "rem" => SizeUnit::Rem,
                _ => SizeUnit::Percent,
            },
            None => SizeUnit::default(),
        };

        Ok(Self { value, unit })
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

// =============================================================================
// Attribute Filters
// =============================================================================

/// Filter a `class` attribute value.
///
/// Keeps classes with an approved prefix, de-duplicated in first-seen
/// order. `None` means the attribute should be dropped.
pub fn sanitize_classes(value: &str) -> Option<String> {
    let mut kept: Vec<&str> = Vec::new();
    for class in value.split_whitespace() {
        let allowed = ALLOWED_CLASS_PREFIXES
            .iter()
            .any(|prefix| class.starts_with(prefix));
        if allowed && !kept.contains(&class) {
            kept.push(class);
        }
    }
    if kept.is_empty() {
        None
    } else {
        Some(kept.join(" "))
    }
}

/// Filter a `style` attribute value.
///
/// Only `font-size` declarations with a parseable value survive, rendered
/// in normalized form. `None` means the attribute should be dropped.
pub fn sanitize_style(value: &str) -> Option<String> {
    let mut kept: Vec<String> = Vec::new();
    for part in value.split(';') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let Some((property, raw_value)) = part.split_once(':') else {
            continue;
        };
        if property.trim().to_lowercase() != "font-size" {
            continue;
        }
        if let Ok(size) = raw_value.trim().parse::<FontSize>() {
            let declaration = format!("font-size: {}", size);
            if !kept.contains(&declaration) {
                kept.push(declaration);
            }
        }
    }
    if kept.is_empty() {
        None
    } else {
        Some(kept.join("; "))
    }
}
