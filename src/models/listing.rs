//! Listing document model.
//!
//! The shape of a plot listing as fetched from the document store and
//! cached between page views. Field names mirror the stored documents
//! (camelCase), and every field has a default so partially filled
//! documents still deserialize.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::richtext::{sanitize, to_plain_text};

use super::utility::UtilityStatus;

/// A single plot listing.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Listing {
    pub id: String,
    pub title: String,
    /// Asking price in PLN.
    pub price: Option<f64>,
    /// Plot area in square meters.
    pub area: Option<f64>,
    /// Rich-text description; sanitized before display or persistence.
    pub description: String,
    /// Normalized `#Tag-Chips`.
    pub tags: Vec<String>,
    /// Utility statuses keyed by utility name (water, power, gas, ...).
    pub utilities: BTreeMap<String, UtilityStatus>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Listing {
    /// Price per square meter, when both price and a positive area exist.
    pub fn price_per_sqm(&self) -> Option<f64> {
        match (self.price, self.area) {
            (Some(price), Some(area)) if area > 0.0 => Some(price / area),
            _ => None,
        }
    }

    /// Description restricted to the rich-text allow-list.
    pub fn sanitized_description(&self) -> String {
        sanitize(&self.description)
    }

    /// Description as plain text (always derived through the sanitizer).
    pub fn plain_description(&self) -> String {
        to_plain_text(&self.description)
    }
}
