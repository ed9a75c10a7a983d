//! Core logic for a land-plot listing site.
//!
//! Two independent components back the listing pages, plus the domain
//! helpers they share:
//!
//! - [`core::richtext`] - allow-list sanitization and block-structure
//!   normalization for rich-text listing descriptions
//! - [`core::cache`] - a revisioned, TTL-bound cache for fetched listing
//!   documents
//! - [`models`] - the listing document and utility-status types
//! - [`utils`] - Polish-locale formatting and tag normalization
//!
//! ```
//! use plotlist::{ListingCache, sanitize};
//!
//! let clean = sanitize("<p onclick=\"boom()\">Działka nad jeziorem</p>");
//! assert_eq!(clean, "<p>Działka nad jeziorem</p>");
//!
//! let mut cache = ListingCache::new();
//! cache.set("plot-7", clean, Some("2024-06-10"));
//! assert!(cache.get("plot-7", Some("2024-06-10"), None).is_some());
//! ```

pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use crate::core::cache::{Clock, ListingCache, SystemClock};
pub use crate::core::richtext::{
    Alignment, FontSize, FontSizeError, SizeUnit, align_blocks, normalize_blocks, sanitize,
    set_font_size_blocks, to_plain_text,
};
pub use crate::models::{LabelVariant, Listing, UtilityStatus};
