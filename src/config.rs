//! Library configuration.
//!
//! Centralizes the fixed policy tables used throughout the crate: the
//! rich-text allow-lists, the href scheme list, and cache defaults.

use std::time::Duration;

// =============================================================================
// Rich Text Policy
// =============================================================================

/// Tags that survive rich-text sanitization. Everything else is unwrapped
/// (children kept) or, for [`DROP_CONTENT_TAGS`], removed outright.
pub const ALLOWED_TAGS: &[&str] = &[
    "a", "b", "blockquote", "br", "code", "div", "em", "h1", "h2", "h3", "h4", "h5", "h6", "i",
    "li", "ol", "p", "pre", "span", "strong", "u", "ul",
];

/// Tags whose content must never be exposed as text when the tag itself is
/// rejected. The generic rule unwraps unknown tags and keeps their children;
/// for these the children are executable or style payload, not content.
pub const DROP_CONTENT_TAGS: &[&str] = &["script", "style"];

/// Class prefixes that survive sanitization. Classes carry per-block
/// presentation (alignment, size variants) chosen in the listing editor.
pub const ALLOWED_CLASS_PREFIXES: &[&str] = &["rt-align-", "rt-size-"];

/// Schemes an anchor `href` may use. Fragment links (`#…`) and scheme-less
/// paths are always allowed.
pub const ALLOWED_HREF_SCHEMES: &[&str] = &["http:", "https:", "mailto:", "tel:"];

// =============================================================================
// Block Structure
// =============================================================================

/// Tags the structural normalizer accepts as top-level blocks of an
/// editable surface. Anything else at the top level is wrapped in a
/// paragraph.
pub const BLOCK_TAGS: &[&str] = &[
    "blockquote", "div", "h1", "h2", "h3", "h4", "h5", "h6", "li", "ol", "p", "pre", "ul",
];

// =============================================================================
// Cache Configuration
// =============================================================================

/// Default time-to-live for cached listing documents.
///
/// An editor sees their own changes after at most this long even if the
/// revision hint is never bumped; bumping the hint refreshes immediately.
pub const DEFAULT_LISTING_CACHE_TTL: Duration = Duration::from_secs(5 * 60);

// =============================================================================
// Display Configuration
// =============================================================================

/// Placeholder shown where a listing field has no value.
pub const PLACEHOLDER_TEXT: &str = "—";

/// Suffix for formatted prices.
pub const CURRENCY_SUFFIX: &str = "zł";

/// Suffix for formatted plot areas.
pub const AREA_SUFFIX: &str = "m²";
