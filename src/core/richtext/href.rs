//! Anchor href and target policy.
//!
//! Listing descriptions may link out, but only through a small set of safe
//! shapes: fragment links, a few approved schemes, and scheme-less paths.
//! Anything with an unapproved scheme (`javascript:`, `data:`, ...) is
//! rejected.

use crate::config::ALLOWED_HREF_SCHEMES;

/// Result of href validation.
#[derive(Debug, Clone, PartialEq)]
pub enum HrefValidation {
    /// Href is safe to keep (trimmed).
    Valid(String),
    /// Href must be dropped.
    Invalid(HrefValidationError),
}

/// Reasons an href is rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum HrefValidationError {
    /// Href is empty or whitespace-only
    Empty,
    /// Scheme is not in the approved list
    SchemeNotAllowed(String),
    /// Scheme-less href contains whitespace
    ContainsWhitespace,
}

impl std::fmt::Display for HrefValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "href is empty"),
            Self::SchemeNotAllowed(scheme) => write!(f, "scheme '{}' is not allowed", scheme),
            Self::ContainsWhitespace => write!(f, "href contains whitespace"),
        }
    }
}

/// Validate an anchor href.
///
/// Accepts, in order:
/// 1. Fragment links (`#section`)
/// 2. Approved schemes (`http:`, `https:`, `mailto:`, `tel:`, any case)
/// 3. Paths (`/`, `./`, `../` prefixes)
/// 4. Bare relative paths: no colon and no whitespace
pub fn validate_href(value: &str) -> HrefValidation {
    let value = value.trim();

    if value.is_empty() {
        return HrefValidation::Invalid(HrefValidationError::Empty);
    }

    if value.starts_with('#') {
        return HrefValidation::Valid(value.to_string());
    }

    if has_allowed_scheme(value) {
        return HrefValidation::Valid(value.to_string());
    }

    if value.starts_with('/') || value.starts_with("./") || value.starts_with("../") {
        return HrefValidation::Valid(value.to_string());
    }

    if let Some((scheme, _)) = value.split_once(':') {
        return HrefValidation::Invalid(HrefValidationError::SchemeNotAllowed(
            scheme.to_lowercase(),
        ));
    }

    if value.contains(char::is_whitespace) {
        return HrefValidation::Invalid(HrefValidationError::ContainsWhitespace);
    }

    HrefValidation::Valid(value.to_string())
}

/// Check whether the value starts with an approved scheme prefix.
fn has_allowed_scheme(value: &str) -> bool {
    let value_lower = value.to_lowercase();
    ALLOWED_HREF_SCHEMES
        .iter()
        .any(|scheme| value_lower.starts_with(scheme))
}

/// Sanitizer-facing wrapper: the kept value, or `None` to drop the attribute.
pub fn sanitize_href(value: &str) -> Option<String> {
    match validate_href(value) {
        HrefValidation::Valid(href) => Some(href),
        HrefValidation::Invalid(_) => None,
    }
}

/// Anchor `target` policy: only `_blank` (any case, trimmed) is kept.
pub fn sanitize_target(value: &str) -> Option<&'static str> {
    if value.trim().eq_ignore_ascii_case("_blank") {
        Some("_blank")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_hrefs() {
        assert!(matches!(
            validate_href("https://example.com/offers"),
            HrefValidation::Valid(_)
        ));
        assert!(matches!(
            validate_href("HTTP://EXAMPLE.COM"),
            HrefValidation::Valid(_)
        ));
        assert!(matches!(
            validate_href("mailto:biuro@example.com"),
            HrefValidation::Valid(_)
        ));
        assert!(matches!(
            validate_href("tel:+48123456789"),
            HrefValidation::Valid(_)
        ));
        assert!(matches!(validate_href("#details"), HrefValidation::Valid(_)));
        assert!(matches!(validate_href("/offers"), HrefValidation::Valid(_)));
        assert!(matches!(
            validate_href("./details.html"),
            HrefValidation::Valid(_)
        ));
        assert!(matches!(
            validate_href("../index.html"),
            HrefValidation::Valid(_)
        ));
        assert!(matches!(
            validate_href("details.html"),
            HrefValidation::Valid(_)
        ));
    }

    #[test]
    fn test_trims_value() {
        assert_eq!(
            validate_href("  /offers  "),
            HrefValidation::Valid("/offers".to_string())
        );
    }

    #[test]
    fn test_invalid_hrefs() {
        assert_eq!(
            validate_href(""),
            HrefValidation::Invalid(HrefValidationError::Empty)
        );
        assert_eq!(
            validate_href("   "),
            HrefValidation::Invalid(HrefValidationError::Empty)
        );
        assert_eq!(
            validate_href("two words"),
            HrefValidation::Invalid(HrefValidationError::ContainsWhitespace)
        );
        assert_eq!(
            validate_href("javascript:alert(1)"),
            HrefValidation::Invalid(HrefValidationError::SchemeNotAllowed(
                "javascript".to_string()
            ))
        );
        assert_eq!(
            validate_href("DATA:text/html,x"),
            HrefValidation::Invalid(HrefValidationError::SchemeNotAllowed("data".to_string()))
        );
    }

    #[test]
    fn test_sanitize_target() {
        assert_eq!(sanitize_target("_blank"), Some("_blank"));
        assert_eq!(sanitize_target(" _BLANK "), Some("_blank"));
        assert_eq!(sanitize_target("_self"), None);
        assert_eq!(sanitize_target(""), None);
    }
}
