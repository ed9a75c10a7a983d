//! Tag-chip normalization.
//!
//! Listing tags are entered free-form and rendered as `#Kebab-Case` chips.
//! Normalization strips the leading hashes, kebab-cases separators, keeps
//! only letters (including Polish diacritics), digits and dashes, and
//! fixes up per-segment casing. Acronym segments stay uppercase except at
//! the front of the chip.

use std::sync::LazyLock;

use regex::Regex;

static SEPARATOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[_\s]+").unwrap());
static DASH_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").unwrap());
static DISALLOWED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9A-Za-zĄąĆćĘęŁłŃńÓóŚśŹźŻż-]").unwrap());

/// Normalize a raw tag into chip form, e.g. `"media  przy drodze"` →
/// `"#Media-przy-drodze"`. Returns `None` when nothing usable remains.
pub fn normalize_tag(raw: &str) -> Option<String> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }
    let text = text.trim_start_matches('#');
    let text = SEPARATOR_RE.replace_all(text, "-");
    let text = DASH_RUN_RE.replace_all(&text, "-");
    let text = DISALLOWED_RE.replace_all(&text, "");
    if text.is_empty() {
        return None;
    }

    let segments: Vec<&str> = text.split('-').filter(|segment| !segment.is_empty()).collect();
    if segments.is_empty() {
        return None;
    }

    let formatted: Vec<String> = segments
        .iter()
        .enumerate()
        .map(|(index, segment)| format_segment(index, segment))
        .collect();
    Some(format!("#{}", formatted.join("-")))
}

fn format_segment(index: usize, segment: &str) -> String {
    if segment.chars().all(|c| c.is_ascii_digit()) {
        return segment.to_string();
    }
    let is_acronym = segment.chars().count() > 1 && segment == segment.to_uppercase();
    if is_acronym {
        if index == 0 {
            return capitalize(&segment.to_lowercase());
        }
        return segment.to_string();
    }
    let lower = segment.to_lowercase();
    if index == 0 { capitalize(&lower) } else { lower }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
