//! Per-block formatting for the listing editor.
//!
//! The editor applies alignment and font size to whole blocks, not inline
//! ranges. Input is sanitized and normalized first, so block indices are
//! stable and the result can be persisted directly.

use std::ops::Range;

use super::normalize::normalize_fragment;
use super::sanitize::sanitize_fragment;
use super::style::FontSize;
use super::tree::{self, Element, Node};

/// Class prefix carrying a block's alignment.
const ALIGN_CLASS_PREFIX: &str = "rt-align-";

/// Block alignment choices offered by the editor toolbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    /// The class the sanitizer allows for this alignment.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Left => "rt-align-left",
            Self::Center => "rt-align-center",
            Self::Right => "rt-align-right",
            Self::Justify => "rt-align-justify",
        }
    }
}

/// Set or clear the alignment of the blocks whose indices fall in `blocks`.
pub fn align_blocks(html: &str, blocks: Range<usize>, alignment: Option<Alignment>) -> String {
    edit_blocks(html, blocks, |element| {
        let mut classes: Vec<String> = element
            .attr("class")
            .unwrap_or_default()
            .split_whitespace()
            .filter(|class| !class.starts_with(ALIGN_CLASS_PREFIX))
            .map(str::to_string)
            .collect();
        if let Some(alignment) = alignment {
            classes.push(alignment.class_name().to_string());
        }
        if classes.is_empty() {
            element.remove_attr("class");
        } else {
            element.set_attr("class", classes.join(" "));
        }
    })
}

/// Set or clear the font size of the blocks whose indices fall in `blocks`.
pub fn set_font_size_blocks(html: &str, blocks: Range<usize>, size: Option<FontSize>) -> String {
    edit_blocks(html, blocks, |element| match size {
        Some(size) => element.set_attr("style", format!("font-size: {}", size)),
        None => element.remove_attr("style"),
    })
}

/// Sanitize, normalize, then apply `edit` to the selected top-level blocks.
fn edit_blocks(html: &str, blocks: Range<usize>, edit: impl Fn(&mut Element)) -> String {
    let mut nodes = normalize_fragment(sanitize_fragment(tree::parse(html)));
    for (index, node) in nodes.iter_mut().enumerate() {
        if !blocks.contains(&index) {
            continue;
        }
        if let Node::Element(element) = node {
            edit(element);
        }
    }
    tree::serialize(&nodes)
}
