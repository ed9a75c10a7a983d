//! Rich-text processing for listing descriptions.
//!
//! Provides:
//! - [`sanitize`], [`to_plain_text`] - allow-list sanitization of stored or
//!   user-entered markup
//! - [`normalize_blocks`] - block-structure normalization for editable
//!   surfaces
//! - [`align_blocks`], [`set_font_size_blocks`] - per-block formatting
//! - [`Node`], [`parse`], [`serialize`] - the owned fragment tree the
//!   passes operate on

mod format;
mod href;
mod normalize;
mod sanitize;
mod style;
mod tree;

pub use format::{Alignment, align_blocks, set_font_size_blocks};
pub use href::{HrefValidation, HrefValidationError, validate_href};
pub use normalize::{is_block_tag, normalize_blocks, normalize_fragment};
pub use sanitize::{sanitize, sanitize_fragment, to_plain_text};
pub use style::{FontSize, FontSizeError, SizeUnit};
pub use tree::{Element, Node, parse, serialize};
