//! Core components: rich-text processing and the listing document cache.

pub mod cache;
pub mod richtext;
