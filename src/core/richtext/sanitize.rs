//! Allow-list sanitizer for listing rich text.
//!
//! Total over all inputs: malformed markup degrades to whatever the lenient
//! fragment parse produces, and the output is restricted to the allow-listed
//! tags and attributes. Unknown tags are unwrapped rather than deleted, so
//! content never disappears just because of an unexpected wrapper; `script`
//! and `style` are the exception, dropped together with their payload.

use crate::config::{ALLOWED_TAGS, DROP_CONTENT_TAGS};

use super::href::{sanitize_href, sanitize_target};
use super::style::{sanitize_classes, sanitize_style};
use super::tree::{self, Node};

/// Sanitize an HTML fragment.
///
/// Deterministic and idempotent: `sanitize(sanitize(x)) == sanitize(x)`.
pub fn sanitize(html: &str) -> String {
    tree::serialize(&sanitize_fragment(tree::parse(html)))
}

/// Plain-text projection of a fragment.
///
/// Always derived from the sanitized tree, so markup that would be dropped
/// can never leak into a "plain text" read.
pub fn to_plain_text(html: &str) -> String {
    let mut out = String::new();
    tree::collect_text(&sanitize_fragment(tree::parse(html)), &mut out);
    out
}

/// Tree-level sanitization pass.
pub fn sanitize_fragment(nodes: Vec<Node>) -> Vec<Node> {
    let mut out = Vec::new();
    for node in nodes {
        sanitize_into(node, &mut out);
    }
    out
}

fn sanitize_into(node: Node, out: &mut Vec<Node>) {
    let mut element = match node {
        Node::Text(text) => {
            out.push(Node::Text(text));
            return;
        }
        Node::Element(element) => element,
    };

    if DROP_CONTENT_TAGS.contains(&element.tag.as_str()) {
        return;
    }

    if !ALLOWED_TAGS.contains(&element.tag.as_str()) {
        // Unwrap: sanitize the children and splice them in place.
        for child in element.children {
            sanitize_into(child, out);
        }
        return;
    }

    element.attrs = filter_attrs(&element.tag, std::mem::take(&mut element.attrs));
    element.children = sanitize_fragment(std::mem::take(&mut element.children));

    if element.tag == "a" {
        // An anchor that lost its href is a wrapper without a purpose;
        // promote its content instead of deleting it.
        if element.attr("href").is_none() {
            out.append(&mut element.children);
            return;
        }
        if element.attr("target") == Some("_blank") {
            element.set_attr("rel", "noopener noreferrer");
        }
    }

    out.push(Node::Element(element));
}

fn filter_attrs(tag: &str, attrs: Vec<(String, String)>) -> Vec<(String, String)> {
    let mut kept = Vec::new();
    for (name, value) in attrs {
        match name.as_str() {
            "class" => {
                if let Some(classes) = sanitize_classes(&value) {
                    kept.push((name, classes));
                }
            }
            "style" => {
                if let Some(style) = sanitize_style(&value) {
                    kept.push((name, style));
                }
            }
            "href" if tag == "a" => {
                if let Some(href) = sanitize_href(&value) {
                    kept.push((name, href));
                }
            }
            "target" if tag == "a" => {
                if let Some(target) = sanitize_target(&value) {
                    kept.push((name, target.to_string()));
                }
            }
            _ => {}
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn test_plain_text_passthrough() {
        assert_eq!(sanitize("just text"), "just text");
    }

    #[test]
    fn test_script_dropped_with_content() {
        assert_eq!(sanitize("<script>alert(1)</script>hello"), "hello");
    }

    #[test]
    fn test_style_dropped_with_content() {
        assert_eq!(sanitize("a<style>p { color: red }</style>b"), "ab");
    }

    #[test]
    fn test_unknown_tag_unwrapped() {
        assert_eq!(
            sanitize("<section><p>keep me</p></section>"),
            "<p>keep me</p>"
        );
        assert_eq!(sanitize("<font size=\"7\">big</font>"), "big");
    }

    #[test]
    fn test_event_handler_attributes_dropped() {
        assert_eq!(sanitize("<u onclick=\"evil()\">x</u>"), "<u>x</u>");
        assert_eq!(sanitize("<p OnMouseOver=\"evil()\">x</p>"), "<p>x</p>");
    }

    #[test]
    fn test_forbidden_scheme_unwraps_anchor() {
        assert_eq!(sanitize("<a href=\"javascript:alert(1)\">x</a>"), "x");
    }

    #[test]
    fn test_anchor_without_href_unwrapped() {
        assert_eq!(sanitize("<a target=\"_blank\">x</a>"), "x");
        assert_eq!(sanitize("<a>plain</a>"), "plain");
    }

    #[test]
    fn test_blank_target_gets_rel() {
        assert_eq!(
            sanitize("<a href=\"https://example.com\" target=\"_blank\">x</a>"),
            "<a href=\"https://example.com\" target=\"_blank\" rel=\"noopener noreferrer\">x</a>"
        );
    }

    #[test]
    fn test_existing_rel_replaced_not_duplicated() {
        assert_eq!(
            sanitize("<a href=\"/x\" rel=\"nofollow\" target=\"_blank\">x</a>"),
            "<a href=\"/x\" target=\"_blank\" rel=\"noopener noreferrer\">x</a>"
        );
    }

    #[test]
    fn test_rel_stripped_without_blank_target() {
        assert_eq!(
            sanitize("<a href=\"/x\" rel=\"nofollow\">x</a>"),
            "<a href=\"/x\">x</a>"
        );
        assert_eq!(
            sanitize("<a href=\"/x\" target=\"_self\">x</a>"),
            "<a href=\"/x\">x</a>"
        );
    }

    #[test]
    fn test_style_filtered_to_font_size() {
        assert_eq!(
            sanitize("<div style=\"font-size:14px; color:red\">x</div>"),
            "<div style=\"font-size: 14px\">x</div>"
        );
    }

    #[test]
    fn test_class_filtered_to_allowed_prefixes() {
        assert_eq!(
            sanitize("<div class=\"rt-align-center foo\">x</div>"),
            "<div class=\"rt-align-center\">x</div>"
        );
    }

    #[test]
    fn test_comments_removed() {
        assert_eq!(sanitize("a<!-- secret -->b"), "ab");
    }

    #[test]
    fn test_nested_structure_preserved() {
        let input = "<ul><li><strong>one</strong></li><li>two</li></ul>";
        assert_eq!(sanitize(input), input);
    }

    #[test]
    fn test_idempotent_on_messy_input() {
        let inputs = [
            "<p>unclosed <b>bold",
            "<div class=\"x rt-size-sm\"><span style=\"font-size: 12\">a</span></div>",
            "<a href=\" /trimmed \">x</a>",
            "text & <entities> &amp; more",
            "<pre>\n\ncode</pre>",
        ];
        for input in inputs {
            let once = sanitize(input);
            assert_eq!(sanitize(&once), once, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_to_plain_text_goes_through_sanitizer() {
        assert_eq!(to_plain_text("<script>alert(1)</script><p>hi</p>"), "hi");
        assert_eq!(to_plain_text("<b>bold</b> and plain"), "bold and plain");
        assert_eq!(to_plain_text(""), "");
    }
}
