//! Structural normalizer for editable rich-text surfaces.
//!
//! Guarantees every top-level child of an editing container is a block
//! element, so per-block operations (alignment, font size) have a stable
//! target. Runs of loose inline content are wrapped in a paragraph, a bare
//! line break becomes its own paragraph, and an empty container gains a
//! single `<p><br></p>` so the caret always has somewhere to land.

use crate::config::BLOCK_TAGS;

use super::tree::{self, Element, Node};

/// Normalize the top-level structure of a fragment.
pub fn normalize_blocks(html: &str) -> String {
    tree::serialize(&normalize_fragment(tree::parse(html)))
}

/// Tree-level normalization pass.
pub fn normalize_fragment(nodes: Vec<Node>) -> Vec<Node> {
    let mut blocks = Vec::new();
    let mut run: Vec<Node> = Vec::new();

    for node in nodes {
        match node {
            Node::Element(element) if is_block_tag(&element.tag) => {
                flush_run(&mut blocks, &mut run);
                blocks.push(Node::Element(element));
            }
            Node::Element(element) if element.tag == "br" => {
                // A loose line break becomes its own empty paragraph.
                flush_run(&mut blocks, &mut run);
                blocks.push(paragraph(vec![Node::Element(element)]));
            }
            // Whitespace between blocks is formatting noise, not content.
            Node::Text(text) if run.is_empty() && text.trim().is_empty() => {}
            inline => run.push(inline),
        }
    }
    flush_run(&mut blocks, &mut run);

    if blocks.is_empty() {
        blocks.push(paragraph(vec![Node::Element(Element::new("br"))]));
    }
    blocks
}

/// Whether a tag is accepted as a top-level block.
pub fn is_block_tag(tag: &str) -> bool {
    BLOCK_TAGS.contains(&tag)
}

fn flush_run(blocks: &mut Vec<Node>, run: &mut Vec<Node>) {
    if !run.is_empty() {
        blocks.push(paragraph(std::mem::take(run)));
    }
}

fn paragraph(children: Vec<Node>) -> Node {
    let mut p = Element::new("p");
    p.children = children;
    Node::Element(p)
}
