//! Owned fragment tree for rich-text processing.
//!
//! Rich text is handled as a parse → transform → serialize pipeline over an
//! owned tree instead of a live DOM. Parsing uses a lenient HTML5 fragment
//! parse (unmatched tags auto-closed, unknown entities kept as text), so
//! every input string produces a tree. Comments, doctypes and processing
//! instructions are dropped during conversion.

use html5ever::tendril::TendrilSink;
use html5ever::{ParseOpts, QualName, local_name, namespace_url, ns, parse_fragment};
use markup5ever_rcdom::{Handle, NodeData, RcDom};

// =============================================================================
// Node Types
// =============================================================================

/// A single node of a parsed rich-text fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A text node; content is unescaped.
    Text(String),
    /// An element with its attributes and children.
    Element(Element),
}

impl Node {
    /// Create a text node.
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    /// Returns the element data if this node is an element.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// Mutable variant of [`Node::as_element`].
    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }
}

/// An element node. Tag and attribute names are ASCII-lowercased at parse
/// time; attribute order is preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    /// Create an empty element with the given tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Value of the first attribute with the given name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(attr_name, _)| attr_name == name)
            .map(|(_, value)| value.as_str())
    }

    /// Replace the attribute's value in place, or append it.
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attrs.iter_mut().find(|(attr_name, _)| attr_name == name) {
            Some(entry) => entry.1 = value,
            None => self.attrs.push((name.to_string(), value)),
        }
    }

    /// Remove every attribute with the given name.
    pub fn remove_attr(&mut self, name: &str) {
        self.attrs.retain(|(attr_name, _)| attr_name != name);
    }
}

/// Elements serialized without a closing tag.
const VOID_TAGS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

// =============================================================================
// Parsing
// =============================================================================

/// Parse an HTML fragment into an owned node tree.
///
/// The fragment is parsed in a `div` context, matching how an editable
/// surface's `innerHTML` is interpreted. Never fails; malformed markup
/// degrades to whatever the lenient parse produces.
pub fn parse(html: &str) -> Vec<Node> {
    let dom = parse_fragment(
        RcDom::default(),
        ParseOpts::default(),
        QualName::new(None, ns!(html), local_name!("div")),
        Vec::new(),
    )
    .one(html);

    // The fragment's nodes are attached under a synthetic root element.
    let document = dom.document;
    let children = document.children.borrow();
    match children.first() {
        Some(root) => convert_children(root),
        None => Vec::new(),
    }
}

fn convert_children(handle: &Handle) -> Vec<Node> {
    handle
        .children
        .borrow()
        .iter()
        .filter_map(convert_node)
        .collect()
}

fn convert_node(handle: &Handle) -> Option<Node> {
    match &handle.data {
        NodeData::Text { contents } => Some(Node::Text(contents.borrow().to_string())),
        NodeData::Element { name, attrs, .. } => {
            let tag = name.local.to_ascii_lowercase().to_string();
            let attrs = attrs
                .borrow()
                .iter()
                .map(|attr| {
                    (
                        attr.name.local.to_ascii_lowercase().to_string(),
                        attr.value.to_string(),
                    )
                })
                .collect();
            // Template contents live outside the child list and stay there,
            // matching how childNodes-based tree walks see a <template>.
            Some(Node::Element(Element {
                tag,
                attrs,
                children: convert_children(handle),
            }))
        }
        // Comments, doctypes, processing instructions.
        _ => None,
    }
}

// =============================================================================
// Serialization
// =============================================================================

/// Serialize a node tree back to an HTML string.
pub fn serialize(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(&mut out, node);
    }
    out
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Text(text) => escape_text(out, text),
        Node::Element(element) => {
            out.push('<');
            out.push_str(&element.tag);
            for (name, value) in &element.attrs {
                out.push(' ');
                out.push_str(name);
                out.push_str("=\"");
                escape_attr(out, value);
                out.push('"');
            }
            out.push('>');
            if VOID_TAGS.contains(&element.tag.as_str()) {
                return;
            }
            // The parser eats one newline right after <pre>; emit an extra
            // one so a reparse yields the same text node.
            if element.tag == "pre"
                && matches!(element.children.first(), Some(Node::Text(text)) if text.starts_with('\n'))
            {
                out.push('\n');
            }
            for child in &element.children {
                write_node(out, child);
            }
            out.push_str("</");
            out.push_str(&element.tag);
            out.push('>');
        }
    }
}

fn escape_text(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

fn escape_attr(out: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

/// Append the text content of the tree (text nodes, document order).
pub fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => collect_text(&element.children, out),
        }
    }
}
