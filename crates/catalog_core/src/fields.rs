//! Declarative field extraction on top of the tree adapter.

use crate::tree::Node;

/// How a value is read once its node has been located.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accessor {
    /// Trimmed text content.
    Text,
    /// Raw attribute value.
    Attr(&'static str),
}

/// Where a value lives relative to a node and how to read it.
///
/// A `Field` without a selector reads from the node it is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    selector: Option<&'static str>,
    accessor: Accessor,
}

impl Field {
    pub const fn text(selector: &'static str) -> Self {
        Self {
            selector: Some(selector),
            accessor: Accessor::Text,
        }
    }

    pub const fn attr(selector: &'static str, name: &'static str) -> Self {
        Self {
            selector: Some(selector),
            accessor: Accessor::Attr(name),
        }
    }

    /// An attribute of the node the field is applied to.
    pub const fn own_attr(name: &'static str) -> Self {
        Self {
            selector: None,
            accessor: Accessor::Attr(name),
        }
    }

    /// Value from the first match, `None` when the node or attribute is absent.
    pub fn extract(&self, node: Node<'_>) -> Option<String> {
        let target = match self.selector {
            Some(selector) => node.find(selector)?,
            None => node,
        };
        self.read(target)
    }

    /// Value from every match, in document order. Matches lacking the
    /// attribute are skipped.
    pub fn extract_all(&self, node: Node<'_>) -> Vec<String> {
        match self.selector {
            Some(selector) => node
                .find_all(selector)
                .into_iter()
                .filter_map(|target| self.read(target))
                .collect(),
            None => self.read(node).into_iter().collect(),
        }
    }

    fn read(&self, target: Node<'_>) -> Option<String> {
        match self.accessor {
            Accessor::Text => Some(target.text().trim().to_string()),
            Accessor::Attr(name) => target.attr(name).map(str::to_string),
        }
    }
}

/// Concatenated text of every node matching `selector`, trimmed.
///
/// `None` only when nothing matches.
pub fn text_of_all(node: Node<'_>, selector: &str) -> Option<String> {
    let matches = node.find_all(selector);
    if matches.is_empty() {
        return None;
    }
    let joined: String = matches.iter().map(Node::text).collect();
    Some(joined.trim().to_string())
}

/// Nodes matching `selector` that are expected at fixed positions.
///
/// Reading past the end of a short match set yields `None` for that position
/// only, so a missing trailing sibling never hides the ones before it.
#[derive(Debug)]
pub struct Positional<'a> {
    nodes: Vec<Node<'a>>,
}

impl<'a> Positional<'a> {
    pub fn collect(node: Node<'a>, selector: &str) -> Self {
        Self {
            nodes: node.find_all(selector),
        }
    }

    pub fn at(&self, index: usize) -> Option<Node<'a>> {
        self.nodes.get(index).copied()
    }

    /// Trimmed text at `index`.
    pub fn text_at(&self, index: usize) -> Option<String> {
        self.at(index).map(|node| node.text().trim().to_string())
    }
}
