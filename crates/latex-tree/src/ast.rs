//! The node model.

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::render::render;

/// A node of the parsed document tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Node {
    /// A literal character run. Contains no control sequences, braces or
    /// newlines.
    Text(String),
    /// A newline in the source, kept as its own node so that re-rendering
    /// is line-faithful.
    EndOfLine,
    /// An anonymous sequence of sibling nodes. Used for the document root
    /// and for assembled argument bodies holding more than one node.
    Container(Vec<Node>),
    /// A `{...}` brace group that was not consumed as a command argument.
    Group(Vec<Node>),
    /// A command invocation, e.g. `\frac{a}{b}` or `\sqrt[3]{x}`.
    ControlSequence {
        name: String,
        /// Mandatory arguments, one subtree per `{...}` group.
        args: Vec<Node>,
        /// Optional arguments, one subtree per `[...]` group. May hold
        /// fewer entries than the declared count if the source omitted
        /// trailing `[...]` groups.
        optargs: Vec<Node>,
    },
    /// A matched `\begin{name}...\end{name}` region.
    Environment {
        name: String,
        /// Mandatory arguments attached to the opening `\begin`, the
        /// environment name itself excluded.
        args: Vec<Node>,
        optargs: Vec<Node>,
        /// Everything between `\begin` and `\end`, recursively
        /// restructured.
        content: Vec<Node>,
    },
}

impl Node {
    /// Wraps a sequence of siblings, collapsing a one-element sequence to
    /// its single node.
    pub fn from_nodes(mut nodes: Vec<Node>) -> Node {
        if nodes.len() == 1 {
            nodes.swap_remove(0)
        } else {
            Node::Container(nodes)
        }
    }

    /// Shorthand for a `Text` node.
    pub fn text(text: impl Into<String>) -> Node {
        Node::Text(text.into())
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_nodes_collapses_singleton() {
        let node = Node::from_nodes(vec![Node::text("x")]);
        assert_eq!(node, Node::text("x"));
    }

    #[test]
    fn from_nodes_wraps_other_lengths() {
        assert_eq!(Node::from_nodes(vec![]), Node::Container(vec![]));
        let node = Node::from_nodes(vec![Node::text("a"), Node::EndOfLine]);
        assert_eq!(node, Node::Container(vec![Node::text("a"), Node::EndOfLine]));
    }
}
