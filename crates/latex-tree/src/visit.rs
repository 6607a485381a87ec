//! Generic tree traversal.

use crate::ast::Node;

/// Dispatches a node to the handler for its variant.
///
/// Implementors provide one handler per variant; the provided [`map`]
/// method performs the dispatch with an exhaustive match, so adding a
/// variant breaks every implementation at compile time rather than at run
/// time.
///
/// The associated `Output` type covers both uses of the walker: a
/// tree-to-tree transformation sets `Output = Node` (see [`TreeCopier`]),
/// while an aggregating visitor accumulates into internal state and sets
/// `Output = ()` (see [`Renderer`](crate::Renderer)).
///
/// [`map`]: Mapper::map
pub trait Mapper {
    type Output;

    fn map_text(&mut self, text: &str) -> Self::Output;
    fn map_end_of_line(&mut self) -> Self::Output;
    fn map_container(&mut self, content: &[Node]) -> Self::Output;
    fn map_group(&mut self, content: &[Node]) -> Self::Output;
    fn map_control_sequence(
        &mut self,
        name: &str,
        args: &[Node],
        optargs: &[Node],
    ) -> Self::Output;
    fn map_environment(
        &mut self,
        name: &str,
        args: &[Node],
        optargs: &[Node],
        content: &[Node],
    ) -> Self::Output;

    fn map(&mut self, node: &Node) -> Self::Output {
        match node {
            Node::Text(text) => self.map_text(text),
            Node::EndOfLine => self.map_end_of_line(),
            Node::Container(content) => self.map_container(content),
            Node::Group(content) => self.map_group(content),
            Node::ControlSequence {
                name,
                args,
                optargs,
            } => self.map_control_sequence(name, args, optargs),
            Node::Environment {
                name,
                args,
                optargs,
                content,
            } => self.map_environment(name, args, optargs, content),
        }
    }
}

/// Rebuilds a structurally identical tree.
///
/// The base case for tree-to-tree transformations: wrap it in your own
/// mapper and delegate the handlers whose output should stay unchanged.
#[derive(Debug, Default)]
pub struct TreeCopier;

impl TreeCopier {
    fn map_all(&mut self, nodes: &[Node]) -> Vec<Node> {
        nodes.iter().map(|node| self.map(node)).collect()
    }
}

impl Mapper for TreeCopier {
    type Output = Node;

    fn map_text(&mut self, text: &str) -> Node {
        Node::Text(text.to_owned())
    }

    fn map_end_of_line(&mut self) -> Node {
        Node::EndOfLine
    }

    fn map_container(&mut self, content: &[Node]) -> Node {
        Node::Container(self.map_all(content))
    }

    fn map_group(&mut self, content: &[Node]) -> Node {
        Node::Group(self.map_all(content))
    }

    fn map_control_sequence(&mut self, name: &str, args: &[Node], optargs: &[Node]) -> Node {
        Node::ControlSequence {
            name: name.to_owned(),
            args: self.map_all(args),
            optargs: self.map_all(optargs),
        }
    }

    fn map_environment(
        &mut self,
        name: &str,
        args: &[Node],
        optargs: &[Node],
        content: &[Node],
    ) -> Node {
        Node::Environment {
            name: name.to_owned(),
            args: self.map_all(args),
            optargs: self.map_all(optargs),
            content: self.map_all(content),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Node::Container(vec![
            Node::text("intro"),
            Node::EndOfLine,
            Node::Environment {
                name: "itemize".to_owned(),
                args: vec![],
                optargs: vec![],
                content: vec![
                    Node::ControlSequence {
                        name: "item".to_owned(),
                        args: vec![],
                        optargs: vec![],
                    },
                    Node::text(" first"),
                ],
            },
            Node::Group(vec![Node::text("grouped")]),
        ])
    }

    #[test]
    fn copier_rebuilds_identical_tree() {
        let tree = sample();
        let copy = TreeCopier.map(&tree);
        assert_eq!(copy, tree);
    }

    /// An aggregating mapper: counts text bytes, ignoring markup.
    struct TextLength(usize);

    impl Mapper for TextLength {
        type Output = ();

        fn map_text(&mut self, text: &str) {
            self.0 += text.len();
        }

        fn map_end_of_line(&mut self) {}

        fn map_container(&mut self, content: &[Node]) {
            for node in content {
                self.map(node);
            }
        }

        fn map_group(&mut self, content: &[Node]) {
            self.map_container(content);
        }

        fn map_control_sequence(&mut self, _name: &str, args: &[Node], optargs: &[Node]) {
            self.map_container(args);
            self.map_container(optargs);
        }

        fn map_environment(
            &mut self,
            _name: &str,
            args: &[Node],
            optargs: &[Node],
            content: &[Node],
        ) {
            self.map_container(args);
            self.map_container(optargs);
            self.map_container(content);
        }
    }

    #[test]
    fn mapper_supports_aggregation() {
        let mut counter = TextLength(0);
        counter.map(&sample());
        // "intro" + " first" + "grouped"
        assert_eq!(counter.0, 18);
    }
}
