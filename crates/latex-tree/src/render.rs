//! Serialization of a tree back to LaTeX source.

use crate::ast::Node;
use crate::visit::Mapper;

/// Renders a tree back to LaTeX source text.
///
/// For trees produced by parsing, the output reproduces the input exactly,
/// except that whitespace between a command and its arguments (discarded
/// during parsing) and comments do not reappear.
pub fn render(node: &Node) -> String {
    let mut renderer = Renderer::new();
    renderer.map(node);
    renderer.into_inner()
}

/// The stringifying visitor behind [`render`].
///
/// Output accumulates in an internal buffer so that sibling handlers append
/// in document order.
#[derive(Debug, Default)]
pub struct Renderer {
    out: String,
}

impl Renderer {
    pub fn new() -> Self {
        Self { out: String::new() }
    }

    pub fn into_inner(self) -> String {
        self.out
    }

    fn push(&mut self, c: char) {
        self.out.push(c);
    }

    fn push_str(&mut self, s: &str) {
        self.out.push_str(s);
    }

    fn map_all(&mut self, nodes: &[Node]) {
        for node in nodes {
            self.map(node);
        }
    }

    /// Optional arguments render before mandatory ones, matching the order
    /// they are consumed from the source.
    fn push_arguments(&mut self, args: &[Node], optargs: &[Node]) {
        for optarg in optargs {
            self.push('[');
            self.map(optarg);
            self.push(']');
        }
        for arg in args {
            self.push('{');
            self.map(arg);
            self.push('}');
        }
    }
}

impl Mapper for Renderer {
    type Output = ();

    fn map_text(&mut self, text: &str) {
        self.push_str(text);
    }

    fn map_end_of_line(&mut self) {
        self.push('\n');
    }

    fn map_container(&mut self, content: &[Node]) {
        self.map_all(content);
    }

    fn map_group(&mut self, content: &[Node]) {
        self.push('{');
        self.map_all(content);
        self.push('}');
    }

    fn map_control_sequence(&mut self, name: &str, args: &[Node], optargs: &[Node]) {
        self.push('\\');
        self.push_str(name);
        self.push_arguments(args, optargs);
    }

    fn map_environment(&mut self, name: &str, args: &[Node], optargs: &[Node], content: &[Node]) {
        self.push_str("\\begin{");
        self.push_str(name);
        self.push('}');
        self.push_arguments(args, optargs);
        self.map_all(content);
        self.push_str("\\end{");
        self.push_str(name);
        self.push('}');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_text_and_lines() {
        let tree = Node::Container(vec![Node::text("a"), Node::EndOfLine, Node::text("b")]);
        assert_eq!(render(&tree), "a\nb");
    }

    #[test]
    fn renders_groups_nested() {
        let tree = Node::Group(vec![
            Node::text("a"),
            Node::Group(vec![Node::text("b")]),
            Node::text("c"),
        ]);
        assert_eq!(render(&tree), "{a{b}c}");
    }

    #[test]
    fn renders_control_sequence_with_arguments() {
        let tree = Node::ControlSequence {
            name: "sqrt".to_owned(),
            args: vec![Node::text("2")],
            optargs: vec![Node::text("3")],
        };
        assert_eq!(render(&tree), r"\sqrt[3]{2}");
    }

    #[test]
    fn bare_control_sequence_has_no_trailing_space() {
        let tree = Node::ControlSequence {
            name: "alpha".to_owned(),
            args: vec![],
            optargs: vec![],
        };
        assert_eq!(render(&tree), r"\alpha");
    }

    #[test]
    fn renders_environment() {
        let tree = Node::Environment {
            name: "tabular".to_owned(),
            args: vec![Node::text("cc")],
            optargs: vec![],
            content: vec![Node::text("x")],
        };
        assert_eq!(render(&tree), r"\begin{tabular}{cc}x\end{tabular}");
    }

    #[test]
    fn display_uses_render() {
        let tree = Node::Group(vec![Node::text("hi")]);
        assert_eq!(tree.to_string(), "{hi}");
    }
}
