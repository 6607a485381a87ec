//! Second pass: pair `begin`/`end` markers into `Environment` nodes.
//!
//! Environment boundaries are not braces, so the reader emits `\begin` and
//! `\end` as ordinary control sequences; this pass discovers their pairing
//! after the flat sequence exists. Pairing errors carry a zero-width span,
//! since nodes hold no source positions.

use std::vec;

use latex_tree::Node;

use crate::error::{LatexErrKind, LatexError};

/// Restructures one sibling sequence, replacing every matched
/// `begin`/`end` marker pair nested directly in it by an
/// [`Node::Environment`]. `enclosing` is the name of the environment this
/// sequence is the content of, or `None` at the document root.
pub(crate) fn gather_sequence(
    nodes: Vec<Node>,
    enclosing: Option<&str>,
) -> Result<Vec<Node>, Box<LatexError>> {
    let mut iter = nodes.into_iter();
    gather_run(&mut iter, enclosing)
}

/// Consumes siblings up to the `end` marker of `enclosing` (or the end of
/// the sequence at the root). The iterator is shared across recursion
/// levels, so a returning call leaves it just past the consumed `end`.
fn gather_run(
    iter: &mut vec::IntoIter<Node>,
    enclosing: Option<&str>,
) -> Result<Vec<Node>, Box<LatexError>> {
    let mut result = Vec::new();
    while let Some(node) = iter.next() {
        match node {
            Node::ControlSequence { name, args, .. } if name == "end" => {
                let got = marker_name(args)?;
                return match enclosing {
                    Some(expected) if expected == got => Ok(result),
                    Some(expected) => Err(Box::new(LatexError(
                        0..0,
                        LatexErrKind::MismatchedEnvironment {
                            expected: expected.into(),
                            got: got.into(),
                        },
                    ))),
                    None => Err(Box::new(LatexError(
                        0..0,
                        LatexErrKind::UnmatchedEnd(got.into()),
                    ))),
                };
            }
            Node::ControlSequence {
                name,
                args,
                optargs,
            } if name == "begin" => {
                let mut args = args.into_iter();
                let env_name = match args.next() {
                    Some(Node::Text(text)) => text,
                    _ => {
                        return Err(Box::new(LatexError(0..0, LatexErrKind::ExpectedEnvName)));
                    }
                };
                let args = args.map(gather_node).collect::<Result<_, _>>()?;
                let optargs = optargs
                    .into_iter()
                    .map(gather_node)
                    .collect::<Result<_, _>>()?;
                let content = gather_run(iter, Some(env_name.as_str()))?;
                result.push(Node::Environment {
                    name: env_name,
                    args,
                    optargs,
                    content,
                });
            }
            other => result.push(gather_node(other)?),
        }
    }

    match enclosing {
        Some(name) => Err(Box::new(LatexError(
            0..0,
            LatexErrKind::MissingEnd(name.into()),
        ))),
        None => Ok(result),
    }
}

/// Restructures a single node, recursing into all child sequences.
fn gather_node(node: Node) -> Result<Node, Box<LatexError>> {
    Ok(match node {
        Node::Text(_) | Node::EndOfLine => node,
        Node::Container(content) => Node::Container(gather_sequence(content, None)?),
        Node::Group(content) => Node::Group(gather_sequence(content, None)?),
        Node::ControlSequence {
            name,
            args,
            optargs,
        } => Node::ControlSequence {
            name,
            args: args.into_iter().map(gather_node).collect::<Result<_, _>>()?,
            optargs: optargs
                .into_iter()
                .map(gather_node)
                .collect::<Result<_, _>>()?,
        },
        Node::Environment {
            name,
            args,
            optargs,
            content,
        } => Node::Environment {
            name,
            args: args.into_iter().map(gather_node).collect::<Result<_, _>>()?,
            optargs: optargs
                .into_iter()
                .map(gather_node)
                .collect::<Result<_, _>>()?,
            content: gather_sequence(content, None)?,
        },
    })
}

/// The environment name embedded as the marker's first argument.
fn marker_name(args: Vec<Node>) -> Result<String, Box<LatexError>> {
    match args.into_iter().next() {
        Some(Node::Text(text)) => Ok(text),
        _ => Err(Box::new(LatexError(0..0, LatexErrKind::ExpectedEnvName))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marker(kind: &str, env: &str) -> Node {
        Node::ControlSequence {
            name: kind.to_owned(),
            args: vec![Node::text(env)],
            optargs: vec![],
        }
    }

    fn env(name: &str, content: Vec<Node>) -> Node {
        Node::Environment {
            name: name.to_owned(),
            args: vec![],
            optargs: vec![],
            content,
        }
    }

    #[test]
    fn pairs_flat_markers() {
        let nodes = vec![
            Node::text("before"),
            marker("begin", "itemize"),
            Node::text("inside"),
            marker("end", "itemize"),
            Node::text("after"),
        ];
        assert_eq!(
            gather_sequence(nodes, None).unwrap(),
            vec![
                Node::text("before"),
                env("itemize", vec![Node::text("inside")]),
                Node::text("after"),
            ]
        );
    }

    #[test]
    fn pairs_nested_markers() {
        let nodes = vec![
            marker("begin", "a"),
            marker("begin", "b"),
            Node::text("x"),
            marker("end", "b"),
            marker("end", "a"),
        ];
        assert_eq!(
            gather_sequence(nodes, None).unwrap(),
            vec![env("a", vec![env("b", vec![Node::text("x")])])]
        );
    }

    #[test]
    fn pairs_markers_inside_groups() {
        let nodes = vec![Node::Group(vec![
            marker("begin", "center"),
            marker("end", "center"),
        ])];
        assert_eq!(
            gather_sequence(nodes, None).unwrap(),
            vec![Node::Group(vec![env("center", vec![])])]
        );
    }

    #[test]
    fn begin_arguments_become_environment_arguments() {
        let nodes = vec![
            Node::ControlSequence {
                name: "begin".to_owned(),
                args: vec![Node::text("tabular"), Node::text("cc")],
                optargs: vec![Node::text("t")],
            },
            marker("end", "tabular"),
        ];
        assert_eq!(
            gather_sequence(nodes, None).unwrap(),
            vec![Node::Environment {
                name: "tabular".to_owned(),
                args: vec![Node::text("cc")],
                optargs: vec![Node::text("t")],
                content: vec![],
            }]
        );
    }

    #[test]
    fn mismatched_end_is_fatal() {
        let nodes = vec![marker("begin", "itemize"), marker("end", "center")];
        let LatexError(_, kind) = *gather_sequence(nodes, None).unwrap_err();
        assert_eq!(
            kind,
            LatexErrKind::MismatchedEnvironment {
                expected: "itemize".into(),
                got: "center".into(),
            }
        );
    }

    #[test]
    fn unmatched_end_is_fatal() {
        let nodes = vec![marker("end", "itemize")];
        let LatexError(_, kind) = *gather_sequence(nodes, None).unwrap_err();
        assert_eq!(kind, LatexErrKind::UnmatchedEnd("itemize".into()));
    }

    #[test]
    fn missing_end_is_fatal() {
        let nodes = vec![marker("begin", "itemize"), Node::text("x")];
        let LatexError(_, kind) = *gather_sequence(nodes, None).unwrap_err();
        assert_eq!(kind, LatexErrKind::MissingEnd("itemize".into()));
    }

    #[test]
    fn environment_cannot_close_across_a_group_boundary() {
        let nodes = vec![
            marker("begin", "itemize"),
            Node::Group(vec![marker("end", "itemize")]),
        ];
        let LatexError(_, kind) = *gather_sequence(nodes, None).unwrap_err();
        assert_eq!(kind, LatexErrKind::UnmatchedEnd("itemize".into()));
    }
}
