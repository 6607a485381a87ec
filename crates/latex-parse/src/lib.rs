//! Parse a constrained subset of LaTeX into a document tree.
//!
//! The supported markup is text runs, line breaks, `{...}` groups, control
//! sequences with statically known argument counts, and `\begin`/`\end`
//! environments. Argument counts come from arity tables: built-in defaults
//! for common commands and environments (see [`tables`]), extended or
//! overridden through [`ParserConfig`]. A name without a table entry is a
//! configuration error, never a guess.
//!
//! Parsing runs in two passes over the whole input: the reader turns the
//! character stream into a node sequence with groups and arguments already
//! nested, and the environment-pairing pass replaces matched
//! `\begin`/`\end` markers by [`Node::Environment`] nodes. Every failure
//! aborts the parse; there are no partial results.
//!
//! # Usage
//!
//! ```rust
//! use latex_parse::{LatexParser, ParserConfig, render};
//!
//! let parser = LatexParser::new(ParserConfig::default());
//! let doc = parser.parse(r"\begin{itemize}\item hello\end{itemize}").unwrap();
//! assert_eq!(render(&doc), r"\begin{itemize}\item hello\end{itemize}");
//! ```
//!
//! # Features
//!
//! - `serde`: [`ParserConfig`] implements serde's `Deserialize` and
//!   `Serialize` (e.g. for TOML config files), and the tree types
//!   implement `Serialize`.
//! - `ariadne`: `LatexError::to_report` produces labeled terminal
//!   diagnostics.

mod error;
mod gather;
mod reader;
pub mod tables;

use rustc_hash::FxHashMap;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub use latex_tree::{Mapper, Node, Renderer, TreeCopier, render};

pub use self::error::{EndToken, LatexErrKind, LatexError};
use self::reader::{Reader, Scope};
use self::tables::{ArgCounts, ArityTables};

/// Configuration for [`LatexParser`].
///
/// # Example usage
///
/// ```rust
/// use latex_parse::ParserConfig;
///
/// // Default values
/// let config = ParserConfig::default();
///
/// // Extra arity entries and a nesting-depth guard
/// let config = ParserConfig {
///     commands: vec![("important".to_string(), (1, 0))],
///     environments: vec![("theorem".to_string(), (0, 1))],
///     max_depth: Some(64),
/// };
/// ```
///
/// With the `serde` feature, the same configuration can be loaded from
/// TOML:
///
/// ```toml
/// max-depth = 64
///
/// [commands]
/// important = [1, 0]
///
/// [environments]
/// theorem = [0, 1]
/// ```
#[derive(Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "kebab-case"))]
pub struct ParserConfig {
    /// Extra control-sequence arities as `(name, (mandatory, optional))`;
    /// entries shadow the built-in defaults, and a repeated name keeps its
    /// last entry.
    #[cfg_attr(feature = "serde", serde(with = "tuple_vec_map"))]
    pub commands: Vec<(String, ArgCounts)>,
    /// Extra environment arities, same shape and precedence as
    /// [`commands`](ParserConfig::commands).
    #[cfg_attr(feature = "serde", serde(with = "tuple_vec_map"))]
    pub environments: Vec<(String, ArgCounts)>,
    /// Maximum nesting depth for groups and arguments. `None` (the
    /// default) leaves recursion bounded only by the input; set a limit
    /// when parsing untrusted sources.
    pub max_depth: Option<usize>,
}

/// A parser that turns LaTeX source into a [`Node`] tree.
///
/// The parser holds only immutable configuration, so one instance can be
/// reused across documents, and parsers with different tables can run
/// concurrently without shared state.
#[derive(Debug, Default)]
pub struct LatexParser {
    tables: ArityTables,
    max_depth: Option<usize>,
}

impl LatexParser {
    /// Creates a parser with the given configuration.
    pub fn new(config: ParserConfig) -> Self {
        let mut commands =
            FxHashMap::with_capacity_and_hasher(config.commands.len(), Default::default());
        for (name, counts) in config.commands {
            commands.insert(name, counts);
        }
        let mut environments =
            FxHashMap::with_capacity_and_hasher(config.environments.len(), Default::default());
        for (name, counts) in config.environments {
            environments.insert(name, counts);
        }
        LatexParser {
            tables: ArityTables {
                commands,
                environments,
            },
            max_depth: config.max_depth,
        }
    }

    /// Parses one document, returning the root container.
    ///
    /// The whole input is consumed in memory; any failure aborts the parse
    /// with the first error.
    pub fn parse(&self, source: &str) -> Result<Node, Box<LatexError>> {
        let mut reader = Reader::new(source, &self.tables, self.max_depth);
        let nodes = reader.read_scope(Scope::Document)?;
        let content = gather::gather_sequence(nodes, None)?;
        Ok(Node::Container(content))
    }
}
