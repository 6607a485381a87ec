//! First pass: scan the source into a node sequence.
//!
//! Brace groups and command arguments are consumed by recursive calls, so
//! the output of this pass already nests groups; `\begin`/`\end` survive as
//! flat marker control sequences for the pairing pass in
//! [`gather`](crate::gather).

use memchr::memchr;

use latex_tree::Node;

use crate::error::{EndToken, GetUnwrap, LatexErrKind, LatexError};
use crate::tables::ArityTables;

/// Recursive-descent reader over one source string.
///
/// The cursor always sits just past the last consumed byte; a returning
/// scope call leaves it past the scope's terminator. All structurally
/// significant characters are ASCII, so scanning is byte-based and text
/// runs are flushed as slices of the input.
pub(crate) struct Reader<'tables, 'source> {
    input: &'source str,
    pos: usize,
    tables: &'tables ArityTables,
    depth: usize,
    max_depth: Option<usize>,
}

/// What ends the scope currently being read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Scope {
    /// The document root; ends at end of input.
    Document,
    /// A `{...}` group or argument body; ends at `}`.
    Group,
    /// A `[...]` optional argument; ends at `]` or `}`.
    OptionalArg,
}

impl<'tables, 'source> Reader<'tables, 'source> {
    pub(crate) fn new(
        input: &'source str,
        tables: &'tables ArityTables,
        max_depth: Option<usize>,
    ) -> Self {
        Reader {
            input,
            pos: 0,
            tables,
            depth: 0,
            max_depth,
        }
    }

    #[inline]
    fn peek_byte(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn char_at(&self, pos: usize) -> Option<char> {
        self.input.get_unwrap(pos..self.input.len()).chars().next()
    }

    /// The byte range of the character at `pos`, zero-width at end of
    /// input.
    fn span_at(&self, pos: usize) -> std::ops::Range<usize> {
        match self.char_at(pos) {
            Some(ch) => pos..pos + ch.len_utf8(),
            None => pos..pos,
        }
    }

    fn flush_text(&self, nodes: &mut Vec<Node>, start: usize) {
        if start < self.pos {
            nodes.push(Node::Text(self.input.get_unwrap(start..self.pos).to_owned()));
        }
    }

    /// Advances past runs of space, tab and newline. Whitespace between a
    /// command and its arguments is discarded, not preserved as nodes.
    fn skip_whitespace(&mut self) {
        while matches!(self.peek_byte(), Some(b' ' | b'\t' | b'\n')) {
            self.pos += 1;
        }
    }

    /// Reads the sibling nodes of one scope and leaves the cursor just
    /// past the scope's terminator.
    pub(crate) fn read_scope(&mut self, scope: Scope) -> Result<Vec<Node>, Box<LatexError>> {
        let mut nodes = Vec::new();
        let mut text_start = self.pos;

        while let Some(b) = self.peek_byte() {
            match b {
                b'%' => {
                    self.flush_text(&mut nodes, text_start);
                    // The newline itself is not part of the comment.
                    let rest = &self.input.as_bytes()[self.pos..];
                    self.pos += memchr(b'\n', rest).unwrap_or(rest.len());
                    text_start = self.pos;
                }
                b'\n' => {
                    self.flush_text(&mut nodes, text_start);
                    nodes.push(Node::EndOfLine);
                    self.pos += 1;
                    text_start = self.pos;
                }
                b'{' => {
                    self.flush_text(&mut nodes, text_start);
                    self.pos += 1;
                    let content = self.read_nested(Scope::Group)?;
                    nodes.push(Node::Group(content));
                    text_start = self.pos;
                }
                b'}' => {
                    if matches!(scope, Scope::Document) {
                        return Err(Box::new(LatexError(
                            self.pos..self.pos + 1,
                            LatexErrKind::UnmatchedClose(EndToken::GroupClose),
                        )));
                    }
                    self.flush_text(&mut nodes, text_start);
                    self.pos += 1;
                    return Ok(nodes);
                }
                b']' if matches!(scope, Scope::OptionalArg) => {
                    self.flush_text(&mut nodes, text_start);
                    self.pos += 1;
                    return Ok(nodes);
                }
                b'\\' => {
                    self.flush_text(&mut nodes, text_start);
                    self.pos += 1;
                    nodes.push(self.read_control_sequence()?);
                    text_start = self.pos;
                }
                _ => {
                    self.pos += 1;
                }
            }
        }

        self.flush_text(&mut nodes, text_start);
        match scope {
            Scope::Document => Ok(nodes),
            Scope::Group => Err(Box::new(LatexError(
                self.pos..self.pos,
                LatexErrKind::UnclosedScope(EndToken::GroupClose),
            ))),
            Scope::OptionalArg => Err(Box::new(LatexError(
                self.pos..self.pos,
                LatexErrKind::UnclosedScope(EndToken::SquareBracketClose),
            ))),
        }
    }

    /// Recurses into a nested scope, guarding the configured depth limit.
    fn read_nested(&mut self, scope: Scope) -> Result<Vec<Node>, Box<LatexError>> {
        if let Some(limit) = self.max_depth
            && self.depth >= limit
        {
            return Err(Box::new(LatexError(
                self.pos..self.pos,
                LatexErrKind::MaxDepthExceeded,
            )));
        }
        self.depth += 1;
        let result = self.read_scope(scope);
        self.depth -= 1;
        result
    }

    /// Reads one control sequence; the cursor sits just past the `\`.
    fn read_control_sequence(&mut self) -> Result<Node, Box<LatexError>> {
        let start = self.pos - 1;
        let name = self.read_command_name()?;

        if name == "begin" {
            return self.read_begin();
        }

        let Some(counts) = self.tables.command(name) else {
            return Err(Box::new(LatexError(
                start..self.pos,
                LatexErrKind::UnknownCommand(name.into()),
            )));
        };
        let (args, optargs) = self.read_arguments(name, counts)?;
        Ok(Node::ControlSequence {
            name: name.to_owned(),
            args,
            optargs,
        })
    }

    /// Reads a control-sequence name: a maximal run of letters and `*`,
    /// or exactly one character from the fixed single-character set.
    fn read_command_name(&mut self) -> Result<&'source str, Box<LatexError>> {
        let start = self.pos;
        while self
            .peek_byte()
            .is_some_and(|b| b.is_ascii_alphabetic() || b == b'*')
        {
            self.pos += 1;
        }
        if self.pos > start {
            return Ok(self.input.get_unwrap(start..self.pos));
        }
        match self.peek_byte() {
            Some(b',' | b';' | b'\\' | b'(' | b')' | b'{' | b'}' | b' ' | b'[' | b']' | b'"') => {
                self.pos += 1;
                Ok(self.input.get_unwrap(start..self.pos))
            }
            Some(_) => Err(Box::new(LatexError(
                self.span_at(self.pos),
                LatexErrKind::InvalidCommandStart(self.char_at(self.pos)),
            ))),
            None => Err(Box::new(LatexError(
                self.pos..self.pos,
                LatexErrKind::InvalidCommandStart(None),
            ))),
        }
    }

    /// `\begin`: reads `{name}` and the environment's own arguments. The
    /// emitted marker is a `begin` control sequence whose first argument
    /// is the environment name as text; the pairing pass replaces it with
    /// an `Environment` node.
    fn read_begin(&mut self) -> Result<Node, Box<LatexError>> {
        self.skip_whitespace();
        if self.peek_byte() != Some(b'{') {
            return Err(Box::new(LatexError(
                self.span_at(self.pos),
                LatexErrKind::ExpectedEnvName,
            )));
        }
        self.pos += 1;
        let name_start = self.pos;
        let name = self.read_env_name()?;

        let Some(counts) = self.tables.environment(name) else {
            return Err(Box::new(LatexError(
                name_start..name_start + name.len(),
                LatexErrKind::UnknownEnvironment(name.into()),
            )));
        };
        let (args, optargs) = self.read_arguments(name, counts)?;
        let mut full_args = Vec::with_capacity(args.len() + 1);
        full_args.push(Node::Text(name.to_owned()));
        full_args.extend(args);
        Ok(Node::ControlSequence {
            name: "begin".to_owned(),
            args: full_args,
            optargs,
        })
    }

    /// Reads an environment name up to the closing `}`.
    ///
    /// The name is a maximal run of letters and `*`; whitespace is
    /// tolerated between the name and the `}` but not before the name.
    fn read_env_name(&mut self) -> Result<&'source str, Box<LatexError>> {
        let start = self.pos;
        while self
            .peek_byte()
            .is_some_and(|b| b.is_ascii_alphabetic() || b == b'*')
        {
            self.pos += 1;
        }
        let end = self.pos;
        self.skip_whitespace();
        match self.peek_byte() {
            Some(b'}') if end > start => {
                self.pos += 1;
                Ok(self.input.get_unwrap(start..end))
            }
            Some(_) => {
                let span = self.span_at(self.pos);
                // `char_at` is `Some` whenever `peek_byte` is.
                let got = self.char_at(self.pos).unwrap_or('\u{0}');
                Err(Box::new(LatexError(span, LatexErrKind::DisallowedChar(got))))
            }
            None => Err(Box::new(LatexError(
                self.pos..self.pos,
                LatexErrKind::UnclosedScope(EndToken::GroupClose),
            ))),
        }
    }

    /// Reads up to `optional` elidable `[...]` arguments, then exactly
    /// `mandatory` `{...}` arguments.
    fn read_arguments(
        &mut self,
        name: &str,
        (mandatory, optional): (u8, u8),
    ) -> Result<(Vec<Node>, Vec<Node>), Box<LatexError>> {
        let mut optargs = Vec::new();
        for _ in 0..optional {
            self.skip_whitespace();
            if self.peek_byte() != Some(b'[') {
                // Trailing optional arguments may simply be absent.
                break;
            }
            self.pos += 1;
            let content = self.read_nested(Scope::OptionalArg)?;
            optargs.push(Node::from_nodes(content));
        }

        let mut args = Vec::new();
        for _ in 0..mandatory {
            self.skip_whitespace();
            if self.peek_byte() != Some(b'{') {
                return Err(Box::new(LatexError(
                    self.span_at(self.pos),
                    LatexErrKind::ExpectedArgument(name.into()),
                )));
            }
            self.pos += 1;
            let content = self.read_nested(Scope::Group)?;
            args.push(Node::from_nodes(content));
        }
        Ok((args, optargs))
    }
}
