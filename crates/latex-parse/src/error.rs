use std::fmt;
use std::ops::Range;

use strum_macros::IntoStaticStr;

/// Represents an error that occurred while parsing LaTeX source.
///
/// The first field is the byte range in the input that triggered the
/// error. Errors from the environment-pairing pass carry a zero-width
/// span, since the node tree holds no source positions.
#[derive(Debug, Clone)]
pub struct LatexError(pub Range<usize>, pub LatexErrKind);

#[derive(Debug, Clone, PartialEq)]
pub enum LatexErrKind {
    /// A control-sequence name with no entry in the arity table. A
    /// configuration gap, not a syntax problem with the input.
    UnknownCommand(Box<str>),
    /// An environment name with no entry in the arity table.
    UnknownEnvironment(Box<str>),
    /// A group or optional argument was still open at end of input.
    UnclosedScope(EndToken),
    /// A closing token at the document root with nothing to close.
    UnmatchedClose(EndToken),
    /// A mandatory `{...}` argument was missing after the named command.
    ExpectedArgument(Box<str>),
    /// A `\` followed by a character that starts no control-sequence
    /// name, or by end of input (`None`).
    InvalidCommandStart(Option<char>),
    /// `\begin` without a brace-delimited environment name, or an `end`
    /// marker whose argument holds no plain name.
    ExpectedEnvName,
    /// A character that may not appear in an environment name.
    DisallowedChar(char),
    /// `\end{got}` closing an environment opened as `expected`.
    MismatchedEnvironment {
        expected: Box<str>,
        got: Box<str>,
    },
    /// `\end{...}` with no open environment.
    UnmatchedEnd(Box<str>),
    /// An environment left open at the end of its scope.
    MissingEnd(Box<str>),
    /// The configured maximum nesting depth was exceeded.
    MaxDepthExceeded,
}

/// The terminator token a scope was waiting for, for error messages.
#[derive(Debug, Clone, Copy, PartialEq, IntoStaticStr)]
pub enum EndToken {
    #[strum(serialize = r"}")]
    GroupClose,
    #[strum(serialize = r"]")]
    SquareBracketClose,
}

impl LatexErrKind {
    /// Returns the error message as a string.
    pub fn string(&self) -> String {
        match self {
            LatexErrKind::UnknownCommand(cmd) => {
                "No argument counts known for command \"\\".to_string() + cmd + "\"."
            }
            LatexErrKind::UnknownEnvironment(environment) => {
                "No argument counts known for environment \"".to_string() + environment + "\"."
            }
            LatexErrKind::UnclosedScope(expected) => {
                "Expected token \"".to_string() + <&str>::from(expected) + "\", but not found."
            }
            LatexErrKind::UnmatchedClose(got) => {
                "Unmatched closing token: \"".to_string() + <&str>::from(got) + "\"."
            }
            LatexErrKind::ExpectedArgument(cmd) => {
                "Expected a \"{\" argument after \"\\".to_string() + cmd + "\"."
            }
            LatexErrKind::InvalidCommandStart(Some(got)) => {
                let mut text = "Character '".to_string();
                text.push(*got);
                text += "' starts no control-sequence name.";
                text
            }
            LatexErrKind::InvalidCommandStart(None) => {
                "Expected a control-sequence name, but reached end of input.".to_string()
            }
            LatexErrKind::ExpectedEnvName => {
                "Expected an environment name in braces.".to_string()
            }
            LatexErrKind::DisallowedChar(got) => {
                let mut text = "Disallowed character in environment name: '".to_string();
                text.push(*got);
                text += "'.";
                text
            }
            LatexErrKind::MismatchedEnvironment { expected, got } => {
                "Expected \"\\end{".to_string()
                    + expected
                    + "}\", but got \"\\end{"
                    + got
                    + "}\"."
            }
            LatexErrKind::UnmatchedEnd(got) => {
                "Got \"\\end{".to_string() + got + "}\" without a matching \"\\begin\"."
            }
            LatexErrKind::MissingEnd(name) => {
                "Missing end of environment \"".to_string() + name + "\"."
            }
            LatexErrKind::MaxDepthExceeded => {
                "Maximum nesting depth exceeded.".to_string()
            }
        }
    }
}

impl LatexError {
    pub fn error_message(&self) -> String {
        self.1.string()
    }
}

#[cfg(feature = "ariadne")]
impl LatexError {
    /// Convert this error into an [`ariadne::Report`] for pretty-printing.
    pub fn to_report<'name>(
        &self,
        source_name: &'name str,
        with_color: bool,
    ) -> ariadne::Report<'static, (&'name str, Range<usize>)> {
        use ariadne::{Label, Report, ReportKind};

        let label_msg = match &self.1 {
            LatexErrKind::UnknownCommand(_) => "unknown command".into(),
            LatexErrKind::UnknownEnvironment(_) => "unknown environment".into(),
            LatexErrKind::UnclosedScope(expected) => {
                format!("expected \"{}\" to close this scope", <&str>::from(expected))
            }
            LatexErrKind::UnmatchedClose(got) => {
                format!("unmatched \"{}\"", <&str>::from(got))
            }
            LatexErrKind::ExpectedArgument(_) => "expected an argument here".into(),
            LatexErrKind::InvalidCommandStart(_) => "no control sequence starts here".into(),
            LatexErrKind::ExpectedEnvName => "expected \"{name}\" here".into(),
            LatexErrKind::DisallowedChar(_) => "disallowed character".into(),
            LatexErrKind::MismatchedEnvironment { expected, .. } => {
                format!("expected \"\\end{{{}}}\" here", expected)
            }
            LatexErrKind::UnmatchedEnd(_) => "no environment is open here".into(),
            LatexErrKind::MissingEnd(name) => {
                format!("\"\\begin{{{}}}\" is never closed", name)
            }
            LatexErrKind::MaxDepthExceeded => "nesting too deep".into(),
        };

        let mut config = ariadne::Config::default().with_index_type(ariadne::IndexType::Byte);
        if !with_color {
            config = config.with_color(false);
        }
        Report::build(ReportKind::Error, (source_name, self.0.start..self.0.start))
            .with_config(config)
            .with_message(self.1.string())
            .with_label(Label::new((source_name, self.0.clone())).with_message(label_msg))
            .finish()
    }
}

impl fmt::Display for LatexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.0.start, self.1.string())
    }
}

impl std::error::Error for LatexError {}

pub trait GetUnwrap {
    /// `str::get` with `Option::unwrap`.
    fn get_unwrap(&self, range: std::ops::Range<usize>) -> &str;
}

impl GetUnwrap for str {
    #[inline]
    fn get_unwrap(&self, range: std::ops::Range<usize>) -> &str {
        self.get(range).expect("valid range")
    }
}
