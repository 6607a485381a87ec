use latex_parse::{EndToken, LatexErrKind, LatexError, LatexParser, ParserConfig};

fn parse_err(source: &str) -> LatexError {
    let parser = LatexParser::new(ParserConfig::default());
    *parser
        .parse(source)
        .expect_err("expected the parse to fail")
}

#[test]
fn error_kinds() {
    let problems: [(&str, &str, LatexErrKind); 10] = [
        (
            "unknown_command",
            r"\notacommand",
            LatexErrKind::UnknownCommand("notacommand".into()),
        ),
        (
            "unknown_environment",
            r"\begin{xitemize} x \end{xitemize}",
            LatexErrKind::UnknownEnvironment("xitemize".into()),
        ),
        (
            "missing_argument",
            r"\label",
            LatexErrKind::ExpectedArgument("label".into()),
        ),
        (
            "unclosed_group",
            r"{a",
            LatexErrKind::UnclosedScope(EndToken::GroupClose),
        ),
        (
            "stray_close",
            r"a}",
            LatexErrKind::UnmatchedClose(EndToken::GroupClose),
        ),
        (
            "begin_without_name",
            r"\begin x",
            LatexErrKind::ExpectedEnvName,
        ),
        (
            "mismatched_environments",
            r"\begin{itemize}x\end{center}",
            LatexErrKind::MismatchedEnvironment {
                expected: "itemize".into(),
                got: "center".into(),
            },
        ),
        (
            "end_without_begin",
            r"x\end{itemize}",
            LatexErrKind::UnmatchedEnd("itemize".into()),
        ),
        (
            "unclosed_environment",
            r"\begin{itemize}x",
            LatexErrKind::MissingEnd("itemize".into()),
        ),
        (
            "non_ascii_after_backslash",
            "\\é",
            LatexErrKind::InvalidCommandStart(Some('é')),
        ),
    ];

    for (name, problem, expected) in problems {
        let LatexError(_, kind) = parse_err(problem);
        assert_eq!(kind, expected, "problem {name}: {problem}");
    }
}

#[test]
fn error_spans_point_at_the_failure() {
    let LatexError(span, _) = parse_err(r"ab\nope cd");
    assert_eq!(span, 2..7);

    let LatexError(span, _) = parse_err("ab}cd");
    assert_eq!(span, 2..3);
}

#[test]
fn error_messages() {
    assert_eq!(
        parse_err(r"\notacommand").error_message(),
        "No argument counts known for command \"\\notacommand\"."
    );
    assert_eq!(
        parse_err(r"\begin{itemize}x\end{center}").error_message(),
        "Expected \"\\end{itemize}\", but got \"\\end{center}\"."
    );
    assert_eq!(
        parse_err(r"\begin{itemize}x").error_message(),
        "Missing end of environment \"itemize\"."
    );
}

#[test]
fn display_includes_position() {
    let err = parse_err(r"ab\nope");
    assert_eq!(
        err.to_string(),
        "2: No argument counts known for command \"\\nope\"."
    );
}

#[test]
fn ariadne_report_renders() {
    let source = r"a \notacommand b";
    let err = parse_err(source);
    let report = err.to_report("test.tex", false);
    let mut out = Vec::new();
    report
        .write(("test.tex", ariadne::Source::from(source)), &mut out)
        .unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("No argument counts known for command"));
    assert!(text.contains("test.tex"));
}
