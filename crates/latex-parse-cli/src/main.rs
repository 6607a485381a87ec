use std::{
    fs,
    io::Read,
    path::{Path, PathBuf},
};

use clap::Parser;

use latex_parse::{LatexError, LatexParser, ParserConfig, render};

/// Parses LaTeX documents into a structural tree
#[derive(Parser, Debug)]
#[command(version, about = "Parses LaTeX into a document tree", long_about = None)]
struct Args {
    /// The LaTeX file to parse ("-" for stdin)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Parses a LaTeX snippet given on the command line
    #[arg(short, long, conflicts_with = "file", value_name = "STR")]
    snippet: Option<String>,

    /// Re-renders the parsed tree as LaTeX instead of printing the tree
    #[arg(short, long)]
    render: bool,

    /// Reads extra command/environment arities from a TOML file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();
    let config = match &args.config {
        Some(path) => load_config(path),
        None => ParserConfig::default(),
    };
    let parser = LatexParser::new(config);

    let (source, source_name) = if let Some(snippet) = args.snippet {
        (snippet, "<snippet>".to_string())
    } else {
        match args.file {
            Some(ref path) if path != &PathBuf::from("-") => (
                fs::read_to_string(path).unwrap_or_else(|e| exit_io_error(e)),
                path.display().to_string(),
            ),
            _ => (read_stdin(), "<stdin>".to_string()),
        }
    };

    match parser.parse(&source) {
        Ok(doc) => {
            if args.render {
                let output = render(&doc);
                print!("{}", output);
                if !output.ends_with('\n') {
                    println!();
                }
            } else {
                println!("{:#?}", doc);
            }
        }
        Err(e) => exit_latex_error(&e, &source_name, &source),
    }
}

fn load_config(path: &Path) -> ParserConfig {
    let text = fs::read_to_string(path).unwrap_or_else(|e| exit_io_error(e));
    toml::from_str(&text).unwrap_or_else(|e| {
        eprintln!("Invalid config '{}': {}", path.display(), e);
        std::process::exit(1);
    })
}

fn read_stdin() -> String {
    let mut buffer = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut buffer) {
        exit_io_error(e);
    }
    buffer
}

fn exit_latex_error(e: &LatexError, source_name: &str, source: &str) -> ! {
    let report = e.to_report(source_name, true);
    let _ = report.eprint((source_name, ariadne::Source::from(source)));
    std::process::exit(2);
}

fn exit_io_error(e: std::io::Error) -> ! {
    eprintln!("IO Error: {}", e);
    std::process::exit(1);
}
