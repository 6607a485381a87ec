//! Default arity tables.
//!
//! Keyed by control-sequence or environment name; values are
//! `(mandatory, optional)` argument counts. The defaults cover common
//! document-structure commands, text styling, spacing, cross-references,
//! math operators and symbols, and the usual list/align/matrix
//! environments. Callers extend or override them through
//! [`ParserConfig`](crate::ParserConfig).

use rustc_hash::FxHashMap;

/// `(mandatory, optional)` argument counts for a command or environment.
pub type ArgCounts = (u8, u8);

static COMMANDS: phf::Map<&'static str, ArgCounts> = phf::phf_map! {
    "documentclass" => (1, 1),
    "input" => (1, 0),
    "subtitle" => (1, 0),
    "date" => (1, 0),
    "begin" => (1, 0),
    "end" => (1, 0),
    "section" => (1, 0),
    "subsection" => (1, 0),
    "footnote" => (1, 0),
    "label" => (1, 0),
    "ref" => (1, 0),
    "eqref" => (1, 0),
    "renewcommand" => (2, 0),
    "arraystretch" => (1, 0),
    "url" => (1, 0),
    "cr" => (1, 0),

    "vspace" => (1, 0),
    "vspace*" => (1, 0),
    "smallskip" => (0, 0),
    "medskip" => (0, 0),
    "bigskip" => (0, 0),
    "hfill" => (0, 0),
    "centering" => (0, 0),
    "includegraphics" => (1, 1),

    "textcolor" => (1, 0),
    "color" => (1, 0),
    "textbf" => (1, 0),
    "textit" => (1, 0),
    "emph" => (1, 0),

    "frac" => (2, 0),
    "sfrac" => (2, 0),
    "sqrt" => (1, 1),

    "bar" => (0, 0),
    "hat" => (0, 0),
    "tilde" => (0, 0),

    "in" => (0, 0),
    "sum" => (0, 0),
    "int" => (0, 0),
    "prod" => (0, 0),
    "bigcup" => (0, 0),
    "bigcap" => (0, 0),
    "[" => (0, 0),
    "]" => (0, 0),

    "Delta" => (0, 0),
    "Sigma" => (0, 0),
    "Omega" => (0, 0),
    "Phi" => (0, 0),

    "alpha" => (0, 0),
    "beta" => (0, 0),
    "gamma" => (0, 0),
    "delta" => (0, 0),
    "epsilon" => (0, 0),
    "phi" => (0, 0),
    "psi" => (0, 0),
    "pi" => (0, 0),
    "mu" => (0, 0),
    "nu" => (0, 0),
    "lambda" => (0, 0),
    "rho" => (0, 0),
    "sigma" => (0, 0),
    "kappa" => (0, 0),
    "omega" => (0, 0),
    "xi" => (0, 0),

    "neq" => (0, 0),
    "leq" => (0, 0),
    "geq" => (0, 0),
    "ll" => (0, 0),

    "approx" => (0, 0),
    "equiv" => (0, 0),
    "subset" => (0, 0),
    "subseteq" => (0, 0),
    "cdot" => (0, 0),
    "otimes" => (0, 0),
    "times" => (0, 0),
    "setminus" => (0, 0),
    "cup" => (0, 0),
    "cap" => (0, 0),
    "land" => (0, 0),
    "lor" => (0, 0),
    "ldots" => (0, 0),
    "cdots" => (0, 0),
    "ddots" => (0, 0),
    "vdots" => (0, 0),
    "dots" => (0, 0),
    "forall" => (0, 0),
    "exists" => (0, 0),
    "nabla" => (0, 0),

    "Big" => (0, 0),
    "Bigg" => (0, 0),
    "big" => (0, 0),
    "bigg" => (0, 0),

    "hline" => (0, 0),

    "Large" => (0, 0),
    "tiny" => (0, 0),

    "langle" => (0, 0),
    "rangle" => (0, 0),
    "star" => (0, 0),
    "dagger" => (0, 0),
    "cong" => (0, 0),
    "pm" => (0, 0),

    "lim" => (0, 0),
    "det" => (0, 0),
    "max" => (0, 0),
    "min" => (0, 0),
    "left" => (1, 0),
    "right" => (1, 0),
    "underbrace" => (1, 0),
    "overbrace" => (1, 0),

    "mathcal" => (1, 0),
    "mathit" => (1, 0),
    "mathbf" => (1, 0),
    "mathbb" => (1, 0),
    "mathop" => (1, 0),
    "boldsymbol" => (1, 0),
    "text" => (1, 0),

    "quad" => (0, 0),
    "qquad" => (0, 0),
    "infty" => (0, 0),
    "lfloor" => (0, 0),
    "rfloor" => (0, 0),
    "log" => (0, 0),
    "sin" => (0, 0),
    "cos" => (0, 0),
    "arcsin" => (0, 0),
    "arccos" => (0, 0),

    "titlepage" => (0, 0),
    "item" => (0, 0),
    "bf" => (0, 0),
    "it" => (0, 0),

    "Leftrightarrow" => (0, 0),
    "Rightarrow" => (0, 0),
    "to" => (0, 0),

    "\\" => (0, 1),
    "," => (0, 0),
    "\"" => (0, 0),
    "{" => (0, 0),
    "}" => (0, 0),
    "(" => (0, 0),
    ")" => (0, 0),
    " " => (0, 0),
};

static ENVIRONMENTS: phf::Map<&'static str, ArgCounts> = phf::phf_map! {
    "document" => (0, 0),
    "frame" => (1, 1),
    "itemize" => (0, 0),
    "enumerate" => (0, 0),
    "align" => (0, 0),
    "align*" => (0, 0),
    "alignat*" => (0, 0),
    "bmatrix" => (0, 0),
    "cases" => (0, 0),
    "center" => (0, 0),
    "tabular" => (1, 0),
    "array" => (1, 0),
    "matrix" => (1, 0),
};

/// Argument counts for a control sequence from the default table.
pub fn get_command(name: &str) -> Option<ArgCounts> {
    COMMANDS.get(name).copied()
}

/// Argument counts for an environment from the default table.
pub fn get_environment(name: &str) -> Option<ArgCounts> {
    ENVIRONMENTS.get(name).copied()
}

/// The effective lookup used by the reader: caller-supplied overrides in
/// front of the static defaults.
#[derive(Debug, Default)]
pub(crate) struct ArityTables {
    pub(crate) commands: FxHashMap<String, ArgCounts>,
    pub(crate) environments: FxHashMap<String, ArgCounts>,
}

impl ArityTables {
    pub(crate) fn command(&self, name: &str) -> Option<ArgCounts> {
        self.commands
            .get(name)
            .copied()
            .or_else(|| get_command(name))
    }

    pub(crate) fn environment(&self, name: &str) -> Option<ArgCounts> {
        self.environments
            .get(name)
            .copied()
            .or_else(|| get_environment(name))
    }
}
