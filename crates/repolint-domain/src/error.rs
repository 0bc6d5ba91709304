use repolint_settings::DeclarationError;
use thiserror::Error;

/// How many rulesets deep a nested-ruleset module may recurse.
pub const MAX_NESTING: usize = 16;

/// Errors raised by a [`FileSystem`](crate::fs::FileSystem) implementation.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    #[error("read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("git: {0}")]
    Git(String),
}

/// Errors a rule returns while checking. Never fatal: the engine turns them
/// into a failing result for that rule.
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("missing required option '{0}'")]
    MissingOption(&'static str),

    #[error("invalid option '{option}': {message}")]
    InvalidOption {
        option: &'static str,
        message: String,
    },

    #[error(transparent)]
    Fs(#[from] FsError),

    #[error("{0}")]
    Failed(String),
}

/// Errors an axiom returns while inspecting the filesystem.
#[derive(Debug, Error)]
pub enum AxiomError {
    #[error(transparent)]
    Fs(#[from] FsError),

    #[error("{0}")]
    Failed(String),
}

/// Configuration errors. These abort the whole lint run.
#[derive(Debug, Error)]
pub enum LintError {
    #[error("no ruleset supplied and no ruleset source configured")]
    NoRuleset,

    #[error("load ruleset for {target_dir}: {source}")]
    Discovery {
        target_dir: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("unknown axiom: {0}")]
    UnknownAxiom(String),

    #[error("axiom '{id}' failed: {source}")]
    Axiom {
        id: String,
        #[source]
        source: AxiomError,
    },

    #[error("nested ruleset '{0}' exceeds the maximum depth of {max}", max = MAX_NESTING)]
    NestingTooDeep(String),

    #[error("invalid declaration for rule '{key}': {source}")]
    InvalidRule {
        key: String,
        #[source]
        source: DeclarationError,
    },
}
