//! The filesystem capability rules and axioms are given.
//!
//! Implementations own the IO; the engine only scopes them and passes them on.

use crate::error::FsError;
use camino::Utf8Path;
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use repolint_types::RepoPath;

/// Read-only view of the lint target, scoped by the engine before each run.
///
/// Paths handed in and out are relative to [`FileSystem::target_dir`].
pub trait FileSystem {
    fn target_dir(&self) -> &Utf8Path;

    fn filter_paths(&self) -> &[String];

    /// Point the provider at a target directory and an optional set of
    /// inclusion globs. Called by the engine at the start of every run.
    fn set_scope(&mut self, target_dir: &Utf8Path, filter_paths: &[String]);

    /// Files matching any of `globs` that pass the path filter, in sorted order.
    fn find_all(&self, globs: &[String], nocase: bool) -> Result<Vec<RepoPath>, FsError>;

    /// Directories matching any of `globs` that pass the path filter, in sorted order.
    fn find_all_dirs(&self, globs: &[String], nocase: bool) -> Result<Vec<RepoPath>, FsError>;

    fn find_first(&self, globs: &[String], nocase: bool) -> Result<Option<RepoPath>, FsError> {
        Ok(self.find_all(globs, nocase)?.into_iter().next())
    }

    fn file_exists(&self, path: &RepoPath) -> bool;

    fn is_dir(&self, path: &RepoPath) -> bool;

    fn read_file(&self, path: &RepoPath) -> Result<String, FsError>;

    /// Author identities from version control history (may repeat).
    fn contributor_emails(&self) -> Result<Vec<String>, FsError>;
}

/// Compile glob patterns with minimatch-like semantics: `*` stops at `/`,
/// `**/` spans directories.
pub fn compile_globs(patterns: &[String], nocase: bool) -> Result<GlobSet, FsError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = GlobBuilder::new(pattern)
            .case_insensitive(nocase)
            .literal_separator(true)
            .build()
            .map_err(|e| FsError::InvalidGlob {
                pattern: pattern.clone(),
                message: e.kind().to_string(),
            })?;
        builder.add(glob);
    }
    builder.build().map_err(|e| FsError::InvalidGlob {
        pattern: patterns.join(", "),
        message: e.to_string(),
    })
}

/// Inclusion filter built from `filter_paths`.
///
/// An empty filter admits everything. Otherwise a path is admitted when it
/// matches one of the globs or lives under one of them as a directory.
#[derive(Clone, Debug)]
pub struct PathFilter {
    globs: Option<GlobSet>,
    prefixes: Vec<String>,
}

impl PathFilter {
    pub fn new(filter_paths: &[String]) -> Result<Self, FsError> {
        if filter_paths.is_empty() {
            return Ok(Self {
                globs: None,
                prefixes: Vec::new(),
            });
        }
        let prefixes = filter_paths
            .iter()
            .map(|p| format!("{}/", RepoPath::new(p).as_str().trim_end_matches('/')))
            .collect();
        Ok(Self {
            globs: Some(compile_globs(filter_paths, false)?),
            prefixes,
        })
    }

    pub fn allows(&self, path: &RepoPath) -> bool {
        let Some(globs) = &self.globs else {
            return true;
        };
        globs.is_match(path.as_str()) || self.prefixes.iter().any(|p| path.as_str().starts_with(p))
    }
}
