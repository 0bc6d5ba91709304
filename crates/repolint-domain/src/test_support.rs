use crate::error::FsError;
use crate::fs::{compile_globs, FileSystem, PathFilter};
use camino::{Utf8Path, Utf8PathBuf};
use repolint_types::{Rule, RepoPath};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};

/// In-memory filesystem for engine, rule and axiom tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryFileSystem {
    target_dir: Utf8PathBuf,
    filter_paths: Vec<String>,
    files: BTreeMap<String, String>,
    contributors: Vec<String>,
}

impl MemoryFileSystem {
    pub fn new(files: &[(&str, &str)]) -> Self {
        Self {
            target_dir: Utf8PathBuf::from("."),
            filter_paths: Vec::new(),
            files: files
                .iter()
                .map(|(p, c)| (p.to_string(), c.to_string()))
                .collect(),
            contributors: Vec::new(),
        }
    }

    pub fn with_contributors(mut self, emails: &[&str]) -> Self {
        self.contributors = emails.iter().map(|s| s.to_string()).collect();
        self
    }

    fn dirs(&self) -> BTreeSet<String> {
        let mut out = BTreeSet::new();
        for path in self.files.keys() {
            let mut current = Utf8Path::new(path).parent();
            while let Some(dir) = current {
                if dir.as_str().is_empty() {
                    break;
                }
                out.insert(dir.as_str().to_string());
                current = dir.parent();
            }
        }
        out
    }

    fn select<'a>(
        &self,
        candidates: impl Iterator<Item = &'a String>,
        globs: &[String],
        nocase: bool,
    ) -> Result<Vec<RepoPath>, FsError> {
        let set = compile_globs(globs, nocase)?;
        let filter = PathFilter::new(&self.filter_paths)?;
        Ok(candidates
            .filter(|p| set.is_match(p.as_str()))
            .map(RepoPath::new)
            .filter(|p| filter.allows(p))
            .collect())
    }
}

impl FileSystem for MemoryFileSystem {
    fn target_dir(&self) -> &Utf8Path {
        &self.target_dir
    }

    fn filter_paths(&self) -> &[String] {
        &self.filter_paths
    }

    fn set_scope(&mut self, target_dir: &Utf8Path, filter_paths: &[String]) {
        self.target_dir = target_dir.to_path_buf();
        self.filter_paths = filter_paths.to_vec();
    }

    fn find_all(&self, globs: &[String], nocase: bool) -> Result<Vec<RepoPath>, FsError> {
        self.select(self.files.keys(), globs, nocase)
    }

    fn find_all_dirs(&self, globs: &[String], nocase: bool) -> Result<Vec<RepoPath>, FsError> {
        let dirs = self.dirs();
        self.select(dirs.iter(), globs, nocase)
    }

    fn file_exists(&self, path: &RepoPath) -> bool {
        self.files.contains_key(path.as_str())
    }

    fn is_dir(&self, path: &RepoPath) -> bool {
        self.dirs().contains(path.as_str())
    }

    fn read_file(&self, path: &RepoPath) -> Result<String, FsError> {
        self.files
            .get(path.as_str())
            .cloned()
            .ok_or_else(|| FsError::Read {
                path: path.to_string(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            })
    }

    fn contributor_emails(&self) -> Result<Vec<String>, FsError> {
        Ok(self.contributors.clone())
    }
}

pub fn rule_with_options(module: &str, options: Value) -> Rule {
    let options: Map<String, Value> = options.as_object().cloned().unwrap_or_default();
    Rule::new(module, module).with_options(options)
}
