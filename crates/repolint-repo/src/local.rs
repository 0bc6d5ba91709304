use camino::{Utf8Path, Utf8PathBuf};
use repolint_domain::{compile_globs, FileSystem, FsError, PathFilter};
use repolint_types::RepoPath;
use std::process::Command;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// [`FileSystem`] over a directory on local disk. `.git` is never walked.
#[derive(Clone, Debug)]
pub struct LocalFileSystem {
    root: Utf8PathBuf,
    filter_paths: Vec<String>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    File,
    Dir,
}

impl LocalFileSystem {
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self {
            root: root.into(),
            filter_paths: Vec::new(),
        }
    }

    fn walk(&self, kind: EntryKind, globs: &[String], nocase: bool) -> Result<Vec<RepoPath>, FsError> {
        let set = compile_globs(globs, nocase)?;
        let filter = PathFilter::new(&self.filter_paths)?;

        let mut out: Vec<RepoPath> = WalkDir::new(&self.root)
            .min_depth(1)
            .into_iter()
            .filter_entry(|e| e.file_name() != ".git")
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    warn!(error = %err, "skipping unreadable entry");
                    None
                }
            })
            .filter(|e| match kind {
                EntryKind::File => e.file_type().is_file(),
                EntryKind::Dir => e.file_type().is_dir(),
            })
            .filter_map(|e| {
                let rel = e.path().strip_prefix(&self.root).ok()?;
                Utf8Path::from_path(rel).map(RepoPath::from)
            })
            .filter(|p| set.is_match(p.as_str()) && filter.allows(p))
            .collect();

        out.sort();
        Ok(out)
    }
}

impl FileSystem for LocalFileSystem {
    fn target_dir(&self) -> &Utf8Path {
        &self.root
    }

    fn filter_paths(&self) -> &[String] {
        &self.filter_paths
    }

    fn set_scope(&mut self, target_dir: &Utf8Path, filter_paths: &[String]) {
        self.root = target_dir.to_path_buf();
        self.filter_paths = filter_paths.to_vec();
    }

    fn find_all(&self, globs: &[String], nocase: bool) -> Result<Vec<RepoPath>, FsError> {
        self.walk(EntryKind::File, globs, nocase)
    }

    fn find_all_dirs(&self, globs: &[String], nocase: bool) -> Result<Vec<RepoPath>, FsError> {
        self.walk(EntryKind::Dir, globs, nocase)
    }

    fn file_exists(&self, path: &RepoPath) -> bool {
        self.root.join(path.as_str()).is_file()
    }

    fn is_dir(&self, path: &RepoPath) -> bool {
        self.root.join(path.as_str()).is_dir()
    }

    fn read_file(&self, path: &RepoPath) -> Result<String, FsError> {
        let abs = self.root.join(path.as_str());
        let bytes = std::fs::read(&abs).map_err(|source| FsError::Read {
            path: path.to_string(),
            source,
        })?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn contributor_emails(&self) -> Result<Vec<String>, FsError> {
        let output = Command::new("git")
            .args(["log", "--format=%aE"])
            .current_dir(&self.root)
            .output()
            .map_err(|err| FsError::Git(format!("failed to execute git log: {err}")))?;
        if !output.status.success() {
            return Err(FsError::Git(format!(
                "git log failed with status {}: {}",
                output.status.code().unwrap_or(1),
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        let emails: Vec<String> = String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        debug!(commits = emails.len(), "read git authors");
        Ok(emails)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn utf8_root(tmp: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path")
    }

    fn write_file(path: &Utf8Path, contents: &str) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(path, contents).expect("write file");
    }

    fn globs(patterns: &[&str]) -> Vec<String> {
        patterns.iter().map(|s| s.to_string()).collect()
    }

    fn fixture() -> (TempDir, LocalFileSystem) {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        write_file(&root.join("README.md"), "# demo");
        write_file(&root.join("LICENSE"), "MIT");
        write_file(&root.join("src/lib.rs"), "");
        write_file(&root.join("src/nested/mod.rs"), "");
        write_file(&root.join("docs/guide.md"), "");
        write_file(&root.join(".git/HEAD"), "ref: refs/heads/main");
        let fs = LocalFileSystem::new(root);
        (tmp, fs)
    }

    #[test]
    fn finds_files_relative_and_sorted() {
        let (_tmp, fs) = fixture();
        let found = fs.find_all(&globs(&["**/*.rs"]), false).expect("find");
        let paths: Vec<&str> = found.iter().map(RepoPath::as_str).collect();
        assert_eq!(paths, vec!["src/lib.rs", "src/nested/mod.rs"]);

        let top: Vec<RepoPath> = fs.find_all(&globs(&["*.md"]), false).expect("find");
        assert_eq!(top, vec![RepoPath::new("README.md")]);
    }

    #[test]
    fn git_directory_is_not_walked() {
        let (_tmp, fs) = fixture();
        assert!(fs.find_all(&globs(&["**/HEAD"]), false).expect("find").is_empty());
        assert!(fs.find_all_dirs(&globs(&[".git"]), false).expect("find").is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn unreadable_directory_does_not_stop_the_walk() {
        use std::os::unix::fs::PermissionsExt;

        let (_tmp, fs) = fixture();
        let locked = fs.target_dir().join("locked");
        write_file(&locked.join("secret.rs"), "");
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000))
            .expect("lock dir");

        let found = fs.find_all(&globs(&["src/**/*.rs"]), false);
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755))
            .expect("unlock dir");

        let found = found.expect("find");
        assert_eq!(
            found,
            vec![RepoPath::new("src/lib.rs"), RepoPath::new("src/nested/mod.rs")]
        );
    }

    #[test]
    fn nocase_and_directories() {
        let (_tmp, fs) = fixture();
        assert!(fs.find_first(&globs(&["readme*"]), false).expect("find").is_none());
        assert_eq!(
            fs.find_first(&globs(&["readme*"]), true).expect("find"),
            Some(RepoPath::new("README.md"))
        );
        let dirs = fs.find_all_dirs(&globs(&["src", "src/*"]), false).expect("dirs");
        assert_eq!(dirs, vec![RepoPath::new("src"), RepoPath::new("src/nested")]);
        assert!(fs.is_dir(&RepoPath::new("docs")));
        assert!(fs.file_exists(&RepoPath::new("LICENSE")));
        assert!(!fs.file_exists(&RepoPath::new("docs")));
    }

    #[test]
    fn scope_filters_restrict_results() {
        let (_tmp, mut fs) = fixture();
        let root = fs.target_dir().to_path_buf();
        fs.set_scope(&root, &globs(&["src"]));
        let found = fs.find_all(&globs(&["**/*"]), false).expect("find");
        assert!(found.iter().all(|p| p.as_str().starts_with("src/")));
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn read_file_reports_missing_path() {
        let (_tmp, fs) = fixture();
        assert_eq!(fs.read_file(&RepoPath::new("README.md")).expect("read"), "# demo");
        let err = fs.read_file(&RepoPath::new("nope.txt")).unwrap_err();
        assert!(err.to_string().starts_with("read nope.txt:"));
    }

    #[test]
    fn contributor_emails_outside_git_is_an_error() {
        let tmp = TempDir::new().expect("temp dir");
        let fs = LocalFileSystem::new(utf8_root(&tmp));
        let err = fs.contributor_emails().unwrap_err();
        assert!(matches!(err, FsError::Git(_)));
    }
}
