use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use repolint_domain::{LoadedRuleset, RulesetSource};
use repolint_settings::{bundled_default, parse_ruleset_json, Ruleset};
use repolint_types::ids;
use tracing::debug;

/// Look for a ruleset file in `start` and each of its ancestors.
///
/// `repolint.json` wins over `repolinter.json` even when the legacy file is
/// closer to `start`.
pub fn find_ruleset_file(start: &Utf8Path) -> Option<Utf8PathBuf> {
    let start = absolute(start);
    [ids::RULESET_FILE_PRIMARY, ids::RULESET_FILE_LEGACY]
        .into_iter()
        .find_map(|name| {
            start
                .ancestors()
                .map(|dir| dir.join(name))
                .find(|candidate| candidate.is_file())
        })
}

/// Read and parse a ruleset file.
pub fn load_ruleset_file(path: &Utf8Path) -> anyhow::Result<Ruleset> {
    let text = std::fs::read_to_string(path).with_context(|| format!("read {path}"))?;
    parse_ruleset_json(&text).with_context(|| format!("parse {path}"))
}

/// Discovered ruleset for `target_dir`, falling back to the bundled default.
pub fn discover_ruleset(target_dir: &Utf8Path) -> anyhow::Result<LoadedRuleset> {
    match find_ruleset_file(target_dir) {
        Some(path) => {
            debug!(path = %path, "ruleset file found");
            Ok(LoadedRuleset {
                ruleset: load_ruleset_file(&path)?,
                origin: path.into_string(),
            })
        }
        None => {
            debug!("no ruleset file found; using bundled default");
            Ok(LoadedRuleset {
                origin: ids::RULESET_BUNDLED_DEFAULT.to_string(),
                ruleset: bundled_default()?,
            })
        }
    }
}

/// [`RulesetSource`] backed by [`discover_ruleset`]. The origin of a
/// discovered file is given relative to the target directory.
#[derive(Clone, Copy, Debug, Default)]
pub struct DiskRulesetSource;

impl RulesetSource for DiskRulesetSource {
    fn load(
        &self,
        target_dir: &Utf8Path,
    ) -> Result<LoadedRuleset, Box<dyn std::error::Error + Send + Sync>> {
        let mut loaded = discover_ruleset(target_dir)?;
        if loaded.origin != ids::RULESET_BUNDLED_DEFAULT {
            loaded.origin =
                relative_to(Utf8Path::new(&loaded.origin), &absolute(target_dir)).into_string();
        }
        Ok(loaded)
    }
}

fn absolute(path: &Utf8Path) -> Utf8PathBuf {
    path.canonicalize_utf8().unwrap_or_else(|_| path.to_path_buf())
}

/// `path` as seen from `base`, climbing with `..` where needed.
fn relative_to(path: &Utf8Path, base: &Utf8Path) -> Utf8PathBuf {
    let path_parts: Vec<_> = path.components().collect();
    let base_parts: Vec<_> = base.components().collect();
    let common = path_parts
        .iter()
        .zip(&base_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut out = Utf8PathBuf::new();
    for _ in common..base_parts.len() {
        out.push("..");
    }
    for part in &path_parts[common..] {
        out.push(part.as_str());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn utf8_root(tmp: &TempDir) -> Utf8PathBuf {
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path");
        absolute(&root)
    }

    fn write_file(path: &Utf8Path, contents: &str) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent");
        }
        std::fs::write(path, contents).expect("write file");
    }

    const MINIMAL: &str = r#"{"rules": {"all": {"readme:file-existence": ["error", {"files": ["README*"]}]}}}"#;

    #[test]
    fn finds_ruleset_in_ancestor() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        write_file(&root.join("repolint.json"), MINIMAL);
        let nested = root.join("a/b");
        std::fs::create_dir_all(&nested).expect("mkdir");

        assert_eq!(find_ruleset_file(&nested), Some(root.join("repolint.json")));
        let loaded = discover_ruleset(&nested).expect("discover");
        assert_eq!(loaded.origin, root.join("repolint.json").as_str());
        assert!(loaded.ruleset.rules.contains_key("all"));
    }

    #[test]
    fn primary_name_beats_closer_legacy_file() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        write_file(&root.join("repolint.json"), MINIMAL);
        write_file(&root.join("pkg/repolinter.json"), MINIMAL);

        assert_eq!(
            find_ruleset_file(&root.join("pkg")),
            Some(root.join("repolint.json"))
        );
    }

    #[test]
    fn legacy_name_is_used_when_alone() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        write_file(&root.join("repolinter.json"), MINIMAL);
        assert_eq!(find_ruleset_file(&root), Some(root.join("repolinter.json")));
    }

    #[test]
    fn malformed_ruleset_file_is_an_error() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        write_file(&root.join("repolint.json"), r#"{"rules": {"all": 3}}"#);
        let err = discover_ruleset(&root).unwrap_err();
        assert!(format!("{err:#}").contains("parse"));
    }

    #[test]
    fn source_origin_is_relative_to_target_dir() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        write_file(&root.join("repolint.json"), MINIMAL);
        std::fs::create_dir_all(root.join("a/b")).expect("mkdir");

        let here = DiskRulesetSource.load(&root).expect("load");
        assert_eq!(here.origin, "repolint.json");
        let above = DiskRulesetSource.load(&root.join("a/b")).expect("load");
        assert_eq!(above.origin, "../../repolint.json");
    }

    #[test]
    fn relative_paths_climb_and_descend() {
        assert_eq!(
            relative_to(Utf8Path::new("/r/x/repolint.json"), Utf8Path::new("/r/y/z")),
            Utf8PathBuf::from("../../x/repolint.json")
        );
        assert_eq!(
            relative_to(Utf8Path::new("/r/repolint.json"), Utf8Path::new("/r")),
            Utf8PathBuf::from("repolint.json")
        );
    }

    #[test]
    fn source_reports_bundled_default_origin() {
        let tmp = TempDir::new().expect("temp dir");
        let root = utf8_root(&tmp);
        if find_ruleset_file(&root).is_some() {
            // An ancestor of the temp dir carries a ruleset; nothing to assert.
            return;
        }
        let loaded = DiskRulesetSource.load(&root).expect("load");
        assert_eq!(loaded.origin, ids::RULESET_BUNDLED_DEFAULT);
        assert!(loaded.ruleset.rules.contains_key(ids::TARGET_ALL));
    }
}
