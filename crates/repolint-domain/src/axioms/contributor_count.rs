use crate::error::AxiomError;
use crate::fs::FileSystem;
use std::collections::BTreeSet;

/// Number of distinct contributor identities (case-insensitive).
pub fn run(fs: &dyn FileSystem) -> Result<i64, AxiomError> {
    let distinct: BTreeSet<String> = fs
        .contributor_emails()?
        .into_iter()
        .map(|e| e.trim().to_lowercase())
        .filter(|e| !e.is_empty())
        .collect();
    Ok(distinct.len() as i64)
}
