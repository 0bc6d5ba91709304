//! Axioms: filesystem inspectors whose outputs select which rule targets run.

use crate::error::AxiomError;
use crate::fs::FileSystem;
use repolint_types::ids;
use std::collections::BTreeMap;

mod contributor_count;
mod language;
mod license;

pub use license::{detect_license, license_globs};

pub type CategoricalFn = dyn Fn(&dyn FileSystem) -> Result<Vec<String>, AxiomError>;
pub type CountingFn = dyn Fn(&dyn FileSystem) -> Result<i64, AxiomError>;

/// A registered axiom.
///
/// Categorical axioms name discrete outcomes (`license=MIT`). Counting axioms
/// produce a number that rule-section keys containing `keyword` compare against
/// (`contributors>10`).
pub enum Axiom {
    Categorical(Box<CategoricalFn>),
    Counting {
        keyword: String,
        count: Box<CountingFn>,
    },
}

impl std::fmt::Debug for Axiom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axiom::Categorical(_) => f.write_str("Categorical"),
            Axiom::Counting { keyword, .. } => {
                f.debug_struct("Counting").field("keyword", keyword).finish()
            }
        }
    }
}

/// Lookup table from axiom id to implementation.
#[derive(Debug, Default)]
pub struct AxiomRegistry {
    entries: BTreeMap<String, Axiom>,
}

impl AxiomRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with `language`, `license` and `contributor-count`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register_categorical(ids::AXIOM_LANGUAGE, language::run);
        registry.register_categorical(ids::AXIOM_LICENSE, license::run);
        registry.register_counting(
            ids::AXIOM_CONTRIBUTOR_COUNT,
            ids::KEYWORD_CONTRIBUTOR,
            contributor_count::run,
        );
        registry
    }

    pub fn register_categorical<F>(&mut self, id: impl Into<String>, f: F)
    where
        F: Fn(&dyn FileSystem) -> Result<Vec<String>, AxiomError> + 'static,
    {
        self.entries.insert(id.into(), Axiom::Categorical(Box::new(f)));
    }

    pub fn register_counting<F>(&mut self, id: impl Into<String>, keyword: impl Into<String>, f: F)
    where
        F: Fn(&dyn FileSystem) -> Result<i64, AxiomError> + 'static,
    {
        self.entries.insert(
            id.into(),
            Axiom::Counting {
                keyword: keyword.into(),
                count: Box::new(f),
            },
        );
    }

    pub fn get(&self, id: &str) -> Option<&Axiom> {
        self.entries.get(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_cover_stable_ids() {
        let registry = AxiomRegistry::with_builtins();
        let registered: Vec<&str> = registry.ids().collect();
        assert_eq!(registered, ids::all_axiom_ids());
        assert!(matches!(
            registry.get(ids::AXIOM_CONTRIBUTOR_COUNT),
            Some(Axiom::Counting { keyword, .. }) if keyword == ids::KEYWORD_CONTRIBUTOR
        ));
        assert!(matches!(
            registry.get(ids::AXIOM_LICENSE),
            Some(Axiom::Categorical(_))
        ));
    }
}
