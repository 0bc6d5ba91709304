//! Repository adapters: the on-disk filesystem provider and ruleset discovery.
//!
//! This crate does filesystem IO and shells out to `git` for contributor
//! history. Everything else lives in `repolint-domain`.

#![forbid(unsafe_code)]

mod discover;
mod local;

pub use discover::{discover_ruleset, find_ruleset_file, load_ruleset_file, DiskRulesetSource};
pub use local::LocalFileSystem;
