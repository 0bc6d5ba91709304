use crate::error::AxiomError;
use crate::fs::FileSystem;
use std::collections::BTreeSet;

const LICENSE_FILE_GLOBS: &[&str] = &["LICENSE*", "LICENCE*", "COPYING*"];

/// Top-level license file patterns, matched case-insensitively.
pub fn license_globs() -> Vec<String> {
    LICENSE_FILE_GLOBS.iter().map(|g| g.to_string()).collect()
}

/// Identify a license by well-known phrases in its text.
///
/// Returns an SPDX identifier. Order matters: LGPL text mentions the GPL.
pub fn detect_license(text: &str) -> Option<&'static str> {
    let t = text.to_lowercase();
    let has = |needle: &str| t.contains(needle);

    if has("gnu lesser general public license") {
        return Some(if has("version 3") { "LGPL-3.0" } else { "LGPL-2.1" });
    }
    if has("gnu affero general public license") {
        return Some("AGPL-3.0");
    }
    if has("gnu general public license") {
        return Some(if has("version 3") { "GPL-3.0" } else { "GPL-2.0" });
    }
    if has("apache license") && has("version 2.0") {
        return Some("Apache-2.0");
    }
    if has("mozilla public license") && has("2.0") {
        return Some("MPL-2.0");
    }
    if has("permission is hereby granted, free of charge") {
        return Some("MIT");
    }
    if has("redistribution and use in source and binary forms") {
        return Some(if has("neither the name") { "BSD-3-Clause" } else { "BSD-2-Clause" });
    }
    if has("permission to use, copy, modify, and/or distribute this software") {
        return Some("ISC");
    }
    if has("this is free and unencumbered software released into the public domain") {
        return Some("Unlicense");
    }
    None
}

/// SPDX ids of licenses found in top-level license files.
pub fn run(fs: &dyn FileSystem) -> Result<Vec<String>, AxiomError> {
    let mut found = BTreeSet::new();
    for path in fs.find_all(&license_globs(), true)? {
        let text = fs.read_file(&path)?;
        if let Some(id) = detect_license(&text) {
            found.insert(id);
        }
    }
    Ok(found.into_iter().map(str::to_string).collect())
}
