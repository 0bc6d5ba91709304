use crate::error::AxiomError;
use crate::fs::FileSystem;
use std::collections::BTreeSet;

const EXTENSIONS: &[(&str, &str)] = &[
    ("c", "c"),
    ("h", "c"),
    ("cc", "c++"),
    ("cpp", "c++"),
    ("cxx", "c++"),
    ("hpp", "c++"),
    ("cs", "c#"),
    ("css", "css"),
    ("go", "go"),
    ("html", "html"),
    ("java", "java"),
    ("js", "javascript"),
    ("jsx", "javascript"),
    ("mjs", "javascript"),
    ("cjs", "javascript"),
    ("kt", "kotlin"),
    ("php", "php"),
    ("py", "python"),
    ("rb", "ruby"),
    ("rs", "rust"),
    ("scala", "scala"),
    ("sh", "shell"),
    ("bash", "shell"),
    ("swift", "swift"),
    ("ts", "typescript"),
    ("tsx", "typescript"),
];

/// Languages present in the target, by file extension, sorted and deduplicated.
pub fn run(fs: &dyn FileSystem) -> Result<Vec<String>, AxiomError> {
    let files = fs.find_all(&["**/*".to_string()], false)?;
    let languages: BTreeSet<&str> = files
        .iter()
        .filter_map(|p| p.as_str().rsplit_once('.').map(|(_, ext)| ext.to_lowercase()))
        .filter_map(|ext| {
            EXTENSIONS
                .iter()
                .find(|(e, _)| *e == ext)
                .map(|(_, lang)| *lang)
        })
        .collect();
    Ok(languages.into_iter().map(str::to_string).collect())
}
