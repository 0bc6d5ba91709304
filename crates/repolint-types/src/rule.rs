use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Severity level attached to a rule declaration.
///
/// Levels are free-form strings in rulesets; the well-known ones get variants.
/// Only [`Level::Error`] influences the exit status.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Level {
    #[default]
    Error,
    Warning,
    Off,
    Other(String),
}

impl Level {
    pub fn as_str(&self) -> &str {
        match self {
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Off => "off",
            Level::Other(s) => s.as_str(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Level::Error)
    }
}

impl From<&str> for Level {
    fn from(value: &str) -> Self {
        match value {
            "error" => Level::Error,
            "warning" => Level::Warning,
            "off" => Level::Off,
            other => Level::Other(other.to_string()),
        }
    }
}

impl From<String> for Level {
    fn from(value: String) -> Self {
        Level::from(value.as_str())
    }
}

impl From<Level> for String {
    fn from(value: Level) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rule declaration after normalization.
///
/// `id` names this instance, `module` names the implementation it runs. They
/// differ when a ruleset aliases a module with `id:module` keys.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Rule {
    pub id: String,
    pub module: String,
    pub enabled: bool,
    #[schemars(with = "String")]
    pub level: Level,
    #[serde(default)]
    pub options: Map<String, Value>,
}

impl Rule {
    /// An enabled, error-level rule with no options.
    pub fn new(id: impl Into<String>, module: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            module: module.into(),
            enabled: true,
            level: Level::Error,
            options: Map::new(),
        }
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn with_options(mut self, options: Map<String, Value>) -> Self {
        self.options = options;
        self
    }

    pub fn option_str(&self, key: &str) -> Option<&str> {
        self.options.get(key).and_then(Value::as_str)
    }

    pub fn option_bool(&self, key: &str) -> Option<bool> {
        self.options.get(key).and_then(Value::as_bool)
    }

    /// Reads a list of strings; a bare string counts as a one-element list.
    pub fn option_str_list(&self, key: &str) -> Vec<String> {
        match self.options.get(key) {
            Some(Value::String(s)) => vec![s.clone()],
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        }
    }
}
