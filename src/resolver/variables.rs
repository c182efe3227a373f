//! Variable map construction.
//!
//! Sources merge in increasing precedence; a later source overwrites an
//! earlier one on the same name:
//!
//! 1. Built-ins: `ISODate`, `date`, `timestamp`, `workspaceName`
//! 2. Configured `variables`
//! 3. Per-invocation values (`--var NAME=VALUE`)
//! 4. `title`

use chrono::{DateTime, Local, Utc};
use std::collections::BTreeMap;

/// Variable name to value.
pub type VariableMap = BTreeMap<String, String>;

/// Values computed at invocation time.
#[derive(Debug, Clone)]
pub struct BuiltinVariables {
    pub now: DateTime<Utc>,
    pub workspace_name: String,
}

impl BuiltinVariables {
    /// Built-ins for the current instant.
    pub fn now(workspace_name: impl Into<String>) -> Self {
        Self::at(Utc::now(), workspace_name)
    }

    pub fn at(now: DateTime<Utc>, workspace_name: impl Into<String>) -> Self {
        Self {
            now,
            workspace_name: workspace_name.into(),
        }
    }

    /// UTC calendar date, e.g. `2024-01-01`.
    pub fn iso_date(&self) -> String {
        self.now.format("%Y-%m-%d").to_string()
    }

    /// Local date and time, e.g. `1/1/2024, 9:30:00 AM`.
    pub fn date(&self) -> String {
        self.now
            .with_timezone(&Local)
            .format("%-m/%-d/%Y, %-I:%M:%S %p")
            .to_string()
    }

    /// UTC instant safe for file names, e.g. `2024-01-01T09-30-00-000Z`.
    pub fn timestamp(&self) -> String {
        self.now.format("%Y-%m-%dT%H-%M-%S-%3fZ").to_string()
    }

    pub fn to_map(&self) -> VariableMap {
        let mut map = VariableMap::new();
        map.insert("ISODate".to_string(), self.iso_date());
        map.insert("date".to_string(), self.date());
        map.insert("timestamp".to_string(), self.timestamp());
        map.insert("workspaceName".to_string(), self.workspace_name.clone());
        map
    }
}

/// Builder for the merged variable map of one invocation.
#[derive(Debug, Clone, Default)]
pub struct VariableSet {
    map: VariableMap,
}

impl VariableSet {
    /// Start from the built-in values.
    pub fn new(builtins: &BuiltinVariables) -> Self {
        Self {
            map: builtins.to_map(),
        }
    }

    /// Layer configured static variables over the current set.
    pub fn with_configured(self, configured: &BTreeMap<String, String>) -> Self {
        self.with_overrides(configured.iter().map(|(k, v)| (k.clone(), v.clone())))
    }

    /// Layer per-invocation values over the current set, in order.
    pub fn with_overrides<I>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.map.extend(overrides);
        self
    }

    /// Set `title`; it wins over every other source.
    pub fn with_title(mut self, title: &str) -> Self {
        self.map.insert("title".to_string(), title.to_string());
        self
    }

    pub fn into_map(self) -> VariableMap {
        self.map
    }
}

/// Parse a `NAME=VALUE` assignment from the command line.
///
/// The value may be empty or contain `=`; the name must be word characters.
pub fn parse_assignment(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid variable '{}': expected NAME=VALUE", s))?;

    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(format!(
            "invalid variable name '{}': use only letters, digits, and underscores",
            name
        ));
    }

    Ok((name.to_string(), value.to_string()))
}
