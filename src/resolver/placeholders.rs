//! Placeholder scanning, missing-value resolution, and substitution.

use super::variables::VariableMap;
use crate::error::Result;
use crate::interaction::Interaction;
use regex::{Captures, Regex};
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::debug;

/// `${name}` with `name` restricted to ASCII word characters.
static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([A-Za-z0-9_]+)\}").expect("Invalid placeholder regex"));

/// Literal placeholder text for `name`.
fn placeholder(name: &str) -> String {
    format!("${{{}}}", name)
}

/// Distinct placeholder names in `text`, in order of first appearance.
pub fn extract_placeholders(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    PLACEHOLDER_REGEX
        .captures_iter(text)
        .map(|caps| caps[1].to_string())
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

/// Fill in every name of `names` that `base` has no value for.
///
/// Each missing name is prompted for once, in the order given. A cancelled
/// or empty answer stores the literal `${name}`, so the placeholder survives
/// substitution unchanged.
pub fn resolve_missing(
    base: &VariableMap,
    names: &[String],
    interaction: &mut dyn Interaction,
) -> Result<VariableMap> {
    let mut resolved = base.clone();

    for name in names {
        if resolved.contains_key(name) {
            continue;
        }

        let answer = interaction.prompt_text(&format!("Enter a value for {}:", name))?;
        let value = match answer {
            Some(value) if !value.is_empty() => value,
            _ => {
                debug!(variable = %name, "no value given, keeping placeholder");
                placeholder(name)
            }
        };
        resolved.insert(name.clone(), value);
    }

    Ok(resolved)
}

/// Replace every `${name}` that has a value in `vars`.
///
/// Single pass: values are inserted as-is and never scanned again, so a value
/// containing `${...}` is not expanded. Unknown names are left untouched.
pub fn substitute(text: &str, vars: &VariableMap) -> String {
    PLACEHOLDER_REGEX
        .replace_all(text, |caps: &Captures| match vars.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Extract, resolve missing values interactively, then substitute.
pub fn apply_variables(
    text: &str,
    base: &VariableMap,
    interaction: &mut dyn Interaction,
) -> Result<String> {
    let names = extract_placeholders(text);
    debug!(placeholders = ?names, "scanned template");

    let vars = resolve_missing(base, &names, interaction)?;
    Ok(substitute(text, &vars))
}
