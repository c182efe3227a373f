//! Template variable resolution.
//!
//! This module turns template text into file content:
//!
//! - **Placeholders**: find `${name}` tokens and substitute them in one pass
//! - **Variables**: the merged variable map (built-ins, configured, per-invocation)
//! - **Filename**: derive a safe file name from a title
//!
//! # Syntax
//!
//! `${name}` where `name` is letters, digits, and underscores. Anything else,
//! such as `${my-var}` or `{name}`, is passed through literally.
//!
//! A placeholder with no value stays in the output as written.

mod filename;
mod placeholders;
mod variables;

pub use filename::sanitize_filename;
pub use placeholders::apply_variables;

#[cfg(test)]
pub use placeholders::extract_placeholders;
pub use variables::{BuiltinVariables, VariableMap, VariableSet, parse_assignment};
