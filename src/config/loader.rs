use std::fs;
use std::path::Path;

use crate::error::{DocGuardError, Result};

use super::Rubric;

/// Rubric file looked up in the working directory when no path is given.
pub const DEFAULT_RUBRIC_FILE: &str = ".doc-guard.toml";

/// Load the effective rubric.
///
/// An explicit path must exist; the default file is optional and silently
/// falls back to the built-in rubric. `no_config` skips file loading
/// entirely.
///
/// # Errors
/// Returns an error if an explicitly given file is missing or not valid
/// rubric TOML.
pub fn load_rubric(path: Option<&Path>, no_config: bool) -> Result<Rubric> {
    if no_config {
        return Ok(Rubric::default());
    }

    match path {
        Some(explicit) => {
            if !explicit.exists() {
                return Err(DocGuardError::Config(format!(
                    "Rubric file not found: {}",
                    explicit.display()
                )));
            }
            read_rubric(explicit)
        }
        None => {
            let default = Path::new(DEFAULT_RUBRIC_FILE);
            if default.exists() {
                read_rubric(default)
            } else {
                Ok(Rubric::default())
            }
        }
    }
}

fn read_rubric(path: &Path) -> Result<Rubric> {
    let text = fs::read_to_string(path)?;
    Ok(toml::from_str(&text)?)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
