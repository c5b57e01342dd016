//! Loading of the language file and validation of CLI settings.
//!
//! The language file follows the GitHub Linguist `languages.yml` layout: a
//! top-level mapping of language name to attributes. Only `color` is read;
//! languages without one are not colors and are dropped here.

use crate::error::CliError;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct Language {
    #[serde(default)]
    color: Option<String>,
}

/// Parses language-file YAML into a name -> hex color mapping.
pub fn parse_languages(content: &str) -> Result<BTreeMap<String, String>, CliError> {
    let languages: BTreeMap<String, Language> = serde_yaml::from_str(content)?;
    let total = languages.len();
    let colors: BTreeMap<String, String> = languages
        .into_iter()
        .filter_map(|(name, lang)| match lang.color {
            Some(color) => Some((name, color)),
            None => {
                debug!(name = %name, "language has no color");
                None
            }
        })
        .collect();
    debug!(total, colored = colors.len(), "parsed language file");
    Ok(colors)
}

/// Reads and parses the language file at `path`.
pub fn load_languages(path: &Path) -> Result<BTreeMap<String, String>, CliError> {
    let content = fs::read_to_string(path).map_err(|e| {
        CliError::Io(format!(
            "cannot read {}: {e}\ndid you forget `--yaml <languages.yml>`?",
            path.display()
        ))
    })?;
    parse_languages(&content)
}

/// Rejects thresholds that would make every report empty or meaningless.
pub fn validate_threshold(threshold: f64) -> Result<f64, CliError> {
    if threshold.is_finite() && threshold >= 0.0 {
        Ok(threshold)
    } else {
        Err(CliError::Input(format!(
            "threshold must be a finite, non-negative number, got {threshold}"
        )))
    }
}
