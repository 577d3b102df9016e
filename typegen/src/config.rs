//! `typegen.yaml` configuration.
//!
//! ```yaml
//! package: alerts
//! types:
//!   - AlertsPolicy
//!   - AlertsIncidentPreference
//! scalars:
//!   EntityGuid: String
//! ```

use crate::error::TypegenError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use typegen_codegen::GeneratorConfig;

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "typegen.yaml";

/// Label used in errors for config text that did not come from a file.
const INLINE_SOURCE: &str = "<inline>";

/// Generation settings for one package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Module name written in the generated header.
    pub package: String,
    /// Root type names to generate.
    #[serde(default)]
    pub types: Vec<String>,
    /// Custom scalar name to Rust type overrides.
    #[serde(default)]
    pub scalars: BTreeMap<String, String>,
}

impl Config {
    /// Parses a config from YAML text.
    ///
    /// # Errors
    /// Returns `TypegenError::ConfigLoad` if the YAML is malformed.
    pub fn from_yaml(yaml: &str) -> Result<Self, TypegenError> {
        serde_yaml::from_str(yaml).map_err(|e| TypegenError::config(INLINE_SOURCE, e))
    }

    /// Loads a config file.
    ///
    /// # Errors
    /// Returns `TypegenError::ConfigLoad` if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, TypegenError> {
        let yaml = std::fs::read_to_string(path).map_err(|e| TypegenError::config(path, e))?;
        let config: Self = serde_yaml::from_str(&yaml).map_err(|e| TypegenError::config(path, e))?;

        if config.types.is_empty() {
            tracing::warn!("config '{}' lists no types", path.display());
        }
        tracing::debug!(
            package = %config.package,
            types = config.types.len(),
            "loaded config"
        );
        Ok(config)
    }

    /// Returns the generator options this config describes.
    #[must_use]
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            package: self.package.clone(),
            scalars: self.scalars.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let yaml = r#"
package: alerts
types:
  - AlertsPolicy
  - AlertsIncidentPreference
scalars:
  EpochMilliseconds: u64
"#;
        let config = Config::from_yaml(yaml).expect("Failed to parse");

        assert_eq!(config.package, "alerts");
        assert_eq!(config.types, vec!["AlertsPolicy", "AlertsIncidentPreference"]);
        assert_eq!(config.scalars.get("EpochMilliseconds").map(String::as_str), Some("u64"));
    }

    #[test]
    fn test_scalars_optional() {
        let config = Config::from_yaml("package: apm\ntypes: [ApmApplication]\n")
            .expect("Failed to parse");

        assert!(config.scalars.is_empty());
        assert!(config.generator_config().scalars.is_empty());
        assert_eq!(config.generator_config().package, "apm");
    }

    #[test]
    fn test_missing_package() {
        let result = Config::from_yaml("types: [A]\n");
        assert!(matches!(result, Err(TypegenError::ConfigLoad { .. })));
    }

    #[test]
    fn test_inline_yaml_error_label() {
        let err = Config::from_yaml("package: [").expect_err("malformed yaml");
        let message = err.to_string();

        assert!(message.contains("<inline>"));
        assert!(!message.contains(DEFAULT_CONFIG_FILE));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("typegen.yaml");
        let err = Config::load(&path).expect_err("missing file");

        assert!(err.to_string().contains("typegen.yaml"));
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("typegen.yaml");
        std::fs::write(&path, "package: dashboards\ntypes:\n  - DashboardEntity\n")
            .expect("write config");

        let config = Config::load(&path).expect("Failed to parse");
        assert_eq!(config.types, vec!["DashboardEntity"]);
    }
}
