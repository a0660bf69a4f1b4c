//! Configuration file support for sbom-unify.
//!
//! Provides YAML-based configuration through `sbom-unify.config.yml` files,
//! including data structures, file loading, and validation. Command-line
//! flags take precedence over every value here.

use anyhow::{bail, Context};
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::path::Path;

use crate::sbom_engine::domain::{MergePolicy, SpecVersion};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "sbom-unify.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Spec version documents are validated against (`1.4`, `1.5`, `1.6`).
    #[serde(default, deserialize_with = "version_string")]
    pub target_spec_version: Option<String>,
    pub check_vcs: Option<bool>,
    pub vcs_timeout_secs: Option<u64>,
    pub app_name: Option<String>,
    pub app_version: Option<String>,
    pub manufacturer: Option<String>,
    /// `strict` or `permissive`.
    pub merge_policy: Option<String>,
    pub link_sources: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Accepts `1.6` as well as `"1.6"`: unquoted versions are YAML floats.
fn version_string<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(f64),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    }))
}

impl ConfigFile {
    /// Parsed `target_spec_version`; always valid after loading.
    pub fn target(&self) -> Option<SpecVersion> {
        self.target_spec_version
            .as_deref()
            .and_then(|v| v.parse().ok())
    }

    /// Parsed `merge_policy`; always valid after loading.
    pub fn policy(&self) -> Option<MergePolicy> {
        self.merge_policy.as_deref().and_then(|p| p.parse().ok())
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    tracing::debug!(path = %path.display(), "config loaded");
    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(version) = config.target_spec_version.as_deref() {
        if let Err(e) = version.parse::<SpecVersion>() {
            bail!(
                "Invalid config: target_spec_version: {}\n\n💡 Hint: Use one of 1.4, 1.5 or 1.6.",
                e
            );
        }
    }

    if config.vcs_timeout_secs == Some(0) {
        bail!(
            "Invalid config: vcs_timeout_secs must be greater than 0.\n\n\
             💡 Hint: Remove the field to use the default timeout."
        );
    }

    if let Some(policy) = config.merge_policy.as_deref() {
        if let Err(e) = policy.parse::<MergePolicy>() {
            bail!("Invalid config: merge_policy: {}", e);
        }
    }

    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(
            &dir,
            "config.yml",
            r#"
target_spec_version: "1.5"
check_vcs: true
vcs_timeout_secs: 3
app_name: Platform
app_version: 2.0.0
manufacturer: Test Corp
merge_policy: permissive
link_sources: true
"#,
        );

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.target(), Some(SpecVersion::V1_5));
        assert_eq!(config.check_vcs, Some(true));
        assert_eq!(config.vcs_timeout_secs, Some(3));
        assert_eq!(config.app_name.as_deref(), Some("Platform"));
        assert_eq!(config.app_version.as_deref(), Some("2.0.0"));
        assert_eq!(config.manufacturer.as_deref(), Some("Test Corp"));
        assert_eq!(config.policy(), Some(MergePolicy::Permissive));
        assert_eq!(config.link_sources, Some(true));
        assert!(config.unknown_fields.is_empty());
    }

    #[test]
    fn test_unquoted_spec_version() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "config.yml", "target_spec_version: 1.4\n");

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.target(), Some(SpecVersion::V1_4));
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, CONFIG_FILENAME, "check_vcs: false\n");

        let config = discover_config(dir.path()).unwrap().unwrap();
        assert_eq!(config.check_vcs, Some(false));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        assert!(discover_config(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config_from_path(Path::new("/nonexistent/config.yml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(&dir, "bad.yml", "invalid: yaml: [[[broken");

        let err = load_config_from_path(&config_path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let dir = TempDir::new().unwrap();
        for (content, expected) in [
            ("target_spec_version: \"2.0\"\n", "target_spec_version"),
            ("vcs_timeout_secs: 0\n", "vcs_timeout_secs"),
            ("merge_policy: lenient\n", "merge_policy"),
        ] {
            let config_path = write_config(&dir, "config.yml", content);
            let err = load_config_from_path(&config_path).unwrap_err();
            assert!(
                err.to_string().contains(expected),
                "{} should mention {}",
                err,
                expected
            );
        }
    }

    #[test]
    fn test_unknown_fields_warning() {
        let dir = TempDir::new().unwrap();
        let config_path = write_config(
            &dir,
            "config.yml",
            r#"
check_vcs: true
format: json
severity: high
"#,
        );

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 2);
        assert!(config.unknown_fields.contains_key("format"));
        assert!(config.unknown_fields.contains_key("severity"));
    }

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();
        assert!(config.target().is_none());
        assert!(config.policy().is_none());
        assert!(config.check_vcs.is_none());
        assert!(config.unknown_fields.is_empty());
    }
}
