// Panlatin Config Parser - TOML with Serde
// Parses general settings and user-defined profiles from TOML files

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;

use crate::profile::{Profile, ALL};
use crate::registry::ProfileRegistry;
use crate::{CharCode, TableError, TransformationTable};

/// Configuration parser errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("Invalid row key in profile '{profile}': {reason}")]
    InvalidKey { profile: String, reason: String },

    #[error("Invalid table for profile '{profile}': {source}")]
    Table {
        profile: String,
        #[source]
        source: TableError,
    },

    #[error("Profile '{profile}' is based on unknown profile '{base}'")]
    UnknownBase { profile: String, base: String },
}

/// Main configuration structure (root TOML table)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigToml {
    /// General settings
    #[serde(default)]
    pub general: Option<GeneralConfig>,

    /// User-defined profiles, by name
    #[serde(default)]
    pub profiles: IndexMap<String, ProfileToml>,
}

/// General settings
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneralConfig {
    /// Profile used when none is requested explicitly
    pub default_profile: Option<String>,
}

/// One `[profiles.NAME]` table
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileToml {
    /// Registered profile to start from
    pub base: Option<String>,

    /// Restrict the base to ASCII plus these characters
    pub only: Option<String>,

    /// Rows added to (or replacing rows of) the base, keyed by character
    #[serde(default)]
    pub rows: IndexMap<String, Vec<i64>>,
}

/// A validated profile definition, ready to register
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDefinition {
    pub name: String,
    pub base: Option<String>,
    pub only: Option<String>,
    pub rows: TransformationTable,
}

impl ProfileDefinition {
    /// Resolve the base against `registry` and build the final profile
    pub fn build(&self, registry: &ProfileRegistry) -> Result<Profile, ConfigError> {
        let mut table = match &self.base {
            Some(base) => registry
                .lookup(base)
                .map_err(|_| ConfigError::UnknownBase {
                    profile: self.name.clone(),
                    base: base.clone(),
                })?
                .table()
                .clone(),
            None => TransformationTable::new(),
        };

        if let Some(only) = &self.only {
            table = Profile::restricted(self.name.as_str(), &table, only)
                .table()
                .clone();
        }

        table.extend_from(&self.rows);
        Ok(Profile::new(self.name.as_str(), table))
    }
}

/// Main configuration structure
#[derive(Debug, Clone)]
pub struct Config {
    /// Profile used when none is requested explicitly
    pub default_profile: String,
    /// User profiles, in file order
    pub profiles: Vec<ProfileDefinition>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: ALL.to_string(),
            profiles: vec![],
        }
    }
}

impl Config {
    /// Parse a TOML configuration file
    pub fn from_toml_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML string
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let toml_config: ConfigToml =
            toml::from_str(content).map_err(|e| ConfigError::TomlParse(e.to_string()))?;

        toml_config.to_config()
    }

    /// Get the default config path (~/.config/panlatin/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("panlatin").join("config.toml"))
    }

    /// Load from the default location, or defaults if there is no file
    pub fn load_default() -> Result<Self, ConfigError> {
        if let Some(path) = Self::default_path() {
            if path.exists() {
                return Self::from_toml_path(path);
            }
        }
        Ok(Self::default())
    }

    /// Register every profile into `registry`, in file order.
    ///
    /// A profile may use any earlier one (or a built-in) as its base.
    pub fn register_into(&self, registry: &ProfileRegistry) -> Result<usize, ConfigError> {
        for definition in &self.profiles {
            let profile = definition.build(registry)?;
            log::debug!(
                "Loaded profile '{}' ({} rows, base {:?})",
                profile.name(),
                profile.table().len(),
                definition.base
            );
            registry.register_profile(profile);
        }
        Ok(self.profiles.len())
    }
}

impl ConfigToml {
    fn to_config(&self) -> Result<Config, ConfigError> {
        let mut config = Config::default();

        if let Some(default_profile) = self
            .general
            .as_ref()
            .and_then(|g| g.default_profile.clone())
        {
            config.default_profile = default_profile;
        }

        for (name, entry) in &self.profiles {
            config.profiles.push(entry.to_definition(name)?);
        }

        Ok(config)
    }
}

impl ProfileToml {
    fn to_definition(&self, name: &str) -> Result<ProfileDefinition, ConfigError> {
        let mut rows = Vec::with_capacity(self.rows.len());
        for (key, data) in &self.rows {
            let code = parse_row_key(key).map_err(|reason| ConfigError::InvalidKey {
                profile: name.to_string(),
                reason,
            })?;
            rows.push((code, data));
        }

        let rows = TransformationTable::from_data(rows).map_err(|source| ConfigError::Table {
            profile: name.to_string(),
            source,
        })?;

        Ok(ProfileDefinition {
            name: name.to_string(),
            base: self.base.clone(),
            only: self.only.clone(),
            rows,
        })
    }
}

/// Parse a row key: a single character, `U+XXXX`, or a decimal code
fn parse_row_key(key: &str) -> Result<CharCode, String> {
    let trimmed = key.trim();
    if trimmed.is_empty() && !key.is_empty() {
        // A lone space (or tab) is a valid base character
        return key.parse();
    }
    trimmed.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_row_key() {
        assert_eq!(parse_row_key("q"), Ok(CharCode::from('q')));
        assert_eq!(parse_row_key(" U+01EB "), Ok(CharCode(0x01EB)));
        assert_eq!(parse_row_key("491"), Ok(CharCode(0x01EB)));
        assert_eq!(parse_row_key(" "), Ok(CharCode::from(' ')));
        assert!(parse_row_key("qq").is_err());
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.default_profile, "all");
        assert!(config.profiles.is_empty());
    }

    #[test]
    fn test_config_with_profiles() {
        let toml = r#"
[general]
default_profile = "custom"

[profiles.custom]
base = "all"
only = "áé"

[profiles.custom.rows]
"q" = [0, 0x01EB, 0, 0, 0, 0, 0, 0, 0, 0]
"U+01EB" = [0x71, 0, 0, 0, 0, 0, 0, 0, 0, 0]
"#;

        let config = Config::from_toml(toml).unwrap();
        assert_eq!(config.default_profile, "custom");
        assert_eq!(config.profiles.len(), 1);
        let custom = &config.profiles[0];
        assert_eq!(custom.name, "custom");
        assert_eq!(custom.base.as_deref(), Some("all"));
        assert_eq!(custom.rows.len(), 2);
    }

    #[test]
    fn test_short_row_is_rejected() {
        let toml = r#"
[profiles.broken.rows]
"q" = [0, 0x01EB]
"#;

        let err = Config::from_toml(toml).unwrap_err();
        match err {
            ConfigError::Table { profile, source } => {
                assert_eq!(profile, "broken");
                assert_eq!(
                    source,
                    TableError::InvalidRow {
                        code: CharCode::from('q'),
                        len: 2
                    }
                );
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_surrogate_target_is_rejected() {
        let toml = r#"
[profiles.broken.rows]
"q" = [0, 0xD800, 0, 0, 0, 0, 0, 0, 0, 0]
"#;

        match Config::from_toml(toml).unwrap_err() {
            ConfigError::Table { profile, source } => {
                assert_eq!(profile, "broken");
                assert_eq!(source, TableError::InvalidCode(0xD800));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_bad_key_is_rejected() {
        let toml = r#"
[profiles.broken.rows]
"qq" = [0, 0, 0, 0, 0, 0, 0, 0, 0, 0]
"#;

        assert!(matches!(
            Config::from_toml(toml),
            Err(ConfigError::InvalidKey { .. })
        ));
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        assert!(matches!(
            Config::from_toml("[general]\nprofile = \"all\"\n"),
            Err(ConfigError::TomlParse(_))
        ));
    }

    #[test]
    fn test_register_into_resolves_bases_in_order() {
        let toml = r#"
[profiles.acute]
base = "all"
only = "áéíóú"

[profiles.acute-q]
base = "acute"

[profiles.acute-q.rows]
"q" = [0, 0x01EB, 0, 0, 0, 0, 0, 0, 0, 0]
"#;

        let registry = ProfileRegistry::with_defaults();
        let config = Config::from_toml(toml).unwrap();
        assert_eq!(config.register_into(&registry).unwrap(), 2);

        assert_eq!(
            registry.combine("acute-q", CharCode::from('q'), 1),
            Ok(Some(CharCode(0x01EB)))
        );
        assert_eq!(
            registry.combine("acute-q", CharCode::from('e'), 1),
            Ok(Some(CharCode::from('é')))
        );
        assert_eq!(registry.combine("acute-q", CharCode::from('e'), 2), Ok(None));
    }

    #[test]
    fn test_unknown_base() {
        let toml = r#"
[profiles.orphan]
base = "missing"
"#;

        let registry = ProfileRegistry::with_defaults();
        let config = Config::from_toml(toml).unwrap();
        assert!(matches!(
            config.register_into(&registry),
            Err(ConfigError::UnknownBase { .. })
        ));
        assert!(!registry.contains("orphan"));
    }
}
