//! Engine configuration.

use config::{Config, File, FileFormat};
use derive_builder::Builder;
use derive_getters::Getters;
use loreweave_error::{ConfigError, LoreweaveError, LoreweaveResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, instrument};

/// Turn engine settings.
///
/// # Examples
///
/// ```
/// use loreweave_narrative::NarrativeConfig;
///
/// let config = NarrativeConfig::builder()
///     .separator("___SEP___")
///     .history_window(4_usize)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.separator(), "___SEP___");
/// assert_eq!(*config.fact_window(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, Builder)]
#[builder(
    setter(into),
    build_fn(validate = "Self::validate", error = "loreweave_error::BuilderError")
)]
pub struct NarrativeConfig {
    /// Token separating the narrative from the structured block
    #[serde(default = "default_separator")]
    #[builder(default = "default_separator()")]
    separator: String,

    /// History entries scanned for lore keywords
    #[serde(default = "default_lore_history_window")]
    #[builder(default = "default_lore_history_window()")]
    lore_history_window: usize,

    /// History entries rendered into the prompt
    #[serde(default = "default_history_window")]
    #[builder(default = "default_history_window()")]
    history_window: usize,

    /// World facts rendered into the prompt
    #[serde(default = "default_fact_window")]
    #[builder(default = "default_fact_window()")]
    fact_window: usize,

    /// Text shown when the generation stream fails
    #[serde(default = "default_fallback_narrative")]
    #[builder(default = "default_fallback_narrative()")]
    fallback_narrative: String,

    /// Narrative recorded by the reducer's fallback delta
    #[serde(default = "default_failure_narrative")]
    #[builder(default = "default_failure_narrative()")]
    failure_narrative: String,

    /// Clamp emotion, DNA and tension writes into 0..=100
    #[serde(default = "default_clamp_bounds")]
    #[builder(default = "default_clamp_bounds()")]
    clamp_bounds: bool,
}

fn default_separator() -> String {
    "___METADATA___".to_string()
}

fn default_lore_history_window() -> usize {
    3
}

fn default_history_window() -> usize {
    8
}

fn default_fact_window() -> usize {
    5
}

fn default_fallback_narrative() -> String {
    "The simulation wavers... (Connection Error)".to_string()
}

fn default_failure_narrative() -> String {
    "System Failure.".to_string()
}

fn default_clamp_bounds() -> bool {
    true
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            lore_history_window: default_lore_history_window(),
            history_window: default_history_window(),
            fact_window: default_fact_window(),
            fallback_narrative: default_fallback_narrative(),
            failure_narrative: default_failure_narrative(),
            clamp_bounds: default_clamp_bounds(),
        }
    }
}

impl NarrativeConfig {
    /// Create a new builder.
    pub fn builder() -> NarrativeConfigBuilder {
        NarrativeConfigBuilder::default()
    }

    /// Check settings loaded from files.
    ///
    /// # Errors
    ///
    /// Returns an error if the separator is blank.
    pub fn validate(&self) -> LoreweaveResult<()> {
        if self.separator.trim().is_empty() {
            return Err(ConfigError::new("narrative.separator must not be blank").into());
        }
        Ok(())
    }
}

impl NarrativeConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        match &self.separator {
            Some(separator) if separator.trim().is_empty() => {
                Err("separator must not be blank".to_string())
            }
            _ => Ok(()),
        }
    }
}

/// Save store settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct StorageConfig {
    /// Save directory; empty selects the platform data directory
    #[serde(default)]
    save_dir: String,
}

impl StorageConfig {
    /// Directory the filesystem save store should use.
    pub fn resolved_save_dir(&self) -> PathBuf {
        if !self.save_dir.trim().is_empty() {
            return PathBuf::from(&self.save_dir);
        }
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("loreweave")
            .join("saves")
    }
}

/// Complete Loreweave configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct LoreweaveConfig {
    /// Turn engine settings
    #[serde(default)]
    narrative: NarrativeConfig,
    /// Save store settings
    #[serde(default)]
    storage: StorageConfig,
}

impl LoreweaveConfig {
    /// Load configuration from a specific file, on top of the bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> LoreweaveResult<Self> {
        debug!("Loading configuration from file");

        let builder = Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::from(path.as_ref()));
        Self::finish(builder)
    }

    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    ///
    /// Configuration sources in order of precedence (later sources override earlier):
    /// 1. Bundled defaults (loreweave.toml shipped with the library)
    /// 2. User config in home directory (~/.config/loreweave/loreweave.toml)
    /// 3. User config in current directory (./loreweave.toml)
    ///
    /// User config files are optional and silently skipped if not found.
    #[instrument]
    pub fn load() -> LoreweaveResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/loreweave/loreweave.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("loreweave").required(false));
        Self::finish(builder)
    }

    /// Parse the bundled defaults only.
    pub fn bundled() -> LoreweaveResult<Self> {
        Self::finish(Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml)))
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> LoreweaveResult<Self> {
        let config: Self = builder
            .build()
            .map_err(|e| {
                LoreweaveError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                LoreweaveError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;
        config.narrative.validate()?;
        Ok(config)
    }
}

const DEFAULT_CONFIG: &str = include_str!("../../../loreweave.toml");

#[cfg(test)]
mod tests {
    use super::*;
    use loreweave_error::{BuilderErrorKind, LoreweaveErrorKind};

    #[test]
    fn bundled_defaults_match_code_defaults() {
        let config = LoreweaveConfig::bundled().unwrap();
        assert_eq!(config.narrative(), &NarrativeConfig::default());
        assert!(config.storage().save_dir().is_empty());
    }

    #[test]
    fn builder_rejects_blank_separator() {
        let err = NarrativeConfig::builder().separator("   ").build().unwrap_err();
        assert!(matches!(err.kind(), BuilderErrorKind::ValidationFailed(_)));

        let err: LoreweaveError = err.into();
        assert!(matches!(err.kind(), LoreweaveErrorKind::Builder(_)));
    }

    #[test]
    fn builder_failure_propagates_with_question_mark() {
        fn build() -> LoreweaveResult<NarrativeConfig> {
            Ok(NarrativeConfig::builder().separator("").build()?)
        }
        assert!(build().unwrap_err().to_string().contains("separator must not be blank"));
    }

    #[test]
    fn explicit_save_dir_wins() {
        let storage: StorageConfig = toml::from_str(r#"save_dir = "/srv/saves""#).unwrap();
        assert_eq!(storage.resolved_save_dir(), PathBuf::from("/srv/saves"));
    }

    #[test]
    fn empty_save_dir_uses_data_dir() {
        let storage = StorageConfig::default();
        assert!(storage.resolved_save_dir().ends_with("loreweave/saves"));
    }
}
