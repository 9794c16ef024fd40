use crate::Result;
use crate::audits::{FormFactor, RunSettings};
use crate::i18n::Locale;
use crate::scoring::ScoreCalibration;
use camino::{Utf8Path, Utf8PathBuf};
use ohno::{IntoAppError, bail};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;

const LOG_TARGET: &str = "    config";

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// File looked up in the working directory when no path is given.
pub const CONFIG_FILE_NAME: &str = "perfscore.toml";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Locale for audit text and display values
    #[serde(default)]
    pub locale: Locale,

    /// Device class the measurements were taken on
    #[serde(default)]
    pub form_factor: FormFactor,

    /// JSON message catalog; relative paths are resolved against the configuration file's directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages: Option<Utf8PathBuf>,

    /// Calibration overrides keyed by audit id
    #[serde(default)]
    pub audits: BTreeMap<String, ScoreCalibration>,
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated
    pub fn load(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading perfscore configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            let path = base_dir.join(CONFIG_FILE_NAME);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    log::debug!(target: LOG_TARGET, "No '{path}' found, using default configuration");
                    return Ok(Self::default());
                }
                Err(e) => return Err(e).into_app_err_with(|| format!("reading perfscore configuration file '{path}'")),
            }
        };

        let mut config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;

        if let Some(messages) = &config.messages
            && messages.is_relative()
        {
            let dir = final_path.parent().unwrap_or(base_dir);
            config.messages = Some(dir.join(messages));
        }

        config.validate().into_app_err_with(|| format!("validating configuration file '{final_path}'"))?;
        log::debug!(target: LOG_TARGET, "Loaded configuration from '{final_path}'");

        Ok(config)
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// The run-scoped settings this configuration selects.
    #[must_use]
    pub fn run_settings(&self) -> RunSettings {
        RunSettings {
            locale: self.locale,
            form_factor: self.form_factor,
        }
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if an audit id is blank or the message catalog does not exist
    fn validate(&self) -> Result<()> {
        if let Some(id) = self.audits.keys().find(|id| id.trim().is_empty()) {
            bail!("audit ids must not be blank, got '{id}'");
        }

        if let Some(messages) = &self.messages
            && !messages.is_file()
        {
            bail!("message catalog '{messages}' does not exist");
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}
