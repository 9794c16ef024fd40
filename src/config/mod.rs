//! Configuration file model
//!
//! `perfscore` reads its settings from `perfscore.toml`, or from a file named
//! with `--config`. When no file exists the embedded defaults apply. The file
//! selects the run's locale and form factor, optionally names a JSON message
//! catalog, and carries per-audit calibration overrides:
//!
//! ```toml
//! locale = "de-DE"
//! form_factor = "desktop"
//! messages = "messages/de-DE.json"
//!
//! [audits.cumulative-layout-shift]
//! podr = 0.05
//! median = 0.25
//! ```
//!
//! Calibrations are validated while the file is parsed. Whether each override
//! names a registered, numeric audit is checked by
//! [`AuditRegistry::validate_overrides`](crate::audits::AuditRegistry::validate_overrides).

mod config_file;

pub use config_file::{CONFIG_FILE_NAME, Config, DEFAULT_CONFIG_TOML};
