use super::Host;
use super::common::{Common, GlobalArgs, Unmeasured};
use crate::Result;
use crate::config::CONFIG_FILE_NAME;
use camino::Utf8Path;
use std::io::Write;
use std::sync::Arc;

/// Loads the configuration and message catalog, then checks every calibration override against the registry
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or an override names an unknown or non-numeric audit
fn validate_config_inner(global: &GlobalArgs) -> Result<()> {
    let common = Common::new(global)?;
    let _ = common.registry(Arc::new(Unmeasured))?;
    Ok(())
}

pub fn validate_config<H: Host>(host: &mut H, global: &GlobalArgs) -> Result<()> {
    match validate_config_inner(global) {
        Ok(()) => {
            let _ = writeln!(host.output(), "Configuration file is valid");
            match &global.config {
                Some(path) => {
                    let _ = writeln!(host.output(), "Config file: {path}");
                }
                None if Utf8Path::new(CONFIG_FILE_NAME).is_file() => {
                    let _ = writeln!(host.output(), "Config file: {CONFIG_FILE_NAME}");
                }
                None => {
                    let _ = writeln!(host.output(), "Using default configuration (no config file found)");
                }
            }
            Ok(())
        }
        Err(e) => {
            let _ = writeln!(host.error(), "❌ Configuration validation failed: {e}");
            host.exit(1);
            Err(e)
        }
    }
}
