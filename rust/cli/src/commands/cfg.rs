//! Configuration command handler.
//!
//! Displays the resolved configuration with the source of each value
//! (default, environment, or configuration file).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "tracked_player": {
//!     "value": "Player1",
//!     "source": "default"
//!   },
//!   "format": {
//!     "value": "table",
//!     "source": "default"
//!   }
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "tracked_player": {
            "value": config.tracked_player,
            "source": sources.tracked_player,
        },
        "format": {
            "value": config.format,
            "source": sources.format,
        },
    });
    writeln!(out, "{}", serde_json::to_string_pretty(&display)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_cfg_displays_json_output() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let result = handle_cfg_command(&mut out, &mut err);
        assert!(result.is_ok(), "cfg command should succeed");

        let output = String::from_utf8(out).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&output).expect("cfg output should be valid JSON");
        assert!(json["tracked_player"]["value"].is_string());
        assert!(json["format"]["source"].is_string());
    }

    #[test]
    #[serial]
    fn test_cfg_reports_env_source() {
        unsafe { std::env::set_var("TRICKLOG_TRACKED_PLAYER", "Player4") };
        let mut out = Vec::new();
        let mut err = Vec::new();

        let result = handle_cfg_command(&mut out, &mut err);
        unsafe { std::env::remove_var("TRICKLOG_TRACKED_PLAYER") };

        assert!(result.is_ok());
        let json: serde_json::Value = serde_json::from_str(&String::from_utf8(out).unwrap()).unwrap();
        assert_eq!(json["tracked_player"]["value"], "Player4");
        assert_eq!(json["tracked_player"]["source"], "env");
    }
}
