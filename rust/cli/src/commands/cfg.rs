//! `cfg`: the resolved configuration with the source of each value.
//!
//! ```json
//! {
//!   "starting_balance": { "value": 10000, "source": "default" },
//!   "min_bet": { "value": 1, "source": "default" },
//!   "seed": { "value": null, "source": "default" }
//! }
//! ```

use std::io::Write;

use crate::config;
use crate::error::CliError;

pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } =
        config::load_with_sources().map_err(|e| CliError::Config(e.to_string()))?;
    let display = serde_json::json!({
        "starting_balance": {
            "value": config.starting_balance,
            "source": sources.starting_balance,
        },
        "min_bet": {
            "value": config.min_bet,
            "source": sources.min_bet,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
