//! Command handlers.
//!
//! Each subcommand lives in its own module and exposes one
//! `handle_COMMAND_command(...) -> Result<(), CliError>`. Output streams are
//! passed in, so handlers run the same against a terminal or a test buffer.

mod cfg;
mod deal;
mod play;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::{PlayOptions, handle_play_command};
