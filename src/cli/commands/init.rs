use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command: write the default configuration file
/// (to `--config` when given, otherwise the standard location).
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::Init { force } = &cli.command {
        let path = Config::init(cli.config.as_deref(), *force)?;
        success(format!("Config file: {}", path.display()));
    }
    Ok(())
}
