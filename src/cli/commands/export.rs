use crate::cli::commands::{build_parser, read_input};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::ui::messages::info;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        input,
        format,
        file,
        year,
        force,
    } = cmd
    {
        let text = read_input(input)?;
        let records = build_parser(cfg, *year).parse(&text);
        info(format!(
            "{} shift record(s) parsed, writing {}",
            records.len(),
            format.as_str()
        ));

        let path = expand_tilde(file);
        ExportLogic::export(&records, *format, &path, *force)?;
    }
    Ok(())
}
