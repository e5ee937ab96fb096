use crate::cli::commands::{build_parser, read_input};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::render;
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Parse {
        input,
        year,
        format,
    } = cmd
    {
        let text = read_input(input)?;
        let records = build_parser(cfg, *year).parse(&text);

        if records.is_empty() {
            warning("No shift records could be parsed. Check that the table date is visible.");
            return Ok(());
        }

        let out = render(&records, format.unwrap_or(cfg.default_format))?;
        print!("{out}");
        if !out.ends_with('\n') {
            println!();
        }
    }
    Ok(())
}
