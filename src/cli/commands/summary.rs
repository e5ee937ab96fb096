use crate::cli::commands::{build_parser, read_input};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::summary::summarize;
use crate::errors::AppResult;
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { input, year } = cmd {
        let text = read_input(input)?;
        let records = build_parser(cfg, *year).parse(&text);

        match summarize(&records) {
            Some(reply) => println!("{reply}"),
            None => warning("The text was read but no shift information could be parsed."),
        }
    }
    Ok(())
}
