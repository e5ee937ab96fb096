use crate::cli::commands::read_input;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::Classifier;
use crate::core::parser::split_lines;
use crate::errors::AppResult;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Classify { input } = cmd {
        let text = read_input(input)?;
        let classifier = Classifier::from_config(cfg);

        let mut table = Table::new(&["#", "kind", "line"]);
        for (i, line) in split_lines(&text).into_iter().enumerate() {
            table.add_row(vec![
                (i + 1).to_string(),
                classifier.classify(line).as_str().to_string(),
                line.to_string(),
            ]);
        }
        print!("{}", table.render());
    }
    Ok(())
}
