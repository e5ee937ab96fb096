pub mod classify;
pub mod config;
pub mod export;
pub mod init;
pub mod parse;
pub mod summary;

use crate::config::Config;
use crate::core::{Classifier, ShiftParser};
use crate::errors::AppResult;
use std::io::{self, Read};
use std::path::PathBuf;

/// Read the OCR text from `input`, or stdin when no file is given.
pub(crate) fn read_input(input: &Option<PathBuf>) -> AppResult<String> {
    match input {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Parser configured from `cfg`, optionally pinned to `year`.
pub(crate) fn build_parser(cfg: &Config, year: Option<i32>) -> ShiftParser {
    let parser = ShiftParser::new(Classifier::from_config(cfg));
    match year {
        Some(y) => parser.with_year(y),
        None => parser,
    }
}
