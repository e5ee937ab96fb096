pub mod assembler;
pub mod classifier;
pub mod date_resolver;
pub mod parser;
pub mod summary;
pub mod validator;

pub use classifier::Classifier;
pub use parser::{ShiftParser, parse_shift_text};
