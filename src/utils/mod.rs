pub mod date;
pub mod digits;
pub mod path;
pub mod table;
pub mod time;
