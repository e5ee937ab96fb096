pub mod line_kind;
pub mod partial_record;
pub mod shift_record;

pub use line_kind::LineKind;
pub use partial_record::PartialRecord;
pub use shift_record::ShiftRecord;
