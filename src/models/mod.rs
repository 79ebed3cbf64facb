pub mod entry;
pub mod status;

pub use entry::{Field, RawEntry, WellnessEntry};
pub use status::Status;
