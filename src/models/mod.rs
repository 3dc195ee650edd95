pub mod record;
pub mod span;

pub use record::Record;
pub use span::TimeSpan;
