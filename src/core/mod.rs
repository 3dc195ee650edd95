pub mod export;
pub mod workdays;

pub use export::{ExportLogic, ExportSummary};
pub use workdays::WorkCalendar;
