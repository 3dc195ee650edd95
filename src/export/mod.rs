// src/export/mod.rs

mod carryover;
mod excel_date;
pub mod layout;
mod locale;
mod report;
mod template;
mod workbook;

pub use carryover::read_carryover;
pub use locale::Language;
pub use report::{ReportHeader, ReportTotals, render_report};
pub use template::{TEMPLATE_WORKDAYS, generate_templates, template_path, write_template};

use crate::ui::messages::success;
use std::path::{Path, PathBuf};

/// `timesheet_YYYY_MM.xlsx` inside the exports directory.
pub fn export_path(dir: &Path, year: i32, month: u32) -> PathBuf {
    dir.join(format!("timesheet_{}_{:02}.xlsx", year, month))
}

/// Shared completion message for exports.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}
