use crate::config::Config;
use crate::core::workdays::WorkCalendar;
use crate::errors::{AppError, AppResult};
use crate::export::{
    Language, ReportHeader, ReportTotals, export_path, notify_export_success, read_carryover,
    render_report, template_path,
};
use crate::store::RecordStore;
use crate::ui::messages::warning;
use crate::utils::date::previous_month;
use chrono::{Datelike, NaiveDate};
use std::fs;
use std::path::PathBuf;

/// What an export produced.
#[derive(Debug, Clone)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub template: PathBuf,
    pub records: usize,
    pub workdays: i64,
    pub carryover: f64,
    pub totals: ReportTotals,
}

/// High-level logic for the `export` command.
pub struct ExportLogic;

impl ExportLogic {
    /// Render the month containing `date` into its export file.
    ///
    /// Order of checks: records present, template present, previous export
    /// readable. Nothing is written unless all three pass.
    pub fn export(cfg: &Config, date: NaiveDate, language: Language) -> AppResult<ExportSummary> {
        let (year, month) = (date.year(), date.month());

        let store = RecordStore::new(cfg.records_dir());
        let collection = store.load(year, month)?;
        if collection.is_empty() {
            return Err(AppError::EmptyExport(language.month_year(year, month)));
        }
        let records = collection.sorted();

        let workdays = WorkCalendar::default().workdays_in_month(year, month);
        let template = template_path(&cfg.templates_dir(), workdays);
        if !template.is_file() {
            return Err(AppError::MissingTemplate(template.display().to_string()));
        }

        let exports_dir = cfg.exports_dir();
        let out = export_path(&exports_dir, year, month);

        let (prev_year, prev_month) = previous_month(date);
        let prev_export = export_path(&exports_dir, prev_year, prev_month);
        let carryover = read_carryover(&prev_export)?;
        if !prev_export.exists() {
            warning(format!(
                "No export found for {}, carryover is 0.",
                language.month_year(prev_year, prev_month)
            ));
        }

        let header = ReportHeader {
            name: cfg.name().to_string(),
            year,
            month,
            workdays,
            carryover,
            language,
        };

        fs::create_dir_all(&exports_dir)?;
        let totals = render_report(&template, &out, &records, &header)?;
        notify_export_success("XLSX", &out);

        Ok(ExportSummary {
            path: out,
            template,
            records: records.len(),
            workdays,
            carryover,
            totals,
        })
    }
}
