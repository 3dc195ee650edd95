//! Unified application error type.
//! All modules (store, core, export, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Invalid stored record: {0}")]
    InvalidRecord(String),

    // ---------------------------
    // Record store
    // ---------------------------
    #[error("Record already exists for {0}")]
    RecordConflict(String),

    #[error("Record with given date not found: {0}")]
    RecordNotFound(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Given key '{0}' cannot be configured")]
    ConfigKeyInvalid(String),

    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("There are no records for {0} to export")]
    EmptyExport(String),

    #[error("Template not found: {0}")]
    MissingTemplate(String),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    #[error("Template generation error: {0}")]
    Template(#[from] rust_xlsxwriter::XlsxError),
}

pub type AppResult<T> = Result<T, AppError>;
