use super::DATE_PROMPT;
use crate::cli::parser::DateArgs;
use crate::cli::prompt::Prompter;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::ui::messages::{info, success};
use chrono::Datelike;
use std::io::{BufRead, Write};

pub fn handle<R: BufRead, W: Write>(
    args: &DateArgs,
    cfg: &Config,
    prompter: &mut Prompter<R, W>,
) -> AppResult<()> {
    let date = prompter.date(args.date.as_deref(), DATE_PROMPT)?;
    let store = RecordStore::new(cfg.records_dir());

    let removed = store.delete(date)?;
    success(format!("Record for {} has been deleted.", removed.date_str()));

    if !store.month_path(date.year(), date.month()).exists() {
        info("That was the last record of the month, its file has been removed.");
    }
    Ok(())
}
