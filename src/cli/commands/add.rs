use super::read_record;
use crate::cli::parser::RecordArgs;
use crate::cli::prompt::Prompter;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::ui::messages::success;
use std::io::{BufRead, Write};

/// Add a new record; fails if the date already has one.
pub fn handle<R: BufRead, W: Write>(
    args: &RecordArgs,
    cfg: &Config,
    prompter: &mut Prompter<R, W>,
) -> AppResult<()> {
    let record = read_record(args, prompter)?;
    let date = record.date_str();

    RecordStore::new(cfg.records_dir()).add(record)?;

    success(format!("Record for {} added.", date));
    Ok(())
}
