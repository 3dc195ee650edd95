use super::read_record;
use crate::cli::parser::RecordArgs;
use crate::cli::prompt::Prompter;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::{RecordStore, UpdateOutcome};
use crate::ui::messages::{info, success};
use std::io::{BufRead, Write};

/// Replace the record of an existing date with the given fields.
pub fn handle<R: BufRead, W: Write>(
    args: &RecordArgs,
    cfg: &Config,
    prompter: &mut Prompter<R, W>,
) -> AppResult<()> {
    let record = read_record(args, prompter)?;
    let date = record.date_str();

    match RecordStore::new(cfg.records_dir()).update(record)? {
        UpdateOutcome::Updated => success(format!("Record for {} updated.", date)),
        UpdateOutcome::Unchanged => info(format!("Record for {} is already up to date.", date)),
    }
    Ok(())
}
