pub mod add;
pub mod config;
pub mod delete;
pub mod export;
pub mod init;
pub mod list;
pub mod update;

use crate::cli::parser::RecordArgs;
use crate::cli::prompt::Prompter;
use crate::errors::AppResult;
use crate::models::{Record, TimeSpan};
use std::io::{BufRead, Write};

pub(crate) const DATE_PROMPT: &str = "- Enter the DATE of record: ";

/// Turn `add`/`update` arguments into a validated record, prompting for
/// whatever is missing when interactive.
///
/// Special records ignore any work/break interval given.
pub(crate) fn read_record<R: BufRead, W: Write>(
    args: &RecordArgs,
    prompter: &mut Prompter<R, W>,
) -> AppResult<Record> {
    let date = prompter.date(args.date.date.as_deref(), DATE_PROMPT)?;
    let comment = prompter.comment(args.comment.as_deref())?;

    if args.special {
        return Ok(Record::special(date, comment));
    }

    let work = prompter.time_span(args.work_hours.as_deref(), "WORK HOURS")?;
    let pause = prompter.time_span(args.break_time.as_deref(), "BREAK TIME")?;
    Ok(Record::new(date, work, pause, comment, false))
}

/// `TimeSpan` as shown in listings; special records have none.
pub(crate) fn span_cell(record: &Record, span: &TimeSpan) -> String {
    if record.special {
        "--:--".to_string()
    } else {
        span.to_string()
    }
}
