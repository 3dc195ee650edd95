use super::DATE_PROMPT;
use crate::cli::parser::DateArgs;
use crate::cli::prompt::Prompter;
use crate::config::Config;
use crate::core::ExportLogic;
use crate::errors::AppResult;
use crate::export::Language;
use crate::ui::messages::info;
use crate::utils::time::format_hours;
use std::io::{BufRead, Write};

pub fn handle<R: BufRead, W: Write>(
    args: &DateArgs,
    lang: Language,
    cfg: &Config,
    prompter: &mut Prompter<R, W>,
) -> AppResult<()> {
    let date = prompter.date(args.date.as_deref(), DATE_PROMPT)?;
    let summary = ExportLogic::export(cfg, date, lang)?;

    info(format!(
        "{} records, {} working days, carryover {} h, balance {} h",
        summary.records,
        summary.workdays,
        format_hours(summary.carryover, true),
        format_hours(summary.totals.balance, true)
    ));
    Ok(())
}
