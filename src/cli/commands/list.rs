use super::{DATE_PROMPT, span_cell};
use crate::cli::parser::DateArgs;
use crate::cli::prompt::Prompter;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::Language;
use crate::store::RecordStore;
use crate::ui::messages::info;
use crate::utils::table::Table;
use crate::utils::time::format_hours;
use std::io::{BufRead, Write};

/// Print the records of the month containing the given date.
pub fn handle<R: BufRead, W: Write>(
    args: &DateArgs,
    cfg: &Config,
    prompter: &mut Prompter<R, W>,
) -> AppResult<()> {
    let date = prompter.date(args.date.as_deref(), DATE_PROMPT)?;
    let month = RecordStore::new(cfg.records_dir()).load_for(date)?;
    let lang = Language::En;
    let title = lang.month_year(month.year, month.month);

    if month.is_empty() {
        info(format!("No records for {}.", title));
        return Ok(());
    }

    let mut table = Table::new([
        "Date", "Weekday", "Work", "Break", "Hours", "Special", "Comment",
    ]);

    let records = month.sorted();
    for r in &records {
        table.add_row(vec![
            r.date_str(),
            lang.weekday_of(r.date).to_string(),
            span_cell(r, &r.work),
            span_cell(r, &r.pause),
            format_hours(r.worked_hours(), false),
            if r.special { "yes" } else { "" }.to_string(),
            r.comment.clone(),
        ]);
    }

    let total: f64 = records.iter().map(|r| r.worked_hours()).sum();

    println!("{}\n", title);
    print!("{}", table.render());
    println!("\nTotal: {} h in {} records", format_hours(total, false), records.len());
    Ok(())
}
