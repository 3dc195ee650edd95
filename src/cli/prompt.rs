//! Input validation with bounded re-prompting.
//!
//! Values given on the command line are validated first. In interactive
//! mode an empty or invalid value is asked for again, up to
//! [`DEFAULT_ATTEMPTS`] times; non-interactive mode gets exactly one attempt
//! and never reads stdin.

use crate::errors::{AppError, AppResult};
use crate::models::TimeSpan;
use crate::ui::messages::{error, prompt};
use crate::utils::date::parse_date;
use chrono::NaiveDate;
use std::io::{self, BufRead, Write};

pub const DEFAULT_ATTEMPTS: u32 = 3;

pub struct Prompter<R, W> {
    input: R,
    output: W,
    interactive: bool,
    attempts: u32,
}

impl Prompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio(non_interactive: bool) -> Self {
        Self::new(io::stdin().lock(), io::stdout(), non_interactive)
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W, non_interactive: bool) -> Self {
        Self {
            input,
            output,
            interactive: !non_interactive,
            attempts: DEFAULT_ATTEMPTS,
        }
    }

    pub fn with_attempts(mut self, attempts: u32) -> Self {
        self.attempts = attempts;
        self
    }

    fn max_attempts(&self) -> u32 {
        if self.interactive { self.attempts } else { 1 }
    }

    /// Show `message` and read one line. EOF reads as an empty answer.
    fn ask(&mut self, message: &str) -> AppResult<String> {
        prompt(&mut self.output, message)?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn validate<T>(
        &mut self,
        raw: Option<&str>,
        message: &str,
        parse: impl Fn(&str) -> Option<T>,
        hint: &str,
        give_up: &str,
    ) -> AppResult<T> {
        let mut text = raw.unwrap_or_default().to_string();

        for _ in 0..self.max_attempts() {
            if text.is_empty() && self.interactive {
                text = self.ask(message)?;
            }
            if let Some(value) = parse(&text) {
                return Ok(value);
            }
            error(hint);
            text.clear();
        }

        error(give_up);
        Err(AppError::InvalidFormat(give_up.to_string()))
    }

    /// A `DD.MM.YYYY` date.
    pub fn date(&mut self, raw: Option<&str>, message: &str) -> AppResult<NaiveDate> {
        self.validate(
            raw,
            message,
            parse_date,
            "Expected date of following format: 'DD.MM.YYYY'",
            "You entered invalid date or didn't enter any input.",
        )
    }

    /// A `HH:MM-HH:MM` interval; `name` is used in prompts and diagnostics.
    pub fn time_span(&mut self, raw: Option<&str>, name: &str) -> AppResult<TimeSpan> {
        self.validate(
            raw,
            &format!("- Enter the BEGIN and END of {}: ", name),
            TimeSpan::parse,
            &format!("Expected {} of following format: 'HH:MM-HH:MM'", name),
            &format!("You entered invalid {} or didn't enter any input.", name),
        )
    }

    /// Optional free text; asked for once in interactive mode when missing.
    pub fn comment(&mut self, raw: Option<&str>) -> AppResult<String> {
        match raw {
            Some(c) if !c.is_empty() => Ok(c.to_string()),
            _ if self.interactive => {
                Ok(self.ask("- Enter the COMMENT of record, if needed: ")?.trim().to_string())
            }
            _ => Ok(String::new()),
        }
    }
}
