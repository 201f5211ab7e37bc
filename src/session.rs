//! One interactive round: prompt, read a date, name its weekday.

use std::fmt;
use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::{Date, DateError, Weekday};

/// Heading printed before the prompt
pub const BANNER: &str = "--- Day of the Week Calculator ---";
/// Prompt asking for the date
pub const PROMPT: &str = "Enter a date in the format DD/MM/YYYY (e.g., 15/10/2025): ";

/// Outcome of a successful lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub date:    Date,
    pub weekday: Weekday,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "--- Result ---")?;
        writeln!(f, "Date entered: {}", self.date)?;
        writeln!(f, "The day of the week was: {}", self.weekday)?;
        writeln!(f, "----------------")
    }
}

/// Parses, validates and resolves a `DD/MM/YYYY` string without doing any I/O.
///
/// # Errors
/// Returns an input-format error for malformed text, or a validation error for an
/// impossible or unsupported date.
pub fn evaluate(text: &str) -> Result<Report, DateError> {
    let date: Date = text.parse()?;
    let weekday = date.weekday();
    debug!(%date, index = weekday.index(), "resolved weekday");
    Ok(Report { date, weekday })
}

/// Prompts on `output`, reads one line from `input` and writes the result block.
///
/// # Errors
/// Anything [`evaluate`] rejects, `EmptyInput` at end of input, or `Io` if a
/// handle fails.
pub fn run_session<R, W>(input: &mut R, output: &mut W) -> Result<Report, DateError>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{BANNER}")?;
    write!(output, "{PROMPT}")?;
    output.flush()?;

    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Err(DateError::EmptyInput);
    }
    // Bytes that aren't text can't spell a date either
    let line = String::from_utf8(buf)
        .map_err(|e| DateError::InvalidFormat(String::from_utf8_lossy(e.as_bytes()).into_owned()))?;

    let report = evaluate(&line)?;
    write!(output, "{report}")?;
    output.flush()?;

    info!(date = %report.date, weekday = %report.weekday, "session complete");
    Ok(report)
}
