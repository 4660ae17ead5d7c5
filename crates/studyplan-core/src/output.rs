//! Plain-text output for a rendered plan.
//!
//! File and console output share [`write_plan`], so both carry the same bytes.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use chrono::NaiveDate;

use crate::course::parse_date;
use crate::error::{CoreError, Result};
use crate::plan::StudyPlan;

pub const HEADER: &str = "### Study Plan ###";
pub const SEPARATOR: &str = "====================";

/// Write the header, then each day block followed by the separator line.
pub fn write_plan<W: Write>(plan: &StudyPlan, out: &mut W) -> io::Result<()> {
    write!(out, "{HEADER}\n\n")?;
    for day in plan {
        write!(out, "{day}\n{SEPARATOR}\n")?;
    }
    Ok(())
}

/// Render the full plan text into a string.
pub fn to_text(plan: &StudyPlan) -> String {
    let mut buf = Vec::new();
    write_plan(plan, &mut buf).expect("write to Vec");
    String::from_utf8(buf).expect("plan text is UTF-8")
}

/// Create or truncate `path` and write the plan to it.
///
/// The file handle is dropped before this returns, on success and on error.
///
/// # Errors
///
/// Returns `Io` with the path if the file cannot be created or written.
pub fn save_to_file(plan: &StudyPlan, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| CoreError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    write_plan(plan, &mut writer)
        .and_then(|()| writer.flush())
        .map_err(|e| CoreError::io(path, e))?;

    tracing::info!(path = %path.display(), days = plan.len(), "saved study plan");
    Ok(())
}

/// Print the plan to standard output.
pub fn print_plan(plan: &StudyPlan) -> Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_plan(plan, &mut lock)?;
    lock.flush()?;
    Ok(())
}

/// Recover the dates from the `Date:` lines of a rendered plan.
///
/// Only the first line of each day block counts, so a course that happens to
/// be named "Date" is not mistaken for one.
///
/// # Errors
///
/// Returns `Format` on the first `Date:` line whose value is not `YYYY-MM-DD`.
pub fn read_dates(text: &str) -> Result<Vec<NaiveDate>> {
    let mut dates = Vec::new();
    let mut block_start = false;
    for line in text.lines() {
        if block_start {
            if let Some(value) = line.strip_prefix("Date:") {
                dates.push(parse_date(value)?);
            }
        }
        block_start = line.is_empty() || line == SEPARATOR;
    }
    Ok(dates)
}
