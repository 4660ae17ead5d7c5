//! Course model and input parsing.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result, ValidationError};

/// ISO 8601 calendar date format used for input and output.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A course and its unit count.
///
/// Units act as the course's weight when the daily budget is split.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    name: String,
    units: u32,
}

impl Course {
    /// Create a course. The name is trimmed and must not be empty.
    pub fn new(name: impl Into<String>, units: u32) -> Result<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "course name".into(),
                message: "must not be empty".into(),
            }
            .into());
        }
        Ok(Self { name, units })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn units(&self) -> u32 {
        self.units
    }
}

/// Parses `NAME:UNITS`. The last `:` splits the two, so names may contain colons.
impl FromStr for Course {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        let (name, units) = s.rsplit_once(':').ok_or_else(|| ValidationError::InvalidValue {
            field: "course".into(),
            message: format!("expected NAME:UNITS, got '{s}'"),
        })?;
        let units = units
            .trim()
            .parse::<u32>()
            .map_err(|e| ValidationError::InvalidValue {
                field: format!("units for {}", name.trim()),
                message: e.to_string(),
            })?;
        Course::new(name, units)
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.units)
    }
}

/// A course's share of one day's study time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocatedCourse {
    pub name: String,
    /// Hours per day, rounded to 2 decimal places.
    pub hours: f64,
}

impl fmt::Display for AllocatedCourse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} hours", self.name, Hours(self.hours))
    }
}

/// Displays an hour count in its shortest decimal form, keeping one
/// fractional digit for whole numbers (`3.0`, `1.33`, `0.5`).
#[derive(Debug, Clone, Copy)]
pub struct Hours(pub f64);

impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_finite() && self.0.fract() == 0.0 {
            write!(f, "{:.1}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let trimmed = input.trim();
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|source| CoreError::Format {
        input: trimmed.to_string(),
        source,
    })
}
