//! Day-by-day plan assembly.
//!
//! The renderer lays one allocation out over a consecutive date range. Hours
//! are never recomputed here; only the display order of a day's courses can
//! change, and that is governed by [`EntryOrder`].

use std::fmt;

use chrono::{Days, NaiveDate};
use rand::prelude::*;
use rand_pcg::Mcg128Xsl64;
use serde::{Deserialize, Serialize};

use crate::course::{AllocatedCourse, Hours, DATE_FORMAT};
use crate::error::{Result, ValidationError};

/// How a day's courses are ordered for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum EntryOrder {
    /// Allocation order, every day.
    Fixed,
    /// A fresh random permutation per day. A seed makes the sequence of
    /// permutations reproducible; `None` seeds from OS entropy.
    Shuffled { seed: Option<u64> },
}

impl Default for EntryOrder {
    fn default() -> Self {
        EntryOrder::Shuffled { seed: None }
    }
}

/// One calendar day of the plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub date: NaiveDate,
    pub available_hours: f64,
    pub entries: Vec<AllocatedCourse>,
}

impl DayPlan {
    /// Sum of the entries' hours. May differ from `available_hours` by
    /// per-course rounding.
    pub fn allocated_hours(&self) -> f64 {
        self.entries.iter().map(|e| e.hours).sum()
    }
}

/// Renders the day block: date line, budget line, then one line per course.
impl fmt::Display for DayPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Date: {}", self.date.format(DATE_FORMAT))?;
        writeln!(f, "Study Time Available: {} hours", Hours(self.available_hours))?;
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}

/// Ordered sequence of day plans in ascending date order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudyPlan {
    pub days: Vec<DayPlan>,
}

impl StudyPlan {
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DayPlan> {
        self.days.iter()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.days.iter().map(|d| d.date).collect()
    }
}

impl<'a> IntoIterator for &'a StudyPlan {
    type Item = &'a DayPlan;
    type IntoIter = std::slice::Iter<'a, DayPlan>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}

/// Lay `allocation` out over `total_days` consecutive days from `start_date`.
///
/// # Errors
///
/// Returns `InvalidInput` if the date range runs past the last representable
/// calendar date.
pub fn render(
    allocation: &[AllocatedCourse],
    start_date: NaiveDate,
    total_days: u64,
    daily_budget: f64,
    order: EntryOrder,
) -> Result<StudyPlan> {
    let mut rng = match order {
        EntryOrder::Fixed => None,
        EntryOrder::Shuffled { seed: Some(seed) } => Some(Mcg128Xsl64::seed_from_u64(seed)),
        EntryOrder::Shuffled { seed: None } => Some(Mcg128Xsl64::from_entropy()),
    };

    if total_days > 0 {
        let last = total_days - 1;
        start_date
            .checked_add_days(Days::new(last))
            .ok_or(ValidationError::DateOutOfRange {
                start: start_date,
                days: last,
            })?;
    }

    let mut days = Vec::with_capacity(usize::try_from(total_days).unwrap_or(usize::MAX));
    for offset in 0..total_days {
        let date = start_date
            .checked_add_days(Days::new(offset))
            .ok_or(ValidationError::DateOutOfRange {
                start: start_date,
                days: offset,
            })?;

        let mut entries = allocation.to_vec();
        if let Some(rng) = rng.as_mut() {
            entries.shuffle(rng);
        }

        days.push(DayPlan {
            date,
            available_hours: daily_budget,
            entries,
        });
    }

    tracing::debug!(
        days = days.len(),
        start = %start_date,
        ?order,
        "rendered study plan"
    );

    Ok(StudyPlan { days })
}
