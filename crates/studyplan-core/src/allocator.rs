//! Unit-weighted split of a daily study budget.
//!
//! Each course receives `units / total_units * daily_budget` hours, rounded
//! to 2 decimal places independently. Because of that per-course rounding the
//! shares can miss the budget by up to 0.01 hour per course.

use crate::course::{AllocatedCourse, Course};
use crate::error::{Result, ValidationError};

/// Round to 2 decimal places, halves away from zero.
pub fn round_hours(hours: f64) -> f64 {
    (hours * 100.0).round() / 100.0
}

/// Split `daily_budget` hours across `courses` in proportion to their units.
///
/// Output order matches input order.
///
/// # Errors
///
/// Returns `InvalidInput` if `courses` is empty, if every course has zero
/// units, or if `daily_budget` is negative or not finite.
pub fn allocate(courses: &[Course], daily_budget: f64) -> Result<Vec<AllocatedCourse>> {
    if courses.is_empty() {
        return Err(ValidationError::EmptyCollection("course list".into()).into());
    }
    if !daily_budget.is_finite() || daily_budget < 0.0 {
        return Err(ValidationError::InvalidValue {
            field: "daily hours".into(),
            message: format!("must be a non-negative number, got {daily_budget}"),
        }
        .into());
    }

    let total_units: u64 = courses.iter().map(|c| u64::from(c.units())).sum();
    if total_units == 0 {
        return Err(ValidationError::ZeroTotalWeight {
            count: courses.len(),
        }
        .into());
    }

    let allocation: Vec<AllocatedCourse> = courses
        .iter()
        .map(|course| {
            let share = course.units() as f64 / total_units as f64;
            AllocatedCourse {
                name: course.name().to_string(),
                hours: round_hours(share * daily_budget),
            }
        })
        .collect();

    tracing::debug!(
        courses = allocation.len(),
        total_units,
        daily_budget,
        allocated = allocation.iter().map(|a| a.hours).sum::<f64>(),
        "allocated daily study time"
    );

    Ok(allocation)
}
