//! End-to-end plan generation from raw inputs.

use serde::{Deserialize, Serialize};

use crate::allocator::allocate;
use crate::course::{parse_date, Course};
use crate::error::Result;
use crate::plan::{render, EntryOrder, StudyPlan};

/// Everything needed to build one plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRequest {
    pub courses: Vec<Course>,
    /// Study hours available each day.
    pub daily_hours: f64,
    pub total_days: u64,
    /// Semester start as `YYYY-MM-DD`.
    pub start_date: String,
    #[serde(default)]
    pub order: EntryOrder,
}

impl PlanRequest {
    pub fn new(
        courses: Vec<Course>,
        daily_hours: f64,
        total_days: u64,
        start_date: impl Into<String>,
    ) -> Self {
        Self {
            courses,
            daily_hours,
            total_days,
            start_date: start_date.into(),
            order: EntryOrder::default(),
        }
    }

    /// Set the entry ordering
    pub fn with_order(mut self, order: EntryOrder) -> Self {
        self.order = order;
        self
    }

    /// Parse the start date, allocate, and render the full plan.
    ///
    /// The date is checked first, so a malformed date fails before any
    /// allocation happens.
    ///
    /// # Errors
    ///
    /// `Format` for a bad start date, `InvalidInput` for an empty course list,
    /// zero total units, a bad budget, or a range past the calendar's end.
    pub fn generate(&self) -> Result<StudyPlan> {
        let start = parse_date(&self.start_date)?;
        let allocation = allocate(&self.courses, self.daily_hours)?;
        render(
            &allocation,
            start,
            self.total_days,
            self.daily_hours,
            self.order,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    fn courses() -> Vec<Course> {
        vec![
            Course::new("Math", 3).unwrap(),
            Course::new("Physics", 1).unwrap(),
        ]
    }

    #[test]
    fn generates_full_plan() {
        let plan = PlanRequest::new(courses(), 4.0, 2, "2024-01-01")
            .with_order(EntryOrder::Fixed)
            .generate()
            .unwrap();
        assert_eq!(plan.len(), 2);
        assert_eq!(plan.days[1].date.to_string(), "2024-01-02");
        assert_eq!(plan.days[0].entries[0].hours, 3.0);
    }

    #[test]
    fn bad_date_wins_over_bad_courses() {
        let err = PlanRequest::new(Vec::new(), 4.0, 2, "Jan 1st")
            .generate()
            .unwrap_err();
        assert!(matches!(err, CoreError::Format { .. }));
    }

    #[test]
    fn empty_courses_with_valid_date_is_invalid_input() {
        let err = PlanRequest::new(Vec::new(), 4.0, 2, "2024-01-01")
            .generate()
            .unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));
    }
}
