//! # Study Plan Core Library
//!
//! Splits a fixed daily study budget across courses in proportion to their
//! unit counts, lays that split out over a run of consecutive days, and
//! writes the result as plain text. The `studyplan` CLI is a thin layer over
//! this crate.
//!
//! ## Key Components
//!
//! - [`allocate`]: unit-weighted split of the daily budget
//! - [`render`]: one [`DayPlan`] per day, with an [`EntryOrder`] policy
//! - [`output`]: file and console writers sharing one text layout
//! - [`Config`]: user preferences stored as TOML

pub mod allocator;
pub mod course;
pub mod error;
pub mod generator;
pub mod output;
pub mod plan;
pub mod storage;

pub use allocator::allocate;
pub use course::{parse_date, AllocatedCourse, Course, Hours};
pub use error::{ConfigError, CoreError, Result, ValidationError};
pub use generator::PlanRequest;
pub use plan::{render, DayPlan, EntryOrder, StudyPlan};
pub use storage::Config;
