//! Data models for `GpaAdvisor`

pub mod course;
pub mod evaluation;
pub mod grade;

pub use course::CourseRecord;
pub use evaluation::{Evaluation, TermSummary};
pub use grade::Grade;
