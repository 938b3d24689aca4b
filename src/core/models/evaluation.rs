//! Evaluation result models

use super::course::CourseRecord;
use serde::{Deserialize, Serialize};

/// Grade-point average for a single term (IP)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermSummary {
    /// Term number (1-based)
    pub term: u32,
    /// Term GPA in [0, 4]
    pub gpa: f64,
    /// Credits attempted in this term
    pub credits: u32,
}

/// Complete result of one evaluation run
///
/// Recomputed fresh from the current course records on every request;
/// nothing here persists between evaluations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Cumulative GPA (IPK) over all valid records
    pub cumulative_gpa: f64,
    /// Total credits attempted across all terms
    pub total_credits: u32,
    /// Recommended credit load for the next term
    pub recommended_credits: u32,
    /// Advice text selected by GPA threshold
    pub advice: String,
    /// Per-term GPA summaries, ascending by term
    pub term_summaries: Vec<TermSummary>,
    /// Courses whose grade weight falls below the C+ tier
    pub flagged_courses: Vec<CourseRecord>,
}

impl Evaluation {
    /// Whether any course was flagged as low-grade
    #[must_use]
    pub fn has_flagged_courses(&self) -> bool {
        !self.flagged_courses.is_empty()
    }
}
