//! Course record model

use super::grade::Grade;
use serde::{Deserialize, Serialize};

/// Credit range permitted for a single course (SKS)
pub const MIN_CREDITS: u32 = 1;
/// Upper bound of the permitted credit range
pub const MAX_CREDITS: u32 = 6;

/// A single course entry from a student transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Term in which the course was taken (1-based)
    pub term: u32,

    /// Course name (e.g., "Calculus I"); empty means an incomplete row
    pub name: String,

    /// Credit-hour weight, constrained to [1, 6]
    pub credits: u32,

    /// Letter grade earned
    pub grade: Grade,
}

impl CourseRecord {
    /// Create a new course record
    #[must_use]
    pub const fn new(term: u32, name: String, credits: u32, grade: Grade) -> Self {
        Self {
            term,
            name,
            credits,
            grade,
        }
    }

    /// Whether this row carries a usable course name.
    /// Rows left blank during entry are excluded from computation.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_creation() {
        let record = CourseRecord::new(1, "Discrete Structures".to_string(), 4, Grade::BPlus);

        assert_eq!(record.term, 1);
        assert_eq!(record.name, "Discrete Structures");
        assert_eq!(record.credits, 4);
        assert_eq!(record.grade, Grade::BPlus);
        assert!(record.is_complete());
    }

    #[test]
    fn test_blank_name_is_incomplete() {
        let blank = CourseRecord::new(1, String::new(), 3, Grade::A);
        assert!(!blank.is_complete());

        let whitespace = CourseRecord::new(1, "   ".to_string(), 3, Grade::A);
        assert!(!whitespace.is_complete());
    }
}
