//! Academic evaluation pipeline
//!
//! A single linear, stateless transform from entered course records to an
//! [`Evaluation`]: clean the input, compute weighted points, aggregate per
//! term and overall, then derive the credit-load recommendation, advice
//! text, and the list of low-grade courses.

use crate::core::models::{CourseRecord, Evaluation, TermSummary};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;

/// Credit-load recommendation ladder, highest tier first.
/// Boundaries are closed on the lower bound (a GPA of exactly 3.5 earns 24).
const CREDIT_LADDER: [(f64, u32); 3] = [(3.5, 24), (3.0, 22), (2.5, 18)];

/// Credit load recommended when no ladder tier matches
const FALLBACK_CREDITS: u32 = 15;

/// Errors produced by an evaluation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    /// No valid (non-blank-named) course records were present
    EmptyTranscript,
}

impl fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTranscript => {
                write!(f, "No course data entered; add at least one named course")
            }
        }
    }
}

impl Error for EvaluationError {}

/// Filter out incomplete rows (blank or whitespace-only course names).
///
/// Grade symbols and credit ranges are constrained at entry time by the
/// transcript parser, so no further validation happens here.
#[must_use]
pub fn clean_records(records: &[CourseRecord]) -> Vec<CourseRecord> {
    records
        .iter()
        .filter(|r| r.is_complete())
        .cloned()
        .collect()
}

/// Weighted points for one record: credits x grade weight
#[must_use]
pub fn course_points(record: &CourseRecord) -> f64 {
    f64::from(record.credits) * record.grade.weight()
}

/// Compute per-term GPA summaries, ascending by term number.
///
/// Records are partitioned by term into an ordered map, then each partition
/// is reduced independently. A term whose credit sum is zero cannot occur
/// with the entry constraints (every record carries at least one credit),
/// but such a partition is skipped rather than divided by.
#[must_use]
pub fn aggregate_by_term(records: &[CourseRecord]) -> Vec<TermSummary> {
    let mut terms: BTreeMap<u32, (f64, u32)> = BTreeMap::new();

    for record in records {
        let entry = terms.entry(record.term).or_insert((0.0, 0));
        entry.0 += course_points(record);
        entry.1 += record.credits;
    }

    terms
        .into_iter()
        .filter(|(_, (_, credits))| *credits > 0)
        .map(|(term, (points, credits))| TermSummary {
            term,
            gpa: points / f64::from(credits),
            credits,
        })
        .collect()
}

/// Compute the cumulative GPA and total credits over all valid records.
///
/// This is a single pass over every record regardless of term, not an
/// average of the per-term GPAs. Callers must guarantee at least one record
/// with nonzero credits; [`evaluate`] enforces this with the empty check.
#[must_use]
pub fn compute_cumulative(records: &[CourseRecord]) -> (f64, u32) {
    let total_credits: u32 = records.iter().map(|r| r.credits).sum();
    let total_points: f64 = records.iter().map(course_points).sum();

    (total_points / f64::from(total_credits), total_credits)
}

/// Recommend a credit load for the next term from the cumulative GPA.
#[must_use]
pub fn recommend_credit_load(gpa: f64) -> u32 {
    for (threshold, credits) in CREDIT_LADDER {
        if gpa >= threshold {
            return credits;
        }
    }
    FALLBACK_CREDITS
}

/// Select the advice text for a cumulative GPA.
#[must_use]
pub fn advice_for(gpa: f64) -> &'static str {
    if gpa >= 3.5 {
        "Outstanding! Keep up your achievements and apply for scholarship or internship programs."
    } else if gpa >= 3.0 {
        "Good performance. Work on keeping your study habits consistent."
    } else {
        "Your study strategy needs review. Consult with your academic advisor."
    }
}

/// Return every record whose grade weight falls below the C+ tier,
/// preserving the original order.
#[must_use]
pub fn flag_low_courses(records: &[CourseRecord]) -> Vec<CourseRecord> {
    records
        .iter()
        .filter(|r| r.grade.is_low())
        .cloned()
        .collect()
}

/// Run the full evaluation over raw course records.
///
/// # Errors
///
/// Returns [`EvaluationError::EmptyTranscript`] when no valid records remain
/// after cleaning; no partial result is produced.
pub fn evaluate(raw_records: &[CourseRecord]) -> Result<Evaluation, EvaluationError> {
    let records = clean_records(raw_records);
    if records.is_empty() {
        return Err(EvaluationError::EmptyTranscript);
    }

    let term_summaries = aggregate_by_term(&records);
    let (cumulative_gpa, total_credits) = compute_cumulative(&records);
    let recommended_credits = recommend_credit_load(cumulative_gpa);
    let advice = advice_for(cumulative_gpa).to_string();
    let flagged_courses = flag_low_courses(&records);

    Ok(Evaluation {
        cumulative_gpa,
        total_credits,
        recommended_credits,
        advice,
        term_summaries,
        flagged_courses,
    })
}
