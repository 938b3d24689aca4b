//! Report generation module for academic evaluations
//!
//! Renders an evaluation as a formatted report (Markdown or HTML) with a
//! term-GPA trend chart and, when present, the table of flagged courses.

pub mod formats;
pub mod visualization;

use crate::core::models::Evaluation;
use crate::core::transcript::Transcript;
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};
pub use visualization::MermaidGenerator;

/// Data context for report generation
///
/// Aggregates everything needed to render a report, providing a single
/// source of truth for templates.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Transcript the evaluation was computed from
    pub transcript: &'a Transcript,
    /// Evaluation result being reported
    pub evaluation: &'a Evaluation,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(transcript: &'a Transcript, evaluation: &'a Evaluation) -> Self {
        Self {
            transcript,
            evaluation,
        }
    }

    /// Student name for the report header
    #[must_use]
    pub fn student_name(&self) -> &str {
        &self.transcript.student
    }

    /// Study program, or a placeholder when not recorded
    #[must_use]
    pub fn program_name(&self) -> &str {
        if self.transcript.program.is_empty() {
            "-"
        } else {
            &self.transcript.program
        }
    }

    /// Number of terms covered by the evaluation
    #[must_use]
    pub fn term_count(&self) -> usize {
        self.evaluation.term_summaries.len()
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;
}
