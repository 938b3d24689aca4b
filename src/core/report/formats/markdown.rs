//! Markdown report generator
//!
//! Generates evaluation reports in Markdown format with an embedded Mermaid
//! trend chart. These reports render well in GitHub, GitLab, and VS Code.

use crate::core::report::visualization::MermaidGenerator;
use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let eval = ctx.evaluation;
        let mut output = MARKDOWN_TEMPLATE.to_string();

        output = output.replace("{{student}}", ctx.student_name());
        output = output.replace("{{program}}", ctx.program_name());
        output = output.replace("{{term_count}}", &ctx.term_count().to_string());

        output = output.replace(
            "{{cumulative_gpa}}",
            &format!("{:.2}", eval.cumulative_gpa),
        );
        output = output.replace("{{total_credits}}", &eval.total_credits.to_string());
        output = output.replace(
            "{{recommended_credits}}",
            &eval.recommended_credits.to_string(),
        );
        output = output.replace("{{advice}}", &eval.advice);

        let trend_chart = MermaidGenerator::generate_trend_chart(&eval.term_summaries);
        output = output.replace("{{trend_chart}}", &trend_chart);

        output = output.replace("{{term_table}}", &Self::generate_term_table(ctx));
        output = output.replace("{{flagged_section}}", &Self::generate_flagged_section(ctx));
        output = output.replace("{{version}}", crate::core::get_version());

        output
    }

    /// Generate the per-term GPA table
    fn generate_term_table(ctx: &ReportContext) -> String {
        let mut table = String::new();

        table.push_str("| Term | Credits | GPA (IP) |\n");
        table.push_str("|---|---|---|\n");

        for summary in &ctx.evaluation.term_summaries {
            let _ = writeln!(
                table,
                "| {} | {} | {:.2} |",
                summary.term, summary.credits, summary.gpa
            );
        }

        table
    }

    /// Generate the flagged-course section, empty when nothing was flagged
    fn generate_flagged_section(ctx: &ReportContext) -> String {
        if !ctx.evaluation.has_flagged_courses() {
            return String::new();
        }

        let mut section = String::new();
        section.push_str("## Courses Needing Attention\n\n");
        section.push_str("Courses graded below C+:\n\n");
        section.push_str("| Term | Course | Grade |\n");
        section.push_str("|---|---|---|\n");

        for course in &ctx.evaluation.flagged_courses {
            let _ = writeln!(
                section,
                "| {} | {} | {} |",
                course.term, course.name, course.grade
            );
        }

        section
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        fs::write(output_path, content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluator::evaluate;
    use crate::core::models::{CourseRecord, Grade};
    use crate::core::transcript::Transcript;

    fn sample_transcript() -> Transcript {
        Transcript {
            student: "Budi Santoso".to_string(),
            program: "Informatics".to_string(),
            records: vec![
                CourseRecord::new(1, "Calculus I".to_string(), 3, Grade::A),
                CourseRecord::new(1, "Statistics".to_string(), 3, Grade::C),
                CourseRecord::new(2, "Databases".to_string(), 4, Grade::BPlus),
            ],
        }
    }

    #[test]
    fn report_carries_headline_metrics() {
        let transcript = sample_transcript();
        let eval = evaluate(&transcript.records).expect("evaluation");
        let ctx = ReportContext::new(&transcript, &eval);

        let report = MarkdownReporter::new().render(&ctx).expect("render");

        assert!(report.contains("Budi Santoso"));
        assert!(report.contains("Informatics"));
        assert!(report.contains("xychart-beta"));
        assert!(report.contains("| Term | Credits | GPA (IP) |"));
        assert!(!report.contains("{{"));
    }

    #[test]
    fn flagged_section_appears_only_when_needed() {
        let transcript = sample_transcript();
        let eval = evaluate(&transcript.records).expect("evaluation");
        let ctx = ReportContext::new(&transcript, &eval);
        let report = MarkdownReporter::new().render(&ctx).expect("render");
        assert!(report.contains("Courses Needing Attention"));
        assert!(report.contains("| 1 | Statistics | C |"));

        let clean = Transcript {
            records: vec![CourseRecord::new(
                1,
                "Calculus I".to_string(),
                3,
                Grade::A,
            )],
            ..sample_transcript()
        };
        let eval = evaluate(&clean.records).expect("evaluation");
        let ctx = ReportContext::new(&clean, &eval);
        let report = MarkdownReporter::new().render(&ctx).expect("render");
        assert!(!report.contains("Courses Needing Attention"));
    }
}
