//! HTML report generator
//!
//! Generates evaluation reports in HTML format. The output is self-contained
//! with embedded CSS and an inline SVG line chart of the term-GPA trend.

use crate::core::models::TermSummary;
use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded HTML report template
const HTML_TEMPLATE: &str = include_str!("../templates/report.html");

/// Chart geometry for the inline SVG trend
const CHART_WIDTH: f64 = 720.0;
const CHART_HEIGHT: f64 = 280.0;
const CHART_PADDING: f64 = 40.0;
/// Y-axis ceiling, slightly above the 4.0 scale
const Y_AXIS_MAX: f64 = 4.2;

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let eval = ctx.evaluation;
        let mut output = HTML_TEMPLATE.to_string();

        output = output.replace("{{student}}", &escape_html(ctx.student_name()));
        output = output.replace("{{program}}", &escape_html(ctx.program_name()));
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
        output = output.replace("{{advice}}", &escape_html(&eval.advice));

        let trend_chart = Self::generate_trend_svg(&eval.term_summaries);
        output = output.replace("{{trend_chart}}", &trend_chart);

        output = output.replace("{{term_table}}", &Self::generate_term_table(ctx));
        output = output.replace("{{flagged_section}}", &Self::generate_flagged_section(ctx));
        output = output.replace("{{version}}", crate::core::get_version());

        output
    }

    /// Generate an inline SVG line chart of GPA per term (y-axis 0..4.2)
    fn generate_trend_svg(summaries: &[TermSummary]) -> String {
        let inner_width = CHART_WIDTH - 2.0 * CHART_PADDING;
        let inner_height = CHART_HEIGHT - 2.0 * CHART_PADDING;

        // Map a (term index, gpa) pair to SVG coordinates
        let x_of = |idx: usize| {
            if summaries.len() <= 1 {
                CHART_PADDING + inner_width / 2.0
            } else {
                #[allow(clippy::cast_precision_loss)]
                let fraction = idx as f64 / (summaries.len() - 1) as f64;
                CHART_PADDING + fraction * inner_width
            }
        };
        let y_of = |gpa: f64| CHART_PADDING + (1.0 - gpa / Y_AXIS_MAX) * inner_height;

        let mut svg = String::new();
        let _ = writeln!(
            svg,
            "<svg viewBox=\"0 0 {CHART_WIDTH} {CHART_HEIGHT}\" role=\"img\" aria-label=\"GPA per term\">"
        );

        // Horizontal gridlines at whole GPA values
        for grid in 0..=4 {
            let y = y_of(f64::from(grid));
            let _ = writeln!(
                svg,
                "  <line x1=\"{CHART_PADDING}\" y1=\"{y:.1}\" x2=\"{:.1}\" y2=\"{y:.1}\" stroke=\"#d9e2ec\"/>",
                CHART_WIDTH - CHART_PADDING
            );
            let _ = writeln!(
                svg,
                "  <text x=\"{:.1}\" y=\"{:.1}\" font-size=\"11\" fill=\"#52606d\">{grid}.0</text>",
                CHART_PADDING - 26.0,
                y + 4.0
            );
        }

        // Trend polyline
        let points: Vec<String> = summaries
            .iter()
            .enumerate()
            .map(|(idx, s)| format!("{:.1},{:.1}", x_of(idx), y_of(s.gpa)))
            .collect();
        let _ = writeln!(
            svg,
            "  <polyline points=\"{}\" fill=\"none\" stroke=\"#2563eb\" stroke-width=\"2\"/>",
            points.join(" ")
        );

        // Data points and term labels
        for (idx, summary) in summaries.iter().enumerate() {
            let x = x_of(idx);
            let y = y_of(summary.gpa);
            let _ = writeln!(
                svg,
                "  <circle cx=\"{x:.1}\" cy=\"{y:.1}\" r=\"4\" fill=\"#2563eb\"/>"
            );
            let _ = writeln!(
                svg,
                "  <text x=\"{x:.1}\" y=\"{:.1}\" font-size=\"12\" text-anchor=\"middle\" fill=\"#1f2933\">Term {}</text>",
                CHART_HEIGHT - CHART_PADDING + 20.0,
                summary.term
            );
        }

        svg.push_str("</svg>\n");
        svg
    }

    /// Generate the per-term results table
    fn generate_term_table(ctx: &ReportContext) -> String {
        let mut table = String::new();

        table.push_str("<table>\n<tr><th>Term</th><th>Credits</th><th>GPA (IP)</th></tr>\n");
        for summary in &ctx.evaluation.term_summaries {
            let _ = writeln!(
                table,
                "<tr><td>{}</td><td>{}</td><td>{:.2}</td></tr>",
                summary.term, summary.credits, summary.gpa
            );
        }
        table.push_str("</table>\n");

        table
    }

    /// Generate the flagged-course section, empty when nothing was flagged
    fn generate_flagged_section(ctx: &ReportContext) -> String {
        if !ctx.evaluation.has_flagged_courses() {
            return String::new();
        }

        let mut section = String::new();
        section.push_str("<h2>Courses Needing Attention</h2>\n");
        section.push_str("<p>Courses graded below C+:</p>\n");
        section.push_str("<table>\n<tr><th>Term</th><th>Course</th><th>Grade</th></tr>\n");

        for course in &ctx.evaluation.flagged_courses {
            let _ = writeln!(
                section,
                "<tr class=\"flagged\"><td>{}</td><td>{}</td><td>{}</td></tr>",
                course.term,
                escape_html(&course.name),
                course.grade
            );
        }
        section.push_str("</table>\n");

        section
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        fs::write(output_path, content)?;
        Ok(())
    }

    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}

/// Minimal HTML escaping for user-supplied strings
fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::evaluator::evaluate;
    use crate::core::models::{CourseRecord, Grade};
    use crate::core::transcript::Transcript;

    #[test]
    fn html_report_is_self_contained() {
        let transcript = Transcript {
            student: "Sari <Dewi>".to_string(),
            program: String::new(),
            records: vec![
                CourseRecord::new(1, "Calculus I".to_string(), 3, Grade::A),
                CourseRecord::new(2, "Statistics".to_string(), 3, Grade::DPlus),
            ],
        };
        let eval = evaluate(&transcript.records).expect("evaluation");
        let ctx = ReportContext::new(&transcript, &eval);

        let report = HtmlReporter::new().render(&ctx).expect("render");

        assert!(report.contains("<!DOCTYPE html>"));
        assert!(report.contains("Sari &lt;Dewi&gt;"));
        assert!(report.contains("<svg"));
        assert!(report.contains("Courses Needing Attention"));
        assert!(!report.contains("{{"));
    }

    #[test]
    fn svg_plots_one_point_per_term() {
        let summaries = vec![
            TermSummary {
                term: 1,
                gpa: 2.0,
                credits: 12,
            },
            TermSummary {
                term: 2,
                gpa: 4.0,
                credits: 15,
            },
        ];

        let svg = HtmlReporter::generate_trend_svg(&summaries);
        assert_eq!(svg.matches("<circle").count(), 2);
        assert!(svg.contains("Term 1"));
        assert!(svg.contains("Term 2"));
    }
}
