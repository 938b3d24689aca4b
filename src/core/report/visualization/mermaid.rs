//! Mermaid chart generation
//!
//! Produces a Mermaid `xychart-beta` line chart of term GPA for embedding in
//! Markdown reports. Renders in GitHub, GitLab, and VS Code previews.

use crate::core::models::TermSummary;
use std::fmt::Write;

/// Upper bound of the chart's y-axis; slightly above the 4.0 scale so a
/// perfect term doesn't sit on the frame edge.
const Y_AXIS_MAX: f64 = 4.2;

/// Generates Mermaid diagrams for term-GPA trends
pub struct MermaidGenerator;

impl MermaidGenerator {
    /// Generate an `xychart-beta` line chart of GPA per term.
    ///
    /// Terms appear on the x-axis in the order given (ascending by
    /// construction); the y-axis is fixed to [0, 4.2].
    #[must_use]
    pub fn generate_trend_chart(summaries: &[TermSummary]) -> String {
        let mut chart = String::new();

        chart.push_str("```mermaid\nxychart-beta\n");
        chart.push_str("    title \"GPA per Term\"\n");

        let terms: Vec<String> = summaries
            .iter()
            .map(|s| format!("\"{}\"", s.term))
            .collect();
        let _ = writeln!(chart, "    x-axis [{}]", terms.join(", "));
        let _ = writeln!(chart, "    y-axis \"Term GPA\" 0 --> {Y_AXIS_MAX}");

        let points: Vec<String> = summaries.iter().map(|s| format!("{:.2}", s.gpa)).collect();
        let _ = writeln!(chart, "    line [{}]", points.join(", "));

        chart.push_str("```\n");
        chart
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_lists_terms_and_values() {
        let summaries = vec![
            TermSummary {
                term: 1,
                gpa: 3.0,
                credits: 15,
            },
            TermSummary {
                term: 2,
                gpa: 3.5,
                credits: 18,
            },
        ];

        let chart = MermaidGenerator::generate_trend_chart(&summaries);

        assert!(chart.contains("xychart-beta"));
        assert!(chart.contains("x-axis [\"1\", \"2\"]"));
        assert!(chart.contains("line [3.00, 3.50]"));
        assert!(chart.contains("0 --> 4.2"));
    }

    #[test]
    fn single_term_chart_is_well_formed() {
        let summaries = vec![TermSummary {
            term: 1,
            gpa: 4.0,
            credits: 3,
        }];

        let chart = MermaidGenerator::generate_trend_chart(&summaries);
        assert!(chart.starts_with("```mermaid"));
        assert!(chart.trim_end().ends_with("```"));
    }
}
