//! Report command handler
//!
//! Generates evaluation reports in Markdown or HTML format with the GPA
//! trend chart and flagged-course table.

use gpa_advisor::config::Config;
use gpa_advisor::core::{
    evaluator,
    report::{
        formats::ReportFormat, HtmlReporter, MarkdownReporter, ReportContext, ReportGenerator,
    },
    transcript::parse_transcript_csv,
};
use gpa_advisor::{error, info};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Run the report command.
///
/// # Arguments
/// * `input_file` - Path to the transcript CSV file
/// * `output_file` - Optional output path
/// * `format_str` - Report format (markdown, html)
/// * `config` - Configuration containing the default reports directory
pub fn run(input_file: &Path, output_file: Option<&Path>, format_str: &str, config: &Config) {
    if let Err(err) = generate_report(input_file, output_file, format_str, config) {
        error!(
            "Report generation failed for {}: {err}",
            input_file.display()
        );
        eprintln!("{err}");
    }
}

fn generate_report(
    input_file: &Path,
    output_file: Option<&Path>,
    format_str: &str,
    config: &Config,
) -> Result<(), String> {
    // Parse the format
    let format =
        ReportFormat::from_str(format_str).map_err(|e| format!("✗ {e}. Use: markdown or html"))?;

    // Load and evaluate the transcript
    let transcript = parse_transcript_csv(input_file).map_err(|e| {
        error!("Failed to load transcript {}: {e}", input_file.display());
        format!("✗ Failed to load {}: {e}", input_file.display())
    })?;

    info!("Transcript loaded: {}", input_file.display());

    let evaluation = evaluator::evaluate(&transcript.records)
        .map_err(|e| format!("✗ {}: {e}", input_file.display()))?;

    // Determine output path
    let final_output_path: PathBuf = if let Some(output) = output_file {
        output.to_path_buf()
    } else {
        let reports_dir = PathBuf::from(&config.paths.reports_dir);
        std::fs::create_dir_all(&reports_dir).map_err(|e| {
            format!(
                "✗ Failed to create reports directory {}: {e}",
                reports_dir.display()
            )
        })?;

        let filename = input_file
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("transcript")
            .to_string();
        let output_filename = format!("{filename}_report.{}", format.extension());
        reports_dir.join(output_filename)
    };

    // Write the report
    let ctx = ReportContext::new(&transcript, &evaluation);
    match format {
        ReportFormat::Markdown => {
            let reporter = MarkdownReporter::new();
            reporter
                .generate(&ctx, &final_output_path)
                .map_err(|e| format!("✗ Failed to generate Markdown report: {e}"))?;
        }
        ReportFormat::Html => {
            let reporter = HtmlReporter::new();
            reporter
                .generate(&ctx, &final_output_path)
                .map_err(|e| format!("✗ Failed to generate HTML report: {e}"))?;
        }
    }

    println!("✓ Report generated: {}", final_output_path.display());
    info!("Report exported to: {}", final_output_path.display());

    print_summary(&transcript.student, &evaluation);

    Ok(())
}

/// Print a short summary after report generation
fn print_summary(student: &str, evaluation: &gpa_advisor::core::models::Evaluation) {
    println!("\n=== Summary ===");
    println!("Student: {student}");
    println!("Cumulative GPA: {:.2}", evaluation.cumulative_gpa);
    println!("Total Credits: {}", evaluation.total_credits);
    println!("Terms: {}", evaluation.term_summaries.len());

    if evaluation.has_flagged_courses() {
        println!(
            "⚠️  {} course(s) graded below C+",
            evaluation.flagged_courses.len()
        );
    }
}
