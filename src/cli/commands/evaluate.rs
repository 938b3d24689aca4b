//! Evaluate command handler
//!
//! Parses transcript files, runs the academic evaluator, and prints the
//! results: headline cumulative GPA, total credits, the recommended
//! next-term credit load, advice, the per-term trend, and any flagged
//! low-grade courses.

use gpa_advisor::core::evaluator;
use gpa_advisor::core::models::Evaluation;
use gpa_advisor::core::transcript::{parse_transcript_csv, Transcript};
use gpa_advisor::{error, info};
use std::path::{Path, PathBuf};

/// Run the evaluate command for one or more transcript files.
///
/// # Arguments
/// * `input_files` - Paths to transcript CSV files
/// * `verbose` - Whether to show per-course detail
pub fn run(input_files: &[PathBuf], verbose: bool) {
    if input_files.is_empty() {
        eprintln!("✗ No input files provided.");
        return;
    }

    for input_file in input_files {
        if let Err(err) = evaluate_single(input_file, verbose) {
            error!("Evaluation failed for {}: {err}", input_file.display());
            eprintln!("{err}");
        }
    }
}

fn evaluate_single(input_file: &Path, verbose: bool) -> Result<(), String> {
    let transcript = parse_transcript_csv(input_file).map_err(|e| {
        error!("Failed to load transcript {}: {e}", input_file.display());
        format!("✗ Failed to load {}: {e}", input_file.display())
    })?;

    if verbose {
        println!(
            "✓ Transcript loaded successfully from: {}",
            input_file.display()
        );
    } else {
        info!("Transcript loaded: {}", input_file.display());
    }

    let evaluation = evaluator::evaluate(&transcript.records)
        .map_err(|e| format!("✗ {}: {e}", input_file.display()))?;

    print_evaluation(&transcript, &evaluation, verbose);

    Ok(())
}

/// Print an evaluation to stdout
fn print_evaluation(transcript: &Transcript, evaluation: &Evaluation, verbose: bool) {
    println!("\n=== Academic Evaluation for {} ===", transcript.student);
    if !transcript.program.is_empty() {
        println!("Program: {}", transcript.program);
    }

    println!("\nCumulative GPA (IPK): {:.2}", evaluation.cumulative_gpa);
    println!("Total credits attempted: {}", evaluation.total_credits);
    println!(
        "Recommended credits next term: {}",
        evaluation.recommended_credits
    );
    println!("\nAdvice: {}", evaluation.advice);

    println!("\nGPA per term:");
    println!("  Term | Credits | GPA (IP)");
    for summary in &evaluation.term_summaries {
        println!(
            "  {:>4} | {:>7} | {:>6.2}",
            summary.term, summary.credits, summary.gpa
        );
    }

    if evaluation.has_flagged_courses() {
        println!("\n⚠️  Courses needing attention (grade below C+):");
        for course in &evaluation.flagged_courses {
            println!(
                "  Term {} - {} ({})",
                course.term, course.name, course.grade
            );
        }
    }

    if verbose {
        let skipped = transcript
            .records
            .iter()
            .filter(|r| !r.is_complete())
            .count();
        if skipped > 0 {
            println!("\nℹ {skipped} incomplete row(s) were excluded from the evaluation.");
        }
    }
}
