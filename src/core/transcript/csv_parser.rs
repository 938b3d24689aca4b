//! CSV parser for transcript data
//!
//! Transcripts are small sectioned CSV files: a metadata header, then a
//! `Courses` section with one row per course taken:
//!
//! ```csv
//! Student, Budi Santoso
//! Program, Informatics
//!
//! Courses,
//! Term,Course Name,Credits,Grade
//! 1,Calculus I,3,A
//! 1,Intro Programming,4,B+
//! ```
//!
//! Rows with a blank course name are kept as incomplete records; the
//! evaluator excludes them from computation. Unknown grade symbols and
//! out-of-range credits are hard parse errors.

use crate::core::models::course::{MAX_CREDITS, MIN_CREDITS};
use crate::core::models::{CourseRecord, Grade};
use std::error::Error;
use std::fs;
use std::path::Path;

/// A parsed student transcript
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    /// Student name from the metadata header
    pub student: String,
    /// Study program (may be empty)
    pub program: String,
    /// Course rows in file order, incomplete rows included
    pub records: Vec<CourseRecord>,
}

/// Parse a transcript CSV file
///
/// # Arguments
/// * `path` - Path to the CSV file
///
/// # Returns
/// A [`Transcript`] with metadata and all course rows from the file
///
/// # Errors
/// Returns an error if the file cannot be read, the `Courses` section or
/// `Student` metadata is missing, or any row carries an unknown grade
/// symbol, a malformed term, or credits outside [1, 6].
pub fn parse_transcript_csv<P: AsRef<Path>>(path: P) -> Result<Transcript, Box<dyn Error>> {
    let content = fs::read_to_string(path)?;
    parse_transcript_str(&content)
}

/// Parse transcript data from an in-memory CSV string
///
/// # Errors
/// Same conditions as [`parse_transcript_csv`].
pub fn parse_transcript_str(content: &str) -> Result<Transcript, Box<dyn Error>> {
    let lines: Vec<&str> = content.lines().collect();

    let (student, program) = parse_metadata(&lines)?;

    // Find the courses section
    let courses_start = lines
        .iter()
        .position(|line| {
            line.split(',')
                .next()
                .is_some_and(|f| f.trim().eq_ignore_ascii_case("courses"))
        })
        .ok_or("No 'Courses' section found in CSV")?;

    if courses_start + 1 >= lines.len() {
        return Err("No course header found".into());
    }

    let headers = parse_csv_line(lines[courses_start + 1]);

    let mut records = Vec::new();
    for (offset, line) in lines.iter().enumerate().skip(courses_start + 2) {
        if line.trim().is_empty() {
            continue;
        }

        let record = parse_course_line(line, &headers)
            .map_err(|e| format!("Line {}: {e}", offset + 1))?;
        records.push(record);
    }

    Ok(Transcript {
        student,
        program,
        records,
    })
}

/// Parse the metadata section above the course table
fn parse_metadata(lines: &[&str]) -> Result<(String, String), Box<dyn Error>> {
    let mut student = String::new();
    let mut program = String::new();

    for line in lines.iter().take(10) {
        let parts: Vec<&str> = line.split(',').map(str::trim).collect();
        if parts.len() < 2 {
            continue;
        }

        match parts[0].to_lowercase().as_str() {
            "student" => student = parts[1].to_string(),
            "program" => program = parts[1].to_string(),
            _ => {}
        }
    }

    if student.is_empty() {
        return Err("Missing Student name".into());
    }

    Ok((student, program))
}

/// Parse a CSV line into fields
fn parse_csv_line(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .map(std::string::ToString::to_string)
        .collect()
}

/// Parse a single course row from the CSV
fn parse_course_line(line: &str, headers: &[String]) -> Result<CourseRecord, Box<dyn Error>> {
    let term_str = get_field(line, "Term", headers).ok_or("Missing Term column")?;
    let term: u32 = term_str
        .parse()
        .map_err(|_| format!("Invalid term number: '{term_str}'"))?;
    if term == 0 {
        return Err("Term numbers start at 1".into());
    }

    let name = get_field(line, "Course Name", headers)
        .unwrap_or_default()
        .to_string();

    let credits_str = get_field(line, "Credits", headers).ok_or("Missing Credits column")?;
    let credits: u32 = credits_str
        .parse()
        .map_err(|_| format!("Invalid credits value: '{credits_str}'"))?;
    if !(MIN_CREDITS..=MAX_CREDITS).contains(&credits) {
        return Err(format!(
            "Credits must be between {MIN_CREDITS} and {MAX_CREDITS}, got {credits}"
        )
        .into());
    }

    let grade_str = get_field(line, "Grade", headers).ok_or("Missing Grade column")?;
    let grade: Grade = grade_str.parse()?;

    Ok(CourseRecord::new(term, name, credits, grade))
}

/// Get a field value from a CSV line by header name
fn get_field<'a>(line: &'a str, header_name: &str, headers: &[String]) -> Option<&'a str> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();

    headers
        .iter()
        .position(|h| h.eq_ignore_ascii_case(header_name))
        .and_then(|idx| fields.get(idx))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Student, Budi Santoso
Program, Informatics

Courses,
Term,Course Name,Credits,Grade
1,Calculus I,3,A
1,Intro Programming,4,B+
2,Data Structures,4,C
";

    #[test]
    fn parses_sample_transcript() {
        let transcript = parse_transcript_str(SAMPLE).expect("parse sample");

        assert_eq!(transcript.student, "Budi Santoso");
        assert_eq!(transcript.program, "Informatics");
        assert_eq!(transcript.records.len(), 3);

        let first = &transcript.records[0];
        assert_eq!(first.term, 1);
        assert_eq!(first.name, "Calculus I");
        assert_eq!(first.credits, 3);
        assert_eq!(first.grade, Grade::A);

        assert_eq!(transcript.records[2].term, 2);
        assert_eq!(transcript.records[2].grade, Grade::C);
    }

    #[test]
    fn keeps_blank_named_rows_as_incomplete() {
        let csv = "\
Student, Sari
Courses,
Term,Course Name,Credits,Grade
1,,3,A
1,Calculus I,3,B
";
        let transcript = parse_transcript_str(csv).expect("parse");
        assert_eq!(transcript.records.len(), 2);
        assert!(!transcript.records[0].is_complete());
        assert!(transcript.records[1].is_complete());
    }

    #[test]
    fn rejects_unknown_grade_symbol() {
        let csv = "\
Student, Sari
Courses,
Term,Course Name,Credits,Grade
1,Calculus I,3,F
";
        let err = parse_transcript_str(csv).expect_err("unknown grade");
        assert!(err.to_string().contains("Unknown grade symbol"));
    }

    #[test]
    fn rejects_credits_outside_range() {
        let csv = "\
Student, Sari
Courses,
Term,Course Name,Credits,Grade
1,Calculus I,9,A
";
        let err = parse_transcript_str(csv).expect_err("bad credits");
        assert!(err.to_string().contains("Credits must be between"));
    }

    #[test]
    fn rejects_missing_student() {
        let csv = "\
Courses,
Term,Course Name,Credits,Grade
1,Calculus I,3,A
";
        let err = parse_transcript_str(csv).expect_err("missing student");
        assert!(err.to_string().contains("Missing Student"));
    }

    #[test]
    fn rejects_missing_courses_section() {
        let csv = "Student, Sari\n";
        let err = parse_transcript_str(csv).expect_err("missing section");
        assert!(err.to_string().contains("Courses"));
    }

    #[test]
    fn rejects_term_zero() {
        let csv = "\
Student, Sari
Courses,
Term,Course Name,Credits,Grade
0,Calculus I,3,A
";
        let err = parse_transcript_str(csv).expect_err("term zero");
        assert!(err.to_string().contains("start at 1"));
    }

    #[test]
    fn header_columns_can_be_reordered() {
        let csv = "\
Student, Sari
Courses,
Grade,Credits,Course Name,Term
A,3,Calculus I,1
";
        let transcript = parse_transcript_str(csv).expect("parse");
        assert_eq!(transcript.records[0].name, "Calculus I");
        assert_eq!(transcript.records[0].grade, Grade::A);
    }
}
