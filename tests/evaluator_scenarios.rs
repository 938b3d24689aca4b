//! End-to-end evaluation scenarios over the public library API

use gpa_advisor::core::evaluator::{self, EvaluationError};
use gpa_advisor::core::models::{CourseRecord, Grade};

fn record(term: u32, name: &str, credits: u32, grade: Grade) -> CourseRecord {
    CourseRecord::new(term, name.to_string(), credits, grade)
}

#[test]
fn perfect_single_course_student() {
    // One term, one record: 3 credits at A
    let records = vec![record(1, "Calculus I", 3, Grade::A)];
    let eval = evaluator::evaluate(&records).expect("evaluation");

    assert!((eval.cumulative_gpa - 4.0).abs() < 1e-9);
    assert_eq!(eval.total_credits, 3);
    assert_eq!(eval.recommended_credits, 24);
    assert!(eval.advice.contains("scholarship"));
    assert!(eval.flagged_courses.is_empty());
}

#[test]
fn mixed_grades_in_one_term() {
    // 3 credits at C plus 2 credits at A: 15.5 points over 5 credits = 3.10
    let records = vec![
        record(1, "Statistics", 3, Grade::C),
        record(1, "Algorithms", 2, Grade::A),
    ];
    let eval = evaluator::evaluate(&records).expect("evaluation");

    assert!((eval.cumulative_gpa - 3.10).abs() < 1e-9);
    assert_eq!(eval.total_credits, 5);
    assert_eq!(eval.recommended_credits, 22);
    assert_eq!(eval.flagged_courses.len(), 1);
    assert_eq!(eval.flagged_courses[0].grade, Grade::C);
}

#[test]
fn recovery_across_two_terms_hits_boundary() {
    // Term 1 GPA 2.0 over 5 credits, term 2 GPA 4.0 over 5 credits:
    // cumulative (5*2.0 + 5*4.0)/10 = 3.00, on the >=3.0 boundary
    let records = vec![
        record(1, "Physics I", 5, Grade::DPlus),
        record(2, "Physics II", 5, Grade::A),
    ];
    let eval = evaluator::evaluate(&records).expect("evaluation");

    assert!((eval.cumulative_gpa - 3.0).abs() < 1e-9);
    assert_eq!(eval.recommended_credits, 22);
    assert!(eval.advice.contains("consistent"));

    assert_eq!(eval.term_summaries.len(), 2);
    assert!((eval.term_summaries[0].gpa - 2.0).abs() < 1e-9);
    assert!((eval.term_summaries[1].gpa - 4.0).abs() < 1e-9);
}

#[test]
fn entirely_blank_input_is_a_blocking_error() {
    let records = vec![record(1, "", 3, Grade::A), record(2, " ", 4, Grade::B)];

    assert_eq!(
        evaluator::evaluate(&records),
        Err(EvaluationError::EmptyTranscript)
    );
}

#[test]
fn empty_slice_is_a_blocking_error() {
    assert_eq!(
        evaluator::evaluate(&[]),
        Err(EvaluationError::EmptyTranscript)
    );
}

#[test]
fn gpa_stays_within_grade_scale_bounds() {
    // All-lowest and all-highest transcripts pin the reachable range
    let lowest = vec![record(1, "Worst", 6, Grade::E)];
    let highest = vec![record(1, "Best", 6, Grade::A)];

    let low_eval = evaluator::evaluate(&lowest).expect("evaluation");
    let high_eval = evaluator::evaluate(&highest).expect("evaluation");

    assert!((low_eval.cumulative_gpa - 1.0).abs() < 1e-9);
    assert!((high_eval.cumulative_gpa - 4.0).abs() < 1e-9);
    assert_eq!(low_eval.recommended_credits, 15);
    assert_eq!(high_eval.recommended_credits, 24);
}

#[test]
fn repeat_evaluation_is_stable() {
    let records = vec![
        record(1, "Calculus I", 3, Grade::BMinus),
        record(2, "Databases", 4, Grade::CMinus),
        record(3, "Networks", 2, Grade::A),
    ];

    let first = evaluator::evaluate(&records).expect("first");
    let second = evaluator::evaluate(&records).expect("second");

    assert_eq!(first, second);
}
