//! End-to-end runs of the harness against a scratch directory

use std::fs;
use std::io::{BufRead, Write};

use searchjudge::{BinarySearch, Harness, HarnessPaths, RunOutcome, Solution, SolutionError, Verdict};
use tempfile::TempDir;

fn scratch(input: impl AsRef<[u8]>) -> (TempDir, HarnessPaths) {
    let dir = tempfile::tempdir().unwrap();
    let paths = HarnessPaths::in_dir(dir.path());
    fs::write(&paths.input, input).unwrap();
    (dir, paths)
}

fn run(paths: &HarnessPaths) -> i32 {
    Harness::new(paths.clone(), BinarySearch).run()
}

#[test]
fn test_present_key_writes_index() {
    let (_dir, paths) = scratch("5\n1 3 5 7 9\n7");

    assert_eq!(run(&paths), 0);
    assert_eq!(fs::read_to_string(&paths.output).unwrap(), "3");
    assert!(!paths.error.exists());
}

#[test]
fn test_stray_bytes_after_key_are_never_read() {
    let (_dir, paths) = scratch(b"3\n1 2 3\n2\n\xff\xfe");

    assert_eq!(run(&paths), 0);
    assert_eq!(fs::read_to_string(&paths.output).unwrap(), "1");
    assert!(!paths.error.exists());
}

#[test]
fn test_non_utf8_token_is_a_runtime_error() {
    let (_dir, paths) = scratch(b"2\n1 \xff\n1");

    assert_eq!(run(&paths), 1);
    let record = fs::read_to_string(&paths.error).unwrap();
    assert!(record.starts_with("Runtime Error: invalid sequence element"));
    assert!(!paths.output.exists());
}

#[test]
fn test_absent_key_writes_minus_one() {
    let (_dir, paths) = scratch("3\n1 2 3\n10");

    assert_eq!(run(&paths), 0);
    assert_eq!(fs::read_to_string(&paths.output).unwrap(), "-1");
    assert!(!paths.error.exists());
}

#[test]
fn test_non_numeric_input_writes_error_only() {
    let (_dir, paths) = scratch("abc");

    assert_eq!(run(&paths), 1);
    let record = fs::read_to_string(&paths.error).unwrap();
    assert!(record.starts_with("Runtime Error:"));
    assert!(record.contains("abc"));
    assert!(!paths.output.exists());
}

#[test]
fn test_empty_input_writes_error_only() {
    let (_dir, paths) = scratch("");

    assert_eq!(run(&paths), 1);
    assert!(!fs::read_to_string(&paths.error).unwrap().is_empty());
    assert!(!paths.output.exists());
}

#[test]
fn test_count_mismatch_leaves_previous_output_untouched() {
    let (_dir, paths) = scratch("4\n1 2 3");
    fs::write(&paths.output, "stale").unwrap();

    assert_eq!(run(&paths), 1);
    assert_eq!(fs::read_to_string(&paths.output).unwrap(), "stale");
    assert!(
        fs::read_to_string(&paths.error)
            .unwrap()
            .starts_with("Runtime Error: unexpected end of input")
    );
}

fn judged(input: &str, expected: Option<&str>) -> (TempDir, HarnessPaths, RunOutcome) {
    let (dir, paths) = scratch(input);
    if let Some(expected) = expected {
        fs::write(&paths.expected, expected).unwrap();
    }
    let outcome = Harness::new(paths.clone(), BinarySearch).execute();
    (dir, paths, outcome)
}

#[test]
fn test_matching_expected_output_is_accepted() {
    let (_dir, paths, outcome) = judged("5\n1 3 5 7 9\n7", Some("3\n"));

    assert_eq!(outcome.exit_code(), 0);
    assert!(matches!(outcome, RunOutcome::Success { verdict: Some(Verdict::Accepted), .. }));
    assert_eq!(fs::read_to_string(&paths.output).unwrap(), "3");
}

#[test]
fn test_mismatched_expected_output_is_wrong_answer_with_exit_zero() {
    let (_dir, paths, outcome) = judged("5\n1 3 5 7 9\n7", Some("2"));

    assert_eq!(outcome.exit_code(), 0);
    assert!(matches!(outcome, RunOutcome::Success { verdict: Some(Verdict::WrongAnswer), .. }));
    assert_eq!(fs::read_to_string(&paths.output).unwrap(), "3");
    assert!(!paths.error.exists());
}

#[test]
fn test_no_expected_output_means_no_verdict() {
    let (_dir, _paths, outcome) = judged("3\n1 2 3\n10", None);

    assert!(matches!(outcome, RunOutcome::Success { verdict: None, .. }));
}

/// Prints a partial answer, then indexes out of bounds
struct Crashes;

impl Solution for Crashes {
    fn name(&self) -> &'static str {
        "crashes"
    }

    fn solve(&self, _input: &mut dyn BufRead, output: &mut dyn Write) -> Result<(), SolutionError> {
        write!(output, "partial")?;
        let values: Vec<i64> = vec![1, 2, 3];
        let index = values.len() + 1;
        write!(output, "{}", values[index])?;
        Ok(())
    }
}

#[test]
fn test_panicking_solution_is_a_runtime_error() {
    let (_dir, paths) = scratch("anything");

    let outcome = Harness::new(paths.clone(), Crashes).execute();

    assert_eq!(outcome.exit_code(), 1);
    assert!(matches!(outcome, RunOutcome::RuntimeError { .. }));
    let record = fs::read_to_string(&paths.error).unwrap();
    assert!(record.starts_with("Runtime Error: solution panicked:"));
    assert!(!paths.output.exists());
}
