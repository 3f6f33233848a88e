mod common;

use common::{sample_path, ScratchFile};
use spmat::{cli, Outcome, OutputFormat, ReadConfig};

fn run_samples(action: &str, format: OutputFormat) -> Outcome {
    cli::run(
        action,
        &sample_path("easy_sample_01_2.txt"),
        &sample_path("easy_sample_01_3.txt"),
        &ReadConfig::default(),
        format,
    )
}

fn lines(expected: &[&str]) -> Outcome {
    Outcome::Matrix(expected.iter().map(|s| s.to_string()).collect())
}

#[test]
fn test_add_samples() {
    assert_eq!(
        run_samples("add", OutputFormat::Grid),
        lines(&[
            "(0, 0, 0) (0, 1, 0) (0, 2, -1)",
            "(1, 0, 0) (1, 1, 7) (1, 2, 2)",
            "(2, 0, 8) (2, 1, 0) (2, 2, 1)",
        ])
    );
}

#[test]
fn test_subtract_samples() {
    assert_eq!(
        run_samples("Subtract", OutputFormat::Grid),
        lines(&[
            "(0, 0, 8) (0, 1, 0) (0, 2, -1)",
            "(1, 0, 0) (1, 1, 7) (1, 2, -2)",
            "(2, 0, -2) (2, 1, 0) (2, 2, -1)",
        ])
    );
}

#[test]
fn test_multiply_samples() {
    assert_eq!(
        run_samples("MULTIPLY", OutputFormat::Text),
        lines(&["rows=3", "cols=3", "(0,0,-21)", "(0,2,-1)", "(1,2,14)", "(2,0,-12)"])
    );
}

#[test]
fn test_invalid_action() {
    let outcome = run_samples("divide", OutputFormat::Grid);
    assert_eq!(outcome, Outcome::InvalidAction);
    assert_eq!(outcome.lines(), vec!["Invalid action"]);
}

#[test]
fn test_missing_file_is_reported() {
    let missing = ScratchFile::empty("cli-missing.txt");
    let outcome = cli::run(
        "add",
        missing.path(),
        &sample_path("easy_sample_01_3.txt"),
        &ReadConfig::default(),
        OutputFormat::Grid,
    );
    assert_eq!(
        outcome,
        Outcome::Failed(format!(
            "Error: The file {} was not found.",
            missing.path().display()
        ))
    );
}

#[test]
fn test_dimension_mismatch_is_reported() {
    let wide = ScratchFile::with_contents("cli-wide.txt", "rows=1\ncols=4\n(0,3,1)\n");
    let outcome = cli::run(
        "multiply",
        wide.path(),
        &sample_path("easy_sample_01_3.txt"),
        &ReadConfig::default(),
        OutputFormat::Grid,
    );
    match outcome {
        Outcome::Failed(message) => {
            assert!(message.starts_with("Error: The number of columns"), "{message}")
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[test]
fn test_parse_error_is_reported() {
    let broken = ScratchFile::with_contents("cli-broken.txt", "rows=2\ncols=2\n(0,zero,1)\n");
    let outcome = cli::run(
        "add",
        broken.path(),
        broken.path(),
        &ReadConfig::default(),
        OutputFormat::Grid,
    );
    assert_eq!(
        outcome,
        Outcome::Failed(
            "Error: Error parsing line 3 '(0,zero,1)': invalid integer 'zero'".to_string()
        )
    );
}

#[cfg(feature = "serde")]
#[test]
fn test_json_output() {
    let Outcome::Matrix(lines) = run_samples("add", OutputFormat::Json) else {
        panic!("expected a matrix");
    };
    let decoded: spmat::SparseMatrix = spmat::json::from_str(&lines.join("\n")).unwrap();
    assert_eq!(decoded.nnz(), 5);
    assert_eq!(decoded.get(2, 0), Ok(8));
}
