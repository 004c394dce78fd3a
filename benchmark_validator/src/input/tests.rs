//!
//! Tests for the benchmark report input.
//!

use std::io::Write;

use crate::input::error::Error as InputError;
use crate::input::record::run_type::RunType;
use crate::input::record::time_unit::TimeUnit;
use crate::input::Report;

const GOOGLE_BENCHMARK_REPORT: &str = r#"
{
  "context": {
    "date": "2024-03-01T12:00:00+00:00",
    "host_name": "runner",
    "num_cpus": 4,
    "library_build_type": "release"
  },
  "benchmarks": [
    {
      "name": "BM_Channel/real_time",
      "family_index": 0,
      "run_name": "BM_Channel/real_time",
      "run_type": "iteration",
      "repetitions": 1,
      "iterations": 1000,
      "real_time": 1523.5,
      "cpu_time": 1490.25,
      "time_unit": "ms"
    },
    {
      "name": "BM_Channel/real_time_mean",
      "run_type": "aggregate",
      "aggregate_name": "mean",
      "real_time": 1523.5,
      "cpu_time": 1490.25,
      "time_unit": "ms"
    },
    {
      "name": "BM_Channel/real_time_cv",
      "run_type": "aggregate",
      "aggregate_name": "cv",
      "aggregate_unit": "percentage"
    },
    {
      "name": "BM_Unbuffered",
      "run_type": "iteration",
      "real_time": 12,
      "cpu_time": 11,
      "time_unit": "us"
    }
  ]
}
"#;

fn write_temporary(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("Temporary file creation failed");
    file.write_all(contents.as_bytes())
        .expect("Temporary file writing failed");
    file
}

#[test]
fn parses_google_benchmark_report() {
    let report: Report =
        serde_json::from_str(GOOGLE_BENCHMARK_REPORT).expect("Failed to parse the report");

    assert_eq!(report.benchmarks.len(), 4);

    let first = &report.benchmarks[0];
    assert_eq!(first.name.as_deref(), Some("BM_Channel/real_time"));
    assert_eq!(first.run_type, Some(RunType::Iteration));
    assert_eq!(first.real_time, Some(1523.5));
    assert_eq!(first.cpu_time, Some(1490.25));
    assert_eq!(first.time_unit, Some(TimeUnit::Milliseconds));

    let cv = &report.benchmarks[2];
    assert_eq!(cv.run_type, Some(RunType::Aggregate));
    assert_eq!(cv.real_time, None);
}

#[test]
fn unknown_run_type_is_not_an_iteration() {
    let report: Report = serde_json::from_str(
        r#"{"benchmarks":[{"run_type":"other","real_time":9000,"cpu_time":90},{"real_time":1}]}"#,
    )
    .expect("Failed to parse the report");

    assert_eq!(report.benchmarks[0].run_type, Some(RunType::Other));
    assert_eq!(report.benchmarks[1].run_type, None);
    assert!(report.benchmarks.iter().all(|record| !record.is_iteration()));
}

#[test]
fn label_falls_back_to_index() {
    let report: Report = serde_json::from_str(
        r#"{"benchmarks":[{"name":"BM_Named"},{"run_type":"iteration"}]}"#,
    )
    .expect("Failed to parse the report");

    assert_eq!(report.benchmarks[0].label(0), "BM_Named");
    assert_eq!(report.benchmarks[1].label(1), "#1");
}

#[test]
fn loads_from_file() {
    let file = write_temporary(GOOGLE_BENCHMARK_REPORT);

    let report = Report::load(file.path()).expect("Failed to load the report");
    assert_eq!(report.benchmarks.len(), 4);
}

#[test]
fn missing_file_is_a_reading_error() {
    let directory = tempfile::tempdir().expect("Temporary directory creation failed");
    let path = directory.path().join("absent.json");

    let error = Report::load(path.as_path()).expect_err("Loading must fail");
    assert!(matches!(error, InputError::Reading { .. }));
    assert!(error.to_string().contains("absent.json"));
}

#[test]
fn empty_file_is_rejected() {
    let file = write_temporary("  \n");

    let error = Report::load(file.path()).expect_err("Loading must fail");
    assert!(matches!(error, InputError::EmptyFile { .. }));
}

#[test]
fn malformed_json_is_a_parsing_error() {
    let file = write_temporary(r#"{"benchmarks": [ {"run_type": "iteration", "#);

    let error = Report::load(file.path()).expect_err("Loading must fail");
    assert!(matches!(error, InputError::Parsing { .. }));
    assert!(error
        .to_string()
        .contains("is not a valid benchmark report"));
}

#[test]
fn missing_benchmarks_key_is_a_parsing_error() {
    let file = write_temporary(r#"{"context": {}}"#);

    let error = Report::load(file.path()).expect_err("Loading must fail");
    match error {
        InputError::Parsing { error, .. } => {
            assert!(error.to_string().contains("missing field `benchmarks`"))
        }
        error => panic!("Unexpected error: {error}"),
    }
}

#[test]
fn non_numeric_timing_is_a_parsing_error() {
    let file = write_temporary(
        r#"{"benchmarks":[{"run_type":"iteration","real_time":"fast","cpu_time":90}]}"#,
    );

    let error = Report::load(file.path()).expect_err("Loading must fail");
    assert!(matches!(error, InputError::Parsing { .. }));
}
