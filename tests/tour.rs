use language_tour::failures::FailureOutcome;
use language_tour::settings::DEFAULT_FILE_CONTENT;
use language_tour::{run_tour, TourError, TourSettings};
use tempfile::tempdir;

#[test]
fn test_full_tour_completes() {
    let dir = tempdir().unwrap();
    let settings = TourSettings::default().with_output_file(dir.path().join("output.txt"));

    let summary = run_tour(&settings);

    let lines = summary.file_lines.expect("file round trip succeeds");
    assert_eq!(lines.concat(), DEFAULT_FILE_CONTENT);
    assert!(matches!(
        summary.failure,
        FailureOutcome::OutOfBounds(TourError::IndexOutOfBounds { index: 5, len: 2 })
    ));
    assert_eq!(summary.collections.unique_numbers.len(), 3);
    assert_eq!(summary.collections.popped, Some(20));
    assert_eq!(summary.sum, 30.0);
}

#[test]
fn test_tour_survives_unwritable_output() {
    let dir = tempdir().unwrap();
    let settings =
        TourSettings::default().with_output_file(dir.path().join("missing").join("output.txt"));

    let summary = run_tour(&settings);

    assert!(summary.file_lines.is_none());
    assert_eq!(summary.sum, 30.0);
}
