//! Artifact existence checks against fake build trees

mod test_fixtures;

use esp_merge::merge::{check_artifacts, require_all};
use esp_merge::models::default_artifacts;
use esp_merge::ui::report;
use esp_merge::MergeError;
use std::path::PathBuf;
use test_fixtures::{ARTIFACTS, TestProject};

#[test]
fn test_all_artifacts_present() {
    let project = TestProject::with_all_artifacts().unwrap();
    let report = check_artifacts(&project.build_dir(), &default_artifacts());

    assert!(report.all_present());
    assert_eq!(report.entries.len(), 5);
    assert!(report.entries.iter().all(|entry| entry.present));
    assert!(report.missing().is_empty());
    assert!(require_all(&report).is_ok());

    let checklist = report::format_checklist(&report);
    assert_eq!(checklist.lines().count(), 5);
    assert!(checklist.lines().all(|line| line.contains("✅")));
}

#[test]
fn test_missing_subset_listed_exactly() {
    let project = TestProject::new().unwrap();
    // Leave out the OTA data and the speech models
    for artifact in [ARTIFACTS[0], ARTIFACTS[1], ARTIFACTS[4]] {
        project.write_artifact(artifact, 64).unwrap();
    }

    let report = check_artifacts(&project.build_dir(), &default_artifacts());
    assert!(!report.all_present());
    assert_eq!(report.missing_count(), 2);

    let missing: Vec<PathBuf> = report.missing().iter().map(|p| p.to_path_buf()).collect();
    assert_eq!(
        missing,
        vec![
            project.build_dir().join("ota_data_initial.bin"),
            project.build_dir().join("srmodels/srmodels.bin"),
        ]
    );

    match require_all(&report) {
        Err(MergeError::MissingInputFiles(files)) => assert_eq!(files, missing),
        other => panic!("Expected MissingInputFiles, got: {:?}", other),
    }
}

#[test]
fn test_missing_report_text() {
    let project = TestProject::new().unwrap();
    project.write_artifact(ARTIFACTS[0], 64).unwrap();

    let report = check_artifacts(&project.build_dir(), &default_artifacts());
    let missing: Vec<PathBuf> = report.missing().iter().map(|p| p.to_path_buf()).collect();
    let text = report::format_missing(&missing);

    assert!(text.starts_with("❌ Error: 4 files missing!"));
    assert!(text.contains("xiaozhi.bin"));
    assert!(!text.contains("bootloader.bin"));
    assert!(text.ends_with("Please run 'idf.py build' first"));
}
