//! End-to-end comparisons over the descriptor fixtures.

use std::{fs, path::PathBuf};

use pubdiff_adapters::{
    FileReportWriter, FilesystemDescriptorLoader, MemoryReportWriter, MemoryVariableSink,
    PropertiesFileSink,
};
use pubdiff_core::{application::ComparisonService, domain::ChangeKind};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn service() -> ComparisonService {
    ComparisonService::new(Box::new(FilesystemDescriptorLoader::new()))
}

#[test]
fn identical_fixture_has_no_differences() {
    let base = fixture("textile-base.toml");
    let report = service().compare(&base, &base).unwrap();
    assert!(report.is_empty());
}

#[test]
fn visibility_fixture_differences() {
    let report = service()
        .compare(
            &fixture("textile-base.toml"),
            &fixture("textile-visibility.toml"),
        )
        .unwrap();

    assert_eq!(report.baseline, "Textile-base");
    assert_eq!(report.challenger, "Textile-visibility");
    assert_eq!(report.len(), 14);
    assert_eq!(report.removed_count(), 8);
    assert_eq!(report.added_count(), 6);

    let capitals: Vec<(ChangeKind, &str)> = report
        .differences
        .iter()
        .filter(|d| d.describe().starts_with("Textile.Blocks.CapitalsBlockModifier "))
        .map(|d| (d.change, d.member.name()))
        .collect();
    assert_eq!(
        capitals,
        vec![
            (ChangeKind::Removed, "Conclude"),
            (ChangeKind::Added, "CapitalsFormatMatchEvaluator"),
        ]
    );
}

#[test]
fn report_lines_reach_the_writer() {
    let service = service();
    let report = service
        .compare(
            &fixture("textile-base.toml"),
            &fixture("textile-visibility.toml"),
        )
        .unwrap();

    let writer = MemoryReportWriter::new();
    service.publish(&report, &writer).unwrap();

    let lines = writer.lines();
    assert!(writer.is_finished());
    assert_eq!(lines.len(), 14);
    assert!(lines.contains(&"Textile.FormatterStateAttribute Void set_Pattern(System.String)".to_string()));
    assert!(lines.contains(&"Textile.Blocks.HyperLinkBlockModifier System.String m_rel".to_string()));
}

#[test]
fn report_file_and_variables_file() {
    let temp = TempDir::new().unwrap();
    let report_path = temp.path().join("api-changes.txt");
    let vars_path = temp.path().join("build.properties");
    fs::write(&vars_path, "api.changes=99\n").unwrap();

    let service = service();
    let report = service
        .compare(
            &fixture("textile-visibility.toml"),
            &fixture("textile-base.toml"),
        )
        .unwrap();

    service
        .publish(&report, &FileReportWriter::create(&report_path).unwrap())
        .unwrap();
    service
        .assign_count(&report, "api.changes", &PropertiesFileSink::new(&vars_path))
        .unwrap();

    assert_eq!(fs::read_to_string(&report_path).unwrap().lines().count(), 14);
    assert_eq!(fs::read_to_string(&vars_path).unwrap(), "api.changes=14\n");
}

#[test]
fn count_is_zero_for_identical_builds() {
    let service = service();
    let base = fixture("textile-base.toml");
    let report = service.compare(&base, &base).unwrap();

    let sink = MemoryVariableSink::new();
    service.assign_count(&report, "changes", &sink).unwrap();
    assert_eq!(sink.get("changes").as_deref(), Some("0"));
}

#[test]
fn inspect_hides_internal_surface() {
    let listings = service()
        .inspect(&fixture("textile-base.toml"), None)
        .unwrap();

    let names: Vec<&str> = listings.iter().map(|l| l.full_name.as_str()).collect();
    assert!(!names.contains(&"Textile.Utilities"));

    let formatter = listings
        .iter()
        .find(|l| l.full_name == "Textile.TextileFormatter")
        .unwrap();
    assert_eq!(
        formatter.members,
        vec!["Textile.TextileFormatter Void Format(System.String)"]
    );
}
