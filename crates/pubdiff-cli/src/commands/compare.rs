//! `pubdiff compare`: diff a baseline build against a challenger build.

use std::path::PathBuf;

use serde_json::json;
use tracing::{debug, info};

use pubdiff_adapters::{FileReportWriter, PropertiesFileSink};
use pubdiff_core::application::{ComparisonReport, ComparisonService};

use crate::{
    cli::{CompareArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Settings after merging flags over the `[compare]` config section.
#[derive(Debug, Clone, PartialEq)]
struct CompareSettings {
    report: Option<PathBuf>,
    property: Option<String>,
    variables_file: Option<PathBuf>,
    fail_on_differences: bool,
}

impl CompareSettings {
    fn resolve(args: &CompareArgs, config: &AppConfig) -> Self {
        Self {
            report: args.report.clone(),
            property: args
                .property
                .clone()
                .or_else(|| config.compare.property.clone()),
            variables_file: args
                .variables_file
                .clone()
                .or_else(|| config.compare.variables_file.clone()),
            fail_on_differences: args.fail_on_differences || config.compare.fail_on_differences,
        }
    }
}

pub fn execute(args: CompareArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let settings = CompareSettings::resolve(&args, &config);
    debug!(?settings, "compare settings");

    let service = super::comparison_service();
    let report = service.compare(&args.baseline, &args.challenger)?;

    if let Some(path) = &settings.report {
        let writer = FileReportWriter::create(path)?;
        service.publish(&report, &writer)?;
        info!(path = %path.display(), "report written");
    }

    if let Some(name) = &settings.property {
        publish_count(&service, &report, name, settings.variables_file.as_ref(), &output)?;
    }

    render(&report, &output)?;

    if settings.fail_on_differences && !report.is_empty() {
        return Err(CliError::DifferencesFound {
            count: report.len(),
        });
    }

    Ok(())
}

fn publish_count(
    service: &ComparisonService,
    report: &ComparisonReport,
    name: &str,
    variables_file: Option<&PathBuf>,
    output: &OutputManager,
) -> CliResult<()> {
    match variables_file {
        Some(path) => {
            service.assign_count(report, name, &PropertiesFileSink::new(path))?;
            info!(name, path = %path.display(), "count stored");
        }
        // JSON output carries the count itself.
        None if output.format() == OutputFormat::Json => {}
        None => output.data(&format!("{name}={}", report.len()))?,
    }
    Ok(())
}

fn render(report: &ComparisonReport, output: &OutputManager) -> CliResult<()> {
    match output.format() {
        OutputFormat::Json => {
            let document = to_json(report);
            let text = serde_json::to_string_pretty(&document).map_err(|e| CliError::IoError {
                message: "serialising report".into(),
                source: e.into(),
            })?;
            output.data(&text)?;
        }
        OutputFormat::Plain => {
            for difference in &report.differences {
                output.print(&difference.to_string())?;
            }
        }
        OutputFormat::Human | OutputFormat::Auto => {
            output.header(&format!("{} -> {}", report.baseline, report.challenger))?;
            for difference in &report.differences {
                output.difference(difference)?;
            }
            if report.is_empty() {
                output.success("No public interface differences")?;
            } else {
                output.warning(&summary(report))?;
            }
        }
    }
    Ok(())
}

fn summary(report: &ComparisonReport) -> String {
    format!(
        "{} difference(s): {} removed, {} added",
        report.len(),
        report.removed_count(),
        report.added_count()
    )
}

fn to_json(report: &ComparisonReport) -> serde_json::Value {
    let differences: Vec<serde_json::Value> = report
        .differences
        .iter()
        .map(|d| {
            json!({
                "change": d.change.to_string(),
                "kind": d.member.kind().to_string(),
                "member": d.describe(),
            })
        })
        .collect();

    json!({
        "baseline": report.baseline,
        "challenger": report.challenger,
        "count": report.len(),
        "removed": report.removed_count(),
        "added": report.added_count(),
        "differences": differences,
    })
}

#[cfg(test)]
mod tests {
    use pubdiff_core::domain::{Difference, Member, MethodDescriptor, TypeRef};

    use super::*;

    fn args() -> CompareArgs {
        CompareArgs {
            baseline: PathBuf::from("v1.toml"),
            challenger: PathBuf::from("v2.toml"),
            report: None,
            property: None,
            variables_file: None,
            fail_on_differences: false,
        }
    }

    fn report() -> ComparisonReport {
        let widget = TypeRef::of("Acme.Widget");
        ComparisonReport {
            baseline: "v1".into(),
            challenger: "v2".into(),
            differences: vec![
                Difference::removed(Member::Method(MethodDescriptor::new(&widget, "Spin"))),
                Difference::added(Member::Method(MethodDescriptor::new(&widget, "Stop"))),
                Difference::added(Member::Method(MethodDescriptor::new(&widget, "Reset"))),
            ],
        }
    }

    #[test]
    fn flags_win_over_config() {
        let mut config = AppConfig::default();
        config.compare.property = Some("from.config".into());

        let mut a = args();
        a.property = Some("from.flag".into());

        let settings = CompareSettings::resolve(&a, &config);
        assert_eq!(settings.property.as_deref(), Some("from.flag"));
    }

    #[test]
    fn config_fills_missing_flags() {
        let mut config = AppConfig::default();
        config.compare.fail_on_differences = true;
        config.compare.property = Some("api.changes".into());

        let settings = CompareSettings::resolve(&args(), &config);
        assert!(settings.fail_on_differences);
        assert_eq!(settings.property.as_deref(), Some("api.changes"));
        assert!(settings.report.is_none());
    }

    #[test]
    fn summary_counts_both_sides() {
        assert_eq!(summary(&report()), "3 difference(s): 1 removed, 2 added");
    }

    #[test]
    fn json_document_shape() {
        let value = to_json(&report());
        assert_eq!(value["count"], 3);
        assert_eq!(value["removed"], 1);
        assert_eq!(value["added"], 2);
        assert_eq!(value["differences"].as_array().unwrap().len(), 3);
        assert_eq!(
            value["differences"][0]["member"],
            report().differences[0].describe()
        );
    }
}
