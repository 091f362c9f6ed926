//! Comparison Service - main application orchestrator.
//!
//! Coordinates one comparison run:
//! 1. Load baseline and challenger descriptors
//! 2. Diff their visible surfaces
//! 3. Publish report lines and the difference count

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{DescriptorSource, ReportWriter, VariableSink},
    },
    domain::{
        AssemblyDescriptor, ChangeKind, Difference, Member, TypeDescriptor, compare_assemblies,
        visible_members, visible_types,
    },
    error::PubdiffResult,
};

/// Outcome of one comparison, in report order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonReport {
    pub baseline: String,
    pub challenger: String,
    pub differences: Vec<Difference>,
}

impl ComparisonReport {
    pub fn is_empty(&self) -> bool {
        self.differences.is_empty()
    }

    pub fn len(&self) -> usize {
        self.differences.len()
    }

    pub fn removed_count(&self) -> usize {
        self.count(ChangeKind::Removed)
    }

    pub fn added_count(&self) -> usize {
        self.count(ChangeKind::Added)
    }

    /// Report lines without change markers.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.differences.iter().map(Difference::describe)
    }

    fn count(&self, change: ChangeKind) -> usize {
        self.differences
            .iter()
            .filter(|d| d.change == change)
            .count()
    }
}

/// One visible type and its visible members, for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeListing {
    pub full_name: String,
    pub visibility: String,
    pub members: Vec<String>,
}

/// Main comparison service.
pub struct ComparisonService {
    source: Box<dyn DescriptorSource>,
}

impl ComparisonService {
    pub fn new(source: Box<dyn DescriptorSource>) -> Self {
        Self { source }
    }

    /// Load both descriptors and diff them.
    #[instrument(
        skip_all,
        fields(
            baseline = %baseline.display(),
            challenger = %challenger.display()
        )
    )]
    pub fn compare(&self, baseline: &Path, challenger: &Path) -> PubdiffResult<ComparisonReport> {
        debug!(path = %baseline.display(), "loading baseline descriptor");
        let baseline_assembly = self.source.load(baseline)?;

        debug!(path = %challenger.display(), "loading challenger descriptor");
        let challenger_assembly = self.source.load(challenger)?;

        Ok(Self::compare_loaded(&baseline_assembly, &challenger_assembly))
    }

    /// Diff two descriptors that are already in memory.
    pub fn compare_loaded(
        baseline: &AssemblyDescriptor,
        challenger: &AssemblyDescriptor,
    ) -> ComparisonReport {
        info!(
            baseline = %baseline.name,
            challenger = %challenger.name,
            "comparing"
        );

        let differences = compare_assemblies(baseline, challenger);
        for difference in &differences {
            debug!(change = %difference.change, line = %difference.describe(), "difference");
        }

        info!(
            differences = differences.len(),
            "Comparison completed"
        );

        ComparisonReport {
            baseline: baseline.name.clone(),
            challenger: challenger.name.clone(),
            differences,
        }
    }

    /// Write every report line, then finish the writer.
    pub fn publish(&self, report: &ComparisonReport, writer: &dyn ReportWriter) -> PubdiffResult<()> {
        for line in report.lines() {
            writer.write_line(&line)?;
        }
        writer.finish()
    }

    /// Assign the difference count to `name`.
    pub fn assign_count(
        &self,
        report: &ComparisonReport,
        name: &str,
        sink: &dyn VariableSink,
    ) -> PubdiffResult<()> {
        debug!(name, count = report.len(), "assigning difference count");
        sink.set(name, &report.len().to_string())
    }

    /// List the visible surface of one descriptor.
    ///
    /// With `type_name`, only that type (searched through nested types too)
    /// is listed.
    #[instrument(skip(self), fields(location = %location.display()))]
    pub fn inspect(
        &self,
        location: &Path,
        type_name: Option<&str>,
    ) -> PubdiffResult<Vec<TypeListing>> {
        let assembly = self.source.load(location)?;

        match type_name {
            Some(name) => {
                let ty = assembly
                    .find_type(name)
                    .ok_or_else(|| ApplicationError::TypeNotFound {
                        name: name.to_string(),
                    })?;
                Ok(vec![listing(ty)])
            }
            None => {
                let mut listings = Vec::new();
                for ty in visible_types(&assembly) {
                    collect_listings(ty, &mut listings);
                }
                Ok(listings)
            }
        }
    }
}

fn collect_listings(ty: &TypeDescriptor, out: &mut Vec<TypeListing>) {
    out.push(listing(ty));
    for member in visible_members(ty) {
        if let Member::Type(nested) = &member {
            collect_listings(nested, out);
        }
    }
}

fn listing(ty: &TypeDescriptor) -> TypeListing {
    TypeListing {
        full_name: ty.identity.full_name(),
        visibility: ty.visibility.to_string(),
        members: visible_members(ty)
            .iter()
            .filter(|m| !matches!(m, Member::Type(_)))
            .map(Member::describe)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::domain::{MethodDescriptor, TypeRef, Visibility};

    struct FixedSource {
        baseline: AssemblyDescriptor,
        challenger: AssemblyDescriptor,
    }

    impl DescriptorSource for FixedSource {
        fn load(&self, location: &Path) -> PubdiffResult<AssemblyDescriptor> {
            Ok(if location == Path::new("baseline") {
                self.baseline.clone()
            } else {
                self.challenger.clone()
            })
        }
    }

    #[derive(Default)]
    struct Lines(Mutex<Vec<String>>, Mutex<bool>);

    impl ReportWriter for Lines {
        fn write_line(&self, line: &str) -> PubdiffResult<()> {
            self.0.lock().unwrap().push(line.to_string());
            Ok(())
        }

        fn finish(&self) -> PubdiffResult<()> {
            *self.1.lock().unwrap() = true;
            Ok(())
        }
    }

    fn widget_assembly(extra: bool) -> AssemblyDescriptor {
        let widget = TypeRef::of("Acme.Widget");
        let mut ty = TypeDescriptor::new(widget.clone())
            .with_member(MethodDescriptor::new(&widget, "Spin"));
        if extra {
            ty = ty.with_member(
                MethodDescriptor::new(&widget, "Stop").visibility(Visibility::Protected),
            );
        }
        AssemblyDescriptor::new("Acme").with_type(ty)
    }

    fn service() -> ComparisonService {
        ComparisonService::new(Box::new(FixedSource {
            baseline: widget_assembly(false),
            challenger: widget_assembly(true),
        }))
    }

    #[test]
    fn compare_reports_added_member() {
        let report = service()
            .compare(Path::new("baseline"), Path::new("challenger"))
            .unwrap();
        assert_eq!(report.len(), 1);
        assert_eq!(report.added_count(), 1);
        assert_eq!(report.removed_count(), 0);
        assert_eq!(
            report.lines().collect::<Vec<_>>(),
            vec!["Acme.Widget Void Stop()"]
        );
    }

    #[test]
    fn publish_writes_lines_and_finishes() {
        let service = service();
        let report = service
            .compare(Path::new("baseline"), Path::new("challenger"))
            .unwrap();
        let writer = Lines::default();
        service.publish(&report, &writer).unwrap();
        assert_eq!(writer.0.lock().unwrap().len(), 1);
        assert!(*writer.1.lock().unwrap());
    }

    #[test]
    fn inspect_lists_visible_members() {
        let listings = service().inspect(Path::new("challenger"), None).unwrap();
        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].full_name, "Acme.Widget");
        assert_eq!(listings[0].members.len(), 2);
    }

    #[test]
    fn inspect_unknown_type_is_not_found() {
        let err = service()
            .inspect(Path::new("baseline"), Some("Acme.Missing"))
            .unwrap_err();
        assert_eq!(err.category(), crate::error::ErrorCategory::NotFound);
    }
}
