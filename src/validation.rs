//! Bundle self-test: every catalog entry must resolve
//!
//! Validation visits every entry and collects all failures instead of
//! stopping at the first, so a broken bundle is diagnosed in one run.

use crate::catalog::{Catalog, Suite};
use crate::log_messages::validation as messages;
use crate::{Error, Result};
use serde::Serialize;
use tracing::{error, info, instrument};

/// A catalog entry whose resource could not be located
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingTrace {
    pub id: &'static str,
    pub expected_at: String,
}

/// Outcome of validating one suite
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub suite: Suite,
    pub checked: usize,
    pub missing: Vec<MissingTrace>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn resolved(&self) -> usize {
        self.checked - self.missing.len()
    }

    /// Collapse the report into an error when anything is missing.
    pub fn into_result(self) -> Result<()> {
        if self.is_ok() {
            Ok(())
        } else {
            Err(Error::MissingTraces {
                suite: self.suite,
                count: self.missing.len(),
            })
        }
    }
}

/// Resolve every entry of `catalog`, recording each one that is missing.
#[instrument(skip(catalog), fields(suite = %catalog.suite()))]
pub fn validate(catalog: &Catalog) -> ValidationReport {
    info!("{}", messages::STARTED);

    let mut report = ValidationReport {
        suite: catalog.suite(),
        checked: 0,
        missing: Vec::new(),
    };

    for entry in catalog.list_all() {
        report.checked += 1;
        // Entries come from the catalog itself, so only absence can fail here.
        if let Err(Error::ResourceNotFound { trace, path, .. }) = catalog.resolve(entry) {
            report.missing.push(MissingTrace {
                id: trace,
                expected_at: path,
            });
        }
    }

    if report.is_ok() {
        info!(checked = report.checked, "{}", messages::SUITE_COMPLETE);
    } else {
        error!(
            checked = report.checked,
            missing = report.missing.len(),
            "{}",
            messages::SUITE_INCOMPLETE
        );
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FtraceTestTrace;
    use crate::resource::{FsLocator, TraceRoot};
    use std::fs;
    use std::path::Path;

    fn ftrace_catalog(dir: &Path) -> Catalog {
        let root = TraceRoot::try_new(dir.display().to_string()).unwrap();
        Catalog::new(Suite::Ftrace, FsLocator::new(root))
    }

    #[test]
    fn test_reports_every_missing_trace() {
        let dir = tempfile::tempdir().unwrap();
        let report = validate(&ftrace_catalog(dir.path()));

        assert_eq!(report.checked, FtraceTestTrace::ALL.len());
        assert_eq!(report.missing.len(), FtraceTestTrace::ALL.len());
        assert_eq!(report.resolved(), 0);
        let ids: Vec<_> = report.missing.iter().map(|m| m.id).collect();
        let expected: Vec<_> = FtraceTestTrace::ALL.iter().map(|t| t.id()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_partial_bundle() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("ftrace/2.6")).unwrap();
        for trace in &FtraceTestTrace::ALL[1..] {
            let relative = trace.path().trim_start_matches('/');
            fs::write(dir.path().join("ftrace").join(relative), b"").unwrap();
        }

        let report = validate(&ftrace_catalog(dir.path()));
        assert!(!report.is_ok());
        assert_eq!(report.missing.len(), 1);
        assert_eq!(report.missing[0].id, "TEST_2_6_MULTIPLE_CPUS");
        assert!(report.missing[0].expected_at.ends_with("trace_4cpu.dat"));

        match report.into_result() {
            Err(Error::MissingTraces { suite, count }) => {
                assert_eq!(suite, Suite::Ftrace);
                assert_eq!(count, 1);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_complete_bundle() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("ftrace/2.6")).unwrap();
        for trace in FtraceTestTrace::ALL {
            let relative = trace.path().trim_start_matches('/');
            fs::write(dir.path().join("ftrace").join(relative), b"").unwrap();
        }

        let report = validate(&ftrace_catalog(dir.path()));
        assert!(report.is_ok());
        assert_eq!(report.resolved(), FtraceTestTrace::ALL.len());
        assert!(report.into_result().is_ok());
    }
}
