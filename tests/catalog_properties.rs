//! Property-based tests for catalog invariants
//!
//! These check lookup and resolution behaviour over arbitrary entries and
//! arbitrary (mostly unknown) identifiers.

use proptest::prelude::*;
use test_traces::config::BUNDLED_TRACE_ROOT;
use test_traces::{Catalog, CtfTestTrace, Error, FsLocator, FtraceTestTrace, Suite, TraceRoot};

fn bundled(suite: Suite) -> Catalog {
    let root = TraceRoot::try_new(BUNDLED_TRACE_ROOT.to_string()).unwrap();
    Catalog::new(suite, FsLocator::new(root))
}

pub mod generators {
    use super::*;

    pub fn suite() -> impl Strategy<Value = Suite> {
        prop_oneof![Just(Suite::Ctf), Just(Suite::Ftrace)]
    }

    pub fn ctf_trace() -> impl Strategy<Value = CtfTestTrace> {
        proptest::sample::select(CtfTestTrace::ALL)
    }

    pub fn ftrace_trace() -> impl Strategy<Value = FtraceTestTrace> {
        proptest::sample::select(FtraceTestTrace::ALL)
    }

    /// Identifiers shaped like catalog ids
    pub fn trace_id() -> impl Strategy<Value = String> {
        "[A-Z][A-Z0-9_]{0,40}"
    }
}

proptest! {
    #[test]
    fn resolution_is_idempotent(trace in generators::ctf_trace()) {
        let catalog = bundled(Suite::Ctf);
        let first = trace.resolve_with(&catalog).unwrap();
        let second = trace.resolve_with(&catalog).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn lookup_by_id_round_trips(trace in generators::ftrace_trace()) {
        let catalog = bundled(Suite::Ftrace);
        let entry = catalog.get(trace.id()).unwrap();
        prop_assert_eq!(entry, trace.entry());
        prop_assert_eq!(trace.id().parse::<FtraceTestTrace>().unwrap(), trace);
    }

    #[test]
    fn unknown_ids_are_never_found(suite in generators::suite(), id in generators::trace_id()) {
        let known = suite.entries().iter().any(|entry| entry.id == id);
        prop_assert_eq!(bundled(suite).get(&id).is_some(), known);
        if !known && suite == Suite::Ctf {
            let is_unknown_trace = matches!(
                id.parse::<CtfTestTrace>(),
                Err(Error::UnknownTrace { .. })
            );
            prop_assert!(is_unknown_trace);
        }
    }

    #[test]
    fn empty_root_resolves_nothing(trace in generators::ctf_trace()) {
        let dir = tempfile::tempdir().unwrap();
        let root = TraceRoot::try_new(dir.path().display().to_string()).unwrap();
        let catalog = Catalog::new(Suite::Ctf, FsLocator::new(root));
        let is_not_found = matches!(
            trace.resolve_with(&catalog),
            Err(Error::ResourceNotFound { trace: id, .. }) if id == trace.id()
        );
        prop_assert!(is_not_found);
    }

    #[test]
    fn metadata_is_absent_only_for_collections_or_unparsable_traces(
        suite in generators::suite(),
        index in any::<prop::sample::Index>(),
    ) {
        let entry = index.get(suite.entries());
        if entry.event_count.is_none() || entry.duration_secs.is_none() {
            prop_assert!(
                entry.is_collection()
                    || entry.id == FtraceTestTrace::Test26Invalid.id()
            );
        }
    }
}
