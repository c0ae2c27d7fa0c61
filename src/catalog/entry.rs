//! Catalog entry type and the definition-time checks run over each table

use serde::Serialize;

/// Whether an entry names one trace or a directory of many
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceKind {
    /// One trace, openable on its own
    Single,
    /// A set of traces; do not hand the location to a single-trace reader
    Collection,
}

/// Descriptor of one bundled test trace
///
/// `event_count` and `duration_secs` are advisory expectations for test
/// assertions. `None` means the value does not apply: the entry is a
/// collection, or the trace is intentionally unparsable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TraceEntry {
    pub id: &'static str,
    pub path: &'static str,
    pub event_count: Option<u32>,
    pub duration_secs: Option<u32>,
    pub tracer: Option<&'static str>,
    pub kind: TraceKind,
    pub deprecation: Option<&'static str>,
}

impl TraceEntry {
    /// A single trace with known event count and duration.
    pub const fn single(id: &'static str, path: &'static str, events: u32, secs: u32) -> Self {
        Self {
            id,
            path,
            event_count: Some(events),
            duration_secs: Some(secs),
            tracer: None,
            kind: TraceKind::Single,
            deprecation: None,
        }
    }

    /// A set of traces under one path; metadata does not apply.
    pub const fn collection(id: &'static str, path: &'static str) -> Self {
        Self {
            id,
            path,
            event_count: None,
            duration_secs: None,
            tracer: None,
            kind: TraceKind::Collection,
            deprecation: None,
        }
    }

    /// A single trace whose contents are deliberately broken; metadata does not apply.
    pub const fn unparsable(id: &'static str, path: &'static str) -> Self {
        Self {
            event_count: None,
            duration_secs: None,
            ..Self::single(id, path, 0, 0)
        }
    }

    pub const fn traced_by(self, tracer: &'static str) -> Self {
        Self {
            tracer: Some(tracer),
            ..self
        }
    }

    pub const fn deprecated(self, note: &'static str) -> Self {
        Self {
            deprecation: Some(note),
            ..self
        }
    }

    pub const fn is_collection(&self) -> bool {
        matches!(self.kind, TraceKind::Collection)
    }

    pub const fn is_deprecated(&self) -> bool {
        self.deprecation.is_some()
    }
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Compile-time validation of a suite table.
///
/// Evaluated in a `const` item, so a violation fails the build.
pub const fn check_table(table: &[TraceEntry]) {
    let mut i = 0;
    while i < table.len() {
        let entry = &table[i];
        assert!(!entry.id.is_empty(), "test trace id must not be empty");
        assert!(
            !entry.path.is_empty() && entry.path.as_bytes()[0] == b'/',
            "test trace path must start with '/'"
        );
        let mut j = i + 1;
        while j < table.len() {
            assert!(
                !str_eq(entry.id, table[j].id),
                "duplicate test trace id"
            );
            assert!(
                !str_eq(entry.path, table[j].path),
                "duplicate test trace path"
            );
            j += 1;
        }
        i += 1;
    }
}
