//! Resource location for bundled test traces
//!
//! Catalog entries only carry logical paths such as `/kernel` or
//! `/2.6/trace_4cpu.dat`. Turning one into something a parser can open is the
//! job of a [`ResourceLocator`]; the catalog translates an absent result into
//! [`crate::Error::ResourceNotFound`].

use nutype::nutype;
use std::fmt;
use std::path::{Path, PathBuf};

/// Base directory under which each suite's namespace lives
#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        Hash,
        Serialize,
        Deserialize,
        AsRef,
        Display
    )
)]
pub struct TraceRoot(String);

impl TraceRoot {
    pub fn as_str(&self) -> &str {
        self.as_ref()
    }

    pub fn as_path(&self) -> &Path {
        Path::new(self.as_str())
    }
}

/// A located test trace, ready to be opened by a trace reader
///
/// CTF traces resolve to directories, Ftrace traces to single files. The
/// handle is only a location: nothing has been read yet.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceHandle {
    path: PathBuf,
}

impl ResourceHandle {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_dir(&self) -> bool {
        self.path.is_dir()
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.path
    }
}

impl AsRef<Path> for ResourceHandle {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for ResourceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}

/// Host mechanism for finding a trace's bytes
pub trait ResourceLocator: Send + Sync {
    /// Where `logical_path` within `namespace` would live, whether or not it exists.
    fn expected_location(&self, namespace: &str, logical_path: &str) -> PathBuf;

    /// Locate `logical_path` within `namespace`, or `None` when absent.
    fn locate(&self, namespace: &str, logical_path: &str) -> Option<ResourceHandle>;
}

/// Filesystem-backed locator: `<root>/<namespace>/<logical path>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsLocator {
    root: TraceRoot,
}

impl FsLocator {
    pub fn new(root: TraceRoot) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &TraceRoot {
        &self.root
    }
}

impl ResourceLocator for FsLocator {
    fn expected_location(&self, namespace: &str, logical_path: &str) -> PathBuf {
        // Logical paths are absolute within the namespace; joining an absolute
        // path would discard the root.
        let relative = logical_path.trim_start_matches('/');
        self.root.as_path().join(namespace).join(relative)
    }

    fn locate(&self, namespace: &str, logical_path: &str) -> Option<ResourceHandle> {
        let path = self.expected_location(namespace, logical_path);
        path.exists().then(|| ResourceHandle::new(path))
    }
}
