//! Test Traces - bundled CTF and Ftrace test traces for trace-analysis test suites
//!
//! Each suite is a fixed catalog of named traces with the event count and
//! duration a parser is expected to find in them. The catalog only locates
//! traces; reading them is left to the parser under test.
//!
//! ```no_run
//! use test_traces::CtfTestTrace;
//!
//! let kernel = CtfTestTrace::Kernel;
//! let location = kernel.resolve()?;
//! assert_eq!(kernel.event_count(), Some(695_319));
//! # let _ = location;
//! # Ok::<(), test_traces::Error>(())
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod log_messages;
pub mod resource;
pub mod validation;

pub use catalog::{Catalog, CtfTestTrace, FtraceTestTrace, Suite, TraceEntry, TraceKind};
pub use error::{Error, Result};
pub use resource::{FsLocator, ResourceHandle, ResourceLocator, TraceRoot};
pub use validation::{validate, MissingTrace, ValidationReport};
