//! Log message constants
//!
//! This module centralizes the log messages emitted by the catalog and the
//! `test-traces` binary so wording stays consistent across call sites.

/// Trace resolution messages
pub mod resolution {
    pub const RESOLVED: &str = "Resolved test trace";
    pub const NOT_FOUND: &str = "Test trace not found; the trace bundle is incomplete";
}

/// Bundle validation messages
pub mod validation {
    pub const STARTED: &str = "Validating test trace bundle";
    pub const SUITE_COMPLETE: &str = "Test trace suite fully resolvable";
    pub const SUITE_INCOMPLETE: &str = "Test trace suite has missing traces";
}

/// Configuration messages
pub mod configuration {
    pub const CONFIG_LOADED: &str = "Configuration loaded successfully";
}
