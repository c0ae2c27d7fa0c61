use crate::catalog::Suite;
use thiserror::Error;

/// Test trace catalog error types
#[derive(Error, Debug)]
pub enum Error {
    /// The bundled resource behind a catalog entry could not be located.
    ///
    /// This is a packaging defect: the trace bundle was not deployed next to
    /// the code. Callers must not retry or substitute a default.
    #[error("Test trace not found: {suite}/{trace} (expected at {path})")]
    ResourceNotFound {
        suite: Suite,
        trace: &'static str,
        path: String,
    },

    #[error("{count} {suite} test trace(s) missing from the bundle")]
    MissingTraces { suite: Suite, count: usize },

    #[error("Unknown {suite} test trace: {id}")]
    UnknownTrace { suite: Suite, id: String },

    #[error("Unknown trace suite: {0}")]
    UnknownSuite(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    pub fn unknown_trace(suite: Suite, id: impl Into<String>) -> Self {
        Self::UnknownTrace {
            suite,
            id: id.into(),
        }
    }

    /// Whether the error signals a broken fixture bundle rather than bad input.
    pub fn is_packaging_defect(&self) -> bool {
        matches!(
            self,
            Self::ResourceNotFound { .. } | Self::MissingTraces { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_not_found_names_the_trace() {
        let err = Error::ResourceNotFound {
            suite: Suite::Ctf,
            trace: "KERNEL",
            path: "/nowhere/ctf/kernel".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("ctf/KERNEL"));
        assert!(message.contains("/nowhere/ctf/kernel"));
        assert!(err.is_packaging_defect());
    }

    #[test]
    fn test_unknown_trace_is_not_a_packaging_defect() {
        let err = Error::unknown_trace(Suite::Ftrace, "NOPE");
        assert_eq!(err.to_string(), "Unknown ftrace test trace: NOPE");
        assert!(!err.is_packaging_defect());
    }
}
