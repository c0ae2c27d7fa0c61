//! The test trace catalogs
//!
//! Each suite is a fixed, ordered table of [`TraceEntry`] values plus an enum
//! naming every entry. Both are generated by [`trace_suite!`] from a single
//! declaration, so the enum and the table cannot drift apart, and the table is
//! checked for duplicate ids and malformed paths while compiling.
//!
//! Resolution goes through a [`Catalog`], which pairs a suite with a
//! [`ResourceLocator`].

mod entry;

pub mod ctf;
pub mod ftrace;

pub use ctf::{CtfTestTrace, CTF_TRACES};
pub use entry::{check_table, TraceEntry, TraceKind};
pub use ftrace::{FtraceTestTrace, FTRACE_TRACES};

use crate::config::Settings;
use crate::log_messages::resolution;
use crate::resource::{FsLocator, ResourceHandle, ResourceLocator};
use crate::{Error, Result};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, error};

/// Declares a suite enum and its entry table.
///
/// Variants are listed as `Variant => entry_expr,` where `entry_expr` is a
/// `const` [`TraceEntry`] expression. Declaration order is catalog order.
macro_rules! trace_suite {
    (
        $(#[$meta:meta])*
        pub enum $name:ident in $suite:ident => $table:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $entry:expr,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        /// Entry table, in declaration order.
        pub const $table: &[$crate::catalog::TraceEntry] = &[$($entry,)+];

        const _: () = $crate::catalog::check_table($table);

        impl $name {
            /// Every trace in the suite, in catalog order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            pub const SUITE: $crate::catalog::Suite = $crate::catalog::Suite::$suite;

            pub const fn entry(self) -> &'static $crate::catalog::TraceEntry {
                &$table[self as usize]
            }

            pub const fn id(self) -> &'static str {
                self.entry().id
            }

            pub const fn path(self) -> &'static str {
                self.entry().path
            }

            /// Expected number of events, `None` when irrelevant.
            pub const fn event_count(self) -> Option<u32> {
                self.entry().event_count
            }

            /// Expected duration in whole seconds, `None` when irrelevant.
            pub const fn duration_secs(self) -> Option<u32> {
                self.entry().duration_secs
            }

            /// Locate the trace using the process configuration.
            pub fn resolve(self) -> $crate::Result<$crate::resource::ResourceHandle> {
                let settings = $crate::config::Settings::shared()?;
                self.resolve_with(&$crate::catalog::Catalog::from_settings(
                    Self::SUITE,
                    settings,
                ))
            }

            pub fn resolve_with(
                self,
                catalog: &$crate::catalog::Catalog,
            ) -> $crate::Result<$crate::resource::ResourceHandle> {
                catalog.resolve(self.entry())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::Error;

            fn from_str(id: &str) -> $crate::Result<Self> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|trace| trace.id() == id)
                    .ok_or_else(|| $crate::Error::unknown_trace(Self::SUITE, id))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.id())
            }
        }
    };
}

pub(crate) use trace_suite;

/// A family of test traces sharing one resource namespace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suite {
    #[display("ctf")]
    Ctf,
    #[display("ftrace")]
    Ftrace,
}

impl Suite {
    pub const ALL: [Self; 2] = [Self::Ctf, Self::Ftrace];

    /// Directory under the trace root holding this suite's resources.
    pub const fn namespace(self) -> &'static str {
        match self {
            Self::Ctf => "ctf",
            Self::Ftrace => "ftrace",
        }
    }

    pub const fn entries(self) -> &'static [TraceEntry] {
        match self {
            Self::Ctf => CTF_TRACES,
            Self::Ftrace => FTRACE_TRACES,
        }
    }
}

impl FromStr for Suite {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|suite| suite.namespace().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownSuite(s.to_string()))
    }
}

/// One suite bound to a resource locator
#[derive(Clone)]
pub struct Catalog {
    suite: Suite,
    locator: Arc<dyn ResourceLocator>,
}

impl std::fmt::Debug for Catalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Catalog")
            .field("suite", &self.suite)
            .finish_non_exhaustive()
    }
}

impl Catalog {
    pub fn new(suite: Suite, locator: impl ResourceLocator + 'static) -> Self {
        Self {
            suite,
            locator: Arc::new(locator),
        }
    }

    pub fn from_settings(suite: Suite, settings: &Settings) -> Self {
        Self::new(suite, FsLocator::new(settings.resources.root.clone()))
    }

    pub fn suite(&self) -> Suite {
        self.suite
    }

    /// All entries in definition order. Restartable and infallible.
    pub fn list_all(&self) -> impl ExactSizeIterator<Item = &'static TraceEntry> + Clone {
        self.suite.entries().iter()
    }

    pub fn get(&self, id: &str) -> Option<&'static TraceEntry> {
        self.list_all().find(|entry| entry.id == id)
    }

    /// Locate the resource behind `entry`.
    ///
    /// Absence is reported as [`Error::ResourceNotFound`] and never retried:
    /// a missing fixture means the bundle was not deployed with the code.
    /// An entry from another suite is rejected as [`Error::UnknownTrace`].
    pub fn resolve(&self, entry: &TraceEntry) -> Result<ResourceHandle> {
        if !self.suite.entries().contains(entry) {
            return Err(Error::unknown_trace(self.suite, entry.id));
        }
        let namespace = self.suite.namespace();
        match self.locator.locate(namespace, entry.path) {
            Some(handle) => {
                debug!(
                    suite = %self.suite,
                    trace = entry.id,
                    location = %handle,
                    "{}",
                    resolution::RESOLVED
                );
                Ok(handle)
            }
            None => {
                let path = self.locator.expected_location(namespace, entry.path);
                error!(
                    suite = %self.suite,
                    trace = entry.id,
                    expected = %path.display(),
                    "{}",
                    resolution::NOT_FOUND
                );
                Err(Error::ResourceNotFound {
                    suite: self.suite,
                    trace: entry.id,
                    path: path.display().to_string(),
                })
            }
        }
    }

    pub fn event_count_of(&self, entry: &TraceEntry) -> Option<u32> {
        entry.event_count
    }

    pub fn duration_of(&self, entry: &TraceEntry) -> Option<u32> {
        entry.duration_secs
    }
}
