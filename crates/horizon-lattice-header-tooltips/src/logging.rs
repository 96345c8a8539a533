//! Logging facilities for header tooltips.
//!
//! The crate is instrumented with `tracing`. Nothing is printed unless the
//! host installs a subscriber:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_lattice_header_tooltips=trace")
//!     .init();
//! ```
//!
//! Lifecycle transitions are logged at `debug`, per-header decisions and hook
//! emission at `trace`.

/// Span names used for tracing.
pub mod span_names {
    /// Hook emission span.
    pub const HOOK_EMIT: &str = "horizon_lattice_header_tooltips::hook_emit";
    /// Cleanup traversal span.
    pub const CLEANUP: &str = "horizon_lattice_header_tooltips::cleanup";
}

/// Target names for log filtering.
pub mod targets {
    /// Crate-wide target.
    pub const CRATE: &str = "horizon_lattice_header_tooltips";
    /// Plugin lifecycle target.
    pub const PLUGIN: &str = "horizon_lattice_header_tooltips::plugin";
    /// Hook subscription and emission target.
    pub const HOOKS: &str = "horizon_lattice_header_tooltips::hooks";
    /// Attribute cleanup target.
    pub const CLEANUP: &str = "horizon_lattice_header_tooltips::cleanup";
    /// Timing spans.
    pub const PERF: &str = "horizon_lattice_header_tooltips::perf";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Used to time the cleanup traversal over all header surfaces.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create and enter a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::debug_span!(target: targets::PERF, "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

#[macro_export]
macro_rules! tooltips_trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: $crate::logging::targets::CRATE, $($arg)*)
    };
}

#[macro_export]
macro_rules! tooltips_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: $crate::logging::targets::CRATE, $($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perf_span() {
        // Entering a span without a subscriber must be harmless
        let _span = PerfSpan::new(span_names::CLEANUP);
    }

    #[test]
    fn test_targets_share_crate_prefix() {
        for target in [targets::PLUGIN, targets::HOOKS, targets::CLEANUP, targets::PERF] {
            assert!(target.starts_with(targets::CRATE));
        }
    }
}
