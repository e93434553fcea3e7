//! Injectable diagnostics.
//!
//! Configuration mistakes are reported, never thrown. Where they get
//! reported *to* is the caller's choice: the default sink forwards to
//! [`tracing`], and tests inject a collecting sink instead of capturing
//! process-wide output.
//!
//! Note what is **not** reported here: a named reference that nothing was
//! registered under resolves silently at navigation time (see
//! [`MiddlewareMap`](crate::MiddlewareMap)). The sink only ever sees events
//! from the construction boundary.

use tracing::error;

use crate::error::ConfigError;

/// A diagnostic event emitted while assembling a navigation guard.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum Diagnostic {
    /// Map construction failed; the guard fell back to an empty map and
    /// every named reference will resolve to a no-op.
    InvalidMap(ConfigError),
}

/// Where diagnostics go.
///
/// Implement this to route events into your own telemetry, or to a
/// `Vec<Diagnostic>` in tests.
pub trait DiagnosticsSink {
    fn report(&self, diagnostic: &Diagnostic);
}

/// The default sink: forwards every event to [`tracing`] at `ERROR` level.
pub struct TracingSink;

impl DiagnosticsSink for TracingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        match diagnostic {
            Diagnostic::InvalidMap(err) => {
                error!(%err, "middleware map rejected; guard falls back to an empty map");
            }
        }
    }
}
