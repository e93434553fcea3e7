//! The navigation-guard entry point.
//!
//! [`route_guard`] is how an application hands its middleware map to the
//! host router: build the map, pass the build result straight in, register
//! the returned guard as the router's per-navigation hook. A rejected map
//! is reported and replaced by an empty one — a configuration mistake
//! degrades to "allow everything", it never takes the application down.
//!
//! ```rust
//! use wicket::{
//!     Continuation, MiddlewareMap, RouteDescriptor, RouteSegment, Verdict, route_guard,
//! };
//!
//! fn auth(to: &RouteDescriptor, _from: &RouteDescriptor,
//!         _next: Option<&Continuation>) -> bool {
//!     !to.path().starts_with("/admin")
//! }
//!
//! let guard = route_guard(
//!     MiddlewareMap::builder().register("auth", auth).build(),
//! );
//!
//! let to = RouteDescriptor::new("/admin/users")
//!     .segment(RouteSegment::new("/admin").middleware("auth"));
//! let from = RouteDescriptor::new("/");
//!
//! assert_eq!(guard.call(&to, &from, None), Verdict::Halt);
//! ```

use crate::diagnostics::{Diagnostic, DiagnosticsSink, TracingSink};
use crate::error::ConfigError;
use crate::map::MiddlewareMap;
use crate::resolver::Resolver;
use crate::route::RouteDescriptor;
use crate::verdict::Verdict;

// ── Continuation ──────────────────────────────────────────────────────────────

/// The zero-argument callback the host router expects a guard to invoke to
/// proceed with (or finalise) the navigation.
///
/// The guard invokes it exactly once per pass, after middleware evaluation,
/// whatever the verdict. Middlewares also receive it and may call it
/// themselves; wicket does not coordinate that — the callback is shared,
/// not consumed.
pub struct Continuation {
    callback: Box<dyn Fn() + Send + Sync>,
}

impl Continuation {
    pub fn new(callback: impl Fn() + Send + Sync + 'static) -> Self {
        Self { callback: Box::new(callback) }
    }

    /// Invoke the underlying callback.
    pub fn call(&self) {
        (self.callback)()
    }
}

// ── NavigationGuard ───────────────────────────────────────────────────────────

/// A reusable per-navigation hook.
///
/// One guard serves every navigation for the lifetime of the application;
/// each [`call`](Self::call) runs an independent, fully synchronous
/// resolution pass over a fresh resolver. The guard holds no mutable state,
/// so sharing it across threads is fine.
pub struct NavigationGuard {
    map: MiddlewareMap,
}

impl NavigationGuard {
    /// A guard over an already-built map.
    pub fn new(map: MiddlewareMap) -> Self {
        Self { map }
    }

    /// Run one navigation through the middleware chain.
    ///
    /// Walks `to`'s matched segments in order, invoking each declared
    /// middleware with `(to, from, next)` and short-circuiting on the first
    /// [`Halt`](Verdict::Halt). `next`, when supplied, is invoked exactly
    /// once afterwards, **regardless of the verdict** — the guard reports
    /// intent, the host router controls the navigation.
    pub fn call(
        &self,
        to: &RouteDescriptor,
        from: &RouteDescriptor,
        next: Option<&Continuation>,
    ) -> Verdict {
        Resolver::new(&self.map, to, from, next).run()
    }
}

// ── Factory ───────────────────────────────────────────────────────────────────

/// Build a navigation guard from the outcome of map construction.
///
/// Takes `Result` so a [`MiddlewareMap::builder`] chain flows straight in.
/// An `Err` is reported through the default [`TracingSink`] and an empty map
/// is substituted — processing continues rather than aborting.
pub fn route_guard(map: Result<MiddlewareMap, ConfigError>) -> NavigationGuard {
    route_guard_with(map, &TracingSink)
}

/// [`route_guard`] with an injected diagnostics sink.
///
/// The sink is only consulted during construction; the guard does not hold
/// on to it.
pub fn route_guard_with(
    map: Result<MiddlewareMap, ConfigError>,
    sink: &dyn DiagnosticsSink,
) -> NavigationGuard {
    let map = match map {
        Ok(map) => map,
        Err(error) => {
            sink.report(&Diagnostic::InvalidMap(error));
            MiddlewareMap::new()
        }
    };
    NavigationGuard::new(map)
}
