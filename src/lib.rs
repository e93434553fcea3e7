//! # wicket
//!
//! Route-middleware resolution for client-side navigation guards.
//! Nothing more. Nothing less.
//!
//! ## The contract
//!
//! The host router handles path matching, history, and whether a navigation
//! actually happens. wicket does not — by design. The router does router
//! things. wicket does one thing: given the segments the router matched,
//! resolve and invoke each segment's declared middleware, in order, stopping
//! at the first one that objects.
//!
//! What the host router already owns — wicket intentionally ignores:
//!
//! - **Path matching** — the router produced the matched segments
//! - **Navigation control** — the router decides what a [`Verdict`] means
//! - **Async coordination** — a pass is one synchronous walk, nothing more
//!
//! What's left for wicket — the only part that changes between applications:
//!
//! - A [`MiddlewareMap`] of named callbacks, validated once at build time
//! - Short-circuit "every" resolution over the matched segments
//! - Permissive degradation — a misconfiguration allows, it never blocks
//!
//! ## Quick start
//!
//! ```rust
//! use wicket::{
//!     Continuation, MiddlewareMap, RouteDescriptor, RouteSegment, Verdict, route_guard,
//! };
//!
//! fn auth(to: &RouteDescriptor, _from: &RouteDescriptor,
//!         _next: Option<&Continuation>) -> bool {
//!     // real app: consult a session store
//!     !to.path().starts_with("/admin")
//! }
//!
//! fn audit(_to: &RouteDescriptor, _from: &RouteDescriptor,
//!          _next: Option<&Continuation>) {
//!     // returns nothing: no objection, the chain continues
//! }
//!
//! let guard = route_guard(
//!     MiddlewareMap::builder()
//!         .register("auth", auth)
//!         .register("audit", audit)
//!         .build(),
//! );
//!
//! // The host router produces descriptors like these on every navigation
//! // and calls the guard from its per-navigation hook.
//! let to = RouteDescriptor::new("/admin/users")
//!     .segment(RouteSegment::new("/admin").middleware(["auth", "audit"]))
//!     .segment(RouteSegment::new("/admin/users"));
//! let from = RouteDescriptor::new("/");
//!
//! assert_eq!(guard.call(&to, &from, None), Verdict::Halt);
//! ```

mod diagnostics;
mod error;
mod guard;
mod map;
mod middleware;
mod resolver;
mod route;
mod verdict;

pub use diagnostics::{Diagnostic, DiagnosticsSink, TracingSink};
pub use error::ConfigError;
pub use guard::{Continuation, NavigationGuard, route_guard, route_guard_with};
pub use map::{MiddlewareMap, MiddlewareMapBuilder};
pub use middleware::Middleware;
pub use route::{MiddlewareRef, MiddlewareSpec, RouteDescriptor, RouteSegment, SegmentMeta};
pub use verdict::{IntoVerdict, Verdict};
