//! Minimal wicket example — a middleware map guarding simulated navigations.
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example basic
//!
//! A real application registers the guard with its router's per-navigation
//! hook. There is no router here, so main() plays that role: it builds the
//! descriptors a router would produce and calls the guard directly.

use wicket::{
    Continuation, MiddlewareMap, RouteDescriptor, RouteSegment, Verdict, route_guard,
};

fn main() {
    tracing_subscriber::fmt::init();

    let guard = route_guard(
        MiddlewareMap::builder()
            .register("auth", auth)
            .register("audit", audit)
            .build(),
    );

    let from = RouteDescriptor::new("/");

    // Public page: no middleware anywhere on the matched chain.
    let to = RouteDescriptor::new("/about").segment(RouteSegment::new("/about"));
    report("/about", guard.call(&to, &from, Some(&continuation())));

    // Admin page: the layout segment declares ["auth", "audit"]. auth halts,
    // so audit and the leaf segment are skipped — but the continuation above
    // still ran, because the guard only reports intent.
    let to = RouteDescriptor::new("/admin/users")
        .segment(RouteSegment::new("/admin").middleware(["auth", "audit"]))
        .segment(RouteSegment::new("/admin/users"));
    report("/admin/users", guard.call(&to, &from, Some(&continuation())));
}

// Deny anything under /admin. A real app would consult a session store.
fn auth(to: &RouteDescriptor, _from: &RouteDescriptor, _next: Option<&Continuation>) -> bool {
    !to.path().starts_with("/admin")
}

// Returns nothing: no objection, the chain continues past it.
fn audit(to: &RouteDescriptor, from: &RouteDescriptor, _next: Option<&Continuation>) {
    println!("audit: {} -> {}", from.path(), to.path());
}

fn continuation() -> Continuation {
    Continuation::new(|| println!("continuation: router may finalise the navigation"))
}

fn report(path: &str, verdict: Verdict) {
    match verdict {
        Verdict::Proceed => println!("{path}: middleware chain proceeded"),
        Verdict::Halt => println!("{path}: middleware chain halted"),
    }
}
