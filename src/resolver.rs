//! The per-navigation resolver — the core of the crate.
//!
//! One resolver exists for exactly one navigation: the guard constructs it,
//! runs the pass, and discards it. The pass walks the target route's matched
//! segments in order and evaluates each segment's declared middleware with
//! short-circuit "every" semantics — the first [`Halt`](Verdict::Halt) stops
//! evaluation, and everything after it (remaining entries in that segment,
//! all later segments) is never invoked.
//!
//! Whatever the outcome, the continuation — when one was supplied — is
//! invoked exactly once after the pass. The resolver reports intent through
//! its returned [`Verdict`]; honouring a `Halt` is the host router's job.

use tracing::{debug, trace};

use crate::guard::Continuation;
use crate::map::MiddlewareMap;
use crate::route::{MiddlewareRef, MiddlewareSpec, RefKind, RouteDescriptor, RouteSegment};
use crate::verdict::Verdict;

/// Single-use resolution pass over one navigation.
pub(crate) struct Resolver<'a> {
    map: &'a MiddlewareMap,
    to: &'a RouteDescriptor,
    from: &'a RouteDescriptor,
    next: Option<&'a Continuation>,
}

impl<'a> Resolver<'a> {
    pub(crate) fn new(
        map: &'a MiddlewareMap,
        to: &'a RouteDescriptor,
        from: &'a RouteDescriptor,
        next: Option<&'a Continuation>,
    ) -> Self {
        Self { map, to, from, next }
    }

    /// Run the pass and invoke the continuation.
    pub(crate) fn run(self) -> Verdict {
        trace!(
            to = %self.to.path(),
            from = %self.from.path(),
            segments = self.to.matched().len(),
            "resolving route middleware",
        );

        let verdict = if self
            .to
            .matched()
            .iter()
            .all(|segment| self.resolve_segment(segment).is_proceed())
        {
            Verdict::Proceed
        } else {
            Verdict::Halt
        };

        // Unconditional: a Halt stops middleware evaluation, not the
        // navigation. The host decides what to do with the verdict.
        if let Some(next) = self.next {
            next.call();
        }

        verdict
    }

    /// Resolve one matched segment. Segments with no middleware metadata
    /// succeed trivially; chains short-circuit on the first `Halt`.
    fn resolve_segment(&self, segment: &RouteSegment) -> Verdict {
        let verdict = match segment.meta().middleware() {
            None => Verdict::Proceed,
            Some(MiddlewareSpec::Single(reference)) => self.invoke(reference),
            Some(MiddlewareSpec::Chain(references)) => {
                if references.iter().all(|r| self.invoke(r).is_proceed()) {
                    Verdict::Proceed
                } else {
                    Verdict::Halt
                }
            }
        };

        if verdict.is_halt() {
            debug!(segment = %segment.path(), "middleware halted the chain");
        }
        verdict
    }

    /// Resolve one reference and invoke it with the invocation triple.
    ///
    /// A `Named` reference that nothing answers to degrades to a successful
    /// no-op, silently — a lookup miss must never strand a navigation.
    fn invoke(&self, reference: &MiddlewareRef) -> Verdict {
        match &reference.0 {
            RefKind::Inline(middleware) => middleware.call(self.to, self.from, self.next),
            RefKind::Named(name) => match self.map.get(name) {
                Some(middleware) => middleware.call(self.to, self.from, self.next),
                None => Verdict::Proceed,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// A middleware that counts its invocations and returns a fixed intent.
    fn counting(
        calls: Arc<AtomicUsize>,
        verdict: bool,
    ) -> impl Fn(&RouteDescriptor, &RouteDescriptor, Option<&Continuation>) -> bool + Send + Sync + 'static
    {
        move |_: &RouteDescriptor, _: &RouteDescriptor, _: Option<&Continuation>| {
            calls.fetch_add(1, Ordering::SeqCst);
            verdict
        }
    }

    fn run(map: &MiddlewareMap, to: &RouteDescriptor) -> Verdict {
        let from = RouteDescriptor::new("/");
        Resolver::new(map, to, &from, None).run()
    }

    #[test]
    fn no_matched_segments_proceeds() {
        let map = MiddlewareMap::new();
        let to = RouteDescriptor::new("/anywhere");
        assert_eq!(run(&map, &to), Verdict::Proceed);
    }

    #[test]
    fn segments_without_metadata_proceed() {
        let map = MiddlewareMap::new();
        let to = RouteDescriptor::new("/a/b")
            .segment(RouteSegment::new("/a"))
            .segment(RouteSegment::new("/a/b"));
        assert_eq!(run(&map, &to), Verdict::Proceed);
    }

    #[test]
    fn chain_short_circuits_within_a_segment() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let third = Arc::new(AtomicUsize::new(0));

        let map = MiddlewareMap::builder()
            .register("first", counting(Arc::clone(&first), true))
            .register("second", counting(Arc::clone(&second), false))
            .register("third", counting(Arc::clone(&third), true))
            .build()
            .unwrap();

        let to = RouteDescriptor::new("/x")
            .segment(RouteSegment::new("/x").middleware(["first", "second", "third"]));

        assert_eq!(run(&map, &to), Verdict::Halt);
        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(second.load(Ordering::SeqCst), 1);
        assert_eq!(third.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn later_segments_are_skipped_after_a_halt() {
        let gate = Arc::new(AtomicUsize::new(0));
        let never = Arc::new(AtomicUsize::new(0));

        let map = MiddlewareMap::builder()
            .register("gate", counting(Arc::clone(&gate), false))
            .register("never", counting(Arc::clone(&never), true))
            .build()
            .unwrap();

        let to = RouteDescriptor::new("/a/b")
            .segment(RouteSegment::new("/a").middleware("gate"))
            .segment(RouteSegment::new("/a/b").middleware("never"));

        assert_eq!(run(&map, &to), Verdict::Halt);
        assert_eq!(gate.load(Ordering::SeqCst), 1);
        assert_eq!(never.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn inline_references_bypass_the_map() {
        let map = MiddlewareMap::new();
        let to = RouteDescriptor::new("/x").segment(
            RouteSegment::new("/x").middleware(MiddlewareRef::inline(
                |_: &RouteDescriptor, _: &RouteDescriptor, _: Option<&Continuation>| false,
            )),
        );
        assert_eq!(run(&map, &to), Verdict::Halt);
    }

    // A lookup miss is a silent success, not a halt and not an error. This
    // is deliberate and load-bearing: only *registered* names can be
    // rejected (at build time), so an unregistered one has exactly one
    // permissive meaning.
    #[test]
    fn unknown_names_are_silent_no_ops() {
        let map = MiddlewareMap::new();
        let to = RouteDescriptor::new("/x")
            .segment(RouteSegment::new("/x").middleware(["a", "b"]));
        assert_eq!(run(&map, &to), Verdict::Proceed);
    }

    #[test]
    fn unknown_name_does_not_break_a_chain_around_it() {
        let after = Arc::new(AtomicUsize::new(0));
        let map = MiddlewareMap::builder()
            .register("after", counting(Arc::clone(&after), true))
            .build()
            .unwrap();

        let to = RouteDescriptor::new("/x")
            .segment(RouteSegment::new("/x").middleware(["missing", "after"]));

        assert_eq!(run(&map, &to), Verdict::Proceed);
        assert_eq!(after.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn continuation_runs_exactly_once_on_proceed_and_on_halt() {
        for verdict in [true, false] {
            let calls = Arc::new(AtomicUsize::new(0));
            let map = MiddlewareMap::builder()
                .register("gate", counting(Arc::new(AtomicUsize::new(0)), verdict))
                .build()
                .unwrap();

            let to = RouteDescriptor::new("/x")
                .segment(RouteSegment::new("/x").middleware("gate"));
            let from = RouteDescriptor::new("/");

            let next = {
                let calls = Arc::clone(&calls);
                Continuation::new(move || {
                    calls.fetch_add(1, Ordering::SeqCst);
                })
            };

            Resolver::new(&map, &to, &from, Some(&next)).run();
            assert_eq!(calls.load(Ordering::SeqCst), 1);
        }
    }

    #[test]
    fn middleware_receives_the_invocation_triple() {
        let map = MiddlewareMap::builder()
            .register(
                "check",
                |to: &RouteDescriptor, from: &RouteDescriptor, next: Option<&Continuation>| {
                    to.path() == "/target" && from.path() == "/origin" && next.is_some()
                },
            )
            .build()
            .unwrap();

        let to = RouteDescriptor::new("/target")
            .segment(RouteSegment::new("/target").middleware("check"));
        let from = RouteDescriptor::new("/origin");
        let next = Continuation::new(|| {});

        let verdict = Resolver::new(&map, &to, &from, Some(&next)).run();
        assert_eq!(verdict, Verdict::Proceed);
    }
}
