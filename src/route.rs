//! Route descriptors as the host router hands them to a navigation guard.
//!
//! wicket does not match paths. The host router already did that work and
//! produced an ordered list of matched segments (outermost layout first,
//! leaf route last). These types carry that result — plus each segment's
//! declared middleware — across the guard boundary.

use crate::middleware::{BoxedMiddleware, Middleware};

// ── RouteDescriptor ───────────────────────────────────────────────────────────

/// One side of a navigation: where the user is going (`to`) or where they
/// came from (`from`).
///
/// Built by the host router (or by hand in tests):
///
/// ```rust
/// use wicket::{RouteDescriptor, RouteSegment};
///
/// let to = RouteDescriptor::new("/admin/users")
///     .segment(RouteSegment::new("/admin").middleware("auth"))
///     .segment(RouteSegment::new("/admin/users"));
/// assert_eq!(to.matched().len(), 2);
/// ```
pub struct RouteDescriptor {
    path: String,
    matched: Vec<RouteSegment>,
}

impl RouteDescriptor {
    /// A descriptor for `path` with no matched segments yet.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into(), matched: Vec::new() }
    }

    /// Append one matched segment. Returns `self` so segments chain in
    /// match order, outermost first.
    pub fn segment(mut self, segment: RouteSegment) -> Self {
        self.matched.push(segment);
        self
    }

    /// The full navigated path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The matched segments, in match order.
    pub fn matched(&self) -> &[RouteSegment] {
        &self.matched
    }
}

// ── RouteSegment ──────────────────────────────────────────────────────────────

/// One node along a hierarchical route match — a nested layout, a leaf view.
pub struct RouteSegment {
    path: String,
    meta: SegmentMeta,
}

impl RouteSegment {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into(), meta: SegmentMeta { middleware: None } }
    }

    /// Declare this segment's middleware. Accepts a name, a
    /// [`MiddlewareRef`], or an ordered sequence of either:
    ///
    /// ```rust
    /// use wicket::{MiddlewareRef, RouteSegment};
    ///
    /// RouteSegment::new("/admin").middleware("auth");
    /// RouteSegment::new("/admin").middleware(["auth", "audit"]);
    /// RouteSegment::new("/admin").middleware(MiddlewareRef::inline(
    ///     |_: &wicket::RouteDescriptor, _: &wicket::RouteDescriptor,
    ///      _: Option<&wicket::Continuation>| true,
    /// ));
    /// ```
    pub fn middleware(mut self, spec: impl Into<MiddlewareSpec>) -> Self {
        self.meta.middleware = Some(spec.into());
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn meta(&self) -> &SegmentMeta {
        &self.meta
    }
}

// ── SegmentMeta ───────────────────────────────────────────────────────────────

/// Per-segment metadata consulted by the resolver.
pub struct SegmentMeta {
    middleware: Option<MiddlewareSpec>,
}

impl SegmentMeta {
    /// The segment's declared middleware, if any.
    pub fn middleware(&self) -> Option<&MiddlewareSpec> {
        self.middleware.as_ref()
    }
}

// ── MiddlewareSpec ────────────────────────────────────────────────────────────

/// What a segment declares: one middleware reference, or an ordered chain.
///
/// A chain is evaluated front to back and short-circuits on the first
/// [`Halt`](crate::Verdict::Halt).
pub enum MiddlewareSpec {
    Single(MiddlewareRef),
    Chain(Vec<MiddlewareRef>),
}

impl From<MiddlewareRef> for MiddlewareSpec {
    fn from(reference: MiddlewareRef) -> Self {
        Self::Single(reference)
    }
}

impl From<&str> for MiddlewareSpec {
    fn from(name: &str) -> Self {
        Self::Single(MiddlewareRef::named(name))
    }
}

impl From<String> for MiddlewareSpec {
    fn from(name: String) -> Self {
        Self::Single(MiddlewareRef::named(name))
    }
}

impl<T: Into<MiddlewareRef>> From<Vec<T>> for MiddlewareSpec {
    fn from(references: Vec<T>) -> Self {
        Self::Chain(references.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<MiddlewareRef>, const N: usize> From<[T; N]> for MiddlewareSpec {
    fn from(references: [T; N]) -> Self {
        Self::Chain(references.into_iter().map(Into::into).collect())
    }
}

// ── MiddlewareRef ─────────────────────────────────────────────────────────────

/// A middleware reference: either a lookup key into the
/// [`MiddlewareMap`](crate::MiddlewareMap), or a callback supplied inline.
///
/// The two cases are a closed union — the resolver matches on them
/// exhaustively, so there is no "neither a name nor a callback" shape to
/// defend against at run time.
pub struct MiddlewareRef(pub(crate) RefKind);

pub(crate) enum RefKind {
    Named(String),
    Inline(BoxedMiddleware),
}

impl MiddlewareRef {
    /// Refer to a middleware registered in the map under `name`.
    ///
    /// Names that nothing answers to resolve to a successful no-op at
    /// navigation time — see [`MiddlewareMap`](crate::MiddlewareMap).
    pub fn named(name: impl Into<String>) -> Self {
        Self(RefKind::Named(name.into()))
    }

    /// Supply the callback directly, bypassing the map.
    pub fn inline(middleware: impl Middleware) -> Self {
        Self(RefKind::Inline(middleware.into_boxed_middleware()))
    }
}

impl From<&str> for MiddlewareRef {
    fn from(name: &str) -> Self {
        Self::named(name)
    }
}

impl From<String> for MiddlewareRef {
    fn from(name: String) -> Self {
        Self::named(name)
    }
}
