//! The middleware map: name → callback registry.
//!
//! Build it once, hand it to [`route_guard`](crate::route_guard), forget
//! about it. The map is read-only after `build()` — a navigation pass never
//! mutates it, so one guard can serve every navigation for the lifetime of
//! the application.

use std::collections::HashMap;
use std::fmt;

use crate::error::ConfigError;
use crate::middleware::{BoxedMiddleware, Middleware};

// ── MiddlewareMap ─────────────────────────────────────────────────────────────

/// The registry of named middlewares.
///
/// Keys are unique; registration order carries no meaning — evaluation order
/// comes from the route's matched segments, never from the map.
///
/// ```rust
/// use wicket::{Continuation, MiddlewareMap, RouteDescriptor};
///
/// fn auth(_to: &RouteDescriptor, _from: &RouteDescriptor,
///         _next: Option<&Continuation>) -> bool {
///     false
/// }
///
/// let map = MiddlewareMap::builder()
///     .register("auth", auth)
///     .build()
///     .unwrap();
/// assert!(map.contains("auth"));
/// ```
///
/// # Unregistered names
///
/// A segment may reference a name nothing was registered under. At
/// navigation time that reference resolves to a successful no-op: the chain
/// continues, the navigation proceeds, and **no diagnostic is emitted**.
/// A lookup miss is indistinguishable from an always-allow middleware on
/// purpose — a misconfiguration must never strand the user on a dead
/// navigation.
pub struct MiddlewareMap {
    entries: HashMap<String, BoxedMiddleware>,
}

impl MiddlewareMap {
    /// The empty map. Every named reference degrades to a no-op.
    pub fn new() -> Self {
        Self { entries: HashMap::new() }
    }

    /// Start registering middlewares.
    pub fn builder() -> MiddlewareMapBuilder {
        MiddlewareMapBuilder { entries: Vec::new() }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn get(&self, name: &str) -> Option<&BoxedMiddleware> {
        self.entries.get(name)
    }
}

impl Default for MiddlewareMap {
    fn default() -> Self {
        Self::new()
    }
}

/// Callbacks are opaque; the registered names are what identify a map.
impl fmt::Debug for MiddlewareMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MiddlewareMap")
            .field("names", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

// ── MiddlewareMapBuilder ──────────────────────────────────────────────────────

/// Chaining registration. Each [`register`](Self::register) call returns
/// `self`; validation is deferred to [`build`](Self::build) so a whole
/// registration block reads as one expression.
pub struct MiddlewareMapBuilder {
    entries: Vec<(String, BoxedMiddleware)>,
}

impl MiddlewareMapBuilder {
    /// Register `middleware` under `name`. Returns `self` for chaining.
    pub fn register(mut self, name: impl Into<String>, middleware: impl Middleware) -> Self {
        self.entries.push((name.into(), middleware.into_boxed_middleware()));
        self
    }

    /// Validate and produce the map.
    ///
    /// # Errors
    ///
    /// [`ConfigError::EmptyName`] if a middleware was registered under `""`,
    /// [`ConfigError::DuplicateName`] if a name was registered twice.
    pub fn build(self) -> Result<MiddlewareMap, ConfigError> {
        let mut entries = HashMap::with_capacity(self.entries.len());
        for (name, middleware) in self.entries {
            if name.is_empty() {
                return Err(ConfigError::EmptyName);
            }
            if entries.insert(name.clone(), middleware).is_some() {
                return Err(ConfigError::DuplicateName(name));
            }
        }
        Ok(MiddlewareMap { entries })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guard::Continuation;
    use crate::route::RouteDescriptor;

    fn allow(_to: &RouteDescriptor, _from: &RouteDescriptor, _next: Option<&Continuation>) {}

    #[test]
    fn empty_map_contains_nothing() {
        let map = MiddlewareMap::default();
        assert!(map.is_empty());
        assert!(!map.contains("auth"));
    }

    #[test]
    fn build_registers_by_name() {
        let map = MiddlewareMap::builder()
            .register("auth", allow)
            .register("audit", allow)
            .build()
            .unwrap();
        assert_eq!(map.len(), 2);
        assert!(map.contains("auth"));
        assert!(map.contains("audit"));
        assert!(map.get("auth").is_some());
        assert!(map.get("missing").is_none());
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let err = MiddlewareMap::builder()
            .register("auth", allow)
            .register("auth", allow)
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::DuplicateName("auth".to_owned()));
    }

    #[test]
    fn debug_output_names_the_registrations() {
        let map = MiddlewareMap::builder()
            .register("auth", allow)
            .build()
            .unwrap();
        let rendered = format!("{map:?}");
        assert!(rendered.contains("MiddlewareMap"));
        assert!(rendered.contains("auth"));
    }

    #[test]
    fn empty_names_are_rejected() {
        let err = MiddlewareMap::builder()
            .register("", allow)
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::EmptyName);
    }
}
