//! Middleware trait and type erasure.
//!
//! # How middleware callbacks are stored
//!
//! The map needs to hold callbacks of *different* types in a single
//! `HashMap<String, …>`. Rust collections can only hold one concrete type,
//! so we use **trait objects** (`dyn ErasedMiddleware`) to hide the concrete
//! callback type behind a common interface and store everything uniformly.
//!
//! The chain from user code to vtable call is:
//!
//! ```text
//! fn auth(to: &RouteDescriptor, from: &RouteDescriptor,
//!         next: Option<&Continuation>) -> bool { … }   ← user writes this
//!        ↓ builder.register("auth", auth)
//! auth.into_boxed_middleware()                          ← Middleware blanket impl
//!        ↓
//! Arc::new(FnMiddleware(auth))                          ← heap-allocated wrapper
//!        ↓  stored as BoxedMiddleware = Arc<dyn ErasedMiddleware>
//! middleware.call(to, from, next)  at navigation time   ← one vtable dispatch
//!        ↓
//! auth(to, from, next).into_verdict()                   ← Verdict
//! ```
//!
//! The only runtime cost per invocation is **one virtual call** — negligible
//! for something that runs once per navigation.

use std::sync::Arc;

use crate::guard::Continuation;
use crate::route::RouteDescriptor;
use crate::verdict::{IntoVerdict, Verdict};

// ── Internal types ────────────────────────────────────────────────────────────

/// Internal dispatch interface.
///
/// `#[doc(hidden)] pub` rather than `pub(crate)` because it appears in the
/// return type of the public `Middleware` trait's `into_boxed_middleware`
/// method. External crates cannot usefully interact with this trait.
#[doc(hidden)]
pub trait ErasedMiddleware {
    fn call(
        &self,
        to: &RouteDescriptor,
        from: &RouteDescriptor,
        next: Option<&Continuation>,
    ) -> Verdict;
}

/// A heap-allocated, type-erased middleware callback.
///
/// `#[doc(hidden)] pub` for the same reason as `ErasedMiddleware`.
/// `Arc` gives us cheap shared ownership so one registration can back any
/// number of navigation passes without copying the callback.
#[doc(hidden)]
pub type BoxedMiddleware = Arc<dyn ErasedMiddleware + Send + Sync + 'static>;

// ── Public Middleware trait ───────────────────────────────────────────────────

/// Implemented for every valid middleware callback.
///
/// You never implement this yourself. It is automatically satisfied for any
/// function or closure with the signature:
///
/// ```text
/// fn name(to: &RouteDescriptor, from: &RouteDescriptor,
///         next: Option<&Continuation>) -> impl IntoVerdict
/// ```
///
/// The trait is **sealed** (via the private `Sealed` supertrait): only the
/// blanket impl below can satisfy it. This prevents accidental misuse and
/// keeps the API surface stable across versions.
pub trait Middleware: private::Sealed + Send + Sync + 'static {
    #[doc(hidden)]
    fn into_boxed_middleware(self) -> BoxedMiddleware;
}

/// The sealing module. Because `Sealed` is private, external crates cannot
/// name it and therefore cannot implement `Middleware` on their own types.
mod private {
    pub trait Sealed {}
}

// ── Blanket implementations ───────────────────────────────────────────────────

/// Implement the sealing trait for any callable with the right signature.
///
/// `Fn(…)` covers:
///   - named `fn` items
///   - closures, including ones capturing shared state
///   - any struct that implements `Fn`
impl<F, V> private::Sealed for F
where
    F: Fn(&RouteDescriptor, &RouteDescriptor, Option<&Continuation>) -> V + Send + Sync + 'static,
    V: IntoVerdict,
{
}

/// Implement `Middleware` for any callable with the right signature.
impl<F, V> Middleware for F
where
    F: Fn(&RouteDescriptor, &RouteDescriptor, Option<&Continuation>) -> V + Send + Sync + 'static,
    V: IntoVerdict,
{
    fn into_boxed_middleware(self) -> BoxedMiddleware {
        Arc::new(FnMiddleware(self))
    }
}

// ── Concrete wrapper ──────────────────────────────────────────────────────────

/// Newtype wrapper that holds a concrete callback `F` and implements
/// [`ErasedMiddleware`], bridging the typed world to the trait-object world.
struct FnMiddleware<F>(F);

impl<F, V> ErasedMiddleware for FnMiddleware<F>
where
    F: Fn(&RouteDescriptor, &RouteDescriptor, Option<&Continuation>) -> V + Send + Sync + 'static,
    V: IntoVerdict,
{
    fn call(
        &self,
        to: &RouteDescriptor,
        from: &RouteDescriptor,
        next: Option<&Continuation>,
    ) -> Verdict {
        (self.0)(to, from, next).into_verdict()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allow(_to: &RouteDescriptor, _from: &RouteDescriptor, _next: Option<&Continuation>) {}

    fn deny(_to: &RouteDescriptor, _from: &RouteDescriptor, _next: Option<&Continuation>) -> bool {
        false
    }

    #[test]
    fn fn_items_erase_and_dispatch() {
        let to = RouteDescriptor::new("/a");
        let from = RouteDescriptor::new("/b");

        let boxed = allow.into_boxed_middleware();
        assert_eq!(boxed.call(&to, &from, None), Verdict::Proceed);

        let boxed = deny.into_boxed_middleware();
        assert_eq!(boxed.call(&to, &from, None), Verdict::Halt);
    }

    #[test]
    fn closures_receive_the_invocation_triple() {
        let to = RouteDescriptor::new("/admin");
        let from = RouteDescriptor::new("/");

        let gate = |to: &RouteDescriptor, _from: &RouteDescriptor, _next: Option<&Continuation>| {
            !to.path().starts_with("/admin")
        };
        let boxed = gate.into_boxed_middleware();
        assert_eq!(boxed.call(&to, &from, None), Verdict::Halt);
        assert_eq!(boxed.call(&from, &to, None), Verdict::Proceed);
    }
}
