//! The chain-continuation verdict and the [`IntoVerdict`] conversion trait.
//!
//! A middleware signals whether the segments after it should still be
//! evaluated. It does so through its return value, and [`IntoVerdict`] is
//! what lets that return value stay ergonomic: return nothing to wave the
//! navigation through, return a `bool` to decide, or return a [`Verdict`]
//! when you want to be explicit.

// ── Verdict ──────────────────────────────────────────────────────────────────

/// The outcome of one middleware, one segment, or one whole resolver pass.
///
/// `Halt` stops evaluation of the remaining middlewares for the current
/// navigation. It does **not** block the navigation itself — the continuation
/// is still invoked; whether to honour a `Halt` is the host router's call.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Verdict {
    /// Keep evaluating the chain.
    Proceed,
    /// Stop evaluating the chain; skip every middleware after this one.
    Halt,
}

impl Verdict {
    pub fn is_proceed(self) -> bool {
        matches!(self, Self::Proceed)
    }

    pub fn is_halt(self) -> bool {
        matches!(self, Self::Halt)
    }
}

// ── IntoVerdict ──────────────────────────────────────────────────────────────

/// Conversion into a [`Verdict`].
///
/// Implemented for the return types a middleware may have:
///
/// | returned        | verdict                          |
/// |-----------------|----------------------------------|
/// | `()`            | `Proceed` — no stated intent     |
/// | `bool`          | `true` → `Proceed`, `false` → `Halt` |
/// | `Option<bool>`  | `None` → `Proceed`, `Some(b)` → as `bool` |
/// | `Verdict`       | itself                           |
pub trait IntoVerdict {
    fn into_verdict(self) -> Verdict;
}

impl IntoVerdict for Verdict {
    fn into_verdict(self) -> Verdict { self }
}

/// A middleware that returns nothing has no objection.
impl IntoVerdict for () {
    fn into_verdict(self) -> Verdict { Verdict::Proceed }
}

impl IntoVerdict for bool {
    fn into_verdict(self) -> Verdict {
        if self { Verdict::Proceed } else { Verdict::Halt }
    }
}

/// `None` reads as "no stated intent" and counts as success.
impl IntoVerdict for Option<bool> {
    fn into_verdict(self) -> Verdict {
        match self {
            None => Verdict::Proceed,
            Some(intent) => intent.into_verdict(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_counts_as_success() {
        assert_eq!(().into_verdict(), Verdict::Proceed);
    }

    #[test]
    fn bool_maps_directly() {
        assert_eq!(true.into_verdict(), Verdict::Proceed);
        assert_eq!(false.into_verdict(), Verdict::Halt);
    }

    #[test]
    fn absent_option_counts_as_success() {
        assert_eq!(None::<bool>.into_verdict(), Verdict::Proceed);
        assert_eq!(Some(true).into_verdict(), Verdict::Proceed);
        assert_eq!(Some(false).into_verdict(), Verdict::Halt);
    }

    #[test]
    fn verdict_is_identity() {
        assert_eq!(Verdict::Halt.into_verdict(), Verdict::Halt);
        assert!(Verdict::Proceed.is_proceed());
        assert!(Verdict::Halt.is_halt());
    }
}
