//! Typed configuration errors.

use std::fmt;

/// The error type produced at the map-construction boundary.
///
/// Resolution itself never fails — misconfigurations that survive
/// construction degrade to permissive no-ops so a navigation is never
/// blocked by a typo. What *can* be rejected is rejected here, once,
/// when [`MiddlewareMapBuilder::build`](crate::MiddlewareMapBuilder::build)
/// runs.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// A middleware was registered under the empty string.
    EmptyName,
    /// Two middlewares were registered under the same name.
    DuplicateName(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "middleware name must not be empty"),
            Self::DuplicateName(name) => {
                write!(f, "middleware `{name}` is registered more than once")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
