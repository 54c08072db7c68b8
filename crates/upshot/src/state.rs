//! The tri-state discriminant.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The state of an [`Upshot`](crate::Upshot), without its payload.
///
/// Unlike the conventional binary success/error split, the container has a
/// third state: empty. An empty container holds nothing; it comes from
/// default construction or from being the source of a completed
/// [`take`](crate::Upshot::take).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UpshotState {
    /// No payload of either kind.
    #[default]
    Empty,
    /// A success payload is present.
    Success,
    /// An error payload is present.
    Error,
}

impl UpshotState {
    /// The lowercase state name, as rendered by `Display`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for UpshotState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
