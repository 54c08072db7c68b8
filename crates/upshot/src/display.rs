//! Display formatting for the container.

use std::fmt;

use crate::upshot::Upshot;

/// Renders the active payload's own representation; an empty container
/// renders as the empty string.
impl<T, E> fmt::Display for Upshot<T, E>
where
    T: fmt::Display,
    E: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => value.fmt(f),
            Self::Error(error) => error.fmt(f),
            Self::Empty => Ok(()),
        }
    }
}
