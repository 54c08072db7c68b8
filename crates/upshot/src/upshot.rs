//! The tri-state container: constructors, accessors and move-out.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::AccessError;
use crate::state::UpshotState;

/// A value that holds either a success payload of type `T`, an error payload
/// of type `E`, or nothing at all.
///
/// The two payloads occupy mutually exclusive storage; exactly one of
/// [`is_success`](Self::is_success), [`is_error`](Self::is_error) and
/// [`is_empty`](Self::is_empty) is true for any container. The empty state
/// is not a first-class outcome: it models defaultability and the residue
/// of a [`take`](Self::take), and accessing it fails the same way accessing
/// the wrong channel does.
///
/// Two access styles are offered on purpose. [`value`](Self::value) and
/// [`expect`](Self::expect) fail loudly with an [`AccessError`];
/// [`success`](Self::success), [`error`](Self::error) and
/// [`value_or`](Self::value_or) never fail.
///
/// ```rust
/// use upshot::{Upshot, UpshotState};
///
/// let parsed: Upshot<u16, String> = Upshot::from_value(8080);
/// assert_eq!(parsed.state(), UpshotState::Success);
/// assert_eq!(parsed.success(), Some(&8080));
///
/// let failed: Upshot<u16, String> = Upshot::from_error("bad port".to_string());
/// assert_eq!(failed.value_or(0), 0);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Upshot<T, E> {
    /// Holds nothing. Reachable only through default construction or as the
    /// residue of a completed [`take`](Self::take).
    Empty,
    /// Holds a success payload.
    Success(T),
    /// Holds an error payload.
    Error(E),
}

impl<T, E> Upshot<T, E> {
    /// Creates a container holding a success payload.
    ///
    /// Construction is always tag-qualified: this constructor and
    /// [`from_error`](Self::from_error) name their channel explicitly, so a
    /// container whose success and error types coincide is never ambiguous.
    pub fn from_value(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a container holding an error payload.
    pub fn from_error(error: E) -> Self {
        Self::Error(error)
    }

    /// Creates an empty container.
    pub fn empty() -> Self {
        Self::Empty
    }

    /// Moves the contents out, leaving the source empty.
    ///
    /// This is the only operation that mutates a container in place. The
    /// swap is a single assignment, so no intermediate state is observable.
    ///
    /// ```rust
    /// use upshot::Upshot;
    ///
    /// let mut a: Upshot<i32, String> = Upshot::from_value(7);
    /// let b = a.take();
    /// assert!(a.is_empty());
    /// assert_eq!(b.success(), Some(&7));
    /// ```
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Returns the success payload if the container is in the success state.
    pub fn success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the error payload if the container is in the error state.
    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Error(error) => Some(error),
            _ => None,
        }
    }

    /// Consumes the container, returning the success payload if present.
    pub fn into_success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            _ => None,
        }
    }

    /// Consumes the container, returning the error payload if present.
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Error(error) => Some(error),
            _ => None,
        }
    }

    /// Returns the success payload, failing outside the success state.
    ///
    /// The returned [`AccessError::InvalidState`] carries the state the
    /// container was actually in.
    pub fn value(&self) -> Result<&T, AccessError> {
        match self {
            Self::Success(value) => Ok(value),
            _ => Err(AccessError::InvalidState {
                actual: self.state(),
            }),
        }
    }

    /// Returns the success payload, failing with caller-supplied context
    /// outside the success state.
    pub fn expect(&self, message: impl Into<String>) -> Result<&T, AccessError> {
        match self {
            Self::Success(value) => Ok(value),
            _ => Err(AccessError::ExpectationFailed {
                message: message.into(),
                actual: self.state(),
            }),
        }
    }

    /// Returns the success payload, or the supplied default for the error
    /// and empty states.
    pub fn value_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            _ => default,
        }
    }

    /// Returns the success payload, or `T::default()` for the error and
    /// empty states.
    pub fn value_or_default(self) -> T
    where
        T: Default,
    {
        self.value_or(T::default())
    }

    /// The payload-free state tag.
    pub const fn state(&self) -> UpshotState {
        match self {
            Self::Empty => UpshotState::Empty,
            Self::Success(_) => UpshotState::Success,
            Self::Error(_) => UpshotState::Error,
        }
    }

    /// True iff the container holds a success payload.
    ///
    /// This is the boolean reading of a container: a chain is "truthy"
    /// exactly when it ended in success.
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// True iff the container holds an error payload.
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// True iff the container holds nothing.
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Borrows the payload, producing a container of references.
    ///
    /// Lets a caller run the by-value combinators without giving up the
    /// original container.
    pub fn as_ref(&self) -> Upshot<&T, &E> {
        match self {
            Self::Empty => Upshot::Empty,
            Self::Success(value) => Upshot::Success(value),
            Self::Error(error) => Upshot::Error(error),
        }
    }
}

impl<T, E> Default for Upshot<T, E> {
    fn default() -> Self {
        Self::Empty
    }
}
