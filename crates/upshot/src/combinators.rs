//! Chainable transformations over the container.
//!
//! Every combinator consumes the receiver and builds a fresh container;
//! none of them can produce the empty state from a success or an error.
//! An empty receiver passes through every channel combinator unchanged,
//! and the supplied callable is never invoked for it.

use crate::upshot::Upshot;

impl<T, E> Upshot<T, E> {
    /// Transforms the success payload, leaving the error channel alone.
    ///
    /// The callable's return type fixes the new success type.
    ///
    /// ```rust
    /// use upshot::Upshot;
    ///
    /// let res: Upshot<i32, String> = Upshot::from_value(21);
    /// assert_eq!(res.map(|v| v * 2).success(), Some(&42));
    /// ```
    pub fn map<U, F>(self, f: F) -> Upshot<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Upshot::Success(f(value)),
            Self::Error(error) => Upshot::Error(error),
            Self::Empty => Upshot::Empty,
        }
    }

    /// Transforms the error payload, leaving the success channel alone.
    pub fn map_error<F, O>(self, op: O) -> Upshot<T, F>
    where
        O: FnOnce(E) -> F,
    {
        match self {
            Self::Success(value) => Upshot::Success(value),
            Self::Error(error) => Upshot::Error(op(error)),
            Self::Empty => Upshot::Empty,
        }
    }

    /// Monadic bind on the success channel.
    ///
    /// A success feeds its payload to `f` and returns `f`'s container
    /// directly, with no nesting. An error short-circuits: `f` is never
    /// invoked and the error payload carries over into the new success type.
    ///
    /// ```rust
    /// use upshot::Upshot;
    ///
    /// fn checked_double(x: f64) -> Upshot<f64, String> {
    ///     if x > 0.0 {
    ///         Upshot::from_value(x * 2.0)
    ///     } else {
    ///         Upshot::from_error("not positive".to_string())
    ///     }
    /// }
    ///
    /// let res: Upshot<f64, String> = Upshot::from_value(4.0);
    /// assert_eq!(res.and_then(checked_double).success(), Some(&8.0));
    /// ```
    pub fn and_then<U, F>(self, f: F) -> Upshot<U, E>
    where
        F: FnOnce(T) -> Upshot<U, E>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Error(error) => Upshot::Error(error),
            Self::Empty => Upshot::Empty,
        }
    }

    /// Monadic bind on the error channel.
    ///
    /// The mirror of [`and_then`](Self::and_then): an error feeds its
    /// payload to `op`, a success short-circuits and carries over into the
    /// new error type.
    pub fn or_else<F, O>(self, op: O) -> Upshot<T, F>
    where
        O: FnOnce(E) -> Upshot<T, F>,
    {
        match self {
            Self::Success(value) => Upshot::Success(value),
            Self::Error(error) => op(error),
            Self::Empty => Upshot::Empty,
        }
    }

    /// Applies `op` to the whole container, state included.
    ///
    /// The only combinator whose callable sees the state directly rather
    /// than a payload, which makes state-remapping possible: collapsing an
    /// error into a different success encoding, for instance.
    pub fn transform<U, F, O>(self, op: O) -> Upshot<U, F>
    where
        O: FnOnce(Self) -> Upshot<U, F>,
    {
        op(self)
    }

    /// Invokes `f` with a reference to the container and returns the
    /// container unchanged. For side effects only; the outcome is never
    /// altered.
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&Self),
    {
        f(&self);
        self
    }
}
