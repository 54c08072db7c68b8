//! Channel re-typing and `std` interop.

use crate::upshot::Upshot;

impl<T, E> Upshot<T, E> {
    /// Re-types the success channel through a `From` conversion.
    ///
    /// Only the currently active payload is ever converted: an error or an
    /// empty container passes through with its payload untouched, the same
    /// way [`map`](Self::map) recasts the inactive channel.
    ///
    /// ```rust
    /// use upshot::Upshot;
    ///
    /// let narrow: Upshot<u16, String> = Upshot::from_value(8080);
    /// let wide: Upshot<u32, String> = narrow.convert();
    /// assert_eq!(wide.success(), Some(&8080));
    /// ```
    pub fn convert<U>(self) -> Upshot<U, E>
    where
        U: From<T>,
    {
        self.map(U::from)
    }

    /// Re-types the error channel through a `From` conversion.
    pub fn convert_error<F>(self) -> Upshot<T, F>
    where
        F: From<E>,
    {
        self.map_error(F::from)
    }

    /// Converts into a `std` result, `None` for the empty state.
    ///
    /// The binary `Result` has no spelling for a container that holds
    /// nothing, so emptiness surfaces as the absence of a result rather
    /// than as either channel.
    pub fn into_result(self) -> Option<Result<T, E>> {
        match self {
            Self::Success(value) => Some(Ok(value)),
            Self::Error(error) => Some(Err(error)),
            Self::Empty => None,
        }
    }
}

impl<T, E> From<Result<T, E>> for Upshot<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Error(error),
        }
    }
}

/// Extension trait pulling `std` results into the tri-state container.
///
/// ```rust
/// use upshot::IntoUpshot;
///
/// let parsed = "8080".parse::<u16>().into_upshot();
/// assert_eq!(parsed.success(), Some(&8080));
/// ```
pub trait IntoUpshot<T, E> {
    /// Converts `self` into an [`Upshot`].
    fn into_upshot(self) -> Upshot<T, E>;
}

impl<T, E> IntoUpshot<T, E> for Result<T, E> {
    fn into_upshot(self) -> Upshot<T, E> {
        self.into()
    }
}
