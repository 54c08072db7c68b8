#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! # Upshot
//!
//! A tri-state result container with monadic combinators.
//!
//! [`Upshot<T, E>`] holds either a success payload of type `T`, an error
//! payload of type `E`, or nothing at all (the empty state, the residue of
//! a [`take`](Upshot::take)). Outcomes propagate through chainable
//! transformations instead of early returns:
//!
//! ```rust
//! use upshot::Upshot;
//!
//! fn div(a: f64, b: f64) -> Upshot<f64, String> {
//!     if b == 0.0 {
//!         Upshot::from_error("Division by zero error".to_string())
//!     } else {
//!         Upshot::from_value(a / b)
//!     }
//! }
//!
//! let squared = div(12.0, 3.0)
//!     .and_then(|x| {
//!         if x > 0.0 {
//!             Upshot::from_value(x * 2.0)
//!         } else {
//!             Upshot::from_error("negative".to_string())
//!         }
//!     })
//!     .map(|y| y * y);
//!
//! assert_eq!(squared.success(), Some(&64.0));
//! ```
//!
//! This crate provides:
//! - [`Upshot`] -- the container, its constructors and accessors
//! - [`UpshotState`] -- the payload-free empty/success/error discriminant
//! - [`AccessError`] -- failures from accessing a payload that is not there
//! - [`IntoUpshot`] -- extension trait pulling `std` results into the container
//!
//! The container is a plain value type: no interior mutability, no locking,
//! no I/O. Combinators always build a fresh container; the only operation
//! that mutates in place is [`take`](Upshot::take), which moves the payload
//! out and leaves the source empty.

mod combinators;
mod convert;
mod display;
mod error;
mod state;
mod upshot;

pub use convert::IntoUpshot;
pub use error::AccessError;
pub use state::UpshotState;
pub use upshot::Upshot;

/// Convenient prelude with everything you need.
pub mod prelude {
    pub use super::{AccessError, IntoUpshot, Upshot, UpshotState};
}
