//! Generic success/failure outcome used across the library.
//!
//! [`Outcome`] carries either a value or an error. Most of the library works
//! with [`AnyOutcome`], whose error side is the type-erased `anyhow::Error`.
//! Outcomes with a concrete error type have to be widened explicitly before
//! they fit there.
//!
//! ```rust
//! use outcome::{AnyOutcome, Outcome, SomeError};
//!
//! fn consume(outcome: AnyOutcome<i32>) -> bool {
//!     outcome.is_success()
//! }
//!
//! let typed: Outcome<i32, SomeError> = Outcome::failure(SomeError);
//! assert!(!consume(typed.widen()));
//! ```

pub mod error;
pub mod outcome;

pub use error::{Fault, NetworkError, SomeError};
pub use outcome::Outcome;

/// Outcome whose failure is any error at all.
pub type AnyOutcome<V> = Outcome<V, anyhow::Error>;
