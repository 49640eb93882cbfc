use crate::{error::Fault, AnyOutcome};
use log::{debug, warn};
use std::fmt::Debug;

/// Outcome of an operation that either produced a value or failed.
///
/// Exactly one variant is active. Every operation below consumes the outcome
/// and returns a new one, nothing is changed in place.
///
/// The error parameter is not covariant: an `Outcome<V, SomeError>` is never
/// accepted where an [`AnyOutcome<V>`] is expected, even though `SomeError`
/// converts into `anyhow::Error`. Convert explicitly with [`Outcome::widen`]
/// or [`Outcome::map_err`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome<V, E> {
    Success(V),
    Failure(E),
}

impl<V, E: Fault> Outcome<V, E> {
    /// Runs `producer` and captures what it returns.
    ///
    /// ```rust
    /// use outcome::AnyOutcome;
    ///
    /// fn make_int() -> anyhow::Result<i32> {
    ///     Ok(1)
    /// }
    ///
    /// let outcome = AnyOutcome::from_fn(make_int);
    /// assert_eq!(outcome.value(), Some(&1));
    /// ```
    pub fn from_fn<P>(producer: P) -> Self
    where
        P: FnOnce() -> Result<V, E>,
    {
        match producer() {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }

    pub fn success(value: V) -> Self {
        Self::Success(value)
    }

    pub fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    /// Success with `value` when present, otherwise failure with the error
    /// built by `or_error`. `or_error` is only called for `None`.
    pub fn from_option<O>(value: Option<V>, or_error: O) -> Self
    where
        O: FnOnce() -> E,
    {
        match value {
            Some(value) => Self::Success(value),
            None => Self::Failure(or_error()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Success payload, `None` for a failure.
    pub fn value(&self) -> Option<&V> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Failure payload, `None` for a success.
    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    pub fn into_value(self) -> Option<V> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    pub fn into_result(self) -> Result<V, E> {
        self.into()
    }

    /// Applies `op` to the success payload. Failures pass through and `op`
    /// is not called.
    pub fn map<W, O>(self, op: O) -> Outcome<W, E>
    where
        O: FnOnce(V) -> W,
    {
        match self {
            Self::Success(value) => Outcome::Success(op(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Applies a fallible `op` to the success payload. An `Err` returned by
    /// `op` becomes the new failure.
    ///
    /// `op` returns a plain `Result`. To chain into something that already
    /// yields an `Outcome`, use [`Outcome::and_then`].
    pub fn flat_map<W, O>(self, op: O) -> Outcome<W, E>
    where
        O: FnOnce(V) -> Result<W, E>,
    {
        match self {
            Self::Success(value) => Outcome::from_fn(|| op(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Chains into another outcome-producing step, flattening one level.
    pub fn and_then<W, O>(self, op: O) -> Outcome<W, E>
    where
        O: FnOnce(V) -> Outcome<W, E>,
    {
        match self {
            Self::Success(value) => op(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Converts the failure payload. Successes pass through and `op` is not
    /// called.
    pub fn map_err<F, O>(self, op: O) -> Outcome<V, F>
    where
        F: Fault,
        O: FnOnce(E) -> F,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(op(error)),
        }
    }

    /// Like [`Outcome::map_err`], but the conversion itself may fail. Its
    /// error then becomes the failure.
    pub fn try_map_err<F, O>(self, op: O) -> AnyOutcome<V>
    where
        F: Fault,
        O: FnOnce(E) -> anyhow::Result<F>,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => match op(error) {
                Ok(converted) => Outcome::Failure(converted.into()),
                Err(e) => Outcome::Failure(e),
            },
        }
    }

    /// Erases the concrete error type into `anyhow::Error`.
    pub fn widen(self) -> AnyOutcome<V> {
        self.map_err(Into::into)
    }

    pub fn inspect<O>(self, op: O) -> Self
    where
        O: FnOnce(&V),
    {
        if let Self::Success(value) = &self {
            op(value);
        }
        self
    }

    pub fn inspect_err<O>(self, op: O) -> Self
    where
        O: FnOnce(&E),
    {
        if let Self::Failure(error) = &self {
            op(error);
        }
        self
    }

    /// Logs the outcome under `label` and hands it back untouched.
    pub fn traced(self, label: &str) -> Self
    where
        V: Debug,
    {
        match &self {
            Self::Success(value) => debug!("{} - success: {:?}", label, value),
            Self::Failure(error) => warn!("{} - failure: {}", label, error),
        }
        self
    }
}

impl<V, E> Outcome<V, E> {
    /// Borrows both payloads, keeping the active variant.
    ///
    /// `&E` is not a [`Fault`], so the borrowed outcome only supports
    /// matching, not the combinators above.
    pub fn as_ref(&self) -> Outcome<&V, &E> {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }
}

impl<V, E: Fault> From<Result<V, E>> for Outcome<V, E> {
    fn from(result: Result<V, E>) -> Self {
        Self::from_fn(|| result)
    }
}

impl<V, E: Fault> From<Outcome<V, E>> for Result<V, E> {
    fn from(outcome: Outcome<V, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}
