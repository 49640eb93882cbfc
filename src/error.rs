use std::fmt::{Debug, Display};

/// Capability every failure payload of an [`Outcome`](crate::Outcome) must have.
///
/// A fault is anything that can be turned into the crate's general error,
/// `anyhow::Error`. That covers every `std::error::Error + Send + Sync + 'static`
/// and `anyhow::Error` itself.
pub trait Fault: Into<anyhow::Error> + Debug + Display {}

impl<E> Fault for E where E: Into<anyhow::Error> + Debug + Display {}

/// Unit error with no payload, used wherever "something failed" is all
/// there is to say.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[error("some error")]
pub struct SomeError;

/// Typed failures a transport can report.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NetworkError {
    #[error("request timed out")]
    Timeout,

    #[error("unexpected status code: {0}")]
    Status(u16),
}
