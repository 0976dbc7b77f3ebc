//!A mod for the error types
use std::fmt::Debug;

use thiserror::Error;

use crate::range::OutOfRange;

///Errors from a [`crate::Pca9685`] operation. `E` is the error type of the underlying transport.
///
/// Validation errors are always returned before any bus traffic. A transport error in the middle of a
/// multi-write sequence leaves the device with whatever the completed writes produced.
#[derive(Debug, Error)]
pub enum Error<E: Debug> {
    #[error("cannot determine I2C bus number: no bus found")]
    NoBusFound,
    #[error(transparent)]
    OutOfRange(#[from] OutOfRange),
    #[error("unknown channel selector: '{0}'")]
    UnknownSelector(String),
    #[error("transport error: {0:?}")]
    Transport(E),
}

impl<E: Debug> Error<E> {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::OutOfRange(_) | Self::UnknownSelector(_))
    }
}

impl<E: Debug> From<crate::selector::UnknownSelector> for Error<E> {
    fn from(err: crate::selector::UnknownSelector) -> Self {
        Self::UnknownSelector(err.0)
    }
}
