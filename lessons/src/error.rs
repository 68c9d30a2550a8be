//! Errors raised by the demos.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LessonError {
    /// An operation was invoked on a variant that does not provide it.
    ///
    /// `Super::delegate` relies on `action`, which only some variants define.
    #[error("{variant} does not provide `{capability}`")]
    MissingCapability {
        variant: &'static str,
        capability: &'static str,
    },

    /// A process-wide binding was read before anything assigned it.
    #[error("`{name}` is read before it is assigned")]
    Unset { name: &'static str },

    #[error("write demo output")]
    Io(#[from] io::Error),
}

pub type Result<T, E = LessonError> = std::result::Result<T, E>;
