use derive_more::Display;
use serde::{Deserialize, Serialize};
use shardkit_core::error::{ErrorClass, ErrorOrigin as CoreErrorOrigin, InternalError};
use thiserror::Error as ThisError;

///
/// Error
/// Public error type with a stable kind + origin taxonomy.
///

#[derive(Debug, Deserialize, Serialize, ThisError)]
#[error("{message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub origin: ErrorOrigin,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            kind,
            origin,
            message: message.into(),
        }
    }
}

impl From<InternalError> for Error {
    fn from(err: InternalError) -> Self {
        let kind = match err.class {
            ErrorClass::ShapeViolation => ErrorKind::InvalidStatement,
            ErrorClass::ContractViolation => ErrorKind::Contract,
            ErrorClass::Config => ErrorKind::Config,
            ErrorClass::InvariantViolation | ErrorClass::Internal => ErrorKind::Internal,
        };

        Self::new(kind, err.origin.into(), err.message)
    }
}

///
/// ErrorKind
/// Public error taxonomy for callers.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum ErrorKind {
    /// The statement cannot be rewritten as written.
    InvalidStatement,

    /// The caller broke the calling contract (parameter binding, column access).
    Contract,

    /// Rule configuration is invalid.
    Config,

    /// The caller cannot remediate this.
    Internal,
}

///
/// ErrorOrigin
/// Public origin taxonomy for callers.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
pub enum ErrorOrigin {
    Parse,
    Route,
    Rewrite,
    Encrypt,
    Merge,
    Config,
}

impl From<CoreErrorOrigin> for ErrorOrigin {
    fn from(origin: CoreErrorOrigin) -> Self {
        match origin {
            CoreErrorOrigin::Parse => Self::Parse,
            CoreErrorOrigin::Route => Self::Route,
            CoreErrorOrigin::Rewrite => Self::Rewrite,
            CoreErrorOrigin::Encrypt => Self::Encrypt,
            CoreErrorOrigin::Merge => Self::Merge,
            CoreErrorOrigin::Config => Self::Config,
        }
    }
}
