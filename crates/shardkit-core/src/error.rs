use crate::{
    encrypt::{EncryptConfigError, EncryptError},
    merge::PaginationError,
    model::TablesError,
    rewrite::insert::InsertShapeError,
    statement::ParameterError,
};
use std::fmt;
use thiserror::Error as ThisError;

///
/// InternalError
///
/// Structured runtime error with a stable internal classification.
/// Every failure raised by the core is synchronous and surfaces before any
/// row is streamed; cursor exhaustion and absent route values never land here.
///

#[derive(Debug, ThisError)]
#[error("{message}")]
pub struct InternalError {
    pub class: ErrorClass,
    pub origin: ErrorOrigin,
    pub message: String,

    /// Optional structured error detail.
    /// The variant (if present) must correspond to `class`.
    pub detail: Option<ErrorDetail>,
}

impl InternalError {
    /// Construct an InternalError without structured detail.
    pub fn new(class: ErrorClass, origin: ErrorOrigin, message: impl Into<String>) -> Self {
        Self {
            class,
            origin,
            message: message.into(),
            detail: None,
        }
    }

    // Construct an error whose message is rendered from its detail payload.
    fn with_detail(class: ErrorClass, origin: ErrorOrigin, detail: ErrorDetail) -> Self {
        Self {
            class,
            origin,
            message: detail.to_string(),
            detail: Some(detail),
        }
    }

    /// Map a placeholder resolution failure raised at `origin`.
    ///
    /// Out-of-range indexes are integration bugs, never user data errors.
    pub(crate) fn from_parameter_error(origin: ErrorOrigin, err: ParameterError) -> Self {
        Self::with_detail(
            ErrorClass::ContractViolation,
            origin,
            ErrorDetail::Parameter(err),
        )
    }

    /// Construct a merge-origin invariant violation.
    pub(crate) fn merge_invariant(message: impl Into<String>) -> Self {
        Self::new(
            ErrorClass::InvariantViolation,
            ErrorOrigin::Merge,
            message.into(),
        )
    }

    /// Construct a rewrite-origin invariant violation.
    pub(crate) fn rewrite_invariant(message: impl Into<String>) -> Self {
        Self::new(
            ErrorClass::InvariantViolation,
            ErrorOrigin::Rewrite,
            message.into(),
        )
    }

    /// Construct a merge-origin contract violation (caller asked for something
    /// the merged result does not expose).
    pub(crate) fn merge_contract(message: impl Into<String>) -> Self {
        Self::new(
            ErrorClass::ContractViolation,
            ErrorOrigin::Merge,
            message.into(),
        )
    }

    /// Construct a merge-origin internal error, typically raised by a shard cursor.
    pub fn merge_internal(message: impl Into<String>) -> Self {
        Self::new(ErrorClass::Internal, ErrorOrigin::Merge, message.into())
    }

    #[must_use]
    pub const fn is_shape_violation(&self) -> bool {
        matches!(self.class, ErrorClass::ShapeViolation)
    }

    #[must_use]
    pub const fn is_contract_violation(&self) -> bool {
        matches!(self.class, ErrorClass::ContractViolation)
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}:{}: {}", self.origin, self.class, self.message)
    }
}

impl From<TablesError> for InternalError {
    fn from(err: TablesError) -> Self {
        Self::with_detail(
            ErrorClass::ShapeViolation,
            ErrorOrigin::Parse,
            ErrorDetail::Tables(err),
        )
    }
}

impl From<InsertShapeError> for InternalError {
    fn from(err: InsertShapeError) -> Self {
        Self::with_detail(
            ErrorClass::ShapeViolation,
            ErrorOrigin::Rewrite,
            ErrorDetail::InsertShape(err),
        )
    }
}

impl From<PaginationError> for InternalError {
    fn from(err: PaginationError) -> Self {
        Self::with_detail(
            ErrorClass::ShapeViolation,
            ErrorOrigin::Merge,
            ErrorDetail::Pagination(err),
        )
    }
}

impl From<EncryptConfigError> for InternalError {
    fn from(err: EncryptConfigError) -> Self {
        Self::with_detail(
            ErrorClass::Config,
            ErrorOrigin::Config,
            ErrorDetail::EncryptConfig(err),
        )
    }
}

impl From<EncryptError> for InternalError {
    fn from(err: EncryptError) -> Self {
        Self::with_detail(
            ErrorClass::Internal,
            ErrorOrigin::Encrypt,
            ErrorDetail::Encrypt(err),
        )
    }
}

///
/// ErrorDetail
///
/// Structured, module-specific error detail carried by [`InternalError`].
///

#[derive(Debug, ThisError)]
pub enum ErrorDetail {
    #[error("{0}")]
    Tables(TablesError),
    #[error("{0}")]
    Parameter(ParameterError),
    #[error("{0}")]
    InsertShape(InsertShapeError),
    #[error("{0}")]
    Pagination(PaginationError),
    #[error("{0}")]
    EncryptConfig(EncryptConfigError),
    #[error("{0}")]
    Encrypt(EncryptError),
}

///
/// ErrorClass
/// Internal error taxonomy for runtime classification.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorClass {
    /// The statement cannot be rewritten as written (arity, schemas, pagination).
    ShapeViolation,
    /// A collaborator broke the calling contract (placeholder index out of range).
    ContractViolation,
    InvariantViolation,
    Config,
    Internal,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::ShapeViolation => "shape_violation",
            Self::ContractViolation => "contract_violation",
            Self::InvariantViolation => "invariant_violation",
            Self::Config => "config",
            Self::Internal => "internal",
        };
        write!(f, "{label}")
    }
}

///
/// ErrorOrigin
/// Internal origin taxonomy for runtime classification.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorOrigin {
    Parse,
    Route,
    Rewrite,
    Encrypt,
    Merge,
    Config,
}

impl fmt::Display for ErrorOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Parse => "parse",
            Self::Route => "route",
            Self::Rewrite => "rewrite",
            Self::Encrypt => "encrypt",
            Self::Merge => "merge",
            Self::Config => "config",
        };
        write!(f, "{label}")
    }
}
