use crate::value::Value;
use thiserror::Error as ThisError;

///
/// ParameterError
///
/// Placeholder resolution failures. These indicate a parser/driver
/// integration bug, never bad user data.
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum ParameterError {
    #[error("parameter marker index {index} is out of bounds for {len} bound parameters")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Resolve the 0-based placeholder `index` against the bound parameters.
pub fn resolve_parameter(parameters: &[Value], index: usize) -> Result<&Value, ParameterError> {
    parameters
        .get(index)
        .ok_or(ParameterError::IndexOutOfBounds {
            index,
            len: parameters.len(),
        })
}
