use crate::{error::InternalError, value::Value};

///
/// MergedResult
///
/// Pull-based cursor over logically merged rows. Decorators own exactly one
/// inner merged result, so a chain is linear and single-owner.
///
/// Not reentrant: one caller drives `advance` at a time.
///

pub trait MergedResult {
    /// Move to the next logical row; `Ok(false)` is the normal end of stream.
    fn advance(&mut self) -> Result<bool, InternalError>;

    /// 0-based column access, valid only after `advance` returned `true`.
    fn value(&self, column_index: usize) -> Result<&Value, InternalError>;
}

pub type MergedResultBox = Box<dyn MergedResult>;

impl<T> MergedResult for Box<T>
where
    T: MergedResult + ?Sized,
{
    fn advance(&mut self) -> Result<bool, InternalError> {
        self.as_mut().advance()
    }

    fn value(&self, column_index: usize) -> Result<&Value, InternalError> {
        self.as_ref().value(column_index)
    }
}

impl<T> MergedResult for &mut T
where
    T: MergedResult + ?Sized,
{
    fn advance(&mut self) -> Result<bool, InternalError> {
        (**self).advance()
    }

    fn value(&self, column_index: usize) -> Result<&Value, InternalError> {
        (**self).value(column_index)
    }
}
