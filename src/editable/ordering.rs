//! Total order shared by positions and ranges.

use std::cmp::Ordering;

use crate::error::EditError;

/// A type with a fallible total order.
///
/// Only [`Ordered::compare`] is required. Comparing values that belong to
/// different buffers fails with [`EditError::CrossBuffer`], and so does every
/// provided method built on top of it.
pub trait Ordered {
    fn compare(&self, other: &Self) -> Result<Ordering, EditError>;

    fn is_equal(&self, other: &Self) -> Result<bool, EditError> {
        Ok(self.compare(other)? == Ordering::Equal)
    }

    fn is_lower(&self, other: &Self) -> Result<bool, EditError> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    fn is_greater(&self, other: &Self) -> Result<bool, EditError> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    /// `self` if strictly lower, otherwise `other`
    fn min<'a>(&'a self, other: &'a Self) -> Result<&'a Self, EditError> {
        Ok(if self.is_lower(other)? { self } else { other })
    }

    /// `self` if strictly greater, otherwise `other`
    fn max<'a>(&'a self, other: &'a Self) -> Result<&'a Self, EditError> {
        Ok(if self.is_greater(other)? { self } else { other })
    }
}
