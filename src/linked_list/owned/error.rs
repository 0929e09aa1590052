use core::error::Error;
use core::fmt;

/// Error returned by a failed insertion.
///
/// Allocating the node wrapper failed; the list is unchanged and the
/// payload travels back to the caller inside the error.
pub struct InsertError<T> {
    data: T,
}

impl<T> InsertError<T> {
    pub(crate) fn new(data: T) -> Self {
        Self { data }
    }

    /// Recover ownership of the payload that could not be inserted.
    pub fn into_data(self) -> T {
        self.data
    }
}

impl<T> fmt::Debug for InsertError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InsertError").finish_non_exhaustive()
    }
}

impl<T> fmt::Display for InsertError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("failed to allocate a list node")
    }
}

impl<T> Error for InsertError<T> {}

/// Error returned by a failed removal. The list is unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveError {
    /// The list has no nodes to remove.
    Empty,
    /// The given position is the tail; nothing follows it.
    NoSuccessor,
}

impl fmt::Display for RemoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoveError::Empty => f.write_str("the list is empty"),
            RemoveError::NoSuccessor => f.write_str("the position has no successor"),
        }
    }
}

impl Error for RemoveError {}
