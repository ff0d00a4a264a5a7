use thiserror::Error;

/// The error type returned by every fallible list operation.
///
/// Both variants are contract violations on the caller's side: nothing is
/// mutated before one of them is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListError {
    /// A front/back access, a removal or an indexed read hit an empty list.
    #[error("list is empty")]
    EmptyList,
    /// The index is outside the valid range for the requested operation.
    #[error("bad index: {0}")]
    BadIndex(usize),
}
