/// Alias for `Result<T, AcError>`.
pub type AcResult<T> = Result<T, AcError>;

/// Errors that can occur when ingesting character data.
#[derive(Debug, thiserror::Error)]
pub enum AcError {
    /// A field that must hold an integer held something else
    /// (a fractional number, a non-finite number, or a non-numeric value).
    #[error("invalid input in field \"{field}\": expected an integer")]
    InvalidInput {
        /// Dotted path of the offending field in the source document.
        field: String,
    },
}
