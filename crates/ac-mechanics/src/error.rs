/// Alias for `Result<T, MechError>`.
pub type MechResult<T> = Result<T, MechError>;

/// Errors that can occur during dice resolution.
///
/// The resolver never fabricates or repairs a draw: any misbehavior of the
/// injected die roller surfaces here. Nothing is retried inside the engine;
/// retry policy belongs to the caller.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// The randomness source could not produce the requested draw.
    #[error("die roller unavailable: {0}")]
    RollUnavailable(String),

    /// The roller returned a different number of dice than requested.
    #[error("die roller returned {got} dice, requested {requested}")]
    ShortDraw {
        /// How many dice were requested.
        requested: u32,
        /// How many the roller actually returned.
        got: usize,
    },

    /// The roller returned a face outside 1..=6.
    #[error("die face {0} outside 1..=6")]
    FaceOutOfRange(u8),
}
