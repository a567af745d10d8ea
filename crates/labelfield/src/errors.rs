//! # Error Types

/// Errors from labelfield operations.
#[derive(Debug, thiserror::Error)]
pub enum LabelFieldError {
    /// A label was encoded which was never observed during setup.
    ///
    /// Labels are closed-vocabulary; there is no unknown-token fallback.
    #[error("unknown label: {label:?}")]
    UnknownLabel {
        /// The label which missed the vocabulary.
        label: String,
    },

    /// Vocab size exceeds the capacity of the target id type.
    #[error("vocab size ({size}) exceeds label id type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// Mutation was attempted after the vocabulary was frozen.
    #[error("vocabulary is frozen")]
    VocabFrozen,
}

/// Result type for labelfield operations.
pub type LFResult<T> = core::result::Result<T, LabelFieldError>;
