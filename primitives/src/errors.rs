use thiserror::Error;

// Need to explicitly import alloc because we are in a no-std environment.
extern crate alloc;
use alloc::string::String;

/// Caller mistakes detected before any cryptographic work is attempted.
///
/// These are never retried: the same input always fails the same way.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InputError {
    /// The blob has no content to sample from.
    #[error("cannot sample an empty blob")]
    EmptyBlob,

    #[error("invalid sample count {0}: must be at least 1")]
    InvalidSampleCount(usize),

    #[error("index {index} out of range for blob of {len} bytes")]
    IndexOutOfRange { index: usize, len: usize },

    /// The trusted setup holds fewer G1 powers than the polynomial has
    /// coefficients.
    #[error("trusted setup too small: need {required} G1 points, have {available}")]
    SetupTooSmall { required: usize, available: usize },

    #[error("cannot build a polynomial from an empty root set")]
    EmptyRootSet,

    /// Parallel input slices that must have the same length do not.
    #[error("length mismatch: {0}")]
    LengthMismatch(String),
}

/// Errors produced anywhere in the possession protocol.
///
/// A failed verification is not an error: verifiers return `false`.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum PossessionError {
    /// Wraps caller input errors.
    #[error("input error: {0}")]
    Input(#[from] InputError),

    /// The trusted setup could not be generated.
    #[error("setup generation error: {0}")]
    SetupGenerationError(String),

    /// The evaluation proof could not be produced.
    #[error("proof generation error: {0}")]
    ProofGenerationError(String),

    #[error("MSM error: {0}")]
    MsmError(String),

    /// Error related to serialization with a descriptive message.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// Reading or writing setup or data files failed.
    #[error("io error: {0}")]
    IoError(String),

    /// A generic error with a descriptive message.
    #[error("generic error: {0}")]
    GenericError(String),
}

impl PossessionError {
    /// Returns true when the error stems from invalid caller input rather
    /// than a failing cryptographic collaborator.
    pub fn is_input_error(&self) -> bool {
        matches!(self, PossessionError::Input(_))
    }
}
