use serde::{Deserialize, Serialize};

use crate::{consts::DEFAULT_SAMPLE_COUNT, digest::DigestKind, errors::InputError};

/// Protocol parameters a prover and its verifiers agree on up front.
///
/// Every field has a default, so a partial document such as
/// `{"sample_count": 16}` deserializes into a complete configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PossessionConfig {
    /// Number of byte positions sampled per blob. Also the degree of the
    /// committed polynomial, so the trusted setup needs `sample_count + 1`
    /// G1 points.
    pub sample_count: usize,
    /// Hash used for seeding and for root derivation.
    pub digest: DigestKind,
}

impl Default for PossessionConfig {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
            digest: DigestKind::default(),
        }
    }
}

impl PossessionConfig {
    pub fn new(sample_count: usize, digest: DigestKind) -> Self {
        Self {
            sample_count,
            digest,
        }
    }

    pub fn validate(&self) -> Result<(), InputError> {
        if self.sample_count == 0 {
            return Err(InputError::InvalidSampleCount(self.sample_count));
        }
        Ok(())
    }

    /// Number of G1 points a trusted setup must provide to commit under this
    /// configuration.
    pub fn required_setup_size(&self) -> usize {
        self.sample_count + 1
    }
}
