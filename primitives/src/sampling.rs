use rand_chacha::{
    rand_core::{RngCore, SeedableRng},
    ChaCha20Rng,
};

use crate::{
    consts::DIGEST_SIZE,
    data::DataBlob,
    digest::DigestKind,
    errors::InputError,
};

extern crate alloc;
use alloc::vec::Vec;

/// The ordered byte positions sampled from one blob.
///
/// Positions are drawn independently, so duplicates are possible and simply
/// produce duplicate roots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SampleSet {
    indices: Vec<usize>,
}

impl SampleSet {
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns the blob index stored at sample `position`.
    pub fn get(&self, position: usize) -> Option<usize> {
        self.indices.get(position).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &usize> {
        self.indices.iter()
    }
}

/// Derives the sampler seed: `digest(identity || content)`.
pub fn compute_seed(blob: &DataBlob, digest: DigestKind) -> [u8; DIGEST_SIZE] {
    digest.digest(&[blob.identity().as_bytes(), blob.content()])
}

/// Draws `sample_count` positions from `blob`.
///
/// The PRNG is a ChaCha20 stream seeded with the full seed digest and lives
/// only for the duration of this call, so the result depends on nothing but
/// `(identity, content, sample_count, digest)`.
///
/// # Errors
/// - [InputError::InvalidSampleCount] if `sample_count` is zero.
/// - [InputError::EmptyBlob] if the blob has no content.
pub fn generate_sample_indices(
    blob: &DataBlob,
    sample_count: usize,
    digest: DigestKind,
) -> Result<SampleSet, InputError> {
    if sample_count == 0 {
        return Err(InputError::InvalidSampleCount(sample_count));
    }
    if blob.is_empty() {
        return Err(InputError::EmptyBlob);
    }

    let mut rng = ChaCha20Rng::from_seed(compute_seed(blob, digest));
    let len = blob.len() as u64;
    let indices = (0..sample_count)
        .map(|_| (rng.next_u64() % len) as usize)
        .collect();

    Ok(SampleSet { indices })
}

impl From<SampleSet> for Vec<usize> {
    fn from(samples: SampleSet) -> Self {
        samples.indices
    }
}
