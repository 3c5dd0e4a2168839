use ark_bn254::Fr;
use ark_ff::{BigInteger, PrimeField};

use crate::{
    consts::DIGEST_SIZE,
    data::{DataBlob, DataPoint},
    digest::DigestKind,
    errors::PossessionError,
    sampling::SampleSet,
};

extern crate alloc;
use alloc::vec::Vec;

/// A bn254 scalar derived from one hashed [DataPoint]; a zero of the
/// committed polynomial.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Root(Fr);

impl Root {
    /// Interprets `digest` as a big-endian integer reduced modulo the
    /// scalar field order. The reduction keeps every root a valid field
    /// element whatever the hash output.
    pub fn from_digest(digest: &[u8; DIGEST_SIZE]) -> Self {
        Root(Fr::from_be_bytes_mod_order(digest))
    }

    pub fn as_fr(&self) -> &Fr {
        &self.0
    }

    pub fn to_fr(self) -> Fr {
        self.0
    }

    /// Big-endian bytes of the reduced root.
    pub fn to_bytes_be(&self) -> Vec<u8> {
        self.0.into_bigint().to_bytes_be()
    }
}

impl From<Root> for Fr {
    fn from(root: Root) -> Self {
        root.0
    }
}

/// The roots for a whole [SampleSet], in sample order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RootSet {
    roots: Vec<Root>,
}

impl RootSet {
    pub fn new(roots: Vec<Root>) -> Self {
        RootSet { roots }
    }

    pub fn roots(&self) -> &[Root] {
        &self.roots
    }

    pub fn len(&self) -> usize {
        self.roots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Root> {
        self.roots.get(position)
    }

    pub fn contains(&self, root: &Root) -> bool {
        self.roots.contains(root)
    }

    pub fn to_fr_vec(&self) -> Vec<Fr> {
        self.roots.iter().map(|root| root.to_fr()).collect()
    }
}

/// Hashes the canonical encoding of `point` into a [Root].
pub fn hash_data_point(point: &DataPoint, digest: DigestKind) -> Result<Root, PossessionError> {
    let encoded = point.canonical_encoding()?;
    Ok(Root::from_digest(&digest.digest(&[&encoded])))
}

/// Derives the root for the byte of `blob` at `index`.
///
/// # Errors
/// [crate::errors::InputError::IndexOutOfRange] if `index` is not a
/// position of the blob.
pub fn derive_root(blob: &DataBlob, index: usize, digest: DigestKind) -> Result<Root, PossessionError> {
    let point = blob.data_point(index)?;
    hash_data_point(&point, digest)
}

/// Derives every root of `samples` sequentially. The prover crate has a
/// parallel variant producing the same set.
pub fn derive_roots(
    blob: &DataBlob,
    samples: &SampleSet,
    digest: DigestKind,
) -> Result<RootSet, PossessionError> {
    let roots = samples
        .iter()
        .map(|&index| derive_root(blob, index, digest))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(RootSet::new(roots))
}
