use serde::{Deserialize, Serialize};
use sha2::Sha256;
use sha3::{Digest, Keccak256};

use crate::consts::DIGEST_SIZE;

/// Collision resistant hash used both to seed the sampler and to derive
/// roots. A prover and its verifiers must agree on the kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DigestKind {
    #[default]
    Keccak256,
    Sha256,
}

impl DigestKind {
    /// Hashes the concatenation of `parts` without copying them into one
    /// buffer first.
    pub fn digest(&self, parts: &[&[u8]]) -> [u8; DIGEST_SIZE] {
        match self {
            DigestKind::Keccak256 => finalize::<Keccak256>(parts),
            DigestKind::Sha256 => finalize::<Sha256>(parts),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DigestKind::Keccak256 => "keccak256",
            DigestKind::Sha256 => "sha256",
        }
    }

    /// Parses the names returned by [DigestKind::name].
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "keccak256" => Some(DigestKind::Keccak256),
            "sha256" => Some(DigestKind::Sha256),
            _ => None,
        }
    }
}

fn finalize<D: Digest>(parts: &[&[u8]]) -> [u8; DIGEST_SIZE] {
    let mut hasher = D::new();
    for part in parts {
        hasher.update(part);
    }
    let mut out = [0u8; DIGEST_SIZE];
    out.copy_from_slice(&hasher.finalize()[..DIGEST_SIZE]);
    out
}
