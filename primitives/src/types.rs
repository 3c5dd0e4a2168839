use ark_bn254::{G1Affine, G2Affine};

extern crate alloc;
use alloc::string::ToString;

use crate::{
    consts::{SIZE_OF_G1_AFFINE_COMPRESSED, SIZE_OF_G2_AFFINE_COMPRESSED},
    errors::PossessionError,
    helpers,
    traits::ReadPointFromBytes,
};

/// A KZG commitment to a [crate::polynomial::RootPolynomial]: the G1 point
/// `p(tau) * G1`. Published to verifiers in place of the polynomial.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Commitment(pub G1Affine);

/// A KZG evaluation proof: the commitment to the quotient
/// `(p(x) - y) / (x - z)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EvaluationProof(pub G1Affine);

macro_rules! impl_g1_wrapper {
    ($name:ident, $what:literal) => {
        impl $name {
            pub fn point(&self) -> &G1Affine {
                &self.0
            }

            /// Compressed big-endian encoding.
            pub fn to_bytes_be(&self) -> Result<[u8; SIZE_OF_G1_AFFINE_COMPRESSED], PossessionError> {
                helpers::g1_to_bytes_be(&self.0)
            }

            /// Decodes a compressed big-endian point, checking that it is on
            /// the curve and in the prime order subgroup.
            pub fn from_bytes_be(bytes: &[u8]) -> Result<Self, PossessionError> {
                G1Affine::read_point_from_bytes_native_compressed_be(bytes)
                    .map(Self)
                    .map_err(|e| {
                        PossessionError::SerializationError(alloc::format!(
                            "Failed to deserialize {}: {}",
                            $what,
                            e
                        ))
                    })
            }
        }

        impl From<G1Affine> for $name {
            fn from(point: G1Affine) -> Self {
                Self(point)
            }
        }
    };
}

impl_g1_wrapper!(Commitment, "commitment");
impl_g1_wrapper!(EvaluationProof, "proof");

/// The part of a trusted setup a verifier needs: `tau * G2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerifierKey {
    pub g2_tau: G2Affine,
}

impl VerifierKey {
    pub fn new(g2_tau: G2Affine) -> Self {
        Self { g2_tau }
    }

    pub fn to_bytes_be(&self) -> Result<[u8; SIZE_OF_G2_AFFINE_COMPRESSED], PossessionError> {
        helpers::g2_to_bytes_be(&self.g2_tau)
    }

    pub fn from_bytes_be(bytes: &[u8]) -> Result<Self, PossessionError> {
        let g2_tau = G2Affine::read_point_from_bytes_native_compressed_be(bytes).map_err(|_| {
            PossessionError::SerializationError("Failed to deserialize verifier key".to_string())
        })?;
        Ok(Self { g2_tau })
    }
}
