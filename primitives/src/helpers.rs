use ark_bn254::{Bn254, Fr, G1Affine, G1Projective, G2Affine};
use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup, VariableBaseMSM};
use ark_ff::{BigInteger, PrimeField};
use ark_serialize::CanonicalSerialize;
use ark_std::{One, Zero};
use sha2::{Digest, Sha256};

extern crate alloc;
use alloc::string::ToString;
use alloc::vec::Vec;

use crate::{
    consts::{
        BYTES_PER_FIELD_ELEMENT, SIZE_OF_G1_AFFINE_COMPRESSED, SIZE_OF_G2_AFFINE_COMPRESSED,
    },
    errors::PossessionError,
};

/// For a given field element x, computes [1, x, x², x³, ..., x^(count-1)]
///
/// # Arguments
/// * `base` - The field element to compute powers of
/// * `count` - The number of powers to compute (0 to count-1)
///
/// # Returns
/// * Vector of field elements containing powers: [x⁰, x¹, x², ..., x^(count-1)]
pub fn compute_powers(base: &Fr, count: usize) -> Vec<Fr> {
    let mut powers = Vec::with_capacity(count);
    let mut current = Fr::one();
    for _ in 0..count {
        powers.push(current);
        current *= base;
    }
    powers
}

/// Computes a linear combination of G1 points weighted by scalar coefficients.
///
/// Given points P₁, P₂, ..., Pₙ and scalars s₁, s₂, ..., sₙ
/// Computes: s₁P₁ + s₂P₂ + ... + sₙPₙ
/// Uses Multi-Scalar Multiplication (MSM) for efficient computation.
pub fn g1_lincomb(points: &[G1Affine], scalars: &[Fr]) -> Result<G1Affine, PossessionError> {
    let lincomb =
        G1Projective::msm(points, scalars).map_err(|e| PossessionError::MsmError(e.to_string()))?;
    Ok(lincomb.into_affine())
}

/// Maps a byte slice to a field element (`Fr`) using SHA-256 as the hash
/// function, reducing the digest modulo the field order.
pub fn hash_to_field_element(msg: &[u8]) -> Fr {
    let msg_digest = Sha256::digest(msg);
    Fr::from_be_bytes_mod_order(msg_digest.as_slice())
}

/// Checks `e(a1, a2) == e(b1, b2)` with a single multi pairing.
pub fn pairings_verify(a1: G1Affine, a2: G2Affine, b1: G1Affine, b2: G2Affine) -> bool {
    let neg_b1 = -b1;
    let p = [a1, neg_b1];
    let q = [a2, b2];
    let result = Bn254::multi_pairing(p, q);
    result.is_zero()
}

/// True when `point` lies on the curve and in the prime order subgroup.
/// The point at infinity is accepted: it is the commitment of the zero
/// polynomial.
pub fn is_valid_g1_point(point: &G1Affine) -> bool {
    point.is_zero() || (point.is_on_curve() && point.is_in_correct_subgroup_assuming_on_curve())
}

/// Same as [is_valid_g1_point] for G2. The identity is rejected because a
/// verifier key of zero makes every pairing check trivially satisfiable.
pub fn is_valid_g2_point(point: &G2Affine) -> bool {
    !point.is_zero() && point.is_on_curve() && point.is_in_correct_subgroup_assuming_on_curve()
}

/// Serializes `point` in arkworks compressed form, big-endian.
pub fn g1_to_bytes_be(point: &G1Affine) -> Result<[u8; SIZE_OF_G1_AFFINE_COMPRESSED], PossessionError> {
    let mut bytes = Vec::with_capacity(SIZE_OF_G1_AFFINE_COMPRESSED);
    point
        .serialize_compressed(&mut bytes)
        .map_err(|_| PossessionError::SerializationError("Failed to serialize G1 point".to_string()))?;
    let mut out = [0u8; SIZE_OF_G1_AFFINE_COMPRESSED];
    out.copy_from_slice(&bytes);
    out.reverse();
    Ok(out)
}

/// Serializes `point` in arkworks compressed form, big-endian.
pub fn g2_to_bytes_be(point: &G2Affine) -> Result<[u8; SIZE_OF_G2_AFFINE_COMPRESSED], PossessionError> {
    let mut bytes = Vec::with_capacity(SIZE_OF_G2_AFFINE_COMPRESSED);
    point
        .serialize_compressed(&mut bytes)
        .map_err(|_| PossessionError::SerializationError("Failed to serialize G2 point".to_string()))?;
    let mut out = [0u8; SIZE_OF_G2_AFFINE_COMPRESSED];
    out.copy_from_slice(&bytes);
    out.reverse();
    Ok(out)
}

/// Returns the 32 byte big-endian encoding of `fr`.
pub fn fr_to_bytes_be(fr: &Fr) -> [u8; BYTES_PER_FIELD_ELEMENT] {
    let bytes = fr.into_bigint().to_bytes_be();
    let mut out = [0u8; BYTES_PER_FIELD_ELEMENT];
    out[BYTES_PER_FIELD_ELEMENT - bytes.len()..].copy_from_slice(&bytes);
    out
}

pub fn usize_to_be_bytes(number: usize) -> [u8; 8] {
    (number as u64).to_be_bytes()
}
