use ark_bn254::{Fr, G1Affine, G2Affine};
use ark_ec::{AffineRepr, CurveGroup};
use ark_ff::Zero;
use kzg_pop_primitives::{
    consts::{BYTES_PER_FIELD_ELEMENT, SIZE_OF_G1_AFFINE_COMPRESSED},
    data::DataPoint,
    digest::DigestKind,
    errors::PossessionError,
    helpers,
    roots,
    traits::ReadFrFromBytes,
    types::{Commitment, EvaluationProof, VerifierKey},
};

extern crate alloc;
use alloc::string::ToString;

/// Checks that `proof` opens `commitment` to `y` at `z`.
///
/// The possession protocol always asks for `y = 0` at a sampled root, but the
/// check itself is the plain KZG opening check and holds for any point.
///
/// # Arguments
///
/// * `vk` - `[tau]G2` from the trusted setup the commitment was made with
/// * `commitment` - The commitment to the root polynomial
/// * `proof` - The evaluation proof for `z`
/// * `z_fr` - The evaluation point, a root for honest provers
/// * `y_fr` - The claimed value of the polynomial at `z_fr`
///
/// # Returns
///
/// `true` only if the pairing check passes. Commitments, proofs or keys that
/// are not valid group elements give `false`, never an error.
///
/// # Examples
///
/// ```rust,no_run
/// use kzg_pop_verifier::verify::verify_possession;
/// use kzg_pop_primitives::types::{Commitment, EvaluationProof, VerifierKey};
/// use ark_bn254::{Fr, G1Affine, G2Affine};
/// use ark_ec::AffineRepr;
/// use ark_ff::Zero;
///
/// let vk = VerifierKey::new(G2Affine::generator()); // Example key
/// let commitment = Commitment(G1Affine::generator());
/// let proof = EvaluationProof(G1Affine::generator());
///
/// if !verify_possession(&vk, &commitment, &proof, &Fr::from(7u64), &Fr::zero()) {
///     println!("possession not established");
/// }
/// ```
pub fn verify_possession(
    vk: &VerifierKey,
    commitment: &Commitment,
    proof: &EvaluationProof,
    z_fr: &Fr,
    y_fr: &Fr,
) -> bool {
    if !helpers::is_valid_g1_point(&commitment.0)
        || !helpers::is_valid_g1_point(&proof.0)
        || !helpers::is_valid_g2_point(&vk.g2_tau)
    {
        return false;
    }

    // [C - y]G1
    let commit_minus_value = (commitment.0 - G1Affine::generator() * y_fr).into_affine();

    // [tau - z]G2
    let x_minus_z = (vk.g2_tau - G2Affine::generator() * z_fr).into_affine();

    // e([C - y]G1, G2) == e(proof, [tau - z]G2)
    helpers::pairings_verify(
        commit_minus_value,
        G2Affine::generator(),
        proof.0,
        x_minus_z,
    )
}

/// Same as [verify_possession] for inputs received over the wire, all in
/// big-endian form: compressed G1 points and 32 byte field elements.
///
/// # Errors
///
/// [PossessionError::SerializationError] when an input does not decode.
/// `z` and `y` must be canonical, below the field modulus. A proof that
/// decodes but does not verify is `Ok(false)`.
pub fn verify_possession_bytes(
    vk: &VerifierKey,
    commitment: &[u8; SIZE_OF_G1_AFFINE_COMPRESSED],
    proof: &[u8; SIZE_OF_G1_AFFINE_COMPRESSED],
    z_fr: &[u8; BYTES_PER_FIELD_ELEMENT],
    y_fr: &[u8; BYTES_PER_FIELD_ELEMENT],
) -> Result<bool, PossessionError> {
    let commitment = Commitment::from_bytes_be(commitment)?;
    let proof = EvaluationProof::from_bytes_be(proof)?;
    let z_fr = Fr::deserialize_from_bytes_be(z_fr)
        .map_err(|_| PossessionError::SerializationError("Failed to deserialize z".to_string()))?;
    let y_fr = Fr::deserialize_from_bytes_be(y_fr)
        .map_err(|_| PossessionError::SerializationError("Failed to deserialize y".to_string()))?;
    Ok(verify_possession(vk, &commitment, &proof, &z_fr, &y_fr))
}

/// Checks a possession claim stated as the data point itself: the verifier
/// hashes `point` into its root and expects the committed polynomial to
/// vanish there.
///
/// `digest` must be the kind the prover was configured with. The root of a
/// byte the prover no longer holds, or of an index that was never sampled,
/// is not a zero of the polynomial and yields `Ok(false)`.
pub fn verify_data_point(
    vk: &VerifierKey,
    commitment: &Commitment,
    proof: &EvaluationProof,
    point: &DataPoint,
    digest: DigestKind,
) -> Result<bool, PossessionError> {
    let z = roots::hash_data_point(point, digest)?;
    Ok(verify_possession(vk, commitment, proof, z.as_fr(), &Fr::zero()))
}

