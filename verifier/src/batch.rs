use ark_bn254::{Fr, G1Affine, G2Affine};
use ark_ec::{AffineRepr, CurveGroup};
use kzg_pop_primitives::{
    consts::{
        BYTES_PER_FIELD_ELEMENT, RANDOM_CHALLENGE_POP_BATCH_DOMAIN, SIZE_OF_G1_AFFINE_COMPRESSED,
    },
    errors::{InputError, PossessionError},
    helpers::{self, usize_to_be_bytes},
    types::{Commitment, EvaluationProof, VerifierKey},
};

extern crate alloc;
use alloc::{format, vec::Vec};

/// Derives the batching weights `[r^0, r^1, ..., r^(n-1)]` by hashing every
/// input of the batch, so a prover cannot pick proofs that cancel out.
///
/// Transcript layout:
/// `domain (24) || n (8) || for each i: commitment || z || y || proof`,
/// points compressed big-endian, scalars 32 bytes big-endian.
fn compute_r_powers(
    commitments: &[Commitment],
    proofs: &[EvaluationProof],
    zs: &[Fr],
    ys: &[Fr],
) -> Result<Vec<Fr>, PossessionError> {
    let n = commitments.len();
    let entry_size = 2 * SIZE_OF_G1_AFFINE_COMPRESSED + 2 * BYTES_PER_FIELD_ELEMENT;
    let input_size = RANDOM_CHALLENGE_POP_BATCH_DOMAIN.len() + 8 + n * entry_size;

    let mut data_to_be_hashed: Vec<u8> = Vec::with_capacity(input_size);
    data_to_be_hashed.extend_from_slice(RANDOM_CHALLENGE_POP_BATCH_DOMAIN);
    data_to_be_hashed.extend_from_slice(&usize_to_be_bytes(n));

    for i in 0..n {
        data_to_be_hashed.extend_from_slice(&commitments[i].to_bytes_be()?);
        data_to_be_hashed.extend_from_slice(&helpers::fr_to_bytes_be(&zs[i]));
        data_to_be_hashed.extend_from_slice(&helpers::fr_to_bytes_be(&ys[i]));
        data_to_be_hashed.extend_from_slice(&proofs[i].to_bytes_be()?);
    }

    if data_to_be_hashed.len() != input_size {
        return Err(PossessionError::GenericError(format!(
            "batch transcript is {} bytes, expected {}",
            data_to_be_hashed.len(),
            input_size
        )));
    }

    let r = helpers::hash_to_field_element(&data_to_be_hashed);
    Ok(helpers::compute_powers(&r, n))
}

/// Verifies many possession proofs, possibly against different commitments,
/// with two pairings instead of two per proof.
///
/// With weights `r^i` from [compute_r_powers] it checks
/// `e(sum r^i proof_i, [tau]G2) == e(sum r^i (C_i - [y_i]G1 + z_i proof_i), G2)`,
/// which holds for all proofs if each one verifies, and for a batch holding
/// an invalid proof only with negligible probability.
///
/// # Returns
///
/// * `Ok(true)` if every proof is valid. An empty batch is valid.
/// * `Ok(false)` if any proof is invalid or any point is not a valid group
///   element.
/// * `Err(PossessionError)` if the input slices differ in length.
pub fn verify_possession_batch(
    vk: &VerifierKey,
    commitments: &[Commitment],
    proofs: &[EvaluationProof],
    zs: &[Fr],
    ys: &[Fr],
) -> Result<bool, PossessionError> {
    let n = commitments.len();
    if !(proofs.len() == n && zs.len() == n && ys.len() == n) {
        return Err(InputError::LengthMismatch(format!(
            "{} commitments, {} proofs, {} zs, {} ys",
            n,
            proofs.len(),
            zs.len(),
            ys.len()
        ))
        .into());
    }
    if n == 0 {
        return Ok(true);
    }

    if !helpers::is_valid_g2_point(&vk.g2_tau)
        || !commitments.iter().all(|c| helpers::is_valid_g1_point(&c.0))
        || !proofs.iter().all(|p| helpers::is_valid_g1_point(&p.0))
    {
        return Ok(false);
    }

    let r_powers = compute_r_powers(commitments, proofs, zs, ys)?;

    let proof_points: Vec<G1Affine> = proofs.iter().map(|p| p.0).collect();
    let mut c_minus_y: Vec<G1Affine> = Vec::with_capacity(n);
    let mut r_times_z: Vec<Fr> = Vec::with_capacity(n);
    for i in 0..n {
        c_minus_y.push((commitments[i].0 - G1Affine::generator() * ys[i]).into_affine());
        r_times_z.push(r_powers[i] * zs[i]);
    }

    // sum r^i proof_i
    let proof_lincomb = helpers::g1_lincomb(&proof_points, &r_powers)?;
    // sum r^i z_i proof_i
    let proof_z_lincomb = helpers::g1_lincomb(&proof_points, &r_times_z)?;
    // sum r^i (C_i - [y_i])
    let c_minus_y_lincomb = helpers::g1_lincomb(&c_minus_y, &r_powers)?;

    let rhs_g1 = (c_minus_y_lincomb + proof_z_lincomb).into_affine();

    Ok(helpers::pairings_verify(
        proof_lincomb,
        vk.g2_tau,
        rhs_g1,
        G2Affine::generator(),
    ))
}
