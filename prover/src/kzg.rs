use ark_bn254::Fr;
use ark_std::Zero;
use kzg_pop_primitives::{
    errors::PossessionError,
    helpers,
    polynomial::RootPolynomial,
    types::{Commitment, EvaluationProof},
};
use tracing::debug;

use crate::srs::TrustedSetup;

/// Commits to a polynomial in coefficient form: the inner product of its
/// coefficients with the monomial G1 powers of the setup.
///
/// The result depends only on the coefficient vector and the setup, so
/// committing twice yields the same point bit for bit.
///
/// # Errors
/// [kzg_pop_primitives::errors::InputError::SetupTooSmall] if the setup has
/// fewer points than the polynomial has coefficients.
pub fn commit_coeff_form(
    polynomial: &RootPolynomial,
    setup: &TrustedSetup,
) -> Result<Commitment, PossessionError> {
    setup.ensure_capacity(polynomial.len())?;

    let bases = &setup.g1[..polynomial.len()];
    let commitment = helpers::g1_lincomb(bases, polynomial.coeffs())?;
    debug!(degree = polynomial.degree(), "committed polynomial");
    Ok(Commitment(commitment))
}

/// Computes the proof that `polynomial(z) == y`: a commitment to the
/// quotient `(p(x) - y) / (x - z)`.
///
/// The division remainder `p(z) - y` is discarded. If the claim is false the
/// returned proof is still a well formed point; it just does not verify.
///
/// # Errors
/// - [kzg_pop_primitives::errors::InputError::SetupTooSmall] under the same
///   condition as [commit_coeff_form].
/// - [PossessionError::ProofGenerationError] if the quotient commitment fails.
pub fn compute_proof(
    polynomial: &RootPolynomial,
    z_fr: &Fr,
    y_fr: &Fr,
    setup: &TrustedSetup,
) -> Result<EvaluationProof, PossessionError> {
    setup.ensure_capacity(polynomial.len())?;

    let (quotient, remainder) = divide_by_linear(polynomial.coeffs(), z_fr, y_fr);
    if !remainder.is_zero() {
        debug!("claimed evaluation does not match, proof will not verify");
    }

    let bases = &setup.g1[..quotient.len()];
    let proof = helpers::g1_lincomb(bases, &quotient)
        .map_err(|e| PossessionError::ProofGenerationError(e.to_string()))?;
    Ok(EvaluationProof(proof))
}

/// Synthetic division of `p(x) - y` by `(x - z)`.
///
/// Returns the quotient coefficients, lowest degree first, and the
/// remainder `p(z) - y`.
pub fn divide_by_linear(coeffs: &[Fr], z_fr: &Fr, y_fr: &Fr) -> (Vec<Fr>, Fr) {
    if coeffs.is_empty() {
        return (Vec::new(), -*y_fr);
    }

    let mut quotient = vec![Fr::zero(); coeffs.len() - 1];
    let mut carry = Fr::zero();
    for i in (1..coeffs.len()).rev() {
        carry = coeffs[i] + carry * z_fr;
        quotient[i - 1] = carry;
    }
    let remainder = coeffs[0] - y_fr + carry * z_fr;

    (quotient, remainder)
}
