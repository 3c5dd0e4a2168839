use ark_bn254::Fr;
use ark_poly::{univariate::DensePolynomial, DenseUVPolynomial};
use ark_std::{One, Zero};

use crate::{errors::InputError, roots::RootSet};

extern crate alloc;
use alloc::vec;
use alloc::vec::Vec;

/// Below this many factors the product is expanded by schoolbook
/// multiplication; above it the halves are multiplied with FFTs.
const NAIVE_PRODUCT_THRESHOLD: usize = 32;

/// A polynomial in coefficient form whose zeros are exactly the roots it was
/// built from.
///
/// `coeffs[i]` is the coefficient of `x^i`. Polynomials built by
/// [RootPolynomial::from_roots] are monic, so the last coefficient is one
/// and the degree equals the number of roots.
#[derive(Clone, Debug, PartialEq)]
pub struct RootPolynomial {
    coeffs: Vec<Fr>,
}

impl RootPolynomial {
    /// Expands `prod(x - root_i)` over every root of `roots`, duplicates
    /// included.
    ///
    /// The product is computed divide and conquer: subtrees of up to
    /// [NAIVE_PRODUCT_THRESHOLD] factors are expanded directly and merged
    /// pairwise with FFT multiplication.
    pub fn from_roots(roots: &RootSet) -> Result<Self, InputError> {
        if roots.is_empty() {
            return Err(InputError::EmptyRootSet);
        }
        let roots = roots.to_fr_vec();
        let coeffs = product_of_linear_factors(&roots).coeffs;
        Ok(RootPolynomial { coeffs })
    }

    /// Wraps an arbitrary coefficient vector, lowest degree first. Trailing
    /// zero coefficients are dropped so that [RootPolynomial::degree] is
    /// exact.
    pub fn from_coeffs(mut coeffs: Vec<Fr>) -> Self {
        while coeffs.last().is_some_and(|c| c.is_zero()) {
            coeffs.pop();
        }
        RootPolynomial { coeffs }
    }

    pub fn coeffs(&self) -> &[Fr] {
        &self.coeffs
    }

    /// Returns the number of coefficients, which is `degree + 1` for a non
    /// zero polynomial.
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    /// Evaluates the polynomial at a given point using Horner's method.
    pub fn eval(&self, point: &Fr) -> Fr {
        self.coeffs
            .iter()
            .rev()
            .fold(Fr::zero(), |acc, coeff| acc * point + coeff)
    }
}

fn product_of_linear_factors(roots: &[Fr]) -> DensePolynomial<Fr> {
    if roots.len() <= NAIVE_PRODUCT_THRESHOLD {
        return DensePolynomial::from_coefficients_vec(naive_product(roots));
    }
    let (left, right) = roots.split_at(roots.len() / 2);
    let left = product_of_linear_factors(left);
    let right = product_of_linear_factors(right);
    &left * &right
}

/// Multiplies the running product by `(x - root)` one root at a time.
fn naive_product(roots: &[Fr]) -> Vec<Fr> {
    let mut coeffs = vec![Fr::zero(); roots.len() + 1];
    coeffs[0] = Fr::one();
    for (degree, root) in roots.iter().enumerate() {
        // coeffs currently holds a monic polynomial of `degree`
        for i in (1..=degree + 1).rev() {
            coeffs[i] = coeffs[i - 1] - coeffs[i] * root;
        }
        coeffs[0] = -(coeffs[0] * root);
    }
    coeffs
}
