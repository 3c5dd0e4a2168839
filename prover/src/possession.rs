use ark_bn254::Fr;
use ark_std::Zero;
use kzg_pop_primitives::{
    config::PossessionConfig,
    data::DataBlob,
    errors::{InputError, PossessionError},
    polynomial::RootPolynomial,
    roots::{self, Root, RootSet},
    sampling::{self, SampleSet},
    types::{Commitment, EvaluationProof},
};
use tracing::{debug, info};

use crate::{kzg, roots::derive_roots_parallel, srs::TrustedSetup};

/// Everything the commit path produces for one blob. Only `commitment` is
/// meant to leave the prover.
#[derive(Clone, Debug, PartialEq)]
pub struct CommittedBlob {
    pub samples: SampleSet,
    pub roots: RootSet,
    pub polynomial: RootPolynomial,
    pub commitment: Commitment,
}

/// A proof that the byte at blob position `index` is one of the committed
/// samples: `z` is its root and `y` the claimed evaluation, always zero for
/// honest provers.
#[derive(Clone, Debug, PartialEq)]
pub struct PossessionProof {
    pub index: usize,
    pub z: Root,
    pub y: Fr,
    pub proof: EvaluationProof,
}

/// The prover side of the protocol.
///
/// Each stage is exposed on its own; [PossessionProver::commit_blob] and
/// [PossessionProver::prove_sample] chain them for the common case.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PossessionProver {
    config: PossessionConfig,
}

impl PossessionProver {
    pub fn new(config: PossessionConfig) -> Result<Self, PossessionError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PossessionConfig {
        &self.config
    }

    /// Draws the configured number of byte positions from `blob`.
    pub fn sample(&self, blob: &DataBlob) -> Result<SampleSet, PossessionError> {
        let samples =
            sampling::generate_sample_indices(blob, self.config.sample_count, self.config.digest)?;
        debug!(identity = blob.identity(), samples = samples.len(), "sampled blob");
        Ok(samples)
    }

    pub fn compute_roots(
        &self,
        blob: &DataBlob,
        samples: &SampleSet,
    ) -> Result<RootSet, PossessionError> {
        derive_roots_parallel(blob, samples, self.config.digest)
    }

    pub fn build_polynomial(&self, roots: &RootSet) -> Result<RootPolynomial, PossessionError> {
        let polynomial = RootPolynomial::from_roots(roots)?;
        debug!(degree = polynomial.degree(), "built polynomial from roots");
        Ok(polynomial)
    }

    pub fn commit(
        &self,
        setup: &TrustedSetup,
        polynomial: &RootPolynomial,
    ) -> Result<Commitment, PossessionError> {
        kzg::commit_coeff_form(polynomial, setup)
    }

    /// Proves `polynomial(z) == y`. Honest callers pass a sampled root and
    /// `y = 0`; anything else yields a proof that fails verification.
    pub fn prove(
        &self,
        setup: &TrustedSetup,
        polynomial: &RootPolynomial,
        z: &Root,
        y: &Fr,
    ) -> Result<EvaluationProof, PossessionError> {
        kzg::compute_proof(polynomial, z.as_fr(), y, setup)
    }

    /// Runs the whole commit path: sample, derive roots, build the
    /// polynomial and commit to it.
    ///
    /// The setup size is checked before any hashing starts.
    pub fn commit_blob(
        &self,
        setup: &TrustedSetup,
        blob: &DataBlob,
    ) -> Result<CommittedBlob, PossessionError> {
        setup.ensure_capacity(self.config.required_setup_size())?;

        let samples = self.sample(blob)?;
        let roots = self.compute_roots(blob, &samples)?;
        let polynomial = self.build_polynomial(&roots)?;
        let commitment = self.commit(setup, &polynomial)?;

        info!(
            identity = blob.identity(),
            bytes = blob.len(),
            samples = samples.len(),
            "committed to blob"
        );
        Ok(CommittedBlob {
            samples,
            roots,
            polynomial,
            commitment,
        })
    }

    /// Proves possession of the byte sampled at `position`.
    ///
    /// The root is recomputed from `blob` rather than read from
    /// `committed.roots`, so the proof only verifies if the prover still
    /// holds the exact byte.
    ///
    /// # Errors
    /// [InputError::IndexOutOfRange] if `position` is not a sample position,
    /// or if the blob no longer covers the sampled index.
    pub fn prove_sample(
        &self,
        setup: &TrustedSetup,
        blob: &DataBlob,
        committed: &CommittedBlob,
        position: usize,
    ) -> Result<PossessionProof, PossessionError> {
        let index = committed
            .samples
            .get(position)
            .ok_or(InputError::IndexOutOfRange {
                index: position,
                len: committed.samples.len(),
            })?;
        let z = roots::derive_root(blob, index, self.config.digest)?;
        let y = Fr::zero();
        let proof = self.prove(setup, &committed.polynomial, &z, &y)?;

        debug!(position, index, "proved sampled byte");
        Ok(PossessionProof { index, z, y, proof })
    }
}
