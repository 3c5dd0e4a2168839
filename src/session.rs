use kzg_pop_primitives::{
    config::PossessionConfig,
    data::DataBlob,
    errors::{InputError, PossessionError},
    roots::RootSet,
    sampling::SampleSet,
    types::{Commitment, VerifierKey},
};
use kzg_pop_prover::{
    possession::{CommittedBlob, PossessionProof, PossessionProver},
    srs::TrustedSetup,
};
use kzg_pop_verifier::verify::verify_possession;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Where a [PossessionSession] stands. Stages only move forward;
/// `Verified` and `Fatal` are terminal.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionState {
    Init,
    Sampled,
    RootsComputed,
    Committed,
    Queried,
    Proved,
    /// The verifier's verdict. `false` means possession was not established.
    Verified(bool),
    /// A stage failed; the error that ended the session.
    Fatal(PossessionError),
}

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            SessionState::Init => "init",
            SessionState::Sampled => "sampled",
            SessionState::RootsComputed => "roots_computed",
            SessionState::Committed => "committed",
            SessionState::Queried => "queried",
            SessionState::Proved => "proved",
            SessionState::Verified(_) => "verified",
            SessionState::Fatal(_) => "fatal",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::Verified(_) | SessionState::Fatal(_))
    }
}

#[derive(Clone, Debug, PartialEq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Possession(#[from] PossessionError),

    /// A stage was called out of order. The session is left as it was.
    #[error("cannot {operation} a session in state {state}")]
    InvalidTransition {
        operation: &'static str,
        state: &'static str,
    },
}

/// One run of the protocol over one blob, from sampling to the verifier's
/// verdict.
///
/// Every stage checks that the previous one has completed. A stage that
/// fails moves the session to [SessionState::Fatal]; nothing it produced
/// before is reused, a new session has to be started.
#[derive(Debug)]
pub struct PossessionSession<'a> {
    setup: &'a TrustedSetup,
    prover: PossessionProver,
    blob: DataBlob,
    state: SessionState,
    samples: Option<SampleSet>,
    roots: Option<RootSet>,
    // Takes over `samples` and `roots` once committed.
    committed: Option<CommittedBlob>,
    position: Option<usize>,
    proof: Option<PossessionProof>,
}

impl<'a> PossessionSession<'a> {
    pub fn new(
        setup: &'a TrustedSetup,
        config: PossessionConfig,
        blob: DataBlob,
    ) -> Result<Self, SessionError> {
        let prover = PossessionProver::new(config)?;
        Ok(Self {
            setup,
            prover,
            blob,
            state: SessionState::Init,
            samples: None,
            roots: None,
            committed: None,
            position: None,
            proof: None,
        })
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn blob(&self) -> &DataBlob {
        &self.blob
    }

    pub fn samples(&self) -> Option<&SampleSet> {
        match &self.committed {
            Some(committed) => Some(&committed.samples),
            None => self.samples.as_ref(),
        }
    }

    pub fn roots(&self) -> Option<&RootSet> {
        match &self.committed {
            Some(committed) => Some(&committed.roots),
            None => self.roots.as_ref(),
        }
    }

    pub fn commitment(&self) -> Option<&Commitment> {
        self.committed.as_ref().map(|committed| &committed.commitment)
    }

    /// The sample position queried by the verifier, once set.
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    pub fn proof(&self) -> Option<&PossessionProof> {
        self.proof.as_ref()
    }

    /// Everything the commit stage produced, for handing the commitment to
    /// a verifier and keeping the rest.
    pub fn committed(&self) -> Option<&CommittedBlob> {
        self.committed.as_ref()
    }

    fn invalid_transition(&self, operation: &'static str) -> SessionError {
        SessionError::InvalidTransition {
            operation,
            state: self.state.name(),
        }
    }

    fn fail(&mut self, operation: &'static str, e: PossessionError) -> SessionError {
        warn!(operation, error = %e, "possession session failed");
        self.state = SessionState::Fatal(e.clone());
        self.samples = None;
        self.roots = None;
        self.committed = None;
        self.position = None;
        self.proof = None;
        e.into()
    }

    pub fn sample(&mut self) -> Result<&SampleSet, SessionError> {
        if self.state != SessionState::Init {
            return Err(self.invalid_transition("sample"));
        }
        match self.prover.sample(&self.blob) {
            Ok(samples) => {
                self.state = SessionState::Sampled;
                Ok(&*self.samples.insert(samples))
            },
            Err(e) => Err(self.fail("sample", e)),
        }
    }

    pub fn compute_roots(&mut self) -> Result<&RootSet, SessionError> {
        let result = match (&self.state, &self.samples) {
            (SessionState::Sampled, Some(samples)) => self.prover.compute_roots(&self.blob, samples),
            _ => return Err(self.invalid_transition("compute roots")),
        };
        match result {
            Ok(roots) => {
                self.state = SessionState::RootsComputed;
                Ok(&*self.roots.insert(roots))
            },
            Err(e) => Err(self.fail("compute roots", e)),
        }
    }

    /// Builds the polynomial from the roots and commits to it.
    pub fn commit(&mut self) -> Result<Commitment, SessionError> {
        let result = match (&self.state, &self.samples, &self.roots) {
            (SessionState::RootsComputed, Some(_), Some(roots)) => self
                .setup
                .ensure_capacity(roots.len() + 1)
                .map_err(PossessionError::from)
                .and_then(|()| self.prover.build_polynomial(roots))
                .and_then(|polynomial| {
                    let commitment = self.prover.commit(self.setup, &polynomial)?;
                    Ok((polynomial, commitment))
                }),
            _ => return Err(self.invalid_transition("commit")),
        };
        match result {
            Ok((polynomial, commitment)) => {
                info!(
                    identity = self.blob.identity(),
                    degree = polynomial.degree(),
                    "session committed"
                );
                match (self.samples.take(), self.roots.take()) {
                    (Some(samples), Some(roots)) => {
                        self.committed = Some(CommittedBlob {
                            samples,
                            roots,
                            polynomial,
                            commitment,
                        });
                        self.state = SessionState::Committed;
                        Ok(commitment)
                    },
                    _ => Err(self.invalid_transition("commit")),
                }
            },
            Err(e) => Err(self.fail("commit", e)),
        }
    }

    /// Records the verifier's challenge: the sample position whose byte the
    /// prover must show it still holds.
    pub fn query(&mut self, position: usize) -> Result<(), SessionError> {
        let sample_count = match (&self.state, &self.committed) {
            (SessionState::Committed, Some(committed)) => committed.samples.len(),
            _ => return Err(self.invalid_transition("query")),
        };
        if position >= sample_count {
            let e = InputError::IndexOutOfRange {
                index: position,
                len: sample_count,
            };
            return Err(self.fail("query", e.into()));
        }
        debug!(position, "session queried");
        self.position = Some(position);
        self.state = SessionState::Queried;
        Ok(())
    }

    pub fn prove(&mut self) -> Result<&PossessionProof, SessionError> {
        let result = match (&self.state, &self.committed, self.position) {
            (SessionState::Queried, Some(committed), Some(position)) => {
                self.prover
                    .prove_sample(self.setup, &self.blob, committed, position)
            },
            _ => return Err(self.invalid_transition("prove")),
        };
        match result {
            Ok(proof) => {
                self.state = SessionState::Proved;
                Ok(&*self.proof.insert(proof))
            },
            Err(e) => Err(self.fail("prove", e)),
        }
    }

    /// Checks the proof the way a verifier holding only `vk` and the
    /// published commitment would.
    pub fn verify(&mut self, vk: &VerifierKey) -> Result<bool, SessionError> {
        let (commitment, proof) = match (&self.state, &self.committed, &self.proof) {
            (SessionState::Proved, Some(committed), Some(proof)) => (&committed.commitment, proof),
            _ => return Err(self.invalid_transition("verify")),
        };
        let verified = verify_possession(vk, commitment, &proof.proof, proof.z.as_fr(), &proof.y);
        if verified {
            info!(identity = self.blob.identity(), index = proof.index, "possession verified");
        } else {
            warn!(identity = self.blob.identity(), index = proof.index, "possession not established");
        }
        self.state = SessionState::Verified(verified);
        Ok(verified)
    }

    /// Runs a fresh session to the end, querying `position` and verifying
    /// against `vk`.
    pub fn run(&mut self, position: usize, vk: &VerifierKey) -> Result<bool, SessionError> {
        self.sample()?;
        self.compute_roots()?;
        self.commit()?;
        self.query(position)?;
        self.prove()?;
        self.verify(vk)
    }
}
