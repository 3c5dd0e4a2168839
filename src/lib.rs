//! ## Library Design / Architecture
//!
//! kzg-pop lets a prover holding a private blob of data commit to it with a
//! single curve point, and later convince a verifier that it still holds
//! specific sampled bytes, without revealing the blob.
//!
//! ### Data Types
//!
//! The main data pipeline goes:
//! > user data -> [primitives::data::DataBlob] ->
//! > [primitives::sampling::SampleSet] -> [primitives::roots::RootSet] ->
//! > [primitives::polynomial::RootPolynomial] -> KZG Commitment / Proof
//!
//! - DataBlob: the bytes plus an identity string, typically the file name.
//!   Never leaves the prover.
//! - SampleSet: byte positions drawn from a ChaCha20 stream seeded with the
//!   digest of `identity || content`.
//! - RootSet: each sampled `{identity, index, data}` hashed into a bn254
//!   scalar.
//! - RootPolynomial: the monic polynomial vanishing exactly on the roots.
//!   Its commitment is what the verifier keeps.
//!
//! Proving possession of a sampled byte is proving that the committed
//! polynomial evaluates to zero at that byte's root. A prover that lost or
//! altered the byte derives a different root, and the proof fails.
//!
//! ### Crates
//!
//! - [primitives]: data types, sampling, root derivation and the polynomial
//!   builder. `no_std`.
//! - [prover]: trusted setup, KZG commitment and proofs, the prover
//!   orchestration.
//! - [verifier]: single and batched proof verification. `no_std`.
//! - [session]: a state machine driving one full protocol run.
//!
//! ## Example
//! ```rust
//! use kzg_pop::{
//!     primitives::{config::PossessionConfig, data::DataBlob},
//!     prover::srs::TrustedSetup,
//!     session::PossessionSession,
//! };
//!
//! let config = PossessionConfig::default();
//! let setup = TrustedSetup::generate(config.required_setup_size(), &mut rand::thread_rng()).unwrap();
//! let blob = DataBlob::new("test.txt", b"hello world".to_vec());
//!
//! let mut session = PossessionSession::new(&setup, config, blob).unwrap();
//! assert!(session.run(42, &setup.verifier_key()).unwrap());
//! ```

pub use kzg_pop_primitives as primitives;
pub use kzg_pop_prover as prover;
pub use kzg_pop_verifier as verifier;

pub mod session;
