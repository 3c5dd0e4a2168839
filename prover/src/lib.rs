//! Prover side of the kzg-pop proof of possession protocol.
//!
//! - [srs::TrustedSetup]: G1 powers of tau and `[tau]G2`, generated locally
//!   or loaded from disk.
//! - [kzg]: commitment and evaluation proof primitives for polynomials in
//!   coefficient form.
//! - [roots::derive_roots_parallel]: the parallel fan out of root
//!   derivation across the sample set.
//! - [possession::PossessionProver]: sample, commit and prove, one stage at
//!   a time or end to end.
//!
//! ## Example
//! ```rust
//! use kzg_pop_primitives::{config::PossessionConfig, data::DataBlob, digest::DigestKind};
//! use kzg_pop_prover::{possession::PossessionProver, srs::TrustedSetup};
//!
//! let config = PossessionConfig::new(5, DigestKind::Keccak256);
//! let setup = TrustedSetup::generate(config.required_setup_size(), &mut ark_std::test_rng()).unwrap();
//! let prover = PossessionProver::new(config).unwrap();
//!
//! let blob = DataBlob::new("test.txt", b"hello world".to_vec());
//! let committed = prover.commit_blob(&setup, &blob).unwrap();
//! let proof = prover.prove_sample(&setup, &blob, &committed, 0).unwrap();
//! ```

pub mod kzg;
pub mod possession;
pub mod roots;
pub mod srs;
