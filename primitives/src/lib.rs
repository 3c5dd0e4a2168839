//! Shared building blocks of the kzg-pop proof of possession protocol.
//!
//! The data pipeline goes:
//! > [data::DataBlob] -> [sampling::SampleSet] -> [roots::RootSet] ->
//! > [polynomial::RootPolynomial] -> KZG commitment / evaluation proof
//!
//! - DataBlob: the prover's private bytes plus an identity string (typically
//!   the file name). Never leaves the prover.
//! - SampleSet: byte positions drawn from a PRNG seeded with
//!   `digest(identity || content)`. Anyone holding the same blob derives the
//!   same positions.
//! - RootSet: one bn254 scalar per sampled position, obtained by hashing the
//!   canonical encoding of [data::DataPoint] `{identity, index, data}`.
//! - RootPolynomial: the monic polynomial `prod(x - root_i)`.
//!
//! Committing and proving live in `kzg-pop-prover`, checking proofs lives in
//! `kzg-pop-verifier`. Both crates only exchange the value types of
//! [types] and the [types::VerifierKey].

#![no_std]

extern crate alloc;

pub mod config;
pub mod consts;
pub mod data;
pub mod digest;
pub mod errors;
pub mod helpers;
pub mod polynomial;
pub mod roots;
pub mod sampling;
pub mod traits;
pub mod types;
