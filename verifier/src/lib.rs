//! Verifier side of the kzg-pop proof of possession protocol.
//!
//! A verifier only ever holds a [kzg_pop_primitives::types::VerifierKey] and
//! what the prover publishes: the commitment, and for each challenge a root
//! `z`, a claimed evaluation `y` and the evaluation proof. It never sees the
//! blob.
//!
//! - [verify]: single proofs, from typed values, from big-endian bytes, or
//!   from a claimed data point whose root the verifier derives itself.
//! - [batch]: many proofs checked with one random linear combination.

#![no_std]

pub mod batch;
pub mod verify;
