#[cfg(test)]
mod tests {
    use ark_bn254::{Fr, G1Affine, G2Affine};
    use ark_ec::{AffineRepr, CurveGroup};
    use ark_ff::{One, UniformRand, Zero};
    use kzg_pop_primitives::{
        config::PossessionConfig,
        data::{DataBlob, DataPoint},
        digest::DigestKind,
        errors::{InputError, PossessionError},
        helpers::fr_to_bytes_be,
        polynomial::RootPolynomial,
        roots::{derive_root, hash_data_point, Root},
        types::{Commitment, EvaluationProof, VerifierKey},
    };
    use kzg_pop_prover::{
        kzg::{commit_coeff_form, compute_proof},
        possession::{CommittedBlob, PossessionProver},
        srs::TrustedSetup,
    };
    use kzg_pop_verifier::{
        batch::verify_possession_batch,
        verify::{verify_data_point, verify_possession, verify_possession_bytes},
    };
    use lazy_static::lazy_static;
    use rand_chacha::{rand_core::SeedableRng, ChaCha20Rng};

    const GETTYSBURG_ADDRESS_BYTES: &[u8] = "Fourscore and seven years ago our fathers brought forth, on this continent, a new nation, conceived in liberty, and dedicated to the proposition that all men are created equal. Now we are engaged in a great civil war, testing whether that nation, or any nation so conceived, and so dedicated, can long endure.".as_bytes();

    lazy_static! {
        static ref SETUP_INSTANCE: TrustedSetup =
            TrustedSetup::generate(129, &mut ChaCha20Rng::seed_from_u64(0xabcd)).unwrap();
        static ref VK: VerifierKey = SETUP_INSTANCE.verifier_key();
    }

    fn commit_gettysburg(sample_count: usize, digest: DigestKind) -> (PossessionProver, DataBlob, CommittedBlob) {
        let prover = PossessionProver::new(PossessionConfig::new(sample_count, digest)).unwrap();
        let blob = DataBlob::new("gettysburg.txt", GETTYSBURG_ADDRESS_BYTES);
        let committed = prover.commit_blob(&SETUP_INSTANCE, &blob).unwrap();
        (prover, blob, committed)
    }

    #[test]
    fn test_verify_random_openings() {
        let mut rng = ChaCha20Rng::seed_from_u64(1);
        for degree in [1, 17, 128] {
            let coeffs: Vec<Fr> = (0..=degree).map(|_| Fr::rand(&mut rng)).collect();
            let polynomial = RootPolynomial::from_coeffs(coeffs);
            let commitment = commit_coeff_form(&polynomial, &SETUP_INSTANCE).unwrap();

            let z = Fr::rand(&mut rng);
            let y = polynomial.eval(&z);
            let proof = compute_proof(&polynomial, &z, &y, &SETUP_INSTANCE).unwrap();
            assert!(verify_possession(&VK, &commitment, &proof, &z, &y));

            // tampered evaluation
            assert!(!verify_possession(&VK, &commitment, &proof, &z, &(y + Fr::one())));
            // same proof at another point
            assert!(!verify_possession(&VK, &commitment, &proof, &(z + Fr::one()), &y));
        }
    }

    #[test]
    fn test_verify_sampled_roots() {
        let (prover, blob, committed) = commit_gettysburg(50, DigestKind::Keccak256);
        for position in 0..committed.samples.len() {
            let proof = prover
                .prove_sample(&SETUP_INSTANCE, &blob, &committed, position)
                .unwrap();
            assert!(verify_possession(
                &VK,
                &committed.commitment,
                &proof.proof,
                proof.z.as_fr(),
                &proof.y
            ));
        }
    }

    #[test]
    fn test_hello_world_scenario() {
        let prover = PossessionProver::new(PossessionConfig::new(5, DigestKind::Keccak256)).unwrap();
        let blob = DataBlob::new("test.txt", b"hello world".to_vec());
        let committed = prover.commit_blob(&SETUP_INSTANCE, &blob).unwrap();

        assert_eq!(committed.samples.len(), 5);
        assert!(committed.samples.iter().all(|&index| index < 11));
        assert_eq!(committed.roots.len(), 5);
        assert_eq!(committed.polynomial.degree(), 5);

        for position in 0..5 {
            let proof = prover
                .prove_sample(&SETUP_INSTANCE, &blob, &committed, position)
                .unwrap();
            assert!(verify_possession(
                &VK,
                &committed.commitment,
                &proof.proof,
                proof.z.as_fr(),
                &Fr::zero()
            ));
        }

        // index 999 is outside the blob, so its data point is built by hand
        let outsider = hash_data_point(&DataPoint::new("test.txt", 999, b'x'), DigestKind::Keccak256)
            .unwrap();
        assert!(!committed.roots.contains(&outsider));
        let proof = prover
            .prove(&SETUP_INSTANCE, &committed.polynomial, &outsider, &Fr::zero())
            .unwrap();
        assert!(!verify_possession(
            &VK,
            &committed.commitment,
            &proof,
            outsider.as_fr(),
            &Fr::zero()
        ));
        assert_eq!(
            derive_root(&blob, 999, DigestKind::Keccak256),
            Err(PossessionError::Input(InputError::IndexOutOfRange {
                index: 999,
                len: 11
            }))
        );
    }

    #[test]
    fn test_verify_rejects_altered_byte() {
        let (prover, blob, committed) = commit_gettysburg(20, DigestKind::Sha256);
        let index = committed.samples.get(3).unwrap();
        let mut altered = GETTYSBURG_ADDRESS_BYTES.to_vec();
        altered[index] = altered[index].wrapping_add(1);
        let altered = DataBlob::new(blob.identity(), altered);

        let proof = prover
            .prove_sample(&SETUP_INSTANCE, &altered, &committed, 3)
            .unwrap();
        // unless the altered byte was also sampled elsewhere with the same value
        if !committed.roots.contains(&proof.z) {
            assert!(!verify_possession(
                &VK,
                &committed.commitment,
                &proof.proof,
                proof.z.as_fr(),
                &proof.y
            ));
        }
    }

    #[test]
    fn test_verify_with_wrong_setup() {
        let (prover, blob, committed) = commit_gettysburg(10, DigestKind::Keccak256);
        let proof = prover
            .prove_sample(&SETUP_INSTANCE, &blob, &committed, 0)
            .unwrap();
        let other = TrustedSetup::generate(2, &mut ChaCha20Rng::seed_from_u64(99)).unwrap();
        assert!(!verify_possession(
            &other.verifier_key(),
            &committed.commitment,
            &proof.proof,
            proof.z.as_fr(),
            &proof.y
        ));
        // an identity key would accept anything that balances, so it is refused
        let identity_key = VerifierKey::new(G2Affine::identity());
        assert!(!verify_possession(
            &identity_key,
            &committed.commitment,
            &proof.proof,
            proof.z.as_fr(),
            &proof.y
        ));
    }

    #[test]
    fn test_verify_data_point() {
        let (prover, blob, committed) = commit_gettysburg(30, DigestKind::Keccak256);
        let position = 11;
        let index = committed.samples.get(position).unwrap();
        let proof = prover
            .prove_sample(&SETUP_INSTANCE, &blob, &committed, position)
            .unwrap();

        let claimed = blob.data_point(index).unwrap();
        assert!(verify_data_point(&VK, &committed.commitment, &proof.proof, &claimed, DigestKind::Keccak256).unwrap());

        // the wrong byte, the wrong file name, the wrong hash
        let wrong_byte = DataPoint::new(blob.identity(), index, claimed.data.wrapping_add(1));
        assert!(!verify_data_point(&VK, &committed.commitment, &proof.proof, &wrong_byte, DigestKind::Keccak256).unwrap());
        let wrong_identity = DataPoint::new("other.txt", index, claimed.data);
        assert!(!verify_data_point(&VK, &committed.commitment, &proof.proof, &wrong_identity, DigestKind::Keccak256).unwrap());
        assert!(!verify_data_point(&VK, &committed.commitment, &proof.proof, &claimed, DigestKind::Sha256).unwrap());
    }

    #[test]
    fn test_verify_bytes() {
        let (prover, blob, committed) = commit_gettysburg(10, DigestKind::Keccak256);
        let proof = prover
            .prove_sample(&SETUP_INSTANCE, &blob, &committed, 4)
            .unwrap();

        let commitment_bytes = committed.commitment.to_bytes_be().unwrap();
        let proof_bytes = proof.proof.to_bytes_be().unwrap();
        let z_bytes = fr_to_bytes_be(proof.z.as_fr());
        let y_bytes = fr_to_bytes_be(&proof.y);

        assert_eq!(
            verify_possession_bytes(&VK, &commitment_bytes, &proof_bytes, &z_bytes, &y_bytes),
            Ok(true)
        );
        assert_eq!(
            verify_possession_bytes(&VK, &commitment_bytes, &proof_bytes, &z_bytes, &fr_to_bytes_be(&Fr::one())),
            Ok(false)
        );
        // swapping commitment and proof still decodes
        assert_eq!(
            verify_possession_bytes(&VK, &proof_bytes, &commitment_bytes, &z_bytes, &y_bytes),
            Ok(false)
        );
    }

    #[test]
    fn test_verify_bytes_errors() {
        let (prover, blob, committed) = commit_gettysburg(10, DigestKind::Keccak256);
        let proof = prover
            .prove_sample(&SETUP_INSTANCE, &blob, &committed, 0)
            .unwrap();
        let commitment_bytes = committed.commitment.to_bytes_be().unwrap();
        let proof_bytes = proof.proof.to_bytes_be().unwrap();
        let z_bytes = fr_to_bytes_be(proof.z.as_fr());
        let y_bytes = fr_to_bytes_be(&proof.y);

        let garbage = [0xffu8; 32];
        assert!(matches!(
            verify_possession_bytes(&VK, &garbage, &proof_bytes, &z_bytes, &y_bytes),
            Err(PossessionError::SerializationError(_))
        ));
        assert!(matches!(
            verify_possession_bytes(&VK, &commitment_bytes, &garbage, &z_bytes, &y_bytes),
            Err(PossessionError::SerializationError(_))
        ));
        // above the field modulus
        assert!(matches!(
            verify_possession_bytes(&VK, &commitment_bytes, &proof_bytes, &garbage, &y_bytes),
            Err(PossessionError::SerializationError(_))
        ));
        assert!(matches!(
            verify_possession_bytes(&VK, &commitment_bytes, &proof_bytes, &z_bytes, &garbage),
            Err(PossessionError::SerializationError(_))
        ));
    }

    #[test]
    fn test_verify_rejects_point_off_curve() {
        let (prover, blob, committed) = commit_gettysburg(10, DigestKind::Keccak256);
        let proof = prover
            .prove_sample(&SETUP_INSTANCE, &blob, &committed, 0)
            .unwrap();
        let off_curve = G1Affine::new_unchecked(ark_bn254::Fq::one(), ark_bn254::Fq::one());
        assert!(!verify_possession(
            &VK,
            &Commitment(off_curve),
            &proof.proof,
            proof.z.as_fr(),
            &proof.y
        ));
        assert!(!verify_possession(
            &VK,
            &committed.commitment,
            &EvaluationProof(off_curve),
            proof.z.as_fr(),
            &proof.y
        ));
    }

    #[test]
    fn test_verify_batch() {
        let mut commitments = Vec::new();
        let mut proofs = Vec::new();
        let mut zs = Vec::new();
        let mut ys = Vec::new();
        for (sample_count, digest) in [(5, DigestKind::Keccak256), (40, DigestKind::Sha256), (128, DigestKind::Keccak256)] {
            let (prover, blob, committed) = commit_gettysburg(sample_count, digest);
            for position in [0, sample_count / 2, sample_count - 1] {
                let proof = prover
                    .prove_sample(&SETUP_INSTANCE, &blob, &committed, position)
                    .unwrap();
                commitments.push(committed.commitment);
                proofs.push(proof.proof);
                zs.push(proof.z.to_fr());
                ys.push(proof.y);
            }
        }
        assert!(verify_possession_batch(&VK, &commitments, &proofs, &zs, &ys).unwrap());

        // one bad evaluation spoils the batch
        let mut bad_ys = ys.clone();
        bad_ys[4] = Fr::one();
        assert!(!verify_possession_batch(&VK, &commitments, &proofs, &zs, &bad_ys).unwrap());

        // proofs swapped between commitments
        let mut swapped = proofs.clone();
        swapped.swap(0, 3);
        assert!(!verify_possession_batch(&VK, &commitments, &swapped, &zs, &ys).unwrap());

        let off_curve = G1Affine::new_unchecked(ark_bn254::Fq::one(), ark_bn254::Fq::one());
        let mut bad_commitments = commitments.clone();
        bad_commitments[2] = Commitment(off_curve);
        assert!(!verify_possession_batch(&VK, &bad_commitments, &proofs, &zs, &ys).unwrap());
    }

    #[test]
    fn test_verify_batch_edge_cases() {
        assert!(verify_possession_batch(&VK, &[], &[], &[], &[]).unwrap());

        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let point = (G1Affine::generator() * Fr::rand(&mut rng)).into_affine();
        let result = verify_possession_batch(
            &VK,
            &[Commitment(point)],
            &[],
            &[Fr::one()],
            &[Fr::zero()],
        );
        assert!(matches!(
            result,
            Err(PossessionError::Input(InputError::LengthMismatch(_)))
        ));

        // a batch of one agrees with the single proof check
        let root = Root::from_digest(&[7u8; 32]);
        let polynomial = RootPolynomial::from_coeffs(vec![-root.to_fr(), Fr::one()]);
        let commitment = commit_coeff_form(&polynomial, &SETUP_INSTANCE).unwrap();
        let proof = compute_proof(&polynomial, root.as_fr(), &Fr::zero(), &SETUP_INSTANCE).unwrap();
        assert!(verify_possession(&VK, &commitment, &proof, root.as_fr(), &Fr::zero()));
        assert!(verify_possession_batch(&VK, &[commitment], &[proof], &[root.to_fr()], &[Fr::zero()]).unwrap());
    }
}
