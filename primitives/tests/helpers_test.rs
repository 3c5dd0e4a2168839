#[cfg(test)]
mod tests {
    use ark_bn254::{Fr, G1Affine, G2Affine};
    use ark_ec::{AffineRepr, CurveGroup};
    use ark_std::{One, UniformRand};
    use kzg_pop_primitives::{
        consts::{BYTES_PER_FIELD_ELEMENT, SIZE_OF_G1_AFFINE_COMPRESSED},
        errors::PossessionError,
        helpers::{
            compute_powers, fr_to_bytes_be, g1_lincomb, hash_to_field_element,
            is_valid_g1_point, is_valid_g2_point, pairings_verify, usize_to_be_bytes,
        },
        traits::ReadFrFromBytes,
        types::{Commitment, EvaluationProof, VerifierKey},
    };
    use rand_chacha::{rand_core::SeedableRng, ChaCha20Rng};

    #[test]
    fn test_compute_powers() {
        let powers = compute_powers(&Fr::from(3u64), 5);
        let expected: Vec<Fr> = [1u64, 3, 9, 27, 81].iter().map(|&v| Fr::from(v)).collect();
        assert_eq!(powers, expected);
        assert!(compute_powers(&Fr::from(3u64), 0).is_empty());
    }

    #[test]
    fn test_g1_lincomb() {
        let g = G1Affine::generator();
        let result = g1_lincomb(&[g, g], &[Fr::from(2u64), Fr::from(5u64)]).unwrap();
        assert_eq!(result, (g * Fr::from(7u64)).into_affine());
    }

    #[test]
    fn test_pairings_verify() {
        let mut rng = ChaCha20Rng::seed_from_u64(11);
        let a = Fr::rand(&mut rng);
        let b = Fr::rand(&mut rng);
        let g1 = G1Affine::generator();
        let g2 = G2Affine::generator();
        // e(a*b*G1, G2) == e(a*G1, b*G2)
        let lhs = (g1 * (a * b)).into_affine();
        let rhs_1 = (g1 * a).into_affine();
        let rhs_2 = (g2 * b).into_affine();
        assert!(pairings_verify(lhs, g2, rhs_1, rhs_2));
        assert!(!pairings_verify(lhs, g2, rhs_1, g2));
    }

    #[test]
    fn test_fr_bytes_round_trip() {
        let mut rng = ChaCha20Rng::seed_from_u64(12);
        for _ in 0..50 {
            let fr = Fr::rand(&mut rng);
            let bytes = fr_to_bytes_be(&fr);
            assert_eq!(bytes.len(), BYTES_PER_FIELD_ELEMENT);
            assert_eq!(Fr::deserialize_from_bytes_be(&bytes).unwrap(), fr);
        }
        let one = fr_to_bytes_be(&Fr::one());
        assert_eq!(one[31], 1);
        assert!(one[..31].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_fr_rejects_non_canonical_bytes() {
        assert!(Fr::deserialize_from_bytes_be(&[0xff; 32]).is_err());
        assert!(Fr::deserialize_from_bytes_be(&[0x00; 31]).is_err());
    }

    #[test]
    fn test_hash_to_field_element_is_deterministic() {
        assert_eq!(hash_to_field_element(b"abc"), hash_to_field_element(b"abc"));
        assert_ne!(hash_to_field_element(b"abc"), hash_to_field_element(b"abd"));
    }

    #[test]
    fn test_point_validation() {
        let mut rng = ChaCha20Rng::seed_from_u64(13);
        assert!(is_valid_g1_point(&G1Affine::rand(&mut rng)));
        assert!(is_valid_g1_point(&G1Affine::identity()));
        assert!(is_valid_g2_point(&G2Affine::rand(&mut rng)));
        assert!(!is_valid_g2_point(&G2Affine::identity()));

        let g = G1Affine::generator();
        let off_curve = G1Affine::new_unchecked(g.x, g.y + ark_bn254::Fq::one());
        assert!(!is_valid_g1_point(&off_curve));
    }

    #[test]
    fn test_commitment_bytes_round_trip() {
        let mut rng = ChaCha20Rng::seed_from_u64(14);
        let commitment = Commitment(G1Affine::rand(&mut rng));
        let bytes = commitment.to_bytes_be().unwrap();
        assert_eq!(bytes.len(), SIZE_OF_G1_AFFINE_COMPRESSED);
        assert_eq!(Commitment::from_bytes_be(&bytes).unwrap(), commitment);

        let proof = EvaluationProof(G1Affine::rand(&mut rng));
        let bytes = proof.to_bytes_be().unwrap();
        assert_eq!(EvaluationProof::from_bytes_be(&bytes).unwrap(), proof);

        let key = VerifierKey::new(G2Affine::rand(&mut rng));
        let bytes = key.to_bytes_be().unwrap();
        assert_eq!(VerifierKey::from_bytes_be(&bytes).unwrap(), key);
    }

    #[test]
    fn test_commitment_bytes_errors() {
        assert!(matches!(
            Commitment::from_bytes_be(&[1u8; 5]),
            Err(PossessionError::SerializationError(_))
        ));
        assert!(matches!(
            VerifierKey::from_bytes_be(&[0u8; 32]),
            Err(PossessionError::SerializationError(_))
        ));
    }

    #[test]
    fn test_usize_to_be_bytes() {
        assert_eq!(usize_to_be_bytes(258), [0, 0, 0, 0, 0, 0, 1, 2]);
    }
}
