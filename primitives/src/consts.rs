pub const BYTES_PER_FIELD_ELEMENT: usize = 32;
pub const SIZE_OF_G1_AFFINE_COMPRESSED: usize = 32; // in bytes
pub const SIZE_OF_G2_AFFINE_COMPRESSED: usize = 64; // in bytes

/// Number of sampled byte positions per blob when no configuration is given.
/// Polynomial construction cost grows faster than linearly in this value.
pub const DEFAULT_SAMPLE_COUNT: usize = 100;

/// Size of every digest produced by [crate::digest::DigestKind].
pub const DIGEST_SIZE: usize = 32;

pub const RANDOM_CHALLENGE_POP_BATCH_DOMAIN: &[u8] = b"KZGPOP_RCBATCHVERIFY_V1_";
