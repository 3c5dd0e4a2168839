use ark_bn254::{g1::G1Affine, g2::G2Affine, Fr};
use ark_ec::AffineRepr;
use ark_ff::Field;
use ark_serialize::CanonicalDeserialize;

extern crate alloc;

use crate::consts::{
    BYTES_PER_FIELD_ELEMENT, SIZE_OF_G1_AFFINE_COMPRESSED, SIZE_OF_G2_AFFINE_COMPRESSED,
};

// We define our own error instead of using io::ErrorKind::InvalidData
// because we want this to compile in no-std environments.
#[derive(Debug, thiserror::Error)]
pub enum PointReadError {
    #[error("expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Deserialization failed")]
    DeserializationError,
}

pub type Result<T> = core::result::Result<T, PointReadError>;

/// Reads arkworks compressed points stored big-endian, the byte order every
/// kzg-pop encoding uses.
pub trait ReadPointFromBytes: AffineRepr {
    fn read_point_from_bytes_native_compressed_be(bytes: &[u8]) -> Result<Self>;
}

impl ReadPointFromBytes for G1Affine {
    fn read_point_from_bytes_native_compressed_be(bytes_be: &[u8]) -> Result<G1Affine> {
        let mut bytes_le = read_fixed::<SIZE_OF_G1_AFFINE_COMPRESSED>(bytes_be)?;
        bytes_le.reverse();
        G1Affine::deserialize_compressed(&bytes_le[..])
            .map_err(|_| PointReadError::DeserializationError)
    }
}

impl ReadPointFromBytes for G2Affine {
    fn read_point_from_bytes_native_compressed_be(bytes_be: &[u8]) -> Result<G2Affine> {
        let mut bytes_le = read_fixed::<SIZE_OF_G2_AFFINE_COMPRESSED>(bytes_be)?;
        bytes_le.reverse();
        G2Affine::deserialize_compressed(&bytes_le[..])
            .map_err(|_| PointReadError::DeserializationError)
    }
}

// A new trait for Fr for reading from bytes in big endian format
pub trait ReadFrFromBytes: Field {
    fn deserialize_from_bytes_be(bytes: &[u8]) -> Result<Self>;
}

// Rejects encodings of integers at or above the field modulus.
impl ReadFrFromBytes for Fr {
    fn deserialize_from_bytes_be(bytes: &[u8]) -> Result<Fr> {
        let mut bytes_le = read_fixed::<BYTES_PER_FIELD_ELEMENT>(bytes)?;
        bytes_le.reverse();
        Fr::deserialize_uncompressed(&bytes_le[..])
            .map_err(|_| PointReadError::DeserializationError)
    }
}

fn read_fixed<const N: usize>(bytes: &[u8]) -> Result<[u8; N]> {
    if bytes.len() != N {
        return Err(PointReadError::InvalidLength {
            expected: N,
            actual: bytes.len(),
        });
    }
    let mut out = [0u8; N];
    out.copy_from_slice(bytes);
    Ok(out)
}
