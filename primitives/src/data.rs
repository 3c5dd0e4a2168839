use serde::{Deserialize, Serialize};

use crate::errors::{InputError, PossessionError};

// Need to explicitly import alloc because we are in a no-std environment.
extern crate alloc;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// The private data a prover claims to hold, together with the identity
/// (typically a file name) it is published under.
///
/// Both fields feed the sampling seed and every root, so the same bytes
/// under two identities produce unrelated commitments.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataBlob {
    identity: String,
    content: Vec<u8>,
}

impl DataBlob {
    pub fn new(identity: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        DataBlob {
            identity: identity.into(),
            content: content.into(),
        }
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Returns the blob content
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Returns the length of the content in bytes.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Checks whether the blob content is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Returns the byte at `index`, or [InputError::IndexOutOfRange].
    pub fn byte_at(&self, index: usize) -> Result<u8, InputError> {
        self.content
            .get(index)
            .copied()
            .ok_or(InputError::IndexOutOfRange {
                index,
                len: self.content.len(),
            })
    }

    /// Builds the [DataPoint] for the byte stored at `index`.
    pub fn data_point(&self, index: usize) -> Result<DataPoint, InputError> {
        let data = self.byte_at(index)?;
        Ok(DataPoint {
            identity: self.identity.clone(),
            index,
            data,
        })
    }
}

/// The unit that gets hashed into a root: one byte of one blob at one
/// position.
///
/// The canonical encoding is compact JSON with the fields in declaration
/// order, e.g. `{"identity":"test.txt","index":4,"data":111}`. Changing the
/// field names, their order or their types changes every root.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DataPoint {
    pub identity: String,
    pub index: usize,
    pub data: u8,
}

impl DataPoint {
    /// Creates a data point from its parts. Use [DataBlob::data_point] when
    /// the blob is at hand; this constructor serves verifiers that only know
    /// the claimed byte.
    pub fn new(identity: &str, index: usize, data: u8) -> Self {
        DataPoint {
            identity: identity.to_string(),
            index,
            data,
        }
    }

    /// Returns the canonical byte encoding that is fed to the hash.
    pub fn canonical_encoding(&self) -> Result<Vec<u8>, PossessionError> {
        serde_json::to_vec(self).map_err(|e| PossessionError::SerializationError(e.to_string()))
    }
}

impl From<DataBlob> for Vec<u8> {
    fn from(blob: DataBlob) -> Self {
        blob.content
    }
}
