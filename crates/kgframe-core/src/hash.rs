//! Plan fingerprints: blake3 over the serde-JSON encoding.

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hash256(pub [u8; 32]);

impl Hash256 {
    pub fn to_hex(&self) -> String {
        blake3::Hash::from(self.0).to_hex().to_string()
    }
}

impl std::fmt::Display for Hash256 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Same value, same JSON, same hash. Field order follows declaration order.
pub fn hash_serde<T: Serialize>(v: &T) -> Result<Hash256> {
    let bytes = serde_json::to_vec(v)?;
    Ok(Hash256(*blake3::hash(&bytes).as_bytes()))
}
