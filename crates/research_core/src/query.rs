//! One-call projections over a freshly decoded research map.

use crate::core_api::{CoreError, decode};

pub fn researched<B: AsRef<[u8]>>(bytes: B) -> Result<Vec<String>, CoreError> {
    decode(bytes).map(|map| map.researched())
}

pub fn not_researched<B: AsRef<[u8]>>(bytes: B) -> Result<Vec<String>, CoreError> {
    decode(bytes).map(|map| map.not_researched())
}

pub fn researched_ids<B: AsRef<[u8]>>(bytes: B) -> Result<Vec<i32>, CoreError> {
    decode(bytes).map(|map| map.researched_ids())
}

pub fn not_researched_ids<B: AsRef<[u8]>>(bytes: B) -> Result<Vec<i32>, CoreError> {
    decode(bytes).map(|map| map.not_researched_ids())
}
