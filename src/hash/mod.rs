// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Keyed hashing for the Bloom filter.
//!
//! The filter derives all of its bit indices from a single keyed hash
//! primitive: XXH64 seeded with a 64-bit value. Multiple decorrelated
//! outputs per key come from chaining rather than from independent hash
//! functions: each round re-seeds the primitive with the previous round's
//! output. The chain is deterministic for a given key, so insertion and
//! lookup reproduce the identical index sequence.

use std::hash::Hash;
use std::hash::Hasher;

use xxhash_rust::xxh64::Xxh64;

/// The seed of the first chain round.
///
/// Every chain starts from the same fixed seed; all later rounds are seeded
/// by the previous round's output. Filters therefore agree on the index
/// sequence for a key without carrying any per-filter hash state.
pub(crate) const INITIAL_CHAIN_SEED: u64 = 0;

/// Hashes `key` under `seed` with XXH64.
///
/// Deterministic for identical `(key, seed)` pairs. Any key with a stable
/// [`Hash`] implementation is accepted; the key's bytes are fed to the
/// hasher exactly as `Hash` emits them.
pub(crate) fn hash_key<T: Hash + ?Sized>(key: &T, seed: u64) -> u64 {
    let mut hasher = Xxh64::new(seed);
    key.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic_for_key_and_seed() {
        assert_eq!(hash_key(&"value", 0), hash_key(&"value", 0));
        assert_eq!(hash_key(&42u64, 9001), hash_key(&42u64, 9001));
    }

    #[test]
    fn test_seed_changes_output() {
        assert_ne!(hash_key(&"value", 0), hash_key(&"value", 1));
    }

    #[test]
    fn test_key_changes_output() {
        assert_ne!(hash_key(&"value1", 0), hash_key(&"value2", 0));
    }
}
