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

use std::hash::Hash;

use crate::bitvec::BitVector;
use crate::hash::hash_key;
use crate::hash::INITIAL_CHAIN_SEED;

/// A Bloom filter for probabilistic set membership testing.
///
/// Provides fast membership queries with:
/// - No false negatives (inserted items always return `true`)
/// - Tunable false positive rate
/// - Constant space usage
///
/// Use [`super::BloomFilterBuilder`] to construct instances.
#[derive(Debug, Clone, PartialEq)]
pub struct BloomFilter {
    /// Number of hash rounds per operation (d)
    pub(super) num_hashes: u32,
    /// Count of bits set to 1, kept in sync by every mutation path
    pub(super) bits_set: u64,
    /// Fixed-size bit array, sized at construction
    pub(super) bits: BitVector,
}

impl BloomFilter {
    /// Inserts a key into the filter.
    ///
    /// After insertion, `contains(&key)` will always return `true`. Insertion
    /// always succeeds; bits already set by earlier insertions are left
    /// untouched, so inserting the same key twice leaves the filter in the
    /// same state as inserting it once.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomfilter::bloom::BloomFilterBuilder;
    /// let mut filter = BloomFilterBuilder::new(1000, 4, 0.01).build()?;
    ///
    /// filter.insert("apple");
    /// filter.insert(42_u64);
    /// filter.insert([1, 2, 3]);
    ///
    /// assert!(filter.contains(&"apple"));
    /// # Ok::<(), bloomfilter::error::Error>(())
    /// ```
    pub fn insert<T: Hash>(&mut self, key: T) {
        for index in self.chain_indices(&key) {
            if self.bits.set(index) {
                self.bits_set += 1;
            }
        }
    }

    /// Tests whether a key is possibly in the set.
    ///
    /// Returns:
    /// - `true`: Key was **possibly** inserted (or false positive)
    /// - `false`: Key was **definitely not** inserted
    ///
    /// Walks the same index chain as [`insert()`](Self::insert) and answers
    /// `false` as soon as one addressed bit is clear; a key that was
    /// inserted had every one of these bits set, so lookups never miss.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomfilter::bloom::BloomFilterBuilder;
    /// let mut filter = BloomFilterBuilder::new(1000, 4, 0.01).build()?;
    /// filter.insert("apple");
    ///
    /// assert!(filter.contains(&"apple")); // true - was inserted
    /// assert!(!filter.contains(&"grape")); // false - never inserted (probably)
    /// # Ok::<(), bloomfilter::error::Error>(())
    /// ```
    pub fn contains<T: Hash>(&self, key: &T) -> bool {
        if self.is_empty() {
            return false;
        }

        self.chain_indices(key).all(|index| self.bits.get(index))
    }

    /// Tests and inserts a key in a single operation.
    ///
    /// Returns whether the key was possibly already in the set before
    /// insertion. This walks the index chain once instead of the twice a
    /// separate `contains()` and `insert()` would.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomfilter::bloom::BloomFilterBuilder;
    /// let mut filter = BloomFilterBuilder::new(1000, 4, 0.01).build()?;
    ///
    /// let was_present = filter.contains_and_insert(&"apple");
    /// assert!(!was_present); // First insertion
    ///
    /// let was_present = filter.contains_and_insert(&"apple");
    /// assert!(was_present); // Now it's in the set
    /// # Ok::<(), bloomfilter::error::Error>(())
    /// ```
    pub fn contains_and_insert<T: Hash>(&mut self, key: &T) -> bool {
        let mut was_present = true;
        for index in self.chain_indices(key) {
            if self.bits.set(index) {
                self.bits_set += 1;
                was_present = false;
            }
        }
        was_present
    }

    /// Returns whether the filter is empty (no keys inserted).
    pub fn is_empty(&self) -> bool {
        self.bits_set == 0
    }

    /// Returns the number of bits set to 1.
    ///
    /// O(1): the count is maintained incrementally by insertion and never
    /// recomputed by scanning the bit array. It is non-decreasing and
    /// bounded by [`capacity()`](Self::capacity).
    pub fn bits_used(&self) -> u64 {
        self.bits_set
    }

    /// Returns the total number of bits in the filter (capacity).
    pub fn capacity(&self) -> u64 {
        self.bits.len()
    }

    /// Returns the number of hash rounds used per operation.
    pub fn num_hashes(&self) -> u32 {
        self.num_hashes
    }

    /// Returns the current load factor (fraction of bits set).
    ///
    /// Values near 0.5 indicate the filter is approaching saturation.
    pub fn load_factor(&self) -> f64 {
        self.bits_set as f64 / self.bits.len() as f64
    }

    /// Estimates the current false positive probability.
    ///
    /// Uses the approximation `load_factor^d`, where the load factor is the
    /// *actual* measured fraction of bits currently set and `d` is the
    /// number of hash rounds. This is the probability that `d` independently
    /// chosen bits are all already 1. This is a projection from current occupancy,
    /// not a measurement from real queries, and it never decreases as keys
    /// are inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomfilter::bloom::BloomFilterBuilder;
    /// let mut filter = BloomFilterBuilder::new(1000, 4, 0.01).build()?;
    /// assert_eq!(filter.estimated_fpp(), 0.0);
    ///
    /// filter.insert("apple");
    /// assert!(filter.estimated_fpp() > 0.0);
    /// # Ok::<(), bloomfilter::error::Error>(())
    /// ```
    pub fn estimated_fpp(&self) -> f64 {
        self.load_factor().powf(f64::from(self.num_hashes))
    }

    /// Produces the chain of bit indices for a key.
    ///
    /// The running seed starts at a fixed value; each round re-seeds the
    /// keyed hash with the previous round's output and reduces it modulo the
    /// bit-array length. This is the single source of indices for insertion
    /// and lookup; both must observe the identical chain, or the
    /// no-false-negative guarantee breaks.
    fn chain_indices<'a, T: Hash>(&self, key: &'a T) -> IndexChain<'a, T> {
        IndexChain {
            key,
            seed: INITIAL_CHAIN_SEED,
            num_bits: self.bits.len(),
            rounds_left: self.num_hashes,
        }
    }
}

/// Iterator over the hash-chained bit indices of one key.
struct IndexChain<'a, T: Hash> {
    key: &'a T,
    seed: u64,
    num_bits: u64,
    rounds_left: u32,
}

impl<T: Hash> Iterator for IndexChain<'_, T> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.rounds_left == 0 {
            return None;
        }
        self.rounds_left -= 1;

        self.seed = hash_key(self.key, self.seed);
        Some(self.seed % self.num_bits)
    }
}
