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

//! Bloom Filter implementation for probabilistic set membership testing.
//!
//! A Bloom filter is a space-efficient probabilistic data structure used to test whether
//! an element is a member of a set. False positive matches are possible, but false negatives
//! are not. In other words, a query returns either "possibly in set" or "definitely not in set".
//!
//! # Properties
//!
//! - **No false negatives**: If an item was inserted, `contains()` will always return `true`
//! - **Possible false positives**: `contains()` may return `true` for items never inserted
//! - **Fixed size**: The bit array is sized once at construction and never resizes
//! - **Monotonic**: Bits are only ever set; there is no deletion, reset, or merging
//!
//! # Usage
//!
//! ```rust
//! use bloomfilter::bloom::BloomFilterBuilder;
//!
//! // Sized for 1000 expected keys, 4 hash rounds, 1% target false-positive rate
//! let mut filter = BloomFilterBuilder::new(1000, 4, 0.01).build()?;
//!
//! // Insert items
//! filter.insert("apple");
//! filter.insert("banana");
//! filter.insert(42_u64);
//!
//! // Check membership
//! assert!(filter.contains(&"apple")); // true - definitely inserted
//! assert!(!filter.contains(&"grape")); // false - never inserted (probably)
//!
//! // Get statistics
//! println!("Capacity: {} bits", filter.capacity());
//! println!("Bits used: {}", filter.bits_used());
//! println!("Est. FPP: {:.4}%", filter.estimated_fpp() * 100.0);
//! # Ok::<(), bloomfilter::error::Error>(())
//! ```
//!
//! # Sizing
//!
//! The bit array length is derived from the three construction parameters by
//! back-solving the target false-positive rate:
//!
//! ```text
//! phi = 1 - p^(1/d)               per-round probability a bit is not zero
//! N   = ceil(d / (1 - phi^(1/n))) bits needed
//! ```
//!
//! where `n` is the expected key count, `d` the number of hash rounds, and
//! `p` the target rate. Rounding is always upward, trading a little extra
//! memory for a rate no worse than requested.
//!
//! # Implementation Details
//!
//! - Uses XXH64 for hashing
//! - Derives the `d` bit indices per key by hash chaining: each round
//!   re-seeds the hash with the previous round's output
//! - Bits packed efficiently in `u64` words
//! - Tracks the set-bit count incrementally, so the false-positive estimate
//!   and [`BloomFilter::bits_used`](BloomFilter::bits_used) are O(1)
//!
//! # References
//!
//! - Bloom, Burton H. (1970). "Space/time trade-offs in hash coding with allowable errors"

mod builder;
mod sketch;

pub use self::builder::BloomFilterBuilder;
pub use self::sketch::BloomFilter;
