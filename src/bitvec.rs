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

//! Fixed-size bit storage.

/// A fixed-length sequence of bits, packed into `u64` words.
///
/// The length is set at creation and never changes; all bits start at zero.
/// Bits can be read and set but never cleared.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BitVector {
    num_bits: u64,
    words: Box<[u64]>,
}

impl BitVector {
    /// Creates an all-zero bit vector of exactly `num_bits` bits.
    pub(crate) fn new(num_bits: u64) -> Self {
        let num_words = num_bits.div_ceil(64) as usize;
        Self {
            num_bits,
            words: vec![0u64; num_words].into_boxed_slice(),
        }
    }

    /// Returns the number of addressable bits.
    pub(crate) fn len(&self) -> u64 {
        self.num_bits
    }

    /// Gets the value of a single bit.
    pub(crate) fn get(&self, index: u64) -> bool {
        debug_assert!(index < self.num_bits);

        let word_index = (index >> 6) as usize; // Equivalent to index / 64
        let bit_offset = index & 63; // Equivalent to index % 64
        let mask = 1u64 << bit_offset;
        (self.words[word_index] & mask) != 0
    }

    /// Sets a single bit, returning whether it was previously clear.
    pub(crate) fn set(&mut self, index: u64) -> bool {
        debug_assert!(index < self.num_bits);

        let word_index = (index >> 6) as usize;
        let bit_offset = index & 63;
        let mask = 1u64 << bit_offset;

        let was_clear = (self.words[word_index] & mask) == 0;
        self.words[word_index] |= mask;
        was_clear
    }
}
