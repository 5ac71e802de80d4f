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

use super::BloomFilter;
use crate::bitvec::BitVector;
use crate::error::Error;

/// Minimum expected number of distinct keys.
pub const MIN_NUM_KEYS: u64 = 1;
/// Minimum number of hash rounds per operation.
pub const MIN_NUM_HASHES: u32 = 1;

/// Builder for creating [`BloomFilter`] instances.
///
/// Holds the three construction parameters and produces a filter whose bit
/// array is sized by [`bits_needed()`](Self::bits_needed). Validation
/// happens in [`build()`](Self::build), before any storage is allocated.
#[derive(Debug, Clone)]
pub struct BloomFilterBuilder {
    num_keys: u64,
    num_hashes: u32,
    max_false_positive_rate: f64,
}

impl BloomFilterBuilder {
    /// Creates a builder for a filter that will store `num_keys` keys, using
    /// `num_hashes` hash rounds per operation, with a false-positive rate of
    /// at most `max_false_positive_rate`.
    ///
    /// # Arguments
    ///
    /// - `num_keys`: Expected number of distinct keys (at least 1)
    /// - `num_hashes`: Number of hash rounds per insert/lookup (at least 1)
    /// - `max_false_positive_rate`: Target false-positive rate, strictly
    ///   between 0.0 and 1.0
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomfilter::bloom::BloomFilterBuilder;
    /// let filter = BloomFilterBuilder::new(100_000, 4, 0.05).build()?;
    /// assert_eq!(filter.capacity(), 624_700);
    /// # Ok::<(), bloomfilter::error::Error>(())
    /// ```
    pub fn new(num_keys: u64, num_hashes: u32, max_false_positive_rate: f64) -> Self {
        BloomFilterBuilder {
            num_keys,
            num_hashes,
            max_false_positive_rate,
        }
    }

    /// Builds the Bloom filter.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidConfiguration`](crate::error::ErrorKind::InvalidConfiguration)
    /// error, without allocating any bit storage, if any of:
    ///
    /// - `num_keys` < [`MIN_NUM_KEYS`]
    /// - `num_hashes` < [`MIN_NUM_HASHES`]
    /// - `max_false_positive_rate` is not strictly between 0.0 and 1.0
    ///   (this rejects NaN as well)
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomfilter::bloom::BloomFilterBuilder;
    /// # use bloomfilter::error::ErrorKind;
    /// let err = BloomFilterBuilder::new(1000, 0, 0.05).build().unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);
    /// ```
    pub fn build(self) -> Result<BloomFilter, Error> {
        if self.num_keys < MIN_NUM_KEYS {
            return Err(Error::invalid_configuration(format!(
                "num_keys must be at least {MIN_NUM_KEYS}"
            ))
            .with_context("num_keys", self.num_keys));
        }
        if self.num_hashes < MIN_NUM_HASHES {
            return Err(Error::invalid_configuration(format!(
                "num_hashes must be at least {MIN_NUM_HASHES}"
            ))
            .with_context("num_hashes", self.num_hashes));
        }
        if !(self.max_false_positive_rate > 0.0 && self.max_false_positive_rate < 1.0) {
            return Err(Error::invalid_configuration(
                "max_false_positive_rate must be strictly between 0.0 and 1.0",
            )
            .with_context("max_false_positive_rate", self.max_false_positive_rate));
        }

        let num_bits = Self::bits_needed(self.num_keys, self.num_hashes, self.max_false_positive_rate);

        Ok(BloomFilter {
            num_hashes: self.num_hashes,
            bits_set: 0,
            bits: BitVector::new(num_bits),
        })
    }

    /// Returns the number of bits needed to store `num_keys` keys with
    /// `num_hashes` hash rounds at a false-positive rate of at most
    /// `max_false_positive_rate`.
    ///
    /// Back-solves the target rate for the per-round bit occupancy:
    ///
    /// ```text
    /// phi = 1 - p^(1/d)
    /// N   = ceil(d / (1 - phi^(1/n)))
    /// ```
    ///
    /// The ceiling makes the filter err on the side of slightly more memory
    /// rather than a worse rate than requested. Inputs are expected to be
    /// valid per [`build()`](Self::build).
    ///
    /// # Examples
    ///
    /// ```
    /// # use bloomfilter::bloom::BloomFilterBuilder;
    /// assert_eq!(BloomFilterBuilder::bits_needed(100_000, 4, 0.05), 624_700);
    /// ```
    pub fn bits_needed(num_keys: u64, num_hashes: u32, max_false_positive_rate: f64) -> u64 {
        let n = num_keys as f64;
        let d = f64::from(num_hashes);

        let phi = 1.0 - max_false_positive_rate.powf(1.0 / d);
        (d / (1.0 - phi.powf(1.0 / n))).ceil() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_build_valid() {
        let filter = BloomFilterBuilder::new(1000, 4, 0.01).build().unwrap();
        assert_eq!(filter.num_hashes(), 4);
        assert_eq!(
            filter.capacity(),
            BloomFilterBuilder::bits_needed(1000, 4, 0.01)
        );
        assert!(filter.is_empty());
    }

    #[test]
    fn test_build_rejects_zero_keys() {
        let err = BloomFilterBuilder::new(0, 4, 0.05).build().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);
    }

    #[test]
    fn test_build_rejects_zero_hashes() {
        let err = BloomFilterBuilder::new(1000, 0, 0.05).build().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);
    }

    #[test]
    fn test_build_rejects_rate_bounds() {
        for rate in [0.0, 1.0, -0.1, 1.5, f64::NAN] {
            let err = BloomFilterBuilder::new(1000, 4, rate).build().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidConfiguration, "rate {rate}");
        }
    }

    #[test]
    fn test_bits_needed_reference_value() {
        assert_eq!(BloomFilterBuilder::bits_needed(100_000, 4, 0.05), 624_700);
    }

    #[test]
    fn test_bits_needed_rounds_up() {
        // A tighter rate or more keys can only grow the array.
        let base = BloomFilterBuilder::bits_needed(1000, 4, 0.05);
        assert!(BloomFilterBuilder::bits_needed(1000, 4, 0.01) > base);
        assert!(BloomFilterBuilder::bits_needed(2000, 4, 0.05) > base);
        assert!(base >= 4);
    }

    #[test]
    fn test_bits_needed_single_key() {
        // One key, one round: phi = 1 - p, N = ceil(1 / (1 - phi)) = ceil(1/p).
        assert_eq!(BloomFilterBuilder::bits_needed(1, 1, 0.5), 2);
        assert_eq!(BloomFilterBuilder::bits_needed(1, 1, 0.25), 4);
    }
}
