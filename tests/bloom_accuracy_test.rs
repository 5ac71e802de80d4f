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

use bloomfilter::bloom::BloomFilterBuilder;
use googletest::assert_that;
use googletest::prelude::near;

const NUM_KEYS: u64 = 100_000;
const NUM_HASHES: u32 = 4;
const MAX_FALSE_POSITIVE_RATE: f64 = 0.05;
const RATE_TOLERANCE: f64 = 0.02;

#[test]
fn test_sizing_closed_form() {
    // N = ceil(d / (1 - phi^(1/n))) with phi = 1 - p^(1/d).
    let phi = 1.0 - MAX_FALSE_POSITIVE_RATE.powf(1.0 / f64::from(NUM_HASHES));
    let closed_form = (f64::from(NUM_HASHES) / (1.0 - phi.powf(1.0 / NUM_KEYS as f64))).ceil();

    let bits = BloomFilterBuilder::bits_needed(NUM_KEYS, NUM_HASHES, MAX_FALSE_POSITIVE_RATE);
    assert_eq!(bits, closed_form as u64);
    assert_eq!(bits, 624_700);
}

#[test]
fn test_capacity_matches_sizing() {
    let filter = BloomFilterBuilder::new(NUM_KEYS, NUM_HASHES, MAX_FALSE_POSITIVE_RATE)
        .build()
        .unwrap();
    assert_eq!(filter.capacity(), 624_700);
    assert_eq!(filter.num_hashes(), NUM_HASHES);
}

/// The wordlist scenario: fill the filter to its design load, then compare
/// the projected false-positive rate against both the target rate and the
/// rate actually measured over disjoint keys.
#[test]
fn test_end_to_end_accuracy() {
    let mut filter = BloomFilterBuilder::new(NUM_KEYS, NUM_HASHES, MAX_FALSE_POSITIVE_RATE)
        .build()
        .unwrap();

    for i in 0..NUM_KEYS {
        filter.insert(format!("word_{:06}", i));
    }

    // At design load the projection should land near the target rate.
    let estimate = filter.estimated_fpp();
    assert_that!(estimate, near(MAX_FALSE_POSITIVE_RATE, RATE_TOLERANCE));

    // Every inserted key is still found.
    let missing = (0..NUM_KEYS)
        .filter(|i| !filter.contains(&format!("word_{:06}", i)))
        .count();
    assert_eq!(missing, 0);

    // Disjoint keys come back positive at roughly the projected rate.
    let false_positives = (0..NUM_KEYS)
        .filter(|i| filter.contains(&format!("other_{:06}", i)))
        .count();
    let measured = false_positives as f64 / NUM_KEYS as f64;
    assert_that!(measured, near(estimate, RATE_TOLERANCE));
}
