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

use std::env;
use std::fs;

use bloomfilter::bloom::BloomFilterBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let num_keys: u64 = 100_000;
    let num_hashes: u32 = 4;
    let max_false_positive_rate = 0.05;

    // Words come from a wordlist file if one is given on the command line,
    // otherwise they are generated. The first half is inserted; the second
    // half probes for false positives.
    let words: Vec<String> = match env::args().nth(1) {
        Some(path) => fs::read_to_string(path)?
            .lines()
            .map(|line| line.trim().to_string())
            .take(2 * num_keys as usize)
            .collect(),
        None => (0..2 * num_keys).map(|i| format!("word_{:06}", i)).collect(),
    };
    let num_keys = (words.len() / 2) as u64;

    let mut filter = BloomFilterBuilder::new(num_keys, num_hashes, max_false_positive_rate).build()?;

    println!(
        "Created Bloom filter: {} bits for {} keys, {} hash rounds, target rate {}",
        filter.capacity(),
        num_keys,
        num_hashes,
        max_false_positive_rate
    );

    let (inserted, probes) = words.split_at(num_keys as usize);

    println!("\nInserting {} words...", inserted.len());
    for word in inserted {
        filter.insert(word);
    }

    println!("Bits used: {}", filter.bits_used());
    println!("Load factor: {:.4}", filter.load_factor());
    println!("Projected false-positive rate: {:.4}", filter.estimated_fpp());

    // Every inserted word must still be found.
    let missing = inserted.iter().filter(|word| !filter.contains(word)).count();
    println!("\nWords missing: {}", missing);

    // Probe with words that were never inserted.
    let false_positives = probes.iter().filter(|word| filter.contains(word)).count();
    println!(
        "Actual false-positive rate: {:.4} ({} of {} probes)",
        false_positives as f64 / probes.len() as f64,
        false_positives,
        probes.len()
    );

    Ok(())
}
