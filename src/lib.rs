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

//! # Bloom Filter Library
//!
//! A fixed-memory, probabilistic set-membership structure. A Bloom filter
//! answers either "possibly in set" or "definitely not in set", using far
//! less memory than exact set storage, which makes it useful for
//! pre-filtering expensive lookups.
//!
//! The filter is sized at construction from three parameters (the expected
//! number of distinct keys, the number of hash rounds per operation, and the
//! target false-positive rate) and never resizes afterwards.
//!
//! ```rust
//! use bloomfilter::bloom::BloomFilterBuilder;
//!
//! let mut filter = BloomFilterBuilder::new(10_000, 4, 0.01).build()?;
//!
//! filter.insert("apple");
//! assert!(filter.contains(&"apple"));
//! assert!(!filter.contains(&"grape"));
//! # Ok::<(), bloomfilter::error::Error>(())
//! ```

#![deny(missing_docs)]

mod bitvec;
mod hash;

pub mod bloom;
pub mod error;
