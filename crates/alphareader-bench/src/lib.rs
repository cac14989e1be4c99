// AlphaReader - streaming, delimiter-configurable record reader/writer
//
// Copyright (c) 2026 AlphaReader contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Deterministic dataset generators for the benches. No RNG: identical input
//! across runs keeps criterion's change detection meaningful.

/// Standard dataset sizes, in records.
pub mod sizes {
    pub const SMALL: usize = 1_000;
    pub const MEDIUM: usize = 10_000;
    pub const LARGE: usize = 100_000;
}

const FIRST_NAMES: &[&str] = &[
    "John", "Jane", "Ana", "Luis", "Wei", "Aisha", "Sven", "Noor", "Ivan", "Mei",
];
const LAST_NAMES: &[&str] = &[
    "Doe", "Roe", "Silva", "Garcia", "Chen", "Khan", "Berg", "Haddad", "Petrov", "Tanaka",
];

/// Generate a people-style dataset in the legacy layout:
/// `id«first«last«year¬` per record, cp1252-encoded.
pub fn generate_legacy_people(records: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(records * 24);
    for i in 0..records {
        let first = FIRST_NAMES[i % FIRST_NAMES.len()];
        let last = LAST_NAMES[(i / FIRST_NAMES.len()) % LAST_NAMES.len()];
        let year = 1960 + (i % 60);
        out.extend_from_slice(i.to_string().as_bytes());
        out.push(0xAB);
        out.extend_from_slice(first.as_bytes());
        out.push(0xAB);
        out.extend_from_slice(last.as_bytes());
        out.push(0xAB);
        out.extend_from_slice(year.to_string().as_bytes());
        out.push(0xAC);
    }
    out
}

/// The same dataset in comma/newline layout, UTF-8, for the `csv` crate
/// comparison.
pub fn generate_csv_people(records: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(records * 24);
    for i in 0..records {
        let first = FIRST_NAMES[i % FIRST_NAMES.len()];
        let last = LAST_NAMES[(i / FIRST_NAMES.len()) % LAST_NAMES.len()];
        let year = 1960 + (i % 60);
        out.extend_from_slice(format!("{},{},{},{}\n", i, first, last, year).as_bytes());
    }
    out
}

/// A purely numeric dataset for transform-chain benches:
/// `a,b,c,d\n` per record, UTF-8.
pub fn generate_numeric(records: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(records * 16);
    for i in 0..records {
        out.extend_from_slice(
            format!("{},{},{},{}\n", i, i * 3 % 997, i * 7 % 997, i * 13 % 997).as_bytes(),
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_dataset_is_deterministic() {
        assert_eq!(generate_legacy_people(100), generate_legacy_people(100));
    }

    #[test]
    fn test_legacy_dataset_record_count() {
        let data = generate_legacy_people(50);
        let terminators = data.iter().filter(|&&b| b == 0xAC).count();
        assert_eq!(terminators, 50);
    }

    #[test]
    fn test_csv_dataset_parallel_to_legacy() {
        let legacy = generate_legacy_people(10);
        let csv = generate_csv_people(10);
        assert_eq!(
            legacy.iter().filter(|&&b| b == 0xAB).count(),
            csv.iter().filter(|&&b| b == b',').count()
        );
    }
}
