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

//! # AlphaReader
//!
//! A streaming reader and writer for flat text files whose records and
//! fields are separated by single configurable characters instead of the
//! CSV conventions. The defaults target legacy data feeds: records
//! terminated by `'¬'`, fields delimited by `'«'`, bytes encoded as cp1252.
//!
//! The scanner reads in fixed-size chunks and yields records lazily, so
//! arbitrarily large files are processed in bounded memory. Per-field
//! transform chains turn raw strings into typed [`Value`]s during the scan.
//!
//! ## Quick Start
//!
//! ```
//! use alphareader::{transforms, RecordScanner, ScanConfig, Transform, Value};
//! use std::io::Cursor;
//!
//! // Comma/newline layout in UTF-8; the defaults would expect «/¬ in cp1252.
//! let config = ScanConfig {
//!     delimiter: ',',
//!     terminator: '\n',
//!     encoding: "utf-8".to_string(),
//!     ..Default::default()
//! };
//!
//! let chain = Transform::chain(vec![transforms::trim(), transforms::parse_int()])?;
//!
//! let scanner = RecordScanner::with_config(Cursor::new(" 1 ,2\n3, 4 \n"), config)?
//!     .with_transform(chain);
//!
//! let totals: Vec<i64> = scanner
//!     .map(|record| Ok(record?.iter().filter_map(Value::as_int).sum()))
//!     .collect::<Result<_, alphareader::ScanError>>()?;
//!
//! assert_eq!(totals, vec![3, 7]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Writing
//!
//! [`write_records`] emits the same layout the scanner reads, so a write
//! followed by a scan with matching settings round-trips:
//!
//! ```
//! use alphareader::{write_records, RecordScanner, ScanConfig, Value, WriteConfig};
//! use std::io::Cursor;
//!
//! let records = vec![vec![Value::from("a"), Value::from("b")]];
//!
//! let mut buf = Vec::new();
//! write_records(&mut buf, &records, WriteConfig::default())?;
//!
//! let back: Vec<_> = RecordScanner::new(Cursor::new(buf))?
//!     .collect::<Result<_, _>>()?;
//! assert_eq!(back, records);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod scan;
pub mod write;

pub use error::{ScanError, ScanResult, WriteError, WriteResult};
pub use scan::{
    scan_path, scan_path_with_config, Record, RecordScanner, ScanConfig, TrailingData,
    DEFAULT_CHUNK_SIZE, DEFAULT_DELIMITER, DEFAULT_ENCODING, DEFAULT_TERMINATOR,
};
pub use write::{
    write_records, write_records_to_path, write_records_to_path_with_config, WriteConfig,
};

pub use alphareader_core::{
    transforms, ConfigError, FieldTransform, SeparatorRole, Transform, TransformError, Value,
};
