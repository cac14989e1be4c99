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

//! Error types for scanning and writing.
//!
//! Construction-time failures are [`ConfigError`]s from `alphareader-core`;
//! this module adds the mid-stream taxonomy. Every mid-stream error ends the
//! session it occurred in — there is no retry and no recovery. Resuming means
//! re-opening the source and building a new scanner.
//!
//! # Examples
//!
//! ```
//! use alphareader::{RecordScanner, ScanConfig, ScanError};
//! use std::io::Cursor;
//!
//! let config = ScanConfig {
//!     chunk_size: 8,
//!     delimiter: ',',
//!     terminator: '\n',
//!     encoding: "utf-8".to_string(),
//!     ..Default::default()
//! };
//!
//! // The first chunk holds a clean record; the second is never valid UTF-8.
//! let bad: &[u8] = b"ok,line\n\xFF\xFE";
//! let mut scanner = RecordScanner::with_config(Cursor::new(bad), config).unwrap();
//!
//! assert!(scanner.next().unwrap().is_ok());
//! assert!(matches!(
//!     scanner.next().unwrap(),
//!     Err(ScanError::Decode { .. })
//! ));
//! // The session is over after an error.
//! assert!(scanner.next().is_none());
//! ```

use alphareader_core::{ConfigError, TransformError};
use thiserror::Error;

/// Errors that can occur while scanning records.
#[derive(Debug, Error)]
pub enum ScanError {
    /// IO error from the underlying source.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A chunk contained bytes that are not valid for the configured
    /// encoding. `chunk` is the 1-based ordinal of the offending read.
    #[error("invalid byte sequence for encoding '{encoding}' in chunk {chunk}")]
    Decode {
        /// Canonical name of the configured encoding.
        encoding: &'static str,
        /// 1-based index of the chunk that failed to decode.
        chunk: usize,
    },

    /// A transform stage failed. The underlying error is passed through
    /// unmodified.
    #[error("transform failed: {0}")]
    Transform(#[from] TransformError),

    /// The source ended without a final terminator while the scanner was
    /// configured with [`TrailingData::Error`](crate::TrailingData::Error).
    #[error("input ended with an unterminated record of {length} characters")]
    UnterminatedRecord {
        /// Length in characters of the dangling partial record.
        length: usize,
    },

    /// Invalid configuration, surfaced by the path-opening conveniences.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type for scan operations.
pub type ScanResult<T> = Result<T, ScanError>;

/// Errors that can occur while writing records.
#[derive(Debug, Error)]
pub enum WriteError {
    /// IO error from the destination.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration (unknown encoding, bad separators).
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A field contains characters the configured encoding cannot
    /// represent. Indexes are 0-based.
    #[error("field {field} of record {record} cannot be encoded as '{encoding}'")]
    Unencodable {
        /// 0-based record index within the written sequence.
        record: usize,
        /// 0-based field index within the record.
        field: usize,
        /// Canonical name of the configured encoding.
        encoding: &'static str,
    },
}

/// Result type for write operations.
pub type WriteResult<T> = Result<T, WriteError>;
