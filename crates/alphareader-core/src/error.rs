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

//! Configuration error types.
//!
//! All errors in this module are raised eagerly, at scanner or writer
//! construction, before a single byte of data is read or written. Mid-stream
//! failures live in the `alphareader` crate's error types instead.

use thiserror::Error;

/// Which of the two separators a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeparatorRole {
    /// Separates fields within a record.
    Delimiter,
    /// Separates records within the stream.
    Terminator,
}

impl std::fmt::Display for SeparatorRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Delimiter => write!(f, "field delimiter"),
            Self::Terminator => write!(f, "record terminator"),
        }
    }
}

/// Errors raised while validating a scan or write configuration.
///
/// # Examples
///
/// ```
/// use alphareader_core::{ConfigError, SeparatorRole};
///
/// let err = ConfigError::MultiByteSeparator {
///     role: SeparatorRole::Delimiter,
///     ch: '«',
///     width: 2,
///     encoding: "UTF-8",
/// };
/// assert_eq!(
///     err.to_string(),
///     "field delimiter character '«' encodes to 2 bytes in 'UTF-8', expected exactly one"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The encoding label is not recognized by the codec registry.
    #[error("unknown encoding label '{label}'")]
    UnknownEncoding {
        /// The label as given by the caller.
        label: String,
    },

    /// The chunk size is zero.
    #[error("chunk size must be greater than zero")]
    InvalidChunkSize,

    /// A separator character cannot be encoded at all under the configured
    /// encoding.
    #[error("{role} character '{ch}' has no representation in encoding '{encoding}'")]
    UnrepresentableSeparator {
        /// Whether the delimiter or the terminator failed.
        role: SeparatorRole,
        /// The offending character.
        ch: char,
        /// Canonical name of the configured encoding.
        encoding: &'static str,
    },

    /// A separator character encodes to more than one byte.
    #[error("{role} character '{ch}' encodes to {width} bytes in '{encoding}', expected exactly one")]
    MultiByteSeparator {
        /// Whether the delimiter or the terminator failed.
        role: SeparatorRole,
        /// The offending character.
        ch: char,
        /// Width of the encoded form in bytes.
        width: usize,
        /// Canonical name of the configured encoding.
        encoding: &'static str,
    },

    /// Delimiter and terminator are the same character, which makes the
    /// format unparseable.
    #[error("field delimiter and record terminator are both '{ch}'")]
    SeparatorConflict {
        /// The character configured for both roles.
        ch: char,
    },

    /// A transform chain was constructed with no stages.
    #[error("transform chain must contain at least one stage")]
    EmptyTransformChain,
}
