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

//! Encoding resolution and separator validation.
//!
//! Both the scanner and the writer resolve their encoding label exactly once,
//! at construction, and hold the resulting [`Encoding`] for the whole session.
//! Separator validation happens at the same point: a separator must encode to
//! exactly one byte under the configured encoding, otherwise splitting raw
//! bytes on it would be ambiguous.

use crate::error::{ConfigError, SeparatorRole};
use encoding_rs::Encoding;

/// Resolve an encoding label (e.g. `"cp1252"`, `"UTF-8"`) to a codec.
///
/// Labels are matched per the WHATWG registry, case-insensitively. The
/// `replacement` label is rejected: it decodes every input to U+FFFD and can
/// never round-trip data.
///
/// # Examples
///
/// ```
/// use alphareader_core::resolve_encoding;
///
/// let enc = resolve_encoding("cp1252").unwrap();
/// assert_eq!(enc.name(), "windows-1252");
///
/// assert!(resolve_encoding("no-such-codec").is_err());
/// ```
pub fn resolve_encoding(label: &str) -> Result<&'static Encoding, ConfigError> {
    Encoding::for_label_no_replacement(label.as_bytes()).ok_or_else(|| {
        ConfigError::UnknownEncoding {
            label: label.to_string(),
        }
    })
}

/// Encode a separator character and require a one-byte form.
///
/// # Examples
///
/// ```
/// use alphareader_core::{encode_separator, resolve_encoding, SeparatorRole};
///
/// let cp1252 = resolve_encoding("cp1252").unwrap();
/// assert_eq!(
///     encode_separator(cp1252, '«', SeparatorRole::Delimiter).unwrap(),
///     0xAB
/// );
///
/// // The same character is two bytes in UTF-8.
/// let utf8 = resolve_encoding("utf-8").unwrap();
/// assert!(encode_separator(utf8, '«', SeparatorRole::Delimiter).is_err());
/// ```
pub fn encode_separator(
    encoding: &'static Encoding,
    ch: char,
    role: SeparatorRole,
) -> Result<u8, ConfigError> {
    // UTF-16 cannot serve as an output encoding; `Encoding::encode` would
    // silently fall back to UTF-8 bytes. Every character is at least two
    // bytes under UTF-16 anyway, so no separator can satisfy the one-byte
    // contract there.
    if encoding.output_encoding() != encoding {
        return Err(ConfigError::MultiByteSeparator {
            role,
            ch,
            width: ch.len_utf16() * 2,
            encoding: encoding.name(),
        });
    }
    let mut buf = [0u8; 4];
    let (bytes, _, had_errors) = encoding.encode(ch.encode_utf8(&mut buf));
    if had_errors {
        return Err(ConfigError::UnrepresentableSeparator {
            role,
            ch,
            encoding: encoding.name(),
        });
    }
    match bytes.as_ref() {
        [byte] => Ok(*byte),
        other => Err(ConfigError::MultiByteSeparator {
            role,
            ch,
            width: other.len(),
            encoding: encoding.name(),
        }),
    }
}

/// Validate a delimiter/terminator pair and return their encoded bytes.
///
/// Fails if the two characters are equal, or if either has no one-byte form
/// under `encoding`.
pub fn validate_separators(
    encoding: &'static Encoding,
    delimiter: char,
    terminator: char,
) -> Result<(u8, u8), ConfigError> {
    if delimiter == terminator {
        return Err(ConfigError::SeparatorConflict { ch: delimiter });
    }
    let delim = encode_separator(encoding, delimiter, SeparatorRole::Delimiter)?;
    let term = encode_separator(encoding, terminator, SeparatorRole::Terminator)?;
    Ok((delim, term))
}
