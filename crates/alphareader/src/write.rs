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

//! The record writer.
//!
//! [`write_records`] serializes records into the same flat layout the
//! scanner reads: fields joined by the delimiter, each record closed by the
//! terminator, the whole stream encoded under the configured encoding. A
//! file written here and scanned back with a matching [`ScanConfig`] yields
//! the original records.
//!
//! Fields are rendered through [`Value`]'s `Display` impl, so a record may
//! mix typed values freely; `Value::Null` renders as the empty field. The
//! format has no quoting or escaping, so a field whose rendered text
//! contains a separator character would corrupt the stream on read-back.
//! That responsibility stays with the caller, matching the scanner's rule
//! that separators are structural wherever they appear.
//!
//! [`ScanConfig`]: crate::ScanConfig

use crate::error::{WriteError, WriteResult};
use crate::scan::{Record, DEFAULT_DELIMITER, DEFAULT_ENCODING, DEFAULT_TERMINATOR};
use alphareader_core::{resolve_encoding, validate_separators};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Configuration for a write session. Mirrors the scan-side separator and
/// encoding settings; chunking and trailing policy have no writer analogue.
///
/// # Examples
///
/// ```
/// use alphareader::WriteConfig;
///
/// let config = WriteConfig::default();
/// assert_eq!(config.delimiter, '«');
/// assert_eq!(config.terminator, '¬');
/// assert_eq!(config.encoding, "cp1252");
/// ```
#[derive(Debug, Clone)]
pub struct WriteConfig {
    /// Character joined between fields. Must encode to exactly one byte
    /// under `encoding`.
    pub delimiter: char,
    /// Character appended after every record. Must encode to exactly one
    /// byte under `encoding`.
    pub terminator: char,
    /// Encoding label for the output stream.
    pub encoding: String,
}

impl Default for WriteConfig {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            terminator: DEFAULT_TERMINATOR,
            encoding: DEFAULT_ENCODING.to_string(),
        }
    }
}

/// Write records to a sink, returning the number of bytes written.
///
/// Validation mirrors the scanner: the encoding label must resolve and both
/// separators must encode to exactly one distinct byte. A field that cannot
/// be represented in the target encoding fails the write with
/// [`WriteError::Unencodable`], identifying the offending record and field;
/// earlier records may already have reached the sink.
///
/// # Examples
///
/// ```
/// use alphareader::{write_records, Value, WriteConfig};
///
/// let config = WriteConfig {
///     delimiter: ',',
///     terminator: '\n',
///     encoding: "utf-8".to_string(),
/// };
///
/// let records = vec![
///     vec![Value::from("1"), Value::from("John")],
///     vec![Value::from("2"), Value::from("Jane")],
/// ];
///
/// let mut out = Vec::new();
/// let written = write_records(&mut out, &records, config).unwrap();
/// assert_eq!(out, b"1,John\n2,Jane\n");
/// assert_eq!(written, out.len());
/// ```
pub fn write_records<W: Write>(
    sink: &mut W,
    records: &[Record],
    config: WriteConfig,
) -> WriteResult<usize> {
    let encoding = resolve_encoding(&config.encoding)?;
    validate_separators(encoding, config.delimiter, config.terminator)?;

    let mut written = 0usize;
    let mut line = String::new();
    for (index, record) in records.iter().enumerate() {
        line.clear();
        for (pos, field) in record.iter().enumerate() {
            if pos > 0 {
                line.push(config.delimiter);
            }
            line.push_str(&field.to_string());
        }
        line.push(config.terminator);

        let (bytes, _, had_errors) = encoding.encode(&line);
        if had_errors {
            // Locate the first unencodable field for the error report.
            let field = record
                .iter()
                .position(|f| encoding.encode(&f.to_string()).2)
                .unwrap_or(0);
            return Err(WriteError::Unencodable {
                record: index,
                field,
                encoding: encoding.name(),
            });
        }
        sink.write_all(&bytes)?;
        written += bytes.len();
    }
    sink.flush()?;
    Ok(written)
}

/// Create (or truncate) a file and write records to it with the default
/// configuration, returning the number of bytes written.
pub fn write_records_to_path<P: AsRef<Path>>(path: P, records: &[Record]) -> WriteResult<usize> {
    write_records_to_path_with_config(path, records, WriteConfig::default())
}

/// Create (or truncate) a file and write records to it with a specific
/// configuration, returning the number of bytes written.
pub fn write_records_to_path_with_config<P: AsRef<Path>>(
    path: P,
    records: &[Record],
    config: WriteConfig,
) -> WriteResult<usize> {
    let file = File::create(path)?;
    let mut sink = BufWriter::new(file);
    write_records(&mut sink, records, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alphareader_core::{ConfigError, Value};

    fn utf8_config() -> WriteConfig {
        WriteConfig {
            delimiter: ',',
            terminator: '\n',
            encoding: "utf-8".to_string(),
        }
    }

    // ==================== Validation tests ====================

    #[test]
    fn test_unknown_encoding_rejected() {
        let config = WriteConfig {
            encoding: "not-a-codec".to_string(),
            ..utf8_config()
        };
        let err = write_records(&mut Vec::new(), &[], config).unwrap_err();
        assert!(matches!(
            err,
            WriteError::Config(ConfigError::UnknownEncoding { .. })
        ));
    }

    #[test]
    fn test_multi_byte_separator_rejected() {
        let config = WriteConfig {
            delimiter: '«',
            ..utf8_config()
        };
        let err = write_records(&mut Vec::new(), &[], config).unwrap_err();
        assert!(matches!(
            err,
            WriteError::Config(ConfigError::MultiByteSeparator { .. })
        ));
    }

    #[test]
    fn test_equal_separators_rejected() {
        let config = WriteConfig {
            terminator: ',',
            ..utf8_config()
        };
        let err = write_records(&mut Vec::new(), &[], config).unwrap_err();
        assert!(matches!(
            err,
            WriteError::Config(ConfigError::SeparatorConflict { .. })
        ));
    }

    // ==================== Layout tests ====================

    #[test]
    fn test_empty_record_list_writes_nothing() {
        let mut out = Vec::new();
        let written = write_records(&mut out, &[], utf8_config()).unwrap();
        assert_eq!(written, 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_every_record_is_terminated() {
        let records = vec![vec![Value::from("a")], vec![Value::from("b")]];
        let mut out = Vec::new();
        write_records(&mut out, &records, utf8_config()).unwrap();
        assert_eq!(out, b"a\nb\n");
    }

    #[test]
    fn test_delimiter_joins_fields() {
        let records = vec![vec![
            Value::from("1"),
            Value::from("John"),
            Value::from("Doe"),
        ]];
        let mut out = Vec::new();
        write_records(&mut out, &records, utf8_config()).unwrap();
        assert_eq!(out, b"1,John,Doe\n");
    }

    #[test]
    fn test_typed_values_render_via_display() {
        let records = vec![vec![
            Value::Int(42),
            Value::Float(2.5),
            Value::Bool(true),
            Value::Null,
        ]];
        let mut out = Vec::new();
        write_records(&mut out, &records, utf8_config()).unwrap();
        assert_eq!(out, b"42,2.5,true,\n");
    }

    #[test]
    fn test_default_config_emits_cp1252_bytes() {
        let records = vec![vec![Value::from("café"), Value::from("x")]];
        let mut out = Vec::new();
        write_records(&mut out, &records, WriteConfig::default()).unwrap();
        // 'é' = 0xE9, '«' = 0xAB, '¬' = 0xAC in windows-1252.
        assert_eq!(out, b"caf\xE9\xABx\xAC");
    }

    #[test]
    fn test_byte_count_matches_output_length() {
        let records = vec![vec![Value::from("héllo"), Value::from("wörld")]];
        let mut out = Vec::new();
        let written = write_records(&mut out, &records, WriteConfig::default()).unwrap();
        assert_eq!(written, out.len());
        // cp1252 output is one byte per char here, shorter than the UTF-8 text.
        assert_eq!(written, "héllo".chars().count() + 1 + "wörld".chars().count() + 1);
    }

    // ==================== Unencodable field tests ====================

    #[test]
    fn test_unencodable_field_reported_with_position() {
        // 'Ω' has no windows-1252 representation.
        let records = vec![
            vec![Value::from("fine")],
            vec![Value::from("ok"), Value::from("Ω"), Value::from("ok")],
        ];
        let mut out = Vec::new();
        let err = write_records(&mut out, &records, WriteConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            WriteError::Unencodable {
                record: 1,
                field: 1,
                encoding: "windows-1252",
            }
        ));
        // The first record had already been written.
        assert_eq!(out, b"fine\xAC");
    }
}
