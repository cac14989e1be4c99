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

//! The chunked-scan record reader.
//!
//! [`RecordScanner`] pulls fixed-size byte chunks from a source, decodes them
//! incrementally under a named encoding, accumulates decoded text in a pending
//! buffer, splits completed records on the terminator character, splits each
//! record into fields on the delimiter character, and optionally runs every
//! field through a [`Transform`]. The scan is lazy and pull-based: nothing is
//! read until the caller asks for the next record.
//!
//! Memory use stays proportional to the chunk size plus the longest single
//! record, never to the input size. A terminator may fall anywhere relative to
//! chunk boundaries; the remainder after the last terminator in the buffer is
//! carried into the next chunk as the partial record in progress.
//!
//! # Design Notes
//!
//! - **Session-held codec**: the encoding label is resolved once at
//!   construction and the incremental decoder lives for the whole scan, so a
//!   multi-byte sequence split across a chunk boundary decodes correctly.
//! - **Cursor over the pending buffer**: text that has already been searched
//!   for the terminator is never rescanned; each new chunk extends the search
//!   from where the previous one stopped.
//! - **Fused iteration**: after exhaustion or the first error the scanner
//!   yields nothing further. Resuming requires re-opening the source.
//!
//! # Examples
//!
//! ```
//! use alphareader::{RecordScanner, ScanConfig, Value};
//! use std::io::Cursor;
//!
//! let config = ScanConfig {
//!     delimiter: ',',
//!     terminator: '\n',
//!     encoding: "utf-8".to_string(),
//!     ..Default::default()
//! };
//!
//! let scanner = RecordScanner::with_config(Cursor::new("1,John,Doe,2020\n"), config).unwrap();
//! let records: Vec<_> = scanner.collect::<Result<_, _>>().unwrap();
//!
//! assert_eq!(
//!     records,
//!     vec![vec![
//!         Value::from("1"),
//!         Value::from("John"),
//!         Value::from("Doe"),
//!         Value::from("2020"),
//!     ]]
//! );
//! ```

use crate::error::{ScanError, ScanResult};
use alphareader_core::{resolve_encoding, validate_separators, Transform, Value};
use encoding_rs::{Decoder, DecoderResult, Encoding};
use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// One scanned record: an ordered list of field values.
///
/// Without a transform every field is [`Value::String`]; a transform may map
/// fields to any other variant.
pub type Record = Vec<Value>;

/// Default chunk size in bytes.
pub const DEFAULT_CHUNK_SIZE: usize = 8192;
/// Default field delimiter, `'«'` (codepoint 171, one byte in cp1252).
pub const DEFAULT_DELIMITER: char = '\u{AB}';
/// Default record terminator, `'¬'` (codepoint 172, one byte in cp1252).
pub const DEFAULT_TERMINATOR: char = '\u{AC}';
/// Default encoding label.
pub const DEFAULT_ENCODING: &str = "cp1252";

/// What to do with text left in the pending buffer when the source ends
/// without a final terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingData {
    /// Drop the partial record silently.
    #[default]
    Discard,
    /// Yield the partial record as a final record.
    Emit,
    /// Fail the scan with [`ScanError::UnterminatedRecord`].
    Error,
}

/// Configuration for a scan session.
///
/// Validated once, at scanner construction, and immutable afterwards.
///
/// # Examples
///
/// ```
/// use alphareader::{ScanConfig, TrailingData};
///
/// let config = ScanConfig::default();
/// assert_eq!(config.chunk_size, 8192);
/// assert_eq!(config.delimiter, '«');
/// assert_eq!(config.terminator, '¬');
/// assert_eq!(config.encoding, "cp1252");
/// assert_eq!(config.trailing, TrailingData::Discard);
/// ```
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Size in bytes of each read from the source. Must be positive.
    pub chunk_size: usize,
    /// Character separating fields within a record. Must encode to exactly
    /// one byte under `encoding`.
    pub delimiter: char,
    /// Character separating records within the stream. Must encode to exactly
    /// one byte under `encoding`.
    pub terminator: char,
    /// Encoding label, matched per the WHATWG registry (e.g. `"cp1252"`,
    /// `"utf-8"`, `"latin1"`).
    pub encoding: String,
    /// Policy for a final record with no terminator.
    pub trailing: TrailingData,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            delimiter: DEFAULT_DELIMITER,
            terminator: DEFAULT_TERMINATOR,
            encoding: DEFAULT_ENCODING.to_string(),
            trailing: TrailingData::default(),
        }
    }
}

/// Streaming record scanner over any byte source.
///
/// Implements `Iterator<Item = ScanResult<Record>>`. Records are yielded in
/// file order and ownership passes to the caller; the scanner retains nothing
/// once a record has been handed out.
///
/// # Examples
///
/// ## Transform chains
///
/// ```
/// use alphareader::{transforms, RecordScanner, ScanConfig, Transform, Value};
/// use std::io::Cursor;
///
/// let config = ScanConfig {
///     delimiter: ',',
///     terminator: '\n',
///     encoding: "utf-8".to_string(),
///     ..Default::default()
/// };
///
/// let chain = Transform::chain(vec![
///     transforms::trim(),
///     transforms::parse_int(),
///     transforms::scale(10),
/// ])
/// .unwrap();
///
/// let scanner = RecordScanner::with_config(Cursor::new("1,2,3\n"), config)
///     .unwrap()
///     .with_transform(chain);
///
/// let record = scanner.collect::<Result<Vec<_>, _>>().unwrap().remove(0);
/// let sum: i64 = record.iter().filter_map(Value::as_int).sum();
/// assert_eq!(sum, 60);
/// ```
pub struct RecordScanner<R: Read> {
    source: R,
    chunk: Vec<u8>,
    decoder: Decoder,
    encoding: &'static Encoding,
    delimiter: char,
    terminator: char,
    trailing: TrailingData,
    transform: Option<Transform>,
    /// Decoded text not yet split into complete records.
    pending: String,
    /// Byte offset into `pending` up to which the terminator search has
    /// already run. Everything before it is known terminator-free.
    cursor: usize,
    /// Complete raw field-lists split out but not yet pulled by the caller.
    /// Transforms run at yield time, so a transform failure surfaces exactly
    /// at its record's position after every preceding record.
    ready: VecDeque<Vec<String>>,
    chunks_read: usize,
    done: bool,
    failed: bool,
}

impl<R: Read> RecordScanner<R> {
    /// Create a scanner with the default configuration.
    pub fn new(source: R) -> Result<Self, alphareader_core::ConfigError> {
        Self::with_config(source, ScanConfig::default())
    }

    /// Create a scanner with a specific configuration.
    ///
    /// All validation happens here, before any byte is read: the chunk size
    /// must be positive, the encoding label must resolve, and both separators
    /// must encode to exactly one distinct byte under that encoding.
    pub fn with_config(
        source: R,
        config: ScanConfig,
    ) -> Result<Self, alphareader_core::ConfigError> {
        if config.chunk_size == 0 {
            return Err(alphareader_core::ConfigError::InvalidChunkSize);
        }
        let encoding = resolve_encoding(&config.encoding)?;
        validate_separators(encoding, config.delimiter, config.terminator)?;
        Ok(Self {
            source,
            chunk: vec![0; config.chunk_size],
            decoder: encoding.new_decoder_without_bom_handling(),
            encoding,
            delimiter: config.delimiter,
            terminator: config.terminator,
            trailing: config.trailing,
            transform: None,
            pending: String::new(),
            cursor: 0,
            ready: VecDeque::new(),
            chunks_read: 0,
            done: false,
            failed: false,
        })
    }

    /// Attach a per-field transform. Consumes and returns the scanner so a
    /// configured session stays immutable once iteration starts.
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = Some(transform);
        self
    }

    /// Canonical name of the resolved encoding (e.g. `"windows-1252"`).
    pub fn encoding_name(&self) -> &'static str {
        self.encoding.name()
    }

    /// Number of chunks read from the source so far.
    pub fn chunks_read(&self) -> usize {
        self.chunks_read
    }

    /// Read and process one chunk, queueing any completed records.
    fn fill(&mut self) -> ScanResult<()> {
        let n = self.source.read(&mut self.chunk)?;
        if n == 0 {
            self.done = true;
            self.flush_decoder()?;
            self.split_pending();
            return self.finish_trailing();
        }
        self.chunks_read += 1;
        let chunk = self.chunks_read;
        if decode_append(&mut self.decoder, &mut self.pending, &self.chunk[..n], false).is_err() {
            return Err(ScanError::Decode {
                encoding: self.encoding.name(),
                chunk,
            });
        }
        self.split_pending();
        Ok(())
    }

    /// Tell the decoder the stream is over. A multi-byte sequence truncated
    /// by end-of-stream surfaces here as a decode error.
    fn flush_decoder(&mut self) -> ScanResult<()> {
        if decode_append(&mut self.decoder, &mut self.pending, &[], true).is_err() {
            return Err(ScanError::Decode {
                encoding: self.encoding.name(),
                chunk: self.chunks_read,
            });
        }
        Ok(())
    }

    /// Split every complete record out of the pending buffer. The remainder
    /// after the last terminator stays pending; the cursor records that it
    /// has already been searched.
    fn split_pending(&mut self) {
        let mut start = 0usize;
        let mut search = self.cursor;
        while let Some(end) = find_char(&self.pending, self.terminator, search) {
            self.ready.push_back(
                self.pending[start..end]
                    .split(self.delimiter)
                    .map(str::to_owned)
                    .collect(),
            );
            start = end + self.terminator.len_utf8();
            search = start;
        }
        if start > 0 {
            self.pending.drain(..start);
        }
        self.cursor = self.pending.len();
    }

    /// Handle whatever is left in the buffer once the source is exhausted.
    fn finish_trailing(&mut self) -> ScanResult<()> {
        if self.pending.is_empty() {
            return Ok(());
        }
        let rest = std::mem::take(&mut self.pending);
        self.cursor = 0;
        match self.trailing {
            TrailingData::Discard => Ok(()),
            TrailingData::Emit => {
                let fields = rest.split(self.delimiter).map(str::to_owned).collect();
                self.ready.push_back(fields);
                Ok(())
            }
            TrailingData::Error => Err(ScanError::UnterminatedRecord {
                length: rest.chars().count(),
            }),
        }
    }

    fn finish_record(&self, fields: Vec<String>) -> ScanResult<Record> {
        let values: Vec<Value> = fields.into_iter().map(Value::String).collect();
        match &self.transform {
            Some(transform) => Ok(transform.apply_record(values)?),
            None => Ok(values),
        }
    }
}

// Manual impl: neither the source nor a boxed transform stage is `Debug`.
impl<R: Read> std::fmt::Debug for RecordScanner<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordScanner")
            .field("encoding", &self.encoding.name())
            .field("delimiter", &self.delimiter)
            .field("terminator", &self.terminator)
            .field("chunk_size", &self.chunk.len())
            .field("trailing", &self.trailing)
            .field("transform", &self.transform)
            .field("chunks_read", &self.chunks_read)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}

impl<R: Read> Iterator for RecordScanner<R> {
    type Item = ScanResult<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        loop {
            if let Some(fields) = self.ready.pop_front() {
                return match self.finish_record(fields) {
                    Ok(record) => Some(Ok(record)),
                    Err(e) => {
                        self.failed = true;
                        Some(Err(e))
                    }
                };
            }
            if self.done {
                return None;
            }
            if let Err(e) = self.fill() {
                self.failed = true;
                return Some(Err(e));
            }
        }
    }
}

/// Open a file and scan it with the default configuration.
pub fn scan_path<P: AsRef<Path>>(path: P) -> ScanResult<RecordScanner<BufReader<File>>> {
    scan_path_with_config(path, ScanConfig::default())
}

/// Open a file and scan it with a specific configuration.
///
/// # Examples
///
/// ```no_run
/// use alphareader::{scan_path_with_config, ScanConfig};
///
/// let config = ScanConfig {
///     delimiter: ',',
///     terminator: '\n',
///     encoding: "utf-8".to_string(),
///     ..Default::default()
/// };
///
/// for record in scan_path_with_config("people.dat", config)? {
///     let record = record?;
///     println!("{} fields", record.len());
/// }
/// # Ok::<(), alphareader::ScanError>(())
/// ```
pub fn scan_path_with_config<P: AsRef<Path>>(
    path: P,
    config: ScanConfig,
) -> ScanResult<RecordScanner<BufReader<File>>> {
    let file = File::open(path)?;
    Ok(RecordScanner::with_config(BufReader::new(file), config)?)
}

/// Find `needle` in `haystack[from..]`, returning its absolute byte offset.
/// Single-byte characters go through memchr.
fn find_char(haystack: &str, needle: char, from: usize) -> Option<usize> {
    let tail = &haystack[from..];
    let pos = if needle.is_ascii() {
        memchr::memchr(needle as u8, tail.as_bytes())
    } else {
        tail.find(needle)
    }?;
    Some(from + pos)
}

/// Incrementally decode `bytes` onto the end of `pending`. Fails on input
/// invalid for the decoder's encoding; `last` flushes end-of-stream state.
fn decode_append(
    decoder: &mut Decoder,
    pending: &mut String,
    bytes: &[u8],
    last: bool,
) -> Result<(), ()> {
    let mut consumed = 0usize;
    loop {
        if let Some(needed) =
            decoder.max_utf8_buffer_length_without_replacement(bytes.len() - consumed)
        {
            pending.reserve(needed);
        }
        let (result, read) =
            decoder.decode_to_string_without_replacement(&bytes[consumed..], pending, last);
        consumed += read;
        match result {
            DecoderResult::InputEmpty => return Ok(()),
            DecoderResult::Malformed(_, _) => return Err(()),
            DecoderResult::OutputFull => continue,
        }
    }
}
