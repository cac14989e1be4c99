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

//! Shared building blocks for the AlphaReader format crates.
//!
//! This crate holds everything the scanner and the writer have in common:
//!
//! - [`Value`]: the field data model
//! - [`resolve_encoding`] / [`validate_separators`]: codec lookup and the
//!   one-byte separator contract
//! - [`Transform`] and the [`transforms`] stage library
//! - [`ConfigError`]: the eager, construction-time error taxonomy
//!
//! Most users depend on the `alphareader` crate instead, which re-exports
//! these types next to the scan/write API.

mod codec;
mod error;
mod transform;
mod value;

pub use codec::{encode_separator, resolve_encoding, validate_separators};
pub use error::{ConfigError, SeparatorRole};
pub use transform::{transforms, FieldTransform, Transform, TransformError};
pub use value::Value;

/// Re-export of the codec type held by scan and write sessions.
pub use encoding_rs::Encoding;
