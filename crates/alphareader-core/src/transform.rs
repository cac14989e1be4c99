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

//! Per-field transform pipelines.
//!
//! A transform is either a single function or an ordered chain of functions
//! applied left-to-right, the output of each stage feeding the next. The shape
//! is resolved once, at construction, not re-inspected per record.
//!
//! Stages map one field value to one field value. Errors returned by a stage
//! propagate to the scanner's caller unmodified.
//!
//! # Examples
//!
//! ```
//! use alphareader_core::{transforms, Transform, Value};
//!
//! let chain = Transform::chain(vec![
//!     transforms::trim(),
//!     transforms::parse_int(),
//!     transforms::scale(10),
//! ])
//! .unwrap();
//!
//! assert_eq!(chain.apply(Value::from(" 3 ")).unwrap(), Value::Int(30));
//! ```

use crate::error::ConfigError;
use crate::value::Value;
use thiserror::Error;

/// A single transform stage: one field in, one field out.
pub type FieldTransform = Box<dyn Fn(Value) -> Result<Value, TransformError>>;

/// Errors produced while applying a transform.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// A stage received a value variant it does not operate on.
    #[error("{transform} expects a {expected} field, got {actual}")]
    TypeMismatch {
        /// Name of the stage that failed.
        transform: &'static str,
        /// Variant the stage operates on.
        expected: &'static str,
        /// Variant it actually received.
        actual: &'static str,
    },

    /// A value could not be parsed into the target type.
    #[error("cannot parse '{value}' as {target}")]
    Parse {
        /// The raw value that failed to parse.
        value: String,
        /// Target type name.
        target: &'static str,
    },

    /// Transform application changed the number of fields in a record.
    ///
    /// Distinct from the other variants: it signals a broken stage
    /// implementation (one that aggregates or discards fields) rather than
    /// bad data.
    #[error("transform produced {got} fields for a {expected}-field record")]
    Collapse {
        /// Field count before transformation.
        expected: usize,
        /// Field count after transformation.
        got: usize,
    },

    /// Free-form failure from a user-supplied stage.
    #[error("{0}")]
    Custom(String),
}

impl TransformError {
    /// Create a free-form error for use in custom stages.
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }
}

/// A field transform: a single function or an ordered chain.
///
/// The two shapes mirror the two ways callers configure transformation: one
/// closure, or a list of closures composed left-to-right.
pub enum Transform {
    /// One stage applied directly to each field.
    Single(FieldTransform),
    /// Ordered stages; the output of stage *i* feeds stage *i + 1*.
    Chain(Vec<FieldTransform>),
}

impl Transform {
    /// Wrap a single function as a transform.
    pub fn single<F>(f: F) -> Self
    where
        F: Fn(Value) -> Result<Value, TransformError> + 'static,
    {
        Self::Single(Box::new(f))
    }

    /// Build a chain from ordered stages.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyTransformChain`] for an empty stage list;
    /// an empty chain would silently be the identity, which is never what a
    /// caller who configured one meant.
    pub fn chain(stages: Vec<FieldTransform>) -> Result<Self, ConfigError> {
        if stages.is_empty() {
            return Err(ConfigError::EmptyTransformChain);
        }
        Ok(Self::Chain(stages))
    }

    /// Number of stages.
    pub fn stage_count(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Chain(stages) => stages.len(),
        }
    }

    /// Apply the transform to one field.
    pub fn apply(&self, field: Value) -> Result<Value, TransformError> {
        match self {
            Self::Single(f) => f(field),
            Self::Chain(stages) => stages.iter().try_fold(field, |value, stage| stage(value)),
        }
    }

    /// Apply the transform to every field of a record.
    ///
    /// A stage must map one field to one field; a count mismatch fails with
    /// [`TransformError::Collapse`].
    pub fn apply_record(&self, fields: Vec<Value>) -> Result<Vec<Value>, TransformError> {
        let expected = fields.len();
        let out: Vec<Value> = fields
            .into_iter()
            .map(|field| self.apply(field))
            .collect::<Result<_, _>>()?;
        if out.len() != expected {
            return Err(TransformError::Collapse {
                expected,
                got: out.len(),
            });
        }
        Ok(out)
    }
}

impl std::fmt::Debug for Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single(_) => write!(f, "Transform::Single"),
            Self::Chain(stages) => write!(f, "Transform::Chain({} stages)", stages.len()),
        }
    }
}

/// Ready-made transform stages.
pub mod transforms {
    use super::{FieldTransform, TransformError};
    use crate::value::Value;

    fn type_mismatch(transform: &'static str, expected: &'static str, got: &Value) -> TransformError {
        TransformError::TypeMismatch {
            transform,
            expected,
            actual: got.type_name(),
        }
    }

    /// Strip leading and trailing whitespace from a string field.
    pub fn trim() -> FieldTransform {
        Box::new(|value| match value {
            Value::String(s) => Ok(Value::String(s.trim().to_string())),
            other => Err(type_mismatch("trim", "string", &other)),
        })
    }

    /// Uppercase a string field.
    pub fn uppercase() -> FieldTransform {
        Box::new(|value| match value {
            Value::String(s) => Ok(Value::String(s.to_uppercase())),
            other => Err(type_mismatch("uppercase", "string", &other)),
        })
    }

    /// Lowercase a string field.
    pub fn lowercase() -> FieldTransform {
        Box::new(|value| match value {
            Value::String(s) => Ok(Value::String(s.to_lowercase())),
            other => Err(type_mismatch("lowercase", "string", &other)),
        })
    }

    /// Replace every occurrence of a substring in a string field.
    pub fn replace(from: impl Into<String>, to: impl Into<String>) -> FieldTransform {
        let from = from.into();
        let to = to.into();
        Box::new(move |value| match value {
            Value::String(s) => Ok(Value::String(s.replace(&from, &to))),
            other => Err(type_mismatch("replace", "string", &other)),
        })
    }

    /// Parse a string field into an integer.
    pub fn parse_int() -> FieldTransform {
        Box::new(|value| match value {
            Value::String(s) => s
                .parse::<i64>()
                .map(Value::Int)
                .map_err(|_| TransformError::Parse {
                    value: s,
                    target: "int",
                }),
            other => Err(type_mismatch("parse_int", "string", &other)),
        })
    }

    /// Parse a string field into a float.
    pub fn parse_float() -> FieldTransform {
        Box::new(|value| match value {
            Value::String(s) => s
                .parse::<f64>()
                .map(Value::Float)
                .map_err(|_| TransformError::Parse {
                    value: s,
                    target: "float",
                }),
            other => Err(type_mismatch("parse_float", "string", &other)),
        })
    }

    /// Multiply a numeric field by a constant factor.
    pub fn scale(factor: i64) -> FieldTransform {
        Box::new(move |value| match value {
            Value::Int(n) => n.checked_mul(factor).map(Value::Int).ok_or_else(|| {
                TransformError::custom(format!("integer overflow scaling {} by {}", n, factor))
            }),
            Value::Float(f) => Ok(Value::Float(f * factor as f64)),
            other => Err(type_mismatch("scale", "int or float", &other)),
        })
    }
}
