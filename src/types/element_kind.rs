//! This module defines the canonical, type-safe representation of sequence
//! element widths used throughout the parfold pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ParfoldError;

/// The canonical, internal representation of a sequence element width.
///
/// Aggregation kernels are generic over the element type; this enum is the
/// runtime tag the harness uses to pick a concrete instantiation from
/// configuration. Accumulators are always `i64` regardless of the width here.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    Int8,
    Int16,
    Int32,
    Int64,
}

impl ElementKind {
    /// The smallest value an element of this width can hold.
    pub fn min_value(&self) -> i64 {
        match self {
            Self::Int8 => i8::MIN as i64,
            Self::Int16 => i16::MIN as i64,
            Self::Int32 => i32::MIN as i64,
            Self::Int64 => i64::MIN,
        }
    }

    /// The largest value an element of this width can hold.
    pub fn max_value(&self) -> i64 {
        match self {
            Self::Int8 => i8::MAX as i64,
            Self::Int16 => i16::MAX as i64,
            Self::Int32 => i32::MAX as i64,
            Self::Int64 => i64::MAX,
        }
    }

    /// Checks that `value` is representable at this width.
    pub fn check_fits(&self, value: i64) -> Result<(), ParfoldError> {
        if value < self.min_value() || value > self.max_value() {
            return Err(ParfoldError::ConfigError(format!(
                "value {} does not fit element width {}",
                value, self
            )));
        }
        Ok(())
    }
}

/// Provides the canonical string representation for an `ElementKind`.
impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
