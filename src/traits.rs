//! This module defines shared traits used across different kernels.

use num_traits::{AsPrimitive, PrimInt, Signed};

/// The bound every sequence element type must satisfy.
///
/// Kernels accumulate into `i64` no matter how narrow the element is, so an
/// element only has to be a primitive signed integer that widens losslessly
/// via `AsPrimitive<i64>`. `Send + Sync` lets element slices cross the
/// fan-out boundary by shared reference.
pub trait AggElement: PrimInt + Signed + AsPrimitive<i64> + Send + Sync + 'static {}

// Blanket impl: any qualifying primitive is an element, no per-type list to maintain.
impl<T> AggElement for T where T: PrimInt + Signed + AsPrimitive<i64> + Send + Sync + 'static {}
