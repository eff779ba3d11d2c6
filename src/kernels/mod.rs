//! The pure, stateless local aggregation kernels.
//!
//! Every kernel maps one contiguous chunk of elements to its partial result,
//! treating the chunk as self-contained (local index 0 is the start of the
//! world). Kernels hold no state and take no locks, which is what makes a
//! fan-out over disjoint chunks safe.

pub mod scan_sum;
pub mod total;
