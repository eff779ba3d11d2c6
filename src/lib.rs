//! This file is the root of the `parfold` Rust crate.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of our library (`agg_pipeline`,
//!     `kernels`, `harness`, etc.) so the Rust compiler knows they exist.
//! 2.  Re-exporting the handful of types that make up the everyday API, so
//!     callers can reach them without memorizing the module tree.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod agg_pipeline;
pub mod config;
pub mod error;
pub mod harness;
pub mod kernels;
pub mod sequence;
pub mod traits;
pub mod types;

//==================================================================================
// 2. Everyday API Re-exports
//==================================================================================
pub use config::{ExecutorKind, HarnessConfig, ValueRange};
pub use error::ParfoldError;
pub use harness::{render_report, run_verification, VerificationReport};
pub use kernels::scan_sum::PrefixAggregate;
pub use sequence::Sequence;
