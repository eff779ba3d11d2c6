// In: src/error.rs

//! This module defines the single, unified error type for the entire parfold library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParfoldError {
    // =========================================================================
    // === High-Level, Semantic Errors (Specific to our library's logic)
    // =========================================================================
    /// The sequence cannot be split into equal contiguous chunks. Partitioning
    /// never rounds: an inexact split is rejected outright.
    #[error("Invalid partitioning: length {length} is not divisible into {partitions} equal chunks")]
    InvalidPartitioning { length: usize, partitions: usize },

    /// A harness configuration that is self-inconsistent (bad value range,
    /// zero runs, values that overflow the element width, and so on).
    #[error("Invalid harness configuration: {0}")]
    ConfigError(String),

    #[error("Internal logic error (this is a bug): {0}")]
    InternalError(String),

    // =========================================================================
    // === Execution Errors (The parallel path is all-or-nothing)
    // =========================================================================
    /// A worker panicked mid-aggregation. The whole parallel pass is torn
    /// down; no partial results survive.
    #[error("Worker for chunk {chunk} panicked during aggregation")]
    WorkerPanic { chunk: usize },

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error originating from the underlying I/O subsystem (e.g., config file not found).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error from the Serde JSON library, typically while reading a config file.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}
