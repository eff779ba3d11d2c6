//! This module defines the core, strongly-typed data representations used
//! throughout the parfold pipeline.
//!
//! It currently includes the canonical `ElementKind` enum which replaces
//! fragile string-based type tags with a safe, serializable enum.

pub mod element_kind;

// Re-export the main type(s) for easier access.
pub use element_kind::ElementKind;
