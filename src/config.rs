// In: src/config.rs

//! The single source of truth for all parfold harness configuration.
//!
//! This module defines the unified `HarnessConfig` struct, which is designed to
//! be created once at the application boundary (e.g., from a JSON file or CLI
//! override) and then passed down through the system via a shared, read-only
//! `Arc<HarnessConfig>`.
//!
//! This approach centralizes all settings, eliminates "prop drilling," and
//! keeps the pipeline itself free of tunable global state.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ParfoldError;
use crate::types::ElementKind;

//==================================================================================
// I. Core Configuration Enums & Structs
//==================================================================================

/// Selects the fan-out backend used by the parallel aggregation path.
///
/// Both backends honor the same contract: one kernel invocation per chunk,
/// a full fan-out/fan-in barrier, and partial results handed to the merge
/// step in chunk-index order regardless of completion order.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExecutorKind {
    /// **Default:** one scoped OS thread per chunk, each writing its partial
    /// result into a uniquely owned slot. The most literal realization of
    /// "one concurrency unit per chunk".
    #[default]
    ScopedThreads,

    /// The chunk list mapped over rayon's work-stealing pool. Scales better
    /// when the chunk count exceeds the physical core count; the indexed
    /// collect preserves chunk order.
    RayonPool,
}

/// The inclusive range random sequence elements are drawn from.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueRange {
    pub lower: i64,
    pub upper: i64,
}

impl Default for ValueRange {
    fn default() -> Self {
        Self { lower: 0, upper: 10 }
    }
}

//==================================================================================
// II. The Unified HarnessConfig
//==================================================================================

/// The single, unified configuration for one verification session.
/// This struct is created once and shared throughout the system via an `Arc`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct HarnessConfig {
    /// Total number of elements in the generated sequence.
    #[serde(default = "default_length")]
    pub length: usize,

    /// Number of equal contiguous chunks, and therefore of concurrent
    /// workers, on the parallel path. Must divide `length` exactly.
    #[serde(default = "default_partitions")]
    pub partitions: usize,

    /// Inclusive range the generated elements are drawn from.
    #[serde(default)]
    pub value_range: ValueRange,

    /// Width of the generated sequence elements.
    #[serde(default = "default_element")]
    pub element: ElementKind,

    /// Fan-out backend for the parallel path.
    #[serde(default)]
    pub executor: ExecutorKind,

    /// Repetitions of each path inside one timing window. The average of
    /// these runs is what the report prints.
    #[serde(default = "default_runs")]
    pub runs: usize,

    /// Pause between the linear and parallel measurement phases, in
    /// milliseconds. Zero disables the pause.
    #[serde(default = "default_cooldown_ms")]
    pub cooldown_ms: u64,

    /// Fixed RNG seed for reproducible sequences. Omit to seed from OS
    /// entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

// Default implementation to make constructing the config easier.
impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            length: default_length(),
            partitions: default_partitions(),
            value_range: ValueRange::default(),
            element: default_element(),
            executor: ExecutorKind::default(),
            runs: default_runs(),
            cooldown_ms: default_cooldown_ms(),
            seed: None,
        }
    }
}

impl HarnessConfig {
    /// Loads a configuration from a JSON file. Missing fields fall back to
    /// their defaults; the result still has to pass [`HarnessConfig::validate`].
    pub fn from_json_path(path: &Path) -> Result<Self, ParfoldError> {
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        Ok(config)
    }

    /// Rejects self-inconsistent configurations before any sequence is built.
    ///
    /// A partitioning that does not divide the length exactly is reported as
    /// [`ParfoldError::InvalidPartitioning`]; every other inconsistency is a
    /// [`ParfoldError::ConfigError`].
    pub fn validate(&self) -> Result<(), ParfoldError> {
        if self.runs == 0 {
            return Err(ParfoldError::ConfigError(
                "runs must be at least 1".to_string(),
            ));
        }
        if self.value_range.lower > self.value_range.upper {
            return Err(ParfoldError::ConfigError(format!(
                "value range lower bound {} exceeds upper bound {}",
                self.value_range.lower, self.value_range.upper
            )));
        }
        self.element.check_fits(self.value_range.lower)?;
        self.element.check_fits(self.value_range.upper)?;
        if self.length == 0
            || self.partitions == 0
            || self.length % self.partitions != 0
        {
            return Err(ParfoldError::InvalidPartitioning {
                length: self.length,
                partitions: self.partitions,
            });
        }
        Ok(())
    }
}

/// Helper for `serde` to provide a default for `length`.
fn default_length() -> usize {
    1024
}

/// Helper for `serde` to provide a default for `partitions`.
fn default_partitions() -> usize {
    16
}

/// Helper for `serde` to provide a default for `element`.
fn default_element() -> ElementKind {
    ElementKind::Int16
}

/// Helper for `serde` to provide a default for `runs`.
fn default_runs() -> usize {
    3
}

/// Helper for `serde` to provide a default for `cooldown_ms`.
fn default_cooldown_ms() -> u64 {
    1000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(HarnessConfig::default().validate().is_ok());
    }

    #[test]
    fn empty_json_object_yields_defaults() {
        let config: HarnessConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, HarnessConfig::default());
    }

    #[test]
    fn partial_json_overrides_only_named_fields() {
        let config: HarnessConfig =
            serde_json::from_str(r#"{"length": 64, "partitions": 4, "executor": "rayon_pool"}"#)
                .unwrap();
        assert_eq!(config.length, 64);
        assert_eq!(config.partitions, 4);
        assert_eq!(config.executor, ExecutorKind::RayonPool);
        assert_eq!(config.runs, 3);
        assert_eq!(config.element, ElementKind::Int16);
    }

    #[test]
    fn validate_rejects_inexact_split() {
        let config = HarnessConfig {
            length: 10,
            partitions: 3,
            ..Default::default()
        };
        match config.validate() {
            Err(ParfoldError::InvalidPartitioning { length, partitions }) => {
                assert_eq!((length, partitions), (10, 3));
            }
            other => panic!("expected InvalidPartitioning, got {:?}", other),
        }
    }

    #[test]
    fn validate_rejects_zero_length_and_zero_partitions() {
        let zero_len = HarnessConfig {
            length: 0,
            ..Default::default()
        };
        assert!(matches!(
            zero_len.validate(),
            Err(ParfoldError::InvalidPartitioning { .. })
        ));

        let zero_parts = HarnessConfig {
            partitions: 0,
            ..Default::default()
        };
        assert!(matches!(
            zero_parts.validate(),
            Err(ParfoldError::InvalidPartitioning { .. })
        ));
    }

    #[test]
    fn validate_rejects_inverted_or_overflowing_range() {
        let inverted = HarnessConfig {
            value_range: ValueRange { lower: 5, upper: -5 },
            ..Default::default()
        };
        assert!(matches!(
            inverted.validate(),
            Err(ParfoldError::ConfigError(_))
        ));

        let too_wide = HarnessConfig {
            element: ElementKind::Int8,
            value_range: ValueRange {
                lower: 0,
                upper: 1000,
            },
            ..Default::default()
        };
        assert!(matches!(
            too_wide.validate(),
            Err(ParfoldError::ConfigError(_))
        ));
    }

    #[test]
    fn validate_rejects_zero_runs() {
        let config = HarnessConfig {
            runs: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ParfoldError::ConfigError(_))));
    }
}
