//! Harness-level tests: whole sessions driven from configuration, plus the
//! rendered report text.

use std::sync::Arc;
use std::time::Duration;

use crate::config::{ExecutorKind, HarnessConfig, ValueRange};
use crate::error::ParfoldError;
use crate::harness::oracle;
use crate::harness::report::render_report;
use crate::harness::runner::{run_verification, PathReport, VerificationReport};
use crate::kernels::scan_sum::PrefixAggregate;
use crate::types::ElementKind;

// Test Helpers

/// A small, fast session configuration: no cool-down, fixed seed.
fn session_config() -> HarnessConfig {
    HarnessConfig {
        length: 64,
        partitions: 8,
        runs: 2,
        cooldown_ms: 0,
        seed: Some(42),
        ..Default::default()
    }
}

/// Builds a report whose two paths disagree, for exercising the renderer.
fn divergent_report() -> VerificationReport {
    let linear = vec![PrefixAggregate { sum: 10, scan_sum: 20 }; 2];
    let parallel = vec![PrefixAggregate { sum: 10, scan_sum: 14 }; 2];
    let scan = PathReport {
        verdict: oracle::judge(&linear, &parallel),
        linear_results: linear,
        parallel_results: parallel,
        linear_avg: Duration::from_micros(10),
        parallel_avg: Duration::from_micros(5),
    };
    let totals = vec![6i64; 2];
    let total = PathReport {
        verdict: oracle::judge(&totals, &totals),
        linear_results: totals.clone(),
        parallel_results: totals,
        linear_avg: Duration::from_micros(8),
        parallel_avg: Duration::from_micros(4),
    };
    VerificationReport {
        config: Arc::new(session_config()),
        scan,
        total,
    }
}

//==================================================================================
// Session Tests
//==================================================================================

#[test]
fn test_default_style_session_is_all_clear() {
    let config = Arc::new(session_config());
    let report = run_verification(&config).unwrap();

    assert!(report.all_clear());
    assert_eq!(report.scan.linear_results.len(), 2);
    assert_eq!(report.scan.parallel_results.len(), 2);
    assert_eq!(report.total.linear_results.len(), 2);
}

#[test]
fn test_sessions_reproduce_under_a_fixed_seed() {
    let config = Arc::new(session_config());
    let first = run_verification(&config).unwrap();
    let second = run_verification(&config).unwrap();
    assert_eq!(
        first.scan.linear_results,
        second.scan.linear_results
    );
    assert_eq!(first.total.linear_results, second.total.linear_results);
}

#[test]
fn test_backends_verify_the_same_values() {
    let scoped = Arc::new(HarnessConfig {
        executor: ExecutorKind::ScopedThreads,
        ..session_config()
    });
    let pooled = Arc::new(HarnessConfig {
        executor: ExecutorKind::RayonPool,
        ..session_config()
    });
    let a = run_verification(&scoped).unwrap();
    let b = run_verification(&pooled).unwrap();
    assert!(a.all_clear());
    assert!(b.all_clear());
    assert_eq!(a.scan.parallel_results, b.scan.parallel_results);
}

#[test]
fn test_every_element_width_verifies() {
    for element in [
        ElementKind::Int8,
        ElementKind::Int16,
        ElementKind::Int32,
        ElementKind::Int64,
    ] {
        let config = Arc::new(HarnessConfig {
            element,
            ..session_config()
        });
        let report = run_verification(&config).unwrap();
        assert!(report.all_clear(), "element width {}", element);
    }
}

#[test]
fn test_negative_heavy_range_verifies() {
    let config = Arc::new(HarnessConfig {
        value_range: ValueRange {
            lower: -100,
            upper: -1,
        },
        ..session_config()
    });
    let report = run_verification(&config).unwrap();
    assert!(report.all_clear());
    assert!(report.total.parallel_results[0] < 0);
}

#[test]
fn test_invalid_partitioning_fails_the_session() {
    let config = Arc::new(HarnessConfig {
        length: 100,
        partitions: 7,
        ..session_config()
    });
    let result = run_verification(&config);
    assert!(matches!(
        result,
        Err(ParfoldError::InvalidPartitioning {
            length: 100,
            partitions: 7
        })
    ));
}

//==================================================================================
// Report Rendering Tests
//==================================================================================

#[test]
fn test_clean_session_renders_the_success_block() {
    let config = Arc::new(session_config());
    let report = run_verification(&config).unwrap();
    let text = render_report(&report);

    assert!(text.contains("The sequence length is: 64"));
    assert!(text.contains("The value of K is: 8"));
    assert!(text.contains("The range is: 0 to 10"));
    assert!(text.contains("The sequence sum (X) is:"));
    assert!(text.contains("The sequence aggregate (Y) is:"));
    assert!(text.contains("The scalar sum is:"));
    assert!(text.contains("Time taken using linear approach:"));
    assert!(text.contains("Time taken using parallel approach:"));
    assert!(text.contains("OK:"));
    assert!(!text.contains("ERROR:"));
}

#[test]
fn test_divergence_renders_error_lines_not_a_crash() {
    let report = divergent_report();
    assert!(!report.all_clear());

    let text = render_report(&report);
    assert!(text.contains("ERROR:"));
    assert!(text.contains("The computed aggregates did not match."));
    // The failed aggregate suppresses its value block; the clean scalar
    // path still reports.
    assert!(!text.contains("The sequence aggregate (Y) is:"));
    assert!(text.contains("The scalar sum is: 6"));
    assert!(!text.contains("OK:"));
}

#[test]
fn test_report_is_framed_by_rules() {
    let config = Arc::new(session_config());
    let report = run_verification(&config).unwrap();
    let text = render_report(&report);
    let rules = text
        .lines()
        .filter(|line| line.starts_with("-------"))
        .count();
    assert_eq!(rules, 2);
}
