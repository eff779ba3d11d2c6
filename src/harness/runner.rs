// In: src/harness/runner.rs

//! The timed verification runner.
//!
//! This is the high-level coordinator of a verification session. It owns the
//! protocol shape (repeat each path `runs` times inside one timing window,
//! cool down between the phases, judge the collected results) and delegates
//! the actual computation to the aggregation pipeline. The runner is where
//! wall-clock time enters the system; everything below it is pure.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::agg_pipeline;
use crate::config::HarnessConfig;
use crate::error::ParfoldError;
use crate::harness::oracle::{self, Verdict};
use crate::kernels::scan_sum::PrefixAggregate;
use crate::sequence::Sequence;
use crate::traits::AggElement;
use crate::types::ElementKind;

//==================================================================================
// 1. Session Outcome Model
//==================================================================================

/// Collected outcome of repeatedly running one aggregate kind both ways.
#[derive(Debug, Clone)]
pub struct PathReport<A> {
    /// Every linear result, in run order.
    pub linear_results: Vec<A>,
    /// Every parallel result, in run order.
    pub parallel_results: Vec<A>,
    /// Average wall-clock duration of one linear run.
    pub linear_avg: Duration,
    /// Average wall-clock duration of one parallel run.
    pub parallel_avg: Duration,
    /// The oracle's three-way verdict for this aggregate kind.
    pub verdict: Verdict,
}

/// The full outcome of one verification session: the compound prefix-scan
/// aggregate (the case the offset-correcting merge exists for) and the
/// scalar sum (the degenerate control), plus the configuration echo the
/// reporter prints.
#[derive(Debug, Clone)]
pub struct VerificationReport {
    pub config: Arc<HarnessConfig>,
    pub scan: PathReport<PrefixAggregate>,
    pub total: PathReport<i64>,
}

impl VerificationReport {
    /// True only when every comparison of both aggregate kinds held.
    pub fn all_clear(&self) -> bool {
        self.scan.verdict.all_clear() && self.total.verdict.all_clear()
    }
}

//==================================================================================
// 2. Public Session API
//==================================================================================

/// Runs one full verification session from configuration alone: validate,
/// generate the sequence at the configured element width, then verify both
/// aggregate kinds over it.
pub fn run_verification(config: &Arc<HarnessConfig>) -> Result<VerificationReport, ParfoldError> {
    config.validate()?;

    macro_rules! verify_as {
        ($t:ty) => {{
            let sequence = Sequence::<$t>::generate(config)?;
            verify_sequence(&sequence, config)
        }};
    }

    match config.element {
        ElementKind::Int8 => verify_as!(i8),
        ElementKind::Int16 => verify_as!(i16),
        ElementKind::Int32 => verify_as!(i32),
        ElementKind::Int64 => verify_as!(i64),
    }
}

/// Verifies both aggregate kinds over an already-materialized sequence.
///
/// Exposed separately so callers with their own data (tests, benchmarks)
/// can drive the exact protocol the configured session uses.
pub fn verify_sequence<T: AggElement>(
    sequence: &Sequence<T>,
    config: &Arc<HarnessConfig>,
) -> Result<VerificationReport, ParfoldError> {
    log::info!(
        "verifying {} elements across {} chunks ({:?} backend, {} runs per path)",
        sequence.len(),
        config.partitions,
        config.executor,
        config.runs
    );

    // 1. The compound aggregate: the offset-corrected merge under test.
    let scan = measure_path(
        config,
        || agg_pipeline::linear_scan_sum(sequence.as_slice()),
        || {
            agg_pipeline::parallel_scan_sum(
                sequence.as_slice(),
                config.partitions,
                config.executor,
            )
        },
    )?;

    // 2. The scalar sum: same fan-out, trivial merge.
    let total = measure_path(
        config,
        || agg_pipeline::linear_total(sequence.as_slice()),
        || {
            agg_pipeline::parallel_total(
                sequence.as_slice(),
                config.partitions,
                config.executor,
            )
        },
    )?;

    if !scan.verdict.all_clear() || !total.verdict.all_clear() {
        log::warn!(
            "verification found divergence: scan {:?}, total {:?}",
            scan.verdict,
            total.verdict
        );
    }

    Ok(VerificationReport {
        config: Arc::clone(config),
        scan,
        total,
    })
}

//==================================================================================
// 3. Measurement Core
//==================================================================================

/// Runs one aggregate kind `runs` times on each path and judges the results.
///
/// Each path's repetitions share a single timing window whose elapsed time
/// is divided by `runs`; per-run timing would add a clock read inside the
/// hot loop for no verdict the oracle cares about.
fn measure_path<A, L, P>(
    config: &HarnessConfig,
    linear: L,
    parallel: P,
) -> Result<PathReport<A>, ParfoldError>
where
    A: PartialEq,
    L: Fn() -> A,
    P: Fn() -> Result<A, ParfoldError>,
{
    let runs = config.runs;
    if runs == 0 {
        return Err(ParfoldError::ConfigError(
            "runs must be at least 1".to_string(),
        ));
    }

    // 1. The linear reference phase.
    let started = Instant::now();
    let mut linear_results = Vec::with_capacity(runs);
    for _ in 0..runs {
        linear_results.push(linear());
    }
    let linear_avg = started.elapsed() / runs as u32;

    // 2. Cool-down. Back-to-back phases skew the second measurement, so the
    //    harness lets the machine settle before timing the parallel phase.
    if config.cooldown_ms > 0 {
        thread::sleep(Duration::from_millis(config.cooldown_ms));
    }

    // 3. The parallel phase. A worker panic aborts the whole session here;
    //    a wrong *value* does not.
    let started = Instant::now();
    let mut parallel_results = Vec::with_capacity(runs);
    for _ in 0..runs {
        parallel_results.push(parallel()?);
    }
    let parallel_avg = started.elapsed() / runs as u32;

    // 4. Judgement is exact equality; no tolerance enters here.
    let verdict = oracle::judge(&linear_results, &parallel_results);

    Ok(PathReport {
        linear_results,
        parallel_results,
        linear_avg,
        parallel_avg,
        verdict,
    })
}
