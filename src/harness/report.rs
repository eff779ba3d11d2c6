// In: src/harness/report.rs

//! Console rendering for verification reports.
//!
//! Rendering is pure string assembly, kept separate from the runner so tests
//! can assert on the exact text and so the binary alone decides where the
//! text goes. Failed comparisons render as red `ERROR:` lines; the
//! configuration echo with values and timings renders whenever the two paths
//! agreed on the aggregate in question.

use std::fmt::Write;
use std::time::Duration;

use colored::Colorize;

use crate::harness::oracle::Verdict;
use crate::harness::runner::{PathReport, VerificationReport};

const RULE: &str =
    "-------------------------------------------------------------------------------";

/// Renders the full console report for one verification session.
pub fn render_report(report: &VerificationReport) -> String {
    let mut out = String::new();
    let config = &report.config;

    out.push_str(RULE);
    out.push('\n');

    push_verdict_errors(&mut out, &report.scan.verdict, "aggregates");
    push_verdict_errors(&mut out, &report.total.verdict, "sums");

    if report.scan.verdict.paths_agree {
        // Mirror of the classic success block: configuration echo first,
        // then the agreed values, then the averaged timings.
        let agg = &report.scan.parallel_results[0];
        let _ = writeln!(out, "The sequence length is: {}", config.length);
        let _ = writeln!(out, "The value of K is: {}", config.partitions);
        let _ = writeln!(
            out,
            "The range is: {} to {}",
            config.value_range.lower, config.value_range.upper
        );
        let _ = writeln!(out, "The sequence sum (X) is: {}", agg.sum);
        let _ = writeln!(out, "The sequence aggregate (Y) is: {}", agg.scan_sum);
        push_timings(&mut out, &report.scan);
    }

    if report.total.verdict.paths_agree {
        let _ = writeln!(
            out,
            "The scalar sum is: {}",
            report.total.parallel_results[0]
        );
        push_timings(&mut out, &report.total);
    }

    if report.all_clear() {
        let _ = writeln!(
            out,
            "{} linear and parallel paths agree across {} runs",
            "OK:".green().bold(),
            config.runs
        );
    }

    out.push_str(RULE);
    out.push('\n');
    out
}

/// One red `ERROR:` line per failed comparison, in protocol order.
fn push_verdict_errors(out: &mut String, verdict: &Verdict, noun: &str) {
    if !verdict.linear_stable {
        let _ = writeln!(
            out,
            "{} The computed {} did not match (linear computation case).",
            "ERROR:".red().bold(),
            noun
        );
    }
    if !verdict.parallel_stable {
        let _ = writeln!(
            out,
            "{} The computed {} did not match (parallel computation case).",
            "ERROR:".red().bold(),
            noun
        );
    }
    if !verdict.paths_agree {
        let _ = writeln!(
            out,
            "{} The computed {} did not match.",
            "ERROR:".red().bold(),
            noun
        );
    }
}

/// Averaged per-run timings, printed in microseconds like the original
/// harness so historic numbers stay comparable.
fn push_timings<A>(out: &mut String, path: &PathReport<A>) {
    let _ = writeln!(
        out,
        "Time taken using linear approach: {:.3} microseconds",
        as_micros(path.linear_avg)
    );
    let _ = writeln!(
        out,
        "Time taken using parallel approach: {:.3} microseconds",
        as_micros(path.parallel_avg)
    );
}

fn as_micros(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1e6
}
