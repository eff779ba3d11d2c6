// In: src/harness/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Harness Layer
// ====================================================================================
//
// The `harness` is the verification surface of the parfold library. The
// aggregation pipeline computes; the harness *proves*. It drives the linear
// and parallel paths over one shared sequence, times both, and judges the
// results with an exact-equality oracle.
//
// Data flows through the layer in one direction:
//
//   HarnessConfig --> runner --(linear / parallel results)--> oracle
//                       |                                       |
//                       |   timings                    verdicts |
//                       +-------------> report <----------------+
//                                         |
//                                         v
//                                  rendered console text
//
// Design rules for this layer:
//
// 1. A divergence is data, not an error. The runner returns a report that
//    *contains* failed verdicts; only infrastructure failures (invalid
//    configuration, a panicking worker) surface as `Err`.
// 2. The runner owns all wall-clock reads. Pipeline code below it stays
//    pure so its results are a function of the sequence alone.
// 3. Rendering never computes. The report module formats what the runner
//    measured, which keeps the text assertable in tests.
// ====================================================================================

pub mod oracle;
pub mod report;
pub mod runner;

#[cfg(test)]
mod tests;

pub use oracle::Verdict;
pub use report::render_report;
pub use runner::{run_verification, verify_sequence, PathReport, VerificationReport};
