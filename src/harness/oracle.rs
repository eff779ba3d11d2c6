// In: src/harness/oracle.rs

//! The equivalence oracle: exact comparison of aggregate results.
//!
//! Equality here is structural and bit-exact. All arithmetic in the pipeline
//! is integral, so there is no tolerance, no rounding slack: the parallel
//! path either reproduces the linear reference perfectly or it is wrong.
//! A detected divergence is a *finding*, not a crash. The oracle reports it
//! and the session carries on, because a verification harness that dies on
//! the interesting outcome is useless.

/// Outcome of the three-way comparison protocol for one aggregate kind.
///
/// The three checks are independent: repeated-run stability of each path
/// catches nondeterminism (a data race on the parallel path, a mutating
/// pass on the linear one), while the cross-path check catches a wrong
/// merge or partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    /// Every repeated linear run produced the identical value.
    pub linear_stable: bool,
    /// Every repeated parallel run produced the identical value.
    pub parallel_stable: bool,
    /// The first linear and first parallel values are identical.
    pub paths_agree: bool,
}

impl Verdict {
    /// True only when all three comparisons held.
    pub fn all_clear(&self) -> bool {
        self.linear_stable && self.parallel_stable && self.paths_agree
    }
}

/// True when every result in the slice equals the first. Vacuously true for
/// fewer than two results.
pub fn is_stable<A: PartialEq>(results: &[A]) -> bool {
    results.windows(2).all(|pair| pair[0] == pair[1])
}

/// Runs the full comparison protocol over the collected per-run results of
/// both paths.
pub fn judge<A: PartialEq>(linear: &[A], parallel: &[A]) -> Verdict {
    Verdict {
        linear_stable: is_stable(linear),
        parallel_stable: is_stable(parallel),
        paths_agree: match (linear.first(), parallel.first()) {
            (Some(l), Some(p)) => l == p,
            _ => false,
        },
    }
}
