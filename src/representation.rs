//! Representation layer: the two register layouts behind one dispatch point.
//!
//! A counter starts with the sparse layout and switches to the dense one
//! exactly once between resets; the switch policy itself lives in the
//! counter, which also needs layout-specific access for merging.

use enum_dispatch::enum_dispatch;

use crate::dense::DenseRegisters;
use crate::estimator::RegisterHistogram;
use crate::sparse::SparseRegisters;

/// Operations every register layout provides to the counter facade.
#[enum_dispatch(Representation)]
pub(crate) trait RepresentationOps {
    /// Fold one 64-bit hash into the register state.
    fn insert_hash(&mut self, hash: u64);
    /// HyperLogLog++ cardinality estimate over the current layout.
    fn estimate(&self) -> u64;
    /// Register-value histogram consumed by the Ertl estimator.
    fn histogram(&self) -> RegisterHistogram;
    /// Memory footprint in bytes.
    fn size_of(&self) -> usize;
}

/// Register layouts supported by the counter.
#[enum_dispatch]
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Representation {
    Sparse(SparseRegisters),
    Dense(DenseRegisters),
}

impl Representation {
    /// Layout name for debug formatting.
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Representation::Sparse(_) => "Sparse",
            Representation::Dense(_) => "Dense",
        }
    }
}
