//! Counter facade tying the mixers, register layouts and estimators
//! together.

use std::fmt::{Debug, Formatter};
use std::mem::size_of;
use std::ops::AddAssign;

use crate::dense::DenseRegisters;
use crate::error::Error;
use crate::estimator;
use crate::mixer::Mixer;
use crate::representation::{Representation, RepresentationOps};
use crate::sparse::SparseRegisters;

/// Default precision: 4096 registers, ~1.6% standard error.
const DEFAULT_PRECISION: u8 = 12;

/// Probabilistic distinct counter: 64-bit HyperLogLog++ with a sparse
/// high-precision mode and Ertl's improved estimator.
///
/// A counter is built with a precision `p` in `[4, 18]` and one of the three
/// [`Mixer`]s, both fixed for its lifetime. It starts in the sparse
/// representation and switches to the dense register array once the sparse
/// store outgrows a quarter of the register count.
///
/// # Examples
///
/// ```
/// use hyperloglogpp::HyperLogLogPlusPlus;
///
/// let mut counter = HyperLogLogPlusPlus::new(14)?;
/// for item in 0..10_000u64 {
///     counter.add(item);
/// }
/// let estimate = counter.cardinality();
/// assert!(estimate.abs_diff(10_000) < 500);
/// # Ok::<(), hyperloglogpp::Error>(())
/// ```
#[derive(Clone, PartialEq)]
pub struct HyperLogLogPlusPlus {
    p: u8,
    mixer: Mixer,
    repr: Representation,
}

impl HyperLogLogPlusPlus {
    /// Create a counter with the given precision and the default mixer.
    ///
    /// Returns [`Error::InvalidPrecision`] unless `4 <= precision <= 18`.
    pub fn new(precision: u8) -> Result<Self, Error> {
        Self::with_mixer(precision, Mixer::default())
    }

    /// Create a counter with the given precision and mixer.
    pub fn with_mixer(precision: u8, mixer: Mixer) -> Result<Self, Error> {
        if !(4..=18).contains(&precision) {
            return Err(Error::InvalidPrecision(precision));
        }
        let m = 1usize << precision;
        Ok(Self {
            p: precision,
            mixer,
            repr: Representation::Sparse(SparseRegisters::with_capacity(precision, m / 4)),
        })
    }

    /// Create a counter that starts directly in the dense representation.
    ///
    /// Useful when the expected cardinality is known to be large.
    pub fn dense(precision: u8, mixer: Mixer) -> Result<Self, Error> {
        if !(4..=18).contains(&precision) {
            return Err(Error::InvalidPrecision(precision));
        }
        Ok(Self {
            p: precision,
            mixer,
            repr: Representation::Dense(DenseRegisters::new(precision)),
        })
    }

    /// Precision this counter was built with.
    pub fn precision(&self) -> u8 {
        self.p
    }

    /// Whether the counter currently uses the sparse representation.
    pub fn is_sparse(&self) -> bool {
        matches!(self.repr, Representation::Sparse(_))
    }

    /// Add one item to the counter.
    #[inline]
    pub fn add(&mut self, item: u64) {
        let hash = self.mixer.mix(item);
        self.repr.insert_hash(hash);
        if self.sparse_len_exceeds(self.m() / 4) {
            self.upgrade();
        }
    }

    /// Add a batch of items to the counter.
    pub fn add_many(&mut self, items: &[u64]) {
        for &item in items {
            self.add(item);
        }
    }

    /// Merge `other` into `self`, as if every item added to either counter
    /// had been added to `self`.
    ///
    /// Both counters must have the same precision and are assumed to use the
    /// same mixer; `self` keeps its own.
    pub fn merge(&mut self, other: &Self) -> Result<(), Error> {
        if self.p != other.p {
            return Err(Error::PrecisionMismatch {
                lhs: self.p,
                rhs: other.p,
            });
        }

        match &other.repr {
            Representation::Sparse(rhs) => {
                // two sparse stores merge in place unless the combined size
                // would exceed the register count
                if self.sparse_len_exceeds(self.m() - rhs.len()) {
                    self.upgrade();
                }
                match &mut self.repr {
                    Representation::Sparse(lhs) => {
                        for word in rhs.words() {
                            lhs.insert_encoded(word);
                        }
                    }
                    Representation::Dense(lhs) => lhs.absorb_sparse(rhs),
                }
            }
            Representation::Dense(rhs) => {
                self.upgrade();
                if let Representation::Dense(lhs) = &mut self.repr {
                    lhs.merge(rhs);
                }
            }
        }
        Ok(())
    }

    /// HyperLogLog++ cardinality estimate (Heule et al.): linear counting
    /// while reliable, bias-corrected raw estimate otherwise.
    pub fn cardinality(&self) -> u64 {
        self.repr.estimate()
    }

    /// Improved cardinality estimate (Ertl, 2017), computed from the
    /// register histogram without empirical correction data.
    pub fn ertl_cardinality(&self) -> u64 {
        estimator::ertl_estimate(&self.repr.histogram())
    }

    /// Return to the empty sparse state, keeping precision and mixer.
    ///
    /// The sparse store is allocated lazily again on the next [`add`].
    ///
    /// [`add`]: Self::add
    pub fn reset(&mut self) {
        self.repr = Representation::Sparse(SparseRegisters::new(self.p));
    }

    /// Memory occupied by the counter in bytes.
    pub fn size_of(&self) -> usize {
        size_of::<Self>() + self.repr.size_of()
    }

    fn m(&self) -> usize {
        1 << self.p
    }

    fn sparse_len_exceeds(&self, limit: usize) -> bool {
        match &self.repr {
            Representation::Sparse(sparse) => sparse.len() > limit,
            Representation::Dense(_) => false,
        }
    }

    /// One-way switch to the dense representation. No-op when already dense.
    pub(crate) fn upgrade(&mut self) {
        let dense = match &self.repr {
            Representation::Sparse(sparse) => DenseRegisters::from_sparse(sparse),
            Representation::Dense(_) => return,
        };
        self.repr = Representation::Dense(dense);
    }
}

impl Default for HyperLogLogPlusPlus {
    /// Sparse counter with precision 12 and the MurmurHash3 finalizer.
    fn default() -> Self {
        Self {
            p: DEFAULT_PRECISION,
            mixer: Mixer::default(),
            repr: Representation::Sparse(SparseRegisters::with_capacity(
                DEFAULT_PRECISION,
                (1usize << DEFAULT_PRECISION) / 4,
            )),
        }
    }
}

impl AddAssign<&HyperLogLogPlusPlus> for HyperLogLogPlusPlus {
    /// Merge shorthand.
    ///
    /// # Panics
    ///
    /// Panics if the precisions differ; use [`HyperLogLogPlusPlus::merge`]
    /// to handle the mismatch instead.
    fn add_assign(&mut self, other: &HyperLogLogPlusPlus) {
        if let Err(err) = self.merge(other) {
            panic!("{err}");
        }
    }
}

impl Debug for HyperLogLogPlusPlus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{ representation: {}, estimate: {}, size: {} }}",
            self.repr.name(),
            self.cardinality(),
            self.size_of()
        )
    }
}
