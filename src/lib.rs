//! `hyperloglogpp` estimates the number of distinct 64-bit items in a stream
//! using sublinear memory.
//!
//! This is the HyperLogLog++ algorithm of Heule et al. with 64-bit hashes, a
//! sparse mode for increased precision at low cardinalities, and the improved
//! estimator of Ertl that needs no empirical bias correction data.
//!
//! # Data-structure design
//!
//! A counter is parameterized by a precision `p` in `[4, 18]` selecting
//! `m = 2^p` registers, and by one of three 64-bit bit mixers fixed at
//! construction. It keeps its observations in one of two representations:
//!
//! ## Sparse representation
//!
//! While fewer than `m / 4` distinct hashes have been seen, the counter
//! stores each observation as a 32-bit encoded word carrying a 25-bit index
//! and enough information to recover the register rank. Estimation uses
//! linear counting over the `2^24` fine-grained buckets, which is close to
//! exact while the counter is nearly empty.
//!
//! ## Dense representation
//!
//! Past the sparse size budget the encoded words are folded into `m` byte
//! registers, each holding the maximum observed rank for its bucket. The
//! switch is one-way until [`HyperLogLogPlusPlus::reset`].
//!
//! # Estimators
//!
//! Two estimates are available over either representation:
//! [`HyperLogLogPlusPlus::cardinality`] implements the HLL++ estimate
//! (linear counting under a per-precision threshold, bias-corrected raw
//! estimate above it), and [`HyperLogLogPlusPlus::ertl_cardinality`] the
//! histogram-based estimate of Ertl, 2017.
//!
//! Expected relative error of the dense estimate is about `1.04 / sqrt(m)`:
//!
//! ```text
//! p = 10: 1.04 / sqrt(2^10) = 3.25%
//! p = 12: 1.04 / sqrt(2^12) = 1.62%
//! p = 14: 1.04 / sqrt(2^14) = 0.81%
//! ```
//!
//! # Merging
//!
//! Counters built with equal precision (and fed through the same mixer)
//! merge losslessly in any representation combination: the merged counter is
//! identical to one that observed both streams. A common pattern is one
//! counter per worker thread, merged at a synchronization point. A single
//! counter is not safe for concurrent mutation.
//!
//! References:
//! - [HyperLogLog++ paper](https://static.googleusercontent.com/media/research.google.com/en//pubs/archive/40671.pdf)
//! - [Ertl, 2017](https://arxiv.org/abs/1702.01284)

mod bias;
mod counter;
mod dense;
mod encoding;
mod error;
mod estimator;
mod mixer;
mod representation;
mod sparse;

pub use counter::HyperLogLogPlusPlus;
pub use error::Error;
pub use mixer::{murmur3_finalizer, numerical_recipes_mixer, wang_mixer, Mixer};
