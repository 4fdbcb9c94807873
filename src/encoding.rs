//! ## Hash encoding
//!
//! Bit utilities shared by both register layouts, plus the 32-bit encoding
//! used by the sparse layout.
//!
//! A 64-bit hash splits into a `p`-bit register index (the top bits) and a
//! rank (one plus the number of leading zeros of the remainder). The sparse
//! layout stores observations at the higher precision `p' = 25` packed into a
//! single 32-bit word:
//!
//! - bits 31..7 hold the 25-bit sparse index;
//! - if bits `p..25` of that index are all zero the index alone cannot
//!   recover the rank, so the rank at precision `p'` is stored explicitly in
//!   bits 6..1 with bit 0 set as a flag;
//! - otherwise the low seven bits stay zero and the rank is recomputed from
//!   the word itself.

/// Precision of the sparse layout, fixed so that a 25-bit index, a 6-bit rank
/// and one flag bit fill a 32-bit word.
pub(crate) const P_PRIME: u8 = 25;

/// Denominator for sparse linear counting, `2^(P_PRIME - 1)`.
pub(crate) const M_PRIME: u32 = 1 << (P_PRIME - 1);

/// Top `hi` bits of a 64-bit value, right-aligned.
#[inline]
pub(crate) fn extract_high_bits_64(bits: u64, hi: u8) -> u64 {
    bits >> (64 - hi)
}

/// Top `hi` bits of a 32-bit value, right-aligned.
#[inline]
pub(crate) fn extract_high_bits_32(bits: u32, hi: u8) -> u32 {
    bits >> (32 - hi)
}

/// Bits `[lo, hi)` of a 32-bit value, right-aligned by default or shifted
/// into the top of the word when `shift_left` is set.
#[inline]
pub(crate) fn extract_range_32(value: u32, hi: u8, lo: u8, shift_left: bool) -> u32 {
    let bitmask = ((1u32 << (hi - lo)) - 1) << lo;
    let masked = value & bitmask;
    if shift_left {
        masked << (32 - hi)
    } else {
        masked >> lo
    }
}

/// Register index of a 64-bit hash: its top `p` bits.
#[inline]
pub(crate) fn index_64(hash: u64, p: u8) -> u32 {
    (hash >> (64 - p)) as u32
}

/// Register index of a 32-bit encoded word: its top `p` bits.
#[inline]
pub(crate) fn index_32(word: u32, p: u8) -> u32 {
    word >> (32 - p)
}

/// Rank of a 64-bit hash at precision `p`, in `[1, 64 - p + 1]`.
///
/// The trailing-ones mask keeps the shifted value non-zero, bounding the
/// leading-zero count by `64 - p`.
#[inline]
pub(crate) fn rank_64(hash: u64, p: u8) -> u8 {
    let rank_bits = (hash << p) | ((1u64 << p) - 1);
    let rank = (rank_bits.leading_zeros() + 1) as u8;
    debug_assert!(rank <= 64 - p + 1);
    rank
}

/// Rank of a 32-bit word at precision `p`, in `[1, 32 - p + 1]`.
#[inline]
pub(crate) fn rank_32(word: u32, p: u8) -> u8 {
    let rank_bits = (word << p) | ((1u32 << p) - 1);
    let rank = (rank_bits.leading_zeros() + 1) as u8;
    debug_assert!(rank <= 32 - p + 1);
    rank
}

/// Full 25-bit sparse index of an encoded word.
#[inline]
pub(crate) fn sparse_index(word: u32) -> u32 {
    extract_high_bits_32(word, P_PRIME)
}

/// Encode a 64-bit hash into the 32-bit sparse representation.
///
/// The index always occupies the top bits, so the dense index at any
/// precision `p <= P_PRIME` can be recovered by a plain shift.
#[inline]
pub(crate) fn encode_hash(hash: u64, p: u8) -> u32 {
    let idx_word = (extract_high_bits_64(hash, P_PRIME) as u32) << (32 - P_PRIME);

    // are the index bits after position p all zero?
    if idx_word << p == 0 {
        // the rank at precision P_PRIME fits in 6 bits (at most 64 - 25 + 1)
        let additional_rank = rank_64(hash, P_PRIME);
        idx_word | u32::from(additional_rank) << 1 | 1
    } else {
        // the index alone determines the rank; bit 0 is zero by construction
        debug_assert_eq!(idx_word & 1, 0);
        idx_word
    }
}

/// Decode an encoded word back into `(index, rank)` at precision `p`.
#[inline]
pub(crate) fn decode_hash(word: u32, p: u8) -> (u32, u8) {
    let idx = index_32(word, p);
    let rank = if word & 1 == 1 {
        // stored with precision P_PRIME: bits p..P_PRIME of the hash were 0
        (P_PRIME - p) + extract_range_32(word, 7, 1, false) as u8
    } else {
        rank_32(word, p)
    };
    debug_assert!(rank <= 64 - p + 1);
    (idx, rank)
}
