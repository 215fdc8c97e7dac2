//! Hashing utilities for trace comparison.
//!
//! Uses FNV-1a for fast, deterministic hashing of recorded steps. These
//! hashes are not cryptographically secure; they are a fast equality
//! check before the step-by-step comparison in [`compare`](crate::compare).

use sortviz_core::{SortOperation, SortValue};

use crate::trace::Trace;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_bytes(mut hash: u64, bytes: &[u8]) -> u64 {
    for &b in bytes {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// Feed a u64 (as 8 LE bytes) into an FNV-1a hash state.
#[inline]
fn fnv1a_u64(hash: u64, v: u64) -> u64 {
    fnv1a_bytes(hash, &v.to_le_bytes())
}

/// Hash of a single step record.
///
/// Folds in the kind tag, the highlight count and indices, the snapshot
/// length and every value's [`hash_bits`](SortValue::hash_bits), then the
/// description bytes. Lengths are folded before each variable-size part
/// so adjacent parts cannot alias.
pub fn step_hash<T: SortValue>(step: &SortOperation<T>) -> u64 {
    fold_step(FNV_OFFSET, step)
}

fn fold_step<T: SortValue>(mut hash: u64, step: &SortOperation<T>) -> u64 {
    hash = fnv1a_byte(hash, step.kind.tag());

    hash = fnv1a_u64(hash, step.highlights.len() as u64);
    for &i in &step.highlights {
        hash = fnv1a_u64(hash, i as u64);
    }

    hash = fnv1a_u64(hash, step.array.len() as u64);
    for &v in &step.array {
        hash = fnv1a_u64(hash, v.hash_bits());
    }

    hash = fnv1a_u64(hash, step.description.len() as u64);
    fnv1a_bytes(hash, step.description.as_bytes())
}

/// Hash over every step of `trace`, in order.
///
/// The step index is folded in at each record boundary so that reordering
/// records changes the hash.
pub fn trace_hash<T: SortValue>(trace: &Trace<T>) -> u64 {
    let mut hash = FNV_OFFSET;
    for (index, step) in trace.iter().enumerate() {
        hash = fnv1a_u64(hash, index as u64);
        hash = fold_step(hash, step);
    }
    hash
}
