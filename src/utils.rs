// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Utility Functions** - *Null Mask and Length Validation Helpers*
//!
//! Shared argument checks for the array kernels, so the hot loops can run
//! without re-validating masks and buffer lengths per element.

use minarrow::Bitmask;

use crate::errors::{KernelError, log_length_mismatch};

/// Determines whether nulls are present given an optional null count and mask reference.
/// Avoids computing mask cardinality to preserve performance guarantees.
#[inline(always)]
pub fn has_nulls(null_count: Option<usize>, mask: Option<&Bitmask>) -> bool {
    match null_count {
        Some(n) => n > 0,
        None => mask.is_some(),
    }
}

/// Checks the mask covers every input lane.
/// Used so we can avoid bounds checks in the hot loop
#[inline(always)]
pub fn confirm_mask_capacity(cmp_len: usize, mask: Option<&Bitmask>) -> Result<(), KernelError> {
    if let Some(m) = mask {
        if m.len() < cmp_len {
            return Err(KernelError::InvalidArguments(format!(
                "mask (Bitmask): capacity too small (expected at least {}, got {})",
                cmp_len,
                m.len()
            )));
        }
    }
    Ok(())
}

/// Validates that two lengths are equal for binary kernels and `_to` output buffers.
///
/// Returns `KernelError::LengthMismatch` naming `label` otherwise.
#[inline(always)]
pub fn confirm_equal_len(label: &str, a: usize, b: usize) -> Result<(), KernelError> {
    if a != b {
        return Err(KernelError::LengthMismatch(log_length_mismatch(label, a, b)));
    }
    Ok(())
}

/// Merge two optional Bitmasks into a new output mask, computing per-row AND.
/// Returns None if both inputs are None (output is dense).
#[inline]
pub fn merge_bitmasks_to_new(
    lhs: Option<&Bitmask>,
    rhs: Option<&Bitmask>,
    len: usize,
) -> Option<Bitmask> {
    match (lhs, rhs) {
        (None, None) => None,
        (Some(l), None) | (None, Some(l)) => {
            debug_assert!(l.len() >= len, "Bitmask too short in merge");
            let mut out = Bitmask::new_set_all(len, true);
            for i in 0..len {
                out.set(i, l.get(i));
            }
            Some(out)
        }
        (Some(l), Some(r)) => {
            debug_assert!(l.len() >= len, "Left Bitmask too short in merge");
            debug_assert!(r.len() >= len, "Right Bitmask too short in merge");
            let mut out = Bitmask::new_set_all(len, true);
            for i in 0..len {
                out.set(i, l.get(i) && r.get(i));
            }
            Some(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_nulls_prefers_count() {
        let m = Bitmask::new_set_all(4, true);
        assert!(!has_nulls(Some(0), Some(&m)));
        assert!(has_nulls(None, Some(&m)));
        assert!(has_nulls(Some(2), Some(&m)));
        assert!(!has_nulls(None, None));
    }

    #[test]
    fn mask_capacity_rejects_short_mask() {
        let m = Bitmask::new_set_all(2, true);
        assert!(confirm_mask_capacity(2, Some(&m)).is_ok());
        assert!(matches!(
            confirm_mask_capacity(3, Some(&m)),
            Err(KernelError::InvalidArguments(_))
        ));
        assert!(confirm_mask_capacity(3, None).is_ok());
    }

    #[test]
    fn merge_ands_validity() {
        let mut l = Bitmask::new_set_all(3, true);
        l.set(0, false);
        let mut r = Bitmask::new_set_all(3, true);
        r.set(2, false);
        let m = merge_bitmasks_to_new(Some(&l), Some(&r), 3).unwrap();
        assert!(!m.get(0));
        assert!(m.get(1));
        assert!(!m.get(2));
        assert!(merge_bitmasks_to_new(None, None, 3).is_none());
    }
}
