// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Alignment rounding.

use crate::LayoutError;

/// Round `x` up to the next multiple of `a`.
///
/// Returns the smallest `y >= x` with `y % a == 0`. Rejects `a <= 0` instead of
/// dividing by zero, and reports overflow rather than wrapping.
pub fn align_up(x: i64, a: i64) -> Result<i64, LayoutError> {
    if a <= 0 {
        return Err(LayoutError::InvalidAlignment {
            name: String::new(),
            align: a,
        });
    }
    let y = x.checked_add(a - 1).ok_or_else(|| LayoutError::Overflow {
        name: String::new(),
    })?;
    Ok(y - y.rem_euclid(a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn already_aligned_is_unchanged() {
        assert_eq!(align_up(0, 8).unwrap(), 0);
        assert_eq!(align_up(16, 8).unwrap(), 16);
        assert_eq!(align_up(12, 4).unwrap(), 12);
    }

    #[test]
    fn rounds_up_to_next_multiple() {
        assert_eq!(align_up(1, 8).unwrap(), 8);
        assert_eq!(align_up(9, 8).unwrap(), 16);
        assert_eq!(align_up(5, 2).unwrap(), 6);
        assert_eq!(align_up(7, 3).unwrap(), 9);
    }

    #[test]
    fn align_one_is_identity() {
        for x in 0..32 {
            assert_eq!(align_up(x, 1).unwrap(), x);
        }
    }

    #[test]
    fn zero_alignment_is_rejected() {
        assert!(matches!(
            align_up(4, 0),
            Err(LayoutError::InvalidAlignment { align: 0, .. })
        ));
    }

    #[test]
    fn negative_alignment_is_rejected() {
        assert!(matches!(
            align_up(4, -8),
            Err(LayoutError::InvalidAlignment { align: -8, .. })
        ));
    }

    #[test]
    fn overflow_is_reported() {
        assert!(matches!(
            align_up(i64::MAX, 8),
            Err(LayoutError::Overflow { .. })
        ));
    }
}
