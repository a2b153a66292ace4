// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Greedy field ordering.
//!
//! Zero-sized fields first, then by alignment descending, then by size
//! descending. Placing the widest alignments first lets smaller fields pack
//! against boundaries that are already aligned. Not optimal, just good.

use std::cmp::Ordering;

use crate::field::Field;

/// Ordering between two fields: `Less` means `a` goes first.
pub fn compare(a: &Field, b: &Field) -> Ordering {
    let a_zst = a.size == 0;
    let b_zst = b.size == 0;
    b_zst
        .cmp(&a_zst)
        .then_with(|| b.align.cmp(&a.align))
        .then_with(|| b.size.cmp(&a.size))
}

/// Reorder `fields` in place. Ties keep their input order.
pub fn optimize(fields: &mut [Field]) {
    fields.sort_by(compare);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, size: i64, align: i64) -> Field {
        Field {
            name: name.to_string(),
            ty: String::new(),
            start: 0,
            end: size,
            size,
            align,
            is_padding: false,
        }
    }

    fn names(fields: &[Field]) -> Vec<&str> {
        fields.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn zero_sized_fields_go_first() {
        let mut fields = vec![field("a", 8, 8), field("z", 0, 8), field("b", 1, 1)];
        optimize(&mut fields);
        assert_eq!(names(&fields), ["z", "a", "b"]);
    }

    #[test]
    fn zero_sized_beats_higher_alignment() {
        let mut fields = vec![field("wide", 16, 16), field("z", 0, 1)];
        optimize(&mut fields);
        assert_eq!(names(&fields), ["z", "wide"]);
    }

    #[test]
    fn higher_alignment_first() {
        let mut fields = vec![field("a", 1, 1), field("b", 4, 4), field("c", 8, 8)];
        optimize(&mut fields);
        assert_eq!(names(&fields), ["c", "b", "a"]);
    }

    #[test]
    fn larger_size_breaks_alignment_ties() {
        let mut fields = vec![field("small", 8, 8), field("big", 24, 8)];
        optimize(&mut fields);
        assert_eq!(names(&fields), ["big", "small"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let mut fields = vec![
            field("a", 4, 4),
            field("b", 4, 4),
            field("c", 4, 4),
            field("d", 4, 4),
        ];
        optimize(&mut fields);
        assert_eq!(names(&fields), ["a", "b", "c", "d"]);
    }

    #[test]
    fn zero_sized_fields_still_order_by_alignment() {
        let mut zsts = vec![field("x", 0, 1), field("y", 0, 8)];
        optimize(&mut zsts);
        assert_eq!(names(&zsts), ["y", "x"]);
    }

    #[test]
    fn compare_is_consistent() {
        let a = field("a", 8, 8);
        let b = field("b", 4, 4);
        assert_eq!(compare(&a, &b), Ordering::Less);
        assert_eq!(compare(&b, &a), Ordering::Greater);
        assert_eq!(compare(&a, &a.clone()), Ordering::Equal);
    }
}
