// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Size accounting for a layout.

use crate::field::Field;
use crate::LayoutError;

/// Totals for one layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutSummary {
    /// End offset of the last entry.
    pub total_size: i64,
    /// Bytes spent on padding.
    pub padding: i64,
    /// Real (non-padding) entries.
    pub field_count: usize,
}

impl LayoutSummary {
    /// Summarise a field list in layout order.
    ///
    /// Padding entries count directly. Gaps between consecutive entries that
    /// no padding entry covers count too, so lists without padding markers
    /// are measured the same way. Padding markers are not validated, so the
    /// sums are checked.
    pub fn of(fields: &[Field]) -> Result<Self, LayoutError> {
        let mut summary = LayoutSummary::default();
        let mut pos: Option<i64> = None;

        for field in fields {
            let overflow = || LayoutError::Overflow {
                name: field.name.clone(),
            };
            if let Some(prev) = pos {
                if field.start > prev {
                    let gap = field.start.checked_sub(prev).ok_or_else(overflow)?;
                    summary.padding = summary.padding.checked_add(gap).ok_or_else(overflow)?;
                }
            }
            if field.is_padding {
                summary.padding = summary
                    .padding
                    .checked_add(field.size)
                    .ok_or_else(overflow)?;
            } else {
                summary.field_count += 1;
            }
            pos = Some(pos.map_or(field.end, |p| p.max(field.end)));
        }

        summary.total_size = pos.unwrap_or(0);
        Ok(summary)
    }
}

/// What each stage of one run did, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StageReport {
    /// The input layout as given.
    pub before: LayoutSummary,
    /// Padding markers dropped from the input.
    pub padding_markers: usize,
    /// Entries left after grouping; `None` when grouping was skipped.
    pub groups: Option<usize>,
    /// The optimised layout.
    pub after: LayoutSummary,
}
