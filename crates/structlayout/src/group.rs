// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Collapse a flattened field list into one entry per top-level member.
//!
//! Upstream layouts list nested structs depth-first with dotted names
//! (`T.inner.x`, `T.inner.y`). Without free reordering, a nested struct has to
//! move as a unit, so its members are folded back into a single entry keyed by
//! the two-component prefix (`T.inner`). This is name-based, not a tree
//! rebuild: deeper components are simply truncated.

use crate::align::align_up;
use crate::field::{Field, STRUCT_TYPE};
use crate::LayoutError;

/// A group under construction.
struct Group {
    field: Field,
    /// Some member sat inside a nested struct.
    nested: bool,
}

impl Group {
    fn start(member: &Field) -> Self {
        let mut field = member.clone();
        field.name = member.prefix().to_string();
        Group {
            field,
            nested: member.is_nested(),
        }
    }

    fn fold(&mut self, member: &Field) {
        self.field.ty = STRUCT_TYPE.to_string();
        self.field.align = self.field.align.max(member.align);
        self.field.end = self.field.end.max(member.end);
        self.nested |= member.is_nested();
    }

    fn finish(mut self) -> Result<Field, LayoutError> {
        let name = self.field.name.clone();
        let mut size = self
            .field
            .end
            .checked_sub(self.field.start)
            .ok_or_else(|| LayoutError::Overflow { name: name.clone() })?;
        if self.nested {
            // A struct's size is a multiple of its alignment; this recovers
            // trailing padding the upstream list reported as a separate gap.
            size = align_up(size, self.field.align).map_err(|e| e.at(&name))?;
        }
        self.field.size = size;
        self.field.end = self
            .field
            .start
            .checked_add(size)
            .ok_or(LayoutError::Overflow { name })?;
        Ok(self.field)
    }
}

/// Fold runs of same-prefix fields into single entries.
///
/// Padding markers only mark a gap; they are dropped here and regenerated
/// after reordering. When no gap separates an entry from the next real field,
/// the entry is stretched to that field's start. A prefix that comes back
/// after another one (Go's repeated blank `_` fields) starts a fresh entry.
pub fn combine(fields: &[Field]) -> Result<Vec<Field>, LayoutError> {
    let mut out = Vec::new();
    let mut current: Option<Group> = None;
    let mut after_gap = true;

    for field in fields {
        if field.is_padding {
            after_gap = true;
            continue;
        }

        if let Some(group) = current.as_mut() {
            if !after_gap {
                group.field.end = group.field.end.max(field.start);
            }
        }

        let prefix = field.prefix();
        match current.as_mut() {
            Some(group) if group.field.name == prefix => group.fold(field),
            _ => {
                if let Some(group) = current.take() {
                    out.push(group.finish()?);
                }
                current = Some(Group::start(field));
            }
        }
        after_gap = false;
    }

    if let Some(group) = current {
        out.push(group.finish()?);
    }
    Ok(out)
}
