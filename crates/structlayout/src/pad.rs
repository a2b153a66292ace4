// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Offset recomputation with explicit padding.

use crate::align::align_up;
use crate::field::Field;
use crate::LayoutError;

/// Lay `fields` out in the given order from offset 0.
///
/// Each field starts at the next multiple of its alignment; any gap before it
/// becomes a padding entry. No trailing padding is added, so the last entry's
/// `end` is the packed size.
pub fn pad(fields: Vec<Field>) -> Result<Vec<Field>, LayoutError> {
    let mut out = Vec::with_capacity(fields.len() * 2);
    let mut pos: i64 = 0;

    for mut field in fields {
        let offset = align_up(pos, field.align).map_err(|e| e.at(&field.name))?;
        if offset > pos {
            out.push(Field::padding(pos, offset));
            pos = offset;
        }
        let end = pos
            .checked_add(field.size)
            .ok_or_else(|| LayoutError::Overflow {
                name: field.name.clone(),
            })?;
        field.start = pos;
        field.end = end;
        out.push(field);
        pos = end;
    }

    Ok(out)
}
