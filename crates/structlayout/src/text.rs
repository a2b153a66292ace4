// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Human-readable layout output.

use crate::field::Field;

/// One line per field, in layout order.
pub fn format_text(fields: &[Field]) -> String {
    let mut out = String::new();
    for field in fields {
        out.push_str(&field.to_string());
        out.push('\n');
    }
    out
}
