// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Layout error types.

/// An error from decoding or transforming a field list.
#[derive(Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("decoding field list: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("encoding field list: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("field `{name}` has invalid alignment {align} (must be positive)")]
    InvalidAlignment { name: String, align: i64 },
    #[error("field `{name}` has negative size {size}")]
    NegativeSize { name: String, size: i64 },
    #[error("field `{name}` starts at negative offset {start}")]
    NegativeOffset { name: String, start: i64 },
    #[error("field `{name}` spans {start}-{end} but has size {size}")]
    InconsistentSpan {
        name: String,
        start: i64,
        end: i64,
        size: i64,
    },
    #[error("offset overflow at field `{name}`")]
    Overflow { name: String },
}

impl LayoutError {
    /// Attach the offending field's name to an error raised by offset arithmetic.
    pub(crate) fn at(self, field: &str) -> Self {
        match self {
            LayoutError::InvalidAlignment { align, .. } => LayoutError::InvalidAlignment {
                name: field.to_string(),
                align,
            },
            LayoutError::Overflow { .. } => LayoutError::Overflow {
                name: field.to_string(),
            },
            other => other,
        }
    }
}
