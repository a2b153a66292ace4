// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Struct field reordering to minimise alignment padding.
//!
//! Takes a struct's current layout as a list of [`Field`] records and
//! produces a reordered layout with offsets recomputed and padding entries
//! made explicit. Three stages run in order: [`group::combine`] (unless
//! fields may be reordered freely), [`optimize::optimize`] and [`pad::pad`].

pub mod align;
mod config;
mod error;
pub mod field;
pub mod group;
pub mod optimize;
pub mod pad;
pub mod summary;
pub mod text;

pub use config::{OptimizeOpts, OutputFormat};
pub use error::LayoutError;
pub use field::Field;
pub use summary::{LayoutSummary, StageReport};

/// Run the full transform over a decoded field list.
///
/// Invalid fields are rejected before any stage runs, so the result is either
/// a complete layout or an error.
pub fn optimize_layout(fields: Vec<Field>, opts: &OptimizeOpts) -> Result<Vec<Field>, LayoutError> {
    optimize_layout_report(fields, opts).map(|(fields, _)| fields)
}

/// Like [`optimize_layout`], also reporting what each stage did.
pub fn optimize_layout_report(
    fields: Vec<Field>,
    opts: &OptimizeOpts,
) -> Result<(Vec<Field>, StageReport), LayoutError> {
    validate(&fields)?;

    let mut report = StageReport {
        before: LayoutSummary::of(&fields)?,
        padding_markers: fields.iter().filter(|f| f.is_padding).count(),
        ..StageReport::default()
    };

    let fields = if opts.recurse {
        fields
    } else {
        let groups = group::combine(&fields)?;
        report.groups = Some(groups.len());
        groups
    };

    let mut fields: Vec<Field> = fields.into_iter().filter(|f| !f.is_padding).collect();
    optimize::optimize(&mut fields);
    let fields = pad::pad(fields)?;

    report.after = LayoutSummary::of(&fields)?;
    Ok((fields, report))
}

/// Check that every real field has a usable alignment, a non-negative size
/// and a span `start..end` that starts at or after 0 and matches its size.
/// Padding markers are ignored; they are regenerated anyway.
pub fn validate(fields: &[Field]) -> Result<(), LayoutError> {
    for field in fields.iter().filter(|f| !f.is_padding) {
        if field.align <= 0 {
            return Err(LayoutError::InvalidAlignment {
                name: field.name.clone(),
                align: field.align,
            });
        }
        if field.size < 0 {
            return Err(LayoutError::NegativeSize {
                name: field.name.clone(),
                size: field.size,
            });
        }
        if field.start < 0 {
            return Err(LayoutError::NegativeOffset {
                name: field.name.clone(),
                start: field.start,
            });
        }
        if field.end.checked_sub(field.start) != Some(field.size) {
            return Err(LayoutError::InconsistentSpan {
                name: field.name.clone(),
                start: field.start,
                end: field.end,
                size: field.size,
            });
        }
    }
    Ok(())
}

/// Parse a JSON array of field records.
pub fn decode_fields(input: &str) -> Result<Vec<Field>, LayoutError> {
    Ok(serde_json::from_str(input)?)
}

/// Serialize fields as a single-line JSON array.
pub fn fields_json(fields: &[Field]) -> Result<String, LayoutError> {
    serde_json::to_string(fields).map_err(LayoutError::Encode)
}

/// Render fields in the requested format.
pub fn render(fields: &[Field], format: OutputFormat) -> Result<String, LayoutError> {
    match format {
        OutputFormat::Structured => {
            let mut out = fields_json(fields)?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::HumanReadable => Ok(text::format_text(fields)),
    }
}
