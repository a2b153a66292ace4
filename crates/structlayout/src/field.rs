// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! The field record shared by every stage.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Type tag given to a group that collapsed more than one member.
pub const STRUCT_TYPE: &str = "struct";

/// One entry of a struct layout: a real field or a padding gap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub ty: String,
    pub start: i64,
    pub end: i64,
    pub size: i64,
    pub align: i64,
    #[serde(default)]
    pub is_padding: bool,
}

impl Field {
    /// A padding entry spanning `[start, end)`.
    pub fn padding(start: i64, end: i64) -> Self {
        Field {
            name: String::new(),
            ty: String::new(),
            start,
            end,
            size: end - start,
            align: 1,
            is_padding: true,
        }
    }

    /// The name truncated to its first two dot-separated components.
    ///
    /// `"T.inner.x"` and `"T.inner"` both give `"T.inner"`; `"x"` gives `"x"`.
    pub fn prefix(&self) -> &str {
        match self.name.match_indices('.').nth(1) {
            Some((idx, _)) => &self.name[..idx],
            None => &self.name,
        }
    }

    /// Whether the name has more than two components, i.e. the field lives
    /// inside a nested struct.
    pub fn is_nested(&self) -> bool {
        self.prefix().len() < self.name.len()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = if self.is_padding { "padding" } else { &self.name };
        write!(
            f,
            "{} {}: {}-{} (size {}, align {})",
            name, self.ty, self.start, self.end, self.size, self.align
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> Field {
        Field {
            name: name.to_string(),
            ty: "int32".to_string(),
            start: 0,
            end: 4,
            size: 4,
            align: 4,
            is_padding: false,
        }
    }

    #[test]
    fn prefix_truncates_to_two_components() {
        assert_eq!(named("T.inner.x").prefix(), "T.inner");
        assert_eq!(named("T.inner.deep.x").prefix(), "T.inner");
        assert_eq!(named("T.a").prefix(), "T.a");
        assert_eq!(named("a").prefix(), "a");
        assert_eq!(named("").prefix(), "");
    }

    #[test]
    fn nested_only_past_two_components() {
        assert!(named("T.inner.x").is_nested());
        assert!(!named("T.a").is_nested());
        assert!(!named("a").is_nested());
    }

    #[test]
    fn display_real_field() {
        let f = Field {
            name: "T.b".to_string(),
            ty: "int64".to_string(),
            start: 8,
            end: 16,
            size: 8,
            align: 8,
            is_padding: false,
        };
        assert_eq!(f.to_string(), "T.b int64: 8-16 (size 8, align 8)");
    }

    #[test]
    fn display_padding_uses_placeholder_name() {
        assert_eq!(
            Field::padding(4, 8).to_string(),
            "padding : 4-8 (size 4, align 1)"
        );
    }

    #[test]
    fn decodes_wire_keys() {
        let f: Field = serde_json::from_str(
            r#"{"name":"a","type":"int32","start":0,"end":4,"size":4,"align":4,"is_padding":false}"#,
        )
        .unwrap();
        assert_eq!(f, named("a"));
    }

    #[test]
    fn padding_marker_may_omit_name_and_type() {
        let f: Field =
            serde_json::from_str(r#"{"start":4,"end":8,"size":4,"align":0,"is_padding":true}"#)
                .unwrap();
        assert!(f.is_padding);
        assert!(f.name.is_empty());
        assert!(f.ty.is_empty());
    }

    #[test]
    fn missing_offsets_fail_to_decode() {
        let res: Result<Field, _> = serde_json::from_str(r#"{"name":"a","type":"int32"}"#);
        assert!(res.is_err());
    }
}
