// SPDX-License-Identifier: (MIT OR Apache-2.0)

/// How a finished layout is written out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// JSON array of field records.
    Structured,
    /// `<name> <type>: <start>-<end> (size <size>, align <align>)` per line.
    #[default]
    HumanReadable,
}

/// Options for one optimisation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptimizeOpts {
    /// Reorder fields of nested structs freely instead of moving each nested
    /// struct as a unit.
    pub recurse: bool,
    pub format: OutputFormat,
}

impl Default for OptimizeOpts {
    fn default() -> Self {
        Self {
            recurse: false,
            format: OutputFormat::HumanReadable,
        }
    }
}
