// SPDX-License-Identifier: (MIT OR Apache-2.0)
//! Usage text.

use crate::output;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Usage text, for stdout on `--help` and stderr after a bad flag.
pub fn usage() -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} {} - Reorder struct fields to minimise padding\n\n",
        output::title("structlayout-optimize"),
        output::version(VERSION)
    ));
    out.push_str(&format!(
        "{}: {} {} {}\n\n",
        output::section_header("Usage"),
        output::command("structlayout-optimize"),
        output::arg("[options]"),
        output::arg("[file]")
    ));
    out.push_str(&format!(
        "Reads a JSON array of fields from {} (or stdin) and prints the\n",
        output::arg("file")
    ));
    out.push_str("optimised layout with padding made explicit.\n\n");
    out.push_str(&format!("{}\n", output::section_header("Options:")));
    out.push_str(&format!(
        "  {}, {}    Break up structs and reorder their fields freely\n",
        output::arg("-r"),
        output::arg("--recurse")
    ));
    out.push_str(&format!(
        "  {}, {}     Format data as JSON\n",
        output::arg("-json"),
        output::arg("--json")
    ));
    out.push_str(&format!(
        "  {}, {}    Report each stage on stderr\n",
        output::arg("-v"),
        output::arg("--verbose")
    ));
    out.push_str(&format!(
        "  {}, {}       Show this help\n",
        output::arg("-h"),
        output::arg("--help")
    ));
    out.push_str(&format!(
        "  {}, {}    Show version\n",
        output::arg("-V"),
        output::arg("--version")
    ));
    out
}
