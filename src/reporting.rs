// src/reporting.rs
//! Console report rendering.
//!
//! Renderers return strings with color accents; handlers print them. The
//! ANSI-stripped shape is the contract scripts can parse.

use colored::Colorize;

use crate::graph::reach::RankEntry;

/// Renders the ranked top report: a header naming how many entries follow,
/// then one 1-indexed line per node.
#[must_use]
pub fn render_top(entries: &[RankEntry]) -> String {
    let mut out = format!(
        "Top {} components by indirect import count:\n",
        entries.len()
    );
    for (index, entry) in entries.iter().enumerate() {
        out.push_str(&format!(
            "{}. {}: {} imports\n",
            index + 1,
            entry.file.cyan(),
            entry.indirect_imports.to_string().bold()
        ));
    }
    out
}

/// Renders the entry-point report, flagging the none/multiple cases.
#[must_use]
pub fn render_entry_points(entry_points: &[String]) -> String {
    let mut out = String::from("Probable entry points:\n");
    match entry_points {
        [] => out.push_str(&format!(
            "{}\n",
            "No probable entry points found. The project might have circular dependencies."
                .yellow()
        )),
        [only] => out.push_str(&format!("  {only}\n")),
        many => {
            for point in many {
                out.push_str(&format!("  {point}\n"));
            }
            out.push_str(&format!(
                "{}\n",
                format!("Multiple probable entry points found ({}).", many.len()).yellow()
            ));
        }
    }
    out
}
