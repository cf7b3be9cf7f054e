use std::io::Write;

use crate::smap::resolve::CaseGroup;

/// Write the case labels of a group followed by its `return` line
///
/// The `return` is written even when the group has no labels.
pub fn write_case_group<W : Write>(out : &mut W, group : &CaseGroup, prefix : &str) -> std::io::Result<()> {
    for label in &group.labels {
        writeln!(out, "case {}:  // {}", label.number, label.variant)?;
    }
    writeln!(out, "  return {};", group.symbol(prefix))
}

pub fn write_switch_open<W : Write>(out : &mut W, selector : &str) -> std::io::Result<()> {
    writeln!(out, "switch ({}) {{", selector)
}

pub fn write_switch_close<W : Write>(out : &mut W, default_symbol : &str) -> std::io::Result<()> {
    writeln!(out, "default:")?;
    writeln!(out, "  return {};", default_symbol)?;
    writeln!(out, "}}")
}
