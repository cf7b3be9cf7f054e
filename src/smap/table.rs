use log::debug;
use std::path::Path;

use crate::smap::error::MapError;

lazy_static::lazy_static! {
    static ref DEFINE_SYSCALL_RE : regex::Regex = regex::Regex::new(r"^DEFINE_SYSCALL\(([A-Za-z0-9_]+),").unwrap();
}

/// One `DEFINE_SYSCALL(<name>, ...)` entry of a syscall definition table
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct SyscallDefinition {
    /// The name as written in the table (not case-normalized)
    pub name : String,
    /// 1-based line number in the table
    pub line : usize
}

/// Collect the definitions of a syscall table in table order
///
/// Only the first macro argument is consumed; lines that do not start with a
/// `DEFINE_SYSCALL(<identifier>,` call are skipped.
pub fn parse_table(text : &str) -> Vec<SyscallDefinition> {
    text.lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            DEFINE_SYSCALL_RE.captures(line).map(|caps| {
                SyscallDefinition { name : caps[1].to_owned(), line : idx + 1 }
            })
        })
        .collect()
}

pub fn load_table(path : &Path) -> Result<Vec<SyscallDefinition>, MapError> {
    let text = std::fs::read_to_string(path)
        .map_err(|source| MapError::Read { path : path.to_path_buf(), source })?;
    let defs = parse_table(&text);
    debug!("Loaded {} syscall definitions from {}", defs.len(), path.display());
    Ok(defs)
}
