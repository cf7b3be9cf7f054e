use log::{debug, warn};
use std::collections::HashMap;
use std::path::Path;

use crate::smap::error::MapError;

lazy_static::lazy_static! {
    static ref NR_DEFINE_RE : regex::Regex = regex::Regex::new(r"#define __NR_(\S+) (\d+)").unwrap();
}

/// Syscall names mapped to their kernel syscall numbers
///
/// Names are case-sensitive (the kernel headers use lowercase).  If a name is
/// defined more than once, the last definition wins.
#[derive(Debug,Default,Clone,PartialEq,Eq)]
pub struct SyscallTable {
    numbers : HashMap<String, u64>
}

impl SyscallTable {
    pub fn new() -> Self {
        SyscallTable { numbers : HashMap::new() }
    }

    pub fn insert(&mut self, name : &str, number : u64) -> Option<u64> {
        self.numbers.insert(name.to_owned(), number)
    }

    pub fn get(&self, name : &str) -> Option<u64> {
        self.numbers.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }
}

/// Build the syscall table from the text of a header like `asm/unistd_64.h`
///
/// Every line containing `#define __NR_<name> <decimal>` contributes an entry;
/// anything else is ignored.
pub fn parse_header(text : &str) -> SyscallTable {
    let mut table = SyscallTable::new();

    for line in text.lines() {
        if let Some(caps) = NR_DEFINE_RE.captures(line) {
            let name = &caps[1];
            match caps[2].parse::<u64>() {
                Ok(number) => {
                    if let Some(old) = table.insert(name, number) {
                        debug!("Syscall {} redefined ({} -> {})", name, old, number);
                    }
                }
                Err(e) => { warn!("Ignoring definition of __NR_{} ({}): {}", name, &caps[2], e) }
            }
        }
    }

    table
}

pub fn load_header(path : &Path) -> Result<SyscallTable, MapError> {
    let text = std::fs::read_to_string(path)
        .map_err(|source| MapError::Read { path : path.to_path_buf(), source })?;
    let table = parse_header(&text);
    debug!("Loaded {} syscall numbers from {}", table.len(), path.display());
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header() {
        let text = "#ifndef _ASM_UNISTD_64_H\n\
                    #define _ASM_UNISTD_64_H\n\
                    \n\
                    #define __NR_read 0\n\
                    #define __NR_write 1\n\
                    #define __NR_newfstatat 262\n\
                    #define __NR_syscalls 451\n\
                    \n\
                    #endif /* _ASM_UNISTD_64_H */\n";
        let table = parse_header(text);
        assert_eq!(table.len(), 4);
        assert_eq!(table.get("read"), Some(0));
        assert_eq!(table.get("write"), Some(1));
        assert_eq!(table.get("newfstatat"), Some(262));
        assert_eq!(table.get("syscalls"), Some(451));
        assert_eq!(table.get("_ASM_UNISTD_64_H"), None);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let table = parse_header("#define __NR_Read 7\n");
        assert_eq!(table.get("Read"), Some(7));
        assert_eq!(table.get("read"), None);
    }

    #[test]
    fn test_ignores_malformed_lines() {
        let text = "#define __NR_open\n\
                    #define __NR_close three\n\
                    #define __NR_ 4\n\
                    # define __NR_stat 4\n\
                    #define __NR_huge 99999999999999999999999\n";
        assert!(parse_header(text).is_empty());
    }

    #[test]
    fn test_last_definition_wins() {
        let table = parse_header("#define __NR_read 0\n#define __NR_read 63\n");
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("read"), Some(63));
    }

    #[test]
    fn test_match_is_unanchored() {
        // Only the first run of digits after the name counts
        let table = parse_header("  #define __NR_exit 60 /* exit */\n");
        assert_eq!(table.get("exit"), Some(60));
    }
}
