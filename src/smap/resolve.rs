use log::debug;

use crate::smap::error::MapError;
use crate::smap::header::SyscallTable;

/// A single `case <number>:` label and the kernel name it was found under
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct CaseLabel {
    pub number : u64,
    pub variant : String
}

/// All of the case labels that map to one syscall enum constant
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct CaseGroup {
    /// The lowercased table name
    pub name : String,
    /// Labels in lookup order: base (or replacement), `64`, `32`, `utimes`
    pub labels : Vec<CaseLabel>
}

impl CaseGroup {
    /// The enum constant the group's cases return, e.g. `SYSCALL_READ`
    pub fn symbol(&self, prefix : &str) -> String {
        format!("{}{}", prefix, self.name.to_ascii_uppercase())
    }

    fn push(&mut self, number : u64, variant : &str) {
        self.labels.push(CaseLabel { number, variant : variant.to_owned() });
    }

    /// Add the variant if the kernel defines it; a missing variant is normal
    fn maybe_add(&mut self, syscalls : &SyscallTable, variant : &str) {
        match syscalls.get(variant) {
            Some(number) => { self.push(number, variant) }
            None => { debug!("No {} variant for syscall {}", variant, self.name) }
        }
    }
}

/// Resolve a definition table name to every kernel syscall number it covers
///
/// The kernel renamed `fstatat` to `newfstatat` on some architectures, so
/// `fstatat` is never looked up directly and an absent `newfstatat` is not an
/// error.  Every other name must be defined by the header.
pub fn resolve(syscalls : &SyscallTable, name : &str) -> Result<CaseGroup, MapError> {
    let s = name.to_ascii_lowercase();
    let mut group = CaseGroup { name : s.clone(), labels : Vec::new() };

    if s == "fstatat" {
        group.maybe_add(syscalls, "newfstatat");
    } else {
        let number = syscalls.get(&s).ok_or_else(|| MapError::UnresolvedSyscall(s.clone()))?;
        group.push(number, &s);
    }

    group.maybe_add(syscalls, &format!("{}64", s));
    group.maybe_add(syscalls, &format!("{}32", s));
    if s == "utime" {
        group.maybe_add(syscalls, "utimes");
    }

    Ok(group)
}
