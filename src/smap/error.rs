use std::path::PathBuf;

#[derive(thiserror::Error,Debug)]
pub enum MapError {
    /// A table entry names a syscall the header does not define.  This is
    /// fatal: generation stops at the offending entry.
    #[error("Unresolvable syscall name '{0}' (no matching __NR_{0} in the syscall header)")]
    UnresolvedSyscall(String),
    #[error("Unable to read input file '{path:?}'")]
    Read { path : PathBuf, #[source] source : std::io::Error },
    #[error("Unable to write generated code")]
    Write(#[from] std::io::Error)
}
