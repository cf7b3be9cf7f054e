use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug,Parser)]
#[command(version, about)]
#[command(after_long_help="Logging is controlled with various -v options or via the RUST_LOG/RUST_LOG_STYLE\nas described in https://docs.rs/env_logger documentation.")]
pub struct Options {
    /// Header defining syscall numbers as `#define __NR_<name> <number>`
    /// (default: the system header for the selected --arch)
    #[arg(long, value_hint=clap::ValueHint::FilePath)]
    pub header : Option<PathBuf>,
    /// The architecture whose system header is read when --header is not given
    #[arg(long, value_enum, default_value_t = Arch::X86_64)]
    pub arch : Arch,
    /// Table of `DEFINE_SYSCALL(<name>, ...)` entries to generate cases for
    #[arg(long, default_value = "syscalls.tab", value_hint=clap::ValueHint::FilePath)]
    pub table : PathBuf,
    /// Write the generated code to this file instead of stdout
    #[arg(short, long)]
    pub output : Option<PathBuf>,
    /// Prefix of the enum constant returned for each syscall
    #[arg(long, default_value = "SYSCALL_")]
    pub prefix : String,
    /// Wrap the generated cases in a complete `switch (<EXPR>)` statement
    #[arg(long="switch", value_name="EXPR")]
    pub switch_selector : Option<String>,
    /// The constant returned by the `default:` label of --switch
    #[arg(long="default-symbol", default_value = "UNINTERESTING_SYSCALL")]
    pub default_symbol : String,
    /// Generate verbose output.  Twice for additional verbosity.
    #[arg(short, long, action=clap::ArgAction::Count)]
    pub verbose : u8,
}

impl Options {
    /// The header to read: the explicit --header if given, otherwise the
    /// system header for --arch
    pub fn header_path(&self) -> PathBuf {
        match &self.header {
            Some(p) => { p.clone() }
            None => { self.arch.default_header() }
        }
    }
}

#[derive(Debug,Hash,Eq,PartialEq,Copy,Clone)]
#[derive(ValueEnum)]
pub enum Arch {
    #[value(name = "x86_64")]
    X86_64,
    #[value(name = "i386")]
    I386
}

impl Arch {
    pub fn default_header(&self) -> PathBuf {
        match self {
            Arch::X86_64 => { PathBuf::from("/usr/include/asm/unistd_64.h") }
            Arch::I386 => { PathBuf::from("/usr/include/asm/unistd_32.h") }
        }
    }
}

impl Default for Arch {
    fn default () -> Self { Arch::X86_64 }
}

pub fn log_level(verbosity : u8) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    }
}
