use log::{debug, info};
use std::io::Write;

use crate::smap::emit::{write_case_group,write_switch_open,write_switch_close};
use crate::smap::error::MapError;
use crate::smap::header::{SyscallTable,load_header};
use crate::smap::options::Options;
use crate::smap::resolve::resolve;
use crate::smap::table::{SyscallDefinition,load_table};

/// How the generated code is laid out
#[derive(Debug,Clone)]
pub struct GenerateConfig {
    /// Prefix of the returned enum constants
    pub prefix : String,
    /// When set, the cases are wrapped in `switch (<selector>) { ... }`
    pub switch_selector : Option<String>,
    /// The constant returned by the `default:` label of the switch
    pub default_symbol : String
}

impl Default for GenerateConfig {
    fn default() -> Self {
        GenerateConfig { prefix : "SYSCALL_".to_owned(),
                         switch_selector : None,
                         default_symbol : "UNINTERESTING_SYSCALL".to_owned() }
    }
}

impl From<&Options> for GenerateConfig {
    fn from(opts : &Options) -> Self {
        GenerateConfig { prefix : opts.prefix.clone(),
                         switch_selector : opts.switch_selector.clone(),
                         default_symbol : opts.default_symbol.clone() }
    }
}

/// The command-line entry point for generating the syscall map
///
/// Reads the header and definition table named by the options and writes the
/// generated cases to the output file (or stdout).
///
/// An unresolvable syscall name aborts generation; whatever was generated for
/// earlier entries has already been written at that point.
pub fn generate_entrypoint(opts : &Options) -> anyhow::Result<()> {
    let header_path = opts.header_path();
    let syscalls = load_header(&header_path)?;
    let defs = load_table(&opts.table)?;
    info!("Generating cases for {} syscalls from {} ({} numbers known)",
          defs.len(), opts.table.display(), syscalls.len());

    let config = GenerateConfig::from(opts);
    let count = match &opts.output {
        None => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            let count = generate(&syscalls, &defs, &config, &mut out)?;
            out.flush()?;
            count
        }
        Some(path) => {
            let out_file = std::fs::File::create(path)?;
            let mut out = std::io::BufWriter::new(out_file);
            let count = generate(&syscalls, &defs, &config, &mut out)?;
            out.flush()?;
            count
        }
    };

    info!("Generated {} case labels", count);
    Ok(())
}

/// Resolve each definition in table order and write its cases
///
/// Each entry is written as soon as it is resolved.  Returns the total number
/// of case labels written.
pub fn generate<W : Write>(syscalls : &SyscallTable,
                           defs : &[SyscallDefinition],
                           config : &GenerateConfig,
                           out : &mut W) -> Result<usize, MapError> {
    if let Some(selector) = &config.switch_selector {
        write_switch_open(out, selector)?;
    }

    let mut count = 0;
    for def in defs {
        let group = resolve(syscalls, &def.name)?;
        debug!("Line {}: {} -> {:?}", def.line, def.name, group.labels);
        write_case_group(out, &group, &config.prefix)?;
        count += group.labels.len();
    }

    if config.switch_selector.is_some() {
        write_switch_close(out, &config.default_symbol)?;
    }

    Ok(count)
}
