use smap::smap::options::{Arch, Options};
use std::path::{Path, PathBuf};

/// Write `contents` to `name` inside `dir`, returning the full path
pub fn write_input(dir : &Path, name : &str, contents : &str) -> anyhow::Result<PathBuf> {
    let path = dir.join(name);
    std::fs::write(&path, contents)?;
    Ok(path)
}

// Options equivalent to `gen-syscall-map --header <header> --table <table> -o <output>`
pub fn file_options(header : &Path, table : &Path, output : &Path) -> Options {
    Options { header : Some(header.to_path_buf()),
              arch : Arch::X86_64,
              table : table.to_path_buf(),
              output : Some(output.to_path_buf()),
              prefix : "SYSCALL_".to_owned(),
              switch_selector : None,
              default_symbol : "UNINTERESTING_SYSCALL".to_owned(),
              verbose : 0 }
}

/// Run the generator over the given header and table text, returning the
/// result and whatever made it into the output file
pub fn generate_files(header : &str, table : &str) -> anyhow::Result<(anyhow::Result<()>, String)> {
    let tdir = tempfile::tempdir()?;
    let header_path = write_input(tdir.path(), "unistd_64.h", header)?;
    let table_path = write_input(tdir.path(), "syscalls.tab", table)?;
    let out_path = tdir.path().join("syscall_map.inc");
    let res = smap::run_smap(file_options(&header_path, &table_path, &out_path));
    let out = std::fs::read_to_string(&out_path).unwrap_or_default();
    Ok((res, out))
}
