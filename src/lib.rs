pub mod smap;

use crate::smap::generate::generate_entrypoint;
use crate::smap::options::Options;

pub fn run_smap(opt : Options) -> anyhow::Result<()> {
    generate_entrypoint(&opt)
}
