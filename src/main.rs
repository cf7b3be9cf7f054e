use clap::Parser;

use smap;
use smap::smap::options::{Options,log_level};

fn main() -> anyhow::Result<()> {
    let opt = Options::parse();
    env_logger::Builder::new()
        .filter_level(log_level(opt.verbose))
        .parse_default_env()
        .init();
    smap::run_smap(opt)
}
