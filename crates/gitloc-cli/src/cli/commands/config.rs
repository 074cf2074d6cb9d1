//! `gitloc config` – show where the config lives and what it says.

use anyhow::Result;
use gitloc_core::config::{self, GitlocConfig};

pub fn run_config(cfg: &GitlocConfig) -> Result<()> {
    println!("# {}", config::config_path()?.display());
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
