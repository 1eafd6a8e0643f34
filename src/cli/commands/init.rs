use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::storage::{self, JsonStore};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the data directory
///  - the settings document, when missing
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.data_dir.clone(), cli.test)?;

    println!("⚙️  Initializing offwork…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗂️  Data dir    : {}", cfg.data_path().display());

    let mut store = JsonStore::open(cfg.data_path())?;
    let settings = storage::load_or_init_settings(&mut store)?;

    println!("🎯 Target time : {}", settings.target_time);
    println!("🎉 offwork initialization completed!");
    Ok(())
}
