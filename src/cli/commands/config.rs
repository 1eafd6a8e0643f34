use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::migrate::fill_missing_fields;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", ConfigLogic::print(cfg)?);
        }

        if *check {
            let missing = ConfigLogic::missing_fields(&path)?;
            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                warning(format!("Missing fields: {}", missing.join(", ")));
                info("Run `offwork config --migrate` to add them with default values.");
            }
        }

        if *migrate {
            if !path.exists() {
                warning("No configuration file found. Run `offwork init` first.");
            } else {
                let added = fill_missing_fields(&path)?;
                if added.is_empty() {
                    info("Nothing to migrate.");
                } else {
                    success(format!("Added fields: {}", added.join(", ")));
                }
            }
        }

        if *edit_config {
            let used = ConfigLogic::edit(&path, editor)?;
            success(format!(
                "Configuration file edited successfully using '{}'",
                used
            ));
        }
    }

    Ok(())
}
