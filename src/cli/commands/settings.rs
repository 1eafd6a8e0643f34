use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::settings::{SettingsLogic, SettingsUpdate};
use crate::errors::AppResult;
use crate::models::settings::{Settings, WORKDAY_NAMES};
use crate::storage;
use crate::ui::messages::{field, header, info, success};

fn print_settings(s: &Settings) {
    header("Settings");
    field("Target time", s.target_time);

    let days: Vec<&str> = WORKDAY_NAMES
        .iter()
        .zip(s.workdays.iter())
        .filter(|(_, on)| **on)
        .map(|(name, _)| *name)
        .collect();
    field("Workdays", format!("{} ({})", s.workdays_mask(), days.join(", ")));
    field("Data retention", &s.data_retention);
    field("Theme", &s.theme);
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Settings {
        print,
        target,
        workdays,
        retention,
        theme,
    } = cmd
    {
        let mut store = open_store(cfg)?;

        let update = SettingsUpdate {
            target_time: target.as_deref().map(str::parse).transpose()?,
            workdays: workdays
                .as_deref()
                .map(Settings::parse_workdays)
                .transpose()?,
            data_retention: retention.clone(),
            theme: theme.clone(),
        };

        if !update.is_empty() {
            let saved = SettingsLogic::update(&mut store, update)?;
            success("Settings saved.");
            print_settings(&saved);
            return Ok(());
        }

        if !*print {
            info("No change requested; showing current settings.");
        }
        let current = storage::load_or_init_settings(&mut store)?;
        print_settings(&current);
    }

    Ok(())
}
