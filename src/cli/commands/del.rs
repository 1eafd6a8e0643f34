use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::utils::date;
use chrono::NaiveDate;

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    if let Commands::Del {
        date: date_arg,
        yes,
    } = cmd
    {
        let d = date::parse_date_arg(date_arg, today)
            .ok_or_else(|| AppError::InvalidDate(date_arg.into()))?;

        if !*yes
            && !ask_confirmation(&format!(
                "Delete the record for {}? This action is irreversible.",
                d
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut store = open_store(cfg)?;
        let removed = DeleteLogic::apply(&mut store, d)?;
        success(format!(
            "Record for {} ({}) has been deleted.",
            removed.date_str(),
            removed.time
        ));
    }

    Ok(())
}
