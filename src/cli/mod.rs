pub mod budget;
pub mod dfur;
pub mod init;
pub mod status;
pub mod users;

use std::io::Read;

use clap::{Parser, Subcommand};

use fundbook::error::{FundbookError, Result};
use fundbook::settings::load_settings;
use fundbook::store::SqliteStore;

#[derive(Parser)]
#[command(name = "fundbook", about = "Record keeping for barangay fund transparency reports.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Choose a data directory and create the database.
    Init {
        /// Path for fundbook data (default: ~/Documents/fundbook)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
    },
    /// Manage user accounts.
    Users {
        #[command(subcommand)]
        command: UsersCommands,
    },
    /// Record DFUR (development fund utilization) projects.
    Dfur {
        #[command(subcommand)]
        command: DfurCommands,
    },
    /// Record annual budget (ABO) entries.
    Budget {
        #[command(subcommand)]
        command: BudgetCommands,
    },
    /// Show the database location and row counts.
    Status,
}

#[derive(Subcommand)]
pub enum UsersCommands {
    /// Insert users from a JSON object or array (`-` reads stdin).
    Add { file: String },
    /// List users.
    List,
}

#[derive(Subcommand)]
pub enum DfurCommands {
    /// Insert projects from a JSON object or array (`-` reads stdin).
    Add { file: String },
}

#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Insert a batch of entries from a JSON object or array (`-` reads stdin).
    Add {
        file: String,
        /// User ID or name the entries are attributed to
        #[arg(long = "created-by")]
        created_by: String,
    },
}

pub(crate) fn read_input(file: &str) -> Result<String> {
    if file == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read_to_string(file)?)
    }
}

/// Store for the configured database; refuses to create one implicitly.
pub(crate) fn open_store() -> Result<SqliteStore> {
    let settings = load_settings()?;
    let db_path = settings.database_path();
    if !db_path.exists() {
        return Err(FundbookError::Settings(format!(
            "No database found at {}\nRun `fundbook init` first.",
            db_path.display()
        )));
    }
    Ok(settings.open_store())
}
