use std::path::PathBuf;

use fundbook::db::{get_connection, init_db};
use fundbook::error::Result;
use fundbook::settings::{load_settings, save_settings, shellexpand_path};

pub fn run(data_dir: Option<String>) -> Result<()> {
    let mut settings = load_settings()?;
    if let Some(dir) = data_dir {
        settings.data_dir = shellexpand_path(&dir);
    }
    save_settings(&settings)?;

    let resolved = PathBuf::from(&settings.data_dir);
    std::fs::create_dir_all(&resolved)?;

    let conn = get_connection(&settings.database_path())?;
    init_db(&conn)?;

    println!("Initialized fundbook at {}", resolved.display());
    Ok(())
}
