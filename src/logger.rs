use anyhow::Result;
use anyhow::anyhow;
use ftail::Ftail;
use log::LevelFilter;
use log::info;
use std::env;
use std::fs;

const LOGS_DIR: &str = ".logs";
const PKG_NAME: &str = env!("CARGO_PKG_NAME");

/// Console gets warnings (or everything from debug up when `verbose`), the
/// log file under `~/.logs/fplnews/` gets info and up.
pub fn init_logger(verbose: bool) -> Result<()> {
    let home_folder = env::home_dir().ok_or_else(|| anyhow!("Could not determine $HOME"))?;

    // Get final dir
    let logs_path = home_folder.join(LOGS_DIR).join(PKG_NAME);

    // Get final dir + filename
    let logs_file = logs_path.join(format!("{}.log", PKG_NAME));

    // Create the final dir, idempotent so it runs every time
    fs::create_dir_all(&logs_path)
        .map_err(|e| anyhow!("Could not create logs dir at {:#?}: {}", &logs_path, e))?;

    let console_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    // Initialize the logger
    Ftail::new()
        .console(console_level)
        .single_file(&logs_file, true, LevelFilter::Info)
        .init()
        .map_err(|e| anyhow!("Could not initialize logger: {}", e))?;

    info!("Logger initialized.");
    Ok(())
}
