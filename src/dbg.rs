//! Sets up debug logging, which goes to a file so that it
//! doesn't get tangled up with the clock itself.

use std::{fs::File, path::PathBuf, sync::Mutex};

use tracing_subscriber::EnvFilter;

/// The filter used if `RUST_LOG` isn't set.
const DEFAULT_FILTER: &str = "clockface=debug";

/// Gets the directory where the debug log is kept, creating it if needed.
fn directory() -> crate::Result<PathBuf> {
    let dir = dirs::cache_dir()
        .ok_or(crate::Error::Directory)?
        .join("clockface");

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Installs the global subscriber, returning the path of the log file.
pub fn enable() -> crate::Result<PathBuf> {
    let path = directory()?.join("debug.log");
    let file = File::create(&path)?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(crate::Error::Logging)?;

    Ok(path)
}
