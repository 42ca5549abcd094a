//! Handlers for listing art files and config actions.

use std::io::Write;
use std::path::Path;

use mccs::config::{self, DEFAULT_CONFIG};
use mccs::{ArtLibrary, Error};

/// Print the names of all art files in `library`.
pub fn list_art<W: Write>(library: &ArtLibrary, out: &mut W) -> Result<(), Error> {
    let names = library.names()?;
    if names.is_empty() {
        writeln!(out, "No ASCII art files found.")?;
        return Ok(());
    }
    writeln!(out, "Available ASCII art files:")?;
    for name in names {
        writeln!(out, "{}", name)?;
    }
    Ok(())
}

/// Print the effective settings after merging CLI flags and the config file.
pub fn show_config<W: Write>(
    library: &ArtLibrary,
    scale: u32,
    config_path: &Path,
    out: &mut W,
) -> Result<(), Error> {
    writeln!(out, "Current configuration:")?;
    writeln!(out, "  Art directory: {}", library.dir().display())?;
    writeln!(out, "  Extension: {}", library.extension())?;
    writeln!(out, "  Scale: {}", scale)?;
    writeln!(out)?;

    if config_path.exists() {
        writeln!(out, "Config file: {} (exists)", config_path.display())?;
    } else {
        writeln!(out, "Config file: {} (not found)", config_path.display())?;
    }
    Ok(())
}

/// Write the default config file to `config_path`, refusing to overwrite.
pub fn init_config<W: Write>(config_path: &Path, out: &mut W) -> Result<(), Error> {
    if config_path.exists() {
        return Err(Error::ConfigExists {
            path: config_path.to_path_buf(),
        });
    }

    // Create parent directories if needed
    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(config_path, DEFAULT_CONFIG)?;

    writeln!(out, "Created config file: {}", config_path.display())?;
    Ok(())
}

/// Config path the user asked for, or the default location.
pub fn config_path(explicit: Option<&Path>) -> std::path::PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(config::default_path)
}
