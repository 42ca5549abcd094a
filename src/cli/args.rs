//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use mccs::render::MAX_SCALE;

/// Parse and validate the scale factor (an integer in `1..=MAX_SCALE`)
fn parse_scale(s: &str) -> Result<u32, String> {
    let scale: u64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid scale", s))?;
    if scale == 0 {
        return Err("Scale must be at least 1".to_string());
    }
    if scale > u64::from(MAX_SCALE) {
        return Err(format!("Scale must be at most {}", MAX_SCALE));
    }
    Ok(scale as u32)
}

/// Print colorscripts stored as pixel files in the terminal
#[derive(Parser, Debug)]
#[command(name = "mccs")]
#[command(version, about = "Print pixel-art colorscripts in the terminal", long_about = None)]
#[command(after_help = "EXAMPLES:
    mccs --scale 2 charmander
    mccs --random --scale 3
    mccs --file ./art/pikachu.txt
    mccs --list")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Name of the art file to print (extension optional). A name of `config`
    /// is taken as the subcommand; use `config.txt` or `--file` for that file
    pub name: Option<String>,

    /// List all available art files
    #[arg(short, long)]
    pub list: bool,

    /// Print a randomly chosen art file
    #[arg(short, long)]
    pub random: bool,

    /// Print this file instead of one from the art directory
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Output scale factor, 1 to 64 (default: 1, no scaling)
    #[arg(short, long, value_parser = parse_scale)]
    pub scale: Option<u32>,

    /// Art directory (default: from config, else the platform data dir)
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}
