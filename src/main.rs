mod cli;

use clap::{CommandFactory, Parser};
use std::io::{self, Write};
use std::path::Path;

use cli::{Args, Command, ConfigAction};
use mccs::config::Config;
use mccs::{ArtLibrary, Error};

/// Load the config file.
/// If --config is specified, the file must exist; otherwise a broken or
/// missing default config falls back to built-in defaults.
fn load_config(explicit: Option<&Path>) -> Result<Config, Error> {
    match explicit {
        Some(path) => Ok(Config::load_from_explicit(path)?),
        None => match Config::load(None) {
            Ok(config) => Ok(config),
            Err(e) => {
                log::warn!("Failed to load config file: {}. Using default settings.", e);
                Ok(Config::default())
            }
        },
    }
}

fn run(args: Args) -> Result<(), Error> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Some(Command::Config {
        action: ConfigAction::Init,
    }) = args.command
    {
        return cli::init_config(&cli::config_path(args.config.as_deref()), &mut out);
    }

    let config = load_config(args.config.as_deref())?;

    // Merge settings: CLI args > config file > built-in defaults
    let library = ArtLibrary::from_config(&config, args.dir);
    let scale = args.scale.unwrap_or(config.render.scale);

    if let Some(Command::Config {
        action: ConfigAction::Show,
    }) = args.command
    {
        let path = cli::config_path(args.config.as_deref());
        return cli::show_config(&library, scale, &path, &mut out);
    }

    if args.list {
        return cli::list_art(&library, &mut out);
    }

    let path = if let Some(file) = args.file {
        file
    } else if args.random {
        library.choose(&mut rand::thread_rng())?
    } else if let Some(name) = args.name {
        library.resolve(&name)?
    } else {
        Args::command().print_help()?;
        return Ok(());
    };

    mccs::show(&path, scale, &mut out)?;
    out.flush()?;
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
