//! termsim: an interactive virtual shell on stdin/stdout.
//!
//! The config path comes from the first argument or `TERMSIM_CONFIG`;
//! without either the built-in defaults are used.

mod repl;

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use termsim_terminal::Shell;
use termsim_types::config::ShellConfig;

const CONFIG_ENV: &str = "TERMSIM_CONFIG";

fn load_config() -> Result<ShellConfig> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(CONFIG_ENV).ok());
    match path {
        Some(path) => ShellConfig::load(Path::new(&path))
            .with_context(|| format!("failed to load config from {path}")),
        None => Ok(ShellConfig::default()),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config()?;
    let session_id = format!("local-{}", std::process::id());
    let mut shell = Shell::new(config.clone(), session_id)?;
    log::info!("termsim ready (home {})", config.home);

    let stdin = io::stdin();
    let stdout = io::stdout();
    repl::run(&mut shell, &config, stdin.lock(), &mut stdout.lock())?;
    log::info!("session ended after {} commands", shell.history().len());
    Ok(())
}
