//! Read-eval-print loop over any line source.

use std::io::{BufRead, Write};

use anyhow::Result;
use termsim_terminal::Shell;
use termsim_types::config::ShellConfig;

const ANSI_CLEAR: &str = "\x1b[2J\x1b[H";

fn prompt(shell: &Shell, config: &ShellConfig) -> String {
    if shell.mode().is_editing() {
        return "edit> ".to_string();
    }
    let cwd = shell.cwd();
    let shown = match cwd.strip_prefix(config.home.as_str()) {
        Some("") => "~".to_string(),
        Some(rest) if rest.starts_with('/') => format!("~{rest}"),
        _ => cwd.to_string(),
    };
    format!("{}@termsim:{shown}$ ", config.user)
}

/// Feed lines from `input` to `shell` until EOF or `exit`.
///
/// Command names outside `config.restricted_commands` are refused here,
/// before the shell sees them.
pub fn run<R: BufRead, W: Write>(
    shell: &mut Shell,
    config: &ShellConfig,
    input: R,
    out: &mut W,
) -> Result<()> {
    let mut lines = input.lines();
    loop {
        write!(out, "{}", prompt(shell, config))?;
        out.flush()?;
        let Some(line) = lines.next().transpose()? else {
            writeln!(out)?;
            break;
        };

        let editing = shell.mode().is_editing();
        if !editing {
            let trimmed = line.trim();
            if trimmed == "exit" || trimmed == "logout" {
                break;
            }
            if !config.permits(trimmed) {
                let name = trimmed.split_whitespace().next().unwrap_or_default();
                log::warn!("refused restricted command {name}");
                writeln!(out, "{name}: command not allowed in this session")?;
                continue;
            }
        }

        let result = shell.execute(&line);
        if result.clear_screen_requested {
            write!(out, "{ANSI_CLEAR}")?;
        } else if !result.output.is_empty() {
            writeln!(out, "{}", result.output)?;
        }
    }
    Ok(())
}
