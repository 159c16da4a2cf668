//! Session and system commands: whoami, date, history, help, options,
//! clear, ai-edit.

use std::collections::BTreeMap;
use std::fmt::Write;

use chrono::Utc;
use termsim_types::error::{Result, ShellError};

use crate::commands::{operands, unquote};
use crate::editor::LineEditor;
use crate::help_text;
use crate::interpreter::{Category, Command, CommandName, CommandRegistry, Environment};
use crate::result::CommandResult;

/// Register the session and system commands.
pub fn register_system_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(WhoamiCmd));
    reg.register(Box::new(DateCmd));
    reg.register(Box::new(HistoryCmd));
    reg.register(Box::new(HelpCmd));
    reg.register(Box::new(OptionsCmd));
    reg.register(Box::new(ClearCmd));
    reg.register(Box::new(AiEditCmd));
}

/// Output of `clear`; the caller wipes its display when it sees the flag.
pub const CLEAR_SCREEN: &str = "CLEAR_SCREEN";

const DATE_FORMAT: &str = "%a %b %e %H:%M:%S UTC %Y";
const UNTITLED: &str = "untitled.txt";

struct WhoamiCmd;
impl Command for WhoamiCmd {
    fn name(&self) -> CommandName {
        CommandName::Whoami
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandResult> {
        Ok(CommandResult::ok(env.config.user.clone()))
    }
}

// ---------------------------------------------------------------------------
// date
// ---------------------------------------------------------------------------

struct DateCmd;
impl Command for DateCmd {
    fn name(&self) -> CommandName {
        CommandName::Date
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandResult> {
        let arg = unquote(env.raw_args);
        let format = match arg.strip_prefix('+') {
            Some(fmt) => fmt,
            None if arg.is_empty() => DATE_FORMAT,
            None => {
                return Ok(CommandResult::failure(format!(
                    "date: invalid date '{arg}'"
                )));
            },
        };
        let mut out = String::new();
        // Bad specifiers surface as fmt::Error rather than a panic.
        if write!(out, "{}", Utc::now().format(format)).is_err() {
            return Ok(CommandResult::failure(format!(
                "date: invalid format '{format}'"
            )));
        }
        Ok(CommandResult::ok(out))
    }
}

// ---------------------------------------------------------------------------
// history
// ---------------------------------------------------------------------------

struct HistoryCmd;
impl Command for HistoryCmd {
    fn name(&self) -> CommandName {
        CommandName::History
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandResult> {
        let lines: Vec<String> = env
            .history
            .iter()
            .enumerate()
            .map(|(i, cmd)| format!("{:>5}  {cmd}", i + 1))
            .collect();
        Ok(CommandResult::ok(lines.join("\n")))
    }
}

// ---------------------------------------------------------------------------
// help / options
// ---------------------------------------------------------------------------

struct HelpCmd;
impl Command for HelpCmd {
    fn name(&self) -> CommandName {
        CommandName::Help
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandResult> {
        Ok(CommandResult::ok(help_text::GENERAL))
    }
}

/// Every command grouped by category, categories in alphabetical order.
pub fn command_listing() -> String {
    let mut groups: BTreeMap<Category, Vec<CommandName>> = BTreeMap::new();
    for name in CommandName::ALL {
        groups.entry(name.category()).or_default().push(name);
    }

    let mut out = String::from("Available Commands in Bash Terminal Simulator\n");
    out.push_str("==============================================\n\n");
    for (category, names) in &groups {
        let label = category.label();
        out.push_str(&format!("{label}:\n{}\n", "─".repeat(label.len() + 1)));
        for name in names {
            out.push_str(&format!("  {:<12} - {}\n", name.as_str(), name.description()));
        }
        out.push('\n');
    }
    out.push_str("Usage:\n");
    out.push_str("  options --?     List all commands (this output)\n");
    out.push_str("  options --help  Show help for this command\n");
    out.push_str("  command --help  Show help for any specific command\n\n");
    out.push_str(&format!("Total commands available: {}", CommandName::ALL.len()));
    out
}

struct OptionsCmd;
impl Command for OptionsCmd {
    fn name(&self) -> CommandName {
        CommandName::Options
    }
    fn execute(&self, args: &[&str], _env: &mut Environment<'_>) -> Result<CommandResult> {
        if args.contains(&"--?") {
            Ok(CommandResult::ok(command_listing()))
        } else {
            Ok(CommandResult::ok(help_text::OPTIONS))
        }
    }
}

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

struct ClearCmd;
impl Command for ClearCmd {
    fn name(&self) -> CommandName {
        CommandName::Clear
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandResult> {
        Ok(CommandResult {
            clear_screen_requested: true,
            ..CommandResult::ok(CLEAR_SCREEN)
        })
    }
}

// ---------------------------------------------------------------------------
// ai-edit
// ---------------------------------------------------------------------------

struct AiEditCmd;
impl Command for AiEditCmd {
    fn name(&self) -> CommandName {
        CommandName::AiEdit
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandResult> {
        let file = operands(args).first().copied().unwrap_or(UNTITLED);
        let path = env.resolve(file);
        let window = env.config.editor.window_lines;
        let editor = match LineEditor::open(&*env.vfs, &path, file, window) {
            Ok(editor) => editor,
            Err(ShellError::IsADirectory(_)) => {
                return Ok(CommandResult::failure(format!("ai-edit: {file}: Is a directory")));
            },
            Err(e) => return Err(e),
        };
        let view = editor.render();
        env.open_editor = Some(editor);
        Ok(CommandResult::ok(view).in_editor(true))
    }
}
