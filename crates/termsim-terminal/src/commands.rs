//! Navigation and file-management commands.

use termsim_types::error::{Result, ShellError};
use termsim_vfs::EntryKind;
use termsim_vfs::path::{base_name, is_within, join};

use crate::interpreter::{Command, CommandName, CommandRegistry, Environment};
use crate::result::CommandResult;

/// Register every built-in command into a registry.
pub fn register_builtins(reg: &mut CommandRegistry) {
    reg.register(Box::new(CdCmd));
    reg.register(Box::new(PwdCmd));
    reg.register(Box::new(MkdirCmd));
    reg.register(Box::new(TouchCmd));
    reg.register(Box::new(RmCmd));
    reg.register(Box::new(RmdirCmd));
    reg.register(Box::new(TransferCmd::Copy));
    reg.register(Box::new(TransferCmd::Move));
    reg.register(Box::new(FindCmd));
    reg.register(Box::new(ChmodCmd));
    crate::file_commands::register_file_commands(reg);
    crate::text_commands::register_text_commands(reg);
    crate::system_commands::register_system_commands(reg);
    crate::network_commands::register_network_commands(reg);
}

/// Arguments that are not `-x` style flags.
pub(crate) fn operands<'a>(args: &[&'a str]) -> Vec<&'a str> {
    args.iter()
        .copied()
        .filter(|a| !a.starts_with('-') || *a == "-")
        .collect()
}

/// Strip one pair of matching surrounding quotes.
pub(crate) fn unquote(s: &str) -> &str {
    for q in ['"', '\''] {
        if let Some(inner) = s.strip_prefix(q).and_then(|r| r.strip_suffix(q)) {
            return inner;
        }
    }
    s
}

/// Apply `op` to every operand, collecting `<cmd>: cannot <verb> '<arg>': <reason>`
/// lines for the ones that fail.
fn for_each_operand<F>(
    cmd: CommandName,
    verb: &str,
    targets: &[&str],
    env: &mut Environment<'_>,
    mut op: F,
) -> Result<CommandResult>
where
    F: FnMut(&mut Environment<'_>, &str) -> Result<()>,
{
    let mut errors = Vec::new();
    for arg in targets {
        let path = env.resolve(arg);
        if let Err(e) = op(env, &path) {
            errors.push(format!("{cmd}: cannot {verb} '{arg}': {}", e.reason()));
        }
    }
    if errors.is_empty() {
        Ok(CommandResult::empty())
    } else {
        Ok(CommandResult::failure(errors.join("\n")))
    }
}

// ---------------------------------------------------------------------------
// cd
// ---------------------------------------------------------------------------

struct CdCmd;
impl Command for CdCmd {
    fn name(&self) -> CommandName {
        CommandName::Cd
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandResult> {
        let home = env.config.home.clone();
        let arg = args.first().copied().unwrap_or("~");
        let target = match arg {
            "~" => home,
            _ => match arg.strip_prefix("~/") {
                Some(rest) => join(&home, rest),
                None => env.resolve(arg),
            },
        };
        match env.vfs.kind(&target) {
            Some(EntryKind::Directory) => {
                env.cwd = target;
                Ok(CommandResult::empty())
            },
            Some(EntryKind::File) => Ok(CommandResult::failure(format!(
                "cd: {arg}: Not a directory"
            ))),
            None => Ok(CommandResult::failure(format!(
                "cd: {arg}: No such file or directory"
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// pwd
// ---------------------------------------------------------------------------

struct PwdCmd;
impl Command for PwdCmd {
    fn name(&self) -> CommandName {
        CommandName::Pwd
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandResult> {
        Ok(CommandResult::ok(env.cwd.clone()))
    }
}

// ---------------------------------------------------------------------------
// mkdir
// ---------------------------------------------------------------------------

struct MkdirCmd;
impl Command for MkdirCmd {
    fn name(&self) -> CommandName {
        CommandName::Mkdir
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandResult> {
        let targets = operands(args);
        if targets.is_empty() {
            return Ok(CommandResult::failure("mkdir: missing operand"));
        }
        let parents = args.iter().any(|a| *a == "-p" || *a == "--parents");
        for_each_operand(
            CommandName::Mkdir,
            "create directory",
            &targets,
            env,
            |env, path| {
                if parents {
                    env.vfs.create_dir_all(path)
                } else {
                    env.vfs.create_directory(path)
                }
            },
        )
    }
}

// ---------------------------------------------------------------------------
// touch
// ---------------------------------------------------------------------------

struct TouchCmd;
impl Command for TouchCmd {
    fn name(&self) -> CommandName {
        CommandName::Touch
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandResult> {
        let targets = operands(args);
        if targets.is_empty() {
            return Ok(CommandResult::failure("touch: missing file operand"));
        }
        for_each_operand(CommandName::Touch, "touch", &targets, env, |env, path| {
            env.vfs.create_file(path)
        })
    }
}

// ---------------------------------------------------------------------------
// rm
// ---------------------------------------------------------------------------

struct RmCmd;
impl Command for RmCmd {
    fn name(&self) -> CommandName {
        CommandName::Rm
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandResult> {
        let targets = operands(args);
        if targets.is_empty() {
            return Ok(CommandResult::failure("rm: missing operand"));
        }
        for_each_operand(CommandName::Rm, "remove", &targets, env, |env, path| {
            env.vfs.remove(path)
        })
    }
}

// ---------------------------------------------------------------------------
// rmdir
// ---------------------------------------------------------------------------

struct RmdirCmd;
impl Command for RmdirCmd {
    fn name(&self) -> CommandName {
        CommandName::Rmdir
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandResult> {
        let targets = operands(args);
        if targets.is_empty() {
            return Ok(CommandResult::failure("rmdir: missing operand"));
        }
        for_each_operand(CommandName::Rmdir, "remove", &targets, env, |env, path| {
            env.vfs.remove_directory(path)
        })
    }
}

// ---------------------------------------------------------------------------
// cp / mv
// ---------------------------------------------------------------------------

enum TransferCmd {
    Copy,
    Move,
}

impl Command for TransferCmd {
    fn name(&self) -> CommandName {
        match self {
            Self::Copy => CommandName::Cp,
            Self::Move => CommandName::Mv,
        }
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandResult> {
        let cmd = self.name();
        let ops = operands(args);
        let Some((&target, sources)) = ops.split_last().filter(|(_, s)| !s.is_empty()) else {
            return Ok(CommandResult::failure(format!("{cmd}: missing file operand")));
        };
        let target_path = env.resolve(target);
        let into_dir = env.vfs.kind(&target_path) == Some(EntryKind::Directory);
        if sources.len() > 1 && !into_dir {
            return Ok(CommandResult::failure(format!(
                "{cmd}: target '{target}' is not a directory"
            )));
        }

        let mut errors = Vec::new();
        for &src in sources {
            let src_path = env.resolve(src);
            if env.vfs.get(&src_path).is_none() {
                errors.push(format!("{cmd}: cannot stat '{src}': No such file or directory"));
                continue;
            }
            let (dest, shown) = if into_dir {
                let name = base_name(&src_path);
                let shown = format!("{}/{name}", target.trim_end_matches('/'));
                (join(&target_path, name), shown)
            } else {
                (target_path.clone(), target.to_string())
            };
            if src_path == dest {
                errors.push(format!("{cmd}: '{src}' and '{shown}' are the same file"));
                continue;
            }
            if env.vfs.kind(&src_path) == Some(EntryKind::Directory) && is_within(&dest, &src_path) {
                errors.push(match self {
                    Self::Copy => {
                        format!("cp: cannot copy a directory, '{src}', into itself, '{shown}'")
                    },
                    Self::Move => {
                        format!("mv: cannot move '{src}' to a subdirectory of itself, '{shown}'")
                    },
                });
                continue;
            }
            let outcome = match self {
                Self::Copy => env.vfs.copy(&src_path, &dest),
                Self::Move => env.vfs.move_to(&src_path, &dest),
            };
            match outcome {
                Ok(()) => {},
                Err(ShellError::NoSuchPath(_)) => errors.push(format!(
                    "{cmd}: cannot create '{target}': No such file or directory"
                )),
                Err(ShellError::InvalidArgument(msg)) => errors.push(format!("{cmd}: {msg}")),
                Err(ShellError::IsADirectory(_)) => errors.push(format!(
                    "{cmd}: cannot overwrite directory '{target}' with non-directory"
                )),
                Err(ShellError::NotADirectory(_)) => errors.push(format!(
                    "{cmd}: cannot overwrite non-directory '{target}' with directory"
                )),
                Err(ShellError::NotEmpty(_)) => {
                    let verb = match self {
                        Self::Copy => "copy",
                        Self::Move => "move",
                    };
                    errors.push(format!(
                        "{cmd}: cannot {verb} '{src}' to '{shown}': Directory not empty"
                    ))
                },
                Err(other) => return Err(other),
            }
        }
        if errors.is_empty() {
            Ok(CommandResult::empty())
        } else {
            Ok(CommandResult::failure(errors.join("\n")))
        }
    }
}

// ---------------------------------------------------------------------------
// find
// ---------------------------------------------------------------------------

struct FindCmd;
impl Command for FindCmd {
    fn name(&self) -> CommandName {
        CommandName::Find
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandResult> {
        let mut root = None;
        let mut pattern = None;
        let mut iter = args.iter();
        while let Some(&arg) = iter.next() {
            if arg == "-name" {
                pattern = iter.next().copied();
                root.get_or_insert(".");
            } else if root.is_none() {
                root = Some(arg);
            } else {
                pattern = Some(arg);
            }
        }
        let (Some(root), Some(pattern)) = (root, pattern) else {
            return Ok(CommandResult::failure("find: missing file operand"));
        };
        let root = env.resolve(root);
        let found: Vec<String> = env.vfs.search(&root, unquote(pattern)).collect();
        Ok(CommandResult::ok(found.join("\n")))
    }
}

// ---------------------------------------------------------------------------
// chmod
// ---------------------------------------------------------------------------

/// Permissions are not modelled; the command is accepted and ignored.
struct ChmodCmd;
impl Command for ChmodCmd {
    fn name(&self) -> CommandName {
        CommandName::Chmod
    }
    fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandResult> {
        Ok(CommandResult::empty())
    }
}
