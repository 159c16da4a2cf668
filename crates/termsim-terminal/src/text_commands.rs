//! Text processing commands: echo, grep, head, tail, wc, sort, uniq.

use std::collections::HashSet;

use termsim_types::error::{Result, ShellError};

use crate::commands::{operands, unquote};
use crate::interpreter::{Command, CommandName, CommandRegistry, Environment};
use crate::result::CommandResult;

/// Register the text processing commands.
pub fn register_text_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(EchoCmd));
    reg.register(Box::new(GrepCmd));
    reg.register(Box::new(SliceCmd::Head));
    reg.register(Box::new(SliceCmd::Tail));
    reg.register(Box::new(WcCmd));
    reg.register(Box::new(SortCmd));
    reg.register(Box::new(UniqCmd));
}

const DEFAULT_LINES: usize = 10;

/// Read a file operand, or the GNU-style message saying why it can't be read.
fn read_operand(
    env: &Environment<'_>,
    cmd: CommandName,
    file: &str,
) -> std::result::Result<String, String> {
    env.vfs.read_file(&env.resolve(file)).map_err(|e| {
        let reason = e.reason();
        let is_dir = matches!(e, ShellError::IsADirectory(_));
        match cmd {
            CommandName::Head | CommandName::Tail if is_dir => {
                format!("{cmd}: error reading '{file}': {reason}")
            },
            CommandName::Head | CommandName::Tail => {
                format!("{cmd}: cannot open '{file}' for reading: {reason}")
            },
            CommandName::Sort if is_dir => {
                format!("sort: read error: {file}: {reason}")
            },
            CommandName::Sort => format!("sort: cannot read: {file}: {reason}"),
            _ => format!("{cmd}: {file}: {reason}"),
        }
    })
}

// ---------------------------------------------------------------------------
// echo
// ---------------------------------------------------------------------------

struct EchoCmd;
impl Command for EchoCmd {
    fn name(&self) -> CommandName {
        CommandName::Echo
    }
    fn execute(&self, _args: &[&str], env: &mut Environment<'_>) -> Result<CommandResult> {
        let quotes = ['"', '\''];
        let text = env.raw_args;
        let text = text.strip_prefix(quotes).unwrap_or(text);
        let text = text.strip_suffix(quotes).unwrap_or(text);
        Ok(CommandResult::ok(text))
    }
}

// ---------------------------------------------------------------------------
// grep
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
struct GrepOptions {
    ignore_case: bool,
    line_numbers: bool,
    invert: bool,
    count: bool,
}

struct GrepCmd;
impl Command for GrepCmd {
    fn name(&self) -> CommandName {
        CommandName::Grep
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandResult> {
        let mut opts = GrepOptions::default();
        for arg in args.iter().filter(|a| a.starts_with('-') && a.len() > 1) {
            for flag in arg[1..].chars() {
                match flag {
                    'i' => opts.ignore_case = true,
                    'n' => opts.line_numbers = true,
                    'v' => opts.invert = true,
                    'c' => opts.count = true,
                    other => {
                        return Ok(CommandResult::failure(format!(
                            "grep: invalid option -- '{other}'\nUsage: grep [OPTION]... PATTERNS [FILE]..."
                        )));
                    },
                }
            }
        }
        let ops = operands(args);
        let Some((pattern, files)) = ops.split_first().filter(|(_, f)| !f.is_empty()) else {
            return Ok(CommandResult::failure("grep: missing file operand"));
        };
        let pattern = unquote(pattern);
        let needle = if opts.ignore_case {
            pattern.to_lowercase()
        } else {
            pattern.to_string()
        };
        let prefix_names = files.len() > 1;

        let mut out = Vec::new();
        let mut errors = Vec::new();
        for file in files {
            let text = match read_operand(env, CommandName::Grep, file) {
                Ok(text) => text,
                Err(msg) => {
                    errors.push(msg);
                    continue;
                },
            };
            let mut hits = 0;
            for (i, line) in text.split('\n').enumerate() {
                let found = if opts.ignore_case {
                    line.to_lowercase().contains(&needle)
                } else {
                    line.contains(&needle)
                };
                if found == opts.invert {
                    continue;
                }
                hits += 1;
                if opts.count {
                    continue;
                }
                let mut row = String::new();
                if prefix_names {
                    row.push_str(&format!("{file}:"));
                }
                if opts.line_numbers {
                    row.push_str(&format!("{}:", i + 1));
                }
                row.push_str(line);
                out.push(row);
            }
            if opts.count {
                out.push(if prefix_names {
                    format!("{file}:{hits}")
                } else {
                    hits.to_string()
                });
            }
        }

        if errors.len() == files.len() {
            return Ok(CommandResult::failure(errors.join("\n")));
        }
        out.extend(errors.iter().cloned());
        let output = out.join("\n");
        Ok(if errors.is_empty() {
            CommandResult::ok(output)
        } else {
            CommandResult::partial(output)
        })
    }
}

// ---------------------------------------------------------------------------
// head / tail
// ---------------------------------------------------------------------------

/// Pull the line count and file operand out of `-n N`, `-nN`, or `-N` forms.
///
/// An unparsable count falls back to the default.
fn parse_count<'a>(args: &[&'a str]) -> (usize, Option<&'a str>) {
    let mut count = DEFAULT_LINES;
    let mut file = None;
    let mut iter = args.iter();
    while let Some(&arg) = iter.next() {
        if arg == "-n" {
            count = iter
                .next()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_LINES);
        } else if let Some(n) = arg.strip_prefix("-n") {
            count = n.parse().unwrap_or(DEFAULT_LINES);
        } else if let Some(n) = arg.strip_prefix('-').filter(|n| !n.is_empty()) {
            count = n.parse().unwrap_or(DEFAULT_LINES);
        } else if file.is_none() {
            file = Some(arg);
        }
    }
    (count, file)
}

enum SliceCmd {
    Head,
    Tail,
}

impl Command for SliceCmd {
    fn name(&self) -> CommandName {
        match self {
            Self::Head => CommandName::Head,
            Self::Tail => CommandName::Tail,
        }
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandResult> {
        let cmd = self.name();
        let (count, file) = parse_count(args);
        let Some(file) = file else {
            return Ok(CommandResult::failure(format!("{cmd}: missing file operand")));
        };
        let text = match read_operand(env, cmd, file) {
            Ok(text) => text,
            Err(msg) => return Ok(CommandResult::failure(msg)),
        };
        let lines: Vec<&str> = text.split('\n').collect();
        let slice = match self {
            Self::Head => &lines[..count.min(lines.len())],
            Self::Tail => &lines[lines.len().saturating_sub(count)..],
        };
        Ok(CommandResult::ok(slice.join("\n")))
    }
}

// ---------------------------------------------------------------------------
// wc
// ---------------------------------------------------------------------------

struct WcCmd;
impl Command for WcCmd {
    fn name(&self) -> CommandName {
        CommandName::Wc
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandResult> {
        let (mut lines, mut words, mut bytes) = (false, false, false);
        for arg in args.iter().filter(|a| a.starts_with('-') && a.len() > 1) {
            for flag in arg[1..].chars() {
                match flag {
                    'l' => lines = true,
                    'w' => words = true,
                    'c' | 'm' => bytes = true,
                    other => {
                        return Ok(CommandResult::failure(format!(
                            "wc: invalid option -- '{other}'\nTry 'wc --help' for more information."
                        )));
                    },
                }
            }
        }
        let Some(&file) = operands(args).first() else {
            return Ok(CommandResult::failure("wc: missing file operand"));
        };
        let text = match read_operand(env, CommandName::Wc, file) {
            Ok(text) => text,
            Err(msg) => return Ok(CommandResult::failure(msg)),
        };

        // Counts split segments, so a trailing newline adds one line.
        let line_count = text.split('\n').count();
        let word_count = text.split_whitespace().count();
        let output = if !(lines || words || bytes) {
            format!("{line_count} {word_count} {} {file}", text.chars().count())
        } else {
            let mut fields = Vec::new();
            if lines {
                fields.push(line_count.to_string());
            }
            if words {
                fields.push(word_count.to_string());
            }
            if bytes {
                fields.push(text.len().to_string());
            }
            fields.push(file.to_string());
            fields.join(" ")
        };
        Ok(CommandResult::ok(output))
    }
}

// ---------------------------------------------------------------------------
// sort
// ---------------------------------------------------------------------------

struct SortCmd;
impl Command for SortCmd {
    fn name(&self) -> CommandName {
        CommandName::Sort
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandResult> {
        let reverse = args.iter().any(|a| *a == "-r" || *a == "--reverse");
        let Some(&file) = operands(args).first() else {
            return Ok(CommandResult::failure("sort: missing file operand"));
        };
        let text = match read_operand(env, CommandName::Sort, file) {
            Ok(text) => text,
            Err(msg) => return Ok(CommandResult::failure(msg)),
        };
        let mut lines: Vec<&str> = text.split('\n').collect();
        lines.sort_unstable();
        if reverse {
            lines.reverse();
        }
        Ok(CommandResult::ok(lines.join("\n")))
    }
}

// ---------------------------------------------------------------------------
// uniq
// ---------------------------------------------------------------------------

/// Drops every repeat of a line, adjacent or not.
struct UniqCmd;
impl Command for UniqCmd {
    fn name(&self) -> CommandName {
        CommandName::Uniq
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandResult> {
        let Some(&file) = operands(args).first() else {
            return Ok(CommandResult::failure("uniq: missing file operand"));
        };
        let text = match read_operand(env, CommandName::Uniq, file) {
            Ok(text) => text,
            Err(msg) => return Ok(CommandResult::failure(msg)),
        };
        let mut seen = HashSet::new();
        let unique: Vec<&str> = text.split('\n').filter(|line| seen.insert(*line)).collect();
        Ok(CommandResult::ok(unique.join("\n")))
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::Harness;

    fn fruit() -> Harness {
        let mut h = Harness::new();
        h.write("/home/user/fruit", "pear\nApple\nfig\napple\npear\nbanana");
        h
    }

    #[test]
    fn echo_strips_outer_quotes() {
        let mut h = Harness::new();
        assert_eq!(h.ok("echo \"a b\""), "a b");
        assert_eq!(h.ok("echo   'x   y'  "), "x   y");
        assert_eq!(h.ok("echo plain words"), "plain words");
        assert_eq!(h.ok("echo"), "");
    }

    #[test]
    fn grep_substring() {
        let mut h = fruit();
        assert_eq!(h.ok("grep pear fruit"), "pear\npear");
        assert_eq!(h.ok("grep -i APPLE fruit"), "Apple\napple");
        assert_eq!(h.ok("grep -n fig fruit"), "3:fig");
        assert_eq!(h.ok("grep -c p fruit"), "4");
        assert_eq!(h.ok("grep -v a fruit"), "Apple\nfig");
        assert_eq!(h.ok("grep kiwi fruit"), "");
        assert_eq!(h.ok("grep \"ban\" fruit"), "banana");
    }

    #[test]
    fn grep_many_files() {
        let mut h = fruit();
        assert_eq!(
            h.ok("grep file sample.txt README.txt"),
            "sample.txt:This is a sample text file.\nsample.txt:Perfect for practicing file operations."
        );
        let r = h.run("grep fig fruit nope");
        assert!(r.success && r.is_error);
        assert_eq!(r.output, "fruit:fig\ngrep: nope: No such file or directory");
        assert_eq!(h.fail("grep fig Desktop"), "grep: Desktop: Is a directory");
        assert_eq!(h.fail("grep fig"), "grep: missing file operand");
    }

    #[test]
    fn head_and_tail() {
        let mut h = Harness::new();
        let body: Vec<String> = (1..=15).map(|n| n.to_string()).collect();
        h.write("/home/user/nums", &body.join("\n"));
        assert_eq!(h.ok("head nums").lines().count(), 10);
        assert_eq!(h.ok("head -n 3 nums"), "1\n2\n3");
        assert_eq!(h.ok("head -n2 nums"), "1\n2");
        assert_eq!(h.ok("head -4 nums"), "1\n2\n3\n4");
        assert_eq!(h.ok("head nums -n 1"), "1");
        assert_eq!(h.ok("tail -n 2 nums"), "14\n15");
        assert_eq!(h.ok("tail -n x nums").lines().next(), Some("6"));
        assert_eq!(h.ok("head -n 0 nums"), "");
        assert_eq!(h.ok("tail -n 100 nums").lines().count(), 15);
    }

    #[test]
    fn head_errors() {
        let mut h = Harness::new();
        assert_eq!(h.fail("head"), "head: missing file operand");
        assert_eq!(
            h.fail("head nope"),
            "head: cannot open 'nope' for reading: No such file or directory"
        );
        assert_eq!(h.fail("tail Desktop"), "tail: error reading 'Desktop': Is a directory");
    }

    #[test]
    fn wc_counts_split_segments() {
        let mut h = Harness::new();
        h.write("/home/user/t", "one two\nthree\n");
        assert_eq!(h.ok("wc t"), "3 3 14 t");
        assert_eq!(h.ok("wc -l t"), "3 t");
        assert_eq!(h.ok("wc -w t"), "3 t");
        assert_eq!(h.ok("wc -c t"), "14 t");
        assert_eq!(h.fail("wc nope"), "wc: nope: No such file or directory");
    }

    #[test]
    fn sort_lines() {
        let mut h = fruit();
        assert_eq!(h.ok("sort fruit"), "Apple\napple\nbanana\nfig\npear\npear");
        assert_eq!(h.ok("sort -r fruit"), "pear\npear\nfig\nbanana\napple\nApple");
        assert_eq!(
            h.fail("sort nope"),
            "sort: cannot read: nope: No such file or directory"
        );
        assert_eq!(h.fail("sort Desktop"), "sort: read error: Desktop: Is a directory");
    }

    #[test]
    fn uniq_whole_file() {
        let mut h = fruit();
        assert_eq!(h.ok("uniq fruit"), "pear\nApple\nfig\napple\nbanana");
        assert_eq!(h.fail("uniq"), "uniq: missing file operand");
    }
}
