//! Listing and viewing commands: ls, cat, less.

use termsim_types::error::{Result, ShellError};
use termsim_vfs::{EntryKind, VfsEntry};

use crate::help_text;
use crate::interpreter::{Command, CommandName, CommandRegistry, Environment};
use crate::result::CommandResult;

/// Register ls, cat, and less.
pub fn register_file_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(LsCmd));
    reg.register(Box::new(CatCmd));
    reg.register(Box::new(LessCmd));
}

const LESS_PAGE: usize = 20;
const FIXED_INODE: &str = "12345";
const FIXED_DATE: &str = "Jan 01 12:00";

fn invalid_short(cmd: &str, flag: char) -> ShellError {
    ShellError::InvalidArgument(format!(
        "{cmd}: invalid option -- '{flag}'\nTry '{cmd} --help' for more information."
    ))
}

fn unrecognized_long(cmd: &str, arg: &str) -> ShellError {
    ShellError::InvalidArgument(format!(
        "{cmd}: unrecognized option '{arg}'\nTry '{cmd} --help' for more information."
    ))
}

// ---------------------------------------------------------------------------
// ls
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum SortKey {
    #[default]
    Name,
    Size,
    Time,
    Extension,
    None,
}

impl SortKey {
    fn parse(word: &str) -> Option<Self> {
        Some(match word {
            "name" => Self::Name,
            "size" => Self::Size,
            "time" => Self::Time,
            "extension" => Self::Extension,
            "none" => Self::None,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Layout {
    #[default]
    Across,
    OnePerLine,
    Commas,
}

#[derive(Debug, Default)]
struct LsOptions {
    show_hidden: bool,
    long: bool,
    layout: Layout,
    reverse: bool,
    sort: SortKey,
    group_directories_first: bool,
    ignore: Vec<String>,
    ignore_backups: bool,
    human_readable: bool,
    inode: bool,
    classify: bool,
    quote: bool,
    path: Option<String>,
}

impl LsOptions {
    fn parse(args: &[&str]) -> Result<Self> {
        let mut opts = Self::default();
        let mut iter = args.iter();
        while let Some(&arg) = iter.next() {
            if let Some(long) = arg.strip_prefix("--") {
                opts.apply_long(arg, long)?;
            } else if let Some(cluster) = arg.strip_prefix('-').filter(|c| !c.is_empty()) {
                for (i, flag) in cluster.char_indices() {
                    if flag == 'I' {
                        let attached = &cluster[i + 1..];
                        let pattern = if attached.is_empty() {
                            iter.next().copied().ok_or_else(|| {
                                ShellError::InvalidArgument(
                                    "ls: option requires an argument -- 'I'\nTry 'ls --help' for more information."
                                        .to_string(),
                                )
                            })?
                        } else {
                            attached
                        };
                        opts.ignore.push(pattern.to_string());
                        break;
                    }
                    opts.apply_short(flag)?;
                }
            } else {
                opts.path = Some(arg.to_string());
            }
        }
        Ok(opts)
    }

    fn apply_short(&mut self, flag: char) -> Result<()> {
        match flag {
            'a' | 'A' => self.show_hidden = true,
            'l' => self.long = true,
            '1' | 'C' => self.layout = Layout::OnePerLine,
            'm' => self.layout = Layout::Commas,
            'r' => self.reverse = true,
            'U' => self.sort = SortKey::None,
            'S' => self.sort = SortKey::Size,
            't' => self.sort = SortKey::Time,
            'X' => self.sort = SortKey::Extension,
            'h' => self.human_readable = true,
            'i' => self.inode = true,
            'F' => self.classify = true,
            'Q' => self.quote = true,
            'B' => self.ignore_backups = true,
            'G' => self.group_directories_first = true,
            other => return Err(invalid_short("ls", other)),
        }
        Ok(())
    }

    fn apply_long(&mut self, arg: &str, long: &str) -> Result<()> {
        if let Some((key, value)) = long.split_once('=') {
            match key {
                "sort" => {
                    self.sort = SortKey::parse(value).ok_or_else(|| {
                        ShellError::InvalidArgument(format!(
                            "ls: invalid argument '{value}' for '--sort'\nTry 'ls --help' for more information."
                        ))
                    })?;
                },
                "ignore" | "hide" => self.ignore.push(value.to_string()),
                _ => return Err(unrecognized_long("ls", arg)),
            }
            return Ok(());
        }
        match long {
            "all" | "almost-all" => self.show_hidden = true,
            "long" => self.long = true,
            "reverse" => self.reverse = true,
            "no-sort" => self.sort = SortKey::None,
            "human-readable" => self.human_readable = true,
            "inode" => self.inode = true,
            "classify" => self.classify = true,
            "quote-name" => self.quote = true,
            "ignore-backups" => self.ignore_backups = true,
            "group-directories-first" => self.group_directories_first = true,
            _ => return Err(unrecognized_long("ls", arg)),
        }
        Ok(())
    }

    fn keeps(&self, name: &str) -> bool {
        (self.show_hidden || !name.starts_with('.'))
            && !(self.ignore_backups && name.ends_with('~'))
            && !self.ignore.iter().any(|p| name.contains(p.as_str()))
    }

    fn decorate(&self, entry: &VfsEntry) -> String {
        let mut name = entry.name.clone();
        if self.classify && entry.is_dir() {
            name.push('/');
        }
        if self.quote {
            name = format!("\"{name}\"");
        }
        name
    }
}

/// Text after the last `.`; a name without one is its own extension.
fn extension(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}

fn by_name(a: &VfsEntry, b: &VfsEntry) -> std::cmp::Ordering {
    a.name
        .to_lowercase()
        .cmp(&b.name.to_lowercase())
        .then_with(|| a.name.cmp(&b.name))
}

/// Order entries the way `opts` asks. `entries` arrive in creation order.
fn sort_entries(entries: &mut Vec<VfsEntry>, opts: &LsOptions) {
    match opts.sort {
        SortKey::Name => entries.sort_by(by_name),
        SortKey::Size => entries.sort_by(|a, b| a.size.cmp(&b.size).then_with(|| by_name(a, b))),
        SortKey::Extension => entries.sort_by(|a, b| {
            extension(&a.name)
                .to_lowercase()
                .cmp(&extension(&b.name).to_lowercase())
                .then_with(|| by_name(a, b))
        }),
        // Every entry shares one timestamp, so names break the tie.
        SortKey::Time => entries.sort_by(by_name),
        SortKey::None => {},
    }
    if opts.reverse {
        entries.reverse();
    }
    if opts.group_directories_first {
        let (dirs, files): (Vec<VfsEntry>, Vec<VfsEntry>) =
            entries.drain(..).partition(VfsEntry::is_dir);
        entries.extend(dirs);
        entries.extend(files);
    }
}

/// Base-1024 size with a one-letter unit, rounded to an integer.
pub(crate) fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "K", "M", "G", "T"];
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{}{}", size.round() as u64, UNITS[unit])
}

fn long_row(entry: &VfsEntry, opts: &LsOptions, user: &str) -> String {
    let kind = if entry.is_dir() { 'd' } else { '-' };
    let size = if opts.human_readable {
        human_size(entry.size)
    } else {
        entry.size.to_string()
    };
    let mut parts = Vec::with_capacity(8);
    if opts.inode {
        parts.push(format!("{FIXED_INODE:>8}"));
    }
    parts.push(format!("{kind}rw-r--r--"));
    parts.push("1".to_string());
    parts.push(format!("{user:<8}"));
    parts.push(format!("{user:<8}"));
    parts.push(format!("{size:>8}"));
    parts.push(FIXED_DATE.to_string());
    parts.push(opts.decorate(entry));
    parts.join(" ")
}

struct LsCmd;
impl Command for LsCmd {
    fn name(&self) -> CommandName {
        CommandName::Ls
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandResult> {
        let opts = match LsOptions::parse(args) {
            Ok(opts) => opts,
            Err(e) => return Ok(CommandResult::failure(e.reason())),
        };
        let target = opts.path.as_deref().unwrap_or(".");
        let dir = env.resolve(target);
        match env.vfs.kind(&dir) {
            Some(EntryKind::Directory) => {},
            Some(EntryKind::File) => {
                return Ok(CommandResult::failure(format!(
                    "ls: cannot access '{target}': Not a directory"
                )));
            },
            None => {
                return Ok(CommandResult::failure(format!(
                    "ls: cannot access '{target}': No such file or directory"
                )));
            },
        }

        let mut entries: Vec<VfsEntry> = env
            .vfs
            .children(&dir)?
            .into_iter()
            .filter(|e| opts.keeps(&e.name))
            .collect();
        sort_entries(&mut entries, &opts);

        let output = if opts.long {
            let user = &env.config.user;
            entries
                .iter()
                .map(|e| long_row(e, &opts, user))
                .collect::<Vec<_>>()
                .join("\n")
        } else {
            let sep = match opts.layout {
                Layout::Across => "  ",
                Layout::OnePerLine => "\n",
                Layout::Commas => ", ",
            };
            entries
                .iter()
                .map(|e| opts.decorate(e))
                .collect::<Vec<_>>()
                .join(sep)
        };
        Ok(CommandResult::ok(output))
    }
}

// ---------------------------------------------------------------------------
// cat
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
struct CatOptions {
    number: bool,
    number_nonblank: bool,
    squeeze_blank: bool,
    show_ends: bool,
    show_tabs: bool,
    show_nonprinting: bool,
}

impl CatOptions {
    /// Split `args` into options and file operands.
    fn parse<'a>(args: &[&'a str]) -> Result<(Self, Vec<&'a str>)> {
        let mut opts = Self::default();
        let mut files = Vec::new();
        for &arg in args {
            if let Some(long) = arg.strip_prefix("--") {
                match long {
                    "show-all" => opts.set_short('A')?,
                    "number-nonblank" => opts.number_nonblank = true,
                    "show-ends" => opts.show_ends = true,
                    "number" => opts.number = true,
                    "squeeze-blank" => opts.squeeze_blank = true,
                    "show-tabs" => opts.show_tabs = true,
                    "show-nonprinting" => opts.show_nonprinting = true,
                    _ => return Err(unrecognized_long("cat", arg)),
                }
            } else if let Some(cluster) = arg.strip_prefix('-').filter(|c| !c.is_empty()) {
                for flag in cluster.chars() {
                    opts.set_short(flag)?;
                }
            } else {
                files.push(arg);
            }
        }
        Ok((opts, files))
    }

    fn set_short(&mut self, flag: char) -> Result<()> {
        match flag {
            'A' => {
                self.show_nonprinting = true;
                self.show_ends = true;
                self.show_tabs = true;
            },
            'b' => self.number_nonblank = true,
            'e' => {
                self.show_nonprinting = true;
                self.show_ends = true;
            },
            'E' => self.show_ends = true,
            'n' => self.number = true,
            's' => self.squeeze_blank = true,
            't' => {
                self.show_nonprinting = true;
                self.show_tabs = true;
            },
            'T' => self.show_tabs = true,
            'u' => {},
            'v' => self.show_nonprinting = true,
            other => return Err(invalid_short("cat", other)),
        }
        Ok(())
    }

    fn format(&self, content: &str) -> String {
        let mut lines: Vec<&str> = content.split('\n').collect();
        if self.squeeze_blank {
            let mut prev_blank = false;
            lines.retain(|line| {
                let blank = line.is_empty();
                let keep = !(blank && prev_blank);
                prev_blank = blank;
                keep
            });
        }

        let mut counter = 0;
        lines
            .into_iter()
            .map(|line| {
                let numbered = if self.number_nonblank {
                    !line.is_empty()
                } else {
                    self.number
                };
                let mut text = if self.show_nonprinting {
                    show_nonprinting(line)
                } else {
                    line.to_string()
                };
                if self.show_tabs {
                    text = text.replace('\t', "^I");
                }
                if self.show_ends {
                    text.push('$');
                }
                if numbered {
                    counter += 1;
                    format!("{counter:>6}  {text}")
                } else {
                    text
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Caret and meta notation for non-printing bytes, as `cat -v` shows them.
///
/// Works on the UTF-8 encoding, so every non-ASCII character comes out as
/// one `M-` sequence per byte.
fn show_nonprinting(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    for byte in line.bytes() {
        let (meta, low) = if byte >= 0x80 {
            (true, byte - 0x80)
        } else {
            (false, byte)
        };
        if meta {
            out.push_str("M-");
        }
        match low {
            b'\t' if !meta => out.push('\t'),
            0x00..=0x1f => {
                out.push('^');
                out.push(char::from(low + 64));
            },
            0x7f => out.push_str("^?"),
            _ => out.push(char::from(low)),
        }
    }
    out
}

struct CatCmd;
impl Command for CatCmd {
    fn name(&self) -> CommandName {
        CommandName::Cat
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandResult> {
        if args.contains(&"--version") {
            return Ok(CommandResult::ok(help_text::CAT_VERSION));
        }
        let (opts, files) = match CatOptions::parse(args) {
            Ok(parsed) => parsed,
            Err(e) => return Ok(CommandResult::failure(e.reason())),
        };

        let mut content = String::new();
        let mut errors = Vec::new();
        let mut any_read = files.is_empty();
        for file in &files {
            if *file == "-" {
                any_read = true;
                continue;
            }
            match env.vfs.read_file(&env.resolve(file)) {
                Ok(text) => {
                    content.push_str(&text);
                    any_read = true;
                },
                Err(e @ (ShellError::NoSuchPath(_) | ShellError::IsADirectory(_))) => {
                    errors.push(format!("cat: {file}: {}", e.reason()));
                },
                Err(e) => return Err(e),
            }
        }

        if !any_read {
            return Ok(CommandResult::failure(errors.join("\n")));
        }
        let output = opts.format(&content);
        if errors.is_empty() {
            Ok(CommandResult::ok(output))
        } else {
            Ok(CommandResult::partial(format!("{output}\n{}", errors.join("\n"))))
        }
    }
}

// ---------------------------------------------------------------------------
// less
// ---------------------------------------------------------------------------

struct LessCmd;
impl Command for LessCmd {
    fn name(&self) -> CommandName {
        CommandName::Less
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandResult> {
        if args.contains(&"--version") {
            return Ok(CommandResult::ok(help_text::LESS_VERSION));
        }
        let Some(&file) = args.iter().find(|a| !a.starts_with('-')) else {
            return Ok(CommandResult::failure(
                "less: missing file operand\nTry 'less --help' for more information.",
            ));
        };
        let text = match env.vfs.read_file(&env.resolve(file)) {
            Ok(text) => text,
            Err(e) => return Ok(CommandResult::failure(format!("less: {file}: {}", e.reason()))),
        };
        let lines: Vec<&str> = text.split('\n').collect();
        let mut output = lines[..lines.len().min(LESS_PAGE)].join("\n");
        if lines.len() > LESS_PAGE {
            output.push_str(&format!(
                "\n\n--- (showing first {LESS_PAGE} lines of {} total) ---\n",
                lines.len()
            ));
            output.push_str("In a real terminal, use arrow keys, Page Up/Down, or 'q' to quit\n");
            output.push_str("Commands: h=help, q=quit, /search, n=next, p=previous, g=top, G=bottom");
        }
        Ok(CommandResult::ok(output))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Harness;

    #[test]
    fn ls_default_sorted_by_name() {
        let mut h = Harness::new();
        assert_eq!(
            h.ok("ls"),
            "Desktop  Documents  Downloads  README.txt  sample.txt"
        );
    }

    #[test]
    fn ls_reverse_inverts_every_sort() {
        let mut h = Harness::new();
        h.write("/home/user/big.log", &"x".repeat(5000));
        for sort in ["", "-S", "-X", "-t", "-U"] {
            let forward: Vec<String> =
                h.ok(&format!("ls -1 {sort}")).lines().map(String::from).collect();
            let mut reversed: Vec<String> =
                h.ok(&format!("ls -1r {sort}")).lines().map(String::from).collect();
            reversed.reverse();
            assert_eq!(forward, reversed, "sort {sort:?}");
        }
    }

    #[test]
    fn ls_hidden_and_ignore() {
        let mut h = Harness::new();
        h.write("/home/user/.bashrc", "");
        h.write("/home/user/old.txt~", "");
        assert!(!h.ok("ls").contains(".bashrc"));
        assert!(h.ok("ls -a").contains(".bashrc"));
        assert!(!h.ok("ls -B").contains("old.txt~"));
        assert_eq!(h.ok("ls -I .txt -1 Documents"), "project1");
        assert_eq!(h.ok("ls --hide=D"), "old.txt~  README.txt  sample.txt");
    }

    #[test]
    fn ls_long_format() {
        let mut h = Harness::new();
        let notes = h.read("/home/user/Documents/notes.txt").len();
        assert_eq!(
            h.ok("ls -l Documents"),
            format!(
                "-rw-r--r-- 1 user     user     {notes:>8} Jan 01 12:00 notes.txt\n\
                 drw-r--r-- 1 user     user         4096 Jan 01 12:00 project1"
            )
        );
        let inode = h.ok("ls -li Downloads");
        assert!(inode.starts_with("   12345 -rw-r--r-- 1 user"));
        assert!(h.ok("ls -lh Documents").contains("    4K Jan 01 12:00 project1"));
    }

    #[test]
    fn ls_formats() {
        let mut h = Harness::new();
        assert_eq!(h.ok("ls -m Downloads"), "file1.txt, file2.txt");
        assert_eq!(h.ok("ls -1 Downloads"), "file1.txt\nfile2.txt");
        assert_eq!(h.ok("ls -FQ Documents"), "\"notes.txt\"  \"project1/\"");
        assert_eq!(h.ok("ls -G --classify Documents"), "project1/  notes.txt");
        assert_eq!(h.ok("ls -S -1 Documents"), "notes.txt\nproject1");
    }

    #[test]
    fn ls_sort_keys() {
        let mut h = Harness::new();
        h.ok("mkdir /tmp");
        h.ok("cd /tmp");
        h.write("/tmp/zeta.rs", "1234567");
        h.write("/tmp/alpha.txt", "12");
        h.write("/tmp/Makefile", "1234");
        h.write("/tmp/beta.md", "123");
        assert_eq!(h.ok("ls -S"), "alpha.txt  beta.md  Makefile  zeta.rs");
        assert_eq!(h.ok("ls -Sr"), "zeta.rs  Makefile  beta.md  alpha.txt");
        assert_eq!(h.ok("ls -t"), "alpha.txt  beta.md  Makefile  zeta.rs");
        assert_eq!(h.ok("ls --sort=time -r"), "zeta.rs  Makefile  beta.md  alpha.txt");
        assert_eq!(h.ok("ls -X"), "Makefile  beta.md  zeta.rs  alpha.txt");
        assert_eq!(h.ok("ls -U"), "zeta.rs  alpha.txt  Makefile  beta.md");
    }

    #[test]
    fn extension_without_dot_is_whole_name() {
        assert_eq!(extension("Makefile"), "Makefile");
        assert_eq!(extension("a.tar.gz"), "gz");
        assert_eq!(extension(".bashrc"), "bashrc");
    }

    #[test]
    fn ls_errors() {
        let mut h = Harness::new();
        assert_eq!(
            h.fail("ls nope"),
            "ls: cannot access 'nope': No such file or directory"
        );
        assert_eq!(
            h.fail("ls sample.txt"),
            "ls: cannot access 'sample.txt': Not a directory"
        );
        assert_eq!(
            h.fail("ls -z"),
            "ls: invalid option -- 'z'\nTry 'ls --help' for more information."
        );
        assert_eq!(
            h.fail("ls --bogus"),
            "ls: unrecognized option '--bogus'\nTry 'ls --help' for more information."
        );
        assert!(h.fail("ls --sort=color").starts_with("ls: invalid argument 'color'"));
    }

    #[test]
    fn human_sizes() {
        assert_eq!(human_size(0), "0B");
        assert_eq!(human_size(1023), "1023B");
        assert_eq!(human_size(1536), "2K");
        assert_eq!(human_size(5 * 1024 * 1024), "5M");
    }

    #[test]
    fn cat_concatenates() {
        let mut h = Harness::new();
        h.write("/home/user/a", "one\n");
        h.write("/home/user/b", "two");
        assert_eq!(h.ok("cat a b"), "one\ntwo");
    }

    #[test]
    fn cat_numbering() {
        let mut h = Harness::new();
        h.write("/home/user/t", "a\n\nb");
        assert_eq!(h.ok("cat -n t"), "     1  a\n     2  \n     3  b");
        assert_eq!(h.ok("cat -b t"), "     1  a\n\n     2  b");
        assert_eq!(h.ok("cat -nb t"), "     1  a\n\n     2  b");
    }

    #[test]
    fn cat_n_matches_wc_lines() {
        let mut h = Harness::new();
        h.write("/home/user/t", "x\ny\n");
        let numbered = h.ok("cat -n t").lines().count();
        let wc = h.ok("wc -l t");
        assert_eq!(wc, format!("{numbered} t"));
    }

    #[test]
    fn cat_visual_flags() {
        let mut h = Harness::new();
        h.write("/home/user/t", "a\tb\u{1}\n\n\n\nc\u{7f}");
        assert_eq!(h.ok("cat -s t"), "a\tb\u{1}\n\nc\u{7f}");
        assert_eq!(h.ok("cat -A t"), "a^Ib^A$\n$\n$\n$\nc^?$");
        assert_eq!(h.ok("cat -E t").lines().next(), Some("a\tb\u{1}$"));
        assert_eq!(h.ok("cat -v t").lines().next(), Some("a\tb^A"));
        h.write("/home/user/u", "caf\u{e9} \u{2192}");
        assert_eq!(h.ok("cat -v u"), "cafM-CM-) M-bM-^FM-^R");
    }

    #[test]
    fn cat_partial_failure() {
        let mut h = Harness::new();
        let r = h.run("cat sample.txt missing Documents");
        assert!(r.success);
        assert!(r.is_error);
        assert!(r.output.ends_with(
            "practicing file operations.\ncat: missing: No such file or directory\ncat: Documents: Is a directory"
        ));
        assert_eq!(
            h.fail("cat missing"),
            "cat: missing: No such file or directory"
        );
    }

    #[test]
    fn cat_misc() {
        let mut h = Harness::new();
        assert_eq!(h.ok("cat"), "");
        assert_eq!(h.ok("cat -"), "");
        assert!(h.ok("cat --version").starts_with("cat (GNU coreutils) 8.32"));
        assert_eq!(
            h.fail("cat -z sample.txt"),
            "cat: invalid option -- 'z'\nTry 'cat --help' for more information."
        );
    }

    #[test]
    fn less_pages() {
        let mut h = Harness::new();
        let body: Vec<String> = (1..=25).map(|n| format!("line {n}")).collect();
        h.write("/home/user/long", &body.join("\n"));
        let out = h.ok("less long");
        assert!(out.starts_with("line 1\n"));
        assert!(out.contains("line 20\n\n--- (showing first 20 lines of 25 total) ---"));
        assert!(!out.contains("line 21"));
        assert_eq!(h.ok("less sample.txt"), h.read("/home/user/sample.txt"));
        assert_eq!(h.fail("less Desktop"), "less: Desktop: Is a directory");
        assert!(h.fail("less").starts_with("less: missing file operand"));
        assert!(h.ok("less --version").starts_with("less 551"));
    }
}
