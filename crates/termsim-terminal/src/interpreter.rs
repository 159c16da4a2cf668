//! Command trait, registry, and dispatch logic.
//!
//! Command names form a closed enum. Each name is bound to one handler at
//! registration time, and dispatch is a single map lookup.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use termsim_net::NetworkGateway;
use termsim_types::config::ShellConfig;
use termsim_types::error::{Result, ShellError};
use termsim_vfs::Vfs;

use crate::editor::LineEditor;
use crate::help_text;
use crate::result::CommandResult;

/// Every command the interpreter knows, in listing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CommandName {
    Ls,
    Cd,
    Pwd,
    Cat,
    Less,
    Mkdir,
    Touch,
    Rm,
    Rmdir,
    Cp,
    Mv,
    Echo,
    Grep,
    Find,
    Head,
    Tail,
    Wc,
    Sort,
    Uniq,
    Chmod,
    Whoami,
    Date,
    History,
    Help,
    Options,
    AiEdit,
    Clear,
    Ping,
    Nslookup,
    Dig,
    Traceroute,
    Netstat,
    Ip,
    Route,
    Arp,
    Whois,
    Iwconfig,
    Ifconfig,
}

/// Grouping used by `options --?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    FileOperations,
    Help,
    Navigation,
    Network,
    System,
    TextProcessing,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Self::FileOperations => "File Operations",
            Self::Help => "Help",
            Self::Navigation => "Navigation",
            Self::Network => "Network",
            Self::System => "System",
            Self::TextProcessing => "Text Processing",
        }
    }
}

impl CommandName {
    pub const ALL: [CommandName; 38] = [
        Self::Ls,
        Self::Cd,
        Self::Pwd,
        Self::Cat,
        Self::Less,
        Self::Mkdir,
        Self::Touch,
        Self::Rm,
        Self::Rmdir,
        Self::Cp,
        Self::Mv,
        Self::Echo,
        Self::Grep,
        Self::Find,
        Self::Head,
        Self::Tail,
        Self::Wc,
        Self::Sort,
        Self::Uniq,
        Self::Chmod,
        Self::Whoami,
        Self::Date,
        Self::History,
        Self::Help,
        Self::Options,
        Self::AiEdit,
        Self::Clear,
        Self::Ping,
        Self::Nslookup,
        Self::Dig,
        Self::Traceroute,
        Self::Netstat,
        Self::Ip,
        Self::Route,
        Self::Arp,
        Self::Whois,
        Self::Iwconfig,
        Self::Ifconfig,
    ];

    /// What the user types.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ls => "ls",
            Self::Cd => "cd",
            Self::Pwd => "pwd",
            Self::Cat => "cat",
            Self::Less => "less",
            Self::Mkdir => "mkdir",
            Self::Touch => "touch",
            Self::Rm => "rm",
            Self::Rmdir => "rmdir",
            Self::Cp => "cp",
            Self::Mv => "mv",
            Self::Echo => "echo",
            Self::Grep => "grep",
            Self::Find => "find",
            Self::Head => "head",
            Self::Tail => "tail",
            Self::Wc => "wc",
            Self::Sort => "sort",
            Self::Uniq => "uniq",
            Self::Chmod => "chmod",
            Self::Whoami => "whoami",
            Self::Date => "date",
            Self::History => "history",
            Self::Help => "help",
            Self::Options => "options",
            Self::AiEdit => "ai-edit",
            Self::Clear => "clear",
            Self::Ping => "ping",
            Self::Nslookup => "nslookup",
            Self::Dig => "dig",
            Self::Traceroute => "traceroute",
            Self::Netstat => "netstat",
            Self::Ip => "ip",
            Self::Route => "route",
            Self::Arp => "arp",
            Self::Whois => "whois",
            Self::Iwconfig => "iwconfig",
            Self::Ifconfig => "ifconfig",
        }
    }

    /// One-line description for `help` and `options --?`.
    pub fn description(self) -> &'static str {
        match self {
            Self::Ls => "List directory contents",
            Self::Cd => "Change directory",
            Self::Pwd => "Print working directory",
            Self::Cat => "Display file contents",
            Self::Less => "View file contents with paging",
            Self::Mkdir => "Create directory",
            Self::Touch => "Create file",
            Self::Rm => "Remove file",
            Self::Rmdir => "Remove directory",
            Self::Cp => "Copy file",
            Self::Mv => "Move/rename file",
            Self::Echo => "Display text",
            Self::Grep => "Search text in files",
            Self::Find => "Find files",
            Self::Head => "Display first lines of file",
            Self::Tail => "Display last lines of file",
            Self::Wc => "Count lines, words, characters",
            Self::Sort => "Sort lines",
            Self::Uniq => "Remove duplicate lines",
            Self::Chmod => "Change file permissions",
            Self::Whoami => "Display current user",
            Self::Date => "Display current date",
            Self::History => "Display command history",
            Self::Help => "Show general help",
            Self::Options => "List all available commands",
            Self::AiEdit => "Text editor (nano-like)",
            Self::Clear => "Clear screen",
            Self::Ping => "Send ICMP echo requests to hosts",
            Self::Nslookup => "Query DNS name servers",
            Self::Dig => "DNS lookup utility",
            Self::Traceroute => "Trace route to network host",
            Self::Netstat => "Print network connections",
            Self::Ip => "Show/manipulate network devices",
            Self::Route => "Show/manipulate routing table",
            Self::Arp => "Show/manipulate ARP cache",
            Self::Whois => "Query whois directory service",
            Self::Iwconfig => "Configure wireless interfaces",
            Self::Ifconfig => "Configure network interfaces (alias for ip)",
        }
    }

    pub fn category(self) -> Category {
        match self {
            Self::Cd | Self::Pwd => Category::Navigation,
            Self::Ls
            | Self::Cat
            | Self::Less
            | Self::Mkdir
            | Self::Touch
            | Self::Rm
            | Self::Rmdir
            | Self::Cp
            | Self::Mv
            | Self::Find => Category::FileOperations,
            Self::Echo
            | Self::Grep
            | Self::Head
            | Self::Tail
            | Self::Wc
            | Self::Sort
            | Self::Uniq
            | Self::AiEdit => Category::TextProcessing,
            Self::Chmod | Self::Whoami | Self::Date | Self::History | Self::Clear => {
                Category::System
            },
            Self::Help | Self::Options => Category::Help,
            Self::Ping
            | Self::Nslookup
            | Self::Dig
            | Self::Traceroute
            | Self::Netstat
            | Self::Ip
            | Self::Route
            | Self::Arp
            | Self::Whois
            | Self::Iwconfig
            | Self::Ifconfig => Category::Network,
        }
    }

    /// Fixed `--help` text. `help` itself has none.
    pub fn help_text(self) -> Option<&'static str> {
        Some(match self {
            Self::Ls => help_text::LS,
            Self::Cd => help_text::CD,
            Self::Pwd => help_text::PWD,
            Self::Cat => help_text::CAT,
            Self::Less => help_text::LESS,
            Self::Mkdir => help_text::MKDIR,
            Self::Touch => help_text::TOUCH,
            Self::Rm => help_text::RM,
            Self::Rmdir => help_text::RMDIR,
            Self::Cp => help_text::CP,
            Self::Mv => help_text::MV,
            Self::Echo => help_text::ECHO,
            Self::Grep => help_text::GREP,
            Self::Find => help_text::FIND,
            Self::Head => help_text::HEAD,
            Self::Tail => help_text::TAIL,
            Self::Wc => help_text::WC,
            Self::Sort => help_text::SORT,
            Self::Uniq => help_text::UNIQ,
            Self::Chmod => help_text::CHMOD,
            Self::Whoami => help_text::WHOAMI,
            Self::Date => help_text::DATE,
            Self::History => help_text::HISTORY,
            Self::Help => return None,
            Self::Options => help_text::OPTIONS,
            Self::AiEdit => help_text::AI_EDIT,
            Self::Clear => help_text::CLEAR,
            Self::Ping => help_text::PING,
            Self::Nslookup => help_text::NSLOOKUP,
            Self::Dig => help_text::DIG,
            Self::Traceroute => help_text::TRACEROUTE,
            Self::Netstat => help_text::NETSTAT,
            Self::Ip | Self::Ifconfig => help_text::IP,
            Self::Route => help_text::ROUTE,
            Self::Arp => help_text::ARP,
            Self::Whois => help_text::WHOIS,
            Self::Iwconfig => help_text::IWCONFIG,
        })
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommandName {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| ShellError::UnknownCommand(s.to_string()))
    }
}

/// Shared mutable environment passed to every command.
pub struct Environment<'a> {
    /// Current working directory (absolute VFS path).
    pub cwd: String,
    /// The session's file system.
    pub vfs: &'a mut dyn Vfs,
    pub config: &'a ShellConfig,
    /// Gateway for the network diagnostics.
    pub gateway: &'a mut NetworkGateway,
    /// Who network requests are rate-limited as.
    pub identity: &'a str,
    /// Commands run so far this session, oldest first.
    pub history: &'a [String],
    /// The command line after the command name, untokenized.
    pub raw_args: &'a str,
    /// Set by `ai-edit` to switch the session into editing mode.
    pub open_editor: Option<LineEditor>,
}

impl Environment<'_> {
    /// Resolve a user-supplied path against the working directory.
    pub fn resolve(&self, input: &str) -> String {
        termsim_vfs::path::resolve(&self.cwd, input)
    }
}

/// The command line after the command name, untokenized.
pub fn raw_args(line: &str) -> &str {
    let line = line.trim();
    match line.find(char::is_whitespace) {
        Some(i) => line[i..].trim_start(),
        None => "",
    }
}

/// A single executable command.
pub trait Command {
    /// Which name this handler serves.
    fn name(&self) -> CommandName;

    /// Execute the command with the given arguments and environment.
    ///
    /// Expected failures (missing files, bad flags) come back as
    /// `Ok(CommandResult::failure(..))`. An `Err` is reported by the
    /// registry as `Error: <message>`.
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandResult>;
}

/// Registry of available commands with dispatch.
pub struct CommandRegistry {
    commands: HashMap<CommandName, Box<dyn Command>>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Register a command. Replaces any existing handler for the same name.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name(), cmd);
    }

    /// Names with a registered handler, in listing order.
    pub fn registered(&self) -> Vec<CommandName> {
        let mut names: Vec<CommandName> = self.commands.keys().copied().collect();
        names.sort();
        names
    }

    /// Tokenize and dispatch a command line. Never fails.
    pub fn execute(&self, line: &str, env: &mut Environment<'_>) -> CommandResult {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&name, args)) = tokens.split_first() else {
            return CommandResult::empty();
        };
        let parsed = name.parse::<CommandName>();

        if args.contains(&"--help") {
            return match parsed.ok().and_then(CommandName::help_text) {
                Some(text) => CommandResult::ok(text),
                None => CommandResult::failure(format!("No help available for command: {name}")),
            };
        }

        let Some(cmd) = parsed.ok().and_then(|n| self.commands.get(&n)) else {
            return CommandResult::failure(format!("bash: {name}: command not found"));
        };
        log::debug!("dispatch {name} {args:?} in {}", env.cwd);
        match cmd.execute(args, env) {
            Ok(result) => result,
            Err(e) => {
                log::debug!("{name} faulted: {e}");
                CommandResult::failure(format!("Error: {e}"))
            },
        }
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use termsim_vfs::MemoryVfs;
    use termsim_types::config::NetworkConfig;

    struct EchoCmd;
    impl Command for EchoCmd {
        fn name(&self) -> CommandName {
            CommandName::Echo
        }
        fn execute(&self, args: &[&str], _env: &mut Environment<'_>) -> Result<CommandResult> {
            Ok(CommandResult::ok(args.join(" ")))
        }
    }

    struct FaultyCmd;
    impl Command for FaultyCmd {
        fn name(&self) -> CommandName {
            CommandName::Date
        }
        fn execute(&self, _args: &[&str], _env: &mut Environment<'_>) -> Result<CommandResult> {
            Err(ShellError::Config("clock unavailable".into()))
        }
    }

    fn run(reg: &CommandRegistry, line: &str) -> CommandResult {
        let mut vfs = MemoryVfs::new();
        let config = ShellConfig::default();
        let mut gateway = NetworkGateway::new(&NetworkConfig::default());
        let mut env = Environment {
            cwd: "/".to_string(),
            vfs: &mut vfs,
            config: &config,
            gateway: &mut gateway,
            identity: "test",
            history: &[],
            raw_args: "",
            open_editor: None,
        };
        reg.execute(line, &mut env)
    }

    fn registry() -> CommandRegistry {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(EchoCmd));
        reg.register(Box::new(FaultyCmd));
        reg
    }

    #[test]
    fn register_and_execute() {
        let r = run(&registry(), "echo hello   world");
        assert!(r.success);
        assert_eq!(r.output, "hello world");
    }

    #[test]
    fn unknown_command() {
        let r = run(&registry(), "frobnicate now");
        assert!(!r.success);
        assert!(r.is_error);
        assert_eq!(r.output, "bash: frobnicate: command not found");
    }

    #[test]
    fn known_but_unregistered_is_not_found() {
        let r = run(&registry(), "ls");
        assert_eq!(r.output, "bash: ls: command not found");
    }

    #[test]
    fn help_flag_short_circuits() {
        let r = run(&registry(), "echo a --help b");
        assert!(r.success);
        assert_eq!(r.output, help_text::ECHO);
    }

    #[test]
    fn help_flag_for_unknown_command() {
        let r = run(&registry(), "nope --help");
        assert!(!r.success);
        assert_eq!(r.output, "No help available for command: nope");
    }

    #[test]
    fn faults_become_error_results() {
        let r = run(&registry(), "date");
        assert!(!r.success);
        assert_eq!(r.output, "Error: config error: clock unavailable");
    }

    #[test]
    fn blank_line_is_empty_success() {
        let r = run(&registry(), "   ");
        assert!(r.success);
        assert!(r.output.is_empty());
    }

    #[test]
    fn names_round_trip() {
        for name in CommandName::ALL {
            assert_eq!(name.as_str().parse::<CommandName>().unwrap(), name);
        }
        assert!(matches!(
            "LS".parse::<CommandName>(),
            Err(ShellError::UnknownCommand(_))
        ));
    }

    #[test]
    fn every_command_but_help_has_help_text() {
        for name in CommandName::ALL {
            assert_eq!(name.help_text().is_none(), name == CommandName::Help);
        }
        assert_eq!(CommandName::Ifconfig.help_text(), CommandName::Ip.help_text());
    }

    #[test]
    fn raw_args_keeps_inner_spacing() {
        assert_eq!(raw_args("  echo   \"a  b\"  "), "\"a  b\"");
        assert_eq!(raw_args("pwd"), "");
    }

    #[test]
    fn registered_in_listing_order() {
        assert_eq!(
            registry().registered(),
            vec![CommandName::Echo, CommandName::Date]
        );
    }
}
