//! Test harness shared by the command modules.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use termsim_net::{Invocation, NetworkGateway, ProcessOutput, ProcessRunner};
use termsim_types::config::ShellConfig;
use termsim_types::error::Result;
use termsim_vfs::seed::seeded_vfs;
use termsim_vfs::{MemoryVfs, Vfs};

use crate::commands::register_builtins;
use crate::editor::LineEditor;
use crate::interpreter::{CommandRegistry, Environment, raw_args};
use crate::result::CommandResult;

/// Answers every invocation with its own argv.
struct EchoRunner {
    calls: Rc<RefCell<Vec<Invocation>>>,
}

impl ProcessRunner for EchoRunner {
    fn run(&self, invocation: &Invocation, _timeout: Duration, _max: usize) -> Result<ProcessOutput> {
        self.calls.borrow_mut().push(invocation.clone());
        Ok(ProcessOutput {
            success: true,
            text: format!("{} {}", invocation.program, invocation.args.join(" ")),
        })
    }
}

pub(crate) struct Harness {
    pub vfs: MemoryVfs,
    pub config: ShellConfig,
    pub gateway: NetworkGateway,
    pub cwd: String,
    pub history: Vec<String>,
    pub calls: Rc<RefCell<Vec<Invocation>>>,
    pub editor: Option<LineEditor>,
    registry: CommandRegistry,
}

impl Harness {
    /// A seeded home tree with the working directory at home.
    pub fn new() -> Self {
        let config = ShellConfig::default();
        let calls = Rc::new(RefCell::new(Vec::new()));
        let runner = EchoRunner {
            calls: Rc::clone(&calls),
        };
        let mut registry = CommandRegistry::new();
        register_builtins(&mut registry);
        Self {
            vfs: seeded_vfs(&config.home, true).unwrap(),
            gateway: NetworkGateway::with_runner(&config.network, Box::new(runner)),
            cwd: config.home.clone(),
            config,
            history: Vec::new(),
            calls,
            editor: None,
            registry,
        }
    }

    pub fn run(&mut self, line: &str) -> CommandResult {
        self.history.push(line.to_string());
        let mut env = Environment {
            cwd: self.cwd.clone(),
            vfs: &mut self.vfs,
            config: &self.config,
            gateway: &mut self.gateway,
            identity: "tester",
            history: &self.history,
            raw_args: raw_args(line),
            open_editor: None,
        };
        let result = self.registry.execute(line, &mut env);
        self.cwd = env.cwd;
        self.editor = env.open_editor;
        result
    }

    /// Output of a command expected to succeed.
    pub fn ok(&mut self, line: &str) -> String {
        let r = self.run(line);
        assert!(r.success, "`{line}` failed: {}", r.output);
        r.output
    }

    /// Output of a command expected to fail.
    pub fn fail(&mut self, line: &str) -> String {
        let r = self.run(line);
        assert!(!r.success, "`{line}` unexpectedly succeeded: {}", r.output);
        assert!(r.is_error);
        r.output
    }

    pub fn write(&mut self, path: &str, content: &str) {
        self.vfs.write_file(path, content).unwrap();
    }

    pub fn read(&self, path: &str) -> String {
        self.vfs.read_file(path).unwrap()
    }
}
