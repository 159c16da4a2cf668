//! One interactive session: filesystem, cursor, history, and mode.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use termsim_net::NetworkGateway;
use termsim_types::config::ShellConfig;
use termsim_types::error::Result;
use termsim_vfs::path::join;
use termsim_vfs::seed::seeded_vfs;
use termsim_vfs::{EntryKind, MemoryVfs, Vfs};

use crate::commands::register_builtins;
use crate::editor::{EditorStatus, LineEditor};
use crate::interpreter::{CommandRegistry, Environment, raw_args};
use crate::result::CommandResult;

/// What the next input line is interpreted as.
#[derive(Debug)]
pub enum Mode {
    Shell,
    Editing(LineEditor),
}

impl Mode {
    pub fn is_editing(&self) -> bool {
        matches!(self, Mode::Editing(_))
    }
}

/// Session history handed to [`SessionHooks::on_export`] on `clear`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub timestamp: DateTime<Utc>,
    pub session_id: String,
    pub current_dir: String,
    pub history: Vec<String>,
    pub filesystem: TreeSnapshot,
}

/// A serializable copy of a filesystem subtree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeSnapshot {
    Directory {
        contents: BTreeMap<String, TreeSnapshot>,
    },
    File {
        content: String,
    },
}

impl TreeSnapshot {
    /// Copy everything at and below `path`. Unreadable entries are skipped.
    pub fn capture(vfs: &dyn Vfs, path: &str) -> Self {
        if vfs.kind(path) == Some(EntryKind::File) {
            return Self::File {
                content: vfs.read_file(path).unwrap_or_default(),
            };
        }
        let contents = vfs
            .children(path)
            .unwrap_or_default()
            .into_iter()
            .map(|entry| {
                let child = join(path, &entry.name);
                (entry.name, Self::capture(vfs, &child))
            })
            .collect();
        Self::Directory { contents }
    }
}

impl SessionSnapshot {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Callbacks for the collaborators around a session.
pub trait SessionHooks {
    /// Called after every `execute`, including editor keystrokes.
    fn on_command(&mut self, line: &str, result: &CommandResult);

    /// Called when `clear` asks for the session history to be saved.
    fn on_export(&mut self, snapshot: &SessionSnapshot);
}

/// Default hooks: write everything to the log.
#[derive(Debug, Default)]
pub struct LogHooks;

impl SessionHooks for LogHooks {
    fn on_command(&mut self, line: &str, result: &CommandResult) {
        log::debug!("command {line:?} success={}", result.success);
    }

    fn on_export(&mut self, snapshot: &SessionSnapshot) {
        match snapshot.to_json() {
            Ok(json) => log::info!("session history saved: {json}"),
            Err(e) => log::warn!("session history export failed: {e}"),
        }
    }
}

/// A shell session. Owns all of its state; give each user their own.
pub struct Shell {
    config: ShellConfig,
    session_id: String,
    cwd: String,
    vfs: MemoryVfs,
    registry: CommandRegistry,
    gateway: NetworkGateway,
    mode: Mode,
    history: Vec<String>,
    hooks: Box<dyn SessionHooks>,
}

impl Shell {
    /// Create a session positioned at the configured home directory.
    pub fn new(config: ShellConfig, session_id: impl Into<String>) -> Result<Self> {
        let vfs = seeded_vfs(&config.home, config.seed_home)?;
        let mut registry = CommandRegistry::new();
        register_builtins(&mut registry);
        let session_id = session_id.into();
        log::info!("session {session_id} started for {}", config.user);
        Ok(Self {
            gateway: NetworkGateway::new(&config.network),
            cwd: config.home.clone(),
            config,
            session_id,
            vfs,
            registry,
            mode: Mode::Shell,
            history: Vec::new(),
            hooks: Box::new(LogHooks),
        })
    }

    /// Replace the network gateway, e.g. with one backed by a scripted runner.
    pub fn with_gateway(mut self, gateway: NetworkGateway) -> Self {
        self.gateway = gateway;
        self
    }

    pub fn set_hooks(&mut self, hooks: Box<dyn SessionHooks>) {
        self.hooks = hooks;
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn vfs(&self) -> &MemoryVfs {
        &self.vfs
    }

    /// Run one input line. Never fails; problems come back as failed results.
    pub fn execute(&mut self, line: &str) -> CommandResult {
        let result = if let Mode::Editing(editor) = &mut self.mode {
            let (result, status) = editor.handle(line, &mut self.vfs);
            if status == EditorStatus::Closed {
                self.mode = Mode::Shell;
            }
            result
        } else {
            self.run_command(line)
        };
        self.hooks.on_command(line, &result);
        result
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            timestamp: Utc::now(),
            session_id: self.session_id.clone(),
            current_dir: self.cwd.clone(),
            history: self.history.clone(),
            filesystem: TreeSnapshot::capture(&self.vfs, "/"),
        }
    }

    fn run_command(&mut self, line: &str) -> CommandResult {
        let line = line.trim();
        if line.is_empty() {
            return CommandResult::empty();
        }
        self.record(line);

        let mut env = Environment {
            cwd: self.cwd.clone(),
            vfs: &mut self.vfs,
            config: &self.config,
            gateway: &mut self.gateway,
            identity: &self.config.user,
            history: &self.history,
            raw_args: raw_args(line),
            open_editor: None,
        };
        let result = self.registry.execute(line, &mut env);
        let Environment {
            cwd, open_editor, ..
        } = env;
        self.cwd = cwd;
        if let Some(editor) = open_editor {
            self.mode = Mode::Editing(editor);
        }
        if result.clear_screen_requested {
            let snapshot = self.snapshot();
            self.hooks.on_export(&snapshot);
        }
        result
    }

    /// Append to history, collapsing repeats and dropping the oldest entries.
    fn record(&mut self, line: &str) {
        if self.history.last().is_some_and(|last| last == line) {
            return;
        }
        self.history.push(line.to_string());
        while self.history.len() > self.config.history_limit {
            self.history.remove(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Recorder {
        commands: Vec<(String, bool)>,
        exports: Vec<SessionSnapshot>,
    }

    struct SharedHooks(Rc<RefCell<Recorder>>);

    impl SessionHooks for SharedHooks {
        fn on_command(&mut self, line: &str, result: &CommandResult) {
            self.0.borrow_mut().commands.push((line.to_string(), result.success));
        }
        fn on_export(&mut self, snapshot: &SessionSnapshot) {
            self.0.borrow_mut().exports.push(snapshot.clone());
        }
    }

    fn shell() -> Shell {
        Shell::new(ShellConfig::default(), "s-1").unwrap()
    }

    #[test]
    fn starts_at_home() {
        let sh = shell();
        assert_eq!(sh.cwd(), "/home/user");
        assert!(!sh.mode().is_editing());
        assert_eq!(sh.session_id(), "s-1");
    }

    #[test]
    fn empty_input_skips_history() {
        let mut sh = shell();
        let r = sh.execute("   ");
        assert!(r.success);
        assert!(r.output.is_empty());
        assert!(sh.history().is_empty());
    }

    #[test]
    fn history_collapses_repeats_and_is_bounded() {
        let mut sh = Shell::new(
            ShellConfig {
                history_limit: 3,
                ..ShellConfig::default()
            },
            "s-2",
        )
        .unwrap();
        for line in ["pwd", "pwd", "ls", "whoami", "date"] {
            sh.execute(line);
        }
        assert_eq!(sh.history(), &["ls", "whoami", "date"]);
    }

    #[test]
    fn editing_mode_round_trip() {
        let mut sh = shell();
        let r = sh.execute("ai-edit note.txt");
        assert!(r.editor_mode_active);
        assert!(sh.mode().is_editing());

        // Shell commands are just keystrokes now.
        let r = sh.execute("ls");
        assert!(r.editor_mode_active);
        assert!(r.output.starts_with("Editor Help:"));

        sh.execute("o");
        let r = sh.execute("ctrl+x");
        assert!(!r.editor_mode_active);
        assert!(!sh.mode().is_editing());
        assert_eq!(sh.execute("cat note.txt").output, "o");
        assert_eq!(sh.history(), &["ai-edit note.txt", "cat note.txt"]);
    }

    #[test]
    fn hooks_see_every_call_and_clear_exports() {
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        let mut sh = shell();
        sh.set_hooks(Box::new(SharedHooks(Rc::clone(&recorder))));
        sh.execute("cd Documents");
        sh.execute("nope");
        let r = sh.execute("clear");
        assert!(r.clear_screen_requested);

        let rec = recorder.borrow();
        assert_eq!(
            rec.commands,
            vec![
                ("cd Documents".to_string(), true),
                ("nope".to_string(), false),
                ("clear".to_string(), true),
            ]
        );
        assert_eq!(rec.exports.len(), 1);
        assert_eq!(rec.exports[0].current_dir, "/home/user/Documents");
        assert_eq!(rec.exports[0].history, vec!["cd Documents", "nope", "clear"]);
    }

    #[test]
    fn snapshot_json_fields() {
        let sh = shell();
        let json: serde_json::Value = serde_json::from_str(&sh.snapshot().to_json().unwrap()).unwrap();
        assert_eq!(json["session_id"], "s-1");
        assert_eq!(json["current_dir"], "/home/user");
        assert!(json["timestamp"].as_str().unwrap().contains('T'));
        let home = &json["filesystem"]["contents"]["home"]["contents"]["user"];
        assert_eq!(home["type"], "directory");
        assert_eq!(
            home["contents"]["Downloads"]["contents"]["file1.txt"],
            serde_json::json!({ "type": "file", "content": "Downloaded file 1" })
        );
    }

    #[test]
    fn export_carries_edited_files() {
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        let mut sh = shell();
        sh.set_hooks(Box::new(SharedHooks(Rc::clone(&recorder))));
        sh.execute("touch fresh.txt");
        sh.execute("clear");
        let rec = recorder.borrow();
        let TreeSnapshot::Directory { contents } = &rec.exports[0].filesystem else {
            panic!("root should be a directory");
        };
        let TreeSnapshot::Directory { contents: home } = &contents["home"] else {
            panic!("home should be a directory");
        };
        let TreeSnapshot::Directory { contents: user } = &home["user"] else {
            panic!("user should be a directory");
        };
        assert_eq!(
            user["fresh.txt"],
            TreeSnapshot::File {
                content: String::new()
            }
        );
    }

    #[test]
    fn unseeded_home_is_empty() {
        let mut sh = Shell::new(
            ShellConfig {
                seed_home: false,
                ..ShellConfig::default()
            },
            "s-3",
        )
        .unwrap();
        assert_eq!(sh.execute("ls").output, "");
    }
}
