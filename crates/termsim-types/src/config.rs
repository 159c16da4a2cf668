//! Shell configuration.
//!
//! Every field has a default, so an empty TOML document (or no file at all)
//! yields a working shell with the stock network allow-list.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShellError};

/// Hard ceiling for a single network command, in milliseconds.
pub const MAX_NETWORK_TIMEOUT_MS: u64 = 5000;

/// Top-level shell configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Login name reported by `whoami` and shown as file owner by `ls -l`.
    #[serde(default = "default_user")]
    pub user: String,
    /// Home directory; initial working directory and `cd` target.
    #[serde(default = "default_home")]
    pub home: String,
    /// Maximum number of retained history entries.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
    /// Populate the home directory with the sample tree on session start.
    #[serde(default = "default_true")]
    pub seed_home: bool,
    /// Command names a caller may dispatch. `None` means unrestricted.
    #[serde(default)]
    pub restricted_commands: Option<Vec<String>>,
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub network: NetworkConfig,
}

/// Line editor settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Number of buffer lines rendered around the cursor.
    #[serde(default = "default_window_lines")]
    pub window_lines: usize,
}

/// Network gateway settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Domains (and their subdomains) that host-taking commands may target.
    #[serde(default = "default_allowed_domains")]
    pub allowed_domains: Vec<String>,
    /// Per-command timeout; values above [`MAX_NETWORK_TIMEOUT_MS`] are clamped.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Captured output beyond this many bytes is discarded.
    #[serde(default = "default_max_output_bytes")]
    pub max_output_bytes: usize,
    #[serde(default = "default_rate_limit_window_secs")]
    pub rate_limit_window_secs: u64,
    #[serde(default = "default_max_requests_per_window")]
    pub max_requests_per_window: usize,
}

fn default_user() -> String {
    "user".to_string()
}

fn default_home() -> String {
    "/home/user".to_string()
}

fn default_history_limit() -> usize {
    100
}

fn default_true() -> bool {
    true
}

fn default_window_lines() -> usize {
    15
}

fn default_allowed_domains() -> Vec<String> {
    [
        "google.com",
        "github.com",
        "stackoverflow.com",
        "wikipedia.org",
        "example.com",
        "localhost",
        "127.0.0.1",
        "::1",
    ]
    .iter()
    .map(|d| d.to_string())
    .collect()
}

fn default_timeout_ms() -> u64 {
    MAX_NETWORK_TIMEOUT_MS
}

fn default_max_output_bytes() -> usize {
    1024 * 1024
}

fn default_rate_limit_window_secs() -> u64 {
    60
}

fn default_max_requests_per_window() -> usize {
    10
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            user: default_user(),
            home: default_home(),
            history_limit: default_history_limit(),
            seed_home: true,
            restricted_commands: None,
            editor: EditorConfig::default(),
            network: NetworkConfig::default(),
        }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            window_lines: default_window_lines(),
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            allowed_domains: default_allowed_domains(),
            timeout_ms: default_timeout_ms(),
            max_output_bytes: default_max_output_bytes(),
            rate_limit_window_secs: default_rate_limit_window_secs(),
            max_requests_per_window: default_max_requests_per_window(),
        }
    }
}

impl NetworkConfig {
    /// The timeout actually applied, never above the hard ceiling.
    pub fn effective_timeout_ms(&self) -> u64 {
        self.timeout_ms.min(MAX_NETWORK_TIMEOUT_MS)
    }
}

impl ShellConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Load a configuration file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&text)
            .map_err(|e| ShellError::Config(format!("{}: {e}", path.display())))?;
        log::debug!("loaded shell config from {}", path.display());
        Ok(config)
    }

    /// Whether a caller may dispatch `line` under the active restriction list.
    ///
    /// Only the command name (first token) is checked. Empty input is always
    /// permitted.
    pub fn permits(&self, line: &str) -> bool {
        let Some(allowed) = &self.restricted_commands else {
            return true;
        };
        match line.split_whitespace().next() {
            Some(name) => allowed.iter().any(|a| a == name),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_toml_gives_defaults() {
        let cfg = ShellConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, ShellConfig::default());
        assert_eq!(cfg.home, "/home/user");
        assert_eq!(cfg.editor.window_lines, 15);
        assert_eq!(cfg.network.max_requests_per_window, 10);
        assert_eq!(cfg.network.max_output_bytes, 1024 * 1024);
        assert!(cfg.network.allowed_domains.contains(&"example.com".to_string()));
    }

    #[test]
    fn partial_toml_overrides() {
        let cfg = ShellConfig::from_toml_str(
            r#"
user = "alice"
home = "/home/alice"

[network]
allowed_domains = ["rust-lang.org"]
timeout_ms = 2000
"#,
        )
        .unwrap();
        assert_eq!(cfg.user, "alice");
        assert_eq!(cfg.network.allowed_domains, vec!["rust-lang.org"]);
        assert_eq!(cfg.network.effective_timeout_ms(), 2000);
        assert_eq!(cfg.network.rate_limit_window_secs, 60);
        assert_eq!(cfg.history_limit, 100);
    }

    #[test]
    fn timeout_is_clamped() {
        let cfg = ShellConfig::from_toml_str("[network]\ntimeout_ms = 60000\n").unwrap();
        assert_eq!(cfg.network.effective_timeout_ms(), MAX_NETWORK_TIMEOUT_MS);
    }

    #[test]
    fn invalid_toml_text_is_parse_error() {
        let err = ShellConfig::from_toml_str("user = [").unwrap_err();
        assert!(matches!(err, ShellError::TomlParse(_)));
    }

    #[test]
    fn invalid_toml_file_names_the_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "history_limit = \"lots\"").unwrap();
        match ShellConfig::load(file.path()).unwrap_err() {
            ShellError::Config(msg) => {
                assert!(msg.starts_with(&file.path().display().to_string()));
            },
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "history_limit = 5\nseed_home = false").unwrap();
        let cfg = ShellConfig::load(file.path()).unwrap();
        assert_eq!(cfg.history_limit, 5);
        assert!(!cfg.seed_home);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ShellConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ShellError::Io(_)));
    }

    #[test]
    fn permits_without_restrictions() {
        let cfg = ShellConfig::default();
        assert!(cfg.permits("rm -rf /"));
    }

    #[test]
    fn permits_checks_command_name_only() {
        let cfg = ShellConfig {
            restricted_commands: Some(vec!["ls".into(), "cd".into()]),
            ..ShellConfig::default()
        };
        assert!(cfg.permits("ls -la /tmp"));
        assert!(cfg.permits("   "));
        assert!(!cfg.permits("rm file"));
    }
}
