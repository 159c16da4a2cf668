//! The uniform result every command returns.

use serde::Serialize;

/// Outcome of one `execute` call.
///
/// Serialized with the field names the terminal front end reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommandResult {
    pub success: bool,
    pub output: String,
    /// Set on failures and on partial failures such as `cat a missing`.
    #[serde(rename = "error")]
    pub is_error: bool,
    #[serde(rename = "editorMode")]
    pub editor_mode_active: bool,
    #[serde(rename = "clearScreen")]
    pub clear_screen_requested: bool,
}

impl CommandResult {
    /// Successful result with text output.
    pub fn ok(output: impl Into<String>) -> Self {
        Self {
            success: true,
            output: output.into(),
            ..Self::default()
        }
    }

    /// Successful result with no output.
    pub fn empty() -> Self {
        Self::ok(String::new())
    }

    /// Failed result carrying an error message.
    pub fn failure(output: impl Into<String>) -> Self {
        Self {
            success: false,
            output: output.into(),
            is_error: true,
            ..Self::default()
        }
    }

    /// Successful output that also reports errors for some targets.
    pub fn partial(output: impl Into<String>) -> Self {
        Self {
            is_error: true,
            ..Self::ok(output)
        }
    }

    pub(crate) fn in_editor(mut self, active: bool) -> Self {
        self.editor_mode_active = active;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors() {
        assert!(CommandResult::ok("x").success);
        assert!(!CommandResult::ok("x").is_error);
        let f = CommandResult::failure("bad");
        assert!(!f.success && f.is_error);
        let p = CommandResult::partial("half");
        assert!(p.success && p.is_error);
        assert_eq!(CommandResult::empty().output, "");
    }

    #[test]
    fn serializes_with_wire_names() {
        let r = CommandResult::ok("hi").in_editor(true);
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["output"], "hi");
        assert_eq!(json["error"], false);
        assert_eq!(json["editorMode"], true);
        assert_eq!(json["clearScreen"], false);
    }
}
