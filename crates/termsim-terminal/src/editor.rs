//! The `ai-edit` line editor.
//!
//! While a session is editing, every input line is one keystroke name
//! (`enter`, `ctrl+s`, `left`, ...) or a single printable character. Each
//! keystroke returns the whole editor view re-rendered.

use termsim_types::error::{Result, ShellError};
use termsim_vfs::{EntryKind, Vfs};

use crate::result::CommandResult;

const EDITOR_HELP: &str = "Editor Help:
- Arrow keys: Move cursor
- Home/End: Move to line start/end
- Enter: Insert new line
- Backspace/Delete: Delete characters
- Tab: Insert tab
- Ctrl+S: Save file
- Ctrl+X: Save and exit
- Ctrl+Z: Exit without saving
- Ctrl+H: Show this help";

const TAB_WIDTH: usize = 4;
const TEXT_WIDTH: usize = 70;

/// A keystroke understood by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKey {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    FileStart,
    FileEnd,
    Save,
    SaveAndExit,
    Discard,
    Help,
}

impl EditorKey {
    /// Parse one line of input. Key names are case-insensitive.
    ///
    /// Returns `None` for input that is neither a key name nor a single
    /// printable ASCII character.
    pub fn parse(input: &str) -> Option<Self> {
        let key = match input.trim().to_ascii_lowercase().as_str() {
            "enter" => Self::Enter,
            "backspace" => Self::Backspace,
            "delete" => Self::Delete,
            "tab" => Self::Tab,
            "up" => Self::Up,
            "down" => Self::Down,
            "left" => Self::Left,
            "right" => Self::Right,
            "home" => Self::Home,
            "end" => Self::End,
            "pageup" => Self::PageUp,
            "pagedown" => Self::PageDown,
            "ctrl+home" => Self::FileStart,
            "ctrl+end" => Self::FileEnd,
            "ctrl+s" => Self::Save,
            "ctrl+x" => Self::SaveAndExit,
            "ctrl+z" => Self::Discard,
            "ctrl+h" => Self::Help,
            _ => {
                let mut chars = input.chars();
                return match (chars.next(), chars.next()) {
                    (Some(c), None) if (' '..='~').contains(&c) => Some(Self::Char(c)),
                    _ => None,
                };
            },
        };
        Some(key)
    }
}

/// Whether the editor is still open after a keystroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorStatus {
    Open,
    Closed,
}

/// Cursor position, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

/// Buffer and cursor of the file being edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    /// Absolute path written on save.
    pub target_path: String,
    /// The name as the user typed it, shown in the header.
    pub display_name: String,
    lines: Vec<String>,
    cursor: Position,
    modified: bool,
    is_new_file: bool,
}

impl EditorState {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn is_new_file(&self) -> bool {
        self.is_new_file
    }

    /// The buffer as it will be written.
    pub fn content(&self) -> String {
        self.lines.join("\n")
    }

    fn line_len(&self, line: usize) -> usize {
        self.lines.get(line).map_or(0, |l| l.chars().count())
    }

    fn current_len(&self) -> usize {
        self.line_len(self.cursor.line)
    }

    fn move_to_line(&mut self, line: usize) {
        self.cursor.line = line.min(self.lines.len().saturating_sub(1));
        self.cursor.col = self.cursor.col.min(self.current_len());
    }

    fn insert_str(&mut self, text: &str) {
        let Position { line, col } = self.cursor;
        let at = byte_offset(&self.lines[line], col);
        self.lines[line].insert_str(at, text);
        self.cursor.col += text.chars().count();
        self.modified = true;
    }

    fn insert_newline(&mut self) {
        let Position { line, col } = self.cursor;
        let at = byte_offset(&self.lines[line], col);
        let rest = self.lines[line].split_off(at);
        self.lines.insert(line + 1, rest);
        self.cursor = Position {
            line: line + 1,
            col: 0,
        };
        self.modified = true;
    }

    fn backspace(&mut self) {
        let Position { line, col } = self.cursor;
        if col == 0 {
            return;
        }
        let at = byte_offset(&self.lines[line], col - 1);
        self.lines[line].remove(at);
        self.cursor.col -= 1;
        self.modified = true;
    }

    fn delete(&mut self) {
        let Position { line, col } = self.cursor;
        if col >= self.current_len() {
            return;
        }
        let at = byte_offset(&self.lines[line], col);
        self.lines[line].remove(at);
        self.modified = true;
    }
}

fn byte_offset(line: &str, col: usize) -> usize {
    line.char_indices().nth(col).map_or(line.len(), |(i, _)| i)
}

/// Upper bound on the rendered window, whatever the configuration asks for.
pub const MAX_WINDOW_LINES: usize = 200;

/// An open editing session over one file.
#[derive(Debug, Clone)]
pub struct LineEditor {
    state: EditorState,
    window_lines: usize,
}

impl LineEditor {
    /// Open `target_path` for editing.
    ///
    /// A missing file starts as an empty, already-modified buffer. A
    /// directory is rejected.
    pub fn open(
        vfs: &dyn Vfs,
        target_path: &str,
        display_name: &str,
        window_lines: usize,
    ) -> Result<Self> {
        let (content, is_new_file) = match vfs.kind(target_path) {
            Some(EntryKind::Directory) => {
                return Err(ShellError::IsADirectory(target_path.to_string()));
            },
            Some(EntryKind::File) => (vfs.read_file(target_path)?, false),
            None => (String::new(), true),
        };
        log::info!("editing {target_path}");
        Ok(Self {
            state: EditorState {
                target_path: target_path.to_string(),
                display_name: display_name.to_string(),
                lines: content.split('\n').map(str::to_string).collect(),
                cursor: Position::default(),
                modified: is_new_file,
                is_new_file,
            },
            window_lines: window_lines.clamp(1, MAX_WINDOW_LINES),
        })
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// Apply one input line.
    pub fn handle(&mut self, input: &str, vfs: &mut dyn Vfs) -> (CommandResult, EditorStatus) {
        let Some(key) = EditorKey::parse(input) else {
            return self.with_view(EDITOR_HELP);
        };
        let state = &mut self.state;
        match key {
            EditorKey::Char(c) => state.insert_str(c.encode_utf8(&mut [0; 4])),
            EditorKey::Tab => state.insert_str(&" ".repeat(TAB_WIDTH)),
            EditorKey::Enter => state.insert_newline(),
            EditorKey::Backspace => state.backspace(),
            EditorKey::Delete => state.delete(),
            EditorKey::Up => {
                if state.cursor.line > 0 {
                    state.move_to_line(state.cursor.line - 1);
                }
            },
            EditorKey::Down => state.move_to_line(state.cursor.line + 1),
            EditorKey::Left => state.cursor.col = state.cursor.col.saturating_sub(1),
            EditorKey::Right => state.cursor.col = (state.cursor.col + 1).min(state.current_len()),
            EditorKey::Home => state.cursor.col = 0,
            EditorKey::End => state.cursor.col = state.current_len(),
            EditorKey::PageUp => {
                let target = state.cursor.line.saturating_sub(self.window_lines);
                state.move_to_line(target);
            },
            EditorKey::PageDown => {
                let target = state.cursor.line.saturating_add(self.window_lines);
                state.move_to_line(target);
            },
            EditorKey::FileStart => state.cursor = Position::default(),
            EditorKey::FileEnd => {
                state.cursor.line = state.lines.len().saturating_sub(1);
                state.cursor.col = state.current_len();
            },
            EditorKey::Help => return self.with_view(EDITOR_HELP),
            EditorKey::Save => {
                return match self.save(vfs) {
                    Ok(msg) => self.with_view(&msg),
                    Err(e) => self.save_failed(e),
                };
            },
            EditorKey::SaveAndExit => {
                return match self.save(vfs) {
                    Ok(msg) => (
                        CommandResult::ok(format!("{msg}\nExited editor mode.")),
                        EditorStatus::Closed,
                    ),
                    Err(e) => self.save_failed(e),
                };
            },
            EditorKey::Discard => {
                log::info!("discarded edits to {}", self.state.target_path);
                return (CommandResult::ok("Exited editor mode."), EditorStatus::Closed);
            },
        }
        (
            CommandResult::ok(self.render()).in_editor(true),
            EditorStatus::Open,
        )
    }

    fn save(&mut self, vfs: &mut dyn Vfs) -> Result<String> {
        vfs.write_file(&self.state.target_path, &self.state.content())?;
        self.state.modified = false;
        self.state.is_new_file = false;
        log::info!("saved {}", self.state.target_path);
        Ok(format!("File saved: {}", self.state.display_name))
    }

    fn save_failed(&self, e: ShellError) -> (CommandResult, EditorStatus) {
        let msg = format!(
            "ai-edit: cannot save '{}': {}\n{}",
            self.state.display_name,
            e.reason(),
            self.render()
        );
        (CommandResult::failure(msg).in_editor(true), EditorStatus::Open)
    }

    fn with_view(&self, message: &str) -> (CommandResult, EditorStatus) {
        (
            CommandResult::ok(format!("{message}\n{}", self.render())).in_editor(true),
            EditorStatus::Open,
        )
    }

    /// Render the header, visible window, status bar, and shortcut legend.
    pub fn render(&self) -> String {
        let s = &self.state;
        let yes_no = if s.modified { "Yes" } else { "No" };
        let size = if s.is_new_file {
            "(New File)".to_string()
        } else {
            format!("({} lines)", s.lines.len())
        };

        let mut out = String::from("\n");
        out.push_str("┌─────────────────────────────────────────────────────────────────────────────┐\n");
        out.push_str("│ AI-Edit Text Editor v1.0 - Interactive Mode                                 │\n");
        out.push_str("└─────────────────────────────────────────────────────────────────────────────┘\n");
        out.push('\n');
        out.push_str(&format!(
            "File: {} {size} | Modified: {yes_no}\n",
            s.display_name
        ));
        out.push('\n');

        out.push_str("┌─ Editor Content ───────────────────────────────────────────────────────────┐\n");
        let start = s.cursor.line.saturating_sub(self.window_lines / 2);
        let stop = start.saturating_add(self.window_lines);
        let end = s.lines.len().min(stop);
        for i in start..stop {
            let text = if i < end {
                self.display_line(i)
            } else {
                String::new()
            };
            out.push_str(&format!("│ {:>3} │ {text:<TEXT_WIDTH$} │\n", i + 1));
        }
        out.push_str("└─────────────────────────────────────────────────────────────────────────────┘\n");
        out.push('\n');

        out.push_str("┌─ Status Bar ───────────────────────────────────────────────────────────────┐\n");
        out.push_str(&format!(
            "│ Line: {:>3}, Col: {:>3}    Modified: {yes_no}    File: {:<25} │\n",
            s.cursor.line + 1,
            s.cursor.col + 1,
            s.display_name
        ));
        out.push_str("└─────────────────────────────────────────────────────────────────────────────┘\n");
        out.push('\n');

        out.push_str("┌─ Common Editor Shortcuts ──────────────────────────────────────────────────┐\n");
        out.push_str("│ Ctrl+C [COPY]  Ctrl+V [CUT]  Ctrl+P [PASTE]  Ctrl+F [FIND]                │\n");
        out.push_str("│ Ctrl+X [SAVE&EXIT]  Ctrl+S [SAVE]  Ctrl+U [UNDO]  Ctrl+Z [CLOSE]          │\n");
        out.push_str("└─────────────────────────────────────────────────────────────────────────────┘\n");
        out.push('\n');
        out.push_str("Type commands or text to edit. Use Ctrl+Z to exit editor.\n");
        out
    }

    /// A buffer line, with `[c]` marking the cursor on the cursor line.
    fn display_line(&self, i: usize) -> String {
        let line = &self.state.lines[i];
        if i != self.state.cursor.line {
            return line.clone();
        }
        let chars: Vec<char> = line.chars().collect();
        let col = self.state.cursor.col.min(chars.len());
        let before: String = chars[..col].iter().collect();
        let at = chars.get(col).copied().unwrap_or(' ');
        let after: String = chars.get(col + 1..).map(|r| r.iter().collect()).unwrap_or_default();
        format!("{before}[{at}]{after}")
    }
}
