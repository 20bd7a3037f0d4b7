//! Application state for the TUI.
//!
//! - `AppState`: everything the views render
//! - `Focus`: which pane receives navigation keys
//! - `StatusLine`: last message shown at the bottom

use crate::selection::Selection;

/// The primary application state.
///
/// Owned by `App` and updated in response to key events.
#[derive(Debug, Default)]
pub struct AppState {
    /// Project names in display order
    pub projects: Vec<String>,
    /// Highlighted project row
    pub selected_project: Option<usize>,

    /// Tool rows of the selected project
    pub tool_rows: Vec<ToolRow>,
    /// Highlighted tool row
    pub selected_tool: Option<usize>,

    /// Which pane has focus
    pub focus: Focus,
    /// Current project/tool/version selection
    pub selection: Selection,
    /// Preview of the command Enter would run
    pub command_preview: Option<String>,
    /// Icon of the highlighted tool
    pub icon_preview: Option<String>,

    /// Status message
    pub status: Option<StatusLine>,
    /// Launch requested by the user, handled by the runner
    pub pending_launch: Option<(String, String)>,
    /// Whether the application should quit
    pub should_quit: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_row(&self) -> Option<&ToolRow> {
        self.selected_tool.and_then(|i| self.tool_rows.get(i))
    }
}

/// A row of the tool table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolRow {
    pub tool_name: String,
    /// Version currently chosen for this row
    pub version: String,
    /// Version pinned by the project
    pub pinned: String,
}

impl ToolRow {
    /// Whether the user moved away from the project's pin
    pub fn is_overridden(&self) -> bool {
        self.version != self.pinned
    }
}

/// Pane with keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Projects,
    Tools,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::Projects => Focus::Tools,
            Focus::Tools => Focus::Projects,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusLine {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}
