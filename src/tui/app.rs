//! TUI Application
//!
//! Key handling and the transitions between selections. Rendering lives in
//! `views`, the event loop in `runner`.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::{debug, info};

use super::state::{AppState, Focus, StatusLine, ToolRow};
use crate::launch::{self, Spawner};
use crate::registry::Registry;

/// Main TUI application
pub struct App {
    state: AppState,
    registry: Arc<Registry>,
}

impl App {
    /// Create a new application over a loaded registry
    pub fn new(registry: Arc<Registry>) -> Self {
        let mut state = AppState::new();
        state.projects = registry.list_projects().into_iter().map(String::from).collect();
        Self { state, registry }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    /// Request to quit
    pub fn quit(&mut self) {
        self.state.should_quit = true;
    }

    /// Handle a key press. Returns true when the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return true;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Tab | KeyCode::BackTab => self.state.focus = self.state.focus.toggle(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Right | KeyCode::Char('l') => self.cycle_version(true),
            KeyCode::Left | KeyCode::Char('h') => self.cycle_version(false),
            KeyCode::Enter => match self.state.focus {
                Focus::Projects => {
                    if !self.state.tool_rows.is_empty() {
                        self.state.focus = Focus::Tools;
                        if self.state.selected_tool.is_none() {
                            self.select_tool_at(0);
                        }
                    }
                }
                Focus::Tools => self.request_launch(),
            },
            _ => {}
        }

        self.state.should_quit
    }

    fn select_next(&mut self) {
        match self.state.focus {
            Focus::Projects => {
                if let Some(i) = next_index(self.state.selected_project, self.state.projects.len()) {
                    self.select_project_at(i);
                }
            }
            Focus::Tools => {
                if let Some(i) = next_index(self.state.selected_tool, self.state.tool_rows.len()) {
                    self.select_tool_at(i);
                }
            }
        }
    }

    fn select_prev(&mut self) {
        match self.state.focus {
            Focus::Projects => {
                if let Some(i) = prev_index(self.state.selected_project, self.state.projects.len()) {
                    self.select_project_at(i);
                }
            }
            Focus::Tools => {
                if let Some(i) = prev_index(self.state.selected_tool, self.state.tool_rows.len()) {
                    self.select_tool_at(i);
                }
            }
        }
    }

    /// Select a project and rebuild the tool table
    pub fn select_project_at(&mut self, index: usize) {
        let Some(name) = self.state.projects.get(index).cloned() else {
            return;
        };
        debug!("Project selected: {}", name);

        self.state.tool_rows = self
            .registry
            .list_tools(&name)
            .iter()
            .map(|r| ToolRow {
                tool_name: r.tool_name.clone(),
                version: r.version.clone(),
                pinned: r.version.clone(),
            })
            .collect();
        self.state.selected_project = Some(index);
        self.state.selected_tool = None;
        self.state.selection.select_project(name);
        self.refresh_preview();
    }

    /// Highlight a tool row
    pub fn select_tool_at(&mut self, index: usize) {
        let Some(row) = self.state.tool_rows.get(index) else {
            return;
        };
        self.state.selection.select_tool(row.tool_name.clone(), row.version.clone());
        self.state.selected_tool = Some(index);
        self.refresh_preview();
    }

    /// Step the highlighted tool through its known versions
    pub fn cycle_version(&mut self, forward: bool) {
        let (Some(index), Some(row)) = (self.state.selected_tool, self.state.selected_row()) else {
            return;
        };

        let versions = self.registry.list_versions(&row.tool_name);
        if versions.is_empty() {
            return;
        }
        let current = versions.iter().position(|v| *v == row.version);
        let next = if forward {
            next_index(current, versions.len())
        } else {
            prev_index(current, versions.len())
        };
        let Some(next) = next else {
            return;
        };

        let version = versions[next].clone();
        self.state.tool_rows[index].version = version.clone();
        self.state.selection.select_version(version);
        self.refresh_preview();
    }

    /// Queue the current selection for launch
    pub fn request_launch(&mut self) {
        match self.state.selection.launch_target() {
            Some((tool, version)) => {
                self.state.pending_launch = Some((tool.to_string(), version.to_string()));
            }
            None => {
                self.state.status = Some(StatusLine::info("Select a tool to launch"));
            }
        }
    }

    /// Launch whatever `request_launch` queued, reporting into the status line
    pub fn process_pending_launch(&mut self, spawner: &dyn Spawner) {
        let Some((tool, version)) = self.state.pending_launch.take() else {
            return;
        };

        let result = self
            .registry
            .resolve_launch_command(&tool, &version)
            .and_then(|command| launch::launch(spawner, &command));

        self.state.status = Some(match result {
            Ok(launched) => {
                info!("TUI launched {} {}", launched.tool, launched.version);
                match launched.pid {
                    Some(pid) => StatusLine::success(format!("Launched {} {} (pid {})", tool, version, pid)),
                    None => StatusLine::success(format!("Launched {} {}", tool, version)),
                }
            }
            Err(e) => StatusLine::error(e.to_string()),
        });
    }

    fn refresh_preview(&mut self) {
        let target = self.state.selection.launch_target();
        self.state.command_preview = target.map(|(tool, version)| {
            match self.registry.resolve_launch_command(tool, version) {
                Ok(command) => command.to_string(),
                Err(e) => e.to_string(),
            }
        });
        self.state.icon_preview = target.and_then(|(tool, _)| self.registry.icon_path(tool).map(String::from));
    }
}

fn next_index(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match current {
        None => 0,
        Some(i) if i + 1 >= len => 0,
        Some(i) => i + 1,
    })
}

fn prev_index(current: Option<usize>, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(match current {
        None | Some(0) => len - 1,
        Some(i) => i - 1,
    })
}
