//! TUI Views
//!
//! Project list on the left, tool table and launch panel on the right,
//! status line at the bottom.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table, Wrap},
};

use super::colors;
use super::state::{AppState, Focus, StatusKind};

const PROJECT_PANE_WIDTH: u16 = 24;
const PLACEHOLDER: &str = "Select a project.";

/// Render the whole screen
pub fn render(state: &AppState, frame: &mut Frame) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(1), Constraint::Length(1)])
        .split(frame.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(PROJECT_PANE_WIDTH), Constraint::Min(30)])
        .split(outer[0]);

    frame.render_widget(
        Block::default().style(Style::default().bg(colors::BACKGROUND)),
        frame.area(),
    );

    render_projects(state, frame, columns[0]);
    render_tool_area(state, frame, columns[1]);
    render_status(state, frame, outer[1]);
    render_keybinds(frame, outer[2]);
}

fn pane_block(title: &str, focused: bool) -> Block<'_> {
    let border = if focused { colors::SELECTED } else { colors::BORDER };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(Span::styled(title, Style::default().fg(colors::TEXT)))
        .style(Style::default().bg(colors::PANEL).fg(colors::TEXT))
}

fn selected_style() -> Style {
    Style::default()
        .bg(colors::SELECTED)
        .fg(colors::SELECTED_TEXT)
        .add_modifier(Modifier::BOLD)
}

fn render_projects(state: &AppState, frame: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = state
        .projects
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let item = ListItem::new(Line::from(format!(" {}", name)));
            if state.selected_project == Some(i) {
                item.style(selected_style())
            } else {
                item
            }
        })
        .collect();

    let list = List::new(items).block(pane_block(" Projects ", state.focus == Focus::Projects));
    frame.render_widget(list, area);
}

fn render_tool_area(state: &AppState, frame: &mut Frame, area: Rect) {
    let focused = state.focus == Focus::Tools;

    if state.selected_project.is_none() {
        let placeholder = Paragraph::new(PLACEHOLDER)
            .style(Style::default().fg(colors::DIM))
            .block(pane_block(" Tools ", focused));
        frame.render_widget(placeholder, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(5)])
        .split(area);

    render_tool_table(state, frame, chunks[0], focused);
    render_launch_panel(state, frame, chunks[1]);
}

fn render_tool_table(state: &AppState, frame: &mut Frame, area: Rect, focused: bool) {
    let header = Row::new(vec![Cell::from("Name"), Cell::from("Version")])
        .style(Style::default().fg(colors::HEADER).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = state
        .tool_rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let version = if row.is_overridden() {
                format!("< {} >  (pinned {})", row.version, row.pinned)
            } else {
                format!("< {} >", row.version)
            };
            let r = Row::new(vec![Cell::from(row.tool_name.clone()), Cell::from(version)]);
            if state.selected_tool == Some(i) {
                r.style(selected_style())
            } else {
                r
            }
        })
        .collect();

    let title = match state.selection.project.as_deref() {
        Some(project) => format!(" {} ({}) ", project, state.tool_rows.len()),
        None => " Tools ".to_string(),
    };

    let table = Table::new(rows, [Constraint::Percentage(45), Constraint::Percentage(55)])
        .header(header)
        .block(pane_block(&title, focused));
    frame.render_widget(table, area);
}

fn render_launch_panel(state: &AppState, frame: &mut Frame, area: Rect) {
    let mut lines = Vec::new();
    match &state.command_preview {
        Some(preview) => {
            lines.push(Line::from(vec![
                Span::styled("Command: ", Style::default().fg(colors::DIM)),
                Span::raw(preview.clone()),
            ]));
            if let Some(icon) = &state.icon_preview {
                lines.push(Line::from(vec![
                    Span::styled("Icon:    ", Style::default().fg(colors::DIM)),
                    Span::raw(icon.clone()),
                ]));
            }
        }
        None => lines.push(Line::from(Span::styled(
            "Pick a tool, then press Enter to launch",
            Style::default().fg(colors::DIM),
        ))),
    }

    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(pane_block(" Launch ", false));
    frame.render_widget(panel, area);
}

fn render_status(state: &AppState, frame: &mut Frame, area: Rect) {
    let Some(status) = &state.status else {
        return;
    };
    let color = match status.kind {
        StatusKind::Info => colors::TEXT,
        StatusKind::Success => colors::SUCCESS,
        StatusKind::Error => colors::ERROR,
    };
    let line = Paragraph::new(format!(" {}", status.text)).style(Style::default().fg(color).bg(colors::BACKGROUND));
    frame.render_widget(line, area);
}

fn render_keybinds(frame: &mut Frame, area: Rect) {
    let key = Style::default().fg(colors::KEYBIND);
    let dim = Style::default().fg(colors::DIM);
    let line = Line::from(vec![
        Span::styled(" ↑↓", key),
        Span::styled(" move  ", dim),
        Span::styled("Tab", key),
        Span::styled(" pane  ", dim),
        Span::styled("←→", key),
        Span::styled(" version  ", dim),
        Span::styled("Enter", key),
        Span::styled(" launch  ", dim),
        Span::styled("q", key),
        Span::styled(" quit", dim),
    ]);
    frame.render_widget(Paragraph::new(line).style(Style::default().bg(colors::BACKGROUND)), area);
}
