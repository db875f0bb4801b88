//! Frame rendering.
//!
//! Responsibilities:
//! - Render the header, entry table, footer hints, editor popup, and toasts.
//!
//! Does NOT handle:
//! - State mutations; rendering is read-only apart from the table state.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState},
};

use keymapper_core::format::{format_context, format_entry, input_expr, output_expr};

use crate::app::{App, EditorField, FOOTER_HEIGHT, HEADER_HEIGHT};
use crate::ui::toast::render_toasts;

impl App {
    /// Render the full frame.
    pub fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(f.area());

        self.render_header(f, chunks[0]);
        self.render_table(f, chunks[1]);
        self.render_footer(f, chunks[2]);

        if let Some(editor) = &self.editor {
            self.render_editor(f, editor);
        }

        render_toasts(f, &self.toasts, &self.theme);
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let context_line = match format_context(&self.context) {
            Some(line) => line,
            None => "(default context)".to_string(),
        };
        let context_suffix = if self.editing_context_value {
            Span::styled(
                "  [editing value]",
                Style::default().fg(self.theme.warning),
            )
        } else {
            Span::raw("")
        };

        let lines = vec![
            Line::from(vec![
                Span::styled("Context: ", Style::default().fg(self.theme.text_dim)),
                Span::styled(context_line, Style::default().fg(self.theme.accent)),
                context_suffix,
            ]),
            Line::from(vec![
                Span::styled("Config:  ", Style::default().fg(self.theme.text_dim)),
                Span::raw(self.config_path.display().to_string()),
                Span::styled(
                    if self.busy { "  [working...]" } else { "" },
                    Style::default().fg(self.theme.warning),
                ),
            ]),
        ];

        let header = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(self.theme.border))
                .title(Span::styled(
                    " Keymapper ",
                    Style::default()
                        .fg(self.theme.title)
                        .add_modifier(Modifier::BOLD),
                )),
        );
        f.render_widget(header, area);
    }

    fn render_table(&self, f: &mut Frame, area: Rect) {
        let header = Row::new(vec![
            Cell::from("#"),
            Cell::from("Kind"),
            Cell::from("Input"),
            Cell::from("Kind"),
            Cell::from("Output"),
            Cell::from("Rendered"),
        ])
        .style(
            Style::default()
                .fg(self.theme.table_header_fg)
                .bg(self.theme.table_header_bg)
                .add_modifier(Modifier::BOLD),
        );

        let rows: Vec<Row> = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                Row::new(vec![
                    Cell::from((i + 1).to_string()),
                    Cell::from(entry.input_kind.as_str()),
                    Cell::from(entry.input.clone()),
                    Cell::from(entry.output_kind.as_str()),
                    Cell::from(entry.output.clone()),
                    Cell::from(format_entry(entry)),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(4),
                Constraint::Length(14),
                Constraint::Percentage(20),
                Constraint::Length(14),
                Constraint::Percentage(20),
                Constraint::Min(20),
            ],
        )
        .header(header)
        .row_highlight_style(
            Style::default()
                .fg(self.theme.highlight_fg)
                .bg(self.theme.highlight_bg),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(self.theme.border))
                .title(format!(" Mappings ({}) ", self.entries.len())),
        );

        let mut state = TableState::default();
        if !self.entries.is_empty() {
            state.select(Some(self.selected));
        }
        f.render_stateful_widget(table, area, &mut state);
    }

    fn render_footer(&self, f: &mut Frame, area: Rect) {
        let hints = if self.editor.is_some() {
            "Enter commit | Esc cancel | Tab field | → kind | Ctrl-R capture key"
        } else if self.editing_context_value {
            "type context value | Enter/Esc done"
        } else {
            "a add | e edit | d del | c/v context | w append | l load | s/o json | r apply | R restart | f stop-on-fail | t theme | q quit"
        };

        let footer = Paragraph::new(Line::from(Span::styled(
            hints,
            Style::default().fg(self.theme.text_dim),
        )));
        f.render_widget(footer, area);
    }

    fn render_editor(&self, f: &mut Frame, editor: &crate::app::EntryEditor) {
        let area = centered_rect(70, 9, f.area());
        f.render_widget(Clear, area);

        let field_line = |label: &str, kind: &str, text: &str, focused: bool| {
            let marker = if focused { "> " } else { "  " };
            let style = if focused {
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(self.theme.text)
            };
            Line::from(vec![
                Span::styled(format!("{marker}{label} "), style),
                Span::styled(
                    format!("[{kind}] "),
                    Style::default().fg(self.theme.text_dim),
                ),
                Span::styled(text.to_string(), style),
            ])
        };

        let mut lines = vec![
            field_line(
                "Input: ",
                editor.entry.input_kind.as_str(),
                &editor.entry.input,
                editor.focus == EditorField::Input,
            ),
            field_line(
                "Output:",
                editor.entry.output_kind.as_str(),
                &editor.entry.output,
                editor.focus == EditorField::Output,
            ),
            Line::from(""),
            Line::from(Span::styled(
                format!(
                    "Preview: {} >> {}",
                    input_expr(editor.entry.input_kind, &editor.entry.input),
                    output_expr(editor.entry.output_kind, &editor.entry.output),
                ),
                Style::default().fg(self.theme.text_dim),
            )),
        ];
        if editor.capture_armed {
            lines.push(Line::from(Span::styled(
                "Press a key to capture...",
                Style::default()
                    .fg(self.theme.warning)
                    .add_modifier(Modifier::BOLD),
            )));
        }

        let title = if editor.index.is_some() {
            " Edit Mapping "
        } else {
            " New Mapping "
        };
        let popup = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(self.theme.accent))
                .title(title),
        );
        f.render_widget(popup, area);
    }
}

/// A rectangle of the given percentage width and fixed height, centered in
/// `area`.
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let width = area.width * percent_x / 100;
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect {
        x,
        y,
        width,
        height: height.min(area.height),
    }
}
