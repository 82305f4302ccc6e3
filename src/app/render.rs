use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::state::App;
use crate::source::SuggestionSource;
use crate::widgets::suggestion_list::{self, PanelView};

const INPUT_HEIGHT: u16 = 3;
pub const KEY_HINTS: &str = "↑/↓ navigate  Enter select  Esc close  Ctrl+U clear  Ctrl+C quit";

impl<S: SuggestionSource> App<S> {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        self.layout_regions.clear();

        // Search field on top, footer on the last line, panel floats between
        let layout = Layout::vertical([
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

        let input_area = layout[0];
        let footer_area = layout[2];

        self.render_input_field(frame, input_area);
        self.render_footer(frame, footer_area);

        // Panel last so it draws over the footer on short terminals
        if let Some(view) = PanelView::from_controller(&self.suggest) {
            let panel_area = suggestion_list::render_panel(frame, input_area, view);
            if panel_area.height > 0 {
                self.layout_regions.suggestion_panel = Some(panel_area);
            }
        }
    }

    /// Render the search field (top)
    fn render_input_field(&mut self, frame: &mut Frame, area: Rect) {
        let border_color = if self.suggest.is_open() {
            Color::Cyan
        } else {
            Color::DarkGray
        };

        self.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search ")
                .border_style(Style::default().fg(border_color)),
        );

        frame.render_widget(&self.textarea, area);
        self.layout_regions.input_field = Some(area);
    }

    /// Render the footer: warning or last selection, then key hints
    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();

        if let Some(warning) = &self.warning {
            spans.push(Span::styled(
                format!("{}  ", warning),
                Style::default().fg(Color::Yellow),
            ));
        } else if let Some(selected) = &self.last_selected {
            spans.push(Span::styled(
                format!("Selected: {}  ", selected),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ));
        }
        spans.push(Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray)));

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
