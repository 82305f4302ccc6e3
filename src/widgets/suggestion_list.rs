//! Suggestion panel rendering
//!
//! Draws the panel under the search field: a status message while loading,
//! on error, or when nothing matched, otherwise one row per suggestion with
//! the matched text emphasised.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::controller::SuggestionController;
use crate::highlight::highlight;
use crate::source::SuggestionSource;
use crate::widgets::popup;

pub const LOADING_MESSAGE: &str = "Loading suggestions...";
pub const ERROR_MESSAGE: &str = "Error loading suggestions";
pub const EMPTY_MESSAGE: &str = "No results found.";

const MAX_VISIBLE_SUGGESTIONS: usize = 10;
const PANEL_BORDER_HEIGHT: u16 = 2;
const SELECTED_MARKER: &str = "► ";
const UNSELECTED_MARKER: &str = "  ";

/// What the panel shows for the current controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelView<'a> {
    Loading,
    Error,
    Empty,
    Results {
        suggestions: &'a [String],
        query: &'a str,
        selected: Option<usize>,
    },
}

impl<'a> PanelView<'a> {
    /// Panel contents, or `None` while the panel is closed
    pub fn from_controller<S: SuggestionSource>(
        controller: &'a SuggestionController<S>,
    ) -> Option<Self> {
        if !controller.is_open() {
            return None;
        }
        if controller.is_loading() {
            return Some(PanelView::Loading);
        }
        if controller.error().is_some() {
            return Some(PanelView::Error);
        }
        if controller.suggestions().is_empty() {
            return Some(PanelView::Empty);
        }
        Some(PanelView::Results {
            suggestions: controller.suggestions(),
            query: controller.query(),
            selected: controller.selected_index(),
        })
    }

    /// Rows of content, not counting the border
    pub fn row_count(&self) -> usize {
        match self {
            PanelView::Results { suggestions, .. } => {
                suggestions.len().min(MAX_VISIBLE_SUGGESTIONS)
            }
            _ => 1,
        }
    }

    pub fn height(&self) -> u16 {
        self.row_count() as u16 + PANEL_BORDER_HEIGHT
    }
}

/// Build one suggestion row with highlighted matches
pub fn suggestion_line<'a>(candidate: &'a str, query: &str, is_selected: bool) -> Line<'a> {
    let (base, matched) = if is_selected {
        let base = Style::default().fg(Color::Black).bg(Color::Cyan);
        (
            base,
            base.add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
    } else {
        let base = Style::default().fg(Color::White);
        (base, base.fg(Color::Yellow).add_modifier(Modifier::BOLD))
    };

    let marker = if is_selected { SELECTED_MARKER } else { UNSELECTED_MARKER };
    let mut spans = vec![Span::styled(marker, base)];
    spans.extend(highlight(candidate, query).into_iter().map(|segment| {
        let style = if segment.is_match { matched } else { base };
        Span::styled(segment.text, style)
    }));

    Line::from(spans)
}

/// Render the panel below `input_area` and return the area it occupies
pub fn render_panel(frame: &mut Frame, input_area: Rect, view: PanelView<'_>) -> Rect {
    let panel_area = popup::popup_below_anchor(
        input_area,
        frame.area(),
        input_area.width,
        view.height(),
        0,
    );
    if panel_area.height == 0 {
        return panel_area;
    }

    popup::clear_area(frame, panel_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    match view {
        PanelView::Results {
            suggestions,
            query,
            selected,
        } => {
            let items: Vec<ListItem> = suggestions
                .iter()
                .take(MAX_VISIBLE_SUGGESTIONS)
                .enumerate()
                .map(|(i, suggestion)| {
                    ListItem::new(suggestion_line(suggestion, query, selected == Some(i)))
                })
                .collect();

            frame.render_widget(List::new(items).block(block), panel_area);
        }
        PanelView::Loading => {
            let message = Paragraph::new(LOADING_MESSAGE)
                .block(block)
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(message, panel_area);
        }
        PanelView::Error => {
            let message = Paragraph::new(ERROR_MESSAGE)
                .block(block)
                .style(Style::default().fg(Color::Red));
            frame.render_widget(message, panel_area);
        }
        PanelView::Empty => {
            let message = Paragraph::new(EMPTY_MESSAGE)
                .block(block)
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(message, panel_area);
        }
    }

    panel_area
}

/// Suggestion index under a screen row, if the row is inside the list
pub fn row_at(panel_area: Rect, view: PanelView<'_>, row: u16) -> Option<usize> {
    let PanelView::Results { .. } = view else {
        return None;
    };
    let first_row = panel_area.y + 1;
    let last_row = panel_area.bottom().saturating_sub(1);
    if row < first_row || row >= last_row {
        return None;
    }

    let index = (row - first_row) as usize;
    (index < view.row_count()).then_some(index)
}

#[cfg(test)]
#[path = "suggestion_list_tests.rs"]
mod suggestion_list_tests;
