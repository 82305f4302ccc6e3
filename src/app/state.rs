use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

use crate::controller::{SuggestEvent, SuggestionController};
use crate::layout::LayoutRegions;
use crate::source::SuggestionSource;

/// Application state: one search field bound to one suggestion controller
pub struct App<S: SuggestionSource> {
    pub textarea: TextArea<'static>,
    pub suggest: SuggestionController<S>,
    pub should_quit: bool,
    /// Last committed suggestion, shown in the footer
    pub last_selected: Option<String>,
    /// Startup warning (e.g. unreadable config), shown in the footer
    pub warning: Option<String>,
    pub layout_regions: LayoutRegions,
}

impl<S: SuggestionSource> App<S> {
    pub fn new(suggest: SuggestionController<S>, warning: Option<String>) -> Self {
        let mut textarea = TextArea::default();

        // Remove default underline from cursor line
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text("Type to search words...");

        Self {
            textarea,
            suggest,
            should_quit: false,
            last_selected: None,
            warning,
            layout_regions: LayoutRegions::default(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Current text of the search field
    pub fn query(&self) -> &str {
        self.textarea.lines().first().map(String::as_str).unwrap_or("")
    }

    /// Replace the search field text without notifying the controller
    pub(super) fn replace_text(&mut self, text: &str) {
        self.textarea.move_cursor(CursorMove::End);
        self.textarea.delete_line_by_head();
        self.textarea.insert_str(text);
    }

    /// Pull the controller's query into the field after a commit
    pub(super) fn sync_from_controller(&mut self) {
        if self.query() != self.suggest.query() {
            let committed = self.suggest.query().to_string();
            self.replace_text(&committed);
        }
    }

    /// Advance the controller and collect committed selections
    ///
    /// Returns true if the screen needs a redraw.
    pub fn on_tick(&mut self) -> bool {
        let changed = self.suggest.tick();
        self.collect_selections() || changed
    }

    /// Drain selection events, keeping the field in step with the controller
    pub(super) fn collect_selections(&mut self) -> bool {
        let mut changed = false;
        for event in self.suggest.take_events() {
            match event {
                SuggestEvent::Selected(text) => {
                    self.last_selected = Some(text);
                    changed = true;
                }
            }
        }
        self.sync_from_controller();
        changed
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
