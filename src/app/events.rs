use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::mouse_click;
use super::state::App;
use crate::controller::NavKey;
use crate::layout::region_at;
use crate::source::SuggestionSource;

/// Map a terminal key to the navigation key the controller understands
pub fn nav_key(key: &KeyEvent) -> Option<NavKey> {
    match key.code {
        KeyCode::Down => Some(NavKey::ArrowDown),
        KeyCode::Up => Some(NavKey::ArrowUp),
        KeyCode::Enter => Some(NavKey::Enter),
        KeyCode::Esc => Some(NavKey::Escape),
        _ => None,
    }
}

/// Keys the textarea would turn into a line break
fn is_line_break(key: &KeyEvent) -> bool {
    key.code == KeyCode::Enter
        || (key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('m') | KeyCode::Char('j')))
}

impl<S: SuggestionSource> App<S> {
    /// Handle one terminal event. Returns true if the screen needs a redraw.
    pub fn handle_event(&mut self, event: Event) -> bool {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key_event(key);
                true
            }
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            Event::Resize(_, _) => true,
            _ => false,
        }
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Ctrl+C: Exit application
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // Ctrl+U: Clear the search field
        if key.code == KeyCode::Char('u') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.replace_text("");
            self.suggest.set_query("");
            return;
        }

        // Navigation keys go to the controller while the panel is open
        if let Some(nav) = nav_key(&key) {
            if self.suggest.handle_key(nav) {
                self.collect_selections();
                return;
            }
            if nav == NavKey::Escape {
                self.should_quit = true;
                return;
            }
        }

        // Single-line field
        if is_line_break(&key) {
            return;
        }

        if self.textarea.input(key) {
            let text = self.query().to_string();
            if text != self.suggest.query() {
                self.suggest.set_query(&text);
            }
        }
    }

    /// Handle mouse events. Returns true if the screen needs a redraw.
    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> bool {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let region = region_at(&self.layout_regions, mouse.column, mouse.row);
                mouse_click::handle_click(self, region, mouse);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
