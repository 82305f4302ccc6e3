//! Mouse click handling
//!
//! Clicking a suggestion row commits it; clicking anywhere outside the
//! search field and panel dismisses the suggestions.

use ratatui::crossterm::event::MouseEvent;

use super::state::App;
use crate::layout::Region;
use crate::source::SuggestionSource;
use crate::widgets::suggestion_list::{PanelView, row_at};

/// Handle left mouse button click for the given region
pub fn handle_click<S: SuggestionSource>(
    app: &mut App<S>,
    region: Option<Region>,
    mouse: MouseEvent,
) {
    match region {
        Some(Region::SuggestionPanel) => click_suggestion_panel(app, mouse.row),
        // Clicking into the field keeps the panel as it is
        Some(Region::InputField) => {}
        None => app.suggest.clear_all(),
    }
}

fn click_suggestion_panel<S: SuggestionSource>(app: &mut App<S>, row: u16) {
    let Some(panel_area) = app.layout_regions.suggestion_panel else {
        return;
    };
    let Some(view) = PanelView::from_controller(&app.suggest) else {
        return;
    };
    let Some(text) = row_at(panel_area, view, row)
        .and_then(|i| app.suggest.suggestions().get(i).cloned())
    else {
        return;
    };

    app.suggest.select_suggestion(&text);
    app.collect_selections();
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
