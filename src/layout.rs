//! Region tracking for position-aware mouse interactions
//!
//! The renderer records where each component was drawn on the last frame;
//! `region_at()` maps a screen position back to the component under it.

use ratatui::layout::{Position, Rect};

/// Clickable component of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    InputField,
    SuggestionPanel,
}

/// Areas drawn on the last frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    pub input_field: Option<Rect>,
    pub suggestion_panel: Option<Rect>,
}

impl LayoutRegions {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Component at `(column, row)`; the panel wins where it overlaps the input
pub fn region_at(regions: &LayoutRegions, column: u16, row: u16) -> Option<Region> {
    let position = Position::new(column, row);
    let hit = |area: Option<Rect>| area.is_some_and(|a| a.contains(position));

    if hit(regions.suggestion_panel) {
        Some(Region::SuggestionPanel)
    } else if hit(regions.input_field) {
        Some(Region::InputField)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod layout_tests;
