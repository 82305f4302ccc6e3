//! Keyboard selection over the suggestion list

/// Selected suggestion index, if any
///
/// Movement is clamped at both ends; nothing wraps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    index: Option<usize>,
}

impl Selection {
    pub fn new() -> Self {
        Self { index: None }
    }

    pub fn clear(&mut self) {
        self.index = None;
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Move towards the end of a list of `len` items
    ///
    /// No selection moves to the first item; the last item stays selected.
    pub fn move_down(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = Some(match self.index {
            Some(current) => (current + 1).min(len - 1),
            None => 0,
        });
    }

    /// Move towards the start of a list of `len` items
    ///
    /// The first item stays selected rather than returning to no selection.
    /// With no selection, the first item becomes selected.
    pub fn move_up(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = Some(match self.index {
            Some(current) => current.saturating_sub(1).min(len - 1),
            None => 0,
        });
    }

    /// The selected item of `items`, if the index is in range
    pub fn selected<'a>(&self, items: &'a [String]) -> Option<&'a str> {
        self.index.and_then(|i| items.get(i)).map(String::as_str)
    }
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod selection_tests;
