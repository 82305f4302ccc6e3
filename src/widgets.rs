//! Reusable rendering pieces for the suggestion UI

pub mod popup;
pub mod suggestion_list;
