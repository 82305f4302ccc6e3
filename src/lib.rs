//! Interactive word suggestions with debounced remote lookups
//!
//! The [`controller`] module holds the suggestion state machine; [`source`]
//! talks to the suggestion service; [`app`] and [`widgets`] render it in a
//! terminal.

pub mod app;
pub mod config;
pub mod controller;
pub mod error;
pub mod highlight;
pub mod layout;
pub mod source;
pub mod widgets;


#[cfg(test)]
#[path = "lib_tests.rs"]
mod lib_tests;
