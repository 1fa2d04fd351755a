//! Application shell: UI state, input handling, and effect routing.

pub mod action;
pub mod effects;
pub mod event;
pub mod handler;
pub mod state;
