//! Terminal front end: state containers, input mapping and rendering.

pub mod app;
pub mod detail;
pub mod events;
pub mod filter_form;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod notice;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
