//! Terminal browser for the Rick and Morty character API.
//!
//! The list, detail and filter form are independent state containers driven
//! by pure reducers; HTTP runs on a background gateway worker.

pub mod api;
pub mod characters;
pub mod config;
pub mod logging;
pub mod mvi;
pub mod ui;
