use crate::api::Character;
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DetailIntent {
    /// Start loading character `id`.
    Open { id: u32 },
    /// Fetch for `id` finished.
    Loaded { id: u32, character: Character },
    /// Fetch for `id` failed.
    Failed { id: u32, message: String },
    Close,
}

impl Intent for DetailIntent {}
