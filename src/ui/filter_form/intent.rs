use crate::api::FilterSet;
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum FilterFormIntent {
    /// Show the form pre-filled with `initial`.
    Open { initial: FilterSet },
    Close,
    FocusNext,
    FocusPrev,
    /// Typed character; only the name field accepts text.
    Input(char),
    Backspace,
    /// Next option of the focused choice field.
    CycleNext,
    /// Previous option of the focused choice field.
    CyclePrev,
}

impl Intent for FilterFormIntent {}
