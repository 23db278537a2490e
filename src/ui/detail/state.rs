use crate::api::Character;
use crate::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailState {
    #[default]
    Hidden,
    Loading {
        id: u32,
    },
    Loaded {
        character: Box<Character>,
    },
    Failed {
        id: u32,
        message: String,
    },
}

impl UiState for DetailState {}

impl DetailState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// Id of the character being loaded, if any.
    pub fn loading_id(&self) -> Option<u32> {
        match self {
            Self::Loading { id } => Some(*id),
            _ => None,
        }
    }
}
