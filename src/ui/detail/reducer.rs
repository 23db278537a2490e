use crate::mvi::Reducer;

use super::intent::DetailIntent;
use super::state::DetailState;

pub struct DetailReducer;

impl Reducer for DetailReducer {
    type State = DetailState;
    type Intent = DetailIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DetailIntent::Open { id } => DetailState::Loading { id },
            DetailIntent::Loaded { id, character } => {
                // Results for a panel that was closed or reopened are dropped
                if state.loading_id() == Some(id) {
                    DetailState::Loaded {
                        character: Box::new(character),
                    }
                } else {
                    state
                }
            }
            DetailIntent::Failed { id, message } => {
                if state.loading_id() == Some(id) {
                    DetailState::Failed { id, message }
                } else {
                    state
                }
            }
            DetailIntent::Close => DetailState::Hidden,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Character, CharacterStatus, NamedLink};

    fn morty() -> Character {
        Character {
            id: 2,
            name: "Morty Smith".into(),
            status: CharacterStatus::Alive,
            species: "Human".into(),
            kind: String::new(),
            gender: "Male".into(),
            origin: NamedLink::default(),
            location: NamedLink {
                name: "Citadel of Ricks".into(),
                url: String::new(),
            },
            image: "https://rickandmortyapi.com/api/character/avatar/2.jpeg".into(),
            episode: Vec::new(),
        }
    }

    #[test]
    fn open_starts_loading() {
        let state = DetailReducer::reduce(DetailState::Hidden, DetailIntent::Open { id: 2 });
        assert_eq!(state, DetailState::Loading { id: 2 });
        assert!(state.is_visible());
    }

    #[test]
    fn loaded_for_current_id_shows_character() {
        let state = DetailReducer::reduce(
            DetailState::Loading { id: 2 },
            DetailIntent::Loaded {
                id: 2,
                character: morty(),
            },
        );
        match state {
            DetailState::Loaded { character } => assert_eq!(character.name, "Morty Smith"),
            other => panic!("Expected Loaded, got {other:?}"),
        }
    }

    #[test]
    fn loaded_for_other_id_is_ignored() {
        let state = DetailReducer::reduce(
            DetailState::Loading { id: 5 },
            DetailIntent::Loaded {
                id: 2,
                character: morty(),
            },
        );
        assert_eq!(state, DetailState::Loading { id: 5 });
    }

    #[test]
    fn late_result_after_close_is_ignored() {
        let state = DetailReducer::reduce(
            DetailState::Hidden,
            DetailIntent::Failed {
                id: 2,
                message: "boom".into(),
            },
        );
        assert_eq!(state, DetailState::Hidden);
    }

    #[test]
    fn failure_is_kept_inline() {
        let state = DetailReducer::reduce(
            DetailState::Loading { id: 9 },
            DetailIntent::Failed {
                id: 9,
                message: "Request failed with status code 404".into(),
            },
        );
        assert_eq!(
            state,
            DetailState::Failed {
                id: 9,
                message: "Request failed with status code 404".into()
            }
        );
    }

    #[test]
    fn close_hides_panel() {
        let state = DetailReducer::reduce(DetailState::Loading { id: 1 }, DetailIntent::Close);
        assert!(!state.is_visible());
    }
}
