use crate::mvi::Reducer;

use super::intent::FilterFormIntent;
use super::state::{FilterField, FilterFormState};

pub struct FilterFormReducer;

impl Reducer for FilterFormReducer {
    type State = FilterFormState;
    type Intent = FilterFormIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FilterFormIntent::Open { initial } => FilterFormState::Visible {
                values: initial,
                focused: FilterField::Name,
            },
            FilterFormIntent::Close => FilterFormState::Hidden,
            FilterFormIntent::FocusNext => match state {
                FilterFormState::Visible { values, focused } => FilterFormState::Visible {
                    values,
                    focused: focused.next(),
                },
                other => other,
            },
            FilterFormIntent::FocusPrev => match state {
                FilterFormState::Visible { values, focused } => FilterFormState::Visible {
                    values,
                    focused: focused.prev(),
                },
                other => other,
            },
            FilterFormIntent::Input(ch) => match state {
                FilterFormState::Visible {
                    mut values,
                    focused: FilterField::Name,
                } => {
                    if !ch.is_control() {
                        values.name.push(ch);
                    }
                    FilterFormState::Visible {
                        values,
                        focused: FilterField::Name,
                    }
                }
                other => other,
            },
            FilterFormIntent::Backspace => match state {
                FilterFormState::Visible {
                    mut values,
                    focused: FilterField::Name,
                } => {
                    values.name.pop();
                    FilterFormState::Visible {
                        values,
                        focused: FilterField::Name,
                    }
                }
                other => other,
            },
            FilterFormIntent::CycleNext => cycle(state, 1),
            FilterFormIntent::CyclePrev => cycle(state, -1),
        }
    }
}

fn cycle(state: FilterFormState, direction: i32) -> FilterFormState {
    let (mut values, focused) = match state {
        FilterFormState::Visible { values, focused } => (values, focused),
        FilterFormState::Hidden => return FilterFormState::Hidden,
    };
    let Some(choices) = focused.choices() else {
        return FilterFormState::Visible { values, focused };
    };

    let len = choices.len();
    let current = choices
        .iter()
        .position(|choice| *choice == focused.value(&values))
        .unwrap_or(0);
    let next = if direction.is_negative() {
        if current == 0 {
            len - 1
        } else {
            current - 1
        }
    } else if current + 1 >= len {
        0
    } else {
        current + 1
    };

    *focused.value_mut(&mut values) = choices[next].to_string();
    FilterFormState::Visible { values, focused }
}
