use crate::api::FilterSet;
use crate::mvi::UiState;

const STATUS_CHOICES: &[&str] = &["", "alive", "dead", "unknown"];
const SPECIES_CHOICES: &[&str] = &["", "human", "alien", "robot", "unknown"];
const GENDER_CHOICES: &[&str] = &["", "male", "female", "genderless", "unknown"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterField {
    #[default]
    Name,
    Status,
    Species,
    Gender,
}

impl FilterField {
    pub const ALL: [FilterField; 4] = [
        FilterField::Name,
        FilterField::Status,
        FilterField::Species,
        FilterField::Gender,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FilterField::Name => "Name",
            FilterField::Status => "Status",
            FilterField::Species => "Species",
            FilterField::Gender => "Gender",
        }
    }

    /// Allowed values for choice fields; `None` for free text.
    pub fn choices(&self) -> Option<&'static [&'static str]> {
        match self {
            FilterField::Name => None,
            FilterField::Status => Some(STATUS_CHOICES),
            FilterField::Species => Some(SPECIES_CHOICES),
            FilterField::Gender => Some(GENDER_CHOICES),
        }
    }

    pub fn next(&self) -> Self {
        match self {
            FilterField::Name => FilterField::Status,
            FilterField::Status => FilterField::Species,
            FilterField::Species => FilterField::Gender,
            FilterField::Gender => FilterField::Name,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            FilterField::Name => FilterField::Gender,
            FilterField::Status => FilterField::Name,
            FilterField::Species => FilterField::Status,
            FilterField::Gender => FilterField::Species,
        }
    }

    pub fn value<'a>(&self, values: &'a FilterSet) -> &'a str {
        match self {
            FilterField::Name => &values.name,
            FilterField::Status => &values.status,
            FilterField::Species => &values.species,
            FilterField::Gender => &values.gender,
        }
    }

    pub fn value_mut<'a>(&self, values: &'a mut FilterSet) -> &'a mut String {
        match self {
            FilterField::Name => &mut values.name,
            FilterField::Status => &mut values.status,
            FilterField::Species => &mut values.species,
            FilterField::Gender => &mut values.gender,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum FilterFormState {
    #[default]
    Hidden,
    Visible {
        values: FilterSet,
        focused: FilterField,
    },
}

impl UiState for FilterFormState {}

impl FilterFormState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// Values to submit, with the name trimmed.
    pub fn submission(&self) -> Option<FilterSet> {
        match self {
            Self::Visible { values, .. } => Some(values.normalized()),
            Self::Hidden => None,
        }
    }
}
