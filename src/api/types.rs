use serde::{Deserialize, Serialize};

/// A character as returned by the remote API.
///
/// Read-only on this side; identity is `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: u32,
    pub name: String,
    pub status: CharacterStatus,
    pub species: String,
    /// Sub-species or variant, usually empty.
    #[serde(rename = "type", default)]
    pub kind: String,
    pub gender: String,
    #[serde(default)]
    pub origin: NamedLink,
    pub location: NamedLink,
    pub image: String,
    /// Episode URLs the character appears in.
    #[serde(default)]
    pub episode: Vec<String>,
}

/// `{ "name": ..., "url": ... }` reference used for origin and location.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NamedLink {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// Life status. The API spells the third value in lowercase (`unknown`);
/// anything unrecognised also maps to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CharacterStatus {
    Alive,
    Dead,
    Unknown,
}

impl CharacterStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CharacterStatus::Alive => "Alive",
            CharacterStatus::Dead => "Dead",
            CharacterStatus::Unknown => "unknown",
        }
    }
}

impl From<String> for CharacterStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Alive" => CharacterStatus::Alive,
            "Dead" => CharacterStatus::Dead,
            _ => CharacterStatus::Unknown,
        }
    }
}

impl From<CharacterStatus> for String {
    fn from(value: CharacterStatus) -> Self {
        value.as_str().to_string()
    }
}

impl std::fmt::Display for CharacterStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter criteria for the listing endpoint.
///
/// An empty field means "no constraint"; the remote API treats empty query
/// parameters the same way.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterSet {
    pub name: String,
    pub status: String,
    pub species: String,
    pub gender: String,
}

impl FilterSet {
    /// Same criteria with surrounding whitespace removed from `name`.
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            ..self.clone()
        }
    }

    /// True when no field constrains the query.
    pub fn is_empty(&self) -> bool {
        *self == FilterSet::default()
    }

    /// Short `key=value` summary of the non-empty fields.
    pub fn summary(&self) -> String {
        [
            ("name", &self.name),
            ("status", &self.status),
            ("species", &self.species),
            ("gender", &self.gender),
        ]
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join(" ")
    }
}

/// `info` block of a listing envelope.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageInfo {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub pages: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
}

/// Raw listing envelope. `info` and `results` are both required so a body
/// missing either fails to decode instead of producing an empty page.
#[derive(Debug, Deserialize)]
pub(crate) struct PageEnvelope {
    pub info: PageInfo,
    pub results: Vec<Character>,
}

/// Normalized listing response.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CharacterPage {
    pub results: Vec<Character>,
    pub has_next: bool,
}

impl From<PageEnvelope> for CharacterPage {
    fn from(envelope: PageEnvelope) -> Self {
        Self {
            has_next: envelope.info.next.is_some_and(|next| !next.is_empty()),
            results: envelope.results,
        }
    }
}

/// Filtered listing response with the caller's `reset` flag carried through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredPage {
    pub page: CharacterPage,
    pub reset: bool,
}

/// Either kind of listing response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListResponse {
    Page(CharacterPage),
    Filtered(FilteredPage),
}

#[cfg(test)]
mod tests {
    use super::*;

    const RICK: &str = r#"{
        "id": 1,
        "name": "Rick Sanchez",
        "status": "Alive",
        "species": "Human",
        "type": "",
        "gender": "Male",
        "origin": { "name": "Earth (C-137)", "url": "https://rickandmortyapi.com/api/location/1" },
        "location": { "name": "Citadel of Ricks", "url": "https://rickandmortyapi.com/api/location/3" },
        "image": "https://rickandmortyapi.com/api/character/avatar/1.jpeg",
        "episode": ["https://rickandmortyapi.com/api/episode/1"],
        "url": "https://rickandmortyapi.com/api/character/1",
        "created": "2017-11-04T18:48:46.250Z"
    }"#;

    #[test]
    fn character_parses_api_shape() {
        let character: Character = serde_json::from_str(RICK).unwrap();
        assert_eq!(character.id, 1);
        assert_eq!(character.status, CharacterStatus::Alive);
        assert_eq!(character.location.name, "Citadel of Ricks");
        assert_eq!(character.episode.len(), 1);
    }

    #[test]
    fn lowercase_unknown_status_parses() {
        let json = RICK.replace("\"Alive\"", "\"unknown\"");
        let character: Character = serde_json::from_str(&json).unwrap();
        assert_eq!(character.status, CharacterStatus::Unknown);
        assert_eq!(character.status.to_string(), "unknown");
    }

    #[test]
    fn envelope_without_next_has_no_next_page() {
        let json = format!(r#"{{"info": {{"count": 1, "pages": 1, "next": null, "prev": null}}, "results": [{RICK}]}}"#);
        let envelope: PageEnvelope = serde_json::from_str(&json).unwrap();
        let page = CharacterPage::from(envelope);
        assert!(!page.has_next);
        assert_eq!(page.results.len(), 1);
    }

    #[test]
    fn envelope_missing_results_is_rejected() {
        let json = r#"{"info": {"next": null}}"#;
        assert!(serde_json::from_str::<PageEnvelope>(json).is_err());
    }

    #[test]
    fn filter_set_normalized_trims_name_only() {
        let filters = FilterSet {
            name: "  Rick ".into(),
            status: "alive".into(),
            ..FilterSet::default()
        };
        let normalized = filters.normalized();
        assert_eq!(normalized.name, "Rick");
        assert_eq!(normalized.status, "alive");
        assert!(FilterSet { name: "   ".into(), ..FilterSet::default() }
            .normalized()
            .is_empty());
    }

    #[test]
    fn filter_summary_skips_empty_fields() {
        let filters = FilterSet {
            name: "Rick".into(),
            gender: "male".into(),
            ..FilterSet::default()
        };
        assert_eq!(filters.summary(), "name=Rick gender=male");
        assert_eq!(FilterSet::default().summary(), "");
    }
}
