//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use character_browser::api::{
    ApiClient, Character, CharacterPage, CharacterStatus, FilterSet, NamedLink,
};
use character_browser::config::{ApiConfig, UiConfig};
use character_browser::ui::app::App;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::TempDir;

/// Client pointed at `base_url` with short timeouts.
pub fn client_for(base_url: &str) -> ApiClient {
    let config = ApiConfig {
        base_url: base_url.to_string(),
        timeout_seconds: 2,
        connect_timeout_seconds: 1,
    };
    ApiClient::new(&config).expect("client should build")
}

/// Write `content` to a config file inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

// -- Fixtures -----------------------------------------------------------------

pub fn character(id: u32, name: &str) -> Character {
    Character {
        id,
        name: name.to_string(),
        status: CharacterStatus::Alive,
        species: "Human".to_string(),
        kind: String::new(),
        gender: "Male".to_string(),
        origin: NamedLink::default(),
        location: NamedLink::default(),
        image: String::new(),
        episode: Vec::new(),
    }
}

pub fn page(ids: &[u32], has_next: bool) -> CharacterPage {
    CharacterPage {
        results: ids.iter().map(|id| character(*id, &format!("C{id}"))).collect(),
        has_next,
    }
}

pub fn filters(name: &str, status: &str) -> FilterSet {
    FilterSet {
        name: name.to_string(),
        status: status.to_string(),
        ..FilterSet::default()
    }
}

// -- App helpers --------------------------------------------------------------

pub fn make_app() -> App {
    App::new(&UiConfig {
        tick_rate_ms: 250,
        notice_ms: 60_000,
    })
}

pub const SHORT: Duration = Duration::from_millis(50);
