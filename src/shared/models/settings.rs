use std::{error::Error, fs};

use serde::Deserialize;

const SETTINGS_FILENAME: &str = "settings.json";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub api_token: String,
    pub database_path: String,
    pub tcp_socket_binding: String,
    pub tcp_socket_port: u16,
}

impl Settings {
    pub fn load() -> Result<Settings, Box<dyn Error>> {
        let content = fs::read_to_string(SETTINGS_FILENAME)
            .map_err(|e| format!("Cannot read settings file {SETTINGS_FILENAME}: {e}"))?;
        let settings = serde_json::from_str(&content)
            .map_err(|e| format!("Cannot parse JSON content from file {SETTINGS_FILENAME}: {e}"))?;
        Ok(settings)
    }
}
