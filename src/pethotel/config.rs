use crate::error::{HotelError, Result};
use crate::model::DEFAULT_ROOMS;
use crate::paging::PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for pethotel, stored in <data dir>/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HotelConfig {
    /// Room names in schedule order
    #[serde(default = "default_rooms")]
    pub rooms: Vec<String>,

    /// Rows per list page
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_rooms() -> Vec<String> {
    DEFAULT_ROOMS.iter().map(|r| r.to_string()).collect()
}

fn default_page_size() -> usize {
    PAGE_SIZE
}

impl Default for HotelConfig {
    fn default() -> Self {
        Self {
            rooms: default_rooms(),
            page_size: default_page_size(),
        }
    }
}

impl HotelConfig {
    pub const KEYS: [&'static str; 2] = ["rooms", "page_size"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(HotelError::Io)?;
        let config: HotelConfig =
            serde_json::from_str(&content).map_err(HotelError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(HotelError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(HotelError::Serialization)?;
        fs::write(config_path, content).map_err(HotelError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "rooms" => Some(self.rooms.join(",")),
            "page_size" => Some(self.page_size.to_string()),
            _ => None,
        }
    }

    /// Rooms are given comma separated, e.g. `R1,R2,Suite`.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "rooms" => {
                let rooms: Vec<String> = value
                    .split(',')
                    .map(str::trim)
                    .filter(|r| !r.is_empty())
                    .map(str::to_string)
                    .collect();
                if rooms.is_empty() {
                    return Err("At least one room is required".to_string());
                }
                if let Some(dup) = rooms
                    .iter()
                    .enumerate()
                    .find(|(i, r)| rooms[..*i].contains(r))
                    .map(|(_, r)| r)
                {
                    return Err(format!("Duplicate room: {}", dup));
                }
                self.rooms = rooms;
                Ok(())
            }
            "page_size" => match value.trim().parse::<usize>() {
                Ok(size) if size > 0 => {
                    self.page_size = size;
                    Ok(())
                }
                _ => Err(format!("Invalid page size: {}", value)),
            },
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }
}
