use crate::commands::{CmdMessage, CmdResult, HotelPaths};
use crate::config::HotelConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &HotelPaths, action: ConfigAction) -> Result<CmdResult> {
    let mut config = HotelConfig::load(&paths.data)?;
    match action {
        ConfigAction::ShowAll => Ok(CmdResult::default().with_config(config)),
        ConfigAction::ShowKey(key) => Ok(match config.get(&key) {
            Some(val) => CmdResult::default().with_message(CmdMessage::info(val)),
            None => CmdResult::default()
                .with_message(CmdMessage::error(format!("Unknown config key: {}", key))),
        }),
        ConfigAction::Set(key, value) => {
            if let Err(e) = config.set(&key, &value) {
                return Ok(CmdResult::default().with_message(CmdMessage::error(e)));
            }
            config.save(&paths.data)?;
            tracing::info!(%key, "config changed");
            let display_val = config.get(&key).unwrap_or(value);
            Ok(CmdResult::default()
                .with_config(config)
                .with_message(CmdMessage::success(format!(
                    "{} set to {}",
                    key, display_val
                ))))
        }
    }
}
