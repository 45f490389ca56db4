use crate::auth::{AccessLevel, Credentials};
use crate::commands::{CmdMessage, CmdResult, HotelPaths};
use crate::config::HotelConfig;
use crate::error::{HotelError, Result};

/// Creates the data directory with default configuration and both secrets.
pub fn init(paths: &HotelPaths, standard: &str, elevated: &str) -> Result<CmdResult> {
    if Credentials::exists(&paths.data) {
        return Err(HotelError::Auth(
            "Passwords are already set up. Use `pethotel passwd` to change them.".to_string(),
        ));
    }
    let credentials = Credentials::from_secrets(standard, elevated)?;
    std::fs::create_dir_all(&paths.data)?;
    credentials.save(&paths.data)?;
    if !paths.data.join("config.json").exists() {
        HotelConfig::default().save(&paths.data)?;
    }
    tracing::info!(data = %paths.data.display(), "initialized");

    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Initialized pethotel at {}",
        paths.data.display()
    ))))
}

pub fn login(paths: &HotelPaths, secret: &str) -> Result<AccessLevel> {
    Credentials::load(&paths.data)?.login(secret)
}

/// Changes the standard secret and optionally the elevated one. `current`
/// must unlock the elevated level.
pub fn passwd(
    paths: &HotelPaths,
    current: &str,
    standard: &str,
    elevated: Option<&str>,
) -> Result<CmdResult> {
    let mut credentials = Credentials::load(&paths.data)?;
    let level = credentials.login(current)?;
    credentials.change(level, standard, elevated)?;
    credentials.save(&paths.data)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(
        "Password(s) changed successfully.",
    )))
}
