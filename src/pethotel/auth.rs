//! Shared-secret password gate.
//!
//! `passwords.txt` holds two lines, each the SHA-256 hex digest of a secret.
//! The first line grants [`AccessLevel::Standard`], the second
//! [`AccessLevel::Elevated`]. Only the elevated tier may change secrets.

use crate::error::{HotelError, Result};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

pub const CREDENTIALS_FILENAME: &str = "passwords.txt";
const SECRET_MIN_LEN: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AccessLevel {
    Standard,
    Elevated,
}

impl std::fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccessLevel::Standard => write!(f, "standard"),
            AccessLevel::Elevated => write!(f, "elevated"),
        }
    }
}

pub fn hash_secret(secret: &str) -> String {
    hex::encode(Sha256::digest(secret.as_bytes()))
}

/// Rules for a new secret. Returns every broken rule, prefixed with `label`.
pub fn check_new_secret(label: &str, secret: &str) -> Vec<String> {
    let mut problems = Vec::new();
    if secret.is_empty() {
        problems.push(format!("{} required.", label));
    }
    if secret.chars().count() < SECRET_MIN_LEN {
        problems.push(format!("{} must be at least 6 characters.", label));
    }
    if !secret.chars().any(|c| c.is_ascii_digit()) {
        problems.push(format!("{} must contain at least 1 number.", label));
    }
    problems
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    standard: String,
    elevated: String,
}

impl Credentials {
    pub fn path(dir: &Path) -> PathBuf {
        dir.join(CREDENTIALS_FILENAME)
    }

    pub fn exists(dir: &Path) -> bool {
        Self::path(dir).exists()
    }

    /// Builds credentials from plain secrets, enforcing the secret rules.
    pub fn from_secrets(standard: &str, elevated: &str) -> Result<Self> {
        let mut problems = check_new_secret("Password", standard);
        problems.extend(check_new_secret("Admin password", elevated));
        if !problems.is_empty() {
            return Err(HotelError::Auth(problems.join(" ")));
        }
        Ok(Self {
            standard: hash_secret(standard),
            elevated: hash_secret(elevated),
        })
    }

    pub fn load(dir: &Path) -> Result<Self> {
        let path = Self::path(dir);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(HotelError::Auth(
                    "No passwords set up. Run `pethotel init` first.".to_string(),
                ));
            }
            Err(e) => return Err(HotelError::Io(e)),
        };
        let mut lines = content.lines().map(str::trim);
        Ok(Self {
            standard: lines.next().unwrap_or_default().to_string(),
            elevated: lines.next().unwrap_or_default().to_string(),
        })
    }

    pub fn save(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)?;
        fs::write(
            Self::path(dir),
            format!("{}\n{}\n", self.standard, self.elevated),
        )?;
        Ok(())
    }

    /// The level a secret unlocks. The standard line is checked first.
    pub fn check(&self, secret: &str) -> Option<AccessLevel> {
        let hashed = hash_secret(secret);
        if !self.standard.is_empty() && hashed == self.standard {
            Some(AccessLevel::Standard)
        } else if !self.elevated.is_empty() && hashed == self.elevated {
            Some(AccessLevel::Elevated)
        } else {
            None
        }
    }

    pub fn login(&self, secret: &str) -> Result<AccessLevel> {
        self.check(secret)
            .ok_or_else(|| HotelError::Auth("Incorrect Password!".to_string()))
    }

    /// Replaces the standard secret and, when given, the elevated one.
    /// Requires an elevated session.
    pub fn change(
        &mut self,
        level: AccessLevel,
        standard: &str,
        elevated: Option<&str>,
    ) -> Result<()> {
        if level != AccessLevel::Elevated {
            return Err(HotelError::Auth(
                "Changing passwords requires the admin password.".to_string(),
            ));
        }
        let elevated = elevated.filter(|s| !s.is_empty());
        let mut problems = check_new_secret("Password", standard);
        if let Some(admin) = elevated {
            problems.extend(check_new_secret("Admin password", admin));
        }
        if !problems.is_empty() {
            return Err(HotelError::Auth(problems.join(" ")));
        }
        self.standard = hash_secret(standard);
        if let Some(admin) = elevated {
            self.elevated = hash_secret(admin);
        }
        tracing::info!(admin_changed = elevated.is_some(), "passwords changed");
        Ok(())
    }
}
