// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::User;
use anyhow::{Context, Result};
use chrono::Utc;
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.alphavelocity", "FinSan", "finsan"));

pub fn data_dir() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let dir = proj.data_dir().to_path_buf();
    fs::create_dir_all(&dir).context("Failed to create data dir")?;
    Ok(dir)
}

/// The whole multi-user database. Read and written wholesale; there is no
/// cross-process locking, so concurrent writers can lose updates.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Database {
    #[serde(default)]
    pub users: Vec<User>,
}

pub struct Store {
    db_path: PathBuf,
    session_path: PathBuf,
    pub db: Database,
    token: Option<String>,
}

impl Store {
    /// Open the default store under the platform data dir, creating an empty
    /// database file on first use.
    pub fn open() -> Result<Store> {
        let dir = data_dir()?;
        Store::open_at(&dir)
    }

    /// Open a store rooted at an explicit directory (tests use a tempdir).
    pub fn open_at(dir: &Path) -> Result<Store> {
        fs::create_dir_all(dir).with_context(|| format!("Create {}", dir.display()))?;
        let db_path = dir.join("finsan.json");
        let session_path = dir.join("session");

        let db = if db_path.exists() {
            let raw = fs::read_to_string(&db_path)
                .with_context(|| format!("Read {}", db_path.display()))?;
            if raw.trim().is_empty() {
                Database::default()
            } else {
                serde_json::from_str(&raw)
                    .with_context(|| format!("Parse {}", db_path.display()))?
            }
        } else {
            let db = Database::default();
            fs::write(&db_path, serde_json::to_string_pretty(&db)?)
                .with_context(|| format!("Create {}", db_path.display()))?;
            db
        };

        let token = match fs::read_to_string(&session_path) {
            Ok(raw) => {
                let t = raw.trim().to_string();
                if t.is_empty() { None } else { Some(t) }
            }
            Err(_) => None,
        };

        Ok(Store {
            db_path,
            session_path,
            db,
            token,
        })
    }

    pub fn path(&self) -> &Path {
        &self.db_path
    }

    pub fn save(&self) -> Result<()> {
        fs::write(&self.db_path, serde_json::to_string_pretty(&self.db)?)
            .with_context(|| format!("Write {}", self.db_path.display()))?;
        Ok(())
    }

    pub fn session_token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Persist the session token, the CLI stand-in for the session cookie.
    pub fn set_session(&mut self, token: &str) -> Result<()> {
        fs::write(&self.session_path, token)
            .with_context(|| format!("Write {}", self.session_path.display()))?;
        self.token = Some(token.to_string());
        Ok(())
    }

    pub fn clear_session(&mut self) -> Result<()> {
        if self.session_path.exists() {
            fs::remove_file(&self.session_path)
                .with_context(|| format!("Remove {}", self.session_path.display()))?;
        }
        self.token = None;
        Ok(())
    }

    /// The signed-in user, resolved by matching the stored session token.
    pub fn current_user(&self) -> Option<&User> {
        let token = self.token.as_deref()?;
        self.db
            .users
            .iter()
            .find(|u| u.session_token.as_deref() == Some(token))
    }

    pub fn current_user_mut(&mut self) -> Option<&mut User> {
        let token = self.token.clone()?;
        self.db
            .users
            .iter_mut()
            .find(|u| u.session_token.as_deref() == Some(token.as_str()))
    }
}

/// Bump a user's `updated_at`; every mutating command calls this before save.
pub fn touch(user: &mut User) {
    user.updated_at = Utc::now().to_rfc3339();
}
