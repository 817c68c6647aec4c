// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{FinanceRecord, Preferences, User, new_id};
use crate::store::Database;
use chrono::Utc;
use rand::RngCore;
use sha2::{Digest, Sha256};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Email already registered.")]
    EmailTaken,
    #[error("Email and password (min 6 chars) are required.")]
    WeakCredentials,
    #[error("Invalid credentials.")]
    InvalidCredentials,
    #[error("Not signed in.")]
    NotSignedIn,
}

pub fn hash_password(password: &str) -> String {
    let digest = Sha256::digest(password.as_bytes());
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}

pub fn new_session_token() -> String {
    let mut bytes = [0u8; 24];
    rand::thread_rng().fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

fn empty_finance(currency: &str) -> FinanceRecord {
    FinanceRecord {
        preferences: Preferences {
            currency: currency.to_string(),
            ..Preferences::default()
        },
        ..FinanceRecord::default()
    }
}

/// Register a user and hand back a fresh session token. The display name
/// falls back to the email local part.
pub fn signup(
    db: &mut Database,
    email: &str,
    password: &str,
    name: Option<&str>,
    currency: &str,
) -> Result<String, AuthError> {
    let email = email.trim().to_lowercase();
    if email.is_empty() || password.len() < 6 {
        return Err(AuthError::WeakCredentials);
    }
    if db.users.iter().any(|u| u.email == email) {
        return Err(AuthError::EmailTaken);
    }

    let name = match name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(n) => n.to_string(),
        None => email.split('@').next().unwrap_or(&email).to_string(),
    };
    let token = new_session_token();
    let now = Utc::now().to_rfc3339();
    db.users.push(User {
        id: new_id(),
        email,
        name,
        password_hash: hash_password(password),
        session_token: Some(token.clone()),
        finance: empty_finance(currency),
        created_at: now.clone(),
        updated_at: now,
    });
    Ok(token)
}

/// Verify credentials and rotate the user's session token.
pub fn login(db: &mut Database, email: &str, password: &str) -> Result<String, AuthError> {
    let email = email.trim().to_lowercase();
    let hash = hash_password(password);
    let user = db
        .users
        .iter_mut()
        .find(|u| u.email == email && u.password_hash == hash)
        .ok_or(AuthError::InvalidCredentials)?;
    let token = new_session_token();
    user.session_token = Some(token.clone());
    user.updated_at = Utc::now().to_rfc3339();
    Ok(token)
}

/// Drop the stored token for whichever user holds it.
pub fn logout(db: &mut Database, token: &str) {
    if let Some(user) = db
        .users
        .iter_mut()
        .find(|u| u.session_token.as_deref() == Some(token))
    {
        user.session_token = None;
        user.updated_at = Utc::now().to_rfc3339();
    }
}
