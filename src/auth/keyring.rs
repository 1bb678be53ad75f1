//
//  launchpad-client
//  auth/keyring.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! System keyring storage for access tokens, one entry per API host.

use anyhow::Result;
use keyring::Entry;

use super::AccessToken;

const SERVICE_NAME: &str = "launchpad-client";

/// Stores access tokens in the platform keyring.
pub struct KeyringStore {
    service: String,
}

impl Default for KeyringStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyringStore {
    /// Creates a store under the `launchpad-client` service name.
    pub fn new() -> Self {
        Self {
            service: SERVICE_NAME.to_string(),
        }
    }

    /// Saves `token` for `host`, replacing any existing one.
    pub fn store(&self, host: &str, token: &AccessToken) -> Result<()> {
        let entry = Entry::new(&self.service, host)?;
        entry.set_password(&token.to_stored())?;
        Ok(())
    }

    /// Loads the token for `host`, or `None` if nothing is stored.
    pub fn get(&self, host: &str) -> Result<Option<AccessToken>> {
        let entry = Entry::new(&self.service, host)?;
        match entry.get_password() {
            Ok(stored) => Ok(Some(AccessToken::parse(&stored)?)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Removes the token for `host`. Succeeds if none was stored.
    pub fn delete(&self, host: &str) -> Result<()> {
        let entry = Entry::new(&self.service, host)?;
        match entry.delete_credential() {
            Ok(()) => Ok(()),
            Err(keyring::Error::NoEntry) => Ok(()), // Already deleted
            Err(e) => Err(e.into()),
        }
    }
}
