//
//  launchpad-client
//  auth/token.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Access token handling.
//!
//! Tokens are stored and entered as `<key>:<secret>`.

use std::fmt;

use anyhow::{bail, Result};

/// An OAuth access token and its secret.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    /// The token key
    pub key: String,
    /// The token secret
    pub secret: String,
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("key", &self.key)
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl AccessToken {
    /// Parses `<key>:<secret>`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use launchpad_client::auth::AccessToken;
    ///
    /// let token = AccessToken::parse("abc:def").unwrap();
    /// assert_eq!(token.key, "abc");
    /// assert_eq!(token.secret, "def");
    /// assert!(AccessToken::parse("no-secret").is_err());
    /// ```
    pub fn parse(value: &str) -> Result<Self> {
        let value = value.trim();
        let Some((key, secret)) = value.split_once(':') else {
            bail!("Token must be in the form <key>:<secret>");
        };
        if !validate_token(key) || !validate_token(secret) {
            bail!("Token key and secret must be non-empty and contain no whitespace");
        }
        Ok(Self {
            key: key.to_string(),
            secret: secret.to_string(),
        })
    }

    /// Serializes back to `<key>:<secret>` for storage.
    pub fn to_stored(&self) -> String {
        format!("{}:{}", self.key, self.secret)
    }
}

/// Reads a single line from stdin, trimmed.
pub fn read_token_from_stdin() -> Result<String> {
    use std::io::{self, BufRead};

    let stdin = io::stdin();
    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;

    Ok(line.trim().to_string())
}

/// A token part must be non-empty and free of whitespace.
pub fn validate_token(token: &str) -> bool {
    !token.is_empty() && !token.chars().any(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        let token = AccessToken::parse("  key123:sec:ret \n").unwrap();
        assert_eq!(token.key, "key123");
        assert_eq!(token.secret, "sec:ret");
        assert_eq!(token.to_stored(), "key123:sec:ret");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(AccessToken::parse(":secret").is_err());
        assert!(AccessToken::parse("key:").is_err());
        assert!(AccessToken::parse("ke y:secret").is_err());
    }

    #[test]
    fn test_debug_hides_secret() {
        let token = AccessToken::parse("k:s3cret").unwrap();
        assert!(!format!("{token:?}").contains("s3cret"));
    }
}
