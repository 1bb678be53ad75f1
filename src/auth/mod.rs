//
//  launchpad-client
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! The web service accepts OAuth 1.0 requests signed with the `PLAINTEXT`
//! method. Anonymous access uses the same header with an empty token.
//!
//! ## Module Structure
//!
//! - [`token`]: Access token parsing and validation
//! - [`keyring`]: Secure token storage using the system keyring
//!
//! ## Example
//!
//! ```rust
//! use launchpad_client::auth::AuthCredential;
//!
//! let credential = AuthCredential::OAuth {
//!     consumer_key: "my-app".to_string(),
//!     token: "tok".to_string(),
//!     token_secret: "sec".to_string(),
//! };
//! assert!(credential.is_authenticated());
//! assert!(!AuthCredential::anonymous("my-app").is_authenticated());
//! ```

mod keyring;
mod token;

pub use keyring::*;
pub use token::*;

use rand::RngCore;
use reqwest::RequestBuilder;
use url::form_urlencoded::byte_serialize;

/// The OAuth realm sent with every request.
pub const OAUTH_REALM: &str = "https://api.launchpad.net/";

/// Credentials applied to outgoing requests.
#[derive(Debug, Clone)]
pub enum AuthCredential {
    /// Anonymous read-only access identified only by a consumer key.
    Anonymous {
        /// Identifies the application
        consumer_key: String,
    },
    /// An authorised access token.
    OAuth {
        /// Identifies the application
        consumer_key: String,
        /// The access token
        token: String,
        /// The access token secret
        token_secret: String,
    },
}

impl AuthCredential {
    /// Creates anonymous credentials.
    pub fn anonymous(consumer_key: &str) -> Self {
        Self::Anonymous {
            consumer_key: consumer_key.to_string(),
        }
    }

    /// Creates credentials from a stored [`AccessToken`].
    pub fn from_token(consumer_key: &str, token: AccessToken) -> Self {
        Self::OAuth {
            consumer_key: consumer_key.to_string(),
            token: token.key,
            token_secret: token.secret,
        }
    }

    /// Returns `true` for credentials carrying an access token.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::OAuth { .. })
    }

    /// Builds the `Authorization` header value for one request.
    ///
    /// `timestamp` is seconds since the epoch; `nonce` must be unique per
    /// request.
    pub fn authorization_header(&self, timestamp: i64, nonce: &str) -> String {
        let (consumer_key, token, token_secret) = match self {
            Self::Anonymous { consumer_key } => (consumer_key.as_str(), "", ""),
            Self::OAuth {
                consumer_key,
                token,
                token_secret,
            } => (consumer_key.as_str(), token.as_str(), token_secret.as_str()),
        };

        // PLAINTEXT: "<consumer secret>&<token secret>", the consumer secret is always empty
        let signature = format!("&{}", encode(token_secret));

        format!(
            "OAuth realm=\"{}\", oauth_consumer_key=\"{}\", oauth_token=\"{}\", \
             oauth_signature_method=\"PLAINTEXT\", oauth_signature=\"{}\", \
             oauth_timestamp=\"{}\", oauth_nonce=\"{}\", oauth_version=\"1.0\"",
            OAUTH_REALM,
            encode(consumer_key),
            encode(token),
            encode(&signature),
            timestamp,
            encode(nonce),
        )
    }

    /// Adds the `Authorization` header to a request.
    pub fn apply_to_request(&self, request: RequestBuilder) -> RequestBuilder {
        let timestamp = chrono::Utc::now().timestamp();
        request.header("Authorization", self.authorization_header(timestamp, &new_nonce()))
    }
}

fn encode(value: &str) -> String {
    byte_serialize(value.as_bytes()).collect::<String>().replace('+', "%20")
}

fn new_nonce() -> String {
    let mut bytes = [0u8; 16];
    rand::rng().fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_header() {
        let header = AuthCredential::anonymous("my app").authorization_header(1700000000, "abc");
        assert!(header.starts_with("OAuth realm=\"https://api.launchpad.net/\""));
        assert!(header.contains("oauth_consumer_key=\"my%20app\""));
        assert!(header.contains("oauth_token=\"\""));
        assert!(header.contains("oauth_signature=\"%26\""));
        assert!(header.contains("oauth_timestamp=\"1700000000\""));
        assert!(header.contains("oauth_nonce=\"abc\""));
    }

    #[test]
    fn test_oauth_header_signs_with_token_secret() {
        let credential = AuthCredential::from_token(
            "lp",
            AccessToken {
                key: "tok".to_string(),
                secret: "s&c".to_string(),
            },
        );
        let header = credential.authorization_header(1, "n");
        assert!(header.contains("oauth_token=\"tok\""));
        // "&" + "s%26c", then encoded again for the header
        assert!(header.contains("oauth_signature=\"%26s%2526c\""));
        assert!(header.contains("oauth_signature_method=\"PLAINTEXT\""));
    }

    #[test]
    fn test_nonces_differ() {
        let a = new_nonce();
        let b = new_nonce();
        assert_eq!(a.len(), 32);
        assert_ne!(a, b);
    }
}
