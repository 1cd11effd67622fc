//! Client configuration.
//!
//! A [`ShareConfig`] carries the Share account credentials and the region
//! selector. Configuration is supplied programmatically by the caller;
//! nothing is read from disk or the environment.

use serde::{Deserialize, Serialize};

use crate::api::ShareError;

/// Base URL for accounts registered in the United States.
const BASE_URL_US: &str = "https://share2.dexcom.com/ShareWebServices/Services";

/// Base URL for accounts registered outside the United States.
const BASE_URL_OUS: &str = "https://shareous1.dexcom.com/ShareWebServices/Services";

/// Which regional Share backend an account belongs to.
///
/// Dexcom operates separate service instances for US and non-US accounts;
/// credentials are only valid against their own region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Server {
    #[default]
    Us,
    OutsideUs,
}

impl Server {
    /// Endpoint base for this region.
    pub fn base_url(&self) -> &'static str {
        match self {
            Server::Us => BASE_URL_US,
            Server::OutsideUs => BASE_URL_OUS,
        }
    }
}

/// Account credentials plus region, immutable once the client is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareConfig {
    pub username: String,
    pub password: String,
    pub server: Server,
}

impl ShareConfig {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            server: Server::default(),
        }
    }

    /// Select the regional backend (defaults to [`Server::Us`]).
    pub fn server(mut self, server: Server) -> Self {
        self.server = server;
        self
    }

    /// Check the credentials before any network call is made.
    pub(crate) fn validate(&self) -> Result<(), ShareError> {
        if self.username.is_empty() {
            return Err(ShareError::Argument("username null or empty".into()));
        }
        if self.password.is_empty() {
            return Err(ShareError::Argument("password null or empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_selects_base_url() {
        assert_eq!(
            Server::Us.base_url(),
            "https://share2.dexcom.com/ShareWebServices/Services"
        );
        assert_eq!(
            Server::OutsideUs.base_url(),
            "https://shareous1.dexcom.com/ShareWebServices/Services"
        );
    }

    #[test]
    fn test_default_region_is_us() {
        let config = ShareConfig::new("user", "pass");
        assert_eq!(config.server, Server::Us);
    }

    #[test]
    fn test_validate_rejects_empty_credentials() {
        let err = ShareConfig::new("", "pass").validate().unwrap_err();
        assert!(matches!(err, ShareError::Argument(_)));
        assert_eq!(err.to_string(), "invalid argument: username null or empty");

        let err = ShareConfig::new("user", "").validate().unwrap_err();
        assert!(matches!(err, ShareError::Argument(_)));
        assert_eq!(err.to_string(), "invalid argument: password null or empty");

        assert!(ShareConfig::new("user", "pass").validate().is_ok());
    }
}
