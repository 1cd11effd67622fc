use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Session identifier the backend returns to mean "no valid session".
const SENTINEL_SESSION_ID: &str = "00000000-0000-0000-0000-000000000000";

/// Identifiers issued by the two-step login.
///
/// `account_id` comes back from the authenticate step, `session_id` from
/// the login step; only the session identifier is sent on subsequent
/// readings requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub session_id: String,
    pub account_id: String,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new(session_id: String, account_id: String) -> Self {
        Self {
            session_id,
            account_id,
            created_at: Utc::now(),
        }
    }

    /// Whether the backend considers this identifier a real session.
    pub fn is_valid(&self) -> bool {
        !Self::is_sentinel(&self.session_id) && is_well_formed_guid(&self.session_id)
    }

    /// Check an identifier against the all-zero sentinel.
    pub fn is_sentinel(session_id: &str) -> bool {
        session_id == SENTINEL_SESSION_ID
    }
}

/// Validate that a string looks like a GUID:
/// 36 characters with dashes, xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx
pub(crate) fn is_well_formed_guid(s: &str) -> bool {
    if s.len() != 36 {
        return false;
    }
    s.chars().enumerate().all(|(i, c)| {
        if i == 8 || i == 13 || i == 18 || i == 23 {
            c == '-'
        } else {
            c.is_ascii_hexdigit()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_well_formed_guid() {
        // Valid GUIDs
        assert!(is_well_formed_guid("1E913FEA-87E5-4B50-B4B2-B87CAD4F1B4A"));
        assert!(is_well_formed_guid("1e913fea-87e5-4b50-b4b2-b87cad4f1b4a")); // lowercase
        assert!(is_well_formed_guid("00000000-0000-0000-0000-000000000000"));

        // Invalid GUIDs
        assert!(!is_well_formed_guid("")); // empty
        assert!(!is_well_formed_guid("not-a-guid")); // too short
        assert!(!is_well_formed_guid("1E913FEA87E54B50B4B2B87CAD4F1B4A")); // no dashes
        assert!(!is_well_formed_guid("1E913FEA-87E5-4B50-B4B2-B87CAD4F1B4")); // too short
        assert!(!is_well_formed_guid("1E913FEA-87E5-4B50-B4B2-B87CAD4F1B4A0")); // too long
        assert!(!is_well_formed_guid("ZZZZZZZZ-ZZZZ-ZZZZ-ZZZZ-ZZZZZZZZZZZZ")); // invalid chars
    }

    #[test]
    fn test_sentinel_session_is_invalid() {
        let session = Session::new(
            "00000000-0000-0000-0000-000000000000".into(),
            "1E913FEA-87E5-4B50-B4B2-B87CAD4F1B4A".into(),
        );
        assert!(Session::is_sentinel(&session.session_id));
        assert!(!session.is_valid());
    }

    #[test]
    fn test_real_session_is_valid() {
        let session = Session::new(
            "1e913fea-87e5-4b50-b4b2-b87cad4f1b4a".into(),
            "5b2c4c4d-1a2b-3c4d-5e6f-7a8b9c0d1e2f".into(),
        );
        assert!(session.is_valid());
    }

    #[test]
    fn test_malformed_session_is_invalid() {
        let session = Session::new("garbage".into(), "also-garbage".into());
        assert!(!session.is_valid());
    }
}
