use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

/// User profile as delivered by the backend after login. The faculty is
/// only present for roles scoped to one (dean, staff).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub display_name: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faculty_id: Option<String>,
}

/// Explicit session context, passed to whatever needs identity or
/// permission data instead of living in a shared global store.
#[derive(Debug, Clone)]
pub struct Session {
    pub session_id: String,
    pub access_token: String,
    pub profile: Option<Profile>,
    pub established_at: DateTime<Utc>,
}

impl Session {
    /// A token with no profile still yields a usable session: the profile
    /// fetch failing upstream must not strand a user who authenticated.
    /// Such a session reports `degraded` until the profile arrives.
    pub fn establish(access_token: &str, profile: Option<Profile>) -> Session {
        Session {
            session_id: Uuid::new_v4().to_string(),
            access_token: access_token.to_string(),
            profile,
            established_at: Utc::now(),
        }
    }

    pub fn degraded(&self) -> bool {
        self.profile.is_none()
    }

    pub fn summary(&self) -> serde_json::Value {
        json!({
            "sessionId": self.session_id,
            "accessToken": self.access_token,
            "degraded": self.degraded(),
            "profile": self.profile,
            "establishedAt": self.established_at.to_rfc3339(),
        })
    }
}

pub fn profile_from_value(value: &serde_json::Value) -> anyhow::Result<Profile> {
    serde_json::from_value(value.clone())
        .context("profile must carry displayName and role")
}
