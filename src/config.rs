use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::token::TimerToken;

/// Conversation-level persisted disappearing-messages settings.
///
/// This is the record shape the token is derived from; reading and
/// writing the actual storage row belongs to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisappearingMessagesConfig {
    /// Conversation this setting applies to
    pub conversation_id: Uuid,

    /// Whether messages in this conversation self-destruct
    pub is_enabled: bool,

    /// Expiration delay in seconds, meaningful only when enabled
    pub duration_seconds: u32,

    /// When this setting was last changed (UTC)
    pub updated_at: DateTime<Utc>,
}

impl DisappearingMessagesConfig {
    /// Fresh default-disabled record for a conversation.
    pub fn new(conversation_id: Uuid) -> Self {
        Self {
            conversation_id,
            is_enabled: false,
            duration_seconds: 0,
            updated_at: Utc::now(),
        }
    }

    /// Derive the normalized token for this record.
    ///
    /// Read-only: a stored contradictory pair is corrected in the
    /// returned token, not in the record.
    pub fn token(&self) -> TimerToken {
        TimerToken::new(self.is_enabled, self.duration_seconds)
    }

    /// Updated copy of this record carrying the token's fields.
    pub fn apply_token(&self, token: TimerToken, now: DateTime<Utc>) -> Self {
        Self {
            conversation_id: self.conversation_id,
            is_enabled: token.enabled(),
            duration_seconds: token.duration_seconds(),
            updated_at: now,
        }
    }
}
