/**
 * Chat Handler Types
 *
 * Request, query, and response bodies for the `/messages` endpoints.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::{Message, MessageFilter, MessageId};

/// Send message request
///
/// Missing fields deserialize as empty strings and are rejected by the log.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct SendMessageRequest {
    #[serde(default)]
    pub sender: String,
    #[serde(default)]
    pub receiver: String,
    #[serde(default)]
    pub content: String,
}

/// Acknowledgement for an accepted message
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SendMessageResponse {
    pub message: String,
    pub id: MessageId,
}

/// Query string of `GET /messages`
///
/// `sender` and `receiver` together select the conversation between them.
#[derive(Deserialize, Debug, Default)]
pub struct MessageQuery {
    pub sender: Option<String>,
    pub receiver: Option<String>,
}

impl MessageQuery {
    pub fn into_filter(self) -> Option<MessageFilter> {
        MessageFilter::from_parts(
            self.sender.filter(|s| !s.is_empty()),
            self.receiver.filter(|r| !r.is_empty()),
        )
    }
}

/// A message as returned by `GET /messages`
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub id: MessageId,
    pub sender: String,
    pub receiver: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.id,
            sender: message.sender,
            receiver: message.receiver,
            content: message.content,
            timestamp: message.timestamp,
        }
    }
}
