/**
 * Message Data Structure
 *
 * This module defines the Message record stored by the message log, its
 * sequence identifier, and the filters used to select a subset of the log.
 *
 * Messages are immutable once accepted. Their order is the order in which the
 * log accepted them, carried by `MessageId`, never a client-claimed time.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sequence number assigned to a message on acceptance
///
/// Ids start at 1 and strictly increase with every successful append.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(u64);

impl MessageId {
    /// The id given to the first message of an empty log
    pub const FIRST: MessageId = MessageId(1);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }

    /// The id that follows this one
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents a single chat message
///
/// # Fields
/// * `id` - Sequence number assigned by the log
/// * `sender` - Identifier of the sending user
/// * `receiver` - Identifier of the receiving user
/// * `content` - Message text, never empty
/// * `timestamp` - UTC acceptance time, non-decreasing along the log
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub sender: String,
    pub receiver: String,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Whether `user` sent or received this message
    pub fn involves(&self, user: &str) -> bool {
        self.sender == user || self.receiver == user
    }
}

/// Selects a subset of the message log
///
/// # Example
/// ```rust
/// use echosignal::shared::MessageFilter;
///
/// let filter = MessageFilter::conversation("alice", "bob");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageFilter {
    /// Messages sent by this user
    Sender(String),
    /// Messages received by this user
    Receiver(String),
    /// Messages exchanged between two users, in either direction
    Conversation(String, String),
}

impl MessageFilter {
    pub fn conversation(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self::Conversation(a.into(), b.into())
    }

    /// Build a filter from optional sender and receiver parameters
    ///
    /// Both present selects the conversation between them, one present
    /// selects by that side alone, none means no filter.
    pub fn from_parts(sender: Option<String>, receiver: Option<String>) -> Option<Self> {
        match (sender, receiver) {
            (Some(sender), Some(receiver)) => Some(Self::Conversation(sender, receiver)),
            (Some(sender), None) => Some(Self::Sender(sender)),
            (None, Some(receiver)) => Some(Self::Receiver(receiver)),
            (None, None) => None,
        }
    }

    pub fn matches(&self, message: &Message) -> bool {
        match self {
            Self::Sender(sender) => message.sender == *sender,
            Self::Receiver(receiver) => message.receiver == *receiver,
            Self::Conversation(a, b) => {
                (message.sender == *a && message.receiver == *b)
                    || (message.sender == *b && message.receiver == *a)
            }
        }
    }
}
