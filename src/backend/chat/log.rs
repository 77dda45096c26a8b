use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::shared::{Message, MessageFilter, MessageId, StoreError};

/// Storage contract for the append-only message log
///
/// `append` must assign ids and publish the message in one atomic step;
/// `list` returns messages in acceptance order.
#[async_trait]
pub trait MessageLog: Send + Sync {
    /// Append a message and return its id
    ///
    /// # Errors
    /// * `InvalidInput` - sender, receiver, or content is empty
    async fn append(
        &self,
        sender: &str,
        receiver: &str,
        content: &str,
    ) -> Result<MessageId, StoreError>;

    /// Messages matching `filter` (all when `None`), oldest first
    async fn list(&self, filter: Option<&MessageFilter>) -> Vec<Message>;

    /// Number of accepted messages
    async fn len(&self) -> usize;
}

#[derive(Debug)]
struct LogState {
    messages: Vec<Message>,
    next_id: MessageId,
    last_timestamp: Option<DateTime<Utc>>,
}

impl LogState {
    fn new() -> Self {
        Self {
            messages: Vec::new(),
            next_id: MessageId::FIRST,
            last_timestamp: None,
        }
    }

    /// Wall-clock time, held back to the previous timestamp if the clock stepped back
    fn next_timestamp(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let timestamp = match self.last_timestamp {
            Some(last) if last > now => last,
            _ => now,
        };
        self.last_timestamp = Some(timestamp);
        timestamp
    }

    fn push(&mut self, sender: &str, receiver: &str, content: &str) -> MessageId {
        let id = self.next_id;
        self.next_id = id.next();
        let timestamp = self.next_timestamp();

        self.messages.push(Message {
            id,
            sender: sender.to_string(),
            receiver: receiver.to_string(),
            content: content.to_string(),
            timestamp,
        });

        id
    }
}

/// Process-local message log
///
/// Appends take the write guard for id assignment and push together; readers
/// share the read guard and never see a half-written message.
pub struct InMemoryMessageLog {
    state: RwLock<LogState>,
}

impl InMemoryMessageLog {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(LogState::new()),
        }
    }
}

impl Default for InMemoryMessageLog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageLog for InMemoryMessageLog {
    async fn append(
        &self,
        sender: &str,
        receiver: &str,
        content: &str,
    ) -> Result<MessageId, StoreError> {
        StoreError::require_non_empty("sender", sender)?;
        StoreError::require_non_empty("receiver", receiver)?;
        StoreError::require_non_empty("content", content)?;

        let id = self.state.write().await.push(sender, receiver, content);
        Ok(id)
    }

    async fn list(&self, filter: Option<&MessageFilter>) -> Vec<Message> {
        let state = self.state.read().await;
        match filter {
            Some(filter) => state
                .messages
                .iter()
                .filter(|message| filter.matches(message))
                .cloned()
                .collect(),
            None => state.messages.clone(),
        }
    }

    async fn len(&self) -> usize {
        self.state.read().await.messages.len()
    }
}
