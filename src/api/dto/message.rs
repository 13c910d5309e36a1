//! Direct-message DTOs for API requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::dto::format_timestamp;
use crate::models::{Message, NewMessage};
use crate::services::Mailbox;

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for sending a message.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct SendMessageRequest {
    #[validate(length(min = 1, message = "Message text cannot be empty"))]
    #[schema(example = "Is the backyard still free next weekend?")]
    pub text: String,
    /// Sender; must match the authenticated caller
    #[schema(example = "belle")]
    pub from_user: String,
    /// Recipient username
    #[schema(example = "dan")]
    pub to_user: String,
}

impl SendMessageRequest {
    /// Converts the request DTO into a NewMessage model.
    pub fn into_new_message(self) -> NewMessage {
        NewMessage {
            text: self.text,
            from_user: self.from_user,
            to_user: self.to_user,
        }
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// A single message.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub id: i32,
    pub text: String,
    pub sent_at: String,
    /// Always null: read receipts are not tracked
    pub read_at: Option<String>,
    pub from_user: String,
    pub to_user: String,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.id,
            text: message.text,
            sent_at: format_timestamp(message.sent_at),
            read_at: message.read_at.map(format_timestamp),
            from_user: message.from_user,
            to_user: message.to_user,
        }
    }
}

/// Sent and received messages of one user.
#[derive(Debug, Serialize, ToSchema)]
pub struct MailboxResponse {
    pub sent: Vec<MessageResponse>,
    pub received: Vec<MessageResponse>,
}

impl From<Mailbox> for MailboxResponse {
    fn from(mailbox: Mailbox) -> Self {
        Self {
            sent: mailbox.sent.into_iter().map(MessageResponse::from).collect(),
            received: mailbox
                .received
                .into_iter()
                .map(MessageResponse::from)
                .collect(),
        }
    }
}

/// `{messages: {sent, received}}` wrapper for the mailbox endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessagesEnvelope {
    pub messages: MailboxResponse,
}

impl From<Mailbox> for MessagesEnvelope {
    fn from(mailbox: Mailbox) -> Self {
        Self {
            messages: MailboxResponse::from(mailbox),
        }
    }
}

/// `{message: ...}` wrapper for the send endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageEnvelope {
    pub message: MessageResponse,
}

impl From<Message> for MessageEnvelope {
    fn from(message: Message) -> Self {
        Self {
            message: MessageResponse::from(message),
        }
    }
}

/// Confirmation body for a deleted message.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageDeletedResponse {
    #[schema(example = "Deleted")]
    pub message: String,
}

impl MessageDeletedResponse {
    pub fn new() -> Self {
        Self {
            message: "Deleted".to_string(),
        }
    }
}

impl Default for MessageDeletedResponse {
    fn default() -> Self {
        Self::new()
    }
}
