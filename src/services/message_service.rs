//! Message service for direct messages between users.

use crate::error::{AppError, AppResult};
use crate::models::{Message, NewMessage};
use crate::repositories::{MessageRepository, UserRepository};

/// A user's mailbox: what they sent and what they received.
#[derive(Debug, Clone)]
pub struct Mailbox {
    pub sent: Vec<Message>,
    pub received: Vec<Message>,
}

/// Business logic around direct messages.
///
/// A mailbox is private to its owner, and only the sender of a message
/// may delete it.
#[derive(Clone)]
pub struct MessageService {
    messages: MessageRepository,
    users: UserRepository,
}

impl MessageService {
    /// Creates a new MessageService from its repositories.
    pub fn new(messages: MessageRepository, users: UserRepository) -> Self {
        Self { messages, users }
    }

    /// Returns the sent and received messages of `username`.
    pub async fn messages_for_user(&self, username: &str, acting_user: &str) -> AppResult<Mailbox> {
        if username != acting_user {
            return Err(AppError::forbidden("You may only read your own messages"));
        }

        if !self.users.exists(username).await? {
            return Err(AppError::not_found("user", "username", username));
        }

        let sent = self.messages.list_sent(username).await?;
        let received = self.messages.list_received(username).await?;

        Ok(Mailbox { sent, received })
    }

    /// Sends a message from `new_message.from_user` to
    /// `new_message.to_user`.
    ///
    /// Both participants must exist and the sender must be the
    /// authenticated caller.
    pub async fn send_message(
        &self,
        new_message: NewMessage,
        acting_user: &str,
    ) -> AppResult<Message> {
        if new_message.from_user != acting_user {
            return Err(AppError::forbidden(
                "You may only send messages as yourself",
            ));
        }

        if !self.users.exists(&new_message.from_user).await? {
            return Err(AppError::validation(
                "from_user",
                format!("No user named '{}'", new_message.from_user),
            ));
        }

        if !self.users.exists(&new_message.to_user).await? {
            return Err(AppError::validation(
                "to_user",
                format!("No user named '{}'", new_message.to_user),
            ));
        }

        self.messages.create(new_message).await
    }

    /// Deletes a message. Only the sender may delete.
    pub async fn delete_message(&self, id: i32, acting_user: &str) -> AppResult<()> {
        let message = self
            .messages
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("message", "id", id))?;

        if message.from_user != acting_user {
            return Err(AppError::forbidden(
                "You may only delete messages you sent",
            ));
        }

        self.messages.delete(id).await?;
        Ok(())
    }
}
