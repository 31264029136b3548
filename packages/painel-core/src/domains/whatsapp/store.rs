use std::sync::Arc;

use serde_json::json;
use tracing::{debug, error};

use supabase::{Result, Supabase, SupabaseError};

use crate::cache::{CacheKey, QueryCache};
use crate::domains::cached_rows;
use crate::notify::Notifier;
use crate::scope::ViewScope;

use super::models::{Conversation, Message};

pub const CONVERSATIONS_RESOURCE: &str = "whatsapp-conversations";
pub const MESSAGES_RESOURCE: &str = "whatsapp-messages";

const CONVERSATIONS_TABLE: &str = "whatsapp_conversations";
const MESSAGES_TABLE: &str = "whatsapp_messages";
const SEND_FUNCTION: &str = "send-whatsapp-message";

/// Conversations, message history and outbound sends.
pub struct WhatsappStore {
    client: Supabase,
    cache: Arc<QueryCache>,
    notifier: Arc<dyn Notifier>,
}

impl WhatsappStore {
    pub fn new(client: Supabase, cache: Arc<QueryCache>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            client,
            cache,
            notifier,
        }
    }

    /// All conversations, most recent activity first. Global key.
    pub async fn conversations(&self) -> Result<Vec<Conversation>> {
        let key = CacheKey::global(CONVERSATIONS_RESOURCE);
        let client = self.client.clone();
        cached_rows(&self.cache, key, move || async move {
            client
                .from(CONVERSATIONS_TABLE)
                .order_desc("last_message_at")
                .fetch_all()
                .await
        })
        .await
    }

    /// Messages of one conversation, oldest first. Disabled while the
    /// conversation id is blank.
    pub async fn messages(&self, conversation_id: &str) -> Result<Vec<Message>> {
        if conversation_id.trim().is_empty() {
            debug!("message fetch disabled: no conversation id");
            return Ok(Vec::new());
        }
        let key = CacheKey::scoped(MESSAGES_RESOURCE, conversation_id);
        let client = self.client.clone();
        let conversation_id = conversation_id.to_string();
        cached_rows(&self.cache, key, move || async move {
            client
                .from(MESSAGES_TABLE)
                .eq("conversation_id", &conversation_id)
                .order_asc("sent_at")
                .fetch_all()
                .await
        })
        .await
    }

    /// Send a message through the `send-whatsapp-message` function.
    ///
    /// A transport error, a non-2xx status and an `error` field inside a
    /// 2xx response all count as failure. Success invalidates the
    /// conversation's message list and the conversation list, each once,
    /// unless the initiating view is gone. Failure notifies with the
    /// service's message when one was extracted, a generic one otherwise.
    pub async fn send_message(
        &self,
        scope: &ViewScope,
        conversation_id: &str,
        content: &str,
    ) -> Result<()> {
        let content = content.trim();
        if content.is_empty() {
            return Ok(());
        }

        let result = self
            .client
            .invoke(
                SEND_FUNCTION,
                json!({ "conversation_id": conversation_id, "content": content }),
            )
            .await;

        match result {
            Ok(_) => {
                if scope.is_cancelled() {
                    debug!(conversation_id, "send landed after view cancellation, skipping side effects");
                    return Ok(());
                }
                self.cache
                    .invalidate(&CacheKey::scoped(MESSAGES_RESOURCE, conversation_id));
                self.cache
                    .invalidate(&CacheKey::global(CONVERSATIONS_RESOURCE));
                self.notifier.success("Message sent");
                Ok(())
            }
            Err(err) => {
                error!(conversation_id, error = %err, "failed to send whatsapp message");
                match &err {
                    SupabaseError::Function(message) => self.notifier.error(message),
                    _ => self.notifier.error("Could not send message"),
                }
                Err(err)
            }
        }
    }
}
