//! Shared helpers for store integration tests.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use painel_core::cache::QueryCache;
use painel_core::notify::Notifier;
use serde_json::{json, Value};
use supabase::{Supabase, SupabaseOptions};
use wiremock::MockServer;

/// Records dispatched notifications for assertions.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub successes: Mutex<Vec<String>>,
    pub errors: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn success_messages(&self) -> Vec<String> {
        self.successes.lock().unwrap().clone()
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }

    pub fn is_silent(&self) -> bool {
        self.success_messages().is_empty() && self.error_messages().is_empty()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.successes.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}

pub fn client_for(server: &MockServer) -> Supabase {
    Supabase::new(SupabaseOptions {
        url: server.uri(),
        anon_key: "anon-key".into(),
    })
}

pub fn shared_cache() -> Arc<QueryCache> {
    Arc::new(QueryCache::new())
}

pub const ORG_ID: &str = "22222222-2222-2222-2222-222222222222";
pub const PARTNER_ID: &str = "11111111-1111-1111-1111-111111111111";
pub const DEAL_ID: &str = "33333333-3333-3333-3333-333333333333";
pub const CONVERSATION_ID: &str = "44444444-4444-4444-4444-444444444444";

pub fn partner_row() -> Value {
    json!({
        "id": PARTNER_ID,
        "organization_id": ORG_ID,
        "name": "Ana Souza",
        "cpf": "529.982.247-25",
        "cnpj": null,
        "email": "ana@example.com",
        "phone": "(11) 3333-4444",
        "whatsapp": "(11) 98765-4321",
        "postal_code": "01310-930",
        "created_at": "2026-01-10T12:00:00Z",
        "updated_at": null
    })
}

pub fn conversation_row() -> Value {
    json!({
        "id": CONVERSATION_ID,
        "contact_name": "Ana Souza",
        "contact_phone": "+5511987654321",
        "last_message_at": "2026-02-01T09:30:00Z",
        "unread_count": 2
    })
}

pub fn message_row() -> Value {
    json!({
        "id": "55555555-5555-5555-5555-555555555555",
        "conversation_id": CONVERSATION_ID,
        "direction": "outbound",
        "content": "Bom dia!",
        "sent_at": "2026-02-01T09:30:00Z"
    })
}
