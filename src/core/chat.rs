use crate::domain::api::ChatRequest;
use crate::domain::ports::HealthBackend;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const GREETING: &str = "Hello! I'm your healthcare assistant. How can I help you today?";
pub const FALLBACK_REPLY: &str = "I'm here to help! How can I assist you?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Bot,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub id: u32,
    pub sender: Sender,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// A conversation with the assistant. History lives only in memory.
pub struct ChatSession<B: HealthBackend> {
    backend: B,
    session_id: String,
    messages: Vec<ChatMessage>,
}

impl<B: HealthBackend> ChatSession<B> {
    pub fn new(backend: B, session_id: impl Into<String>) -> Self {
        let mut session = Self {
            backend,
            session_id: session_id.into(),
            messages: Vec::new(),
        };
        session.push(Sender::Bot, GREETING.to_string());
        session
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    fn push(&mut self, sender: Sender, content: String) -> &ChatMessage {
        let id = self.messages.len() as u32 + 1;
        self.messages.push(ChatMessage {
            id,
            sender,
            content,
            timestamp: Utc::now(),
        });
        &self.messages[self.messages.len() - 1]
    }

    /// Sends one patient message and records the reply. Blank input is ignored
    /// (`Ok(None)`). On failure the patient message stays in the history.
    pub async fn send(&mut self, text: &str) -> Result<Option<&ChatMessage>> {
        if text.trim().is_empty() {
            return Ok(None);
        }
        self.push(Sender::User, text.to_string());

        let request = ChatRequest {
            session_id: self.session_id.clone(),
            patient_message: text.to_string(),
        };
        let reply = match self.backend.chat(&request).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!("Error fetching chat response: {}", e);
                return Err(e);
            }
        };

        let content = reply
            .doctor_response
            .filter(|r| !r.is_empty())
            .unwrap_or_else(|| FALLBACK_REPLY.to_string());
        Ok(Some(self.push(Sender::Bot, content)))
    }
}
