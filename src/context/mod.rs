use crate::value::PortValue;
use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Role attached to a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Ai,
    Other,
}

/// One entry of the ordered chat history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// The character currently driving the chat, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveCharacter {
    pub name: String,
    pub id: i64,
}

/// Read-only runtime context consumed by block processors.
///
/// The engine never mutates or caches this state; each execution receives
/// a fresh snapshot built by the host for the current chat turn. The
/// variable table is the union of user-defined variables and built-in
/// placeholders.
pub trait ContextProvider: Sync {
    fn active_character(&self) -> Option<&ActiveCharacter>;

    /// Chat history in chronological order, oldest first.
    fn chat_history(&self) -> &[ChatMessage];

    fn resolve_variable(&self, name: &str) -> Option<PortValue>;
}

/// An owned context snapshot, suitable for hosts with simple state and for
/// tests. User variables shadow placeholders of the same name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaticContext {
    #[serde(default)]
    character: Option<ActiveCharacter>,
    #[serde(default)]
    history: Vec<ChatMessage>,
    #[serde(default)]
    variables: AHashMap<String, PortValue>,
    #[serde(default)]
    placeholders: AHashMap<String, PortValue>,
}

impl StaticContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_character(mut self, name: impl Into<String>, id: i64) -> Self {
        self.character = Some(ActiveCharacter {
            name: name.into(),
            id,
        });
        self
    }

    pub fn with_message(mut self, role: ChatRole, content: impl Into<String>) -> Self {
        self.history.push(ChatMessage::new(role, content));
        self
    }

    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<PortValue>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    pub fn with_placeholder(
        mut self,
        name: impl Into<String>,
        value: impl Into<PortValue>,
    ) -> Self {
        self.placeholders.insert(name.into(), value.into());
        self
    }
}

impl ContextProvider for StaticContext {
    fn active_character(&self) -> Option<&ActiveCharacter> {
        self.character.as_ref()
    }

    fn chat_history(&self) -> &[ChatMessage] {
        &self.history
    }

    fn resolve_variable(&self, name: &str) -> Option<PortValue> {
        self.variables
            .get(name)
            .or_else(|| self.placeholders.get(name))
            .cloned()
    }
}
