use crate::models::response::CommandResponse;

pub const FALLBACK_RESPONSE: &str = "Command processed successfully";
pub const TRANSPORT_FAILURE_REPLY: &str = "Failed to process command. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone)]
pub struct ChatTurn {
    pub role: Role,
    pub text: String,
}

/// Chat history between the user and the assistant, oldest turn first.
#[derive(Debug, Default)]
pub struct Transcript {
    turns: Vec<ChatTurn>,
}

impl Transcript {
    pub fn push_user(&mut self, text: impl Into<String>) {
        self.turns.push(ChatTurn {
            role: Role::User,
            text: text.into(),
        });
    }

    pub fn push_assistant(&mut self, text: impl Into<String>) {
        self.turns.push(ChatTurn {
            role: Role::Assistant,
            text: text.into(),
        });
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn last(&self) -> Option<&ChatTurn> {
        self.turns.last()
    }
}

/// Assistant turn text for a server reply: the error field wins, then the
/// response text, then a fixed fallback.
pub fn assistant_reply(result: &CommandResponse) -> String {
    match &result.error {
        Some(error) => format!("Error: {}", error),
        None => result
            .response
            .clone()
            .unwrap_or_else(|| FALLBACK_RESPONSE.to_string()),
    }
}

/// Heuristic, not a contract: commands that talk about adding or updating
/// probably mutated server state, so the caller refreshes afterwards.
pub fn command_mutates(command: &str) -> bool {
    let lower = command.to_lowercase();
    lower.contains("add") || lower.contains("update")
}
