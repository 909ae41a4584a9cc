use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn as_str(&self) -> &str {
        match self {
            Sender::User => "user",
            Sender::Bot => "bot",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "user" => Some(Sender::User),
            "bot" => Some(Sender::Bot),
            _ => None,
        }
    }
}

/// One row of the static tip table. Keywords are matched as substrings
/// of the lowercased user message.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KnowledgeEntry {
    pub keyword: String,
    pub response: String,
    pub source: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryTurn {
    pub sender: Sender,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// A reply picked by the responder, before it is rendered to markup.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Crisis { response: String, source: String },
    NameLearned { name: String },
    Knowledge { response: String, source: String },
    Fallback { name: String },
}

impl Reply {
    pub fn branch(&self) -> &str {
        match self {
            Reply::Crisis { .. } => "crisis",
            Reply::NameLearned { .. } => "name",
            Reply::Knowledge { .. } => "knowledge",
            Reply::Fallback { .. } => "fallback",
        }
    }

    pub fn render(&self) -> String {
        match self {
            Reply::Crisis { response, source } => format!(
                "<b style='color:red'>{}</b> <br><br>Source: {}",
                response, source
            ),
            Reply::NameLearned { name } => {
                format!("Thank you, {}. I will keep that in mind.", name)
            }
            Reply::Knowledge { response, source } => format!(
                "{} <br><br><small>Source: {}</small>",
                response, source
            ),
            Reply::Fallback { name } => format!(
                "I'm listening, {}. I can help with things like 'panic' attacks, \
                 'body image', 'addiction', or 'focus' issues. Take your time.",
                name
            ),
        }
    }
}
