use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Category of an activity log line; drives its colour in the log panel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum LogKind {
    System,
    Call,
    Action,
    Message,
}

impl LogKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogKind::System => "system",
            LogKind::Call => "call",
            LogKind::Action => "action",
            LogKind::Message => "message",
        }
    }
}

/// One append-only line in a dashboard's activity log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogEntry {
    pub id: u32,
    pub time: NaiveTime,
    pub message: String,
    pub kind: LogKind,
}

impl LogEntry {
    pub fn new(id: u32, time: NaiveTime, message: impl Into<String>, kind: LogKind) -> Self {
        Self {
            id,
            time,
            message: message.into(),
            kind,
        }
    }
}
