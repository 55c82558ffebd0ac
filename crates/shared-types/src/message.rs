use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(feature = "validation")]
use validator::Validate;

use crate::UnitId;

/// Addressee of a dispatch-center broadcast.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Recipient {
    AllLeo,
    AllEms,
    AllUnits,
    Unit(UnitId),
}

impl Recipient {
    /// Stable `<select>` value. Single units use their roster id.
    pub fn key(&self) -> String {
        match self {
            Recipient::AllLeo => "all_leo".to_string(),
            Recipient::AllEms => "all_ems".to_string(),
            Recipient::AllUnits => "all".to_string(),
            Recipient::Unit(id) => id.to_string(),
        }
    }

    /// Inverse of [`Recipient::key`]. Empty input means nothing selected.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "" => None,
            "all_leo" => Some(Recipient::AllLeo),
            "all_ems" => Some(Recipient::AllEms),
            "all" => Some(Recipient::AllUnits),
            other => Some(Recipient::Unit(UnitId::from(other))),
        }
    }
}

impl fmt::Display for Recipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recipient::AllLeo => f.write_str("All LEO Units"),
            Recipient::AllEms => f.write_str("All EMS Units"),
            Recipient::AllUnits => f.write_str("All Units"),
            Recipient::Unit(id) => write!(f, "{id}"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    High,
    #[default]
    Normal,
    Low,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::High => "high",
            Urgency::Normal => "normal",
            Urgency::Low => "low",
        }
    }

    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "high" => Urgency::High,
            "low" => Urgency::Low,
            _ => Urgency::Normal,
        }
    }
}

/// Dispatch-center message form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct BroadcastRequest {
    #[cfg_attr(
        feature = "validation",
        validate(required(message = "Select a recipient"))
    )]
    pub recipient: Option<Recipient>,
    #[serde(default)]
    pub urgency: Urgency,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Message content is required"))
    )]
    pub content: String,
}
