use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(feature = "validation")]
use validator::Validate;

use crate::UnitId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Call types offered by the dispatch form.
pub const CALL_TYPES: &[&str] = &[
    "Traffic Stop",
    "Domestic Disturbance",
    "Medical Emergency",
    "Burglary",
    "Vehicle Accident",
    "Welfare Check",
];

pub fn is_known_call_type(s: &str) -> bool {
    CALL_TYPES.contains(&s)
}

// ---------------------------------------------------------------------------
// Priority
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Priority {
    Low,
    Medium,
    High,
}

pub const ALL_PRIORITIES: &[Priority] = &[Priority::High, Priority::Medium, Priority::Low];

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    /// Parse a form value. Unknown values yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Low" => Some(Priority::Low),
            "Medium" => Some(Priority::Medium),
            "High" => Some(Priority::High),
            _ => None,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Status lifecycle
// ---------------------------------------------------------------------------

/// Lifecycle of a call. Transitions are closed; see [`CallStatus::can_become`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum CallStatus {
    Pending,
    Accepted,
    Denied,
    Dispatched,
    EnRoute,
    InProgress,
}

impl CallStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CallStatus::Pending => "Pending",
            CallStatus::Accepted => "Accepted",
            CallStatus::Denied => "Denied",
            CallStatus::Dispatched => "Dispatched",
            CallStatus::EnRoute => "En Route",
            CallStatus::InProgress => "In Progress",
        }
    }

    /// Whether moving from `self` to `next` is an allowed transition.
    ///
    /// ```text
    /// Pending    -> Accepted | Denied | Dispatched
    /// Accepted   -> Dispatched
    /// Dispatched -> EnRoute | InProgress
    /// EnRoute    -> InProgress
    /// ```
    pub fn can_become(&self, next: CallStatus) -> bool {
        use CallStatus::*;
        matches!(
            (self, next),
            (Pending, Accepted)
                | (Pending, Denied)
                | (Pending, Dispatched)
                | (Accepted, Dispatched)
                | (Dispatched, EnRoute)
                | (Dispatched, InProgress)
                | (EnRoute, InProgress)
        )
    }

    /// No further transitions are possible.
    pub fn is_terminal(&self) -> bool {
        matches!(self, CallStatus::Denied | CallStatus::InProgress)
    }

    /// Calls still needing an operator decision or a unit.
    pub fn is_open(&self) -> bool {
        matches!(self, CallStatus::Pending | CallStatus::Accepted)
    }
}

impl fmt::Display for CallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Call
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Call {
    pub id: u32,
    pub call_type: String,
    pub address: String,
    pub priority: Priority,
    pub status: CallStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_unit: Option<UnitId>,
    /// Display name of the assigned unit, kept with the call so units off
    /// this board's roster still read by name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub time: NaiveTime,
}

impl Call {
    /// A seed or freshly received call with no unit attached.
    pub fn pending(id: u32, call_type: &str, address: &str, priority: Priority, time: NaiveTime) -> Self {
        Self {
            id,
            call_type: call_type.to_string(),
            address: address.to_string(),
            priority,
            status: CallStatus::Pending,
            assigned_unit: None,
            assigned_name: None,
            description: None,
            time,
        }
    }

    pub fn with_status(mut self, status: CallStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_unit(mut self, unit: impl Into<UnitId>, name: &str) -> Self {
        self.assigned_unit = Some(unit.into());
        self.assigned_name = Some(name.to_string());
        self
    }

    /// "<type> at <address>", the phrase used by every log entry about a call.
    pub fn summary(&self) -> String {
        format!("{} at {}", self.call_type, self.address)
    }
}

// ---------------------------------------------------------------------------
// Request Types
// ---------------------------------------------------------------------------

/// Dispatch-center form for creating a new call with a unit attached.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct NewCallRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Select a call type"))
    )]
    pub call_type: String,
    #[cfg_attr(
        feature = "validation",
        validate(required(message = "Select a priority"))
    )]
    pub priority: Option<Priority>,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Address is required"))
    )]
    pub address: String,
    #[serde(default)]
    pub description: String,
    #[cfg_attr(
        feature = "validation",
        validate(required(message = "Select a unit"))
    )]
    pub assigned_unit: Option<UnitId>,
}
