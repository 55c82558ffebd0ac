//! Display helpers shared by the dashboards.

use chrono::NaiveDateTime;
use shared_types::{CallStatus, LogKind, Priority, UnitStatus, VehicleStatus};
use shared_ui::BadgeVariant;

/// "14:37:05" for the header clock.
pub fn clock_time(now: NaiveDateTime) -> String {
    now.format("%H:%M:%S").to_string()
}

/// "Friday, October 16, 2026" under the header clock.
pub fn clock_date(now: NaiveDateTime) -> String {
    now.format("%A, %B %-d, %Y").to_string()
}

pub fn priority_variant(priority: Priority) -> BadgeVariant {
    match priority {
        Priority::High => BadgeVariant::Destructive,
        Priority::Medium => BadgeVariant::Warning,
        Priority::Low => BadgeVariant::Secondary,
    }
}

pub fn call_status_variant(status: CallStatus) -> BadgeVariant {
    match status {
        CallStatus::Pending => BadgeVariant::Outline,
        CallStatus::Accepted => BadgeVariant::Success,
        CallStatus::Denied => BadgeVariant::Destructive,
        CallStatus::Dispatched => BadgeVariant::Primary,
        CallStatus::EnRoute => BadgeVariant::Warning,
        CallStatus::InProgress => BadgeVariant::Secondary,
    }
}

pub fn unit_status_variant(status: UnitStatus) -> BadgeVariant {
    match status {
        UnitStatus::Available => BadgeVariant::Success,
        UnitStatus::Dispatched => BadgeVariant::Primary,
        UnitStatus::EnRoute => BadgeVariant::Warning,
        UnitStatus::OnScene => BadgeVariant::Destructive,
        UnitStatus::OutOfService | UnitStatus::OffDuty => BadgeVariant::Secondary,
    }
}

pub fn vehicle_status_variant(status: VehicleStatus) -> BadgeVariant {
    match status {
        VehicleStatus::Stolen => BadgeVariant::Destructive,
        VehicleStatus::Clear => BadgeVariant::Success,
    }
}

/// CSS modifier for an activity log line.
pub fn log_kind_class(kind: LogKind) -> &'static str {
    match kind {
        LogKind::System => "log-entry log-system",
        LogKind::Call => "log-entry log-call",
        LogKind::Action => "log-entry log-action",
        LogKind::Message => "log-entry log-message",
    }
}
