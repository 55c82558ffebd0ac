use shared_types::{Call, Priority};

#[cfg(feature = "desktop")]
const APP_NAME: &str = "Dispatch Console";

/// Only high-priority calls raise a desktop notification.
fn is_notifiable(call: &Call) -> bool {
    call.priority == Priority::High
}

/// Send a desktop notification (no-op on non-desktop platforms).
#[allow(unused_variables)]
pub fn send(title: &str, body: &str) {
    #[cfg(feature = "desktop")]
    {
        if let Err(e) = dioxus_sdk_notification::Notification::new()
            .app_name(APP_NAME.to_string())
            .summary(title.to_string())
            .body(body.to_string())
            .show()
        {
            tracing::warn!(error = %e, "failed to show desktop notification");
        }
    }
}

/// Announce a newly created call when it is urgent enough to interrupt.
pub fn new_call(call: &Call) {
    if is_notifiable(call) {
        send("High priority call", &call.summary());
    }
}
