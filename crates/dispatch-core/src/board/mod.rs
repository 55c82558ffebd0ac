//! Per-dashboard working state: the call queue, unit roster, and activity log.
//!
//! A `Board` is owned by exactly one logged-in session and rebuilt from seed
//! data at every login. Every operation is synchronous, takes the wall-clock
//! time used for stamping, and either applies fully or returns an `AppError`
//! leaving the board untouched.

pub mod seed;

use chrono::NaiveTime;
use shared_types::{
    AppError, BoardConfig, BroadcastRequest, Call, CallStatus, LogEntry, LogKind, NewCallRequest,
    Priority, Recipient, Role, Unit, UnitId, UnitStatus, UnitSummary, UserProfile,
};
use validator::Validate;

/// How assigning a unit to an existing call affects the unit itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusLink {
    /// Only the call records the assignment; the unit keeps its status.
    #[default]
    CallOnly,
    /// The unit moves to `Dispatched` alongside the call.
    Mirror,
}

impl StatusLink {
    pub fn from_config(config: &BoardConfig) -> Self {
        if config.mirror_unit_status {
            StatusLink::Mirror
        } else {
            StatusLink::CallOnly
        }
    }
}

/// Counters for the quick-stat cards under each dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardStats {
    pub active_calls: usize,
    pub high_priority: usize,
    pub open_calls: usize,
    pub units: UnitSummary,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    role: Role,
    operator: String,
    on_duty: bool,
    calls: Vec<Call>,
    units: Vec<Unit>,
    log: Vec<LogEntry>,
    link: StatusLink,
}

impl Board {
    pub fn new(profile: &UserProfile, calls: Vec<Call>, units: Vec<Unit>, log: Vec<LogEntry>) -> Self {
        Self {
            role: profile.role,
            operator: profile.name.clone(),
            on_duty: false,
            calls,
            units,
            log,
            link: StatusLink::default(),
        }
    }

    /// The seeded board for the profile's role.
    pub fn seeded(profile: &UserProfile, link: StatusLink) -> Self {
        let mut board = match profile.role {
            Role::Leo => seed::leo(profile),
            Role::Ems => seed::ems(profile),
            Role::Dispatch => seed::dispatch(profile),
        };
        board.link = link;
        board
    }

    // -- Accessors ----------------------------------------------------------

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn on_duty(&self) -> bool {
        self.on_duty
    }

    pub fn link(&self) -> StatusLink {
        self.link
    }

    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    pub fn call(&self, id: u32) -> Option<&Call> {
        self.calls.iter().find(|c| c.id == id)
    }

    pub fn unit(&self, id: &UnitId) -> Option<&Unit> {
        self.units.iter().find(|u| &u.id == id)
    }

    /// Units offered by the new-call form.
    pub fn available_units(&self) -> impl Iterator<Item = &Unit> {
        self.units
            .iter()
            .filter(|u| u.status == UnitStatus::Available)
    }

    pub fn unit_summary(&self) -> UnitSummary {
        self.units
            .iter()
            .fold(UnitSummary::default(), |mut acc, unit| {
                match unit.status {
                    UnitStatus::Available => acc.available += 1,
                    status if status.is_busy() => acc.busy += 1,
                    status if status.is_unavailable() => acc.unavailable += 1,
                    _ => {}
                }
                acc
            })
    }

    pub fn stats(&self) -> BoardStats {
        let live = self
            .calls
            .iter()
            .filter(|c| c.status != CallStatus::Denied);
        BoardStats {
            active_calls: live.clone().count(),
            high_priority: live.filter(|c| c.priority == Priority::High).count(),
            open_calls: self.calls.iter().filter(|c| c.status.is_open()).count(),
            units: self.unit_summary(),
        }
    }

    // -- Operations ---------------------------------------------------------

    /// Flip the duty flag and record it. Returns the new flag.
    pub fn toggle_duty(&mut self, now: NaiveTime) -> bool {
        self.on_duty = !self.on_duty;
        let state = if self.on_duty { "on" } else { "off" };
        let message = format!("{} {} went {} duty", self.role.duty_title(), self.operator, state);
        tracing::info!(role = %self.role, on_duty = self.on_duty, "duty toggled");
        self.push_log(now, message, LogKind::System);
        self.on_duty
    }

    pub fn accept_call(&mut self, id: u32, now: NaiveTime) -> Result<&Call, AppError> {
        self.require_on_duty("accept")?;
        self.decide(id, CallStatus::Accepted, "Accepted", now)
    }

    pub fn deny_call(&mut self, id: u32, now: NaiveTime) -> Result<&Call, AppError> {
        self.require_on_duty("deny")?;
        self.decide(id, CallStatus::Denied, "Denied", now)
    }

    /// Move a call along its lifecycle (dispatch center status buttons).
    pub fn advance_call(&mut self, id: u32, next: CallStatus, now: NaiveTime) -> Result<&Call, AppError> {
        let index = self.call_index(id)?;
        let current = self.calls[index].status;
        check_transition(id, current, next)?;

        self.calls[index].status = next;
        let message = format!("Call #{id} marked {next}: {}", self.calls[index].summary());
        tracing::info!(call_id = id, from = %current, to = %next, "call status advanced");
        self.push_log(now, message, LogKind::Action);
        Ok(&self.calls[index])
    }

    /// Assign a roster unit to an existing call.
    pub fn dispatch_unit(&mut self, call_id: u32, unit_id: &UnitId, now: NaiveTime) -> Result<&Call, AppError> {
        let index = self.call_index(call_id)?;
        let unit_index = self.unit_index(unit_id)?;
        check_transition(call_id, self.calls[index].status, CallStatus::Dispatched)?;

        if self.link == StatusLink::Mirror {
            let unit = &mut self.units[unit_index];
            if unit.status != UnitStatus::Available {
                return Err(AppError::conflict(format!(
                    "{} is {} and cannot be dispatched",
                    unit.name, unit.status
                )));
            }
            unit.status = UnitStatus::Dispatched;
            unit.last_update = now;
        }

        let call = &mut self.calls[index];
        call.status = CallStatus::Dispatched;
        call.assigned_unit = Some(unit_id.clone());
        call.assigned_name = Some(self.units[unit_index].name.clone());

        let message = format!(
            "Dispatched {} to call: {}",
            self.units[unit_index].name,
            self.calls[index].summary()
        );
        tracing::info!(call_id, unit = %unit_id, link = ?self.link, "unit dispatched");
        self.push_log(now, message, LogKind::Action);
        Ok(&self.calls[index])
    }

    /// Create a call from the dispatch form. The new call is placed at the top
    /// of the queue and the chosen unit is marked `Dispatched`.
    pub fn create_call(&mut self, request: &NewCallRequest, now: NaiveTime) -> Result<&Call, AppError> {
        request.validate()?;

        let call_type = request.call_type.trim();
        if !shared_types::is_known_call_type(call_type) {
            return Err(AppError::field("call_type", format!("Unknown call type: {call_type}")));
        }
        let address = request.address.trim();
        if address.is_empty() {
            return Err(AppError::field("address", "Address is required"));
        }
        let (Some(priority), Some(unit_id)) = (request.priority, request.assigned_unit.as_ref()) else {
            return Err(AppError::field("assigned_unit", "Select a unit"));
        };

        let unit_index = self
            .unit_index(unit_id)
            .map_err(|_| AppError::field("assigned_unit", format!("Unit {unit_id} is not on the roster")))?;
        let unit = &mut self.units[unit_index];
        if unit.status != UnitStatus::Available {
            return Err(AppError::conflict(format!("{} is {}", unit.name, unit.status)));
        }
        unit.status = UnitStatus::Dispatched;
        unit.last_update = now;
        let unit_name = unit.name.clone();

        let id = self.calls.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        let description = request.description.trim();
        let mut call = Call::pending(id, call_type, address, priority, now)
            .with_status(CallStatus::Dispatched)
            .with_unit(unit_id.clone(), &unit_name);
        if !description.is_empty() {
            call.description = Some(description.to_string());
        }

        let message = format!("New call dispatched: {} ({unit_name})", call.summary());
        tracing::info!(call_id = id, unit = %unit_id, priority = %priority, "call created");
        self.calls.insert(0, call);
        self.push_log(now, message, LogKind::Call);
        Ok(&self.calls[0])
    }

    /// Field-operator message to dispatch. Blank text is rejected.
    pub fn send_message(&mut self, text: &str, now: NaiveTime) -> Result<&LogEntry, AppError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::field("message", "Message cannot be empty"));
        }
        tracing::debug!(role = %self.role, "message to dispatch");
        self.push_log(now, format!("Message to Dispatch: {text}"), LogKind::Message);
        Ok(self.last_log())
    }

    /// Dispatch-center broadcast to a group or a single unit.
    pub fn broadcast(&mut self, request: &BroadcastRequest, now: NaiveTime) -> Result<&LogEntry, AppError> {
        request.validate()?;
        let content = request.content.trim();
        if content.is_empty() {
            return Err(AppError::field("content", "Message content is required"));
        }
        let Some(recipient) = request.recipient.as_ref() else {
            return Err(AppError::field("recipient", "Select a recipient"));
        };

        let addressee = match recipient {
            Recipient::Unit(id) => self
                .unit(id)
                .map(|u| u.name.clone())
                .ok_or_else(|| AppError::field("recipient", format!("Unit {id} is not on the roster")))?,
            group => group.to_string(),
        };

        tracing::info!(recipient = %recipient, urgency = request.urgency.as_str(), "broadcast sent");
        let message = format!("Message to {addressee} [{}]: {content}", request.urgency.as_str());
        self.push_log(now, message, LogKind::Message);
        Ok(self.last_log())
    }

    /// Overwrite a unit's status from the closed set and refresh its stamp.
    pub fn set_unit_status(&mut self, unit_id: &UnitId, status: UnitStatus, now: NaiveTime) -> Result<&Unit, AppError> {
        let index = self.unit_index(unit_id)?;
        let unit = &mut self.units[index];
        let previous = unit.status;
        unit.status = status;
        unit.last_update = now;

        let message = format!("{} status changed to {status}", unit.name);
        tracing::info!(unit = %unit_id, from = %previous, to = %status, "unit status updated");
        self.push_log(now, message, LogKind::Action);
        Ok(&self.units[index])
    }

    // -- Internals ----------------------------------------------------------

    fn decide(&mut self, id: u32, next: CallStatus, verb: &str, now: NaiveTime) -> Result<&Call, AppError> {
        let index = self.call_index(id)?;
        check_transition(id, self.calls[index].status, next)?;

        self.calls[index].status = next;
        let message = format!("{verb} call: {}", self.calls[index].summary());
        tracing::info!(call_id = id, status = %next, "call decided");
        self.push_log(now, message, LogKind::Action);
        Ok(&self.calls[index])
    }

    fn require_on_duty(&self, action: &str) -> Result<(), AppError> {
        if self.on_duty {
            Ok(())
        } else {
            Err(AppError::forbidden(format!("Go on duty to {action} calls")))
        }
    }

    fn call_index(&self, id: u32) -> Result<usize, AppError> {
        self.calls
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| AppError::not_found(format!("Call #{id} not found")))
    }

    fn unit_index(&self, id: &UnitId) -> Result<usize, AppError> {
        self.units
            .iter()
            .position(|u| &u.id == id)
            .ok_or_else(|| AppError::not_found(format!("Unit {id} not found")))
    }

    fn push_log(&mut self, time: NaiveTime, message: String, kind: LogKind) {
        let id = self.log.len() as u32 + 1;
        self.log.push(LogEntry::new(id, time, message, kind));
    }

    fn last_log(&self) -> &LogEntry {
        // push_log always runs before this is called
        &self.log[self.log.len() - 1]
    }
}

fn check_transition(id: u32, from: CallStatus, to: CallStatus) -> Result<(), AppError> {
    if from.can_become(to) {
        Ok(())
    } else {
        tracing::warn!(call_id = id, %from, %to, "rejected call transition");
        Err(AppError::invalid_transition(format!(
            "Call #{id} is {from} and cannot become {to}"
        )))
    }
}
