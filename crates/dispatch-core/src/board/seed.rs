//! Opening state of each dashboard. Rebuilt at every login.

use shared_types::{
    hhmm, Call, CallStatus, LogEntry, LogKind, Priority, Unit, UnitCategory, UnitStatus,
    UserProfile,
};

use super::Board;

fn shift_started(hour: u32, minute: u32) -> LogEntry {
    LogEntry::new(1, hhmm(hour, minute), "Shift started", LogKind::System)
}

pub fn leo(profile: &UserProfile) -> Board {
    let calls = vec![
        Call::pending(1, "Domestic Disturbance", "1234 Main St", Priority::High, hhmm(14, 30)),
        Call::pending(2, "Traffic Stop", "5678 Oak Ave", Priority::Low, hhmm(14, 45)),
        Call::pending(3, "Burglary", "910 Pine Rd", Priority::Medium, hhmm(15, 0)),
    ];
    let log = vec![
        shift_started(14, 30),
        LogEntry::new(2, hhmm(14, 35), "New call received: Domestic Disturbance", LogKind::Call),
        LogEntry::new(3, hhmm(14, 45), "New call received: Traffic Stop", LogKind::Call),
    ];
    let units = [("U2", "Unit 2", "Patrol"), ("U5", "Unit 5", "K9"), ("U8", "Unit 8", "Traffic")]
        .into_iter()
        .map(|(id, name, specialty)| {
            Unit::new(id, name, UnitCategory::Leo, specialty, UnitStatus::Available, "", hhmm(14, 30))
        })
        .collect();

    Board::new(profile, calls, units, log)
}

pub fn ems(profile: &UserProfile) -> Board {
    let calls = vec![
        Call::pending(1, "Medical Emergency", "1234 Main St", Priority::High, hhmm(14, 35)),
        Call::pending(2, "Vehicle Accident", "5678 Oak Ave", Priority::Medium, hhmm(14, 40)),
        Call::pending(3, "Chest Pain", "9012 Pine Rd", Priority::High, hhmm(14, 50)),
    ];
    let log = vec![
        shift_started(14, 30),
        LogEntry::new(2, hhmm(14, 35), "New call received: Medical Emergency", LogKind::Call),
        LogEntry::new(3, hhmm(14, 40), "New call received: Vehicle Accident", LogKind::Call),
    ];

    Board::new(profile, calls, Vec::new(), log)
}

pub fn dispatch(profile: &UserProfile) -> Board {
    let calls = vec![
        Call::pending(1, "Domestic Disturbance", "1234 Main St", Priority::High, hhmm(14, 30))
            .with_status(CallStatus::Dispatched)
            .with_unit("U12", "Unit 12"),
        Call::pending(2, "Traffic Stop", "5678 Oak Ave", Priority::Low, hhmm(14, 25))
            .with_status(CallStatus::InProgress)
            .with_unit("U7", "Unit 7"),
        Call::pending(3, "Medical Emergency", "9012 Pine Rd", Priority::High, hhmm(14, 35))
            .with_status(CallStatus::EnRoute)
            .with_unit("A3", "Ambulance 3"),
    ];

    use UnitCategory::{Ems, Leo};
    let units = vec![
        Unit::new("U1", "Unit 1", Leo, "Patrol", UnitStatus::Available, "John Smith", hhmm(14, 25)),
        Unit::new("U3", "Unit 3", Leo, "Patrol", UnitStatus::Dispatched, "Robert Johnson", hhmm(14, 10)),
        Unit::new("U7", "Unit 7", Leo, "Traffic", UnitStatus::OnScene, "Michael Williams", hhmm(14, 20)),
        Unit::new("U9", "Unit 9", Leo, "K9", UnitStatus::OutOfService, "David Brown", hhmm(13, 45)),
        Unit::new("A1", "Ambulance 1", Ems, "ALS", UnitStatus::OffDuty, "Sarah Connor", hhmm(14, 15)),
        Unit::new("A3", "Ambulance 3", Ems, "ALS", UnitStatus::EnRoute, "James Wilson", hhmm(14, 35)),
        Unit::new("A5", "Ambulance 5", Ems, "BLS", UnitStatus::Available, "Emily Davis", hhmm(14, 5)),
    ];

    Board::new(profile, calls, units, vec![shift_started(14, 0)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::Role;

    #[test]
    fn every_seed_call_starts_with_unique_ids() {
        let profile = UserProfile::new("Seed", Role::Leo, "Dept", "Post");
        for board in [leo(&profile), ems(&profile), dispatch(&profile)] {
            let mut ids: Vec<u32> = board.calls().iter().map(|c| c.id).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), board.calls().len());
            assert!(!board.on_duty());
        }
    }

    #[test]
    fn dispatch_roster_has_four_leo_and_three_ems_units() {
        let profile = UserProfile::new("Seed", Role::Dispatch, "911", "Metro");
        let board = dispatch(&profile);
        let leo = board.units().iter().filter(|u| u.category == UnitCategory::Leo).count();
        assert_eq!(leo, 4);
        assert_eq!(board.units().len() - leo, 3);
    }

    #[test]
    fn dispatch_calls_carry_unit_names() {
        let profile = UserProfile::new("Seed", Role::Dispatch, "911", "Metro");
        let board = dispatch(&profile);
        let names: Vec<_> = board
            .calls()
            .iter()
            .map(|c| c.assigned_name.as_deref())
            .collect();
        assert_eq!(names, vec![Some("Unit 12"), Some("Unit 7"), Some("Ambulance 3")]);
        assert!(board.unit(&"U12".into()).is_none());
    }

    #[test]
    fn leo_log_ids_are_sequential() {
        let profile = UserProfile::new("Seed", Role::Leo, "Dept", "Post");
        let ids: Vec<u32> = leo(&profile).log().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
