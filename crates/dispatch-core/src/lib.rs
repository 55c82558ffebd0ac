//! Dispatch console engine: badge login, per-role boards, and the static
//! record systems behind the search panels.

pub mod board;
pub mod config;
pub mod directory;
pub mod records;
pub mod search;
pub mod session;

pub use board::{Board, BoardStats, StatusLink};
pub use config::load_config;
pub use records::RecordSource;
pub use search::{RecordSystem, SearchTicket, SearchTracker};
pub use session::{ActiveSession, Session};
