pub mod activity_log;
pub mod call_card;
pub mod clock;
pub mod message_box;
pub mod record_search;

pub use activity_log::ActivityLog;
pub use call_card::CallCard;
pub use clock::HeaderClock;
pub use message_box::MessageBox;
