pub mod error;
pub mod feature_flags;

pub mod activity;
pub mod call;
pub mod config;
pub mod message;
pub mod models;
pub mod records;
pub mod unit;

pub use error::*;
pub use feature_flags::*;

pub use activity::*;
pub use call::*;
pub use config::*;
pub use message::*;
pub use models::*;
pub use records::*;
pub use unit::*;
