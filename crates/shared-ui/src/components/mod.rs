// Standalone components
pub mod badge;
pub mod button;
pub mod card;
pub mod detail_list;
pub mod form_select;
pub mod input;
pub mod stat;
pub mod textarea;

// Primitive wrappers
pub mod tabs;
pub mod toast;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use detail_list::*;
pub use form_select::*;
pub use input::*;
pub use stat::*;
pub use tabs::*;
pub use textarea::*;
pub use toast::*;
