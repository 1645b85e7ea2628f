pub mod bottom_nav;
pub mod cards;
pub mod dashboard;
pub mod phone_frame;
pub mod screen_router;
pub mod send_money;
pub mod styling;
pub mod support;
pub mod theme;

pub use styling::*;
