pub mod app_implementation;
pub mod app_state;
pub mod components;
pub mod routing;
pub mod state;

pub use routing::*;
