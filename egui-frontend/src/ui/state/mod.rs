pub mod send_money_state;

pub use send_money_state::*;
