//! # App Module
//!
//! Thin re-export point for the application type so `main.rs` can stay a
//! pure entry point.

pub use crate::ui::app_state::BankingApp;
