//! # App State Module
//!
//! Central application state for the banking mock-up.
//!
//! ## Key Types:
//! - `BankingApp` - Main application state struct
//!
//! ## State Management:
//! The app owns only the current route and the send-money wizard state. Every
//! other screen is a pure rendering of compile-time sample data, so there is
//! nothing else to hold. The wizard state is screen-local: it is discarded
//! whenever navigation leaves (or re-enters) the send flow, which is what
//! gives the flow its "reset on unmount" behavior.

use log::info;

use crate::ui::routing::Route;
use crate::ui::state::SendMoneyState;

/// Main application struct for the egui banking mock-up.
pub struct BankingApp {
    /// The screen currently shown inside the phone frame.
    pub current_route: Route,

    /// Send-money wizard state; live only while on the `/send` route.
    pub send_money: SendMoneyState,
}

impl BankingApp {
    /// Create a new BankingApp showing the dashboard.
    pub fn new() -> Result<Self, anyhow::Error> {
        info!("Initializing BankingApp");
        Ok(Self {
            current_route: Route::Dashboard,
            send_money: SendMoneyState::new(),
        })
    }

    /// Navigate to a route. Entering or leaving the send flow resets the
    /// wizard so step, contact, and amount never survive navigation.
    pub fn navigate(&mut self, route: Route) {
        if route == self.current_route {
            return;
        }
        if self.current_route == Route::SendMoney || route == Route::SendMoney {
            self.send_money = SendMoneyState::new();
        }
        info!("Navigating to {}", route.path());
        self.current_route = route;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::state::WizardStep;

    #[test]
    fn test_new_app_starts_on_dashboard() {
        let app = BankingApp::new().unwrap();
        assert_eq!(app.current_route, Route::Dashboard);
        assert_eq!(app.send_money.step, WizardStep::SelectContact);
    }

    #[test]
    fn test_navigate_changes_route() {
        let mut app = BankingApp::new().unwrap();
        app.navigate(Route::Cards);
        assert_eq!(app.current_route, Route::Cards);
        app.navigate(Route::Support);
        assert_eq!(app.current_route, Route::Support);
    }

    #[test]
    fn test_leaving_send_flow_discards_wizard_state() {
        let mut app = BankingApp::new().unwrap();
        app.navigate(Route::SendMoney);

        let contact = shared::sample_contacts().remove(0);
        app.send_money.select_contact(contact);
        assert_eq!(app.send_money.step, WizardStep::EnterAmount);

        app.navigate(Route::Dashboard);
        app.navigate(Route::SendMoney);
        assert_eq!(app.send_money.step, WizardStep::SelectContact);
        assert!(app.send_money.selected_contact.is_none());
        assert_eq!(app.send_money.amount, "");
    }
}
