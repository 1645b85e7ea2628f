//! # Send Money State Module
//!
//! State machine for the four-step money-transfer wizard.
//!
//! ## Steps:
//! 1. Select contact
//! 2. Enter amount (keypad)
//! 3. Review
//! 4. Success
//!
//! Transitions are linear in both directions. Nothing here does IO: "sending"
//! money is a pure state transition, and the whole struct is thrown away when
//! the user leaves the `/send` route.

use shared::{format_amount, validate_amount_text, Contact};

/// Longest amount string the keypad will build ("9999.99" is 7 chars).
const MAX_AMOUNT_LEN: usize = 7;

/// Maximum digits after the decimal separator.
const MAX_FRACTION_DIGITS: usize = 2;

/// The wizard's four steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    SelectContact,
    EnterAmount,
    Review,
    Success,
}

impl WizardStep {
    /// 1-based step number, used by the progress bar.
    pub fn number(self) -> u8 {
        match self {
            WizardStep::SelectContact => 1,
            WizardStep::EnterAmount => 2,
            WizardStep::Review => 3,
            WizardStep::Success => 4,
        }
    }

    pub const COUNT: u8 = 4;
}

/// A key on the amount keypad.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypadKey {
    /// Digit 0-9
    Digit(u8),
    /// The decimal separator
    Decimal,
}

/// What the caller should do after a back press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackAction {
    /// Back at step 1 leaves the flow; the caller navigates to the dashboard.
    ExitFlow,
    /// The wizard stepped back one step internally.
    SteppedBack,
}

/// All state owned by the send-money screen.
#[derive(Debug, Clone)]
pub struct SendMoneyState {
    pub step: WizardStep,
    /// Must be set before the wizard can move past step 1.
    pub selected_contact: Option<Contact>,
    /// Amount as typed. Kept as a string so the display shows exactly the
    /// user's keystrokes ("5." stays "5.", not "5").
    pub amount: String,
}

impl SendMoneyState {
    pub fn new() -> Self {
        Self {
            step: WizardStep::SelectContact,
            selected_contact: None,
            amount: String::new(),
        }
    }

    /// Store the chosen contact and advance to the amount step. Only valid at
    /// step 1; the contact list is not rendered anywhere else.
    pub fn select_contact(&mut self, contact: Contact) {
        if self.step != WizardStep::SelectContact {
            return;
        }
        log::info!("Contact selected: {}", contact.name);
        self.selected_contact = Some(contact);
        self.step = WizardStep::EnterAmount;
    }

    /// Append a keypad key to the amount, subject to the entry guards:
    /// a second decimal point, a third fractional digit, and an 8th
    /// character are all rejected as no-ops.
    pub fn press_key(&mut self, key: KeypadKey) {
        if self.step != WizardStep::EnterAmount {
            return;
        }
        if key == KeypadKey::Decimal && self.amount.contains('.') {
            return;
        }
        if let Some(fraction) = self.amount.split_once('.').map(|(_, f)| f) {
            if fraction.len() >= MAX_FRACTION_DIGITS {
                return;
            }
        }
        if self.amount.len() >= MAX_AMOUNT_LEN {
            return;
        }
        match key {
            KeypadKey::Digit(d) if d <= 9 => {
                self.amount.push((b'0' + d) as char);
            }
            KeypadKey::Digit(_) => {}
            KeypadKey::Decimal => self.amount.push('.'),
        }
    }

    /// Remove the last typed character, if any.
    pub fn delete_digit(&mut self) {
        if self.step != WizardStep::EnterAmount {
            return;
        }
        self.amount.pop();
    }

    /// Whether the Continue button on the amount step is enabled.
    pub fn can_continue(&self) -> bool {
        validate_amount_text(&self.amount).is_ok()
    }

    /// Advance from the amount step to review. Gated on a valid amount.
    pub fn confirm_amount(&mut self) {
        if self.step == WizardStep::EnterAmount && self.can_continue() {
            self.step = WizardStep::Review;
        }
    }

    /// Advance from review to success. No transfer happens anywhere.
    pub fn confirm_send(&mut self) {
        if self.step == WizardStep::Review {
            log::info!(
                "Mock transfer confirmed: {} to {}",
                self.formatted_amount(),
                self.contact_name()
            );
            self.step = WizardStep::Success;
        }
    }

    /// Step back one step, or signal the caller to leave the flow entirely
    /// when already at step 1.
    pub fn go_back(&mut self) -> BackAction {
        match self.step {
            WizardStep::SelectContact => BackAction::ExitFlow,
            WizardStep::EnterAmount => {
                self.step = WizardStep::SelectContact;
                BackAction::SteppedBack
            }
            WizardStep::Review => {
                self.step = WizardStep::EnterAmount;
                BackAction::SteppedBack
            }
            WizardStep::Success => {
                self.step = WizardStep::Review;
                BackAction::SteppedBack
            }
        }
    }

    /// Amount exactly as typed, for the keypad readout ("£" + keystrokes,
    /// with "0" standing in for an empty string).
    pub fn display_amount(&self) -> String {
        if self.amount.is_empty() {
            format!("{}0", shared::CURRENCY_SYMBOL)
        } else {
            format!("{}{}", shared::CURRENCY_SYMBOL, self.amount)
        }
    }

    /// Amount formatted to two decimal places for review and success copy.
    /// Zero when the amount has not been entered yet.
    pub fn formatted_amount(&self) -> String {
        format_amount(validate_amount_text(&self.amount).unwrap_or(0.0))
    }

    /// Selected contact's name, empty before step 1 completes.
    pub fn contact_name(&self) -> &str {
        self.selected_contact
            .as_ref()
            .map(|c| c.name.as_str())
            .unwrap_or("")
    }

    /// Success-step confirmation copy.
    pub fn success_message(&self) -> String {
        format!(
            "{} has been sent to {}.",
            self.formatted_amount(),
            self.contact_name()
        )
    }
}

impl Default for SendMoneyState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sarah() -> Contact {
        shared::sample_contacts()
            .into_iter()
            .find(|c| c.name == "Sarah")
            .unwrap()
    }

    fn state_at_amount_step() -> SendMoneyState {
        let mut state = SendMoneyState::new();
        state.select_contact(sarah());
        state
    }

    fn type_keys(state: &mut SendMoneyState, keys: &str) {
        for key in keys.chars() {
            match key {
                '.' => state.press_key(KeypadKey::Decimal),
                d => state.press_key(KeypadKey::Digit(d.to_digit(10).unwrap() as u8)),
            }
        }
    }

    #[test]
    fn test_new_state_starts_at_step_one() {
        let state = SendMoneyState::new();
        assert_eq!(state.step, WizardStep::SelectContact);
        assert!(state.selected_contact.is_none());
        assert_eq!(state.amount, "");
    }

    #[test]
    fn test_select_contact_advances_and_records() {
        let mut state = SendMoneyState::new();
        state.select_contact(sarah());
        assert_eq!(state.step, WizardStep::EnterAmount);
        assert_eq!(state.contact_name(), "Sarah");
    }

    #[test]
    fn test_second_decimal_point_is_rejected() {
        let mut state = state_at_amount_step();
        type_keys(&mut state, "1.5.");
        assert_eq!(state.amount, "1.5");
    }

    #[test]
    fn test_third_fraction_digit_is_rejected() {
        let mut state = state_at_amount_step();
        type_keys(&mut state, "1.234");
        assert_eq!(state.amount, "1.23");
    }

    #[test]
    fn test_eighth_character_is_rejected() {
        let mut state = state_at_amount_step();
        type_keys(&mut state, "12345678");
        assert_eq!(state.amount, "1234567");
    }

    #[test]
    fn test_delete_removes_last_character() {
        let mut state = state_at_amount_step();
        type_keys(&mut state, "50");
        state.delete_digit();
        assert_eq!(state.amount, "5");
        state.delete_digit();
        state.delete_digit(); // delete on empty is a no-op
        assert_eq!(state.amount, "");
    }

    #[test]
    fn test_continue_gating() {
        let mut state = state_at_amount_step();
        assert!(!state.can_continue()); // empty

        type_keys(&mut state, "0");
        assert!(!state.can_continue()); // zero

        state.delete_digit();
        type_keys(&mut state, "0.01");
        assert!(state.can_continue());
    }

    #[test]
    fn test_confirm_amount_requires_valid_amount() {
        let mut state = state_at_amount_step();
        state.confirm_amount();
        assert_eq!(state.step, WizardStep::EnterAmount);

        type_keys(&mut state, "50");
        state.confirm_amount();
        assert_eq!(state.step, WizardStep::Review);
    }

    #[test]
    fn test_back_from_step_one_exits_flow() {
        let mut state = SendMoneyState::new();
        assert_eq!(state.go_back(), BackAction::ExitFlow);
        assert_eq!(state.step, WizardStep::SelectContact);
    }

    #[test]
    fn test_back_decrements_one_step_at_a_time() {
        let mut state = state_at_amount_step();
        type_keys(&mut state, "50");
        state.confirm_amount();
        state.confirm_send();
        assert_eq!(state.step, WizardStep::Success);

        assert_eq!(state.go_back(), BackAction::SteppedBack);
        assert_eq!(state.step, WizardStep::Review);
        assert_eq!(state.go_back(), BackAction::SteppedBack);
        assert_eq!(state.step, WizardStep::EnterAmount);
        assert_eq!(state.go_back(), BackAction::SteppedBack);
        assert_eq!(state.step, WizardStep::SelectContact);
        assert_eq!(state.go_back(), BackAction::ExitFlow);
    }

    #[test]
    fn test_step_never_leaves_range() {
        let mut state = SendMoneyState::new();
        // Operations out of order must not move the step anywhere illegal
        state.confirm_send();
        state.confirm_amount();
        state.press_key(KeypadKey::Digit(5));
        state.delete_digit();
        assert_eq!(state.step.number(), 1);

        state.select_contact(sarah());
        state.select_contact(sarah()); // second select is a no-op past step 1
        assert_eq!(state.step.number(), 2);

        type_keys(&mut state, "50");
        state.confirm_amount();
        state.confirm_send();
        state.confirm_send();
        assert_eq!(state.step.number(), 4);
        assert!(state.step.number() >= 1 && state.step.number() <= WizardStep::COUNT);
    }

    #[test]
    fn test_end_to_end_scenario() {
        let mut state = SendMoneyState::new();

        // Step 1: choose Sarah
        state.select_contact(sarah());
        assert_eq!(state.step, WizardStep::EnterAmount);

        // Step 2: type "5", "0"
        type_keys(&mut state, "50");
        assert_eq!(state.display_amount(), "£50");
        assert!(state.can_continue());
        state.confirm_amount();

        // Step 3: review shows Sarah and £50.00
        assert_eq!(state.step, WizardStep::Review);
        assert_eq!(state.contact_name(), "Sarah");
        assert_eq!(state.formatted_amount(), "£50.00");

        // Step 4: success copy
        state.confirm_send();
        assert_eq!(state.step, WizardStep::Success);
        assert_eq!(state.success_message(), "£50.00 has been sent to Sarah.");
    }
}
