use serde::{Deserialize, Serialize};
use std::fmt;

/// Currency symbol used everywhere amounts are displayed.
pub const CURRENCY_SYMBOL: &str = "£";

/// Name shown in the dashboard greeting.
pub const ACCOUNT_HOLDER: &str = "Margaret";

/// Display balance for the primary account. Kept as a pre-formatted string
/// (with thousands separator) because it is presentation data, not a number
/// anything computes with.
pub const PRIMARY_BALANCE_DISPLAY: &str = "£3,842.50";

/// Caption under the dashboard balance figure.
pub const PRIMARY_ACCOUNT_CAPTION: &str = "Current Account · ****4821";

/// Source-account label shown on the transfer review step.
pub const SOURCE_ACCOUNT_LABEL: &str = "Current Account";

/// A person the user can send money to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: u32,
    pub name: String,
    /// Relationship label shown under the name ("Granddaughter", "Doctor", ...)
    pub relation: String,
    /// Two-letter initials rendered inside the avatar circle
    pub initials: String,
    /// Which avatar tint the UI should use for this contact
    pub color: ContactColor,
}

/// Avatar tint for a contact. The UI maps these onto theme colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactColor {
    Green,
    Navy,
    Amber,
    Neutral,
}

/// Summary of one account/card shown on the cards screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountCard {
    pub id: u32,
    /// Account type label ("Current Account", "Savings")
    pub card_type: String,
    /// Masked account number ("****4821")
    pub masked_number: String,
    /// Pre-formatted display balance ("£3,842.50")
    pub balance: String,
    /// Active cards show an ACTIVE badge, inactive ones FROZEN
    pub active: bool,
}

/// Direction of a transaction, for sign and icon rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionDirection {
    /// Money arriving in the account
    Incoming,
    /// Money leaving the account
    Outgoing,
}

/// One entry in the dashboard's recent-activity list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u32,
    /// Counterparty name ("Grocery Store", "Pension Deposit")
    pub counterparty: String,
    /// Human date label ("Today", "Yesterday", "Feb 18")
    pub date_label: String,
    /// Signed amount; negative for outgoing entries
    pub amount: f64,
    pub direction: TransactionDirection,
}

/// One entry on the support screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportOption {
    /// Glyph rendered in the option's icon tile
    pub icon: String,
    pub title: String,
    pub description: String,
    /// Call-to-action label ("0800 123 4567", "Start a chat", ...)
    pub action_label: String,
}

/// The fixed contact list for the send-money flow.
pub fn sample_contacts() -> Vec<Contact> {
    vec![
        Contact {
            id: 1,
            name: "Sarah".to_string(),
            relation: "Granddaughter".to_string(),
            initials: "SA".to_string(),
            color: ContactColor::Green,
        },
        Contact {
            id: 2,
            name: "James".to_string(),
            relation: "Son".to_string(),
            initials: "JA".to_string(),
            color: ContactColor::Navy,
        },
        Contact {
            id: 3,
            name: "Dr. Wilson".to_string(),
            relation: "Doctor".to_string(),
            initials: "DW".to_string(),
            color: ContactColor::Amber,
        },
        Contact {
            id: 4,
            name: "Mrs. Chen".to_string(),
            relation: "Neighbour".to_string(),
            initials: "MC".to_string(),
            color: ContactColor::Neutral,
        },
    ]
}

/// The fixed account/card list for the cards screen.
pub fn sample_account_cards() -> Vec<AccountCard> {
    vec![
        AccountCard {
            id: 1,
            card_type: "Current Account".to_string(),
            masked_number: "****4821".to_string(),
            balance: "£3,842.50".to_string(),
            active: true,
        },
        AccountCard {
            id: 2,
            card_type: "Savings".to_string(),
            masked_number: "****7192".to_string(),
            balance: "£12,430.00".to_string(),
            active: true,
        },
    ]
}

/// The fixed recent-activity list for the dashboard.
pub fn recent_transactions() -> Vec<Transaction> {
    vec![
        Transaction {
            id: 1,
            counterparty: "Grocery Store".to_string(),
            date_label: "Today".to_string(),
            amount: -42.5,
            direction: TransactionDirection::Outgoing,
        },
        Transaction {
            id: 2,
            counterparty: "Sarah (Granddaughter)".to_string(),
            date_label: "Yesterday".to_string(),
            amount: -25.0,
            direction: TransactionDirection::Outgoing,
        },
        Transaction {
            id: 3,
            counterparty: "Pension Deposit".to_string(),
            date_label: "Feb 18".to_string(),
            amount: 1850.0,
            direction: TransactionDirection::Incoming,
        },
    ]
}

/// The fixed help-option list for the support screen.
pub fn support_options() -> Vec<SupportOption> {
    vec![
        SupportOption {
            icon: "📞".to_string(),
            title: "Call Us".to_string(),
            description: "Speak to a real person. We're here 24/7.".to_string(),
            action_label: "0800 123 4567".to_string(),
        },
        SupportOption {
            icon: "💬".to_string(),
            title: "Send a Message".to_string(),
            description: "We'll reply within 1 hour.".to_string(),
            action_label: "Start a chat".to_string(),
        },
        SupportOption {
            icon: "📄".to_string(),
            title: "Common Questions".to_string(),
            description: "Find answers to common queries.".to_string(),
            action_label: "Browse FAQs".to_string(),
        },
    ]
}

/// Format an amount for display with two decimal places: `format_amount(50.0)`
/// is `"£50.00"`.
pub fn format_amount(amount: f64) -> String {
    format!("{}{:.2}", CURRENCY_SYMBOL, amount)
}

/// Format a transaction amount with an explicit sign driven by its direction.
/// The sign comes from the direction, not the stored value, so a negative
/// outgoing amount renders as "-£42.50" rather than "-£-42.50".
pub fn format_signed_amount(amount: f64, direction: TransactionDirection) -> String {
    let sign = match direction {
        TransactionDirection::Incoming => "+",
        TransactionDirection::Outgoing => "-",
    };
    format!("{}{}{:.2}", sign, CURRENCY_SYMBOL, amount.abs())
}

/// Greeting band for an hour of day (0-23).
pub fn greeting_for_hour(hour: u32) -> &'static str {
    if hour < 12 {
        "Good Morning"
    } else if hour < 18 {
        "Good Afternoon"
    } else {
        "Good Evening"
    }
}

/// Why an amount string cannot be sent yet.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("no amount entered")]
    Empty,
    #[error("amount is not a valid number")]
    NotANumber,
    #[error("amount must be greater than zero")]
    NotPositive,
}

/// Parse the keypad's amount accumulator into a sendable value. Used to gate
/// the wizard's Continue button; callers display nothing on error, they just
/// disable the affordance.
pub fn validate_amount_text(text: &str) -> Result<f64, AmountError> {
    if text.is_empty() {
        return Err(AmountError::Empty);
    }
    let value: f64 = text.parse().map_err(|_| AmountError::NotANumber)?;
    if !value.is_finite() || value <= 0.0 {
        return Err(AmountError::NotPositive);
    }
    Ok(value)
}

impl fmt::Display for TransactionDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionDirection::Incoming => write!(f, "in"),
            TransactionDirection::Outgoing => write!(f, "out"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(50.0), "£50.00");
        assert_eq!(format_amount(0.5), "£0.50");
        assert_eq!(format_amount(1850.0), "£1850.00");
    }

    #[test]
    fn test_format_signed_amount() {
        assert_eq!(
            format_signed_amount(-42.5, TransactionDirection::Outgoing),
            "-£42.50"
        );
        assert_eq!(
            format_signed_amount(1850.0, TransactionDirection::Incoming),
            "+£1850.00"
        );
        // Sign always comes from the direction, never the stored value
        assert_eq!(
            format_signed_amount(25.0, TransactionDirection::Outgoing),
            "-£25.00"
        );
    }

    #[test]
    fn test_greeting_bands() {
        assert_eq!(greeting_for_hour(0), "Good Morning");
        assert_eq!(greeting_for_hour(11), "Good Morning");
        assert_eq!(greeting_for_hour(12), "Good Afternoon");
        assert_eq!(greeting_for_hour(17), "Good Afternoon");
        assert_eq!(greeting_for_hour(18), "Good Evening");
        assert_eq!(greeting_for_hour(23), "Good Evening");
    }

    #[test]
    fn test_validate_amount_text() {
        assert_eq!(validate_amount_text("50"), Ok(50.0));
        assert_eq!(validate_amount_text("0.01"), Ok(0.01));
        assert_eq!(validate_amount_text(".5"), Ok(0.5));

        assert_eq!(validate_amount_text(""), Err(AmountError::Empty));
        assert_eq!(validate_amount_text("."), Err(AmountError::NotANumber));
        assert_eq!(validate_amount_text("abc"), Err(AmountError::NotANumber));
        assert_eq!(validate_amount_text("0"), Err(AmountError::NotPositive));
        assert_eq!(validate_amount_text("0.00"), Err(AmountError::NotPositive));
        assert_eq!(validate_amount_text("-5"), Err(AmountError::NotPositive));
    }

    #[test]
    fn test_sample_data_shape() {
        assert_eq!(sample_contacts().len(), 4);
        assert_eq!(sample_account_cards().len(), 2);
        assert_eq!(recent_transactions().len(), 3);
        assert_eq!(support_options().len(), 3);

        let contacts = sample_contacts();
        assert_eq!(contacts[0].name, "Sarah");
        assert_eq!(contacts[0].relation, "Granddaughter");

        let cards = sample_account_cards();
        assert!(cards.iter().all(|c| c.active));
        assert_eq!(cards[0].masked_number, "****4821");
    }

    #[test]
    fn test_transaction_serde_round_trip() {
        let original = recent_transactions();
        let json = serde_json::to_string(&original).unwrap();
        let parsed: Vec<Transaction> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, original);
    }
}
