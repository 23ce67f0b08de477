use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Displayable, Identifiable};
use crate::domain::credit::CreditScore;
use crate::domain::movement::Movement;
use crate::errors::BankError;

/// A four digit numeric credential, compared by value and never hashed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pin(u16);

impl Pin {
    /// Parses a pin from form input, requiring exactly four ASCII digits.
    pub fn parse(input: &str) -> Result<Self, BankError> {
        let input = input.trim();
        if input.len() != 4 || !input.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BankError::InvalidPin);
        }
        let value = input.parse::<u16>().map_err(|_| BankError::InvalidPin)?;
        Ok(Self(value))
    }

    pub fn value(&self) -> u16 {
        self.0
    }

    /// Numeric comparison against raw input, so `0042` and `42` match.
    pub fn matches(&self, input: &str) -> bool {
        input
            .trim()
            .parse::<u16>()
            .map_or(false, |value| value == self.0)
    }
}

/// A customer account held by the in-memory store.
///
/// Balance is never stored; it is recomputed from `movements` on demand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: Uuid,
    pub owner: String,
    /// Lowercase initials of `owner`, derived once at creation.
    pub username: String,
    pub pin: Pin,
    pub movements: Vec<Movement>,
    /// Annual interest rate, in percent.
    pub interest_rate: f64,
    /// ISO 4217 currency code.
    pub currency: String,
    /// BCP 47 language tag.
    pub locale: String,
    pub credit_score: CreditScore,
}

impl Account {
    pub fn new(owner: impl Into<String>, pin: Pin, credit_score: CreditScore) -> Self {
        let owner = owner.into();
        let username = derive_username(&owner);
        Self {
            id: Uuid::new_v4(),
            owner,
            username,
            pin,
            movements: Vec::new(),
            interest_rate: 1.2,
            currency: "USD".into(),
            locale: "en-US".into(),
            credit_score,
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn with_interest_rate(mut self, rate: f64) -> Self {
        self.interest_rate = rate;
        self
    }

    pub fn with_movements(mut self, movements: Vec<Movement>) -> Self {
        self.movements = movements;
        self
    }

    /// Appends a movement with its timestamp.
    pub fn record(&mut self, movement: Movement) {
        self.movements.push(movement);
    }

    pub fn first_name(&self) -> &str {
        self.owner.split_whitespace().next().unwrap_or(&self.owner)
    }

    /// Timestamp of the most recent movement, if any were recorded.
    pub fn last_activity(&self) -> Option<DateTime<Utc>> {
        self.movements.iter().map(|movement| movement.timestamp).max()
    }
}

impl Identifiable for Account {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Account {
    fn display_label(&self) -> String {
        format!("{} ({})", self.owner, self.username)
    }
}

/// Lowercase initials of the owner's full name, e.g. `John Welguin` -> `jw`.
pub fn derive_username(owner: &str) -> String {
    owner
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(|c| c.to_lowercase())
        .collect()
}

/// Title-cases an owner name the way the signup form normalizes input.
pub fn normalize_owner_name(raw: &str) -> String {
    raw.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(|c| c.to_lowercase()))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::credit::CreditScore;

    #[test]
    fn username_is_lowercase_initials() {
        assert_eq!(derive_username("John Welguin"), "jw");
        assert_eq!(derive_username("Jessica Davis"), "jd");
        assert_eq!(derive_username("Ana Maria Costa Silva"), "amcs");
        assert_eq!(derive_username(""), "");
    }

    #[test]
    fn owner_names_are_title_cased() {
        assert_eq!(normalize_owner_name("jOHN wELGUIN"), "John Welguin");
        assert_eq!(normalize_owner_name("  jessica   davis "), "Jessica Davis");
    }

    #[test]
    fn pin_requires_exactly_four_digits() {
        assert!(Pin::parse("1111").is_ok());
        assert!(Pin::parse(" 2222 ").is_ok());
        assert_eq!(Pin::parse("111"), Err(BankError::InvalidPin));
        assert_eq!(Pin::parse("11111"), Err(BankError::InvalidPin));
        assert_eq!(Pin::parse("12a4"), Err(BankError::InvalidPin));
        assert_eq!(Pin::parse("-123"), Err(BankError::InvalidPin));
    }

    #[test]
    fn pin_comparison_is_numeric() {
        let pin = Pin::parse("0042").unwrap();
        assert!(pin.matches("42"));
        assert!(pin.matches("0042"));
        assert!(!pin.matches("43"));
        assert!(!pin.matches("pin"));
    }

    #[test]
    fn new_account_derives_its_username() {
        let account = Account::new(
            "John Welguin",
            Pin::parse("1111").unwrap(),
            CreditScore::new(800),
        );
        assert_eq!(account.username, "jw");
        assert_eq!(account.first_name(), "John");
        assert!(account.movements.is_empty());
    }
}
