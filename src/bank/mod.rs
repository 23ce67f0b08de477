use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::account::{Account, Pin};
use crate::domain::credit::CreditScore;
use crate::domain::movement::Movement;
use crate::errors::BankError;

/// Initial bank-wide lending capacity shared by every account.
pub const INITIAL_LOAN_POOL: f64 = 100_000_000.0;

/// The in-memory account store.
///
/// Accounts keep their insertion order; the loan pool is the one piece of
/// state shared across accounts. Nothing here outlives the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bank {
    #[serde(default)]
    pub accounts: Vec<Account>,
    /// Remaining bank-wide loan capacity.
    pub loan_pool: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Bank {
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            accounts: Vec::new(),
            loan_pool: INITIAL_LOAN_POOL,
            created_at: now,
            updated_at: now,
        }
    }

    /// Seeds the two demo accounts the original application shipped with.
    pub fn demo() -> Self {
        let mut bank = Self::new();

        let john = Account::new("John Welguin", Pin::parse("1111").expect("valid demo pin"), CreditScore::new(800))
            .with_currency("EUR")
            .with_locale("pt-PT")
            .with_interest_rate(1.2)
            .with_movements(vec![
                seed_movement(200.0, "2024-01-18T16:31:17.178-05:00"),
                seed_movement(455.23, "2023-12-23T02:42:02.383-05:00"),
                seed_movement(-306.5, "2024-01-28T04:15:04.904-05:00"),
                seed_movement(25_000.0, "2024-04-01T05:17:24.185-05:00"),
                seed_movement(-642.21, "2024-10-30T09:11:59.604-05:00"),
                seed_movement(-133.9, "2024-11-03T12:01:17.194-05:00"),
                seed_movement(79.97, "2024-11-04T18:36:17.929-05:00"),
                seed_movement(1300.0, "2024-11-05T05:51:36.790-05:00"),
            ]);

        let jessica = Account::new("Jessica Davis", Pin::parse("2222").expect("valid demo pin"), CreditScore::new(700))
            .with_currency("USD")
            .with_locale("en-US")
            .with_interest_rate(1.5)
            .with_movements(vec![
                seed_movement(5000.0, "2023-11-30T04:48:16.867-05:00"),
                seed_movement(3400.0, "2023-12-25T01:04:23.907-05:00"),
                seed_movement(-150.0, "2024-01-25T09:18:46.235-05:00"),
                seed_movement(-790.0, "2024-11-01T08:15:33.035-05:00"),
                seed_movement(-3210.0, "2024-02-05T11:33:06.386-05:00"),
                seed_movement(-1000.0, "2024-04-10T09:43:26.374-05:00"),
                seed_movement(8500.0, "2024-06-25T13:49:59.371-05:00"),
                seed_movement(-30.0, "2024-07-26T07:01:20.894-05:00"),
            ]);

        bank.accounts.push(john);
        bank.accounts.push(jessica);
        bank
    }

    /// Appends an account, enforcing username uniqueness across the store.
    pub fn add_account(&mut self, account: Account) -> Result<Uuid, BankError> {
        if self.find_by_username(&account.username).is_some() {
            return Err(BankError::UsernameTaken(account.username.clone()));
        }
        let id = account.id;
        self.accounts.push(account);
        self.touch();
        Ok(id)
    }

    /// Removes an account by id, returning it if it was present.
    pub fn remove_account(&mut self, id: Uuid) -> Option<Account> {
        let index = self.accounts.iter().position(|account| account.id == id)?;
        let removed = self.accounts.remove(index);
        self.touch();
        Some(removed)
    }

    pub fn account(&self, id: Uuid) -> Option<&Account> {
        self.accounts.iter().find(|account| account.id == id)
    }

    pub fn account_mut(&mut self, id: Uuid) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|account| account.id == id)
    }

    pub fn find_by_username(&self, username: &str) -> Option<&Account> {
        let username = username.trim();
        self.accounts.iter().find(|account| account.username == username)
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for Bank {
    fn default() -> Self {
        Self::new()
    }
}

fn seed_movement(amount: f64, timestamp: &str) -> Movement {
    let parsed = DateTime::parse_from_rfc3339(timestamp)
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|_| Utc::now());
    Movement::new(amount, parsed)
}
