//! Account lifecycle: signup and closure.

use chrono::{Duration, Utc};
use rand::Rng;
use tracing::{info, warn};
use uuid::Uuid;

use crate::bank::Bank;
use crate::config::Config;
use crate::domain::account::{derive_username, normalize_owner_name, Account, Pin};
use crate::domain::credit::CreditScore;
use crate::domain::movement::Movement;
use crate::errors::BankError;

use super::{AuthService, ServiceResult};

/// Seed movement amounts fall in this half-open range.
const SEED_AMOUNT_RANGE: std::ops::Range<i32> = -3000..5000;
/// Seed movement timestamps are spread over the trailing window.
const SEED_WINDOW_DAYS: i64 = 90;
/// Every new account starts with this deposit, stamped at signup time.
const OPENING_DEPOSIT: f64 = 1000.0;

pub struct AccountService;

impl AccountService {
    /// Opens a new account from the signup form inputs.
    ///
    /// The owner name is title-cased and the username derived from its
    /// lowercase initials. A username collision rejects the signup, since
    /// usernames address both logins and transfers. The account is seeded
    /// with a few random movements plus an opening deposit, and a random
    /// credit score, mirroring the demo data shape.
    pub fn signup(
        bank: &mut Bank,
        owner: &str,
        pin: &str,
        config: &Config,
        rng: &mut impl Rng,
    ) -> ServiceResult<Uuid> {
        let owner = normalize_owner_name(owner);
        if owner.is_empty() {
            return Err(BankError::InvalidOwnerName);
        }
        let pin = Pin::parse(pin)?;
        let username = derive_username(&owner);
        if bank.find_by_username(&username).is_some() {
            warn!(username, "signup rejected: username taken");
            return Err(BankError::UsernameTaken(username));
        }

        let account = Account::new(owner, pin, CreditScore::random(rng))
            .with_currency(config.currency.clone())
            .with_locale(config.locale.clone())
            .with_interest_rate(config.signup_interest_rate)
            .with_movements(seed_movements(rng));
        let id = bank.add_account(account)?;
        info!(%id, username, "account opened");
        Ok(id)
    }

    /// Closes `account_id` after re-validating its credentials, returning
    /// the removed account.
    ///
    /// No zero-balance requirement: whatever the movements say, the
    /// account goes.
    pub fn close(
        bank: &mut Bank,
        account_id: Uuid,
        username: &str,
        pin: &str,
    ) -> ServiceResult<Account> {
        let account = bank
            .account(account_id)
            .ok_or_else(|| BankError::UnknownAccount(account_id.to_string()))?;
        if !AuthService::verify(account, username, pin) {
            warn!(%account_id, "closure rejected: credential mismatch");
            return Err(BankError::InvalidCredentials);
        }
        let removed = bank
            .remove_account(account_id)
            .ok_or_else(|| BankError::UnknownAccount(account_id.to_string()))?;
        info!(username = %removed.username, "account closed");
        Ok(removed)
    }

    pub fn list(bank: &Bank) -> Vec<&Account> {
        bank.accounts.iter().collect()
    }
}

/// Between three and seven random movements over the trailing window,
/// followed by the opening deposit stamped now.
fn seed_movements(rng: &mut impl Rng) -> Vec<Movement> {
    let count = rng.gen_range(3..=7);
    let now = Utc::now();
    let window_secs = Duration::days(SEED_WINDOW_DAYS).num_seconds();
    let mut movements = Vec::with_capacity(count + 1);
    for _ in 0..count {
        let amount = rng.gen_range(SEED_AMOUNT_RANGE) as f64;
        let offset = Duration::seconds(rng.gen_range(0..window_secs));
        movements.push(Movement::new(amount, now - offset));
    }
    movements.push(Movement::new(OPENING_DEPOSIT, now));
    movements
}
