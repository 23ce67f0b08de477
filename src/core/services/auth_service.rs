//! Credential checks for login and account closure.

use tracing::{info, warn};
use uuid::Uuid;

use crate::bank::Bank;
use crate::domain::account::Account;
use crate::errors::BankError;

use super::ServiceResult;

pub struct AuthService;

impl AuthService {
    /// Resolves `(username, pin)` to an account id.
    ///
    /// A failed attempt never reveals which part of the credentials was
    /// wrong.
    pub fn login(bank: &Bank, username: &str, pin: &str) -> ServiceResult<Uuid> {
        let username = username.trim();
        let found = bank
            .accounts
            .iter()
            .find(|account| account.username == username && account.pin.matches(pin));
        match found {
            Some(account) => {
                info!(username, "login succeeded");
                Ok(account.id)
            }
            None => {
                warn!(username, "login rejected");
                Err(BankError::InvalidCredentials)
            }
        }
    }

    /// Re-checks credentials against one specific account, as closure
    /// requires.
    pub fn verify(account: &Account, username: &str, pin: &str) -> bool {
        account.username == username.trim() && account.pin.matches(pin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::Bank;

    #[test]
    fn login_resolves_demo_credentials() {
        let bank = Bank::demo();
        let id = AuthService::login(&bank, "jw", "1111").expect("valid login");
        assert_eq!(bank.account(id).unwrap().owner, "John Welguin");
        // Whitespace around the username is tolerated.
        assert!(AuthService::login(&bank, " jd ", "2222").is_ok());
    }

    #[test]
    fn login_rejects_any_mismatch() {
        let bank = Bank::demo();
        assert_eq!(
            AuthService::login(&bank, "jw", "2222"),
            Err(BankError::InvalidCredentials)
        );
        assert_eq!(
            AuthService::login(&bank, "nobody", "1111"),
            Err(BankError::InvalidCredentials)
        );
        assert_eq!(
            AuthService::login(&bank, "jw", "not-a-pin"),
            Err(BankError::InvalidCredentials)
        );
    }

    #[test]
    fn verify_requires_both_fields_to_match() {
        let bank = Bank::demo();
        let john = bank.find_by_username("jw").unwrap();
        assert!(AuthService::verify(john, "jw", "1111"));
        assert!(!AuthService::verify(john, "jw", "1112"));
        assert!(!AuthService::verify(john, "jd", "1111"));
    }
}
