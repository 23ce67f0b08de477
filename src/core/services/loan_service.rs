//! Credit-gated loan approval against the shared pool.

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::bank::Bank;
use crate::domain::credit::CreditRating;
use crate::domain::movement::Movement;
use crate::errors::BankError;

use super::{ServiceResult, SummaryService};

pub struct LoanService;

impl LoanService {
    /// Validates and grants a loan, returning the granted amount.
    ///
    /// Requests are floored to whole units. The cap is the account's
    /// positive balance times its rating multiplier, and a grant never
    /// drives the shared pool below zero.
    pub fn request(bank: &mut Bank, account_id: Uuid, amount: f64) -> ServiceResult<f64> {
        if !amount.is_finite() || amount < 1.0 {
            return Err(BankError::InvalidAmount);
        }
        let amount = amount.floor();

        let account = bank
            .account(account_id)
            .ok_or_else(|| BankError::UnknownAccount(account_id.to_string()))?;
        let rating = account.credit_score.rating();
        if matches!(rating, CreditRating::Bad) {
            warn!(username = %account.username, "loan rejected: bad credit");
            return Err(BankError::CreditTooLow);
        }
        let balance = SummaryService::balance(account);
        if balance <= 0.0 {
            return Err(BankError::NonPositiveBalance);
        }
        let cap = balance.max(0.0) * rating.loan_multiplier();
        if amount > cap {
            warn!(username = %account.username, amount, cap, "loan rejected: over cap");
            return Err(BankError::LoanCapExceeded { cap });
        }
        if bank.loan_pool <= 0.0 || amount > bank.loan_pool {
            return Err(BankError::LoanPoolExhausted {
                available: bank.loan_pool.max(0.0),
            });
        }

        let now = Utc::now();
        if let Some(account) = bank.account_mut(account_id) {
            account.record(Movement::new(amount, now));
        }
        bank.loan_pool -= amount;
        bank.touch();
        info!(%account_id, amount, pool = bank.loan_pool, "loan granted");
        Ok(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::{Bank, INITIAL_LOAN_POOL};
    use crate::domain::account::{Account, Pin};
    use crate::domain::credit::CreditScore;
    use crate::domain::movement::Movement;
    use chrono::Utc;

    fn demo_john(bank: &Bank) -> Uuid {
        bank.find_by_username("jw").unwrap().id
    }

    #[test]
    fn granted_loans_are_floored_and_drain_the_pool() {
        let mut bank = Bank::demo();
        let john = demo_john(&bank);
        let balance_before = SummaryService::balance(bank.account(john).unwrap());

        let granted = LoanService::request(&mut bank, john, 1500.75).expect("loan granted");
        assert_eq!(granted, 1500.0);
        assert_eq!(bank.loan_pool, INITIAL_LOAN_POOL - 1500.0);
        assert_eq!(
            SummaryService::balance(bank.account(john).unwrap()),
            balance_before + 1500.0
        );
    }

    #[test]
    fn loans_never_exceed_the_rating_cap() {
        let mut bank = Bank::demo();
        let john = demo_john(&bank);
        // John is rated Excellent: cap is five times his balance.
        let cap = SummaryService::balance(bank.account(john).unwrap()) * 5.0;
        let over = (cap + 10.0).floor();
        assert!(matches!(
            LoanService::request(&mut bank, john, over),
            Err(BankError::LoanCapExceeded { .. })
        ));
        assert_eq!(bank.loan_pool, INITIAL_LOAN_POOL);
    }

    #[test]
    fn bad_credit_is_rejected_outright() {
        let mut bank = Bank::demo();
        let account = Account::new(
            "Sam Lowry",
            Pin::parse("3333").unwrap(),
            CreditScore::new(400),
        )
        .with_movements(vec![Movement::new(10_000.0, Utc::now())]);
        let id = bank.add_account(account).unwrap();
        assert_eq!(
            LoanService::request(&mut bank, id, 100.0),
            Err(BankError::CreditTooLow)
        );
    }

    #[test]
    fn non_positive_balance_is_rejected() {
        let mut bank = Bank::demo();
        let account = Account::new(
            "Tessa Young",
            Pin::parse("4444").unwrap(),
            CreditScore::new(780),
        )
        .with_movements(vec![Movement::new(-250.0, Utc::now())]);
        let id = bank.add_account(account).unwrap();
        assert_eq!(
            LoanService::request(&mut bank, id, 100.0),
            Err(BankError::NonPositiveBalance)
        );
    }

    #[test]
    fn the_pool_never_goes_negative() {
        let mut bank = Bank::demo();
        bank.loan_pool = 1000.0;
        let john = demo_john(&bank);

        assert!(matches!(
            LoanService::request(&mut bank, john, 1001.0),
            Err(BankError::LoanPoolExhausted { .. })
        ));
        LoanService::request(&mut bank, john, 1000.0).expect("exact pool remainder");
        assert_eq!(bank.loan_pool, 0.0);
        assert!(matches!(
            LoanService::request(&mut bank, john, 1.0),
            Err(BankError::LoanPoolExhausted { .. })
        ));
    }

    #[test]
    fn sub_unit_requests_are_invalid() {
        let mut bank = Bank::demo();
        let john = demo_john(&bank);
        assert_eq!(
            LoanService::request(&mut bank, john, 0.99),
            Err(BankError::InvalidAmount)
        );
        assert_eq!(
            LoanService::request(&mut bank, john, -20.0),
            Err(BankError::InvalidAmount)
        );
    }
}
