//! Pure derived-value calculations over an account's movement list.

use crate::domain::account::Account;
use crate::utils::round2;

/// Interest earned on a single deposit is discarded below this floor.
pub const INTEREST_FLOOR: f64 = 1.0;

/// Derived balance and summary figures for one account, in the account's
/// own currency. No conversion factor is ever applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccountSummary {
    pub balance: f64,
    pub income: f64,
    /// Sum of withdrawals with the sign preserved; presentation layers
    /// usually show the absolute value.
    pub outgoing: f64,
    pub interest: f64,
}

pub struct SummaryService;

impl SummaryService {
    /// Running sum of all movements, rounded to cents at each step.
    pub fn balance(account: &Account) -> f64 {
        account
            .movements
            .iter()
            .fold(0.0, |acc, movement| round2(acc + movement.amount))
    }

    /// Sum of deposits.
    pub fn income(account: &Account) -> f64 {
        account
            .movements
            .iter()
            .filter(|movement| movement.amount > 0.0)
            .fold(0.0, |acc, movement| round2(acc + movement.amount))
    }

    /// Sum of withdrawals, sign preserved.
    pub fn outgoing(account: &Account) -> f64 {
        account
            .movements
            .iter()
            .filter(|movement| movement.amount < 0.0)
            .fold(0.0, |acc, movement| round2(acc + movement.amount))
    }

    /// Interest accrued per deposit at the account rate, dropping any
    /// single accrual below [`INTEREST_FLOOR`].
    pub fn interest(account: &Account) -> f64 {
        account
            .movements
            .iter()
            .filter(|movement| movement.amount > 0.0)
            .map(|movement| round2(movement.amount * account.interest_rate / 100.0))
            .filter(|earned| *earned >= INTEREST_FLOOR)
            .fold(0.0, |acc, earned| round2(acc + earned))
    }

    pub fn summarize(account: &Account) -> AccountSummary {
        AccountSummary {
            balance: Self::balance(account),
            income: Self::income(account),
            outgoing: Self::outgoing(account),
            interest: Self::interest(account),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::{Account, Pin};
    use crate::domain::credit::CreditScore;
    use crate::domain::movement::Movement;
    use chrono::Utc;

    fn account_with_amounts(amounts: &[f64]) -> Account {
        let now = Utc::now();
        let movements = amounts
            .iter()
            .map(|amount| Movement::new(*amount, now))
            .collect();
        Account::new("Test User", Pin::parse("1234").unwrap(), CreditScore::new(700))
            .with_movements(movements)
    }

    #[test]
    fn balance_income_and_outgoing_for_reference_movements() {
        let account = account_with_amounts(&[200.0, -50.0, 100.0]);
        assert_eq!(SummaryService::balance(&account), 250.0);
        assert_eq!(SummaryService::income(&account), 300.0);
        assert_eq!(SummaryService::outgoing(&account), -50.0);
    }

    #[test]
    fn empty_account_sums_to_zero() {
        let account = account_with_amounts(&[]);
        let summary = SummaryService::summarize(&account);
        assert_eq!(summary.balance, 0.0);
        assert_eq!(summary.income, 0.0);
        assert_eq!(summary.outgoing, 0.0);
        assert_eq!(summary.interest, 0.0);
    }

    #[test]
    fn interest_drops_accruals_below_the_floor() {
        // At 1.2%: 200 -> 2.40 kept, 79.97 -> 0.96 dropped.
        let account = account_with_amounts(&[200.0, 79.97]).with_interest_rate(1.2);
        assert_eq!(SummaryService::interest(&account), 2.4);
    }

    #[test]
    fn demo_account_figures_match_the_seed_data() {
        let bank = crate::bank::Bank::demo();
        let john = bank.find_by_username("jw").unwrap();
        let summary = SummaryService::summarize(john);
        assert_eq!(summary.balance, 25_952.59);
        assert_eq!(summary.income, 27_035.2);
        assert_eq!(summary.outgoing, -1082.61);
        assert_eq!(summary.interest, 323.46);
    }

    #[test]
    fn rounding_is_applied_at_each_step() {
        let account = account_with_amounts(&[0.005, 0.005, 0.005]);
        // Each step rounds before accumulating: 0.01 + 0.01 + 0.01.
        assert_eq!(SummaryService::balance(&account), 0.03);
    }
}
