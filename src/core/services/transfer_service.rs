//! Moves funds between two accounts held in the same store.

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::bank::Bank;
use crate::domain::movement::Movement;
use crate::errors::BankError;

use super::{ServiceResult, SummaryService};

pub struct TransferService;

impl TransferService {
    /// Validates and executes a transfer from `sender_id` to the account
    /// addressed by `receiver` username.
    ///
    /// Every precondition is checked before either account is touched, so
    /// a rejected transfer leaves both movement lists unchanged. Both
    /// movements share one timestamp. Transferring the full balance is
    /// allowed.
    pub fn transfer(
        bank: &mut Bank,
        sender_id: Uuid,
        receiver: &str,
        amount: f64,
    ) -> ServiceResult<()> {
        let receiver_id = bank
            .find_by_username(receiver)
            .map(|account| account.id)
            .ok_or_else(|| BankError::UnknownAccount(receiver.trim().to_string()))?;
        if !amount.is_finite() || amount <= 0.0 {
            return Err(BankError::InvalidAmount);
        }
        let sender = bank
            .account(sender_id)
            .ok_or_else(|| BankError::UnknownAccount(sender_id.to_string()))?;
        if receiver_id == sender.id {
            return Err(BankError::SelfTransfer);
        }
        let balance = SummaryService::balance(sender);
        if amount > balance {
            warn!(receiver, amount, balance, "transfer rejected");
            return Err(BankError::InsufficientFunds {
                balance,
                requested: amount,
            });
        }

        let now = Utc::now();
        if let Some(sender) = bank.account_mut(sender_id) {
            sender.record(Movement::new(-amount, now));
        }
        if let Some(receiver) = bank.account_mut(receiver_id) {
            receiver.record(Movement::new(amount, now));
        }
        bank.touch();
        info!(%sender_id, %receiver_id, amount, "transfer completed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::Bank;
    use crate::core::services::SummaryService;

    fn demo_ids(bank: &Bank) -> (Uuid, Uuid) {
        (
            bank.find_by_username("jw").unwrap().id,
            bank.find_by_username("jd").unwrap().id,
        )
    }

    #[test]
    fn valid_transfer_moves_the_exact_amount() {
        let mut bank = Bank::demo();
        let (john, jessica) = demo_ids(&bank);
        let before_john = SummaryService::balance(bank.account(john).unwrap());
        let before_jessica = SummaryService::balance(bank.account(jessica).unwrap());

        TransferService::transfer(&mut bank, john, "jd", 500.0).expect("valid transfer");

        let sender = bank.account(john).unwrap();
        let receiver = bank.account(jessica).unwrap();
        assert_eq!(SummaryService::balance(sender), before_john - 500.0);
        assert_eq!(SummaryService::balance(receiver), before_jessica + 500.0);
        // One movement on each side, sharing a timestamp.
        assert_eq!(sender.movements.last().unwrap().amount, -500.0);
        assert_eq!(receiver.movements.last().unwrap().amount, 500.0);
        assert_eq!(
            sender.movements.last().unwrap().timestamp,
            receiver.movements.last().unwrap().timestamp
        );
    }

    #[test]
    fn full_balance_may_be_transferred() {
        let mut bank = Bank::demo();
        let (john, _) = demo_ids(&bank);
        let balance = SummaryService::balance(bank.account(john).unwrap());
        TransferService::transfer(&mut bank, john, "jd", balance).expect("boundary transfer");
        assert_eq!(SummaryService::balance(bank.account(john).unwrap()), 0.0);
    }

    #[test]
    fn rejected_transfers_leave_both_accounts_unchanged() {
        let mut bank = Bank::demo();
        let (john, jessica) = demo_ids(&bank);
        let john_movements = bank.account(john).unwrap().movements.clone();
        let jessica_movements = bank.account(jessica).unwrap().movements.clone();

        let over = SummaryService::balance(bank.account(john).unwrap()) + 0.01;
        assert!(matches!(
            TransferService::transfer(&mut bank, john, "jd", over),
            Err(BankError::InsufficientFunds { .. })
        ));
        assert_eq!(
            TransferService::transfer(&mut bank, john, "jw", 10.0),
            Err(BankError::SelfTransfer)
        );
        assert_eq!(
            TransferService::transfer(&mut bank, john, "jd", 0.0),
            Err(BankError::InvalidAmount)
        );
        assert_eq!(
            TransferService::transfer(&mut bank, john, "jd", -5.0),
            Err(BankError::InvalidAmount)
        );
        assert_eq!(
            TransferService::transfer(&mut bank, john, "jd", f64::NAN),
            Err(BankError::InvalidAmount)
        );
        assert_eq!(
            TransferService::transfer(&mut bank, john, "ghost", 10.0),
            Err(BankError::UnknownAccount("ghost".into()))
        );

        assert_eq!(bank.account(john).unwrap().movements, john_movements);
        assert_eq!(bank.account(jessica).unwrap().movements, jessica_movements);
    }
}
