use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single signed transaction amount on an account.
///
/// Positive amounts are deposits or credits, negative amounts withdrawals
/// or debits. The original data model kept amounts and timestamps in two
/// index-aligned arrays; pairing them in one struct makes that alignment
/// structural.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Movement {
    pub amount: f64,
    pub timestamp: DateTime<Utc>,
}

impl Movement {
    pub fn new(amount: f64, timestamp: DateTime<Utc>) -> Self {
        Self { amount, timestamp }
    }

    /// Classifies the movement by its sign.
    pub fn kind(&self) -> MovementKind {
        if self.amount > 0.0 {
            MovementKind::Deposit
        } else {
            MovementKind::Withdrawal
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MovementKind {
    Deposit,
    Withdrawal,
}

impl MovementKind {
    pub fn label(&self) -> &'static str {
        match self {
            MovementKind::Deposit => "deposit",
            MovementKind::Withdrawal => "withdrawal",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn sign_determines_kind() {
        let now = Utc::now();
        assert_eq!(Movement::new(200.0, now).kind(), MovementKind::Deposit);
        assert_eq!(Movement::new(-50.0, now).kind(), MovementKind::Withdrawal);
        // Zero is not a deposit.
        assert_eq!(Movement::new(0.0, now).kind(), MovementKind::Withdrawal);
    }
}
