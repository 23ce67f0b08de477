//! Rendered movement views for the presentation boundary.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::domain::account::Account;
use crate::domain::movement::MovementKind;

/// Ordering choices for a rendered statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatementOrder {
    /// Movements as recorded, oldest first.
    #[default]
    Recorded,
    AmountAscending,
    AmountDescending,
}

impl StatementOrder {
    /// The next state of the original's sort toggle.
    pub fn toggled(self) -> Self {
        match self {
            StatementOrder::Recorded | StatementOrder::AmountDescending => {
                StatementOrder::AmountAscending
            }
            StatementOrder::AmountAscending => StatementOrder::AmountDescending,
        }
    }
}

/// One row of the movement view handed to the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct StatementLine {
    /// 1-based position in recorded order, assigned before any reordering.
    pub sequence: usize,
    pub kind: MovementKind,
    pub display_date: String,
    pub amount: f64,
}

pub struct StatementService;

impl StatementService {
    /// Renders the account's movements in the requested order, humanizing
    /// dates against `reference`.
    pub fn statement(
        account: &Account,
        order: StatementOrder,
        reference: DateTime<Utc>,
    ) -> Vec<StatementLine> {
        let mut lines: Vec<StatementLine> = account
            .movements
            .iter()
            .enumerate()
            .map(|(index, movement)| StatementLine {
                sequence: index + 1,
                kind: movement.kind(),
                display_date: humanize_date(movement.timestamp, reference),
                amount: movement.amount,
            })
            .collect();
        match order {
            StatementOrder::Recorded => {}
            StatementOrder::AmountAscending => lines.sort_by(compare_amounts),
            StatementOrder::AmountDescending => {
                lines.sort_by(|a, b| compare_amounts(b, a));
            }
        }
        lines
    }
}

fn compare_amounts(a: &StatementLine, b: &StatementLine) -> Ordering {
    a.amount.partial_cmp(&b.amount).unwrap_or(Ordering::Equal)
}

/// Formats a movement date relative to `reference`: `Today`, `Yesterday`,
/// `N days ago` up to a week, then `MM/DD/YYYY`.
pub fn humanize_date(date: DateTime<Utc>, reference: DateTime<Utc>) -> String {
    let delta = reference.signed_duration_since(date);
    let days_passed = (delta.num_seconds() as f64 / 86_400.0).round().abs() as i64;
    match days_passed {
        0 => "Today".into(),
        1 => "Yesterday".into(),
        2..=7 => format!("{days_passed} days ago"),
        _ => date.format("%m/%d/%Y").to_string(),
    }
}
