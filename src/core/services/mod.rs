pub mod account_service;
pub mod auth_service;
pub mod loan_service;
pub mod statement_service;
pub mod summary_service;
pub mod transfer_service;

pub use account_service::AccountService;
pub use auth_service::AuthService;
pub use loan_service::LoanService;
pub use statement_service::{StatementLine, StatementOrder, StatementService};
pub use summary_service::{AccountSummary, SummaryService};
pub use transfer_service::TransferService;

use crate::errors::BankError;

pub type ServiceResult<T> = Result<T, BankError>;
