pub mod account;
pub mod common;
pub mod credit;
pub mod movement;

pub use account::{derive_username, normalize_owner_name, Account, Pin};
pub use common::{Displayable, Identifiable};
pub use credit::{CreditRating, CreditScore};
pub use movement::{Movement, MovementKind};
