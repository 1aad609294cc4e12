pub mod admin;
pub mod history;
pub mod invariants;
pub mod ledger;
pub mod payout;
pub mod vesting;
