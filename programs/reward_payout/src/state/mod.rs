pub mod beneficiary;
pub mod payment;
pub mod reward_config;

pub use beneficiary::*;
pub use payment::*;
pub use reward_config::*;
