pub mod initialize;
pub mod set_term;
pub mod add_user_to_reward_list;
pub mod update_reward_amount;
pub mod remove_from_reward_list;
pub mod fund_vault;
pub mod get_reward;
pub mod emit_reward_quote;

pub use initialize::*;
pub use set_term::*;
pub use add_user_to_reward_list::*;
pub use update_reward_amount::*;
pub use remove_from_reward_list::*;
pub use fund_vault::*;
pub use get_reward::*;
pub use emit_reward_quote::*;
