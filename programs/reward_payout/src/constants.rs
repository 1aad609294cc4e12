//! Program-wide constants.

/// Seed of the singleton reward configuration PDA.
pub const CONFIG_SEED: &[u8] = b"reward_config";

/// Seed of the token vault PDA (authority = config PDA).
pub const VAULT_SEED: &[u8] = b"vault";

/// Seed of per-wallet beneficiary record PDAs.
pub const BENEFICIARY_SEED: &[u8] = b"beneficiary";

/// Seed of per-claim payment entry PDAs.
pub const PAYMENT_SEED: &[u8] = b"payment";

/// Smallest accepted release term, in seconds.
pub const MIN_TERM: u64 = 1;

/// Head of every payment hash chain before the first payment of a lifecycle.
pub const GENESIS_DIGEST: [u8; 32] = [0u8; 32];
