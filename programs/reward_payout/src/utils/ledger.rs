//! Whitelist membership over `BeneficiaryRecord` accounts.
//! Every operation validates before it writes; a failed call leaves the record untouched.

use anchor_lang::prelude::Pubkey;

use crate::constants::GENESIS_DIGEST;
use crate::error::RewardError;
use crate::state::BeneficiaryRecord;

/// Start a new lifecycle on `record`. The account may be freshly created
/// (all zero) or a frozen record of a previously removed wallet.
pub fn insert(
    record: &mut BeneficiaryRecord,
    config: Pubkey,
    wallet: Pubkey,
    reward_cap: u64,
    now_ts: i64,
    bump: u8,
) -> Result<(), RewardError> {
    if record.active {
        return Err(RewardError::AlreadyExists);
    }
    if wallet == Pubkey::default() {
        return Err(RewardError::InvalidPubkey);
    }
    let lifecycle = record
        .lifecycle
        .checked_add(1)
        .ok_or(RewardError::MathOverflow)?;
    let prior_paid = record
        .prior_paid
        .checked_add(record.total_paid)
        .ok_or(RewardError::MathOverflow)?;

    *record = BeneficiaryRecord {
        config,
        wallet,
        reward_cap,
        reward_start_ts: now_ts,
        total_paid: 0,
        prior_paid,
        active: true,
        lifecycle,
        payment_count: 0,
        last_payment_ts: 0,
        history_digest: GENESIS_DIGEST,
        bump,
    };
    Ok(())
}

pub fn contains(record: &BeneficiaryRecord) -> bool {
    record.active
}

/// Any record that was ever inserted, including frozen ones.
pub fn get(record: &BeneficiaryRecord) -> Option<&BeneficiaryRecord> {
    (record.lifecycle > 0).then_some(record)
}

pub fn check_recap(record: &BeneficiaryRecord, new_cap: u64) -> Result<(), RewardError> {
    if !record.active {
        return Err(RewardError::NotFound);
    }
    if new_cap < record.total_paid {
        return Err(RewardError::CapBelowPaid);
    }
    Ok(())
}

/// Returns the previous cap.
pub fn recap(record: &mut BeneficiaryRecord, new_cap: u64) -> Result<u64, RewardError> {
    check_recap(record, new_cap)?;
    let old = record.reward_cap;
    record.reward_cap = new_cap;
    Ok(old)
}

/// Freeze: `reward_cap := total_paid` and drop out of the whitelist.
/// Returns the cap the record held while active.
pub fn remove(record: &mut BeneficiaryRecord) -> Result<u64, RewardError> {
    if !record.active {
        return Err(RewardError::NotFound);
    }
    let old = record.reward_cap;
    record.reward_cap = record.total_paid;
    record.active = false;
    Ok(old)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> BeneficiaryRecord {
        BeneficiaryRecord::default()
    }

    #[test]
    fn insert_starts_first_lifecycle() {
        let mut r = fresh();
        let wallet = Pubkey::new_unique();
        insert(&mut r, Pubkey::new_unique(), wallet, 20, 1_000, 254).unwrap();
        assert!(contains(&r));
        assert_eq!(r.wallet, wallet);
        assert_eq!(r.reward_cap, 20);
        assert_eq!(r.reward_start_ts, 1_000);
        assert_eq!(r.total_paid, 0);
        assert_eq!(r.lifecycle, 1);
        assert_eq!(r.payment_count, 0);
        assert_eq!(r.bump, 254);
    }

    #[test]
    fn insert_twice_keeps_first_record() {
        let mut r = fresh();
        let wallet = Pubkey::new_unique();
        insert(&mut r, Pubkey::default(), wallet, 20, 1_000, 1).unwrap();
        r.total_paid = 4;

        let err = insert(&mut r, Pubkey::default(), wallet, 99, 2_000, 1).unwrap_err();
        assert!(matches!(err, RewardError::AlreadyExists));
        assert_eq!(r.reward_cap, 20);
        assert_eq!(r.reward_start_ts, 1_000);
        assert_eq!(r.total_paid, 4);
    }

    #[test]
    fn insert_rejects_default_wallet() {
        let mut r = fresh();
        let err = insert(&mut r, Pubkey::default(), Pubkey::default(), 1, 0, 0).unwrap_err();
        assert!(matches!(err, RewardError::InvalidPubkey));
        assert!(get(&r).is_none());
    }

    #[test]
    fn zero_cap_is_accepted() {
        let mut r = fresh();
        insert(&mut r, Pubkey::default(), Pubkey::new_unique(), 0, 0, 0).unwrap();
        assert!(contains(&r));
        assert_eq!(r.reward_cap, 0);
    }

    #[test]
    fn recap_bounded_by_paid() {
        let mut r = fresh();
        insert(&mut r, Pubkey::default(), Pubkey::new_unique(), 20, 0, 0).unwrap();
        r.total_paid = 8;

        assert!(matches!(recap(&mut r, 7), Err(RewardError::CapBelowPaid)));
        assert_eq!(r.reward_cap, 20);

        assert_eq!(recap(&mut r, 8).unwrap(), 20);
        assert_eq!(r.reward_cap, 8);
        assert_eq!(recap(&mut r, 50).unwrap(), 8);
        assert_eq!(r.reward_cap, 50);
    }

    #[test]
    fn remove_freezes_at_paid() {
        let mut r = fresh();
        insert(&mut r, Pubkey::default(), Pubkey::new_unique(), 20, 0, 0).unwrap();
        r.total_paid = 4;

        assert_eq!(remove(&mut r).unwrap(), 20);
        assert!(!contains(&r));
        assert_eq!(r.reward_cap, 4);
        assert!(get(&r).is_some());

        assert!(matches!(remove(&mut r), Err(RewardError::NotFound)));
        assert!(matches!(recap(&mut r, 30), Err(RewardError::NotFound)));
    }

    #[test]
    fn reinsert_after_remove_is_a_new_lifecycle() {
        let mut r = fresh();
        let wallet = Pubkey::new_unique();
        insert(&mut r, Pubkey::default(), wallet, 20, 100, 0).unwrap();
        r.total_paid = 4;
        r.payment_count = 1;
        r.history_digest = [7u8; 32];
        remove(&mut r).unwrap();

        insert(&mut r, Pubkey::default(), wallet, 10, 500, 0).unwrap();
        assert!(contains(&r));
        assert_eq!(r.lifecycle, 2);
        assert_eq!(r.reward_start_ts, 500);
        assert_eq!(r.reward_cap, 10);
        assert_eq!(r.total_paid, 0);
        assert_eq!(r.prior_paid, 4);
        assert_eq!(r.payment_count, 0);
        assert_eq!(r.history_digest, GENESIS_DIGEST);
        assert_eq!(r.lifetime_paid(), 4);
    }

    #[test]
    fn lookup_serves_frozen_records_only_once_inserted() {
        let r = fresh();
        assert!(matches!(
            get(&r).ok_or(RewardError::NotFound),
            Err(RewardError::NotFound)
        ));

        let mut r = fresh();
        insert(&mut r, Pubkey::default(), Pubkey::new_unique(), 20, 0, 0).unwrap();
        r.total_paid = 4;
        remove(&mut r).unwrap();
        let frozen = get(&r).unwrap();
        assert!(!frozen.is_whitelisted());
        assert_eq!(frozen.rewards_of(), 4);
    }
}
