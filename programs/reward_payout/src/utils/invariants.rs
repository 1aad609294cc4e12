//! Ledger-wide invariant checker over a config and every record it owns.

use crate::state::{BeneficiaryRecord, RewardConfig};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    ZeroTerm,
    PaidAboveCap { index: usize },
    PayoutsMismatch { total_payouts: u64, summed: u128 },
    RewardsMismatch { total_rewards: u64, summed: u128 },
    CountMismatch { beneficiary_count: u32, active: usize },
}

pub fn check_invariants(
    config: &RewardConfig,
    records: &[BeneficiaryRecord],
) -> Result<(), InvariantViolation> {
    if config.term == 0 {
        return Err(InvariantViolation::ZeroTerm);
    }

    let mut paid: u128 = 0;
    let mut rewards: u128 = 0;
    let mut active = 0usize;
    for (index, r) in records.iter().enumerate() {
        if r.total_paid > r.reward_cap {
            return Err(InvariantViolation::PaidAboveCap { index });
        }
        paid += r.total_paid as u128 + r.prior_paid as u128;
        if r.active {
            rewards += r.reward_cap as u128;
            active += 1;
        }
    }

    if paid != config.total_payouts as u128 {
        return Err(InvariantViolation::PayoutsMismatch {
            total_payouts: config.total_payouts,
            summed: paid,
        });
    }
    if rewards != config.total_rewards as u128 {
        return Err(InvariantViolation::RewardsMismatch {
            total_rewards: config.total_rewards,
            summed: rewards,
        });
    }
    if active != config.beneficiary_count as usize {
        return Err(InvariantViolation::CountMismatch {
            beneficiary_count: config.beneficiary_count,
            active,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use anchor_lang::prelude::Pubkey;
    use proptest::prelude::*;

    use super::*;
    use crate::error::RewardError;
    use crate::utils::admin::{self, tests::config};
    use crate::utils::payout::{claim, tests::MemoryBank, ValueTransfer};
    use crate::utils::{ledger, vesting};

    const WALLETS: usize = 3;

    #[derive(Clone, Debug)]
    enum Op {
        Add { who: usize, cap: u64 },
        Recap { who: usize, cap: u64 },
        Remove { who: usize },
        Claim { who: usize },
        SetTerm { term: u64 },
        Tick { secs: i64 },
        Decline(bool),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0..WALLETS, 0u64..200).prop_map(|(who, cap)| Op::Add { who, cap }),
            (0..WALLETS, 0u64..200).prop_map(|(who, cap)| Op::Recap { who, cap }),
            (0..WALLETS).prop_map(|who| Op::Remove { who }),
            (0..WALLETS).prop_map(|who| Op::Claim { who }),
            (0u64..12).prop_map(|term| Op::SetTerm { term }),
            (0i64..30).prop_map(|secs| Op::Tick { secs }),
            any::<bool>().prop_map(Op::Decline),
        ]
    }

    #[test]
    fn detects_broken_totals() {
        let mut c = config(5);
        let mut r = BeneficiaryRecord::default();
        admin::add_beneficiary(&mut c, &mut r, Pubkey::default(), Pubkey::new_unique(), 20, 0, 0)
            .unwrap();
        assert_eq!(check_invariants(&c, std::slice::from_ref(&r)), Ok(()));

        c.total_payouts = 1;
        assert!(matches!(
            check_invariants(&c, std::slice::from_ref(&r)),
            Err(InvariantViolation::PayoutsMismatch { .. })
        ));
        c.total_payouts = 0;
        r.total_paid = 21;
        assert_eq!(
            check_invariants(&c, std::slice::from_ref(&r)),
            Err(InvariantViolation::PaidAboveCap { index: 0 })
        );
    }

    proptest! {
        #[test]
        fn invariants_hold_after_every_operation(ops in prop::collection::vec(op(), 1..80)) {
            let mut c = config(5);
            let mut bank = MemoryBank::funded(1_000);
            let wallets: Vec<Pubkey> = (0..WALLETS).map(|_| Pubkey::new_unique()).collect();
            let mut records: Vec<BeneficiaryRecord> = vec![BeneficiaryRecord::default(); WALLETS];
            let mut now: i64 = 1_000;

            for op in ops {
                let before_term = c.term;
                match op {
                    Op::Add { who, cap } => {
                        let was_active = records[who].active;
                        let res = admin::add_beneficiary(
                            &mut c, &mut records[who], Pubkey::default(), wallets[who], cap, now, 0,
                        );
                        if was_active {
                            prop_assert!(matches!(res, Err(RewardError::AlreadyExists)));
                        } else {
                            prop_assert!(res.is_ok());
                            prop_assert_eq!(records[who].reward_start_ts, now);
                            prop_assert_eq!(records[who].total_paid, 0);
                        }
                    }
                    Op::Recap { who, cap } => {
                        let snapshot = records[who].clone();
                        match admin::update_reward_cap(&mut c, &mut records[who], cap) {
                            Ok(_) => prop_assert_eq!(records[who].reward_cap, cap),
                            Err(RewardError::CapBelowPaid) => {
                                prop_assert!(cap < snapshot.total_paid);
                                prop_assert_eq!(records[who].reward_cap, snapshot.reward_cap);
                            }
                            Err(RewardError::NotFound) => prop_assert!(!snapshot.active),
                            Err(e) => prop_assert!(false, "unexpected {:?}", e),
                        }
                        prop_assert_eq!(records[who].reward_start_ts, snapshot.reward_start_ts);
                    }
                    Op::Remove { who } => {
                        let res = admin::remove_beneficiary(&mut c, &mut records[who]);
                        if res.is_ok() {
                            let frozen = vesting::earned(&records[who], c.term, now).unwrap();
                            prop_assert_eq!(frozen, records[who].total_paid);
                            prop_assert_eq!(records[who].reward_cap, records[who].total_paid);
                        }
                    }
                    Op::Claim { who } => {
                        let due = vesting::claimable(&records[who], c.term, now).unwrap();
                        let paid_before = records[who].total_paid;
                        let received_before = bank.balance_of(&wallets[who]);
                        match claim(&mut c, &mut records[who], now, &mut bank) {
                            Ok(p) => {
                                prop_assert_eq!(p.amount, due);
                                prop_assert_eq!(records[who].total_paid, paid_before + due);
                                prop_assert_eq!(bank.balance_of(&wallets[who]), received_before + due);
                            }
                            Err(_) => {
                                prop_assert_eq!(records[who].total_paid, paid_before);
                                prop_assert_eq!(bank.balance_of(&wallets[who]), received_before);
                            }
                        }
                    }
                    Op::SetTerm { term } => {
                        let res = admin::set_term(&mut c, term);
                        if term == 0 {
                            prop_assert!(matches!(res, Err(RewardError::InvalidTerm)));
                            prop_assert_eq!(c.term, before_term);
                        }
                    }
                    Op::Tick { secs } => now += secs,
                    Op::Decline(decline) => bank.decline = decline,
                }

                prop_assert_eq!(check_invariants(&c, &records), Ok(()));
                prop_assert_eq!(bank.balance_of(&bank.vault) + c.total_payouts, 1_000);
                for r in &records {
                    prop_assert_eq!(ledger::contains(r), r.active);
                }
            }
        }
    }
}
