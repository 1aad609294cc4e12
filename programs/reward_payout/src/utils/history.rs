//! Payment history hash chain.
//! digest_n = blake3(digest_{n-1} || leaf_n), digest_0 = GENESIS_DIGEST per lifecycle.

use bytemuck::{Pod, Zeroable};

use crate::constants::GENESIS_DIGEST;
use crate::state::{BeneficiaryRecord, PaymentEntry};

/// A payment as produced by a claim, before it is written to its entry account.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Payment {
    pub lifecycle: u32,
    pub index: u32,
    pub amount: u64,
    pub paid_at: i64,
    pub digest: [u8; 32],
}

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
struct PaymentLeaf {
    amount: u64,
    paid_at: i64,
    lifecycle: u32,
    index: u32,
}

pub fn chain_digest(
    prev: &[u8; 32],
    lifecycle: u32,
    index: u32,
    amount: u64,
    paid_at: i64,
) -> [u8; 32] {
    let leaf = PaymentLeaf {
        amount,
        paid_at,
        lifecycle,
        index,
    };
    let mut hasher = blake3::Hasher::new();
    hasher.update(prev);
    hasher.update(bytemuck::bytes_of(&leaf));
    *hasher.finalize().as_bytes()
}

/// Next payment of `record` without touching it.
pub fn next_payment(record: &BeneficiaryRecord, amount: u64, paid_at: i64) -> Payment {
    let index = record.payment_count;
    Payment {
        lifecycle: record.lifecycle,
        index,
        amount,
        paid_at,
        digest: chain_digest(&record.history_digest, record.lifecycle, index, amount, paid_at),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryMismatch {
    Length { recorded: u32, fetched: usize },
    ForeignLifecycle { index: u32, lifecycle: u32 },
    OutOfOrder { expected: u32, found: u32 },
    Digest { index: u32 },
    Head,
    PaidTotal { recorded: u64, summed: u128 },
}

/// Re-derive the chain over fetched entries and check it against the record.
pub fn verify_history(
    record: &BeneficiaryRecord,
    entries: &[PaymentEntry],
) -> Result<(), HistoryMismatch> {
    if entries.len() != record.payment_count as usize {
        return Err(HistoryMismatch::Length {
            recorded: record.payment_count,
            fetched: entries.len(),
        });
    }

    let mut head = GENESIS_DIGEST;
    let mut summed: u128 = 0;
    for (expected, entry) in (0u32..).zip(entries) {
        if entry.lifecycle != record.lifecycle {
            return Err(HistoryMismatch::ForeignLifecycle {
                index: entry.index,
                lifecycle: entry.lifecycle,
            });
        }
        if entry.index != expected {
            return Err(HistoryMismatch::OutOfOrder {
                expected,
                found: entry.index,
            });
        }
        head = chain_digest(&head, entry.lifecycle, entry.index, entry.amount, entry.paid_at);
        if head != entry.digest {
            return Err(HistoryMismatch::Digest { index: entry.index });
        }
        summed += entry.amount as u128;
    }

    if head != record.history_digest {
        return Err(HistoryMismatch::Head);
    }
    if summed != record.total_paid as u128 {
        return Err(HistoryMismatch::PaidTotal {
            recorded: record.total_paid,
            summed,
        });
    }
    Ok(())
}
