use anchor_lang::prelude::*;

use crate::error::ErrorCode;

/// Reserve-balance arithmetic shared by every instruction that touches the
/// accounting. Token custody moves separately; these guard the ledger.
pub fn credit_reserve(balance: u64, amount: u64) -> Result<u64> {
    balance
        .checked_add(amount)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))
}

pub fn debit_reserve(balance: u64, amount: u64) -> Result<u64> {
    balance
        .checked_sub(amount)
        .ok_or_else(|| error!(ErrorCode::InsufficientReserve))
}

/// Signed form used by delta reports from the keeper and the burst manager.
pub fn apply_reserve_delta(balance: u64, delta: i64) -> Result<u64> {
    if delta >= 0 {
        credit_reserve(balance, delta as u64)
    } else {
        debit_reserve(balance, delta.unsigned_abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fund_then_withdraw_restores_balance() {
        let start = 5_000;
        let funded = credit_reserve(start, 1_234).unwrap();
        assert_eq!(funded, 6_234);
        assert_eq!(debit_reserve(funded, 1_234).unwrap(), start);
    }

    #[test]
    fn over_withdrawal_is_rejected() {
        assert!(debit_reserve(100, 101).is_err());
        assert_eq!(debit_reserve(100, 100).unwrap(), 0);
    }

    #[test]
    fn signed_delta_round_trip() {
        let start = 42;
        let credited = apply_reserve_delta(start, 7).unwrap();
        assert_eq!(apply_reserve_delta(credited, -7).unwrap(), start);
        assert!(apply_reserve_delta(0, -1).is_err());
    }

    #[test]
    fn credit_overflow_is_rejected() {
        assert!(credit_reserve(u64::MAX, 1).is_err());
    }
}
