use anchor_lang::prelude::*;

use crate::{constants::BPS_DENOM, error::ErrorCode};

pub fn mul_bps(value: u64, bps: u64) -> Result<u64> {
    ((value as u128)
        .checked_mul(bps as u128)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?)
    .checked_div(BPS_DENOM as u128)
    .ok_or_else(|| error!(ErrorCode::MathOverflow))
    .map(|v| v as u64)
}

/// Principal plus the flash premium owed on it.
pub fn repayment_due(principal: u64, premium_bps: u16) -> Result<(u64, u64)> {
    let premium = mul_bps(principal, premium_bps as u64)?;
    let due = principal
        .checked_add(premium)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    Ok((due, premium))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mul_bps() {
        assert_eq!(mul_bps(1_000_000, 1_000).unwrap(), 100_000);
        assert_eq!(mul_bps(1_000_000, 0).unwrap(), 0);
        assert_eq!(mul_bps(u64::MAX, 10_000).unwrap(), u64::MAX);
    }

    #[test]
    fn test_repayment_due() {
        // 9 bps on 1_000_000 principal.
        let (due, premium) = repayment_due(1_000_000, 9).unwrap();
        assert_eq!(premium, 900);
        assert_eq!(due, 1_000_900);

        let (due, premium) = repayment_due(0, 9).unwrap();
        assert_eq!((due, premium), (0, 0));
    }
}
