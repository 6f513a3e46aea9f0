use anchor_lang::prelude::*;

use crate::{error::ErrorCode, state::TickRange};

/// Liquidity-gating rules evaluated on every add/remove attempt. Membership is
/// required whenever the JIT window is open or the allowlist policy is
/// enforced; removals during a burst window are never exempt. Adds while the
/// window is open must additionally sit inside the target range, if one is
/// set.
pub fn check_liquidity_gate(
    jit_window_active: bool,
    enforce_allowlist: bool,
    allowlisted: bool,
    is_add: bool,
    tick_lower: i32,
    tick_upper: i32,
    target_range: Option<TickRange>,
) -> Result<()> {
    if (jit_window_active || enforce_allowlist) && !allowlisted {
        return Err(error!(ErrorCode::UnauthorizedLiquidityProvider));
    }

    if is_add && jit_window_active {
        if let Some(range) = target_range {
            require!(
                range.contains(tick_lower, tick_upper),
                ErrorCode::TargetRangeViolation
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const RANGE: TickRange = TickRange {
        lower: -100,
        upper: 100,
    };

    #[test]
    fn open_pool_admits_anyone() {
        assert!(check_liquidity_gate(false, false, false, true, -500, 500, Some(RANGE)).is_ok());
        assert!(check_liquidity_gate(false, false, false, false, -500, 500, None).is_ok());
    }

    #[test]
    fn enforced_allowlist_gates_adds_and_removes() {
        for is_add in [true, false] {
            assert!(check_liquidity_gate(false, true, false, is_add, -10, 10, None).is_err());
            assert!(check_liquidity_gate(false, true, true, is_add, -10, 10, None).is_ok());
        }
    }

    #[test]
    fn stress_window_requires_membership_even_when_policy_off() {
        assert!(check_liquidity_gate(true, false, false, false, -10, 10, None).is_err());
        assert!(check_liquidity_gate(true, false, true, false, -10, 10, None).is_ok());
    }

    #[test]
    fn stressed_adds_must_sit_inside_target_range() {
        assert!(check_liquidity_gate(true, false, true, true, -50, 50, Some(RANGE)).is_ok());
        assert!(check_liquidity_gate(true, false, true, true, -150, 50, Some(RANGE)).is_err());
        // Removals are never range-checked.
        assert!(check_liquidity_gate(true, false, true, false, -150, 50, Some(RANGE)).is_ok());
        // No range set: adds pass on membership alone.
        assert!(check_liquidity_gate(true, false, true, true, -150, 50, None).is_ok());
    }

    #[test]
    fn calm_pool_ignores_target_range() {
        assert!(check_liquidity_gate(false, false, false, true, -500, 500, Some(RANGE)).is_ok());
    }
}
