use anchor_lang::prelude::*;

use crate::{
    error::ErrorCode,
    state::{PoolConfig, PoolState},
};

/// Pool identity is the PDA derivation: `[b"pool", token0_mint, token1_mint,
/// fee_tier, tick_spacing]` under this program, so the same pair, tier,
/// spacing and engine address always name the same pool.
#[account]
#[derive(InitSpace)]
pub struct Pool {
    pub token0_mint: Pubkey,
    pub token1_mint: Pubkey,
    pub fee_tier: u32,
    pub tick_spacing: u16,
    pub reserve_mint: Pubkey,
    pub reserve_vault: Pubkey,
    pub config: PoolConfig,
    pub state: PoolState,
    pub bump: u8,
}

impl Pool {
    /// A pool pairs two distinct mints; an identical pair can never diverge
    /// and would read as a permanent zero depeg.
    pub fn validate_geometry(token0: &Pubkey, token1: &Pubkey, tick_spacing: u16) -> Result<()> {
        require!(token0 != token1, ErrorCode::InvalidPoolGeometry);
        require!(tick_spacing > 0, ErrorCode::InvalidPoolGeometry);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_mints_are_rejected() {
        let mint = Pubkey::new_unique();
        assert!(Pool::validate_geometry(&mint, &mint, 10).is_err());
        assert!(Pool::validate_geometry(&mint, &Pubkey::new_unique(), 10).is_ok());
    }

    #[test]
    fn zero_tick_spacing_is_rejected() {
        let mint0 = Pubkey::new_unique();
        let mint1 = Pubkey::new_unique();
        assert!(Pool::validate_geometry(&mint0, &mint1, 0).is_err());
    }
}
