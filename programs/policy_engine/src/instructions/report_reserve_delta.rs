use anchor_lang::prelude::*;

use crate::{
    error::ErrorCode,
    events::ReserveUpdated,
    helpers::{apply_reserve_delta, holds_role, Role},
    state::{PolicyConfig, Pool},
};

/// Signed accounting adjustment reported by the keeper or the burst manager.
/// Token custody moves separately; this tracks the attributable balance.
pub fn handler(ctx: Context<ReportReserveDelta>, delta: i64) -> Result<()> {
    let signer = ctx.accounts.authority.key();
    let config = &ctx.accounts.policy_config;
    require!(
        holds_role(&signer, config, Role::Keeper) || holds_role(&signer, config, Role::BurstManager),
        ErrorCode::Unauthorized
    );
    require!(delta != 0, ErrorCode::InvalidAmount);

    let pool = &mut ctx.accounts.pool;
    let balance = apply_reserve_delta(pool.state.reserve_balance, delta)?;
    pool.state.reserve_balance = balance;

    emit!(ReserveUpdated {
        pool: pool.key(),
        delta,
        balance,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ReportReserveDelta<'info> {
    pub authority: Signer<'info>,
    #[account(
        seeds = [b"policy-config"],
        bump = policy_config.bump,
    )]
    pub policy_config: Account<'info, PolicyConfig>,
    #[account(
        mut,
        seeds = [
            b"pool",
            pool.token0_mint.as_ref(),
            pool.token1_mint.as_ref(),
            &pool.fee_tier.to_le_bytes(),
            &pool.tick_spacing.to_le_bytes(),
        ],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
}
