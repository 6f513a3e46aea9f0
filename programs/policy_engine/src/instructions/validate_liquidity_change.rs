use anchor_lang::prelude::*;

use crate::{
    error::ErrorCode,
    helpers::{check_liquidity_gate, require_role, Role},
    state::{Allowlist, PolicyConfig, Pool},
};

/// Invoked by the trading host before any liquidity add or remove; succeeds
/// iff the position change passes the pool's gating rules.
pub fn handler(
    ctx: Context<ValidateLiquidityChange>,
    owner: Pubkey,
    is_add: bool,
    tick_lower: i32,
    tick_upper: i32,
) -> Result<()> {
    require_role(&ctx.accounts.authority, &ctx.accounts.policy_config, Role::SwapHost)?;
    require_keys_eq!(
        ctx.accounts.allowlist.pool,
        ctx.accounts.pool.key(),
        ErrorCode::InvalidPoolState
    );

    let pool = &ctx.accounts.pool;
    check_liquidity_gate(
        pool.state.jit_window_active,
        pool.config.enforce_allowlist,
        ctx.accounts.allowlist.contains(&owner),
        is_add,
        tick_lower,
        tick_upper,
        pool.config.target_range,
    )
}

#[derive(Accounts)]
pub struct ValidateLiquidityChange<'info> {
    pub authority: Signer<'info>,
    #[account(
        seeds = [b"policy-config"],
        bump = policy_config.bump,
    )]
    pub policy_config: Account<'info, PolicyConfig>,
    #[account(
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
    #[account(
        seeds = [b"allowlist", pool.key().as_ref()],
        bump = allowlist.bump,
    )]
    pub allowlist: Account<'info, Allowlist>,
}
