use anchor_lang::prelude::*;

use crate::{
    events::PoolConfigured,
    helpers::{require_role, Role},
    state::{PolicyConfig, Pool, PoolConfigParams},
};

pub fn handler(ctx: Context<ConfigurePool>, params: PoolConfigParams) -> Result<()> {
    require_role(&ctx.accounts.authority, &ctx.accounts.policy_config, Role::Config)?;

    let pool = &mut ctx.accounts.pool;
    params.apply(&mut pool.config)?;

    emit!(PoolConfigured {
        pool: pool.key(),
        base_fee: pool.config.base_fee,
        min_fee: pool.config.min_fee,
        max_fee: pool.config.max_fee,
        depeg_threshold_bps: pool.config.depeg_threshold_bps,
        volatility_threshold_bps: pool.config.volatility_threshold_bps,
        enforce_allowlist: pool.config.enforce_allowlist,
    });

    ctx.accounts.policy_config.last_updated_at = Clock::get()?.unix_timestamp;

    Ok(())
}

#[derive(Accounts)]
pub struct ConfigurePool<'info> {
    pub authority: Signer<'info>,
    #[account(
        mut,
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
