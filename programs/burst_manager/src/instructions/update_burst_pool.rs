use anchor_lang::prelude::*;

use crate::{
    constants::BPS_DENOM,
    error::ErrorCode,
    helpers::require_admin,
    state::{BurstPool, ManagerConfig},
};

/// Geometry and policy changes only land while no burst is in flight.
pub fn handler(
    ctx: Context<UpdateBurstPool>,
    tick_lower: i32,
    tick_upper: i32,
    max_duration_secs: i64,
    reserve_share_bps: u16,
) -> Result<()> {
    require_admin(&ctx.accounts.admin, &ctx.accounts.manager_config)?;
    require!(tick_lower < tick_upper, ErrorCode::InvalidPoolGeometry);
    require!(max_duration_secs > 0, ErrorCode::InvalidAmount);
    require!(
        reserve_share_bps as u64 <= BPS_DENOM,
        ErrorCode::InvalidBps
    );
    require!(
        !ctx.accounts.burst_pool.is_active(),
        ErrorCode::BurstAlreadyActive
    );

    let burst_pool = &mut ctx.accounts.burst_pool;
    burst_pool.tick_lower = tick_lower;
    burst_pool.tick_upper = tick_upper;
    burst_pool.max_duration_secs = max_duration_secs;
    burst_pool.reserve_share_bps = reserve_share_bps;

    Ok(())
}

#[derive(Accounts)]
pub struct UpdateBurstPool<'info> {
    pub admin: Signer<'info>,
    #[account(
        seeds = [b"manager-config"],
        bump = manager_config.bump,
    )]
    pub manager_config: Account<'info, ManagerConfig>,
    #[account(
        mut,
        seeds = [b"burst-pool", burst_pool.pool.as_ref()],
        bump = burst_pool.bump,
    )]
    pub burst_pool: Account<'info, BurstPool>,
}
