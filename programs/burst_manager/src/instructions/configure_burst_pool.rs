use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{
    constants::{BPS_DENOM, BURST_AUTHORITY_SEED},
    error::ErrorCode,
    helpers::require_admin,
    state::{BurstPool, BurstRecord, BurstStatus, ManagerConfig},
};

pub fn handler(
    ctx: Context<ConfigureBurstPool>,
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

    let burst_pool = &mut ctx.accounts.burst_pool;
    burst_pool.pool = ctx.accounts.policy_pool.key();
    burst_pool.token0_mint = ctx.accounts.token0_mint.key();
    burst_pool.token1_mint = ctx.accounts.token1_mint.key();
    burst_pool.vault0 = ctx.accounts.vault0.key();
    burst_pool.vault1 = ctx.accounts.vault1.key();
    burst_pool.tick_lower = tick_lower;
    burst_pool.tick_upper = tick_upper;
    burst_pool.max_duration_secs = max_duration_secs;
    burst_pool.reserve_share_bps = reserve_share_bps;
    burst_pool.next_position_id = 1;
    burst_pool.status = BurstStatus::Idle;
    burst_pool.record = BurstRecord::cleared();
    burst_pool.bump = ctx.bumps.burst_pool;

    Ok(())
}

#[derive(Accounts)]
pub struct ConfigureBurstPool<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,
    #[account(
        seeds = [b"manager-config"],
        bump = manager_config.bump,
    )]
    pub manager_config: Account<'info, ManagerConfig>,
    pub policy_pool: Account<'info, policy_engine::Pool>,
    #[account(address = policy_pool.token0_mint @ ErrorCode::InvalidTokenAccount)]
    pub token0_mint: Account<'info, Mint>,
    #[account(address = policy_pool.token1_mint @ ErrorCode::InvalidTokenAccount)]
    pub token1_mint: Account<'info, Mint>,
    #[account(
        init,
        payer = admin,
        seeds = [b"burst-pool", policy_pool.key().as_ref()],
        bump,
        space = 8 + BurstPool::INIT_SPACE,
    )]
    pub burst_pool: Account<'info, BurstPool>,
    /// CHECK: burst authority PDA, transfer signer for both vaults.
    #[account(seeds = [BURST_AUTHORITY_SEED], bump)]
    pub burst_authority: UncheckedAccount<'info>,
    #[account(
        init,
        payer = admin,
        seeds = [b"burst-vault-0", burst_pool.key().as_ref()],
        bump,
        token::mint = token0_mint,
        token::authority = burst_authority,
    )]
    pub vault0: Account<'info, TokenAccount>,
    #[account(
        init,
        payer = admin,
        seeds = [b"burst-vault-1", burst_pool.key().as_ref()],
        bump,
        token::mint = token1_mint,
        token::authority = burst_authority,
    )]
    pub vault1: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
