use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{
    constants::{
        DEFAULT_BASE_FEE, DEFAULT_DEPEG_THRESHOLD_BPS, DEFAULT_MAX_FEE, DEFAULT_MIN_FEE,
        DEFAULT_RESERVE_CUT_BPS, DEFAULT_VOLATILITY_THRESHOLD_BPS,
    },
    error::ErrorCode,
    helpers::{require_role, Role},
    state::{Allowlist, PolicyConfig, Pool, PoolConfig, PoolMode, PoolState},
};

pub fn handler(ctx: Context<InitializePool>, fee_tier: u32, tick_spacing: u16) -> Result<()> {
    require_role(&ctx.accounts.authority, &ctx.accounts.policy_config, Role::Config)?;
    Pool::validate_geometry(
        &ctx.accounts.token0_mint.key(),
        &ctx.accounts.token1_mint.key(),
        tick_spacing,
    )?;
    require_keys_eq!(
        ctx.accounts.reserve_mint.key(),
        ctx.accounts.token0_mint.key(),
        ErrorCode::InvalidTokenAccount
    );

    let pool = &mut ctx.accounts.pool;
    pool.token0_mint = ctx.accounts.token0_mint.key();
    pool.token1_mint = ctx.accounts.token1_mint.key();
    pool.fee_tier = fee_tier;
    pool.tick_spacing = tick_spacing;
    pool.reserve_mint = ctx.accounts.reserve_mint.key();
    pool.reserve_vault = ctx.accounts.reserve_vault.key();
    // Feeds stay unset until the first `configure_pool`; everything else
    // resolves to fixed defaults.
    pool.config = PoolConfig {
        price_feed0: None,
        price_feed1: None,
        base_fee: DEFAULT_BASE_FEE,
        min_fee: DEFAULT_MIN_FEE,
        max_fee: DEFAULT_MAX_FEE,
        reserve_cut_bps: DEFAULT_RESERVE_CUT_BPS,
        volatility_threshold_bps: DEFAULT_VOLATILITY_THRESHOLD_BPS,
        depeg_threshold_bps: DEFAULT_DEPEG_THRESHOLD_BPS,
        target_range: None,
        enforce_allowlist: false,
    };
    pool.state = PoolState {
        mode: PoolMode::Calm,
        jit_window_active: false,
        last_depeg_bps: 0,
        last_confidence_bps: 0,
        last_override_fee: 0,
        reserve_balance: 0,
        total_penalty_fees: 0,
        total_rebates: 0,
    };
    pool.bump = ctx.bumps.pool;

    let allowlist = &mut ctx.accounts.allowlist;
    allowlist.pool = pool.key();
    allowlist.providers = Vec::new();
    allowlist.bump = ctx.bumps.allowlist;

    Ok(())
}

#[derive(Accounts)]
#[instruction(fee_tier: u32, tick_spacing: u16)]
pub struct InitializePool<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,
    #[account(
        seeds = [b"policy-config"],
        bump = policy_config.bump,
    )]
    pub policy_config: Account<'info, PolicyConfig>,
    pub token0_mint: Account<'info, Mint>,
    pub token1_mint: Account<'info, Mint>,
    /// Mint the reserve vault holds; must be the pool's token0.
    pub reserve_mint: Account<'info, Mint>,
    #[account(
        init,
        payer = authority,
        seeds = [
            b"pool",
            token0_mint.key().as_ref(),
            token1_mint.key().as_ref(),
            &fee_tier.to_le_bytes(),
            &tick_spacing.to_le_bytes(),
        ],
        bump,
        space = 8 + Pool::INIT_SPACE,
    )]
    pub pool: Account<'info, Pool>,
    #[account(
        init,
        payer = authority,
        seeds = [b"allowlist", pool.key().as_ref()],
        bump,
        space = 8 + Allowlist::INIT_SPACE,
    )]
    pub allowlist: Account<'info, Allowlist>,
    /// CHECK: PDA authority for reserve vault transfer signing.
    #[account(seeds = [b"reserve-auth", pool.key().as_ref()], bump)]
    pub reserve_auth: UncheckedAccount<'info>,
    #[account(
        init,
        payer = authority,
        seeds = [b"reserve-vault", pool.key().as_ref()],
        bump,
        token::mint = reserve_mint,
        token::authority = reserve_auth,
    )]
    pub reserve_vault: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
