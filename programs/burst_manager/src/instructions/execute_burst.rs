use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use policy_engine::program::PolicyEngine;

use crate::{
    constants::BURST_AUTHORITY_SEED,
    error::ErrorCode,
    events::BurstExecuted,
    helpers::require_keeper,
    state::{BurstPool, BurstRecord, ManagerConfig},
};

pub fn handler(
    ctx: Context<ExecuteBurst>,
    liquidity: u64,
    amount0_max: u64,
    amount1_max: u64,
    duration_secs: i64,
) -> Result<()> {
    require_keeper(&ctx.accounts.keeper, &ctx.accounts.manager_config)?;
    require!(!ctx.accounts.policy_config.paused, ErrorCode::EnginePaused);
    require!(liquidity > 0, ErrorCode::InvalidAmount);
    require!(amount0_max > 0 || amount1_max > 0, ErrorCode::InvalidAmount);
    require!(duration_secs > 0, ErrorCode::InvalidAmount);

    let now = Clock::get()?.unix_timestamp;
    let burst_pool = &mut ctx.accounts.burst_pool;
    let expiry_ts = now
        .checked_add(duration_secs.min(burst_pool.max_duration_secs))
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

    let record = BurstRecord {
        position_id: burst_pool.next_position_id,
        funder: ctx.accounts.funder.key(),
        liquidity,
        amount0: amount0_max,
        amount1: amount1_max,
        expiry_ts,
    };
    // Claim the pool before any external call; a reentrant execute sees the
    // active record and fails.
    burst_pool.activate(record)?;
    let pool_key = burst_pool.pool;

    if amount0_max > 0 {
        token::transfer(ctx.accounts.fund_ctx0(), amount0_max)?;
    }
    if amount1_max > 0 {
        token::transfer(ctx.accounts.fund_ctx1(), amount1_max)?;
    }

    cpi_set_jit_window(&ctx, true)?;

    emit!(BurstExecuted {
        pool: pool_key,
        position_id: record.position_id,
        funder: record.funder,
        liquidity,
        amount0: amount0_max,
        amount1: amount1_max,
        expiry_ts,
    });

    Ok(())
}

fn cpi_set_jit_window(ctx: &Context<ExecuteBurst>, active: bool) -> Result<()> {
    let seeds: &[&[u8]] = &[BURST_AUTHORITY_SEED, &[ctx.bumps.burst_authority]];
    let signer_seeds = &[seeds];

    let cpi_accounts = policy_engine::cpi::accounts::SetJitWindow {
        authority: ctx.accounts.burst_authority.to_account_info(),
        policy_config: ctx.accounts.policy_config.to_account_info(),
        pool: ctx.accounts.policy_pool.to_account_info(),
    };
    policy_engine::cpi::set_jit_window(
        CpiContext::new_with_signer(
            ctx.accounts.policy_program.to_account_info(),
            cpi_accounts,
            signer_seeds,
        ),
        active,
    )
}

#[derive(Accounts)]
pub struct ExecuteBurst<'info> {
    pub keeper: Signer<'info>,
    #[account(
        seeds = [b"manager-config"],
        bump = manager_config.bump,
    )]
    pub manager_config: Box<Account<'info, ManagerConfig>>,
    #[account(
        mut,
        seeds = [b"burst-pool", burst_pool.pool.as_ref()],
        bump = burst_pool.bump,
    )]
    pub burst_pool: Box<Account<'info, BurstPool>>,
    pub policy_program: Program<'info, PolicyEngine>,
    #[account(address = manager_config.policy_config)]
    pub policy_config: Box<Account<'info, policy_engine::PolicyConfig>>,
    #[account(mut, address = burst_pool.pool)]
    pub policy_pool: Box<Account<'info, policy_engine::Pool>>,
    /// CHECK: burst authority PDA, CPI signer towards the policy engine.
    #[account(seeds = [BURST_AUTHORITY_SEED], bump)]
    pub burst_authority: UncheckedAccount<'info>,
    #[account(mut)]
    pub funder: Signer<'info>,
    #[account(
        mut,
        constraint = funder_token0.mint == burst_pool.token0_mint @ ErrorCode::InvalidTokenAccount,
        constraint = funder_token0.owner == funder.key() @ ErrorCode::Unauthorized,
    )]
    pub funder_token0: Box<Account<'info, TokenAccount>>,
    #[account(
        mut,
        constraint = funder_token1.mint == burst_pool.token1_mint @ ErrorCode::InvalidTokenAccount,
        constraint = funder_token1.owner == funder.key() @ ErrorCode::Unauthorized,
    )]
    pub funder_token1: Box<Account<'info, TokenAccount>>,
    #[account(mut, address = burst_pool.vault0)]
    pub vault0: Box<Account<'info, TokenAccount>>,
    #[account(mut, address = burst_pool.vault1)]
    pub vault1: Box<Account<'info, TokenAccount>>,
    pub token_program: Program<'info, Token>,
}

impl<'info> ExecuteBurst<'info> {
    fn fund_ctx0(&self) -> CpiContext<'_, '_, '_, 'info, Transfer<'info>> {
        let cpi_accounts = Transfer {
            from: self.funder_token0.to_account_info(),
            to: self.vault0.to_account_info(),
            authority: self.funder.to_account_info(),
        };
        CpiContext::new(self.token_program.to_account_info(), cpi_accounts)
    }

    fn fund_ctx1(&self) -> CpiContext<'_, '_, '_, 'info, Transfer<'info>> {
        let cpi_accounts = Transfer {
            from: self.funder_token1.to_account_info(),
            to: self.vault1.to_account_info(),
            authority: self.funder.to_account_info(),
        };
        CpiContext::new(self.token_program.to_account_info(), cpi_accounts)
    }
}
