use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};
use policy_engine::program::PolicyEngine;

use crate::{
    constants::BURST_AUTHORITY_SEED,
    error::ErrorCode,
    events::BurstSettled,
    helpers::{is_settler, mul_bps, transfer_with_authority},
    state::{BurstPool, ManagerConfig},
};

pub fn handler(ctx: Context<SettleBurst>, min_out0: u64, min_out1: u64) -> Result<()> {
    let burst_pool = &ctx.accounts.burst_pool;
    require!(burst_pool.is_active(), ErrorCode::BurstNotActive);

    let now = Clock::get()?.unix_timestamp;
    if now < burst_pool.record.expiry_ts {
        // Early settlement is reserved for the keeper and admin.
        require!(
            is_settler(&ctx.accounts.settler.key(), &ctx.accounts.manager_config),
            ErrorCode::SettlementNotDue
        );
    }
    require_keys_eq!(
        ctx.accounts.funder_token0.owner,
        burst_pool.record.funder,
        ErrorCode::Unauthorized
    );
    require_keys_eq!(
        ctx.accounts.funder_token1.owner,
        burst_pool.record.funder,
        ErrorCode::Unauthorized
    );

    let proceeds0 = ctx.accounts.vault0.amount;
    let proceeds1 = ctx.accounts.vault1.amount;
    require!(proceeds0 >= min_out0, ErrorCode::SlippageExceeded);
    require!(proceeds1 >= min_out1, ErrorCode::SlippageExceeded);

    let reserve_share_bps = burst_pool.reserve_share_bps;
    let reserve_cut = mul_bps(proceeds0, reserve_share_bps as u64)?;
    let funder_out0 = proceeds0
        .checked_sub(reserve_cut)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;

    // Release the pool before any transfer leaves the program.
    let record = ctx.accounts.burst_pool.settle()?;
    let pool_key = ctx.accounts.burst_pool.pool;

    let bump = ctx.bumps.burst_authority;
    transfer_with_authority(
        &ctx.accounts.token_program,
        &ctx.accounts.vault0,
        &ctx.accounts.reserve_vault,
        &ctx.accounts.burst_authority,
        bump,
        reserve_cut,
    )?;
    transfer_with_authority(
        &ctx.accounts.token_program,
        &ctx.accounts.vault0,
        &ctx.accounts.funder_token0,
        &ctx.accounts.burst_authority,
        bump,
        funder_out0,
    )?;
    transfer_with_authority(
        &ctx.accounts.token_program,
        &ctx.accounts.vault1,
        &ctx.accounts.funder_token1,
        &ctx.accounts.burst_authority,
        bump,
        proceeds1,
    )?;

    if reserve_cut > 0 {
        let delta = i64::try_from(reserve_cut).map_err(|_| error!(ErrorCode::MathOverflow))?;
        cpi_report_reserve_delta(&ctx, delta)?;
    }
    cpi_set_jit_window(&ctx, false)?;

    emit!(BurstSettled {
        pool: pool_key,
        position_id: record.position_id,
        proceeds0,
        proceeds1,
        reserve_cut,
    });

    Ok(())
}

fn cpi_set_jit_window(ctx: &Context<SettleBurst>, active: bool) -> Result<()> {
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

fn cpi_report_reserve_delta(ctx: &Context<SettleBurst>, delta: i64) -> Result<()> {
    let seeds: &[&[u8]] = &[BURST_AUTHORITY_SEED, &[ctx.bumps.burst_authority]];
    let signer_seeds = &[seeds];

    let cpi_accounts = policy_engine::cpi::accounts::ReportReserveDelta {
        authority: ctx.accounts.burst_authority.to_account_info(),
        policy_config: ctx.accounts.policy_config.to_account_info(),
        pool: ctx.accounts.policy_pool.to_account_info(),
    };
    policy_engine::cpi::report_reserve_delta(
        CpiContext::new_with_signer(
            ctx.accounts.policy_program.to_account_info(),
            cpi_accounts,
            signer_seeds,
        ),
        delta,
    )
}

#[derive(Accounts)]
pub struct SettleBurst<'info> {
    pub settler: Signer<'info>,
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
    /// CHECK: burst authority PDA, vault transfer signer and policy CPI signer.
    #[account(seeds = [BURST_AUTHORITY_SEED], bump)]
    pub burst_authority: UncheckedAccount<'info>,
    #[account(mut, address = burst_pool.vault0)]
    pub vault0: Box<Account<'info, TokenAccount>>,
    #[account(mut, address = burst_pool.vault1)]
    pub vault1: Box<Account<'info, TokenAccount>>,
    #[account(mut, address = policy_pool.reserve_vault)]
    pub reserve_vault: Box<Account<'info, TokenAccount>>,
    #[account(
        mut,
        constraint = funder_token0.mint == burst_pool.token0_mint @ ErrorCode::InvalidTokenAccount,
    )]
    pub funder_token0: Box<Account<'info, TokenAccount>>,
    #[account(
        mut,
        constraint = funder_token1.mint == burst_pool.token1_mint @ ErrorCode::InvalidTokenAccount,
    )]
    pub funder_token1: Box<Account<'info, TokenAccount>>,
    pub token_program: Program<'info, Token>,
}
