use anchor_lang::prelude::*;
use anchor_lang::solana_program::{
    instruction::{AccountMeta, Instruction},
    program::invoke,
    system_program,
};
use anchor_spl::token::{Token, TokenAccount};
use policy_engine::program::PolicyEngine;

use crate::{
    constants::BURST_AUTHORITY_SEED,
    error::ErrorCode,
    events::FlashBurstCompleted,
    helpers::{repayment_due, require_keeper, transfer_with_authority},
    state::{BurstPool, BurstRecord, ManagerConfig},
};

/// Same-transaction burst funded from a lender vault that has delegated to
/// the burst authority. The position is minted, optionally handed to an
/// executor program, and torn down before the instruction returns; the
/// lender must end up holding principal plus premium or the whole call
/// fails.
pub fn handler(
    ctx: Context<FlashBurst>,
    liquidity: u64,
    amount0: u64,
    amount1: u64,
    executor_data: Vec<u8>,
) -> Result<()> {
    require_keeper(&ctx.accounts.keeper, &ctx.accounts.manager_config)?;
    require!(!ctx.accounts.policy_config.paused, ErrorCode::EnginePaused);
    require!(liquidity > 0, ErrorCode::InvalidAmount);
    require!(amount0 > 0 || amount1 > 0, ErrorCode::InvalidAmount);

    let burst_authority = ctx.accounts.burst_authority.key();
    require!(
        amount0 == 0
            || Option::from(ctx.accounts.lender_vault0.delegate) == Some(burst_authority),
        ErrorCode::MissingDelegate
    );
    require!(
        amount1 == 0
            || Option::from(ctx.accounts.lender_vault1.delegate) == Some(burst_authority),
        ErrorCode::MissingDelegate
    );

    let lender0_before = ctx.accounts.lender_vault0.amount;
    let lender1_before = ctx.accounts.lender_vault1.amount;
    let premium_bps = ctx.accounts.manager_config.flash_premium_bps;
    let (due0, premium0) = repayment_due(amount0, premium_bps)?;
    let (due1, premium1) = repayment_due(amount1, premium_bps)?;

    let now = Clock::get()?.unix_timestamp;
    let burst_pool = &mut ctx.accounts.burst_pool;
    let record = BurstRecord {
        position_id: burst_pool.next_position_id,
        funder: ctx.accounts.lender_vault0.owner,
        liquidity,
        amount0,
        amount1,
        expiry_ts: now,
    };
    burst_pool.activate(record)?;
    let pool_key = burst_pool.pool;

    let bump = ctx.bumps.burst_authority;
    transfer_with_authority(
        &ctx.accounts.token_program,
        &ctx.accounts.lender_vault0,
        &ctx.accounts.vault0,
        &ctx.accounts.burst_authority,
        bump,
        amount0,
    )?;
    transfer_with_authority(
        &ctx.accounts.token_program,
        &ctx.accounts.lender_vault1,
        &ctx.accounts.vault1,
        &ctx.accounts.burst_authority,
        bump,
        amount1,
    )?;

    cpi_set_jit_window(&ctx, true)?;

    if ctx.accounts.executor.key() != system_program::ID {
        require!(
            ctx.accounts.executor.executable,
            ErrorCode::InvalidProgramAccount
        );
        invoke_executor(&ctx, executor_data)?;
    }

    ctx.accounts.vault0.reload()?;
    ctx.accounts.vault1.reload()?;
    let held0 = ctx.accounts.vault0.amount;
    let held1 = ctx.accounts.vault1.amount;
    require!(held0 >= due0, ErrorCode::InsufficientRepayment);
    require!(held1 >= due1, ErrorCode::InsufficientRepayment);

    let reserve_surplus = held0 - due0;
    ctx.accounts.burst_pool.settle()?;

    // Repay principal plus premium on side 0; the surplus funds the reserve.
    transfer_with_authority(
        &ctx.accounts.token_program,
        &ctx.accounts.vault0,
        &ctx.accounts.lender_vault0,
        &ctx.accounts.burst_authority,
        bump,
        due0,
    )?;
    transfer_with_authority(
        &ctx.accounts.token_program,
        &ctx.accounts.vault0,
        &ctx.accounts.reserve_vault,
        &ctx.accounts.burst_authority,
        bump,
        reserve_surplus,
    )?;
    // Side 1 has no reserve-mint destination; everything returns to the
    // lender.
    transfer_with_authority(
        &ctx.accounts.token_program,
        &ctx.accounts.vault1,
        &ctx.accounts.lender_vault1,
        &ctx.accounts.burst_authority,
        bump,
        held1,
    )?;

    ctx.accounts.lender_vault0.reload()?;
    ctx.accounts.lender_vault1.reload()?;
    let repaid0 = lender0_before
        .checked_sub(amount0)
        .and_then(|base| ctx.accounts.lender_vault0.amount.checked_sub(base))
        .ok_or_else(|| error!(ErrorCode::InsufficientRepayment))?;
    let repaid1 = lender1_before
        .checked_sub(amount1)
        .and_then(|base| ctx.accounts.lender_vault1.amount.checked_sub(base))
        .ok_or_else(|| error!(ErrorCode::InsufficientRepayment))?;
    require!(repaid0 >= due0, ErrorCode::InsufficientRepayment);
    require!(repaid1 >= due1, ErrorCode::InsufficientRepayment);

    if reserve_surplus > 0 {
        let delta = i64::try_from(reserve_surplus).map_err(|_| error!(ErrorCode::MathOverflow))?;
        cpi_report_reserve_delta(&ctx, delta)?;
    }
    cpi_set_jit_window(&ctx, false)?;

    emit!(FlashBurstCompleted {
        pool: pool_key,
        position_id: record.position_id,
        principal0: amount0,
        principal1: amount1,
        premium0,
        premium1,
        reserve_surplus,
    });

    Ok(())
}

fn invoke_executor(ctx: &Context<FlashBurst>, executor_data: Vec<u8>) -> Result<()> {
    let metas: Vec<AccountMeta> = ctx
        .remaining_accounts
        .iter()
        .map(|account| AccountMeta {
            pubkey: *account.key,
            is_signer: account.is_signer,
            is_writable: account.is_writable,
        })
        .collect();
    let instruction = Instruction {
        program_id: ctx.accounts.executor.key(),
        accounts: metas,
        data: executor_data,
    };
    invoke(&instruction, ctx.remaining_accounts).map_err(Into::into)
}

fn cpi_set_jit_window(ctx: &Context<FlashBurst>, active: bool) -> Result<()> {
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

fn cpi_report_reserve_delta(ctx: &Context<FlashBurst>, delta: i64) -> Result<()> {
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
pub struct FlashBurst<'info> {
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
    /// CHECK: burst authority PDA, delegate of the lender vaults and policy
    /// CPI signer.
    #[account(seeds = [BURST_AUTHORITY_SEED], bump)]
    pub burst_authority: UncheckedAccount<'info>,
    #[account(
        mut,
        constraint = lender_vault0.mint == burst_pool.token0_mint @ ErrorCode::InvalidTokenAccount,
    )]
    pub lender_vault0: Box<Account<'info, TokenAccount>>,
    #[account(
        mut,
        constraint = lender_vault1.mint == burst_pool.token1_mint @ ErrorCode::InvalidTokenAccount,
    )]
    pub lender_vault1: Box<Account<'info, TokenAccount>>,
    #[account(mut, address = burst_pool.vault0)]
    pub vault0: Box<Account<'info, TokenAccount>>,
    #[account(mut, address = burst_pool.vault1)]
    pub vault1: Box<Account<'info, TokenAccount>>,
    #[account(mut, address = policy_pool.reserve_vault)]
    pub reserve_vault: Box<Account<'info, TokenAccount>>,
    /// CHECK: optional executor program invoked with the remaining accounts;
    /// pass the system program to skip.
    pub executor: UncheckedAccount<'info>,
    pub token_program: Program<'info, Token>,
}
