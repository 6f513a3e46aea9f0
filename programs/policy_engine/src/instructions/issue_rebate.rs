use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{
    error::ErrorCode,
    events::RebateIssued,
    helpers::{debit_reserve, require_role, Role},
    state::{PolicyConfig, Pool},
};

pub fn handler(ctx: Context<IssueRebate>, amount: u64) -> Result<()> {
    require_role(&ctx.accounts.authority, &ctx.accounts.policy_config, Role::Keeper)?;
    require!(amount > 0, ErrorCode::InvalidAmount);

    let pool = &mut ctx.accounts.pool;
    pool.state.reserve_balance = debit_reserve(pool.state.reserve_balance, amount)?;
    pool.state.total_rebates = pool
        .state
        .total_rebates
        .checked_add(amount)
        .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    let pool_key = pool.key();

    let reserve_auth_bump = ctx.bumps.reserve_auth;
    let signer_seed_group: &[&[u8]] = &[b"reserve-auth", pool_key.as_ref(), &[reserve_auth_bump]];
    let signer_seeds = &[signer_seed_group];
    let cpi_accounts = Transfer {
        from: ctx.accounts.reserve_vault.to_account_info(),
        to: ctx.accounts.trader_token_account.to_account_info(),
        authority: ctx.accounts.reserve_auth.to_account_info(),
    };
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            cpi_accounts,
            signer_seeds,
        ),
        amount,
    )?;

    emit!(RebateIssued {
        pool: pool_key,
        trader: ctx.accounts.trader_token_account.owner,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct IssueRebate<'info> {
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
    /// CHECK: reserve auth PDA.
    #[account(seeds = [b"reserve-auth", pool.key().as_ref()], bump)]
    pub reserve_auth: UncheckedAccount<'info>,
    #[account(mut, address = pool.reserve_vault)]
    pub reserve_vault: Account<'info, TokenAccount>,
    #[account(
        mut,
        constraint = trader_token_account.mint == pool.reserve_mint @ ErrorCode::InvalidTokenAccount,
    )]
    pub trader_token_account: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
}
