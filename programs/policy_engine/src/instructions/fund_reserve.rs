use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::{
    error::ErrorCode,
    events::ReserveUpdated,
    helpers::{credit_reserve, require_role, Role},
    state::{PolicyConfig, Pool},
};

pub fn handler(ctx: Context<FundReserve>, amount: u64) -> Result<()> {
    require_role(&ctx.accounts.funder, &ctx.accounts.policy_config, Role::Keeper)?;
    require!(amount > 0, ErrorCode::InvalidAmount);
    let delta = i64::try_from(amount).map_err(|_| error!(ErrorCode::InvalidAmount))?;

    let pool = &mut ctx.accounts.pool;
    pool.state.reserve_balance = credit_reserve(pool.state.reserve_balance, amount)?;
    let balance = pool.state.reserve_balance;
    let pool_key = pool.key();

    token::transfer(ctx.accounts.fund_ctx(), amount)?;

    emit!(ReserveUpdated {
        pool: pool_key,
        delta,
        balance,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct FundReserve<'info> {
    #[account(mut)]
    pub funder: Signer<'info>,
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
    #[account(
        mut,
        constraint = funder_token_account.mint == pool.reserve_mint @ ErrorCode::InvalidTokenAccount,
        constraint = funder_token_account.owner == funder.key() @ ErrorCode::Unauthorized,
    )]
    pub funder_token_account: Account<'info, TokenAccount>,
    #[account(mut, address = pool.reserve_vault)]
    pub reserve_vault: Account<'info, TokenAccount>,
    pub token_program: Program<'info, Token>,
}

impl<'info> FundReserve<'info> {
    fn fund_ctx(&self) -> CpiContext<'_, '_, '_, 'info, Transfer<'info>> {
        let cpi_accounts = Transfer {
            from: self.funder_token_account.to_account_info(),
            to: self.reserve_vault.to_account_info(),
            authority: self.funder.to_account_info(),
        };
        CpiContext::new(self.token_program.to_account_info(), cpi_accounts)
    }
}
