use anchor_lang::prelude::*;
use policy_engine::program::PolicyEngine;

use crate::{
    constants::{BPS_DENOM, DEFAULT_FLASH_PREMIUM_BPS},
    error::ErrorCode,
    state::ManagerConfig,
};

pub fn handler(
    ctx: Context<InitializeManager>,
    keeper: Pubkey,
    flash_premium_bps: Option<u16>,
) -> Result<()> {
    let flash_premium_bps = flash_premium_bps.unwrap_or(DEFAULT_FLASH_PREMIUM_BPS);
    require!(
        flash_premium_bps as u64 <= BPS_DENOM,
        ErrorCode::InvalidBps
    );

    let config = &mut ctx.accounts.manager_config;
    config.admin = ctx.accounts.admin.key();
    config.keeper = keeper;
    config.policy_program = ctx.accounts.policy_program.key();
    config.policy_config = ctx.accounts.policy_config.key();
    config.flash_premium_bps = flash_premium_bps;
    config.created_at = Clock::get()?.unix_timestamp;
    config.bump = ctx.bumps.manager_config;

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeManager<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,
    pub policy_program: Program<'info, PolicyEngine>,
    #[account(
        seeds = [b"policy-config"],
        seeds::program = policy_program.key(),
        bump = policy_config.bump,
    )]
    pub policy_config: Account<'info, policy_engine::PolicyConfig>,
    #[account(
        init,
        payer = admin,
        seeds = [b"manager-config"],
        bump,
        space = 8 + ManagerConfig::INIT_SPACE,
    )]
    pub manager_config: Account<'info, ManagerConfig>,
    pub system_program: Program<'info, System>,
}
