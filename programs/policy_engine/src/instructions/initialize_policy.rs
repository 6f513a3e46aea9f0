use anchor_lang::prelude::*;

use crate::{error::ErrorCode, state::PolicyConfig};

pub fn handler(
    ctx: Context<InitializePolicy>,
    config_authority: Pubkey,
    keeper_authority: Pubkey,
    pauser_authority: Pubkey,
    swap_authority: Pubkey,
) -> Result<()> {
    require!(
        ctx.accounts.burst_manager_program.executable,
        ErrorCode::InvalidProgramAccount
    );

    let (expected_burst_authority, _) = Pubkey::find_program_address(
        &[b"burst-authority"],
        &ctx.accounts.burst_manager_program.key(),
    );
    require_keys_eq!(
        expected_burst_authority,
        ctx.accounts.burst_authority.key(),
        ErrorCode::InvalidBurstAuthority
    );

    let now = Clock::get()?.unix_timestamp;
    let config = &mut ctx.accounts.policy_config;
    config.admin = ctx.accounts.admin.key();
    config.config_authority = config_authority;
    config.keeper_authority = keeper_authority;
    config.pauser_authority = pauser_authority;
    config.swap_authority = swap_authority;
    config.burst_authority = ctx.accounts.burst_authority.key();
    config.paused = false;
    config.created_at = now;
    config.last_updated_at = now;
    config.bump = ctx.bumps.policy_config;

    Ok(())
}

#[derive(Accounts)]
pub struct InitializePolicy<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,
    /// CHECK: external program id whose CPI authority is pinned below.
    pub burst_manager_program: UncheckedAccount<'info>,
    /// CHECK: PDA owned by the burst manager used as CPI signer.
    pub burst_authority: UncheckedAccount<'info>,
    #[account(
        init,
        payer = admin,
        seeds = [b"policy-config"],
        bump,
        space = 8 + PolicyConfig::INIT_SPACE,
    )]
    pub policy_config: Account<'info, PolicyConfig>,
    pub system_program: Program<'info, System>,
}
