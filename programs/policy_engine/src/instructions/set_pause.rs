use anchor_lang::prelude::*;

use crate::{
    events::PausedChanged,
    helpers::{require_role, Role},
    state::PolicyConfig,
};

pub fn handler(ctx: Context<SetPause>, paused: bool) -> Result<()> {
    require_role(&ctx.accounts.authority, &ctx.accounts.policy_config, Role::Pauser)?;

    let config = &mut ctx.accounts.policy_config;
    if config.paused == paused {
        return Ok(());
    }

    config.paused = paused;
    config.last_updated_at = Clock::get()?.unix_timestamp;
    emit!(PausedChanged { paused });

    Ok(())
}

#[derive(Accounts)]
pub struct SetPause<'info> {
    pub authority: Signer<'info>,
    #[account(
        mut,
        seeds = [b"policy-config"],
        bump = policy_config.bump,
    )]
    pub policy_config: Account<'info, PolicyConfig>,
}
