use anchor_lang::prelude::*;

use crate::{
    events::TargetRangeChanged,
    helpers::{require_role, Role},
    state::{PolicyConfig, Pool},
};

pub fn handler(ctx: Context<ClearTargetRange>) -> Result<()> {
    require_role(&ctx.accounts.authority, &ctx.accounts.policy_config, Role::Config)?;

    let pool = &mut ctx.accounts.pool;
    if pool.config.target_range.is_none() {
        return Ok(());
    }

    pool.config.target_range = None;
    emit!(TargetRangeChanged {
        pool: pool.key(),
        lower: None,
        upper: None,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ClearTargetRange<'info> {
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
}
