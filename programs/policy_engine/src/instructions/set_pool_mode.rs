use anchor_lang::prelude::*;

use crate::{
    events::PoolModeChanged,
    helpers::{require_role, Role},
    state::{PolicyConfig, Pool, PoolMode},
};

pub fn handler(ctx: Context<SetPoolMode>, mode: PoolMode) -> Result<()> {
    require_role(&ctx.accounts.authority, &ctx.accounts.policy_config, Role::Keeper)?;

    let pool = &mut ctx.accounts.pool;
    if pool.state.mode == mode {
        // Same-value call is a no-op; no duplicate change event.
        return Ok(());
    }

    pool.state.mode = mode;
    emit!(PoolModeChanged {
        pool: pool.key(),
        mode,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SetPoolMode<'info> {
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
