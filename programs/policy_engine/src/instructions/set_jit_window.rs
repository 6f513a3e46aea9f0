use anchor_lang::prelude::*;

use crate::{
    error::ErrorCode,
    events::JitWindowChanged,
    helpers::{holds_role, Role},
    state::{PolicyConfig, Pool},
};

pub fn handler(ctx: Context<SetJitWindow>, active: bool) -> Result<()> {
    let signer = ctx.accounts.authority.key();
    let config = &ctx.accounts.policy_config;
    require!(
        holds_role(&signer, config, Role::Keeper) || holds_role(&signer, config, Role::BurstManager),
        ErrorCode::Unauthorized
    );

    let pool = &mut ctx.accounts.pool;
    if pool.state.jit_window_active == active {
        return Ok(());
    }

    pool.state.jit_window_active = active;
    emit!(JitWindowChanged {
        pool: pool.key(),
        active,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SetJitWindow<'info> {
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
