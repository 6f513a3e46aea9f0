use anchor_lang::prelude::*;

use crate::{
    events::TargetRangeChanged,
    helpers::{require_role, Role},
    state::{PolicyConfig, Pool, TickRange},
};

pub fn handler(ctx: Context<SetTargetRange>, lower: i32, upper: i32) -> Result<()> {
    require_role(&ctx.accounts.authority, &ctx.accounts.policy_config, Role::Config)?;

    let range = TickRange { lower, upper };
    range.validate()?;

    let pool = &mut ctx.accounts.pool;
    pool.config.target_range = Some(range);

    emit!(TargetRangeChanged {
        pool: pool.key(),
        lower: Some(lower),
        upper: Some(upper),
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SetTargetRange<'info> {
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
