use anchor_lang::prelude::*;

use crate::state::{Pool, PoolSnapshot};

pub fn handler(ctx: Context<GetPoolSnapshot>) -> Result<PoolSnapshot> {
    let pool = &ctx.accounts.pool;
    Ok(PoolSnapshot {
        config: pool.config,
        state: pool.state,
    })
}

#[derive(Accounts)]
pub struct GetPoolSnapshot<'info> {
    #[account(
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
