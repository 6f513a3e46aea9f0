use anchor_lang::prelude::*;

use crate::{
    error::ErrorCode,
    events::AllowlistUpdated,
    helpers::{require_role, Role},
    state::{Allowlist, PolicyConfig, Pool},
};

pub fn handler(ctx: Context<UpdateLiquidityAllowlist>, account: Pubkey, allowed: bool) -> Result<()> {
    require_role(&ctx.accounts.authority, &ctx.accounts.policy_config, Role::Config)?;
    require_keys_eq!(
        ctx.accounts.allowlist.pool,
        ctx.accounts.pool.key(),
        ErrorCode::InvalidPoolState
    );

    let allowlist = &mut ctx.accounts.allowlist;
    if allowed {
        allowlist.insert(account)?;
    } else {
        allowlist.remove(&account)?;
    }

    emit!(AllowlistUpdated {
        pool: ctx.accounts.pool.key(),
        account,
        allowed,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct UpdateLiquidityAllowlist<'info> {
    pub authority: Signer<'info>,
    #[account(
        seeds = [b"policy-config"],
        bump = policy_config.bump,
    )]
    pub policy_config: Account<'info, PolicyConfig>,
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
    #[account(
        mut,
        seeds = [b"allowlist", pool.key().as_ref()],
        bump = allowlist.bump,
    )]
    pub allowlist: Account<'info, Allowlist>,
}
