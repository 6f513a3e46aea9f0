use anchor_lang::prelude::*;

use crate::{
    constants::MAX_ORACLE_STALENESS_SECS,
    error::ErrorCode,
    events::FeeOverrideComputed,
    helpers::{
        fee::{self, OracleReading},
        oracle::read_price_with_confidence,
        require_role, Role,
    },
    state::{PolicyConfig, Pool},
};

/// Per-trade hook invoked by the trading host. Oracle failures never revert a
/// trade; any unreadable feed degrades the override to the fee floor.
pub fn handler(ctx: Context<ComputeFeeOverride>, zero_for_one: bool) -> Result<u32> {
    require_role(&ctx.accounts.authority, &ctx.accounts.policy_config, Role::SwapHost)?;

    let clock = Clock::get()?;
    let paused = ctx.accounts.policy_config.paused;
    let config = ctx.accounts.pool.config;
    let state = ctx.accounts.pool.state;

    let reading0 = config.price_feed0.and_then(|feed| {
        read_price_with_confidence(
            &ctx.accounts.price_update0,
            &feed,
            &clock,
            MAX_ORACLE_STALENESS_SECS,
        )
        .ok()
        .map(|p| OracleReading {
            price: p.price,
            confidence: p.confidence,
        })
    });
    let reading1 = config.price_feed1.and_then(|feed| {
        read_price_with_confidence(
            &ctx.accounts.price_update1,
            &feed,
            &clock,
            MAX_ORACLE_STALENESS_SECS,
        )
        .ok()
        .map(|p| OracleReading {
            price: p.price,
            confidence: p.confidence,
        })
    });

    let floor = fee::fee_floor(&config, state.mode, state.jit_window_active);
    let outcome =
        fee::compute_fee_override(&config, &state, paused, reading0, reading1, zero_for_one);

    let pool = &mut ctx.accounts.pool;
    pool.state.last_override_fee = outcome.fee;
    if let Some(observation) = outcome.observed {
        pool.state.last_depeg_bps = observation.depeg_bps;
        pool.state.last_confidence_bps = observation.confidence_bps;
    }
    if outcome.penalty_delta > 0 {
        pool.state.total_penalty_fees = pool
            .state
            .total_penalty_fees
            .checked_add(outcome.penalty_delta)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    }
    if outcome.rebate_delta > 0 {
        pool.state.total_rebates = pool
            .state
            .total_rebates
            .checked_add(outcome.rebate_delta)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
    }

    emit!(FeeOverrideComputed {
        pool: pool.key(),
        fee: outcome.fee,
        fee_floor: floor,
        depeg_bps: pool.state.last_depeg_bps,
        confidence_bps: pool.state.last_confidence_bps,
        zero_for_one,
    });

    Ok(outcome.fee)
}

#[derive(Accounts)]
pub struct ComputeFeeOverride<'info> {
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
    /// CHECK: validated in `read_price_with_confidence` (owner, discriminator,
    /// feed id, staleness); an invalid account degrades to the fee floor.
    pub price_update0: UncheckedAccount<'info>,
    /// CHECK: same validation as `price_update0`.
    pub price_update1: UncheckedAccount<'info>,
}
