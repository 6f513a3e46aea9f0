use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod state;

pub use constants::*;
pub use error::*;
pub use instructions::*;
pub use state::*;

declare_id!("Bru41Krsui64U8E9WhMWRD3cWCuFvrZb9tZyq7ZSU36D");

#[program]
pub mod policy_engine {
    use super::*;

    pub fn initialize_policy(
        ctx: Context<InitializePolicy>,
        config_authority: Pubkey,
        keeper_authority: Pubkey,
        pauser_authority: Pubkey,
        swap_authority: Pubkey,
    ) -> Result<()> {
        instructions::initialize_policy::handler(
            ctx,
            config_authority,
            keeper_authority,
            pauser_authority,
            swap_authority,
        )
    }

    pub fn initialize_pool(
        ctx: Context<InitializePool>,
        fee_tier: u32,
        tick_spacing: u16,
    ) -> Result<()> {
        instructions::initialize_pool::handler(ctx, fee_tier, tick_spacing)
    }

    pub fn configure_pool(ctx: Context<ConfigurePool>, params: PoolConfigParams) -> Result<()> {
        instructions::configure_pool::handler(ctx, params)
    }

    pub fn set_pool_mode(ctx: Context<SetPoolMode>, mode: PoolMode) -> Result<()> {
        instructions::set_pool_mode::handler(ctx, mode)
    }

    pub fn set_jit_window(ctx: Context<SetJitWindow>, active: bool) -> Result<()> {
        instructions::set_jit_window::handler(ctx, active)
    }

    pub fn set_pause(ctx: Context<SetPause>, paused: bool) -> Result<()> {
        instructions::set_pause::handler(ctx, paused)
    }

    pub fn report_reserve_delta(ctx: Context<ReportReserveDelta>, delta: i64) -> Result<()> {
        instructions::report_reserve_delta::handler(ctx, delta)
    }

    pub fn fund_reserve(ctx: Context<FundReserve>, amount: u64) -> Result<()> {
        instructions::fund_reserve::handler(ctx, amount)
    }

    pub fn withdraw_reserve(ctx: Context<WithdrawReserve>, amount: u64) -> Result<()> {
        instructions::withdraw_reserve::handler(ctx, amount)
    }

    pub fn issue_rebate(ctx: Context<IssueRebate>, amount: u64) -> Result<()> {
        instructions::issue_rebate::handler(ctx, amount)
    }

    pub fn set_target_range(ctx: Context<SetTargetRange>, lower: i32, upper: i32) -> Result<()> {
        instructions::set_target_range::handler(ctx, lower, upper)
    }

    pub fn clear_target_range(ctx: Context<ClearTargetRange>) -> Result<()> {
        instructions::clear_target_range::handler(ctx)
    }

    pub fn set_liquidity_policy(
        ctx: Context<SetLiquidityPolicy>,
        enforce_allowlist: bool,
    ) -> Result<()> {
        instructions::set_liquidity_policy::handler(ctx, enforce_allowlist)
    }

    pub fn update_liquidity_allowlist(
        ctx: Context<UpdateLiquidityAllowlist>,
        account: Pubkey,
        allowed: bool,
    ) -> Result<()> {
        instructions::update_liquidity_allowlist::handler(ctx, account, allowed)
    }

    pub fn compute_fee_override(ctx: Context<ComputeFeeOverride>, zero_for_one: bool) -> Result<u32> {
        instructions::compute_fee_override::handler(ctx, zero_for_one)
    }

    pub fn validate_liquidity_change(
        ctx: Context<ValidateLiquidityChange>,
        owner: Pubkey,
        is_add: bool,
        tick_lower: i32,
        tick_upper: i32,
    ) -> Result<()> {
        instructions::validate_liquidity_change::handler(ctx, owner, is_add, tick_lower, tick_upper)
    }

    pub fn get_pool_snapshot(ctx: Context<GetPoolSnapshot>) -> Result<PoolSnapshot> {
        instructions::get_pool_snapshot::handler(ctx)
    }
}
