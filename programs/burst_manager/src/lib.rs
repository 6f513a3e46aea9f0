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

declare_id!("5xQuYMdkCmDKvzhSS2BhEAR8HeCqK9pJGmbWD3twEibM");

#[program]
pub mod burst_manager {
    use super::*;

    pub fn initialize_manager(
        ctx: Context<InitializeManager>,
        keeper: Pubkey,
        flash_premium_bps: Option<u16>,
    ) -> Result<()> {
        instructions::initialize_manager::handler(ctx, keeper, flash_premium_bps)
    }

    pub fn configure_burst_pool(
        ctx: Context<ConfigureBurstPool>,
        tick_lower: i32,
        tick_upper: i32,
        max_duration_secs: i64,
        reserve_share_bps: u16,
    ) -> Result<()> {
        instructions::configure_burst_pool::handler(
            ctx,
            tick_lower,
            tick_upper,
            max_duration_secs,
            reserve_share_bps,
        )
    }

    pub fn update_burst_pool(
        ctx: Context<UpdateBurstPool>,
        tick_lower: i32,
        tick_upper: i32,
        max_duration_secs: i64,
        reserve_share_bps: u16,
    ) -> Result<()> {
        instructions::update_burst_pool::handler(
            ctx,
            tick_lower,
            tick_upper,
            max_duration_secs,
            reserve_share_bps,
        )
    }

    pub fn execute_burst(
        ctx: Context<ExecuteBurst>,
        liquidity: u64,
        amount0_max: u64,
        amount1_max: u64,
        duration_secs: i64,
    ) -> Result<()> {
        instructions::execute_burst::handler(ctx, liquidity, amount0_max, amount1_max, duration_secs)
    }

    pub fn settle_burst(ctx: Context<SettleBurst>, min_out0: u64, min_out1: u64) -> Result<()> {
        instructions::settle_burst::handler(ctx, min_out0, min_out1)
    }

    pub fn flash_burst(
        ctx: Context<FlashBurst>,
        liquidity: u64,
        amount0: u64,
        amount1: u64,
        executor_data: Vec<u8>,
    ) -> Result<()> {
        instructions::flash_burst::handler(ctx, liquidity, amount0, amount1, executor_data)
    }
}
