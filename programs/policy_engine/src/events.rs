use anchor_lang::prelude::*;

use crate::state::PoolMode;

#[event]
pub struct PoolConfigured {
    pub pool: Pubkey,
    pub base_fee: u32,
    pub min_fee: u32,
    pub max_fee: u32,
    pub depeg_threshold_bps: u64,
    pub volatility_threshold_bps: u64,
    pub enforce_allowlist: bool,
}

#[event]
pub struct PoolModeChanged {
    pub pool: Pubkey,
    pub mode: PoolMode,
}

#[event]
pub struct JitWindowChanged {
    pub pool: Pubkey,
    pub active: bool,
}

#[event]
pub struct FeeOverrideComputed {
    pub pool: Pubkey,
    pub fee: u32,
    pub fee_floor: u32,
    pub depeg_bps: u64,
    pub confidence_bps: u64,
    pub zero_for_one: bool,
}

#[event]
pub struct ReserveUpdated {
    pub pool: Pubkey,
    pub delta: i64,
    pub balance: u64,
}

#[event]
pub struct RebateIssued {
    pub pool: Pubkey,
    pub trader: Pubkey,
    pub amount: u64,
}

#[event]
pub struct LiquidityPolicyChanged {
    pub pool: Pubkey,
    pub enforce_allowlist: bool,
}

#[event]
pub struct AllowlistUpdated {
    pub pool: Pubkey,
    pub account: Pubkey,
    pub allowed: bool,
}

#[event]
pub struct TargetRangeChanged {
    pub pool: Pubkey,
    pub lower: Option<i32>,
    pub upper: Option<i32>,
}

#[event]
pub struct PausedChanged {
    pub paused: bool,
}
