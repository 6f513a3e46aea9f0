use anchor_lang::prelude::*;

#[event]
pub struct BurstExecuted {
    pub pool: Pubkey,
    pub position_id: u64,
    pub funder: Pubkey,
    pub liquidity: u64,
    pub amount0: u64,
    pub amount1: u64,
    pub expiry_ts: i64,
}

#[event]
pub struct BurstSettled {
    pub pool: Pubkey,
    pub position_id: u64,
    pub proceeds0: u64,
    pub proceeds1: u64,
    pub reserve_cut: u64,
}

#[event]
pub struct FlashBurstCompleted {
    pub pool: Pubkey,
    pub position_id: u64,
    pub principal0: u64,
    pub principal1: u64,
    pub premium0: u64,
    pub premium1: u64,
    pub reserve_surplus: u64,
}
