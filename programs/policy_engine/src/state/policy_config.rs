use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct PolicyConfig {
    pub admin: Pubkey,
    pub config_authority: Pubkey,
    pub keeper_authority: Pubkey,
    pub pauser_authority: Pubkey,
    /// Trading host allowed to invoke the per-trade hooks.
    pub swap_authority: Pubkey,
    /// Burst-manager CPI signer PDA, pinned at initialization.
    pub burst_authority: Pubkey,
    pub paused: bool,
    pub created_at: i64,
    pub last_updated_at: i64,
    pub bump: u8,
}
