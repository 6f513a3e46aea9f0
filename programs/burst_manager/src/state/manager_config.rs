use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct ManagerConfig {
    pub admin: Pubkey,
    pub keeper: Pubkey,
    pub policy_program: Pubkey,
    pub policy_config: Pubkey,
    pub flash_premium_bps: u16,
    pub created_at: i64,
    pub bump: u8,
}
