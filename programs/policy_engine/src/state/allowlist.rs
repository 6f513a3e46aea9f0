use anchor_lang::prelude::*;

use crate::{constants::MAX_ALLOWLIST, error::ErrorCode};

/// Per-pool set of liquidity providers permitted while restricted.
#[account]
#[derive(InitSpace)]
pub struct Allowlist {
    pub pool: Pubkey,
    #[max_len(MAX_ALLOWLIST)]
    pub providers: Vec<Pubkey>,
    pub bump: u8,
}

impl Allowlist {
    pub fn contains(&self, account: &Pubkey) -> bool {
        self.providers.contains(account)
    }

    pub fn insert(&mut self, account: Pubkey) -> Result<()> {
        require!(!self.contains(&account), ErrorCode::AlreadyAllowlisted);
        require!(
            self.providers.len() < MAX_ALLOWLIST,
            ErrorCode::AllowlistFull
        );
        self.providers.push(account);
        Ok(())
    }

    pub fn remove(&mut self, account: &Pubkey) -> Result<()> {
        let index = self
            .providers
            .iter()
            .position(|p| p == account)
            .ok_or_else(|| error!(ErrorCode::NotAllowlisted))?;
        self.providers.swap_remove(index);
        Ok(())
    }
}
