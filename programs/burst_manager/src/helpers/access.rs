use anchor_lang::prelude::*;

use crate::{error::ErrorCode, state::ManagerConfig};

pub fn require_admin(signer: &Signer<'_>, config: &Account<ManagerConfig>) -> Result<()> {
    require_keys_eq!(signer.key(), config.admin, ErrorCode::Unauthorized);
    Ok(())
}

pub fn require_keeper(signer: &Signer<'_>, config: &Account<ManagerConfig>) -> Result<()> {
    require!(
        signer.key() == config.keeper || signer.key() == config.admin,
        ErrorCode::Unauthorized
    );
    Ok(())
}

pub fn is_settler(signer: &Pubkey, config: &ManagerConfig) -> bool {
    *signer == config.keeper || *signer == config.admin
}
