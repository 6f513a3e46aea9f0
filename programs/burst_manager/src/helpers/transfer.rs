use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::BURST_AUTHORITY_SEED;

/// Transfer signed by the burst-authority PDA; used both for vault payouts
/// and for delegated pulls from a lender vault.
pub fn transfer_with_authority<'info>(
    token_program: &Program<'info, Token>,
    from: &Account<'info, TokenAccount>,
    to: &Account<'info, TokenAccount>,
    burst_authority: &UncheckedAccount<'info>,
    authority_bump: u8,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let seeds: &[&[u8]] = &[BURST_AUTHORITY_SEED, &[authority_bump]];
    let signer_seeds = &[seeds];
    let cpi_accounts = Transfer {
        from: from.to_account_info(),
        to: to.to_account_info(),
        authority: burst_authority.to_account_info(),
    };
    token::transfer(
        CpiContext::new_with_signer(token_program.to_account_info(), cpi_accounts, signer_seeds),
        amount,
    )
}
