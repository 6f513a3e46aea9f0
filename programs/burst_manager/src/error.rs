use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Invalid token account")]
    InvalidTokenAccount,
    #[msg("Invalid program account")]
    InvalidProgramAccount,
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Invalid bps")]
    InvalidBps,
    #[msg("Math overflow")]
    MathOverflow,
    #[msg("Burst tick bounds are invalid")]
    InvalidPoolGeometry,
    #[msg("A burst is already active for this pool")]
    BurstAlreadyActive,
    #[msg("No active burst to settle")]
    BurstNotActive,
    #[msg("Only an authorized settler may settle before expiry")]
    SettlementNotDue,
    #[msg("Burst proceeds below the requested minimum")]
    SlippageExceeded,
    #[msg("Flash principal plus premium was not repaid")]
    InsufficientRepayment,
    #[msg("Policy engine is paused")]
    EnginePaused,
    #[msg("Lender vault has not delegated to the burst authority")]
    MissingDelegate,
    #[msg("Invalid pool state")]
    InvalidPoolState,
}
