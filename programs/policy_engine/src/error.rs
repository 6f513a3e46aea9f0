use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Invalid token account")]
    InvalidTokenAccount,
    #[msg("Invalid program account")]
    InvalidProgramAccount,
    #[msg("Invalid burst authority PDA")]
    InvalidBurstAuthority,
    #[msg("Invalid amount")]
    InvalidAmount,
    #[msg("Invalid bps")]
    InvalidBps,
    #[msg("Math overflow")]
    MathOverflow,
    #[msg("Both price feeds must be configured")]
    MissingPriceFeeds,
    #[msg("Fee bounds must satisfy min <= base <= max")]
    InvalidFeeBounds,
    #[msg("Target range lower tick must be below upper tick")]
    InvalidTargetRange,
    #[msg("Invalid pool geometry")]
    InvalidPoolGeometry,
    #[msg("Insufficient reserve balance")]
    InsufficientReserve,
    #[msg("Liquidity provider is not allowlisted")]
    UnauthorizedLiquidityProvider,
    #[msg("Position tick bounds fall outside the active target range")]
    TargetRangeViolation,
    #[msg("Allowlist is full")]
    AllowlistFull,
    #[msg("Account already allowlisted")]
    AlreadyAllowlisted,
    #[msg("Account not on the allowlist")]
    NotAllowlisted,
    #[msg("Price feed account is invalid")]
    InvalidFeed,
    #[msg("Price feed is stale or was never published")]
    StaleFeed,
    #[msg("Invalid pool state")]
    InvalidPoolState,
}
