pub const BPS_DENOM: u64 = 10_000;

/// Fees are expressed in ppm (hundredths of a bps), 1e6 denominator.
pub const FEE_DENOM: u32 = 1_000_000;

/// Prices from both feeds are rescaled to this fixed-point scale before any
/// comparison, regardless of the feed exponent.
pub const PRICE_SCALE_DECIMALS: u32 = 8;

pub const DEFAULT_BASE_FEE: u32 = 3_000;
pub const DEFAULT_MIN_FEE: u32 = 500;
pub const DEFAULT_MAX_FEE: u32 = 50_000;
pub const DEFAULT_RESERVE_CUT_BPS: u16 = 1_000;
pub const DEFAULT_VOLATILITY_THRESHOLD_BPS: u64 = 500;
pub const DEFAULT_DEPEG_THRESHOLD_BPS: u64 = 50;

/// Fee-floor premiums per mode, in ppm.
pub const ALERT_PREMIUM: u32 = 200;
pub const CRISIS_PREMIUM: u32 = 1_000;
/// Extra premium while a JIT burst window is active.
pub const JIT_ACTIVE_PREMIUM: u32 = 100;

pub const MAX_ORACLE_STALENESS_SECS: i64 = 60;

pub const MAX_ALLOWLIST: usize = 64;
