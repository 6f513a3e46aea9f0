pub const BPS_DENOM: u64 = 10_000;

/// Premium charged on flash-funded principal, in bps, unless configured.
pub const DEFAULT_FLASH_PREMIUM_BPS: u16 = 9;

pub const BURST_AUTHORITY_SEED: &[u8] = b"burst-authority";
