use anchor_lang::prelude::*;

use crate::{
    constants::{BPS_DENOM, FEE_DENOM},
    error::ErrorCode,
};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace, PartialEq, Eq, Debug)]
pub enum PoolMode {
    Calm,
    Alert,
    Crisis,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace, PartialEq, Eq, Debug)]
pub struct TickRange {
    pub lower: i32,
    pub upper: i32,
}

impl TickRange {
    pub fn validate(&self) -> Result<()> {
        require!(self.lower < self.upper, ErrorCode::InvalidTargetRange);
        Ok(())
    }

    pub fn contains(&self, lower: i32, upper: i32) -> bool {
        lower >= self.lower && upper <= self.upper
    }
}

/// Per-pool tunables. Feeds stay `None` until the first `configure_pool`
/// supplies them; every other field is resolved to a default at pool creation.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace)]
pub struct PoolConfig {
    pub price_feed0: Option<Pubkey>,
    pub price_feed1: Option<Pubkey>,
    pub base_fee: u32,
    pub min_fee: u32,
    pub max_fee: u32,
    pub reserve_cut_bps: u16,
    pub volatility_threshold_bps: u64,
    pub depeg_threshold_bps: u64,
    pub target_range: Option<TickRange>,
    pub enforce_allowlist: bool,
}

impl PoolConfig {
    pub fn validate(&self) -> Result<()> {
        require!(self.min_fee <= self.base_fee, ErrorCode::InvalidFeeBounds);
        require!(self.base_fee <= self.max_fee, ErrorCode::InvalidFeeBounds);
        require!(self.max_fee <= FEE_DENOM, ErrorCode::InvalidFeeBounds);
        require!(
            self.reserve_cut_bps as u64 <= BPS_DENOM,
            ErrorCode::InvalidBps
        );
        require!(
            self.volatility_threshold_bps <= BPS_DENOM,
            ErrorCode::InvalidBps
        );
        require!(self.depeg_threshold_bps <= BPS_DENOM, ErrorCode::InvalidBps);
        if let Some(range) = self.target_range {
            range.validate()?;
        }
        Ok(())
    }
}

/// Merge-update parameters: `None` keeps the stored value. The target range
/// has its own set/clear instructions and is deliberately absent here, so
/// "leave unchanged" and "clear" never collide.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace)]
pub struct PoolConfigParams {
    pub price_feed0: Option<Pubkey>,
    pub price_feed1: Option<Pubkey>,
    pub base_fee: Option<u32>,
    pub min_fee: Option<u32>,
    pub max_fee: Option<u32>,
    pub reserve_cut_bps: Option<u16>,
    pub volatility_threshold_bps: Option<u64>,
    pub depeg_threshold_bps: Option<u64>,
    pub enforce_allowlist: Option<bool>,
}

impl PoolConfigParams {
    pub fn apply(&self, config: &mut PoolConfig) -> Result<()> {
        if let Some(feed) = self.price_feed0 {
            config.price_feed0 = Some(feed);
        }
        if let Some(feed) = self.price_feed1 {
            config.price_feed1 = Some(feed);
        }
        if let Some(fee) = self.base_fee {
            config.base_fee = fee;
        }
        if let Some(fee) = self.min_fee {
            config.min_fee = fee;
        }
        if let Some(fee) = self.max_fee {
            config.max_fee = fee;
        }
        if let Some(bps) = self.reserve_cut_bps {
            config.reserve_cut_bps = bps;
        }
        if let Some(bps) = self.volatility_threshold_bps {
            config.volatility_threshold_bps = bps;
        }
        if let Some(bps) = self.depeg_threshold_bps {
            config.depeg_threshold_bps = bps;
        }
        if let Some(enforce) = self.enforce_allowlist {
            config.enforce_allowlist = enforce;
        }

        require!(
            config.price_feed0.is_some() && config.price_feed1.is_some(),
            ErrorCode::MissingPriceFeeds
        );
        config.validate()
    }
}

/// Per-pool runtime state mutated on every trade and by management calls.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace)]
pub struct PoolState {
    pub mode: PoolMode,
    pub jit_window_active: bool,
    pub last_depeg_bps: u64,
    pub last_confidence_bps: u64,
    pub last_override_fee: u32,
    pub reserve_balance: u64,
    pub total_penalty_fees: u64,
    pub total_rebates: u64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy)]
pub struct PoolSnapshot {
    pub config: PoolConfig,
    pub state: PoolState,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;

    fn resolved_config() -> PoolConfig {
        PoolConfig {
            price_feed0: Some(Pubkey::new_unique()),
            price_feed1: Some(Pubkey::new_unique()),
            base_fee: DEFAULT_BASE_FEE,
            min_fee: DEFAULT_MIN_FEE,
            max_fee: DEFAULT_MAX_FEE,
            reserve_cut_bps: DEFAULT_RESERVE_CUT_BPS,
            volatility_threshold_bps: DEFAULT_VOLATILITY_THRESHOLD_BPS,
            depeg_threshold_bps: DEFAULT_DEPEG_THRESHOLD_BPS,
            target_range: None,
            enforce_allowlist: false,
        }
    }

    #[test]
    fn merge_keeps_unset_fields() {
        let mut config = resolved_config();
        let feed0 = config.price_feed0;
        let params = PoolConfigParams {
            price_feed0: None,
            price_feed1: None,
            base_fee: Some(4_000),
            min_fee: None,
            max_fee: None,
            reserve_cut_bps: None,
            volatility_threshold_bps: None,
            depeg_threshold_bps: Some(75),
            enforce_allowlist: None,
        };

        params.apply(&mut config).unwrap();
        assert_eq!(config.base_fee, 4_000);
        assert_eq!(config.depeg_threshold_bps, 75);
        assert_eq!(config.price_feed0, feed0);
        assert_eq!(config.min_fee, DEFAULT_MIN_FEE);
        assert!(!config.enforce_allowlist);
    }

    #[test]
    fn merge_rejects_missing_feeds() {
        let mut config = resolved_config();
        config.price_feed1 = None;
        let params = PoolConfigParams {
            price_feed0: None,
            price_feed1: None,
            base_fee: None,
            min_fee: None,
            max_fee: None,
            reserve_cut_bps: None,
            volatility_threshold_bps: None,
            depeg_threshold_bps: None,
            enforce_allowlist: None,
        };

        assert!(params.apply(&mut config).is_err());
    }

    #[test]
    fn merge_rejects_inverted_fee_bounds() {
        let mut config = resolved_config();
        let params = PoolConfigParams {
            price_feed0: None,
            price_feed1: None,
            base_fee: Some(100),
            min_fee: None,
            max_fee: None,
            reserve_cut_bps: None,
            volatility_threshold_bps: None,
            depeg_threshold_bps: None,
            enforce_allowlist: None,
        };

        // base 100 < min 500.
        assert!(params.apply(&mut config).is_err());
    }

    #[test]
    fn tick_range_validation() {
        assert!(TickRange { lower: -10, upper: 10 }.validate().is_ok());
        assert!(TickRange { lower: 10, upper: 10 }.validate().is_err());
        assert!(TickRange { lower: 11, upper: 10 }.validate().is_err());
        assert!(TickRange { lower: -10, upper: 10 }.contains(-5, 5));
        assert!(!TickRange { lower: -10, upper: 10 }.contains(-15, 5));
    }
}
