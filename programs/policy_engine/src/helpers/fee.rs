use crate::{
    constants::{ALERT_PREMIUM, BPS_DENOM, CRISIS_PREMIUM, JIT_ACTIVE_PREMIUM},
    state::{PoolConfig, PoolMode, PoolState},
};

/// A successful oracle round-trip, rescaled to the common 1e8 price scale.
#[derive(Clone, Copy, Debug)]
pub struct OracleReading {
    pub price: i64,
    pub confidence: u64,
}

/// Result of one fee-override evaluation. The instruction handler applies the
/// deltas to the pool state; the math itself stays pure and testable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeeOutcome {
    pub fee: u32,
    pub penalty_delta: u64,
    pub rebate_delta: u64,
    /// `Some` only when both feeds were readable and the depeg math ran.
    pub observed: Option<DepegObservation>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DepegObservation {
    pub depeg_bps: u64,
    pub confidence_bps: u64,
}

impl FeeOutcome {
    fn floor(fee: u32) -> Self {
        Self {
            fee,
            penalty_delta: 0,
            rebate_delta: 0,
            observed: None,
        }
    }
}

pub fn mode_premium(mode: PoolMode) -> u32 {
    match mode {
        PoolMode::Calm => 0,
        PoolMode::Alert => ALERT_PREMIUM,
        PoolMode::Crisis => CRISIS_PREMIUM,
    }
}

/// Floor every override starts from: base fee plus the mode premium, plus the
/// JIT premium while a burst window is open, clamped to the max fee.
pub fn fee_floor(config: &PoolConfig, mode: PoolMode, jit_window_active: bool) -> u32 {
    let mut floor = (config.base_fee as u64).saturating_add(mode_premium(mode) as u64);
    if jit_window_active {
        floor = floor.saturating_add(JIT_ACTIVE_PREMIUM as u64);
    }
    floor.min(config.max_fee as u64) as u32
}

/// `confidence * 10_000 / |price|`; a zero price reads as maximal
/// uncertainty so any volatility threshold rejects it.
pub fn confidence_ratio_bps(price: i64, confidence: u64) -> u64 {
    let magnitude = price.unsigned_abs();
    if magnitude == 0 {
        return u64::MAX;
    }
    ((confidence as u128).saturating_mul(BPS_DENOM as u128) / magnitude as u128)
        .min(u64::MAX as u128) as u64
}

/// `|price0 - price1| * 10_000 / |price1|`, divisor floored to 1.
pub fn depeg_bps(price0: i64, price1: i64) -> u64 {
    let spread = (price0 as i128 - price1 as i128).unsigned_abs();
    let divisor = (price1.unsigned_abs() as u128).max(1);
    (spread.saturating_mul(BPS_DENOM as u128) / divisor).min(u64::MAX as u128) as u64
}

/// The per-trade override algorithm. Any missing oracle reading degrades to
/// the fee floor rather than failing: the hot trading path never reverts on
/// oracle unavailability.
pub fn compute_fee_override(
    config: &PoolConfig,
    state: &PoolState,
    paused: bool,
    reading0: Option<OracleReading>,
    reading1: Option<OracleReading>,
    zero_for_one: bool,
) -> FeeOutcome {
    let floor = fee_floor(config, state.mode, state.jit_window_active);

    if paused || config.price_feed0.is_none() || config.price_feed1.is_none() {
        return FeeOutcome::floor(floor);
    }
    let (reading0, reading1) = match (reading0, reading1) {
        (Some(r0), Some(r1)) => (r0, r1),
        _ => return FeeOutcome::floor(floor),
    };

    let ratio0 = confidence_ratio_bps(reading0.price, reading0.confidence);
    let ratio1 = confidence_ratio_bps(reading1.price, reading1.confidence);
    let confidence_bps = ratio0 / 2 + ratio1 / 2 + (ratio0 % 2 + ratio1 % 2) / 2;
    if confidence_bps > config.volatility_threshold_bps {
        return FeeOutcome::floor(floor);
    }

    let depeg_bps = depeg_bps(reading0.price, reading1.price);
    let observed = Some(DepegObservation {
        depeg_bps,
        confidence_bps,
    });
    if depeg_bps <= config.depeg_threshold_bps {
        return FeeOutcome {
            fee: floor,
            penalty_delta: 0,
            rebate_delta: 0,
            observed,
        };
    }

    // The trade worsens the divergence when the cheaper side is sold further
    // into excess supply.
    let worsening = if reading0.price < reading1.price {
        zero_for_one
    } else {
        !zero_for_one
    };

    if worsening {
        let penalty = (depeg_bps / 10).saturating_mul(100);
        let fee = (floor as u64)
            .saturating_add(penalty)
            .min(config.max_fee as u64) as u32;
        FeeOutcome {
            fee,
            penalty_delta: (fee - floor) as u64,
            rebate_delta: 0,
            observed,
        }
    } else {
        let rebate = (depeg_bps / 20).saturating_mul(50);
        let fee = (floor as u64)
            .saturating_sub(rebate)
            .max(config.min_fee as u64) as u32;
        FeeOutcome {
            fee,
            penalty_delta: 0,
            rebate_delta: (floor - fee) as u64,
            observed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use anchor_lang::prelude::Pubkey;

    const PEG: i64 = 100_000_000;

    fn config() -> PoolConfig {
        PoolConfig {
            price_feed0: Some(Pubkey::new_unique()),
            price_feed1: Some(Pubkey::new_unique()),
            base_fee: 3_000,
            min_fee: 500,
            max_fee: 50_000,
            reserve_cut_bps: DEFAULT_RESERVE_CUT_BPS,
            volatility_threshold_bps: 500,
            depeg_threshold_bps: 50,
            target_range: None,
            enforce_allowlist: false,
        }
    }

    fn state(mode: PoolMode, jit: bool) -> PoolState {
        PoolState {
            mode,
            jit_window_active: jit,
            last_depeg_bps: 0,
            last_confidence_bps: 0,
            last_override_fee: 0,
            reserve_balance: 0,
            total_penalty_fees: 0,
            total_rebates: 0,
        }
    }

    fn reading(price: i64) -> Option<OracleReading> {
        Some(OracleReading {
            price,
            confidence: 0,
        })
    }

    /// Prices 1% apart: depeg 100 bps against a 50 bps threshold.
    fn depegged() -> (Option<OracleReading>, Option<OracleReading>) {
        (reading(PEG - 1_000_000), reading(PEG))
    }

    #[test]
    fn worsening_trade_pays_penalty() {
        let (r0, r1) = depegged();
        // token0 is cheap; selling it further is the worsening direction.
        let out = compute_fee_override(&config(), &state(PoolMode::Calm, false), false, r0, r1, true);
        assert_eq!(out.fee, 4_000);
        assert_eq!(out.penalty_delta, 1_000);
        assert_eq!(out.rebate_delta, 0);
        assert_eq!(out.observed.unwrap().depeg_bps, 100);
    }

    #[test]
    fn narrowing_trade_earns_rebate() {
        let (r0, r1) = depegged();
        let out =
            compute_fee_override(&config(), &state(PoolMode::Calm, false), false, r0, r1, false);
        assert_eq!(out.fee, 2_750);
        assert_eq!(out.rebate_delta, 250);
        assert_eq!(out.penalty_delta, 0);
    }

    #[test]
    fn missing_feeds_fall_back_to_floor() {
        // Alert premium 200 plus JIT premium 100 on a 3000 base.
        let out = compute_fee_override(
            &config(),
            &state(PoolMode::Alert, true),
            false,
            None,
            None,
            true,
        );
        assert_eq!(out.fee, 3_300);
        assert_eq!(out.penalty_delta, 0);
        assert_eq!(out.rebate_delta, 0);
        assert!(out.observed.is_none());
    }

    #[test]
    fn paused_engine_returns_floor_unchanged() {
        let (r0, r1) = depegged();
        let out = compute_fee_override(&config(), &state(PoolMode::Calm, false), true, r0, r1, true);
        assert_eq!(out.fee, 3_000);
        assert!(out.observed.is_none());
    }

    #[test]
    fn noisy_market_returns_floor() {
        let noisy = Some(OracleReading {
            price: PEG,
            confidence: 10_000_000, // 1000 bps of the price
        });
        let out = compute_fee_override(
            &config(),
            &state(PoolMode::Calm, false),
            false,
            noisy,
            reading(PEG),
            true,
        );
        assert_eq!(out.fee, 3_000);
        assert_eq!(out.penalty_delta, 0);
    }

    #[test]
    fn depeg_at_threshold_returns_floor_but_records() {
        // Exactly 50 bps apart.
        let out = compute_fee_override(
            &config(),
            &state(PoolMode::Calm, false),
            false,
            reading(PEG - 500_000),
            reading(PEG),
            true,
        );
        assert_eq!(out.fee, 3_000);
        assert_eq!(out.observed.unwrap().depeg_bps, 50);
        assert_eq!(out.penalty_delta, 0);
        assert_eq!(out.rebate_delta, 0);
    }

    #[test]
    fn fee_stays_within_bounds() {
        let cfg = config();
        for spread_bps in [60, 100, 500, 2_000, 9_000] {
            let r0 = reading(PEG - spread_bps * PEG / 10_000);
            let r1 = reading(PEG);
            for worsening in [true, false] {
                let out = compute_fee_override(
                    &cfg,
                    &state(PoolMode::Calm, false),
                    false,
                    r0,
                    r1,
                    worsening,
                );
                assert!(out.fee >= cfg.min_fee && out.fee <= cfg.max_fee);
            }
        }
    }

    #[test]
    fn penalty_is_monotone_in_depeg() {
        let cfg = config();
        let mut last_fee = 0;
        for spread_bps in [60, 100, 200, 400, 800] {
            let out = compute_fee_override(
                &cfg,
                &state(PoolMode::Calm, false),
                false,
                reading(PEG - spread_bps * PEG / 10_000),
                reading(PEG),
                true,
            );
            assert!(out.fee >= last_fee);
            last_fee = out.fee;
        }
    }

    #[test]
    fn rebate_is_monotone_and_floored() {
        let cfg = config();
        let mut last_fee = u32::MAX;
        for spread_bps in [60, 100, 200, 400, 800, 5_000] {
            let out = compute_fee_override(
                &cfg,
                &state(PoolMode::Calm, false),
                false,
                reading(PEG - spread_bps * PEG / 10_000),
                reading(PEG),
                false,
            );
            assert!(out.fee <= last_fee);
            assert!(out.fee >= cfg.min_fee);
            last_fee = out.fee;
        }
        assert_eq!(last_fee, cfg.min_fee);
    }

    #[test]
    fn worsening_direction_follows_cheap_side() {
        let cfg = config();
        // token1 cheap: selling token1 (one-for-zero) worsens.
        let out = compute_fee_override(
            &cfg,
            &state(PoolMode::Calm, false),
            false,
            reading(PEG),
            reading(PEG - 1_000_000),
            false,
        );
        assert!(out.penalty_delta > 0);
    }

    #[test]
    fn floor_clamps_to_max_fee() {
        let mut cfg = config();
        cfg.base_fee = 49_950;
        cfg.max_fee = 50_000;
        assert_eq!(fee_floor(&cfg, PoolMode::Crisis, true), 50_000);
    }

    #[test]
    fn zero_price_is_maximal_uncertainty() {
        assert_eq!(confidence_ratio_bps(0, 1), u64::MAX);
        assert_eq!(confidence_ratio_bps(PEG, 0), 0);
        assert_eq!(confidence_ratio_bps(PEG, PEG as u64 / 100), 100);
    }

    #[test]
    fn depeg_divisor_floors_at_one() {
        assert_eq!(depeg_bps(5, 0), 50_000);
        assert_eq!(depeg_bps(PEG, PEG), 0);
    }
}
