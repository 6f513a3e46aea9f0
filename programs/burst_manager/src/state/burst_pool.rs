use anchor_lang::prelude::*;

use crate::error::ErrorCode;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace, PartialEq, Eq, Debug)]
pub enum BurstStatus {
    Idle,
    Active,
}

/// The one burst a pool may have in flight. Meaningful only while the pool
/// status is `Active`; settlement zeroes it.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, InitSpace, PartialEq, Eq, Debug)]
pub struct BurstRecord {
    pub position_id: u64,
    pub funder: Pubkey,
    pub liquidity: u64,
    pub amount0: u64,
    pub amount1: u64,
    pub expiry_ts: i64,
}

impl BurstRecord {
    pub fn cleared() -> Self {
        Self {
            position_id: 0,
            funder: Pubkey::default(),
            liquidity: 0,
            amount0: 0,
            amount1: 0,
            expiry_ts: 0,
        }
    }
}

/// Per-pool burst geometry, custody vaults and the lifecycle state machine.
/// `Idle -> Active` only through `activate`, `Active -> Idle` only through
/// `settle`; invalid transitions are rejected here, not at call sites.
#[account]
#[derive(InitSpace)]
pub struct BurstPool {
    pub pool: Pubkey,
    pub token0_mint: Pubkey,
    pub token1_mint: Pubkey,
    pub vault0: Pubkey,
    pub vault1: Pubkey,
    pub tick_lower: i32,
    pub tick_upper: i32,
    pub max_duration_secs: i64,
    pub reserve_share_bps: u16,
    pub next_position_id: u64,
    pub status: BurstStatus,
    pub record: BurstRecord,
    pub bump: u8,
}

impl BurstPool {
    pub fn is_active(&self) -> bool {
        self.status == BurstStatus::Active
    }

    /// Admission control for the whole burst lifecycle: claims the pool for a
    /// new burst or rejects when one is already in flight.
    pub fn activate(&mut self, record: BurstRecord) -> Result<()> {
        require!(
            self.status == BurstStatus::Idle,
            ErrorCode::BurstAlreadyActive
        );
        self.status = BurstStatus::Active;
        self.record = record;
        self.next_position_id = self
            .next_position_id
            .checked_add(1)
            .ok_or_else(|| error!(ErrorCode::MathOverflow))?;
        Ok(())
    }

    /// Releases the pool, returning the record being settled. A second call
    /// without an intervening `activate` fails, so no record settles twice.
    pub fn settle(&mut self) -> Result<BurstRecord> {
        require!(
            self.status == BurstStatus::Active,
            ErrorCode::BurstNotActive
        );
        let record = self.record;
        self.status = BurstStatus::Idle;
        self.record = BurstRecord::cleared();
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> BurstPool {
        BurstPool {
            pool: Pubkey::new_unique(),
            token0_mint: Pubkey::new_unique(),
            token1_mint: Pubkey::new_unique(),
            vault0: Pubkey::new_unique(),
            vault1: Pubkey::new_unique(),
            tick_lower: -120,
            tick_upper: 120,
            max_duration_secs: 3_600,
            reserve_share_bps: 1_000,
            next_position_id: 1,
            status: BurstStatus::Idle,
            record: BurstRecord::cleared(),
            bump: 255,
        }
    }

    fn record(funder: Pubkey) -> BurstRecord {
        BurstRecord {
            position_id: 1,
            funder,
            liquidity: 500_000,
            amount0: 1_000_000,
            amount1: 1_000_000,
            expiry_ts: 1_700_000_000,
        }
    }

    #[test]
    fn lifecycle_runs_exactly_once() {
        let mut pool = pool();
        let funder = Pubkey::new_unique();

        assert!(!pool.is_active());
        pool.activate(record(funder)).unwrap();
        assert!(pool.is_active());
        assert_eq!(pool.next_position_id, 2);

        let settled = pool.settle().unwrap();
        assert_eq!(settled.funder, funder);
        assert!(!pool.is_active());
        assert_eq!(pool.record, BurstRecord::cleared());
    }

    #[test]
    fn double_activate_is_rejected() {
        let mut pool = pool();
        pool.activate(record(Pubkey::new_unique())).unwrap();
        assert!(pool.activate(record(Pubkey::new_unique())).is_err());
        assert!(pool.is_active());
    }

    #[test]
    fn settle_while_idle_is_rejected() {
        let mut pool = pool();
        assert!(pool.settle().is_err());
        // And again after a full cycle.
        pool.activate(record(Pubkey::new_unique())).unwrap();
        pool.settle().unwrap();
        assert!(pool.settle().is_err());
    }
}
